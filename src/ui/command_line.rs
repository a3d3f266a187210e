use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::ui::popup::cursor_x;

/// Replaces the status bar while the `:` palette is open.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let buffer = state.palette.buffer();

    let mut spans = vec![
        Span::styled(":", Style::default().fg(theme.accent)),
        Span::styled(buffer.to_string(), Style::default().fg(theme.text)),
    ];
    if let Some(error) = state.palette.error() {
        spans.push(Span::styled(format!("   {error}"), Style::default().fg(theme.error)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    frame.set_cursor_position(Position {
        x: cursor_x(area, 1 + buffer.chars().count()),
        y: area.y,
    });
}
