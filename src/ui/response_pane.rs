use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Pane;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Pane::Response;
    let border_color = if focused { theme.accent } else { theme.dimmed };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(" Response ", Style::default().fg(theme.highlight)));

    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled("No response yet", Style::default().fg(theme.text_muted))),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(body, area);
}
