use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::focus::Pane;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let pane_label = match state.focus {
        Pane::Request => "REQUEST",
        Pane::Response => "RESPONSE",
    };

    let pane_span = Span::styled(
        format!(" {} ", pane_label),
        Style::default()
            .fg(Color::Black)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let tail = match &state.status {
        Some(message) => Span::styled(format!("  {message}"), Style::default().fg(theme.text)),
        None => Span::styled(
            "  f:folders · e:url · m:method · s:send · :command · ?:help · q:quit",
            Style::default().fg(theme.text_muted),
        ),
    };

    let line = Line::from(vec![pane_span, tail]);
    frame.render_widget(Paragraph::new(line), area);
}
