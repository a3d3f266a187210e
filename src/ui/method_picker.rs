use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::request::HttpMethod;
use crate::ui::popup::anchored_rect;

/// Drops down below the method badge of the request pane at `anchor`.
pub fn render(frame: &mut Frame, anchor: Rect, state: &AppState) {
    let Some(cursor) = state.active.method_cursor() else {
        return;
    };
    let theme = &state.theme;
    let height = HttpMethod::ALL.len() as u16 + 2;
    let area = anchored_rect(anchor.x + 1, anchor.y + 2, 12, height, frame.area());
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = HttpMethod::ALL
        .iter()
        .enumerate()
        .map(|(i, method)| {
            let mut style = Style::default().fg(theme.method_color(*method));
            let marker = if i == cursor {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                "> "
            } else {
                "  "
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(method.as_str(), style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(" Method ", Style::default().fg(theme.highlight)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
