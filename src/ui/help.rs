use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::app_state::AppState;
use crate::state::command::COMMANDS;
use crate::state::theme::{self, Theme};
use crate::ui::popup::centered_rect;

const KEYBINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("f", "open folders"),
            (":", "command line"),
            ("Tab / S-Tab", "switch pane"),
            ("s", "send request"),
            ("?", "toggle this help"),
            ("q / C-c", "quit"),
        ],
    ),
    (
        "Request pane",
        &[
            ("e", "edit URL (Enter save, Esc cancel)"),
            ("m", "choose method"),
            ("h l ← →", "previous / next tab"),
            ("p a r b", "params / auth / headers / body"),
        ],
    ),
    (
        "Folders",
        &[
            ("j k ↑ ↓", "move"),
            ("Enter", "expand folder / open request"),
            ("/", "expand or collapse all"),
            ("i", "search (Esc back to normal)"),
            ("n", "new folder, or request when a folder is open"),
            ("d", "delete (y/Enter confirm, n/Esc cancel)"),
            ("Esc", "clear search, then close"),
        ],
    ),
];

fn key_line(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Style::default().fg(theme.accent)),
        Span::styled(desc.to_string(), Style::default().fg(theme.text)),
    ])
}

fn section(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
    ))
}

fn render_popup(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, theme: &Theme) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(format!(" {title} "), Style::default().fg(theme.highlight)))
        .title_bottom(Span::styled(" q/Esc close ", Style::default().fg(theme.text_muted)));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), popup_area);
}

pub fn render_keybindings(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut lines = Vec::new();
    for (i, (title, keys)) in KEYBINDINGS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(section(title, theme));
        lines.extend(keys.iter().map(|(key, desc)| key_line(key, desc, theme)));
    }
    render_popup(frame, area, "Keybindings", lines, theme);
}

pub fn render_commands(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut lines = vec![section("Commands", theme)];
    lines.extend(COMMANDS.iter().map(|info| key_line(info.usage, info.summary, theme)));
    lines.push(Line::raw(""));
    lines.push(section("Themes", theme));
    let names: Vec<&str> = theme::names().collect();
    lines.push(Line::from(Span::styled(
        format!("  {}", names.join(", ")),
        Style::default().fg(theme.text),
    )));
    render_popup(frame, area, "Command Help", lines, theme);
}
