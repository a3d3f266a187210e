use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::app_state::AppState;
use crate::state::focus::{Pane, RequestTab};
use crate::state::request::{Auth, KeyValuePair, Request};
use crate::state::theme::Theme;
use crate::ui::popup::cursor_x;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Pane::Request;
    let border_color = if focused { theme.accent } else { theme.dimmed };

    let title = match state.active.request() {
        Some(request) => format!(" Request · {} ", request.name),
        None => " Request ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(theme.highlight)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 3 {
        return;
    }

    let Some(request) = state.active.request() else {
        let hint = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled("No request selected", Style::default().fg(state.theme.text))),
            Line::from(vec![
                Span::styled("press ", Style::default().fg(theme.text_muted)),
                Span::styled("f", Style::default().fg(theme.highlight)),
                Span::styled(" to open folders", Style::default().fg(theme.text_muted)),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // method + url
            Constraint::Length(1), // separator
            Constraint::Length(1), // tab bar
            Constraint::Min(0),    // tab content
        ])
        .split(inner);

    render_url_bar(frame, chunks[0], state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(theme.dimmed),
        )),
        chunks[1],
    );
    render_tab_bar(frame, chunks[2], state);
    frame.render_widget(
        Paragraph::new(tab_lines(request, state.request_tab, theme)).wrap(Wrap { trim: false }),
        chunks[3],
    );
}

fn render_url_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let method = state.active.method();
    let badge = format!("{:<7}", method.as_str());
    let url = state.active.url_input();
    let editing = state.active.is_editing_url();

    let url_span = if url.is_empty() && !editing {
        Span::styled("Enter URL (e)", Style::default().fg(theme.text_muted))
    } else {
        let style = if editing {
            Style::default().fg(theme.text).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text)
        };
        Span::styled(url.to_string(), style)
    };
    let line = Line::from(vec![
        Span::styled(badge, Style::default().fg(theme.method_color(method)).add_modifier(Modifier::BOLD)),
        url_span,
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if editing {
        frame.set_cursor_position(Position {
            x: cursor_x(area, 7 + url.chars().count()),
            y: area.y,
        });
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, tab) in RequestTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *tab == state.request_tab {
            Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(tab.label(), style));
        spans.push(Span::styled(format!("({})", tab.hotkey()), Style::default().fg(theme.dimmed)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn tab_lines(request: &Request, tab: RequestTab, theme: &Theme) -> Vec<Line<'static>> {
    match tab {
        RequestTab::Params => pair_lines(&request.params, "No query params", theme),
        RequestTab::Headers => pair_lines(&request.headers, "No headers", theme),
        RequestTab::Auth => auth_lines(&request.auth, theme),
        RequestTab::Body => {
            if request.body.is_empty() {
                vec![muted("No body", theme)]
            } else {
                request
                    .body
                    .lines()
                    .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(theme.text))))
                    .collect()
            }
        }
    }
}

fn muted(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(theme.text_muted)))
}

fn field(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.highlight)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

fn pair_lines(pairs: &[KeyValuePair], empty: &str, theme: &Theme) -> Vec<Line<'static>> {
    if pairs.is_empty() {
        return vec![muted(empty, theme)];
    }
    pairs.iter().map(|pair| field(&pair.key, pair.value.clone(), theme)).collect()
}

fn auth_lines(auth: &Auth, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![field("Type", auth.label().to_string(), theme)];
    match auth {
        Auth::None => lines.push(muted("This request does not use authorization", theme)),
        Auth::Bearer { token } => lines.push(field("Token", token.clone(), theme)),
        Auth::Basic { username, password } => {
            lines.push(field("Username", username.clone(), theme));
            lines.push(field("Password", "•".repeat(password.chars().count()), theme));
        }
        Auth::ApiKey { key, value } => {
            lines.push(field("Key", key.clone(), theme));
            lines.push(field("Value", value.clone(), theme));
        }
    }
    lines
}
