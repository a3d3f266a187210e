use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::app_state::AppState;
use crate::state::picker::{AddKind, PickerMode, PickerRow};
use crate::state::request::ResourceTree;
use crate::state::rows::RowRef;
use crate::state::theme::Theme;
use crate::ui::popup::{centered_rect, cursor_x};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let popup_area = centered_rect(80, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(" Folders ", Style::default().fg(theme.highlight)));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 4 || inner.width < 10 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // prompt
            Constraint::Length(1), // separator
            Constraint::Min(1),    // rows + preview
            Constraint::Length(1), // hints
        ])
        .split(inner);

    render_prompt(frame, chunks[0], state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(theme.dimmed),
        )),
        chunks[1],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_rows(frame, body[0], state);
    render_preview(frame, body[1], state);

    frame.render_widget(
        Paragraph::new(hint_line(state.picker.mode(), theme))
            .style(Style::default().add_modifier(Modifier::DIM)),
        chunks[3],
    );
}

fn badge(label: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD | Modifier::REVERSED),
    )
}

fn render_prompt(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let picker = &state.picker;
    let tree = &state.tree;

    let (line, cursor_col) = match picker.mode() {
        PickerMode::Normal | PickerMode::Insert => {
            let insert = picker.mode() == PickerMode::Insert;
            let label = if insert { "INSERT" } else { "NORMAL" };
            let query = picker.query();
            let query_span = if query.is_empty() && !insert {
                Span::styled("press i to search", Style::default().fg(theme.text_muted))
            } else {
                Span::styled(query.to_string(), Style::default().fg(theme.text))
            };
            let prefix = label.len() + 2 + 3;
            let line = Line::from(vec![
                badge(label, theme),
                Span::styled(" / ", Style::default().fg(theme.accent)),
                query_span,
            ]);
            (line, insert.then(|| prefix + query.chars().count()))
        }
        PickerMode::Adding(kind) => {
            let label = match kind {
                AddKind::Folder => "New folder: ".to_string(),
                AddKind::Request => {
                    let folder = picker
                        .current(tree)
                        .and_then(|row| tree.folder(row.folder_index()))
                        .map(|f| f.name.as_str())
                        .unwrap_or("?");
                    format!("New request in {folder}: ")
                }
            };
            let col = label.chars().count() + picker.add_buffer().chars().count();
            let line = Line::from(vec![
                Span::styled(label, Style::default().fg(theme.highlight)),
                Span::styled(picker.add_buffer().to_string(), Style::default().fg(theme.text)),
            ]);
            (line, Some(col))
        }
        PickerMode::ConfirmDelete => {
            let question = match picker.current(tree) {
                Some(row) => delete_question(tree, row),
                None => String::new(),
            };
            let line = Line::from(Span::styled(
                question,
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ));
            (line, None)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
    if let Some(col) = cursor_col {
        frame.set_cursor_position(Position {
            x: cursor_x(area, col),
            y: area.y,
        });
    }
}

fn delete_question(tree: &ResourceTree, row: RowRef) -> String {
    match row {
        RowRef::Folder(fi) => match tree.folder(fi) {
            Some(folder) if folder.requests.is_empty() => format!("Delete folder \"{}\"?", folder.name),
            Some(folder) => format!(
                "Delete folder \"{}\" and its {} request(s)?",
                folder.name,
                folder.requests.len()
            ),
            None => String::new(),
        },
        RowRef::Request(fi, ri) => match tree.request(fi, ri) {
            Some(request) => format!("Delete request \"{}\"?", request.name),
            None => String::new(),
        },
    }
}

fn row_line(view: &PickerRow, tree: &ResourceTree, searching: bool, theme: &Theme) -> Line<'static> {
    let marker = if view.selected { "> " } else { "  " };
    let name_style = if view.selected {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let mut spans = vec![Span::styled(marker, Style::default().fg(theme.accent))];

    match view.row {
        RowRef::Folder(fi) => {
            let Some(folder) = tree.folder(fi) else {
                return Line::default();
            };
            let arrow = if view.expanded { "▾ " } else { "▸ " };
            spans.push(Span::styled(arrow, Style::default().fg(theme.highlight)));
            spans.push(Span::styled(folder.name.clone(), name_style));
            spans.push(Span::styled(
                format!(" ({})", folder.requests.len()),
                Style::default().fg(theme.text_muted),
            ));
        }
        RowRef::Request(fi, ri) => {
            let Some(request) = tree.request(fi, ri) else {
                return Line::default();
            };
            if !searching {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("{:<7}", request.method.as_str()),
                Style::default().fg(theme.method_color(request.method)),
            ));
            spans.push(Span::styled(request.name.clone(), name_style));
            if searching {
                if let Some(folder) = tree.folder(fi) {
                    spans.push(Span::styled(
                        format!("  {}", folder.name),
                        Style::default().fg(theme.text_muted),
                    ));
                }
            }
        }
    }
    Line::from(spans)
}

fn render_rows(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let picker = &state.picker;
    let rows = picker.view(&state.tree);

    if rows.is_empty() {
        let text = if picker.query().is_empty() { "No folders. Press n to add one" } else { "No matches" };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(theme.text_muted))),
            area,
        );
        return;
    }

    // Scroll just enough to keep the cursor on screen.
    let height = area.height as usize;
    let offset = (picker.cursor() + 1).saturating_sub(height);
    let searching = !picker.query().is_empty();
    let lines: Vec<Line> = rows
        .iter()
        .skip(offset)
        .take(height)
        .map(|view| row_line(view, &state.tree, searching, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_preview(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let tree = &state.tree;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.dimmed));

    let muted = |text: String| Line::from(Span::styled(text, Style::default().fg(theme.text_muted)));
    let lines: Vec<Line> = match state.picker.current(tree) {
        None => Vec::new(),
        Some(RowRef::Folder(fi)) => match tree.folder(fi) {
            Some(folder) if folder.requests.is_empty() => vec![muted("Empty folder".into())],
            Some(folder) => folder
                .requests
                .iter()
                .map(|r| {
                    Line::from(vec![
                        Span::styled(format!("{:<7}", r.method.as_str()), Style::default().fg(theme.method_color(r.method))),
                        Span::styled(r.name.clone(), Style::default().fg(theme.text)),
                    ])
                })
                .collect(),
            None => Vec::new(),
        },
        Some(RowRef::Request(fi, ri)) => match tree.request(fi, ri) {
            Some(r) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", r.method.as_str()), Style::default().fg(theme.method_color(r.method)).add_modifier(Modifier::BOLD)),
                        Span::styled(r.url.clone(), Style::default().fg(theme.text)),
                    ]),
                    muted(format!("auth: {}", r.auth.label())),
                ];
                for (title, pairs) in [("Params", &r.params), ("Headers", &r.headers)] {
                    if pairs.is_empty() {
                        continue;
                    }
                    lines.push(Line::raw(""));
                    lines.push(Line::from(Span::styled(title, Style::default().fg(theme.highlight))));
                    lines.extend(pairs.iter().map(|p| muted(format!("{}: {}", p.key, p.value))));
                }
                if !r.body.is_empty() {
                    lines.push(Line::raw(""));
                    lines.push(Line::from(Span::styled("Body", Style::default().fg(theme.highlight))));
                    lines.extend(r.body.lines().map(|l| muted(l.to_string())));
                }
                lines
            }
            None => Vec::new(),
        },
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn hint_line(mode: PickerMode, theme: &Theme) -> Line<'static> {
    let pairs: &[(&str, &str)] = match mode {
        PickerMode::Normal => &[
            ("Enter", " open  "),
            ("i", " search  "),
            ("n", " new  "),
            ("d", " delete  "),
            ("/", " expand all  "),
            ("Esc", " close"),
        ],
        PickerMode::Insert => &[("Enter", " select  "), ("↑↓", " move  "), ("Esc", " normal")],
        PickerMode::Adding(_) => &[("Enter", " create  "), ("Esc", " cancel")],
        PickerMode::ConfirmDelete => &[("y/Enter", " delete  "), ("n/Esc", " cancel")],
    };
    let spans: Vec<Span<'static>> = pairs
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(theme.text)),
                Span::styled(*label, Style::default().fg(theme.text_muted)),
            ]
        })
        .collect();
    Line::from(spans)
}
