use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::state::app_state::{AppState, Overlay};
use super::{command_line, help, method_picker, picker, request_pane, response_pane, status_bar};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Split off status bar at bottom
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = vertical[0];
    let footer_area = vertical[1];

    let direction = if state.split_vertical { Direction::Horizontal } else { Direction::Vertical };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_area);

    request_pane::render(frame, panes[0], state);
    response_pane::render(frame, panes[1], state);

    if state.palette.is_open() {
        command_line::render(frame, footer_area, state);
    } else {
        status_bar::render(frame, footer_area, state);
    }

    // Popups, innermost last
    method_picker::render(frame, panes[0], state);
    if state.picker.is_open() {
        picker::render(frame, area, state);
    }
    match state.overlay {
        Overlay::None => {}
        Overlay::Keybindings => help::render_keybindings(frame, area, state),
        Overlay::Commands => help::render_commands(frame, area, state),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::UiConfig;
    use crate::search::SubsequenceMatcher;
    use crate::state::input::Key;
    use crate::state::seed::seed_tree;

    fn state() -> AppState {
        AppState::new(seed_tree(), Box::new(SubsequenceMatcher), &UiConfig::default())
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_state_shows_hint() {
        let text = draw(&state());
        assert!(text.contains("No request selected"));
        assert!(text.contains("REQUEST"));
        assert!(text.contains("No response yet"));
    }

    #[test]
    fn test_picker_lists_folders() {
        let mut s = state();
        s.picker.open();
        let text = draw(&s);
        assert!(text.contains("Folders"));
        assert!(text.contains("Examples"));
        assert!(text.contains("GitHub (3)"));
        assert!(text.contains("NORMAL"));
    }

    #[test]
    fn test_loaded_request_renders_url_and_params() {
        let mut s = state();
        assert!(s.active.load(&s.tree, 0, 0));
        let text = draw(&s);
        assert!(text.contains("https://httpbin.org/get"));
        assert!(text.contains("Httpbin GET"));
        assert!(text.contains("foo: bar"));
    }

    #[test]
    fn test_stacked_orientation_and_palette_error() {
        let mut s = state();
        s.split_vertical = false;
        s.palette.open();
        for c in "bogus".chars() {
            s.palette.handle_key(Key::Char(c));
        }
        s.palette.handle_key(Key::Enter);
        let text = draw(&s);
        assert!(text.contains(":bogus"));
        assert!(text.contains("unknown command: bogus"));
    }

    #[test]
    fn test_help_overlays_render() {
        let mut s = state();
        s.overlay = Overlay::Keybindings;
        assert!(draw(&s).contains("Keybindings"));
        s.overlay = Overlay::Commands;
        let text = draw(&s);
        assert!(text.contains("theme <name>"));
        assert!(text.contains("tokyonight"));
    }

    #[test]
    fn test_method_picker_renders_over_request() {
        let mut s = state();
        assert!(s.active.load(&s.tree, 1, 0));
        s.active.open_method_picker();
        let text = draw(&s);
        assert!(text.contains("Method"));
        assert!(text.contains("PATCH"));
    }

    #[test]
    fn test_overlong_input_keeps_cursor_on_screen() {
        let mut s = state();
        s.palette.open();
        for _ in 0..70_000 {
            s.palette.handle_key(Key::Char('x'));
        }
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &s)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!((cursor.x, cursor.y), (99, 29));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut s = state();
        s.picker.open();
        s.overlay = Overlay::Commands;
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal.draw(|frame| render(frame, &s)).unwrap();
    }
}
