use crate::config::Config;
use crate::event::{Event, to_key};
use crate::search::matcher_from_config;
use crate::state::app_state::{AppState, Overlay};
use crate::state::command::Command;
use crate::state::focus::{Pane, RequestTab};
use crate::state::input::Key;
use crate::state::picker::PickerAction;
use crate::state::seed::seed_tree;
use crate::state::theme;

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let matcher = matcher_from_config(&config.search);
        Self::from_state(AppState::new(seed_tree(), matcher, &config.ui))
    }

    pub fn from_state(state: AppState) -> Self {
        Self { state }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(key) = to_key(&key) {
                    self.state.dirty = true;
                    self.handle_key(key);
                }
            }
            // Terminal resize always requires a full redraw.
            Event::Resize => self.state.dirty = true,
        }
    }

    /// Routes a key to the innermost open layer. Only one layer sees each key.
    pub fn handle_key(&mut self, key: Key) {
        let state = &mut self.state;
        match state.overlay {
            Overlay::Keybindings => {
                if matches!(key, Key::Char('?' | 'q') | Key::Esc) {
                    state.overlay = Overlay::None;
                }
                return;
            }
            Overlay::Commands => {
                if matches!(key, Key::Char('q') | Key::Esc) {
                    state.overlay = Overlay::None;
                }
                return;
            }
            Overlay::None => {}
        }

        if state.active.is_editing_url() {
            state.active.handle_url_key(&mut state.tree, key);
            return;
        }
        if state.active.method_cursor().is_some() {
            state.active.handle_method_key(&mut state.tree, key);
            return;
        }
        if state.picker.is_open() {
            let action = state.picker.handle_key(&mut state.tree, key);
            self.apply_picker_action(action);
            return;
        }
        if state.palette.is_open() {
            if let Some(command) = state.palette.handle_key(key) {
                self.apply_command(command);
            }
            return;
        }
        self.handle_global_key(key);
    }

    fn apply_picker_action(&mut self, action: PickerAction) {
        let state = &mut self.state;
        match action {
            PickerAction::None | PickerAction::Close => {}
            PickerAction::Select { folder, request } => {
                if state.active.load(&state.tree, folder, request) {
                    state.focus = Pane::Request;
                    tracing::debug!(folder, request, "request loaded");
                }
            }
            PickerAction::Removed(row) => state.active.row_removed(row),
        }
    }

    fn apply_command(&mut self, command: Command) {
        let state = &mut self.state;
        match command {
            Command::Orient => state.split_vertical = !state.split_vertical,
            Command::Theme(name) => {
                if let Some(theme) = theme::lookup(name) {
                    state.theme = *theme;
                    tracing::info!(theme = name, "theme changed");
                }
            }
            Command::Help => state.overlay = Overlay::Commands,
        }
    }

    fn handle_global_key(&mut self, key: Key) {
        let state = &mut self.state;
        state.status = None;
        let on_request = state.focus == Pane::Request;
        match key {
            Key::Char('q') | Key::Ctrl('c') => state.should_quit = true,
            Key::Char('?') => state.overlay = Overlay::Keybindings,
            Key::Char(':') => state.palette.open(),
            Key::Char('f') => state.picker.open(),
            Key::Char('s') => self.send_request(),
            Key::Tab | Key::BackTab => state.focus = state.focus.next(),
            Key::Char('e') if on_request && state.active.request().is_some() => {
                state.active.begin_url_edit();
            }
            Key::Char('m') if on_request && state.active.request().is_some() => {
                state.active.open_method_picker();
            }
            Key::Char('h') | Key::Left if on_request => state.request_tab = state.request_tab.prev(),
            Key::Char('l') | Key::Right if on_request => state.request_tab = state.request_tab.next(),
            Key::Char(c) if on_request => {
                if let Some(tab) = RequestTab::ALL.iter().find(|tab| tab.hotkey() == c) {
                    state.request_tab = *tab;
                }
            }
            _ => {}
        }
    }

    /// Placeholder until an HTTP client lands: logs what would be sent.
    fn send_request(&mut self) {
        let state = &mut self.state;
        match state.active.snapshot() {
            Some(request) => {
                tracing::info!(method = request.method.as_str(), url = %request.url, "send requested");
                state.status = Some(format!("{} {}: sending is not implemented yet", request.method.as_str(), request.url));
            }
            None => state.status = Some("no request selected".to_string()),
        }
    }
}
