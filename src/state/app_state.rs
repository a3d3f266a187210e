use super::{
    active_request::ActiveRequest,
    command::CommandPalette,
    focus::{Pane, RequestTab},
    picker::Picker,
    request::ResourceTree,
    theme::{self, Theme},
};
use crate::config::UiConfig;
use crate::search::Matcher;

/// Which full-screen help overlay (if any) is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Keybindings,
    Commands,
}

/// Everything the UI shows, owned in one place and mutated only by `App`.
#[derive(Debug)]
pub struct AppState {
    pub tree: ResourceTree,
    pub picker: Picker,
    pub palette: CommandPalette,
    pub active: ActiveRequest,
    pub focus: Pane,
    pub request_tab: RequestTab,
    pub theme: Theme,
    /// `true`: request and response side by side; `false`: stacked.
    pub split_vertical: bool,
    pub overlay: Overlay,
    /// One-shot message shown in the status bar until the next key.
    pub status: Option<String>,
    pub should_quit: bool,
    /// Set to `true` whenever visible state changes. The render loop skips
    /// `terminal.draw()` when `false`.
    pub dirty: bool,
}

impl AppState {
    pub fn new(tree: ResourceTree, matcher: Box<dyn Matcher>, ui: &UiConfig) -> Self {
        let theme = match theme::lookup(&ui.theme) {
            Some(t) => *t,
            None => {
                tracing::warn!(theme = %ui.theme, "unknown theme in config, using default");
                Theme::default()
            }
        };
        Self {
            tree,
            picker: Picker::new(matcher),
            palette: CommandPalette::default(),
            active: ActiveRequest::default(),
            focus: Pane::default(),
            request_tab: RequestTab::default(),
            theme,
            split_vertical: ui.split_vertical,
            overlay: Overlay::None,
            status: None,
            should_quit: false,
            dirty: true,
        }
    }
}
