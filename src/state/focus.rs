#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Request,
    Response,
}

impl Pane {
    /// Two panes, so forward and backward cycling coincide.
    pub fn next(&self) -> Pane {
        match self {
            Pane::Request => Pane::Response,
            Pane::Response => Pane::Request,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestTab {
    #[default]
    Params,
    Auth,
    Headers,
    Body,
}

impl RequestTab {
    pub const ALL: [RequestTab; 4] = [
        RequestTab::Params,
        RequestTab::Auth,
        RequestTab::Headers,
        RequestTab::Body,
    ];

    pub fn next(&self) -> RequestTab {
        match self {
            RequestTab::Params => RequestTab::Auth,
            RequestTab::Auth => RequestTab::Headers,
            RequestTab::Headers => RequestTab::Body,
            RequestTab::Body => RequestTab::Params,
        }
    }

    pub fn prev(&self) -> RequestTab {
        match self {
            RequestTab::Params => RequestTab::Body,
            RequestTab::Auth => RequestTab::Params,
            RequestTab::Headers => RequestTab::Auth,
            RequestTab::Body => RequestTab::Headers,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestTab::Params => "Params",
            RequestTab::Auth => "Auth",
            RequestTab::Headers => "Headers",
            RequestTab::Body => "Body",
        }
    }

    /// Key that jumps straight to this tab.
    pub fn hotkey(&self) -> char {
        match self {
            RequestTab::Params => 'p',
            RequestTab::Auth => 'a',
            RequestTab::Headers => 'r',
            RequestTab::Body => 'b',
        }
    }
}
