pub mod command_line;
pub mod help;
pub mod layout;
pub mod method_picker;
pub mod picker;
pub mod popup;
pub mod request_pane;
pub mod response_pane;
pub mod status_bar;
