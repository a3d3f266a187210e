pub mod active_request;
pub mod app_state;
pub mod command;
pub mod focus;
pub mod input;
pub mod picker;
pub mod request;
pub mod rows;
pub mod seed;
pub mod theme;
