mod app;
pub mod colors;
pub mod state;
mod ui;
pub mod widgets;

pub use app::run_browser;
