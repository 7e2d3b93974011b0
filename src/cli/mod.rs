mod contact;
mod filter;
mod list;
mod open;
mod theme;
mod update;

pub use contact::run_contact;
pub use filter::{run_filter, FilterOptions, FilterResult};
pub use list::{run_list, ProjectInfo, SiteListing};
pub use open::{run_open, OpenedLink};
pub use theme::{run_theme, ThemeAction, ThemeReport};
pub use update::{run_render, run_update};
