mod card_list;
mod filter_list;
mod project_detail;
mod status_bar;
mod tab_strip;

pub use card_list::render_card_list;
pub use filter_list::render_filter_list;
pub use project_detail::render_project_detail;
pub use status_bar::{render_search_bar, render_status_bar};
pub use tab_strip::render_tab_strip;
