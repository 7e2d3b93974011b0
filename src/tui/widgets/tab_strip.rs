use ratatui::{layout::Rect, prelude::*, widgets::Tabs};

use crate::nav::GALLERY_TAB;
use crate::tui::colors::Palette;
use crate::tui::state::BrowserState;

/// Open tabs, gallery first. Only drawn once a project tab is open.
pub fn render_tab_strip(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let palette = Palette::for_theme(state.theme);

    let titles: Vec<String> = state
        .tabs
        .opened()
        .iter()
        .map(|tab| {
            if tab == GALLERY_TAB {
                "All projects".to_string()
            } else {
                tab.clone()
            }
        })
        .collect();
    let selected = state
        .tabs
        .opened()
        .iter()
        .position(|t| t == state.tabs.active())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ");

    frame.render_widget(tabs, area);
}
