use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::colors::Palette;
use super::state::BrowserState;
use super::widgets::{
    render_card_list, render_filter_list, render_project_detail, render_search_bar,
    render_status_bar, render_tab_strip,
};
use crate::logging::log_file_path;

/// Main render function
pub fn render(frame: &mut Frame, state: &mut BrowserState) {
    let size = frame.area();
    let palette = Palette::for_theme(state.theme);
    frame.render_widget(
        Block::default().style(Style::default().fg(palette.text)),
        size,
    );

    let tab_height = if state.tabs.strip_visible() { 1 } else { 0 };
    let search_height = if state.search.editing { 1 } else { 0 };

    // Tab strip, content, query line, status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(tab_height),
            Constraint::Min(0),
            Constraint::Length(search_height),
            Constraint::Length(1),
        ])
        .split(size);

    // Filters | cards | details
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[1]);

    if state.tabs.strip_visible() {
        render_tab_strip(frame, main_chunks[0], state);
    }
    render_filter_list(frame, content_chunks[0], state);
    render_card_list(frame, content_chunks[1], state);
    render_project_detail(frame, content_chunks[2], state);
    if state.search.editing {
        render_search_bar(frame, main_chunks[2], state);
    }
    render_status_bar(frame, main_chunks[3], state);

    if state.show_help {
        render_help_overlay(frame, size);
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let mut help_text = String::from(
        r#"
  Key Bindings

  Navigation:
    j/↓      Move down
    k/↑      Move up
    Tab      Switch pane
    [ / ]    Previous/next tab
    v        Next view

  Actions:
    Enter    Apply/remove filter
             Open project tab
    /        Search tags
    Esc      Clear search
    c        Clear all filters
    x        Close tab
    t        Toggle theme
    ?        Toggle help
    q        Quit
"#,
    );
    if let Some(path) = log_file_path() {
        help_text.push_str(&format!("\n  Log: {}\n", path.display()));
    }

    let help_width = 46.min(area.width);
    let help_height = 24.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, help_area);

    let help = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    frame.render_widget(help, help_area);
}
