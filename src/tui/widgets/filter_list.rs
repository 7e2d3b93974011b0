use ratatui::{
    layout::Rect,
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::gallery::FilterState;
use crate::tui::colors::{Palette, APPLIED_MARK, UNAPPLIED_MARK};
use crate::tui::state::{BrowserState, Focus};

pub fn render_filter_list(frame: &mut Frame, area: Rect, state: &mut BrowserState) {
    let palette = Palette::for_theme(state.theme);
    let is_focused = state.focus == Focus::Filters;
    let catalog = state.engine.catalog();

    let rows = state.filter_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|&filter| {
            let label = &catalog.filter(filter).label;
            let count = catalog.cards_of(filter).len();
            let (mark, style) = match state.engine.filter_state(filter) {
                FilterState::Applied { .. } => (
                    APPLIED_MARK,
                    Style::default()
                        .fg(palette.applied)
                        .add_modifier(Modifier::BOLD),
                ),
                FilterState::Unapplied => (UNAPPLIED_MARK, Style::default().fg(palette.text)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", mark, label), style),
                Span::styled(format!(" ({})", count), Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    let applied = state.engine.applied().len();
    let title = if applied > 0 {
        format!(" Filters ({} applied) ", applied)
    } else {
        " Filters ".to_string()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(is_focused))
                .title(title),
        )
        .highlight_style(palette.highlight(is_focused));

    frame.render_stateful_widget(list, area, &mut state.filters.list_state);
}
