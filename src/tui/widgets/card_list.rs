use ratatui::{
    layout::Rect,
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::tui::colors::Palette;
use crate::tui::state::{BrowserState, Focus};

pub fn render_card_list(frame: &mut Frame, area: Rect, state: &mut BrowserState) {
    let palette = Palette::for_theme(state.theme);
    let is_focused = state.focus == Focus::Cards;

    let rows = state.card_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .filter_map(|&card| state.project_for(card))
        .map(|project| {
            let mut tag_line = vec![Span::raw("  ")];
            tag_line.extend(palette.styled_tags(&project.tags));
            ListItem::new(vec![
                Line::from(Span::styled(
                    project.title.clone(),
                    Style::default().fg(palette.text),
                )),
                Line::from(tag_line),
            ])
        })
        .collect();

    let title = format!(
        " Projects ({}/{}) ",
        rows.len(),
        state.engine.catalog().len()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(is_focused))
                .title(title),
        )
        .highlight_style(palette.highlight(is_focused));

    frame.render_stateful_widget(list, area, &mut state.cards.list_state);
}
