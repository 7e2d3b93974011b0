use ratatui::{layout::Rect, prelude::*, widgets::Paragraph};

use crate::tui::colors::Palette;
use crate::tui::state::BrowserState;

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let palette = Palette::for_theme(state.theme);
    let mut parts = Vec::new();

    parts.push(state.route().to_hash());
    parts.push(format!(
        "{}/{}",
        state.card_rows().len(),
        state.engine.catalog().len()
    ));
    if !state.search.text.is_empty() && !state.search.editing {
        parts.push(format!("query: {}", state.search.text));
    }
    if let Some(ref message) = state.status_message {
        parts.push(message.clone());
    }

    let hints = format!("/:search  c:clear  t:{}  ?:help  q:quit", state.theme.toggle());
    let left_part = parts.join(" | ");
    let width = (area.width as usize).saturating_sub(hints.chars().count());
    let status_text = format!("{:width$}{}", left_part, hints, width = width);

    let status = Paragraph::new(status_text)
        .style(Style::default().bg(palette.status_bg).fg(palette.status_fg));

    frame.render_widget(status, area);
}

/// Query input line, shown while the query is being edited
pub fn render_search_bar(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let palette = Palette::for_theme(state.theme);
    let line = Line::from(vec![
        Span::styled("/", Style::default().fg(palette.focus)),
        Span::styled(state.search.text.as_str(), Style::default().fg(palette.text)),
        Span::styled("█", Style::default().fg(palette.focus)),
        Span::styled(
            "  Enter:keep  Esc:clear",
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
