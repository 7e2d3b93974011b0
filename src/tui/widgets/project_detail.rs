use ratatui::{
    layout::Rect,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::colors::Palette;
use crate::tui::state::BrowserState;

/// Open project tab, or the highlighted card while browsing the gallery
pub fn render_project_detail(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let palette = Palette::for_theme(state.theme);
    let (title, project) = match state.active_project() {
        Some(project) => (format!(" {} ", state.tabs.active()), Some(project)),
        None => (" Details ".to_string(), state.selected_project()),
    };

    let lines: Vec<Line> = match project {
        Some(project) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    project.title.as_str(),
                    Style::default()
                        .fg(palette.header)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    project.url.as_str(),
                    Style::default().fg(palette.muted),
                )),
                Line::from(""),
            ];
            if !project.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    project.description.as_str(),
                    Style::default().fg(palette.text),
                )));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(palette.styled_tags(&project.tags)));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No project selected",
            Style::default().fg(palette.muted),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false))
                .title(title),
        );

    frame.render_widget(paragraph, area);
}
