//! Semantic colors for both themes.

use ratatui::prelude::*;

use crate::theme::Theme;

pub const APPLIED_MARK: &str = "✓ ";
pub const UNAPPLIED_MARK: &str = "  ";

/// Colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub focus: Color,
    pub unfocus: Color,
    pub header: Color,
    pub tag: Color,
    pub applied: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
}

const LIGHT: Palette = Palette {
    text: Color::Black,
    muted: Color::DarkGray,
    focus: Color::Blue,
    unfocus: Color::Gray,
    header: Color::Black,
    tag: Color::Blue,
    applied: Color::Magenta,
    status_bg: Color::Gray,
    status_fg: Color::Black,
    highlight_fg: Color::White,
};

const DARK: Palette = Palette {
    text: Color::White,
    muted: Color::DarkGray,
    focus: Color::Cyan,
    unfocus: Color::DarkGray,
    header: Color::White,
    tag: Color::LightBlue,
    applied: Color::Yellow,
    status_bg: Color::DarkGray,
    status_fg: Color::White,
    highlight_fg: Color::Black,
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.focus } else { self.unfocus })
    }

    pub fn highlight(&self, focused: bool) -> Style {
        if focused {
            Style::default().bg(self.focus).fg(self.highlight_fg)
        } else {
            Style::default().bg(self.unfocus).fg(self.highlight_fg)
        }
    }

    /// Tag rendered with a `#` prefix
    pub fn styled_tag(&self, tag: &str) -> Span<'static> {
        Span::styled(format!("#{}", tag), Style::default().fg(self.tag))
    }

    pub fn styled_tags(&self, tags: &[String]) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(self.styled_tag(tag));
        }
        spans
    }
}
