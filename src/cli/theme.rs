use anyhow::Result;
use tracing::instrument;

use crate::theme::{system_prefers_dark, Theme, ThemeMessage, ThemeStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(Theme),
}

#[derive(Debug)]
pub struct ThemeReport {
    pub theme: Theme,
    /// True when the action wrote a new preference
    pub changed: bool,
    /// Broadcast to open project frames after a change
    pub message: Option<ThemeMessage>,
}

/// Show or change the saved theme preference
#[instrument(skip(store))]
pub fn run_theme(store: &ThemeStore, action: ThemeAction) -> Result<ThemeReport> {
    let current = Theme::resolve(store.load(), system_prefers_dark());
    let theme = match action {
        ThemeAction::Show => {
            return Ok(ThemeReport {
                theme: current,
                changed: false,
                message: None,
            })
        }
        ThemeAction::Toggle => current.toggle(),
        ThemeAction::Set(theme) => theme,
    };

    store.save(theme)?;
    Ok(ThemeReport {
        theme,
        changed: theme != current,
        message: Some(ThemeMessage::update(theme)),
    })
}
