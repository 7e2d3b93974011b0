//! Single-page navigation: hash routes, content views and project tabs.

mod route;
mod tabs;

pub use route::{repo_name_from_url, Route};
pub use tabs::{TabSet, GALLERY_TAB};

use tracing::debug;

/// View shown when the URL names none
pub const DEFAULT_VIEW: &str = "project-view";

/// Tracks which content view is active.
#[derive(Debug, Clone)]
pub struct Navigator {
    views: Vec<String>,
    current: String,
}

impl Navigator {
    pub fn new(views: Vec<String>) -> Self {
        Self::with_default_view(views, DEFAULT_VIEW)
    }

    /// Start on `default_view`, or on the first view if it is not one of `views`.
    pub fn with_default_view(views: Vec<String>, default_view: &str) -> Self {
        let current = if views.iter().any(|v| v == default_view) {
            default_view.to_string()
        } else {
            views.first().cloned().unwrap_or_else(|| default_view.to_string())
        };
        Self { views, current }
    }

    /// Start from the address bar; unknown views keep the default.
    pub fn from_hash(views: Vec<String>, hash: &str) -> Self {
        let mut navigator = Self::new(views);
        navigator.on_hash_change(hash);
        navigator
    }

    pub fn views(&self) -> &[String] {
        &self.views
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_known(&self, view: &str) -> bool {
        self.views.iter().any(|v| v == view)
    }

    /// Switch to a view from a navigation link. Returns the new route, or
    /// `None` if the view is unknown or already active.
    pub fn navigate(&mut self, view: &str) -> Option<Route> {
        if !self.is_known(view) || self.current == view {
            return None;
        }
        self.current = view.to_string();
        debug!(view, "navigated");
        Some(Route::new(view))
    }

    /// Follow a hash change. Returns true if the view is known.
    pub fn on_hash_change(&mut self, hash: &str) -> bool {
        match Route::parse(hash) {
            Some(route) if self.is_known(&route.view) => {
                self.current = route.view;
                true
            }
            _ => false,
        }
    }
}
