mod filters;
mod navigation;
mod search;

use anyhow::Result;
use ratatui::widgets::ListState;
use tracing::{debug, warn};

use crate::gallery::{CardId, FilterEngine, FilterId};
use crate::nav::{Navigator, Route, TabSet};
use crate::site::{Project, Site};
use crate::theme::{system_prefers_dark, Theme, ThemeMessage, ThemeStore};

pub use search::SearchState;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filters,
    Cards,
}

/// A selectable list pane
#[derive(Debug, Default)]
pub struct PaneState {
    pub selected_index: usize,
    pub list_state: ListState,
}

impl PaneState {
    fn new() -> Self {
        Self {
            selected_index: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.list_state.select(Some(index));
    }

    /// Keep the selection inside a list of `count` rows
    fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.select(self.selected_index.min(count - 1));
        }
    }
}

/// Gallery browser state, independent of the terminal
pub struct BrowserState {
    pub site: Site,
    pub engine: FilterEngine,
    pub navigator: Navigator,
    pub tabs: TabSet,
    pub focus: Focus,
    pub filters: PaneState,
    pub cards: PaneState,
    pub search: SearchState,
    pub theme: Theme,
    theme_store: Option<ThemeStore>,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl BrowserState {
    pub fn new(site: Site, theme_store: Option<ThemeStore>) -> Result<Self> {
        let engine = FilterEngine::new(site.catalog()?);
        let config = site.config();
        let navigator = Navigator::with_default_view(config.views.clone(), &config.default_view);
        let tabs = TabSet::new(site.projects().iter().map(Project::repo_name))
            .with_gallery_view(config.default_view.as_str());
        let saved = theme_store.as_ref().and_then(ThemeStore::load);
        let theme = Theme::resolve(saved, system_prefers_dark());

        debug!(
            cards = engine.catalog().len(),
            filters = engine.catalog().filters().len(),
            %theme,
            "browser state ready"
        );

        Ok(Self {
            site,
            engine,
            navigator,
            tabs,
            focus: Focus::Filters,
            filters: PaneState::new(),
            cards: PaneState::new(),
            search: SearchState::default(),
            theme,
            theme_store,
            show_help: false,
            status_message: None,
        })
    }

    /// Filter controls in display order: applied (most recent first), then
    /// the unapplied controls the query leaves visible
    pub fn filter_rows(&self) -> Vec<FilterId> {
        let mut rows = self.engine.applied().to_vec();
        rows.extend(self.engine.visible_unapplied_filters());
        rows
    }

    pub fn card_rows(&self) -> Vec<CardId> {
        self.engine.visible_cards()
    }

    pub fn selected_filter(&self) -> Option<FilterId> {
        self.filter_rows().get(self.filters.selected_index).copied()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let card = *self.card_rows().get(self.cards.selected_index)?;
        self.project_for(card)
    }

    pub fn project_for(&self, card: CardId) -> Option<&Project> {
        self.site.project(&self.engine.catalog().card(card).key)
    }

    /// Project of the active tab; `None` while the gallery tab is active
    pub fn active_project(&self) -> Option<&Project> {
        if self.tabs.is_gallery_active() {
            return None;
        }
        self.site.project_by_repo(self.tabs.active())
    }

    /// Address-bar location for the current view and tab
    pub fn route(&self) -> Route {
        let current = Route::new(self.navigator.current());
        if self.tabs.is_gallery_active() {
            current
        } else {
            self.tabs.route_for_active(&current)
        }
    }

    pub fn toggle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.toggle();
        if let Some(store) = &self.theme_store {
            store.save(self.theme)?;
        }
        let message = serde_json::to_string(&ThemeMessage::update(self.theme))?;
        debug!(%message, "theme changed");
        self.status_message = Some(format!("Theme: {}", self.theme));
        Ok(())
    }

    /// Re-clamp both panes after the visible rows changed
    pub(super) fn refresh_selection(&mut self) {
        self.filters.clamp(self.filter_rows().len());
        self.cards.clamp(self.card_rows().len());
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub(super) fn warn_status(&mut self, message: String) {
        warn!("{}", message);
        self.status_message = Some(message);
    }
}

/// Shared test helpers for all state sub-module tests.
#[cfg(test)]
pub(super) mod test_helpers {
    use super::BrowserState;
    use crate::site::test_helpers::write_test_site;
    use crate::site::Site;
    use crate::theme::ThemeStore;

    /// Browser over the three-card site (A:[x,y], B:[x], C:[y,z])
    pub fn create_test_browser() -> (BrowserState, tempfile::TempDir) {
        let temp = tempfile::TempDir::new().unwrap();
        write_test_site(temp.path());
        let site = Site::open(temp.path()).unwrap();
        let store = ThemeStore::new(temp.path().join("prefs/preferences.json"));
        let state = BrowserState::new(site, Some(store)).unwrap();
        (state, temp)
    }

    pub fn filter_tags(state: &BrowserState) -> Vec<String> {
        state
            .filter_rows()
            .into_iter()
            .map(|f| state.engine.catalog().filter(f).tag.clone())
            .collect()
    }

    pub fn card_keys(state: &BrowserState) -> Vec<String> {
        state
            .card_rows()
            .into_iter()
            .map(|c| state.engine.catalog().card(c).key.clone())
            .collect()
    }
}
