use std::collections::BTreeSet;

use tracing::debug;

use super::route::Route;
use super::DEFAULT_VIEW;

/// Key of the always-open gallery tab
pub const GALLERY_TAB: &str = "all";

/// Open project tabs.
///
/// The gallery tab is always first and cannot be closed. Project tabs are kept
/// in the order they were opened, and exactly one tab is active.
#[derive(Debug, Clone)]
pub struct TabSet {
    known: BTreeSet<String>,
    opened: Vec<String>,
    active: usize,
    gallery_view: String,
}

impl TabSet {
    pub fn new<I, S>(projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: projects.into_iter().map(Into::into).collect(),
            opened: vec![GALLERY_TAB.to_string()],
            active: 0,
            gallery_view: DEFAULT_VIEW.to_string(),
        }
    }

    /// Use `view` as the view whose bare route returns to the gallery tab
    pub fn with_gallery_view(mut self, view: impl Into<String>) -> Self {
        self.gallery_view = view.into();
        self
    }

    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    pub fn active(&self) -> &str {
        &self.opened[self.active]
    }

    pub fn is_gallery_active(&self) -> bool {
        self.active == 0
    }

    /// The tab strip is only worth showing once a project is open
    pub fn strip_visible(&self) -> bool {
        self.opened.len() > 1
    }

    /// Open (if needed) and activate a tab. Returns true if the active tab changed.
    pub fn open(&mut self, repo: &str) -> bool {
        let index = match self.opened.iter().position(|t| t == repo) {
            Some(index) => index,
            None if self.known.contains(repo) => {
                self.opened.push(repo.to_string());
                debug!(repo, tabs = self.opened.len(), "opened tab");
                self.opened.len() - 1
            }
            None => return false,
        };

        if index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Close a project tab and activate the most recently opened remaining tab.
    /// Returns false for the gallery tab or a tab that is not open.
    pub fn close(&mut self, repo: &str) -> bool {
        if repo == GALLERY_TAB {
            return false;
        }
        let Some(index) = self.opened.iter().position(|t| t == repo) else {
            return false;
        };
        self.opened.remove(index);
        self.active = self.opened.len() - 1;
        debug!(repo, tabs = self.opened.len(), "closed tab");
        true
    }

    /// Activate the next tab, wrapping around
    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.opened.len();
    }

    /// Activate the previous tab, wrapping around
    pub fn previous(&mut self) {
        self.active = (self.active + self.opened.len() - 1) % self.opened.len();
    }

    /// Route reflecting the active tab, derived from the current one
    pub fn route_for_active(&self, current: &Route) -> Route {
        current.with_project(self.active())
    }

    /// Follow a route coming from the address bar (back/forward, deep links).
    /// Returns true if the active tab changed.
    pub fn on_route(&mut self, route: &Route) -> bool {
        match &route.project {
            Some(project) => self.open(project),
            None if route.view == self.gallery_view && self.strip_visible() => self.open(GALLERY_TAB),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> TabSet {
        TabSet::new(["weather", "chess", "blog"])
    }

    #[test]
    fn test_starts_with_gallery_only() {
        let tabs = tabs();
        assert_eq!(tabs.opened(), &["all"]);
        assert_eq!(tabs.active(), GALLERY_TAB);
        assert!(!tabs.strip_visible());
    }

    #[test]
    fn test_open_appends_and_activates() {
        let mut tabs = tabs();
        assert!(tabs.open("weather"));
        assert!(tabs.open("chess"));
        assert_eq!(tabs.opened(), &["all", "weather", "chess"]);
        assert_eq!(tabs.active(), "chess");
        assert!(tabs.strip_visible());
    }

    #[test]
    fn test_open_existing_tab_only_activates() {
        let mut tabs = tabs();
        tabs.open("weather");
        tabs.open("chess");
        assert!(tabs.open("weather"));
        assert_eq!(tabs.opened().len(), 3);
        assert!(!tabs.open("weather"));
    }

    #[test]
    fn test_open_unknown_project_is_ignored() {
        let mut tabs = tabs();
        assert!(!tabs.open("missing"));
        assert_eq!(tabs.opened(), &["all"]);
    }

    #[test]
    fn test_close_activates_last_opened() {
        let mut tabs = tabs();
        tabs.open("weather");
        tabs.open("chess");
        tabs.open("weather");

        assert!(tabs.close("weather"));
        assert_eq!(tabs.opened(), &["all", "chess"]);
        assert_eq!(tabs.active(), "chess");

        assert!(tabs.close("chess"));
        assert_eq!(tabs.active(), GALLERY_TAB);
        assert!(!tabs.strip_visible());
    }

    #[test]
    fn test_gallery_cannot_be_closed() {
        let mut tabs = tabs();
        assert!(!tabs.close(GALLERY_TAB));
        assert!(!tabs.close("weather"));
    }

    #[test]
    fn test_cycle_tabs() {
        let mut tabs = tabs();
        tabs.open("weather");
        tabs.open("chess");
        tabs.next();
        assert_eq!(tabs.active(), GALLERY_TAB);
        tabs.previous();
        assert_eq!(tabs.active(), "chess");
    }

    #[test]
    fn test_route_for_active_tab() {
        let mut tabs = tabs();
        tabs.open("blog");
        let route = tabs.route_for_active(&Route::new("project-view"));
        assert_eq!(route.to_hash(), "#project-view/blog");

        let replaced = tabs.route_for_active(&Route::new("project-view").with_project("chess"));
        assert_eq!(replaced.to_hash(), "#project-view/blog");
    }

    #[test]
    fn test_on_route_opens_deep_link() {
        let mut tabs = tabs();
        let route = Route::parse("#project-view/chess").unwrap();
        assert!(tabs.on_route(&route));
        assert_eq!(tabs.active(), "chess");
    }

    #[test]
    fn test_on_route_bare_view_returns_to_gallery() {
        let mut tabs = tabs();
        // Nothing open yet: bare view changes nothing
        assert!(!tabs.on_route(&Route::new(DEFAULT_VIEW)));

        tabs.open("weather");
        assert!(tabs.on_route(&Route::new(DEFAULT_VIEW)));
        assert!(tabs.is_gallery_active());
        assert_eq!(tabs.opened().len(), 2);
    }

    #[test]
    fn test_on_route_uses_configured_gallery_view() {
        let mut tabs = tabs().with_gallery_view("work-view");
        tabs.open("chess");

        assert!(!tabs.on_route(&Route::new(DEFAULT_VIEW)));
        assert_eq!(tabs.active(), "chess");

        assert!(tabs.on_route(&Route::new("work-view")));
        assert!(tabs.is_gallery_active());
    }
}
