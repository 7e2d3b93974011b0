use std::fmt;

/// Location inside the single-page site, as carried by the URL hash
/// (`#project-view/my-repo`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub view: String,
    pub project: Option<String>,
}

impl Route {
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            project: None,
        }
    }

    /// Parse a URL hash. The leading `#` is optional; returns `None` when no
    /// view is named.
    pub fn parse(hash: &str) -> Option<Self> {
        let trimmed = hash.strip_prefix('#').unwrap_or(hash);
        let mut parts = trimmed.split('/');
        let view = parts.next().filter(|v| !v.is_empty())?;
        let project = parts
            .next()
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        Some(Self {
            view: view.to_string(),
            project,
        })
    }

    pub fn with_project(&self, project: impl Into<String>) -> Self {
        Self {
            view: self.view.clone(),
            project: Some(project.into()),
        }
    }

    pub fn to_hash(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.project {
            Some(project) => write!(f, "#{}/{}", self.view, project),
            None => write!(f, "#{}", self.view),
        }
    }
}

/// Repository name of a project URL: its last path segment
/// (`https://me.github.io/my-repo/` -> `my-repo`).
pub fn repo_name_from_url(url: &str) -> Option<&str> {
    let path = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url)
        .trim_end_matches('/');
    let (_, name) = path.rsplit_once('/')?;
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_only() {
        let route = Route::parse("#contact-view").unwrap();
        assert_eq!(route.view, "contact-view");
        assert_eq!(route.project, None);
    }

    #[test]
    fn test_parse_view_and_project() {
        let route = Route::parse("#project-view/weather-app").unwrap();
        assert_eq!(route.view, "project-view");
        assert_eq!(route.project.as_deref(), Some("weather-app"));
    }

    #[test]
    fn test_parse_without_hash_and_trailing_slash() {
        let route = Route::parse("project-view/").unwrap();
        assert_eq!(route, Route::new("project-view"));
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert!(Route::parse("").is_none());
        assert!(Route::parse("#").is_none());
    }

    #[test]
    fn test_display_round_trips() {
        let route = Route::new("project-view").with_project("all");
        assert_eq!(route.to_hash(), "#project-view/all");
        assert_eq!(Route::parse(&route.to_hash()), Some(route));
    }

    #[test]
    fn test_repo_name_from_url() {
        assert_eq!(repo_name_from_url("https://me.github.io/weather-app/"), Some("weather-app"));
        assert_eq!(repo_name_from_url("https://me.github.io/weather-app"), Some("weather-app"));
        assert_eq!(repo_name_from_url("https://me.github.io/"), None);
    }
}
