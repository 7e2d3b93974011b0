use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::site::{Project, Site};

/// Info about a project for display purposes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInfo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
}

impl From<&Project> for ProjectInfo {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            url: project.url.clone(),
            tags: project.tags.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SiteListing {
    pub projects: Vec<ProjectInfo>,
    /// Distinct tags in filter order
    pub tags: Vec<String>,
}

/// List every project of a site with its tags
#[instrument(skip_all, fields(site = %site_path.display()))]
pub fn run_list(site_path: &Path) -> Result<SiteListing> {
    let site = Site::open(site_path)?;
    let catalog = site.catalog()?;

    let projects = site
        .projects()
        .iter()
        .map(ProjectInfo::from)
        .collect();
    let tags = catalog.filters().iter().map(|f| f.tag.clone()).collect();

    Ok(SiteListing { projects, tags })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::test_helpers::write_test_site;
    use tempfile::TempDir;

    #[test]
    fn test_list_all_projects() {
        let dir = TempDir::new().unwrap();
        write_test_site(dir.path());

        let listing = run_list(dir.path()).unwrap();

        assert_eq!(listing.projects.len(), 3);
        assert_eq!(listing.projects[0].id, "A");
        assert_eq!(listing.projects[0].tags, vec!["x", "y"]);
        assert_eq!(listing.tags, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_list_empty_site() {
        let dir = TempDir::new().unwrap();
        let listing = run_list(dir.path()).unwrap();
        assert!(listing.projects.is_empty());
        assert!(listing.tags.is_empty());
    }

    #[test]
    fn test_list_missing_site_fails() {
        let result = run_list(Path::new("/nonexistent/folio/site"));
        assert!(result.is_err());
    }
}
