use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, instrument};

use super::list::ProjectInfo;
use crate::nav::{Navigator, Route, TabSet};
use crate::site::{Project, Site};

/// Where a deep link lands
#[derive(Debug)]
pub struct OpenedLink {
    pub view: String,
    pub project: Option<ProjectInfo>,
    /// Canonical hash for the resolved location
    pub hash: String,
    pub tabs: Vec<String>,
}

/// Resolve a URL hash (`#project-view/my-repo`) against a site
#[instrument(skip_all, fields(site = %site_path.display(), hash = %hash))]
pub fn run_open(site_path: &Path, hash: &str) -> Result<OpenedLink> {
    let site = Site::open(site_path)?;
    let route = Route::parse(hash).with_context(|| format!("Invalid link: '{}'", hash))?;

    let config = site.config();
    let mut navigator = Navigator::with_default_view(config.views.clone(), &config.default_view);
    if !navigator.on_hash_change(hash) {
        bail!(
            "Unknown view: {} (expected one of: {})",
            route.view,
            navigator.views().join(", ")
        );
    }

    let mut tabs = TabSet::new(site.projects().iter().map(Project::repo_name))
        .with_gallery_view(config.default_view.as_str());
    let project = match &route.project {
        Some(repo) => {
            let Some(project) = site.project_by_repo(repo) else {
                bail!("Unknown project: {}", repo);
            };
            tabs.on_route(&route);
            Some(ProjectInfo::from(project))
        }
        None => None,
    };
    debug!(view = navigator.current(), active = tabs.active(), "resolved link");

    Ok(OpenedLink {
        view: navigator.current().to_string(),
        project,
        hash: route.to_hash(),
        tabs: tabs.opened().to_vec(),
    })
}
