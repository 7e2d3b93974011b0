//! The portfolio site on disk: a project catalog (`projects.json`) and the
//! page (`index.html`) whose gallery regions are regenerated from it.

mod markers;
mod project;
mod render;

pub use markers::replace_region;
pub use project::{normalize_tag, parse_payload, Project};
pub use render::GalleryRenderer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::config::SiteConfig;
use crate::gallery::{Catalog, CatalogError};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid project payload: {0}")]
    Payload(#[source] serde_json::Error),
    #[error("invalid project '{id}': {reason}")]
    InvalidProject { id: String, reason: String },
    #[error("marker not found: {0}")]
    MissingMarker(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Counts from merging a payload into the catalog
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpsertStats {
    pub added: usize,
    pub updated: usize,
}

#[derive(Debug)]
pub struct Site {
    root: PathBuf,
    config: SiteConfig,
    projects: Vec<Project>,
}

impl Site {
    /// Open a site directory. A missing catalog file means no projects yet.
    #[instrument]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("Site directory not found: {}", root.display());
        }
        let config = SiteConfig::load(root)?;
        let catalog_path = root.join(&config.catalog);

        let projects = if catalog_path.exists() {
            let contents = std::fs::read_to_string(&catalog_path)
                .with_context(|| format!("Failed to read {}", catalog_path.display()))?;
            let projects: Vec<Project> = serde_json::from_str(&contents)
                .with_context(|| format!("Invalid catalog in {}", catalog_path.display()))?;
            projects
                .into_iter()
                .map(Project::normalize)
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("Invalid catalog in {}", catalog_path.display()))?
        } else {
            debug!(path = %catalog_path.display(), "no catalog yet");
            Vec::new()
        };

        info!(projects = projects.len(), "opened site");
        Ok(Self {
            root: root.to_path_buf(),
            config,
            projects,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_by_repo(&self, repo: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.repo_name() == repo)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.config.index)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(&self.config.catalog)
    }

    /// Cards and filters for the current projects
    pub fn catalog(&self) -> Result<Catalog, SiteError> {
        Ok(Catalog::new(
            self.projects.iter().map(Project::to_card).collect(),
        )?)
    }

    /// Insert new projects and replace existing ones (matched by id) in place.
    pub fn upsert(&mut self, projects: Vec<Project>) -> UpsertStats {
        let mut stats = UpsertStats::default();
        for project in projects {
            match self.projects.iter_mut().find(|p| p.id == project.id) {
                Some(existing) => {
                    debug!(id = %project.id, "updating project");
                    *existing = project;
                    stats.updated += 1;
                }
                None => {
                    debug!(id = %project.id, "adding project");
                    self.projects.push(project);
                    stats.added += 1;
                }
            }
        }
        stats
    }

    /// Write the catalog back to disk
    pub fn save(&self) -> Result<()> {
        let path = self.catalog_path();
        let json = serde_json::to_string_pretty(&self.projects)?;
        std::fs::write(&path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Regenerate the filter and card regions of the index page
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn render(&self) -> Result<()> {
        let path = self.index_path();
        let html = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let catalog = self.catalog()?;
        let renderer = GalleryRenderer::new()?;
        let filters = renderer.render_filters(&catalog)?;
        let cards = renderer.render_cards(&self.projects)?;

        let html = replace_region(&html, "filters", &filters)
            .with_context(|| format!("Cannot update {}", path.display()))?;
        let html = replace_region(&html, "cards", &cards)
            .with_context(|| format!("Cannot update {}", path.display()))?;

        std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            cards = catalog.len(),
            filters = catalog.filters().len(),
            "rendered gallery"
        );
        Ok(())
    }
}
