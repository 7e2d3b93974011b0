use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::{debug, instrument};

use super::list::ProjectInfo;
use crate::gallery::FilterEngine;
use crate::site::{normalize_tag, Site};

/// Filters to apply, in order
#[derive(Debug, Default)]
pub struct FilterOptions {
    pub tags: Vec<String>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterResult {
    pub visible: Vec<ProjectInfo>,
    pub total: usize,
    /// Applied tags, most recently applied first
    pub applied: Vec<String>,
    /// Filter controls still offered under the query
    pub available: Vec<String>,
}

/// Run the gallery filter over a site's catalog
#[instrument(skip_all, fields(site = %site_path.display()))]
pub fn run_filter(site_path: &Path, options: FilterOptions) -> Result<FilterResult> {
    let site = Site::open(site_path)?;
    let mut engine = FilterEngine::new(site.catalog()?);

    for raw in &options.tags {
        let Some(tag) = normalize_tag(raw) else {
            bail!("Empty tag");
        };
        let Some(filter) = engine.catalog().filter_by_tag(&tag) else {
            bail!("Unknown tag: {}", tag);
        };
        let delta = engine.apply(filter);
        debug!(%tag, hidden = delta.hidden.len(), "applied filter");
    }
    if let Some(query) = &options.query {
        engine.set_query(query);
    }

    let catalog = engine.catalog();
    let visible = engine
        .visible_cards()
        .into_iter()
        .filter_map(|card| site.project(&catalog.card(card).key))
        .map(ProjectInfo::from)
        .collect();
    let applied = engine
        .applied()
        .iter()
        .map(|f| catalog.filter(*f).tag.clone())
        .collect();
    let available = engine
        .visible_unapplied_filters()
        .into_iter()
        .map(|f| catalog.filter(f).tag.clone())
        .collect();

    Ok(FilterResult {
        visible,
        total: catalog.len(),
        applied,
        available,
    })
}
