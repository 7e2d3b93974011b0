use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::site::{parse_payload, Site, UpsertStats};

/// Merge a project payload into the catalog and rewrite the gallery.
///
/// The page is rewritten before the catalog is saved, so a page without
/// markers leaves both files untouched.
#[instrument(skip_all, fields(site = %site_path.display()))]
pub fn run_update(site_path: &Path, payload: &str) -> Result<UpsertStats> {
    let projects = parse_payload(payload).context("Invalid project payload")?;
    let mut site = Site::open(site_path)?;

    let stats = site.upsert(projects);
    site.render()?;
    site.save()?;

    info!(added = stats.added, updated = stats.updated, "updated site");
    Ok(stats)
}

/// Rewrite the gallery regions of the index page from the catalog
#[instrument(skip_all, fields(site = %site_path.display()))]
pub fn run_render(site_path: &Path) -> Result<usize> {
    let site = Site::open(site_path)?;
    site.render()?;
    Ok(site.projects().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::test_helpers::write_test_site;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_update_adds_and_renders() {
        let dir = TempDir::new().unwrap();
        write_test_site(dir.path());

        let stats = run_update(
            dir.path(),
            r#"{"id": "D", "title": "Delta", "tags": ["Machine Learning"]}"#,
        )
        .unwrap();

        assert_eq!(stats, UpsertStats { added: 1, updated: 0 });
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(html.matches("class=\"project-card\"").count(), 4);
        assert!(html.contains(r#"id="machine-learning""#));
        assert!(html.contains(">machine learning</button>"));

        let catalog = fs::read_to_string(dir.path().join("projects.json")).unwrap();
        assert!(catalog.contains("\"Delta\""));
    }

    #[test]
    fn test_update_replaces_existing() {
        let dir = TempDir::new().unwrap();
        write_test_site(dir.path());

        let stats = run_update(dir.path(), r#"[{"id": "A", "title": "Alpha II"}]"#).unwrap();

        assert_eq!(stats, UpsertStats { added: 0, updated: 1 });
        let site = Site::open(dir.path()).unwrap();
        assert_eq!(site.project("A").unwrap().title, "Alpha II");
        assert!(site.project("A").unwrap().tags.is_empty());
    }

    #[test]
    fn test_update_rejects_bad_payload() {
        let dir = TempDir::new().unwrap();
        write_test_site(dir.path());

        let err = run_update(dir.path(), "not json").unwrap_err();
        assert!(err.to_string().contains("Invalid project payload"));
    }

    #[test]
    fn test_update_without_markers_keeps_catalog() {
        let dir = TempDir::new().unwrap();
        write_test_site(dir.path());
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        assert!(run_update(dir.path(), r#"{"id": "D", "title": "Delta"}"#).is_err());
        assert_eq!(Site::open(dir.path()).unwrap().projects().len(), 3);
    }

    #[test]
    fn test_render_counts_projects() {
        let dir = TempDir::new().unwrap();
        write_test_site(dir.path());
        assert_eq!(run_render(dir.path()).unwrap(), 3);
    }
}
