use serde::{Deserialize, Serialize};

use super::SiteError;
use crate::gallery::Card;
use crate::nav::repo_name_from_url;

/// Project metadata as stored in the catalog and sent in update payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Check required fields and normalize tags in place.
    pub fn normalize(mut self) -> Result<Self, SiteError> {
        self.id = self.id.trim().to_string();
        self.title = self.title.trim().to_string();

        if self.id.is_empty() {
            return Err(SiteError::InvalidProject {
                id: self.id,
                reason: "id is empty".to_string(),
            });
        }
        if let Some(bad) = self
            .id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(SiteError::InvalidProject {
                reason: format!("id contains '{}'", bad),
                id: self.id,
            });
        }
        if self.title.is_empty() {
            return Err(SiteError::InvalidProject {
                id: self.id,
                reason: "title is empty".to_string(),
            });
        }

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.iter().filter_map(|t| normalize_tag(t)) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        self.tags = tags;
        Ok(self)
    }

    /// Name used in deep links: the repository segment of the URL, else the id
    pub fn repo_name(&self) -> &str {
        repo_name_from_url(&self.url).unwrap_or(self.id.as_str())
    }

    pub fn to_card(&self) -> Card {
        Card::new(self.id.clone(), self.tags.iter().cloned())
    }
}

/// Lowercase kebab-case tag ("Machine Learning" -> "machine-learning").
/// Returns `None` for blank input.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let words: Vec<String> = tag
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    (!words.is_empty()).then(|| words.join("-"))
}

/// Update payload: one project or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProjectPayload {
    Many(Vec<Project>),
    One(Project),
}

/// Parse and validate an update payload
pub fn parse_payload(json: &str) -> Result<Vec<Project>, SiteError> {
    let payload: ProjectPayload = serde_json::from_str(json).map_err(SiteError::Payload)?;
    let projects = match payload {
        ProjectPayload::Many(projects) => projects,
        ProjectPayload::One(project) => vec![project],
    };
    projects.into_iter().map(Project::normalize).collect()
}
