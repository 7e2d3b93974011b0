//! Per-site configuration, read from an optional `folio.json` in the site root.
//!
//! ```json
//! {
//!   "index": "index.html",
//!   "catalog": "projects.json",
//!   "views": ["project-view", "about-view", "contact-view"],
//!   "default_view": "project-view",
//!   "contact": {
//!     "service_id": "service_x",
//!     "template_id": "template_y",
//!     "public_key": "abc",
//!     "require_captcha": true,
//!     "throttle_ms": 3000
//!   }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::nav::DEFAULT_VIEW;

pub const CONFIG_FILENAME: &str = "folio.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page rewritten with rendered cards and filters
    pub index: String,
    /// Project catalog
    pub catalog: String,
    /// Content views reachable from the navigation bar
    pub views: Vec<String>,
    /// View that hosts the gallery and is shown when the URL names none
    pub default_view: String,
    pub contact: Option<ContactConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index: "index.html".to_string(),
            catalog: "projects.json".to_string(),
            views: vec![
                DEFAULT_VIEW.to_string(),
                "about-view".to_string(),
                "contact-view".to_string(),
            ],
            default_view: DEFAULT_VIEW.to_string(),
            contact: None,
        }
    }
}

impl SiteConfig {
    /// Load `folio.json` from the site root, falling back to defaults if absent.
    pub fn load(site_root: &Path) -> Result<Self> {
        let path = site_root.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("Invalid config in {}", path.display()))
    }
}

/// Hosted email account used by the contact form
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub require_captcha: bool,
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
}

impl ContactConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

fn default_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_throttle_ms() -> u64 {
    3000
}
