//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable that selects the deployment mode
pub const MODE_ENV: &str = "FOLIO_ENV";

/// Deployment mode, decided once at process start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Index and bodies are cached for the life of the process
    Production,
    /// Every call re-reads the backing store
    #[default]
    Development,
}

impl Mode {
    /// Resolve the mode from the CLI flag, falling back to `FOLIO_ENV`
    pub fn detect(production: bool) -> Self {
        if production {
            return Mode::Production;
        }
        Self::from_env_value(std::env::var(MODE_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Mode::Production,
            _ => Mode::Development,
        }
    }

    /// Whether the content caches are populated and reused
    pub fn caching_enabled(self) -> bool {
        matches!(self, Mode::Production)
    }
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // URL
    /// Public base URL used in production
    pub url: String,
    /// Base URL used during development
    pub dev_url: String,

    // Directory
    pub public_dir: String,
    pub posts_dir: String,
    pub projects_dir: String,

    // Content
    /// Number of items served by the "last articles" endpoint
    pub recent_limit: usize,
    /// Timeout for remote body fetches, in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),

            url: "http://example.com".to_string(),
            dev_url: "http://localhost:3000".to_string(),

            public_dir: "public".to_string(),
            posts_dir: "posts".to_string(),
            projects_dir: "projects".to_string(),

            recent_limit: 6,
            fetch_timeout_secs: 30,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Base URL for derived links such as thumbnails
    pub fn base_url(&self, mode: Mode) -> &str {
        let url = match mode {
            Mode::Production => &self.url,
            Mode::Development => &self.dev_url,
        };
        url.trim_end_matches('/')
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
