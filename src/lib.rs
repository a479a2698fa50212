//! folio-rs: content backend for a portfolio and blog site
//!
//! Posts and project write-ups live in per-category directories under the
//! public folder. This crate indexes them, resolves article bodies from
//! local files or remote URLs, and serves them over a small JSON API.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::Path;

pub use config::Mode;

/// The main application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Deployment mode, fixed for the life of the process
    pub mode: Mode,
    /// Public directory holding the category folders
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P, mode: Mode) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            mode,
            public_dir,
        })
    }

    /// Build the post and project repositories
    pub fn store(&self) -> Result<content::ContentStore> {
        content::ContentStore::new(&self.config, &self.public_dir, self.mode)
    }
}
