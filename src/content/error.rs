//! Content repository errors

use std::path::PathBuf;
use thiserror::Error;

/// Underlying cause of a failed read
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors raised while listing or resolving content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content directory not found: {path:?}")]
    DirectoryNotFound { path: PathBuf },

    #[error("content directory {path:?} could not be read: {source}")]
    UnreadableDirectory {
        category: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("entry name {path:?} is not valid UTF-8")]
    InvalidEntryName { category: String, path: PathBuf },

    #[error("malformed article record {path:?}: {source}")]
    MalformedRecord {
        category: String,
        slug: String,
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    #[error("failed to load body of '{category}/{slug}': {source}")]
    BodyFetch {
        category: String,
        slug: String,
        #[source]
        source: SourceError,
    },

    #[error("unterminated media placeholder in '{category}/{slug}' at byte {offset}")]
    MalformedContent {
        category: String,
        slug: String,
        offset: usize,
    },
}

impl ContentError {
    /// Not-found conditions are reported to users as absent content
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::DirectoryNotFound { .. })
    }

    /// Client-facing description, naming only the category and slug
    ///
    /// `Display` carries filesystem paths and upstream errors; this does not.
    pub fn public_message(&self) -> String {
        match self {
            ContentError::DirectoryNotFound { .. } => "Content not found".to_string(),
            ContentError::UnreadableDirectory { category, .. } => {
                format!("Content directory '{}' could not be read", category)
            }
            ContentError::InvalidEntryName { category, .. } => {
                format!("Invalid entry name in '{}'", category)
            }
            ContentError::MalformedRecord { category, slug, .. } => {
                format!("Malformed article record '{}/{}'", category, slug)
            }
            ContentError::BodyFetch { category, slug, .. } => {
                format!("Failed to load body of '{}/{}'", category, slug)
            }
            ContentError::MalformedContent { category, slug, .. } => {
                format!("Unterminated media placeholder in '{}/{}'", category, slug)
            }
        }
    }
}
