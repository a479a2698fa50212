//! Content module - article discovery, body resolution and media rewriting

mod article;
mod error;
pub mod media;
mod repository;
mod store;

pub use article::{Article, ArticleLink};
pub use error::{ContentError, SourceError};
pub use repository::{ContentRepository, BODY_FILE, RECORD_FILE};
pub use store::{Category, ContentStore};
