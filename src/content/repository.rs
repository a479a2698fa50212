//! Content repository - discovers, indexes and resolves the articles of one category

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use super::error::{ContentError, SourceError};
use super::media::rewrite_media;
use super::Article;
use crate::config::Mode;
use crate::helpers::{newest_first, thumbnail_url};

/// Metadata record inside every entry directory
pub const RECORD_FILE: &str = "article.json";

/// Local body file, used when the record has no `contentURL`
pub const BODY_FILE: &str = "content.md";

/// Articles of one category directory, with optional caching
///
/// With caching on, the index is built once and reused. Raw bodies are
/// cached per slug before media rewriting, so every call rewrites the
/// same source text. Both caches are swapped wholesale under a write lock
/// and no lock is held across I/O.
pub struct ContentRepository {
    /// `<public_dir>/<directory>`
    root: PathBuf,
    directory: String,
    base_url: String,
    mode: Mode,
    client: reqwest::Client,
    index: RwLock<Option<Arc<Vec<Article>>>>,
    bodies: RwLock<HashMap<String, Arc<str>>>,
}

impl ContentRepository {
    /// Create a repository for `<public_dir>/<directory>`
    pub fn new(
        public_dir: &Path,
        directory: &str,
        base_url: &str,
        mode: Mode,
        client: reqwest::Client,
    ) -> Self {
        Self {
            root: public_dir.join(directory),
            directory: directory.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            mode,
            client,
            index: RwLock::new(None),
            bodies: RwLock::new(HashMap::new()),
        }
    }

    /// List every article, without bodies, in directory name order
    pub async fn list_all(&self) -> Result<Vec<Article>, ContentError> {
        if self.mode.caching_enabled() {
            if let Some(index) = self.index.read().await.as_ref() {
                tracing::debug!("Serving cached index for {}", self.directory);
                return Ok(index.as_ref().clone());
            }
        }

        let articles = self.scan().await?;
        tracing::debug!("Indexed {} articles in {:?}", articles.len(), self.root);

        if self.mode.caching_enabled() {
            *self.index.write().await = Some(Arc::new(articles.clone()));
        }

        Ok(articles)
    }

    /// Find an article by slug (case-insensitive) and resolve its body
    ///
    /// Returns `Ok(None)` when no entry matches.
    pub async fn get_one(&self, slug: &str) -> Result<Option<Article>, ContentError> {
        let articles = self.list_all().await?;
        let Some(mut article) = articles.into_iter().find(|a| a.matches_slug(slug)) else {
            tracing::debug!("No article '{}' in {}", slug, self.directory);
            return Ok(None);
        };

        let raw = self.load_body(&article).await?;
        let body = rewrite_media(&raw, &self.directory, &article.slug).map_err(|e| {
            ContentError::MalformedContent {
                category: self.directory.clone(),
                slug: article.slug.clone(),
                offset: e.offset,
            }
        })?;

        article.body = Some(body);
        Ok(Some(article))
    }

    /// Up to `limit` articles, newest first
    ///
    /// Articles with unparseable dates sort last; ties keep index order.
    pub async fn get_recent(&self, limit: usize) -> Result<Vec<Article>, ContentError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut articles = self.list_all().await?;
        articles.sort_by(|a, b| newest_first(&a.date, &b.date));
        articles.truncate(limit);
        Ok(articles)
    }

    /// Read every entry of the category directory
    async fn scan(&self) -> Result<Vec<Article>, ContentError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ContentError::DirectoryNotFound {
                    path: self.root.clone(),
                });
            }
            Err(e) => return Err(self.unreadable(e)),
        };

        let mut slugs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| self.unreadable(e))? {
            let Ok(name) = entry.file_name().into_string() else {
                return Err(ContentError::InvalidEntryName {
                    category: self.directory.clone(),
                    path: entry.path(),
                });
            };
            // Dotfiles (.DS_Store, editor swap files) are not entries
            if name.starts_with('.') {
                continue;
            }
            slugs.push(name);
        }
        slugs.sort();

        let mut articles = Vec::with_capacity(slugs.len());
        for slug in slugs {
            articles.push(self.load_record(slug).await?);
        }

        Ok(articles)
    }

    /// Parse `<entry>/article.json` and fill in the derived fields
    async fn load_record(&self, slug: String) -> Result<Article, ContentError> {
        let path = self.root.join(&slug).join(RECORD_FILE);
        let malformed = |source: SourceError| ContentError::MalformedRecord {
            category: self.directory.clone(),
            slug: slug.clone(),
            path: path.clone(),
            source,
        };

        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| malformed(e.into()))?;
        let mut article = Article::from_record(&raw).map_err(|e| malformed(e.into()))?;

        article.thumbnail_url = thumbnail_url(&self.base_url, &self.directory, &slug);
        article.slug = slug;
        article.body = None;

        Ok(article)
    }

    /// Raw body text, from the cache, the remote source or `content.md`
    async fn load_body(&self, article: &Article) -> Result<Arc<str>, ContentError> {
        if self.mode.caching_enabled() {
            if let Some(body) = self.bodies.read().await.get(&article.slug) {
                tracing::debug!("Serving cached body for {}/{}", self.directory, article.slug);
                return Ok(Arc::clone(body));
            }
        }

        let loaded = match &article.body_source_url {
            Some(url) => self.fetch_remote(url).await,
            None => {
                let path = self.root.join(&article.slug).join(BODY_FILE);
                fs::read_to_string(&path).await.map_err(SourceError::from)
            }
        };

        let raw: Arc<str> = loaded
            .map_err(|source| ContentError::BodyFetch {
                category: self.directory.clone(),
                slug: article.slug.clone(),
                source,
            })?
            .into();

        if self.mode.caching_enabled() {
            self.bodies
                .write()
                .await
                .insert(article.slug.clone(), Arc::clone(&raw));
        }

        Ok(raw)
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, SourceError> {
        tracing::debug!("Fetching body from {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    fn unreadable(&self, source: io::Error) -> ContentError {
        ContentError::UnreadableDirectory {
            category: self.directory.clone(),
            path: self.root.clone(),
            source,
        }
    }
}
