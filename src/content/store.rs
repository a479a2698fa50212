//! Category routing - maps the public `type` tokens to repositories

use anyhow::Result;
use std::path::Path;

use super::{Article, ContentError, ContentRepository};
use crate::config::{Mode, SiteConfig};

/// A content category as named by API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Post,
    Project,
}

impl Category {
    /// Parse a category token; only `post` and `project` are recognized
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "post" => Some(Category::Post),
            "project" => Some(Category::Project),
            _ => None,
        }
    }
}

/// The post and project repositories of one site
pub struct ContentStore {
    posts: ContentRepository,
    projects: ContentRepository,
}

impl ContentStore {
    /// Build both repositories from the site configuration
    pub fn new(config: &SiteConfig, public_dir: &Path, mode: Mode) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .build()?;
        let base_url = config.base_url(mode);

        Ok(Self::from_parts(
            ContentRepository::new(public_dir, &config.posts_dir, base_url, mode, client.clone()),
            ContentRepository::new(public_dir, &config.projects_dir, base_url, mode, client),
        ))
    }

    pub fn from_parts(posts: ContentRepository, projects: ContentRepository) -> Self {
        Self { posts, projects }
    }

    pub fn repository(&self, category: Category) -> &ContentRepository {
        match category {
            Category::Post => &self.posts,
            Category::Project => &self.projects,
        }
    }

    fn route(&self, token: &str) -> Option<&ContentRepository> {
        let repository = Category::from_token(token).map(|c| self.repository(c));
        if repository.is_none() {
            tracing::debug!("Unknown content type '{}', serving no content", token);
        }
        repository
    }

    /// All articles of a category; unknown categories are empty
    pub async fn list(&self, token: &str) -> Result<Vec<Article>, ContentError> {
        match self.route(token) {
            Some(repository) => repository.list_all().await,
            None => Ok(Vec::new()),
        }
    }

    /// One article with its body; unknown categories and slugs are `None`
    pub async fn get(&self, token: &str, slug: &str) -> Result<Option<Article>, ContentError> {
        match self.route(token) {
            Some(repository) => repository.get_one(slug).await,
            None => Ok(None),
        }
    }

    /// The `limit` newest articles of a category
    pub async fn recent(&self, token: &str, limit: usize) -> Result<Vec<Article>, ContentError> {
        match self.route(token) {
            Some(repository) => repository.get_recent(limit).await,
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_entry(public: &Path, dir: &str, slug: &str, date: &str) {
        let entry = public.join(dir).join(slug);
        fs::create_dir_all(&entry).unwrap();
        fs::write(
            entry.join("article.json"),
            format!(r#"{{"title": "{slug}", "description": "", "date": "{date}"}}"#),
        )
        .unwrap();
        fs::write(entry.join("content.md"), format!("# {slug}")).unwrap();
    }

    fn store(public: &Path) -> ContentStore {
        ContentStore::new(&SiteConfig::default(), public, Mode::Development).unwrap()
    }

    #[test]
    fn test_category_tokens() {
        assert_eq!(Category::from_token("post"), Some(Category::Post));
        assert_eq!(Category::from_token("project"), Some(Category::Project));
        assert_eq!(Category::from_token("Post"), None);
        assert_eq!(Category::from_token("posts"), None);
    }

    #[tokio::test]
    async fn test_routes_to_category_directory() {
        let tmp = TempDir::new().unwrap();
        write_entry(tmp.path(), "posts", "hello", "2024-01-01");
        write_entry(tmp.path(), "projects", "engine", "2023-01-01");
        write_entry(tmp.path(), "projects", "game", "2024-01-01");
        let store = store(tmp.path());

        assert_eq!(store.list("post").await.unwrap().len(), 1);
        assert_eq!(store.list("project").await.unwrap().len(), 2);
        assert_eq!(store.recent("project", 1).await.unwrap()[0].slug, "game");

        let article = store.get("project", "Engine").await.unwrap().unwrap();
        assert_eq!(article.body.as_deref(), Some("# engine"));
        assert_eq!(
            article.thumbnail_url,
            "http://localhost:3000/projects/engine/thumbnail.jpg"
        );
        assert!(store.get("post", "engine").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let tmp = TempDir::new().unwrap();
        write_entry(tmp.path(), "posts", "hello", "2024-01-01");
        let store = store(tmp.path());

        assert!(store.list("blog").await.unwrap().is_empty());
        assert!(store.recent("blog", 5).await.unwrap().is_empty());
        assert!(store.get("blog", "hello").await.unwrap().is_none());
    }
}
