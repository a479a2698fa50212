//! Article model

use serde::{Deserialize, Serialize};

/// A link attached to an article (source code, store page, demo, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleLink {
    /// Link kind, e.g. `source_code` or `live_demo`
    #[serde(rename = "type")]
    pub kind: String,
    /// Hosting vendor, e.g. `github` or `steam`
    pub vendor: String,
    pub url: String,
}

/// A post or project write-up
///
/// Deserialized from `article.json`. `slug` and `thumbnail` are always
/// derived from the entry location, and `content` is only set once the
/// body has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,

    pub description: String,

    /// Publication date (ISO-8601), kept verbatim
    pub date: String,

    /// Entry directory name
    #[serde(default, skip_deserializing)]
    pub slug: String,

    /// Absolute thumbnail URL
    #[serde(rename = "thumbnail", default, skip_deserializing)]
    pub thumbnail_url: String,

    /// Resolved body with media placeholders rewritten
    #[serde(
        rename = "content",
        default,
        skip_deserializing,
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<String>,

    /// Remote body source, takes precedence over `content.md`
    #[serde(
        rename = "contentURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body_source_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ArticleLink>>,
}

impl Article {
    /// Parse an `article.json` record
    pub fn from_record(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Case-insensitive slug match
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.slug.to_lowercase() == slug.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let raw = r#"{
            "title": "Hello",
            "description": "First post",
            "date": "2024-01-15",
            "contentURL": "https://example.com/readme.md",
            "tags": ["rust", "web"],
            "links": [{"type": "source_code", "vendor": "github", "url": "https://github.com/x/y"}]
        }"#;

        let article = Article::from_record(raw).unwrap();
        assert_eq!(article.title, "Hello");
        assert_eq!(
            article.body_source_url.as_deref(),
            Some("https://example.com/readme.md")
        );
        assert_eq!(article.tags, Some(vec!["rust".to_string(), "web".to_string()]));
        let links = article.links.unwrap();
        assert_eq!(links[0].kind, "source_code");
        assert_eq!(links[0].vendor, "github");
    }

    #[test]
    fn test_record_cannot_set_derived_fields() {
        let raw = r#"{
            "title": "Hello",
            "description": "",
            "date": "2024-01-15",
            "slug": "other",
            "thumbnail": "http://elsewhere/x.jpg",
            "content": "inline body"
        }"#;

        let article = Article::from_record(raw).unwrap();
        assert!(article.slug.is_empty());
        assert!(article.thumbnail_url.is_empty());
        assert!(article.body.is_none());
    }

    #[test]
    fn test_missing_required_field() {
        assert!(Article::from_record(r#"{"title": "x"}"#).is_err());
    }

    #[test]
    fn test_serialize_wire_names() {
        let mut article = Article::from_record(
            r#"{"title": "T", "description": "D", "date": "2024-01-01"}"#,
        )
        .unwrap();
        article.slug = "t".to_string();
        article.thumbnail_url = "http://localhost:3000/posts/t/thumbnail.jpg".to_string();

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["slug"], "t");
        assert_eq!(value["thumbnail"], "http://localhost:3000/posts/t/thumbnail.jpg");
        assert!(value.get("content").is_none());
        assert!(value.get("tags").is_none());

        article.body = Some("body".to_string());
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["content"], "body");
    }

    #[test]
    fn test_matches_slug() {
        let mut article = Article::from_record(
            r#"{"title": "T", "description": "D", "date": "2024-01-01"}"#,
        )
        .unwrap();
        article.slug = "My-Post".to_string();
        assert!(article.matches_slug("my-post"));
        assert!(article.matches_slug("MY-POST"));
        assert!(!article.matches_slug("my-post-2"));
    }
}
