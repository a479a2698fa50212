//! URL helper functions

/// Absolute URL of an entry's thumbnail
///
/// # Examples
/// ```ignore
/// thumbnail_url("https://example.com/", "posts", "hello") // -> "https://example.com/posts/hello/thumbnail.jpg"
/// ```
pub fn thumbnail_url(base_url: &str, category_dir: &str, slug: &str) -> String {
    format!(
        "{}/{}/thumbnail.jpg",
        base_url.trim_end_matches('/'),
        entry_path(category_dir, slug).trim_start_matches('/')
    )
}

/// Site-relative path of an entry directory
pub fn entry_path(category_dir: &str, slug: &str) -> String {
    format!("/{}/{}", category_dir.trim_matches('/'), slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("http://localhost:3000", "posts", "hello"),
            "http://localhost:3000/posts/hello/thumbnail.jpg"
        );
        assert_eq!(
            thumbnail_url("https://example.com/", "projects", "game"),
            "https://example.com/projects/game/thumbnail.jpg"
        );
    }

    #[test]
    fn test_entry_path() {
        assert_eq!(entry_path("posts", "a"), "/posts/a");
        assert_eq!(entry_path("/posts/", "a"), "/posts/a");
    }
}
