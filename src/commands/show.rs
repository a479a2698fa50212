//! Print a single resolved article

use anyhow::{Context, Result};

use crate::content::Category;
use crate::helpers::chapters;
use crate::Folio;

/// Print the body of an article, or its chapter list
pub async fn run(folio: &Folio, content_type: &str, slug: &str, list_chapters: bool) -> Result<()> {
    let Some(category) = Category::from_token(content_type) else {
        anyhow::bail!("Unknown type: {}. Available: post, project", content_type);
    };

    let store = folio.store()?;
    let article = store
        .repository(category)
        .get_one(slug)
        .await
        .with_context(|| format!("Failed to resolve {} '{}'", content_type, slug))?;
    let Some(article) = article else {
        anyhow::bail!("No {} named '{}'", content_type, slug);
    };

    let body = article.body.unwrap_or_default();
    if list_chapters {
        for chapter in chapters(&body) {
            println!("{} (#{})", chapter.title, chapter.id);
        }
    } else {
        println!("# {}\n", article.title);
        println!("{}", body);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_show_article() {
        let tmp = TempDir::new().unwrap();
        let entry = tmp.path().join("public/posts/hello");
        fs::create_dir_all(&entry).unwrap();
        fs::write(
            entry.join("article.json"),
            r#"{"title": "Hello", "description": "", "date": "2024-01-15"}"#,
        )
        .unwrap();
        fs::write(entry.join("content.md"), "# Hi").unwrap();

        let folio = Folio::new(tmp.path(), Mode::Development).unwrap();
        assert!(run(&folio, "post", "hello", false).await.is_ok());
        assert!(run(&folio, "post", "HELLO", true).await.is_ok());

        let err = run(&folio, "post", "missing", false).await.unwrap_err();
        assert_eq!(err.to_string(), "No post named 'missing'");
        assert!(run(&folio, "blog", "hello", false).await.is_err());
    }
}
