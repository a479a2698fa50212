//! List site content

use anyhow::Result;

use crate::content::{Article, Category};
use crate::Folio;

/// List the articles of a category, optionally only the newest `recent`
pub async fn run(folio: &Folio, content_type: &str, recent: Option<usize>) -> Result<()> {
    let Some(category) = Category::from_token(content_type) else {
        anyhow::bail!("Unknown type: {}. Available: post, project", content_type);
    };

    let store = folio.store()?;
    let repository = store.repository(category);
    let articles = match recent {
        Some(limit) => repository.get_recent(limit).await?,
        None => repository.list_all().await?,
    };

    print!("{}", format_listing(category, &articles));
    Ok(())
}

fn format_listing(category: Category, articles: &[Article]) -> String {
    let heading = match category {
        Category::Post => "Posts",
        Category::Project => "Projects",
    };

    let mut out = format!("{} ({}):\n", heading, articles.len());
    for article in articles {
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            article.date, article.title, article.slug
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_listing() {
        let mut article = Article::from_record(
            r#"{"title": "Hello", "description": "", "date": "2024-01-15"}"#,
        )
        .unwrap();
        article.slug = "hello".to_string();

        assert_eq!(
            format_listing(Category::Post, &[article]),
            "Posts (1):\n  2024-01-15 - Hello [hello]\n"
        );
        assert_eq!(format_listing(Category::Project, &[]), "Projects (0):\n");
    }
}
