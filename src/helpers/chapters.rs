//! Table of contents extraction for article bodies

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Serialize;

/// A heading that article pages link to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub title: String,
    /// Anchor id, see [`chapter_id`]
    pub id: String,
}

/// Anchor id for a heading: lowercased, spaces become hyphens
pub fn chapter_id(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Collect level 1-3 headings in document order
///
/// Headings inside code blocks are not headings to the markdown parser,
/// so they never show up here.
pub fn chapters(markdown: &str) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut current: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) if level <= HeadingLevel::H3 => {
                current = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(title) = current.take() {
                    let title = title.trim().to_string();
                    if !title.is_empty() {
                        chapters.push(Chapter {
                            id: chapter_id(&title),
                            title,
                        });
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(title) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            _ => {}
        }
    }

    chapters
}
