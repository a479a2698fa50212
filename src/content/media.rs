//! Media placeholder rewriting
//!
//! Bodies reference co-located assets with `{{media:<name>}}`. The scanner
//! below walks the text once, yielding literal text and placeholder names
//! in order, so rewriting is linear and always terminates. A rewritten body
//! never contains `{{media:`; a marker nested inside a name has no `}}` of
//! its own and is reported as unterminated.

use thiserror::Error;

const OPEN: &str = "{{media:";
const CLOSE: &str = "}}";

/// A `{{media:` marker with no closing `}}`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unterminated media placeholder at byte {offset}")]
pub struct UnterminatedPlaceholder {
    /// Byte offset of the opening marker
    pub offset: usize,
}

/// A piece of scanned body text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    Media(&'a str),
}

/// Single-pass iterator over the spans of a body
pub struct MediaSpans<'a> {
    text: &'a str,
    cursor: usize,
    /// Placeholder name found while emitting the text before it
    pending: Option<&'a str>,
    failed: bool,
}

impl<'a> MediaSpans<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            cursor: 0,
            pending: None,
            failed: false,
        }
    }
}

impl<'a> Iterator for MediaSpans<'a> {
    type Item = Result<Span<'a>, UnterminatedPlaceholder>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(name) = self.pending.take() {
            return Some(Ok(Span::Media(name)));
        }
        if self.failed || self.cursor >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.cursor..];
        let Some(open) = rest.find(OPEN) else {
            self.cursor = self.text.len();
            return Some(Ok(Span::Text(rest)));
        };

        let start = self.cursor + open;
        let name_start = start + OPEN.len();
        let Some(close) = self.text[name_start..].find(CLOSE) else {
            self.failed = true;
            return Some(Err(UnterminatedPlaceholder { offset: start }));
        };

        let name = &self.text[name_start..name_start + close];
        // A marker inside the name is itself left without a closing `}}`
        if let Some(nested) = name.find(OPEN) {
            self.failed = true;
            return Some(Err(UnterminatedPlaceholder {
                offset: name_start + nested,
            }));
        }
        self.cursor = name_start + close + CLOSE.len();

        if open == 0 {
            Some(Ok(Span::Media(name)))
        } else {
            self.pending = Some(name);
            Some(Ok(Span::Text(&rest[..open])))
        }
    }
}

/// Replace every media placeholder with `/{category_dir}/{slug}/media/<name>`
pub fn rewrite_media(
    body: &str,
    category_dir: &str,
    slug: &str,
) -> Result<String, UnterminatedPlaceholder> {
    let prefix = format!("/{}/{}/media/", category_dir, slug);
    let mut out = String::with_capacity(body.len());

    for span in MediaSpans::new(body) {
        match span? {
            Span::Text(text) => out.push_str(text),
            Span::Media(name) => {
                out.push_str(&prefix);
                out.push_str(name);
            }
        }
    }

    Ok(out)
}
