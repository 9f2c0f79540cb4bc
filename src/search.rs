//! Linear substring search over every verse of the document.

use serde::Serialize;

use crate::types::document::Document;

pub const DEFAULT_LIMIT: usize = 30;
pub const MIN_QUERY_CHARS: usize = 2;
const PREVIEW_CHARS: usize = 80;
const PREVIEW_ELLIPSIS: &str = "...";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub book: usize,
    pub chapter: usize,
    /// `"<book> <chapter>:<verse>"`, or `"<book> <verse>"` for single-chapter books.
    pub reference: String,
    /// Start of the verse text, source preferred over translation.
    pub preview: String,
}

impl SearchHit {
    /// Preview as listed in results, always followed by an ellipsis.
    pub fn preview_line(&self) -> String {
        format!("{}{}", self.preview, PREVIEW_ELLIPSIS)
    }
}

/// Finds verses containing `query`.
///
/// Hebrew text is matched exactly; the English translation ignores case.
/// Results come in reading order and stop at `limit`.
pub fn search(doc: &Document, query: &str, limit: usize) -> Vec<SearchHit> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    let mut hits = Vec::new();
    for (book_idx, book) in doc.books.iter().enumerate() {
        for (chapter_idx, chapter) in book.chapters.iter().enumerate() {
            for verse in &chapter.verses {
                if hits.len() >= limit {
                    return hits;
                }
                let matched = verse.text.contains(query)
                    || verse.translation.to_lowercase().contains(&query_lower);
                if !matched {
                    continue;
                }

                let reference = if book.is_multi_chapter() {
                    format!("{} {}:{}", book.name, chapter.number, verse.num)
                } else {
                    format!("{} {}", book.name, verse.num)
                };
                let text = if verse.text.is_empty() {
                    &verse.translation
                } else {
                    &verse.text
                };
                hits.push(SearchHit {
                    book: book_idx,
                    chapter: chapter_idx,
                    reference,
                    preview: text.chars().take(PREVIEW_CHARS).collect(),
                });
            }
        }
    }
    hits
}
