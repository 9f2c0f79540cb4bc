use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ReaderError, Result};
use crate::types::document::Document;

/// Parses the reading document from JSON text. `source_name` is only used
/// in diagnostics.
pub fn parse_document(source_name: &str, content: &str) -> Result<Document> {
    let document: Document =
        serde_json::from_str(content).map_err(|e| ReaderError::json(source_name, e))?;

    for book in &document.books {
        if book.chapters.is_empty() {
            warn!(book = %book.id, "book has no chapters");
        }
        for chapter in &book.chapters {
            let blank = chapter.verses.iter().filter(|v| v.is_blank()).count();
            if blank > 0 {
                warn!(
                    book = %book.id,
                    chapter = %chapter.number,
                    blank,
                    "chapter contains verses with neither source nor translation"
                );
            }
        }
    }

    info!(
        source = source_name,
        front_matter = document.front_matter.len(),
        books = document.books.len(),
        verses = document.verse_count(),
        "loaded document"
    );
    Ok(document)
}

pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|e| ReaderError::io(path, e))?;
    parse_document(&path.display().to_string(), &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let json = r#"{
            "front_matter": [{"id": "title", "title": "שער", "content": []}],
            "books": [{
                "id": "enos", "name": "אנוש",
                "chapters": [{"number": "א", "verses": [{"num": "א", "text": "אני", "en": "I"}]}]
            }]
        }"#;
        let doc = parse_document("inline", json).unwrap();
        assert_eq!(doc.books[0].chapters[0].verses[0].translation, "I");
        assert_eq!(doc.front_matter[0].id, "title");
    }

    #[test]
    fn malformed_json_reports_source() {
        let err = parse_document("broken.json", "{not json").unwrap_err();
        assert!(matches!(err, ReaderError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/data.json")).unwrap_err();
        assert!(matches!(err, ReaderError::Io { .. }));
    }
}
