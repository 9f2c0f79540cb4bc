//! Moving between the title page, front matter and chapters.

use serde::Serialize;

use crate::state::View;
use crate::types::document::{Book, Document};

/// Hebrew sidebar labels for the known front-matter sections.
const FRONT_MATTER_LABELS: [(&str, &str); 8] = [
    ("title", "שער"),
    ("translator_intro", "מבוא המתרגם"),
    ("title_page", "דף השער"),
    ("introduction", "מבוא"),
    ("three_witnesses", "עדות שלשת העדים"),
    ("eight_witnesses", "עדות שמונה עדים"),
    ("joseph_smith", "עדות יוסף סמית"),
    ("brief_explanation", "ביאור קצר"),
];

pub fn front_matter_label(id: &str) -> Option<&'static str> {
    FRONT_MATTER_LABELS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
}

/// Chapter after `(book, chapter)`, crossing into the next book's first chapter.
pub fn next_chapter(doc: &Document, book: usize, chapter: usize) -> Option<(usize, usize)> {
    let current = doc.book(book)?;
    if chapter + 1 < current.chapters.len() {
        return Some((book, chapter + 1));
    }
    (book + 1..doc.books.len())
        .find(|&b| !doc.books[b].chapters.is_empty())
        .map(|b| (b, 0))
}

/// Chapter before `(book, chapter)`, crossing into the previous book's last chapter.
pub fn prev_chapter(doc: &Document, book: usize, chapter: usize) -> Option<(usize, usize)> {
    doc.book(book)?;
    if chapter > 0 {
        return Some((book, chapter - 1));
    }
    (0..book)
        .rev()
        .find(|&b| !doc.books[b].chapters.is_empty())
        .map(|b| (b, doc.books[b].chapters.len() - 1))
}

/// Neighbouring front-matter ids of `id`, as `(previous, next)`.
pub fn front_matter_neighbours<'a>(
    doc: &'a Document,
    id: &str,
) -> (Option<&'a str>, Option<&'a str>) {
    let Some(idx) = doc.front_matter_index(id) else {
        return (None, None);
    };
    let prev = idx
        .checked_sub(1)
        .and_then(|i| doc.front_matter.get(i))
        .map(|fm| fm.id.as_str());
    let next = doc.front_matter.get(idx + 1).map(|fm| fm.id.as_str());
    (prev, next)
}

/// Checks a stored view against the document; anything stale becomes `Title`.
pub fn resolve_view(doc: &Document, view: &View) -> View {
    match view {
        View::Chapter { book, chapter } if doc.chapter(*book, *chapter).is_some() => view.clone(),
        View::FrontMatter { id } if id == "title" => View::Title,
        View::FrontMatter { id } if doc.front_matter(id).is_some() => view.clone(),
        _ => View::Title,
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TocFrontMatter {
    pub id: String,
    pub label: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TocBook {
    pub index: usize,
    pub id: String,
    pub name: String,
    /// Listed only for books with more than one chapter.
    pub chapters: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOfContents {
    pub front_matter: Vec<TocFrontMatter>,
    pub books: Vec<TocBook>,
}

/// Builds the sidebar contents. `book_name` supplies the display name of each
/// book so the caller controls the label language.
pub fn table_of_contents<F>(doc: &Document, book_name: F) -> TableOfContents
where
    F: Fn(&Book) -> String,
{
    let front_matter = doc
        .front_matter
        .iter()
        .map(|fm| TocFrontMatter {
            id: fm.id.clone(),
            label: front_matter_label(&fm.id)
                .map_or_else(|| fm.title.clone(), str::to_string),
        })
        .collect();

    let books = doc
        .books
        .iter()
        .enumerate()
        .map(|(index, book)| TocBook {
            index,
            id: book.id.clone(),
            name: book_name(book),
            chapters: if book.is_multi_chapter() {
                book.chapters.iter().map(|c| c.number.clone()).collect()
            } else {
                Vec::new()
            },
        })
        .collect();

    TableOfContents {
        front_matter,
        books,
    }
}
