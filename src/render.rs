//! HTML fragments for verses, chapters, front matter and the title page.
//!
//! All document text is escaped. The output uses the class names of the
//! reader's stylesheet (`verse-inter`, `inter-phrase`, `verse-dual`, ...).

use std::fmt::Write as _;

use crate::alignment::PhraseAligner;
use crate::error::{ReaderError, Result};
use crate::navigation::{front_matter_neighbours, next_chapter, prev_chapter};
use crate::numerals::hebrew_to_number;
use crate::state::{DisplayMode, View, ViewState};
use crate::types::document::{Book, Document, Verse};

/// Shown where a verse has no text in one of the languages.
pub const PLACEHOLDER: &str = "[—]";

const ENGLISH_BOOK_NAMES: [(&str, &str); 15] = [
    ("1_nephi", "1 Nephi"),
    ("2_nephi", "2 Nephi"),
    ("jacob", "Jacob"),
    ("enos", "Enos"),
    ("jarom", "Jarom"),
    ("omni", "Omni"),
    ("words_of_mormon", "Words of Mormon"),
    ("mosiah", "Mosiah"),
    ("alma", "Alma"),
    ("helaman", "Helaman"),
    ("3_nephi", "3 Nephi"),
    ("4_nephi", "4 Nephi"),
    ("mormon", "Mormon"),
    ("ether", "Ether"),
    ("moroni", "Moroni"),
];

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display name of a book: English names in `en` mode where known,
/// otherwise the name from the document.
pub fn book_name(book: &Book, mode: DisplayMode) -> String {
    if mode.is_english() {
        if let Some((_, name)) = ENGLISH_BOOK_NAMES.iter().find(|(id, _)| *id == book.id) {
            return (*name).to_string();
        }
    }
    book.name.clone()
}

fn chapter_label(number: &str, mode: DisplayMode) -> String {
    if mode.is_english() {
        format!("Chapter {}", number)
    } else {
        format!("פרק {}", number)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    aligner: PhraseAligner,
}

impl Renderer {
    pub fn new(aligner: PhraseAligner) -> Self {
        Self { aligner }
    }

    pub fn aligner(&self) -> &PhraseAligner {
        &self.aligner
    }

    /// Renders one verse. Returns an empty string when the verse has nothing
    /// to show in `mode`.
    pub fn render_verse(&self, verse: &Verse, mode: DisplayMode) -> String {
        let num = escape_html(&verse.num);
        match mode {
            DisplayMode::Inter => {
                let groups = self.aligner.align(&verse.text, &verse.translation);
                if groups.is_empty() {
                    return String::new();
                }
                let mut html = String::from("<div class=\"verse-inter\">");
                let _ = write!(html, "<span class=\"verse-num-inter\">{}</span>", num);
                for group in &groups {
                    html.push_str("<span class=\"inter-phrase\">");
                    if group.has_source() {
                        let _ = write!(
                            html,
                            "<span class=\"inter-heb\">{}</span>",
                            escape_html(&group.source_phrase)
                        );
                    } else {
                        let _ = write!(
                            html,
                            "<span class=\"inter-heb\" style=\"color:var(--ink-faint)\">{}</span>",
                            PLACEHOLDER
                        );
                    }
                    let _ = write!(
                        html,
                        "<span class=\"inter-eng\">{}</span></span>",
                        escape_html(&group.translation_phrase)
                    );
                }
                html.push_str("</div>");
                html
            }
            DisplayMode::Dual => {
                let column = |text: &str| {
                    if text.is_empty() {
                        format!("<span class=\"empty\">{}</span>", PLACEHOLDER)
                    } else {
                        escape_html(text)
                    }
                };
                format!(
                    "<div class=\"verse-dual\">\
                     <div class=\"verse-eng\">{}</div>\
                     <div class=\"verse-center\"><span class=\"vnum-heb\">{}</span><span class=\"vnum-eng\">{}</span></div>\
                     <div class=\"verse-heb\">{}</div>\
                     </div>",
                    column(&verse.translation),
                    num,
                    hebrew_to_number(&verse.num),
                    column(&verse.text)
                )
            }
            DisplayMode::He | DisplayMode::En => {
                let text = if mode == DisplayMode::En {
                    &verse.translation
                } else {
                    &verse.text
                };
                if text.is_empty() {
                    return String::new();
                }
                format!(
                    "<span class=\"verse\"><span class=\"verse-num\">{}</span> <span class=\"verse-text\">{}</span></span>",
                    num,
                    escape_html(text)
                )
            }
        }
    }

    pub fn render_chapter(
        &self,
        doc: &Document,
        book_idx: usize,
        chapter_idx: usize,
        view: &ViewState,
    ) -> Result<String> {
        let book = doc
            .book(book_idx)
            .ok_or_else(|| ReaderError::NotFound(format!("book {}", book_idx)))?;
        let chapter = book.chapters.get(chapter_idx).ok_or_else(|| {
            ReaderError::NotFound(format!("chapter {} of book {}", chapter_idx, book.id))
        })?;
        let mode = view.mode;
        let name = book_name(book, mode);
        let mut html = String::new();

        if chapter_idx == 0 {
            let _ = write!(html, "<div class=\"book-header\"><h2>{}</h2>", escape_html(&name));
            for line in book.header.iter().filter(|h| **h != book.name) {
                let _ = write!(html, "<div class=\"book-header-text\">{}</div>", escape_html(line));
            }
            html.push_str("</div>");
        }

        html.push_str("<div class=\"chapter\"><div class=\"chapter-head\">");
        if book.is_multi_chapter() {
            let _ = write!(
                html,
                "<div class=\"chapter-number\">{}</div>",
                escape_html(&chapter_label(&chapter.number, mode))
            );
        }
        for line in &chapter.header {
            let _ = write!(html, "<div class=\"chapter-summary\">{}</div>", escape_html(line));
        }
        html.push_str("</div><div class=\"verses-block\">");
        for verse in &chapter.verses {
            html.push_str(&self.render_verse(verse, mode));
        }
        html.push_str("</div></div>");

        html.push_str("<div class=\"chapter-nav\">");
        match next_chapter(doc, book_idx, chapter_idx) {
            Some((b, c)) => {
                let label = neighbour_label(doc, book_idx, b, c, mode);
                let _ = write!(
                    html,
                    "<button class=\"ch-nav-btn\" data-action=\"next\" data-book=\"{}\" data-ch=\"{}\">{} &#8592;</button>",
                    b,
                    c,
                    escape_html(&label)
                );
            }
            None => html.push_str("<span></span>"),
        }
        match prev_chapter(doc, book_idx, chapter_idx) {
            Some((b, c)) => {
                let label = neighbour_label(doc, book_idx, b, c, mode);
                let _ = write!(
                    html,
                    "<button class=\"ch-nav-btn\" data-action=\"prev\" data-book=\"{}\" data-ch=\"{}\">&#8594; {}</button>",
                    b,
                    c,
                    escape_html(&label)
                );
            }
            None => {
                let label = if mode.is_english() {
                    "Introduction"
                } else {
                    "ביאור קצר"
                };
                let _ = write!(
                    html,
                    "<button class=\"ch-nav-btn\" data-action=\"to-fm\" data-fm=\"brief_explanation\">&#8594; {}</button>",
                    label
                );
            }
        }
        html.push_str("</div>");
        Ok(html)
    }

    pub fn render_front_matter(&self, doc: &Document, id: &str, view: &ViewState) -> Result<String> {
        if id == "title" {
            return Ok(self.render_title_page(view));
        }
        let fm = doc
            .front_matter(id)
            .ok_or_else(|| ReaderError::NotFound(format!("front matter '{}'", id)))?;

        let mut html = String::new();
        let _ = write!(
            html,
            "<div class=\"fm-section\"><div class=\"fm-title\">{}</div>",
            escape_html(&fm.title)
        );
        for para in fm.content.iter().filter(|p| **p != fm.title) {
            let _ = write!(html, "<div class=\"fm-para\">{}</div>", escape_html(para));
        }
        html.push_str("</div>");

        let title_of = |fm_id: &str| {
            doc.front_matter(fm_id)
                .map(|f| f.title.clone())
                .unwrap_or_default()
        };
        let (prev, next) = front_matter_neighbours(doc, id);
        html.push_str("<div class=\"chapter-nav\">");
        match next {
            Some(next_id) => {
                let _ = write!(
                    html,
                    "<button class=\"ch-nav-btn\" data-action=\"fm-next\" data-fm=\"{}\">{} &#8592;</button>",
                    escape_html(next_id),
                    escape_html(&title_of(next_id))
                );
            }
            None => {
                if let Some(first) = doc.books.first() {
                    let _ = write!(
                        html,
                        "<button class=\"ch-nav-btn\" data-action=\"first-chapter\">{} &#8592;</button>",
                        escape_html(&book_name(first, view.mode))
                    );
                }
            }
        }
        if let Some(prev_id) = prev {
            let _ = write!(
                html,
                "<button class=\"ch-nav-btn\" data-action=\"fm-prev\" data-fm=\"{}\">&#8594; {}</button>",
                escape_html(prev_id),
                escape_html(&title_of(prev_id))
            );
        }
        html.push_str("</div>");
        Ok(html)
    }

    pub fn render_title_page(&self, view: &ViewState) -> String {
        let english = view.mode.is_english();
        let pick = |en: &'static str, he: &'static str| if english { en } else { he };

        let mut html = String::from("<div class=\"title-page\"><h1>ספר מורמון</h1>");
        let _ = write!(
            html,
            "<div class=\"subtitle\">{}</div>",
            pick("Another Testament of Jesus Christ", "עדות אחרת ישוע המשיח")
        );
        html.push_str("<div class=\"title-divider\"></div>");
        let _ = write!(
            html,
            "<div class=\"translator\">{}</div>",
            pick("Translated into Biblical Hebrew by", "תרגם ללשון המקרא בידי")
        );
        html.push_str(
            "<div class=\"translator\" style=\"font-weight:700;font-size:1.2rem;margin-top:4px\">כריס לאמב / Chris Lamb</div>",
        );
        html.push_str("<div class=\"edition\">מהדורה עברית ראשונה · תשפ״ו</div></div>");
        let _ = write!(
            html,
            "<div style=\"text-align:center;padding:32px 0\"><button class=\"ch-nav-btn\" id=\"startBtn\" data-fm=\"introduction\" style=\"font-size:1.1rem;padding:12px 32px\">{}</button></div>",
            pick("Introduction &#8594;", "מבוא &#8592;")
        );
        html
    }

    /// Renders whatever `view` points at, wrapped in a container carrying the
    /// display mode and font size.
    pub fn render_view(&self, doc: &Document, view: &View, state: &ViewState) -> Result<String> {
        let body = match view {
            View::Title => self.render_title_page(state),
            View::FrontMatter { id } => self.render_front_matter(doc, id, state)?,
            View::Chapter { book, chapter } => self.render_chapter(doc, *book, *chapter, state)?,
        };
        Ok(format!(
            "<div id=\"content\" data-lang=\"{}\" style=\"--fs-base:{}rem\">{}</div>",
            state.mode, state.font_size, body
        ))
    }
}

fn neighbour_label(
    doc: &Document,
    current_book: usize,
    book: usize,
    chapter: usize,
    mode: DisplayMode,
) -> String {
    let target = &doc.books[book];
    if book == current_book {
        chapter_label(&target.chapters[chapter].number, mode)
    } else {
        book_name(target, mode)
    }
}
