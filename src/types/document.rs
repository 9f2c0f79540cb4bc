use serde::{Deserialize, Deserializer, Serialize};

/// A value the data file may give as a JSON string, a number, or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum Label {
    Text(String),
    Int(i64),
    Float(f64),
}

fn label_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Label>::deserialize(deserializer)? {
        Some(Label::Text(s)) => s,
        Some(Label::Int(n)) => n.to_string(),
        Some(Label::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Verse {
    #[serde(deserialize_with = "label_as_string")]
    pub num: String,
    /// Hebrew source text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    /// English translation.
    #[serde(default, rename = "en", deserialize_with = "null_as_empty")]
    pub translation: String,
}

impl Verse {
    pub fn new(
        num: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            num: num.into(),
            text: text.into(),
            translation: translation.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.translation.trim().is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    #[serde(deserialize_with = "label_as_string")]
    pub number: String,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub header: Vec<String>,
    #[serde(default)]
    pub verses: Vec<Verse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub header: Vec<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn is_multi_chapter(&self) -> bool {
        self.chapters.len() > 1
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub content: Vec<String>,
}

/// The whole pre-built reading document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    #[serde(default)]
    pub front_matter: Vec<FrontMatter>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Document {
    pub fn book(&self, book_idx: usize) -> Option<&Book> {
        self.books.get(book_idx)
    }

    pub fn chapter(&self, book_idx: usize, chapter_idx: usize) -> Option<&Chapter> {
        self.book(book_idx)?.chapters.get(chapter_idx)
    }

    pub fn front_matter_index(&self, id: &str) -> Option<usize> {
        self.front_matter.iter().position(|fm| fm.id == id)
    }

    pub fn front_matter(&self, id: &str) -> Option<&FrontMatter> {
        self.front_matter.iter().find(|fm| fm.id == id)
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| &b.chapters)
            .map(|c| c.verses.len())
            .sum()
    }
}
