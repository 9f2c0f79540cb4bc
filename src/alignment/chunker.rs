//! Breaks a Hebrew verse into short phrase chunks for interlinear display.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{ReaderError, Result};

/// Sof pasuq, the end-of-verse mark. Stripped before tokenizing.
pub const SOF_PASUQ: char = '\u{05C3}';

/// A chunk holds its starter plus at most this many following tokens.
pub const MAX_EXTENSION: usize = 2;

const HEBREW_WORDS: [&str; 11] = [
    "כִּי", // ki
    "אֲשֶׁר", // asher
    "הִנֵּה", // hinneh
    "לָכֵן", // lakhen
    "לֵאמֹר", // lemor
    "אֶת", // et
    "גַּם", // gam
    "אַךְ", // akh
    "אָז", // az
    "פֶּן", // pen
    "עַד", // ad
];

// vav with patah, sheva and dagesh
const HEBREW_PREFIXES: [&str; 3] = ["וַ", "וְ", "וּ"];

static HEBREW: Lazy<BreakStarters> = Lazy::new(|| {
    BreakStarters::new(HEBREW_WORDS, HEBREW_PREFIXES)
        .expect("built-in break-starter table is valid")
});

/// Tokens that should open a new chunk instead of extending the current one.
///
/// A token is a break-starter when it equals one of `words` in full or begins
/// with one of `prefixes`. Both lists compile into a single anchored regex.
#[derive(Debug, Clone)]
pub struct BreakStarters {
    words: Vec<String>,
    prefixes: Vec<String>,
    pattern: Option<Regex>,
}

impl BreakStarters {
    pub fn new<W, P>(words: W, prefixes: P) -> Result<Self>
    where
        W: IntoIterator,
        W::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();

        if words.iter().chain(prefixes.iter()).any(|s| s.trim().is_empty()) {
            return Err(ReaderError::InvalidBreakStarter(
                "break-starter entries must not be empty".to_string(),
            ));
        }

        let alternatives: Vec<String> = prefixes
            .iter()
            .map(|p| regex::escape(p))
            .chain(words.iter().map(|w| format!("{}$", regex::escape(w))))
            .collect();

        // An empty table matches nothing.
        let pattern = if alternatives.is_empty() {
            None
        } else {
            let source = format!("^(?:{})", alternatives.join("|"));
            let regex =
                Regex::new(&source).map_err(|e| ReaderError::InvalidBreakStarter(e.to_string()))?;
            Some(regex)
        };

        Ok(Self {
            words,
            prefixes,
            pattern,
        })
    }

    /// The particle and conjunction table for pointed Biblical Hebrew.
    pub fn hebrew() -> Self {
        HEBREW.clone()
    }

    /// Returns a copy of this table extended with extra entries.
    pub fn with_extra(&self, words: &[String], prefixes: &[String]) -> Result<Self> {
        Self::new(
            self.words.iter().chain(words).cloned(),
            self.prefixes.iter().chain(prefixes).cloned(),
        )
    }

    pub fn is_break_starter(&self, token: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(token))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for BreakStarters {
    fn default() -> Self {
        Self::hebrew()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceChunker {
    break_starters: BreakStarters,
}

impl SourceChunker {
    pub fn new(break_starters: BreakStarters) -> Self {
        Self { break_starters }
    }

    pub fn break_starters(&self) -> &BreakStarters {
        &self.break_starters
    }

    /// Splits `text` into phrase chunks of one to three words.
    ///
    /// Each chunk starts with the next unconsumed token and greedily takes up
    /// to [`MAX_EXTENSION`] more. Once a chunk has grown past its starter, a
    /// break-starter token closes it and opens the next chunk instead. Words
    /// are never dropped or reordered.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let cleaned: String = text.chars().filter(|&c| c != SOF_PASUQ).collect();
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let mut chunks = Vec::new();
        let mut i = 0;

        while i < words.len() {
            let mut chunk = vec![words[i]];
            i += 1;
            let mut added = 0;

            while i < words.len() && added < MAX_EXTENSION {
                let word = words[i];
                if added >= 1 && self.break_starters.is_break_starter(word) {
                    break;
                }
                chunk.push(word);
                i += 1;
                added += 1;
            }

            chunks.push(chunk.join(" "));
        }

        debug!(words = words.len(), chunks = chunks.len(), "chunked source verse");
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str) -> Vec<String> {
        SourceChunker::default().chunk(text)
    }

    #[test]
    fn empty_and_blank_input_yield_no_chunks() {
        assert!(chunk("").is_empty());
        assert!(chunk("   \t ").is_empty());
        assert!(chunk("\u{05C3}").is_empty());
        assert!(chunk(" \u{05C3} ").is_empty());
    }

    #[test]
    fn plain_words_group_in_threes() {
        assert_eq!(chunk("א ב ג ד ה ו ז"), vec!["א ב ג", "ד ה ו", "ז"]);
    }

    #[test]
    fn sof_pasuq_is_stripped() {
        assert_eq!(chunk("א ב ג ד\u{05C3}"), vec!["א ב ג", "ד"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(chunk("  א \t ב\n\nג  "), vec!["א ב ג"]);
    }

    #[test]
    fn break_starter_closes_a_grown_chunk() {
        assert_eq!(chunk("א ב כִּי ג"), vec!["א ב", "כִּי ג"]);
    }

    #[test]
    fn break_starter_right_after_starter_is_absorbed() {
        assert_eq!(chunk("וְהָיָה כִּי יָבֹא"), vec!["וְהָיָה כִּי יָבֹא"]);
    }

    #[test]
    fn break_starter_may_itself_start_a_chunk() {
        assert_eq!(chunk("אֲשֶׁר אֶת ב ג"), vec!["אֲשֶׁר אֶת ב", "ג"]);
    }

    #[test]
    fn prefix_forms_break() {
        assert_eq!(
            chunk("א ב וַיֹּאמֶר ג ד וּבָנָיו"),
            vec!["א ב", "וַיֹּאמֶר ג ד", "וּבָנָיו"]
        );
    }

    #[test]
    fn whole_word_particles_only_match_in_full() {
        // ad as a prefix of a longer word is not a break-starter
        let starters = BreakStarters::hebrew();
        assert!(starters.is_break_starter("עַד"));
        assert!(!starters.is_break_starter("עַדם"));
        assert!(starters.is_break_starter("וְהָיָה"));
        assert!(!starters.is_break_starter("ו"));
    }

    #[test]
    fn extended_table_adds_break_points() {
        let starters = BreakStarters::hebrew()
            .with_extra(&["ג".to_string()], &[])
            .unwrap();
        let chunker = SourceChunker::new(starters);
        assert_eq!(chunker.chunk("א ב ג ד"), vec!["א ב", "ג ד"]);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let starters = BreakStarters::new(["a.b"], ["("]).unwrap();
        assert!(starters.is_break_starter("a.b"));
        assert!(!starters.is_break_starter("axb"));
        assert!(starters.is_break_starter("(x"));
    }

    #[test]
    fn empty_entries_are_rejected() {
        assert!(BreakStarters::new([""], Vec::<String>::new()).is_err());
        assert!(BreakStarters::new(Vec::<String>::new(), [" "]).is_err());
    }

    #[test]
    fn empty_table_never_breaks() {
        let starters = BreakStarters::new(Vec::<String>::new(), Vec::<String>::new()).unwrap();
        assert!(!starters.is_break_starter("כִּי"));
        let chunker = SourceChunker::new(starters);
        assert_eq!(chunker.chunk("א ב כִּי ג"), vec!["א ב כִּי", "ג"]);
    }
}
