//! Interlinear alignment: Hebrew phrase chunks paired with proportional
//! slices of the English translation.

pub mod chunker;
pub mod splitter;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use chunker::{BreakStarters, SourceChunker, MAX_EXTENSION, SOF_PASUQ};
pub use splitter::split_proportionally;

/// One interlinear unit. An empty `source_phrase` marks a verse that has a
/// translation but no source text.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseGroup {
    pub source_phrase: String,
    pub translation_phrase: String,
}

impl PhraseGroup {
    pub fn new(source_phrase: impl Into<String>, translation_phrase: impl Into<String>) -> Self {
        Self {
            source_phrase: source_phrase.into(),
            translation_phrase: translation_phrase.into(),
        }
    }

    pub fn has_source(&self) -> bool {
        !self.source_phrase.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhraseAligner {
    chunker: SourceChunker,
}

impl PhraseAligner {
    pub fn new(chunker: SourceChunker) -> Self {
        Self { chunker }
    }

    pub fn with_break_starters(break_starters: BreakStarters) -> Self {
        Self::new(SourceChunker::new(break_starters))
    }

    pub fn chunker(&self) -> &SourceChunker {
        &self.chunker
    }

    /// Pairs the source chunks of a verse with equally many translation slices.
    ///
    /// The number of groups is decided by the source chunking alone. A verse
    /// with no source words but a non-empty translation, even one that is only
    /// whitespace, yields a single group with an empty source phrase and the
    /// whole translation.
    pub fn align(&self, source: &str, translation: &str) -> Vec<PhraseGroup> {
        let source_phrases = self.chunker.chunk(source);

        if source_phrases.is_empty() {
            if translation.is_empty() {
                return Vec::new();
            }
            return vec![PhraseGroup::new("", translation)];
        }

        let slices = split_proportionally(translation, source_phrases.len());
        debug!(groups = source_phrases.len(), "aligned verse");

        source_phrases
            .into_iter()
            .zip(slices)
            .map(|(source_phrase, translation_phrase)| PhraseGroup {
                source_phrase,
                translation_phrase,
            })
            .collect()
    }
}

static DEFAULT_ALIGNER: Lazy<PhraseAligner> = Lazy::new(PhraseAligner::default);

/// Aligns with the built-in Hebrew break-starter table.
pub fn align(source: &str, translation: &str) -> Vec<PhraseGroup> {
    DEFAULT_ALIGNER.align(source, translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_empty_yields_nothing() {
        assert!(align("", "").is_empty());
        assert!(align("  ", "").is_empty());
    }

    #[test]
    fn whitespace_translation_still_gets_a_group() {
        assert_eq!(align("", " "), vec![PhraseGroup::new("", " ")]);
        assert_eq!(align("  ", " "), vec![PhraseGroup::new("", " ")]);
    }

    #[test]
    fn missing_source_pairs_placeholder_with_full_translation() {
        let groups = align("", "hello");
        assert_eq!(groups, vec![PhraseGroup::new("", "hello")]);
        assert!(!groups[0].has_source());
    }

    #[test]
    fn missing_translation_pairs_chunks_with_empty_strings() {
        let groups = align("א ב ג כִּי", "");
        assert_eq!(
            groups,
            vec![PhraseGroup::new("א ב ג", ""), PhraseGroup::new("כִּי", "")]
        );
    }

    #[test]
    fn single_chunk_takes_whole_translation_verbatim() {
        let groups = align("וְהָיָה כִּי יָבֹא", "and it came to pass that he came");
        assert_eq!(
            groups,
            vec![PhraseGroup::new(
                "וְהָיָה כִּי יָבֹא",
                "and it came to pass that he came"
            )]
        );
    }

    #[test]
    fn translation_splits_evenly_over_chunks() {
        let groups = align("הוּא בָא כִּי יָבֹא", "and it came to pass that he came");
        assert_eq!(
            groups,
            vec![
                PhraseGroup::new("הוּא בָא", "and it came to"),
                PhraseGroup::new("כִּי יָבֹא", "pass that he came"),
            ]
        );
    }

    #[test]
    fn custom_table_changes_grouping() {
        let aligner = PhraseAligner::with_break_starters(
            BreakStarters::new(["ב"], Vec::<String>::new()).unwrap(),
        );
        let groups = aligner.align("א ג ב", "one two three");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1], PhraseGroup::new("ב", "three"));
    }
}
