use interlinear_reader::alignment::{split_proportionally, BreakStarters, SourceChunker, SOF_PASUQ};
use interlinear_reader::{align, hebrew_to_number, PhraseGroup};
use proptest::prelude::*;

const VOCAB: [&str; 12] = [
    "כִּי",
    "אֲשֶׁר",
    "אֶת",
    "וַיֹּאמֶר",
    "וְהָיָה",
    "וּבָנָיו",
    "אֱלֹהִים",
    "הָאָרֶץ",
    "נֶפִי",
    "יָבֹא",
    "דָּבָר",
    "בְּנֵי",
];

fn normalized(text: &str) -> String {
    text.replace(SOF_PASUQ, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn arb_verse() -> impl Strategy<Value = String> {
    let word = prop::sample::select(VOCAB.to_vec());
    let gap = prop::sample::select(vec![" ", "  ", "\t", " \n "]);
    (prop::collection::vec((word, gap), 0..40), any::<bool>()).prop_map(|(parts, end_mark)| {
        let mut text: String = parts.into_iter().map(|(w, g)| format!("{}{}", w, g)).collect();
        if end_mark {
            text.push(SOF_PASUQ);
        }
        text
    })
}

fn arb_translation() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z,.;]{1,12}", 0..60).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn chunks_rebuild_the_verse(text in arb_verse()) {
        let chunks = SourceChunker::default().chunk(&text);
        prop_assert_eq!(chunks.join(" "), normalized(&text));
        for chunk in &chunks {
            let words = chunk.split(' ').count();
            prop_assert!((1..=3).contains(&words), "chunk {:?} has {} words", chunk, words);
        }
    }

    #[test]
    fn break_starters_only_open_or_follow_the_starter(text in arb_verse()) {
        let starters = BreakStarters::hebrew();
        for chunk in SourceChunker::default().chunk(&text) {
            let words: Vec<&str> = chunk.split(' ').collect();
            for word in words.iter().skip(2) {
                prop_assert!(!starters.is_break_starter(word));
            }
        }
    }

    #[test]
    fn split_has_exact_length_and_balanced_slices(text in arb_translation(), n in 2usize..12) {
        let slices = split_proportionally(&text, n);
        prop_assert_eq!(slices.len(), n);

        let rebuilt: Vec<&str> = slices.iter().map(String::as_str).filter(|s| !s.is_empty()).collect();
        prop_assert_eq!(rebuilt.join(" "), normalized(&text));

        let counts: Vec<usize> = slices.iter().map(|s| s.split_whitespace().count()).collect();
        let max = counts.iter().copied().max().unwrap_or(0);
        let min = counts.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn split_into_one_is_identity(text in ".{0,40}") {
        prop_assert_eq!(split_proportionally(&text, 1), vec![text.clone()]);
    }

    #[test]
    fn alignment_follows_source_chunking(source in arb_verse(), translation in arb_translation()) {
        let chunks = SourceChunker::default().chunk(&source);
        let groups = align(&source, &translation);

        if chunks.is_empty() {
            prop_assert_eq!(groups.len(), usize::from(!translation.is_empty()));
        } else {
            prop_assert_eq!(groups.len(), chunks.len());
            let sources: Vec<String> = groups.iter().map(|g| g.source_phrase.clone()).collect();
            prop_assert_eq!(sources, chunks);
        }
        prop_assert_eq!(align(&source, &translation), groups);
    }

    #[test]
    fn geresh_never_changes_value(label in "[אבגדהוזחטיכלמנסעפצ]{0,3}") {
        prop_assert_eq!(hebrew_to_number(&label), hebrew_to_number(&format!("{}\u{05F3}", label)));
    }
}

#[test]
fn starter_in_second_position_keeps_verse_whole() {
    // three tokens: the particle is absorbed as the first extension
    let groups = align("וְהָיָה כִּי יָבֹא", "and it came to pass that he came");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].translation_phrase, "and it came to pass that he came");

    let groups = align("בְּנֵי הָאָרֶץ כִּי יָבֹא\u{05C3}", "and it came to pass that he came");
    assert_eq!(
        groups,
        vec![
            PhraseGroup::new("בְּנֵי הָאָרֶץ", "and it came to"),
            PhraseGroup::new("כִּי יָבֹא", "pass that he came"),
        ]
    );
}

#[test]
fn irregular_composites() {
    assert_eq!(hebrew_to_number("טו"), 15);
    assert_eq!(hebrew_to_number("טז"), 16);
    assert_eq!(hebrew_to_number(""), 0);
}
