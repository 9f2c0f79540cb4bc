//! Hebrew verse-number labels to integers.
//!
//! Verse labels in the data file are written with Hebrew letters used as
//! digits (`א` = 1, `י` = 10, `יא` = 11, ...), optionally followed by a
//! geresh. Conversion is a display aid: it never fails, unknown characters
//! simply add nothing.

/// Geresh. Marks a letter sequence as a numeral and carries no value.
pub const GERESH: char = '\u{05F3}';

const UNITS: [(char, u32); 9] = [
    ('א', 1),
    ('ב', 2),
    ('ג', 3),
    ('ד', 4),
    ('ה', 5),
    ('ו', 6),
    ('ז', 7),
    ('ח', 8),
    ('ט', 9),
];

const TENS: [(char, u32); 9] = [
    ('י', 10),
    ('כ', 20),
    ('ל', 30),
    ('מ', 40),
    ('נ', 50),
    ('ס', 60),
    ('ע', 70),
    ('פ', 80),
    ('צ', 90),
];

// 15 and 16 are written ט+ו and ט+ז so the label never spells a divine name (י+ה, י+ו).
const IRREGULAR: [(&str, u32); 2] = [("טו", 15), ("טז", 16)];

fn table_value(table: &[(char, u32)], c: char) -> u32 {
    table
        .iter()
        .find(|(letter, _)| *letter == c)
        .map_or(0, |(_, value)| *value)
}

fn letter_value(c: char) -> u32 {
    table_value(&UNITS, c) + table_value(&TENS, c)
}

/// Converts a Hebrew numeral label (e.g. `"יב"`, `"טו׳"`) to its integer value.
///
/// Irregular composites are matched first; otherwise the value is the sum of
/// each letter's digit value. Empty or unrecognised input yields 0.
pub fn hebrew_to_number(label: &str) -> u32 {
    let cleaned: String = label.chars().filter(|&c| c != GERESH).collect();

    if let Some((_, value)) = IRREGULAR.iter().find(|(composite, _)| *composite == cleaned) {
        return *value;
    }

    digit_sum(cleaned.chars().map(letter_value))
}

fn digit_sum(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0u32, |acc, v| acc.saturating_add(v))
}
