/*!
 * Character-class predicates used to classify corpus lines.
 *
 * Each predicate answers a single presence question about a line. The
 * patterns are compiled once on first use and shared by every filter run.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Any ASCII letter, including a single isolated one
static LATIN_LETTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]").expect("Invalid Latin letter regex")
});

/// A whole-word run of Roman numeral letters.
///
/// Word boundaries are ASCII-only so that kana and kanji act as separators
/// ("第III章" matches, "VISA" does not).
static ROMAN_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\b[IVXLCDM]+\b").expect("Invalid Roman numeral regex")
});

/// A run of ASCII letters directly between quote characters
static QUOTED_LATIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[「」『』"'][A-Za-z]+[「」『』"']"#).expect("Invalid quoted Latin word regex")
});

/// Check whether the text contains any ASCII letter
pub fn has_latin_letters(text: &str) -> bool {
    LATIN_LETTER_REGEX.is_match(text)
}

/// Check whether the text contains a whole-word Roman numeral token
pub fn has_roman_numeral(text: &str) -> bool {
    ROMAN_TOKEN_REGEX.is_match(text)
}

/// Check whether the text contains a quoted Latin word such as 「Protego」.
///
/// Opening and closing characters are not required to pair up, so `「word"`
/// also counts.
pub fn has_quoted_latin_word(text: &str) -> bool {
    QUOTED_LATIN_REGEX.is_match(text)
}
