//! Tokenization shared by indexing and querying.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Minimum token length in characters. Single characters are mostly
/// punctuation remnants and markup noise; dropping them keeps the index small.
const MIN_TOKEN_LEN: usize = 2;

/// Split a string into normalized search tokens.
///
/// Lowercases, splits on any run of non-alphanumeric characters (Unicode
/// letters and digits are token characters, everything else is a separator),
/// and drops tokens shorter than two characters. No stemming and no stop
/// words: the same input always yields the same tokens, and index-time and
/// query-time tokenization cannot drift apart because both call this.
///
/// With the `unicode-normalization` feature (default), diacritics are folded
/// first, so "café" and "cafe" produce the same token.
pub fn tokenize(text: &str) -> Vec<String> {
    fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_owned)
        .collect()
}

/// Case-fold and strip diacritics via NFD decomposition.
///
/// - "café" → "cafe"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lightweight fold without the unicode-normalization dependency.
/// Just lowercases; assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    // This covers the most common combining diacritical marks
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_runs() {
        assert_eq!(tokenize("hello, world!"), vec!["hello", "world"]);
        assert_eq!(tokenize("foo--bar  baz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn lowercases() {
        assert_eq!(tokenize("Hello WORLD"), vec!["hello", "world"]);
    }

    #[test]
    fn drops_single_character_tokens() {
        assert_eq!(tokenize("a bc d ef"), vec!["bc", "ef"]);
        assert_eq!(tokenize("x"), Vec::<String>::new());
    }

    #[test]
    fn keeps_digits_and_mixed_tokens() {
        assert_eq!(tokenize("http/2 utf8"), vec!["http", "utf8"]);
        assert_eq!(tokenize("v1.2.3"), vec!["v1"]);
    }

    #[test]
    fn empty_and_separator_only_inputs_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?!,.;--").is_empty());
    }

    #[test]
    fn retains_non_ascii_letters() {
        assert_eq!(tokenize("данные 大きさ"), vec!["данные", "大きさ"]);
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn folds_diacritics() {
        assert_eq!(tokenize("café"), vec!["cafe"]);
        assert_eq!(tokenize("naïve Crème"), vec!["naive", "creme"]);
    }
}
