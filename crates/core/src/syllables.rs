//! Heuristic syllable estimation.
//!
//! Syllables are approximated by counting runs of vowels (`a e i o u y`) in the
//! letter-only, lowercased form of a word, with a correction for a trailing
//! silent `e`. This is not a dictionary lookup: irregular words (silent letters,
//! diphthongs spanning two syllables, `-le` endings) are routinely off by one.

/// Words of this many letters or fewer always count as one syllable.
const SHORT_WORD_LEN: usize = 3;

/// Minimum letter-only length for a word to be classed as complex.
const COMPLEX_MIN_LEN: usize = 3;

/// Minimum syllable count for a word to be classed as complex.
const COMPLEX_MIN_SYLLABLES: usize = 3;

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// Lowercase a word and drop every character that is not an ASCII letter.
pub fn letters_only(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Estimate the syllable count of a single word.
///
/// Returns 0 only when nothing remains after stripping non-letters; every
/// other input yields at least 1.
///
/// # Example
///
/// ```rust
/// use wordgauge_core::syllables::count_syllables;
///
/// assert_eq!(count_syllables("the"), 1);
/// assert_eq!(count_syllables("reading"), 2);
/// assert_eq!(count_syllables("Readability!"), 5);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let cleaned = letters_only(word);
    count_cleaned(&cleaned)
}

/// Syllable count for a word that is already lowercase and letter-only.
pub(crate) fn count_cleaned(cleaned: &str) -> usize {
    if cleaned.is_empty() {
        return 0;
    }
    if cleaned.len() <= SHORT_WORD_LEN {
        return 1;
    }

    let bytes = cleaned.as_bytes();
    let mut groups = 0usize;
    let mut in_group = false;
    for &b in bytes {
        let vowel = is_vowel(b);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    // single trailing e, not "ee"
    let len = bytes.len();
    if bytes[len - 1] == b'e' && bytes[len - 2] != b'e' {
        groups = groups.saturating_sub(1);
    }

    groups.max(1)
}

/// Whether a word counts as "complex" for the Gunning Fog and SMOG formulas.
///
/// A complex word has more than two letters and at least three estimated
/// syllables.
pub fn is_complex_word(word: &str) -> bool {
    let cleaned = letters_only(word);
    is_complex_cleaned(&cleaned, count_cleaned(&cleaned))
}

pub(crate) fn is_complex_cleaned(cleaned: &str, syllables: usize) -> bool {
    cleaned.len() >= COMPLEX_MIN_LEN && syllables >= COMPLEX_MIN_SYLLABLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", 1)]
    #[case("the", 1)]
    #[case("fox", 1)]
    #[case("quick", 1)]
    #[case("sleeps", 1)]
    #[case("table", 1)]
    #[case("reading", 2)]
    #[case("agree", 2)]
    #[case("beautiful", 3)]
    #[case("readability", 5)]
    #[case("rhythm", 1)]
    fn test_count_syllables(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(count_syllables(word), expected);
    }

    #[test]
    fn test_punctuation_and_case_are_ignored() {
        assert_eq!(count_syllables("Beautiful,"), count_syllables("beautiful"));
        assert_eq!(count_syllables("\"READING\""), 2);
    }

    #[test]
    fn test_empty_after_cleaning() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("1984"), 0);
        assert_eq!(count_syllables("--"), 0);
    }

    #[test]
    fn test_never_below_one_for_letters() {
        assert_eq!(count_syllables("bcdfg"), 1);
        assert_eq!(count_syllables("ee"), 1);
        assert!(count_syllables("Supercalifragilisticexpialidocious") >= 1);
    }

    #[test]
    fn test_complex_words() {
        assert!(is_complex_word("beautiful"));
        assert!(is_complex_word("readability"));
        assert!(!is_complex_word("reading"));
        assert!(!is_complex_word("the"));
        assert!(!is_complex_word("42"));
    }

    #[test]
    fn test_letters_only() {
        assert_eq!(letters_only("Don't!"), "dont");
        assert_eq!(letters_only("café"), "caf");
        assert_eq!(letters_only("x86_64"), "x");
    }
}
