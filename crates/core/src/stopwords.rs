//! The fixed English stop-word set.
//!
//! Membership is a static asset (`assets/stopwords.txt`) embedded at compile
//! time and parsed once per process. The set is never mutated after loading,
//! so it is shared by reference across concurrent analyses.

use std::collections::HashSet;
use std::sync::LazyLock;

const STOPWORDS_ASSET: &str = include_str!("../assets/stopwords.txt");

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| parse_word_list(STOPWORDS_ASSET));

/// Parse a word-list asset: one word per line, `#` comments and blank lines skipped.
fn parse_word_list(source: &'static str) -> HashSet<&'static str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Returns the process-wide stop-word set.
pub fn stopwords() -> &'static HashSet<&'static str> {
    &STOPWORDS
}

/// Whether a normalized (lowercase) word is a stop word.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_function_words_present() {
        for word in ["the", "a", "and", "of", "is", "they", "s", "t", "underneath"] {
            assert!(is_stopword(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_content_words_absent() {
        for word in ["fox", "quick", "readability", "dog", ""] {
            assert!(!is_stopword(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn test_comments_not_loaded() {
        assert!(stopwords().iter().all(|w| !w.starts_with('#')));
        assert!(!is_stopword("articles"));
    }

    #[test]
    fn test_lookup_is_case_sensitive_on_normalized_form() {
        assert!(!is_stopword("The"));
    }

    #[test]
    fn test_set_size() {
        assert_eq!(stopwords().len(), 135);
    }
}
