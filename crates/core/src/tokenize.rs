//! Splitting raw text into words, sentences, and paragraphs.
//!
//! The [`Tokenizer`] runs in one of two modes:
//!
//! - [`TokenizationMode::Whitespace`] (default): every run of non-whitespace is a
//!   word, including fragments like `--` or `42` that carry no letters. Such
//!   fragments count toward the word total but have an empty normalized form.
//! - [`TokenizationMode::LetterRuns`]: words are runs of letters and
//!   apostrophes, and compound camelCase runs are split at each
//!   lowercase-to-uppercase transition (`wordOne` → `word`, `One`), except
//!   directly after a `Mc` or `Mac` name prefix (`McDonald`, `MacBook`).
//!
//! Sentence and paragraph counts do not depend on the mode.
//!
//! # Example
//!
//! ```rust
//! use wordgauge_core::tokenize::{Tokenizer, TokenizationMode};
//!
//! let tokens = Tokenizer::new(TokenizationMode::LetterRuns).tokenize("parseHtml and McDonald");
//! let surfaces: Vec<&str> = tokens.words.iter().map(|w| w.surface.as_str()).collect();
//! assert_eq!(surfaces, vec!["parse", "Html", "and", "McDonald"]);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::syllables;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("sentence boundary pattern is valid"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid"));

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z'\u{2019}]+").expect("letter run pattern is valid"));

/// Name prefixes that suppress a camelCase split directly after them.
const NAME_PREFIXES: [&str; 2] = ["Mc", "Mac"];

/// How raw text is cut into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizationMode {
    /// Split on runs of whitespace.
    #[default]
    Whitespace,
    /// Extract letter/apostrophe runs and split camelCase compounds.
    LetterRuns,
}

impl FromStr for TokenizationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whitespace" | "ws" => Ok(Self::Whitespace),
            "letter-runs" | "letter_runs" | "letters" => Ok(Self::LetterRuns),
            _ => Err(format!("Invalid tokenization mode: {}. Valid options: whitespace, letter-runs", s)),
        }
    }
}

impl fmt::Display for TokenizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitespace => write!(f, "whitespace"),
            Self::LetterRuns => write!(f, "letter-runs"),
        }
    }
}

/// A single token with its derived forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The token exactly as it appeared in the input.
    pub surface: String,
    /// Lowercase letters and apostrophes only; empty when the token has no letters.
    pub normalized: String,
    /// ASCII letters only, case preserved.
    pub letters: String,
    /// Length of `letters` in characters.
    pub length: usize,
    /// Estimated syllables (0 when the token has no letters).
    pub syllables: usize,
}

impl Word {
    /// Build a word from its surface form.
    pub fn new(surface: &str) -> Self {
        let normalized = normalize(surface);
        let letters: String = surface.chars().filter(char::is_ascii_alphabetic).collect();
        let length = letters.len();
        let syllables = syllables::count_cleaned(&letters.to_ascii_lowercase());

        Self { surface: surface.to_string(), normalized, letters, length, syllables }
    }

    /// Whether this token carries any letters.
    pub fn has_letters(&self) -> bool {
        self.length > 0
    }

    /// Whether this word is complex (more than two letters and three or more syllables).
    pub fn is_complex(&self) -> bool {
        syllables::is_complex_cleaned(&self.letters, self.syllables)
    }
}

/// Output of a tokenization pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens {
    /// Words in input order.
    pub words: Vec<Word>,
    /// Number of sentences (0 for empty input, otherwise at least 1 when words exist).
    pub sentence_count: usize,
    /// Number of paragraphs (0 for empty input, otherwise at least 1).
    pub paragraph_count: usize,
}

impl Tokens {
    /// The word with the most letters; ties keep the first one seen.
    pub fn longest_word(&self) -> Option<&Word> {
        let mut longest: Option<&Word> = None;
        for word in &self.words {
            if word.length > longest.map_or(0, |w| w.length) {
                longest = Some(word);
            }
        }
        longest
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Splits text according to a [`TokenizationMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    mode: TokenizationMode,
}

impl Tokenizer {
    /// Creates a tokenizer for the given mode.
    pub fn new(mode: TokenizationMode) -> Self {
        Self { mode }
    }

    /// The mode this tokenizer splits words with.
    pub fn mode(&self) -> TokenizationMode {
        self.mode
    }

    /// Tokenize text into words plus sentence and paragraph counts.
    ///
    /// Leading and trailing whitespace is trimmed before any other processing.
    pub fn tokenize(&self, text: &str) -> Tokens {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Tokens::default();
        }

        let words: Vec<Word> = split_words(trimmed, self.mode).into_iter().map(Word::new).collect();

        let sentence_count = if words.is_empty() { count_sentences(trimmed) } else { count_sentences(trimmed).max(1) };
        let paragraph_count = count_paragraphs(trimmed).max(1);

        tracing::trace!(
            mode = %self.mode,
            words = words.len(),
            sentences = sentence_count,
            paragraphs = paragraph_count,
            "tokenized text"
        );

        Tokens { words, sentence_count, paragraph_count }
    }
}

/// Tokenize with the default (whitespace) mode.
pub fn tokenize(text: &str) -> Tokens {
    Tokenizer::default().tokenize(text)
}

/// Normalize a token for frequency counting.
///
/// Lowercases, folds the typographic apostrophe `’` into `'`, and strips every
/// character that is not an ASCII letter or apostrophe. A token without any
/// letters normalizes to the empty string.
pub fn normalize(word: &str) -> String {
    let normalized: String = word
        .chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c.to_ascii_lowercase() })
        .filter(|c| c.is_ascii_lowercase() || *c == '\'')
        .collect();

    if normalized.chars().any(|c| c.is_ascii_lowercase()) { normalized } else { String::new() }
}

fn split_words(text: &str, mode: TokenizationMode) -> Vec<&str> {
    match mode {
        TokenizationMode::Whitespace => text.split_whitespace().collect(),
        TokenizationMode::LetterRuns => LETTER_RUN
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|run| run.chars().any(|c| c.is_ascii_alphabetic()))
            .flat_map(split_camel_case)
            .collect(),
    }
}

/// Split a letter run at each lowercase-to-uppercase transition.
///
/// No split happens when the part before the transition is exactly a `Mc` or
/// `Mac` name prefix.
pub fn split_camel_case(run: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (idx, c) in run.char_indices() {
        if let Some(p) = prev
            && p.is_ascii_lowercase()
            && c.is_ascii_uppercase()
        {
            let segment = &run[start..idx];
            if !NAME_PREFIXES.contains(&segment) {
                parts.push(segment);
                start = idx;
            }
        }
        prev = Some(c);
    }

    if start < run.len() {
        parts.push(&run[start..]);
    }

    parts
}

/// Count non-empty fragments between terminal punctuation marks.
///
/// A boundary is one or more of `.`, `!`, `?` followed by whitespace or the end
/// of the text.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_BOUNDARY
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Count non-empty blocks separated by blank lines.
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}
