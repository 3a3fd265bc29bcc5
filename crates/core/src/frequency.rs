//! Word-frequency tables, rankings, and word-length distribution.
//!
//! A [`FrequencyTable`] is keyed by normalized word and remembers the order in
//! which words were first seen, so rankings break count ties by first
//! appearance and are reproducible across runs.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::tokenize::Word;

/// Default number of entries in a ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// Suspect-word checks only apply to words longer than this.
const SUSPECT_MIN_LEN: usize = 4;

/// More non-vowel letters than this marks a word as suspect.
const SUSPECT_MAX_CONSONANTS: usize = 6;

/// Same letter this many times in a row marks a word as suspect.
const SUSPECT_REPEAT_RUN: usize = 3;

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// Normalized word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Occurrence counts per normalized word, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Build a table from normalized words. Empty strings are skipped.
    pub fn from_normalized<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for word in words {
            if word.is_empty() {
                continue;
            }
            match table.index.get(word) {
                Some(&slot) => table.entries[slot].count += 1,
                None => {
                    table.index.insert(word.to_string(), table.entries.len());
                    table.entries.push(WordCount { word: word.to_string(), count: 1 });
                }
            }
        }
        table
    }

    /// Build a table from tokenized words.
    pub fn from_words(words: &[Word]) -> Self {
        Self::from_normalized(words.iter().map(|w| w.normalized.as_str()))
    }

    /// Occurrences of a normalized word.
    pub fn count(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct words.
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    /// Entries passing `keep`, sorted by count descending (ties by first
    /// appearance), truncated to `top_n`.
    pub fn ranked<F>(&self, top_n: usize, keep: F) -> Vec<WordCount>
    where
        F: Fn(&WordCount) -> bool,
    {
        let mut ranked: Vec<WordCount> = self.entries.iter().filter(|e| keep(e)).cloned().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top_n);
        ranked
    }
}

/// Both rankings plus the uniqueness count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyAnalysis {
    /// Words occurring more than once.
    pub all: Vec<WordCount>,
    /// Repeated words that are not stop words and are longer than one character.
    pub meaningful: Vec<WordCount>,
    /// Number of distinct normalized words.
    pub unique_words: usize,
}

/// Rank words by frequency, with and without stop words.
pub fn analyze_frequency(words: &[Word], stopwords: &HashSet<&str>, top_n: usize) -> FrequencyAnalysis {
    let table = FrequencyTable::from_words(words);
    analyze_table(&table, stopwords, top_n)
}

pub(crate) fn analyze_table(table: &FrequencyTable, stopwords: &HashSet<&str>, top_n: usize) -> FrequencyAnalysis {
    let all = table.ranked(top_n, |e| e.count > 1);
    let meaningful = table.ranked(top_n, |e| {
        e.count > 1 && e.word.chars().count() > 1 && !stopwords.contains(e.word.as_str())
    });

    FrequencyAnalysis { all, meaningful, unique_words: table.unique_count() }
}

/// Count of words per letter-only length.
///
/// Keys run from 1 to the longest observed length, with zero counts filling
/// the gaps. Tokens without letters are not counted.
pub fn word_length_distribution(words: &[Word]) -> BTreeMap<usize, usize> {
    let max_len = words.iter().map(|w| w.length).max().unwrap_or(0);
    let mut distribution: BTreeMap<usize, usize> = (1..=max_len).map(|len| (len, 0)).collect();

    for word in words.iter().filter(|w| w.has_letters()) {
        *distribution.entry(word.length).or_insert(0) += 1;
    }

    distribution
}

/// Distinct words that look like keyboard noise rather than language.
///
/// Only non-stop words longer than three characters are checked. A word is
/// flagged when it repeats one letter three or more times in a row, contains
/// no vowel (`y` counts), or has more than six non-vowel characters.
pub fn find_suspect_words(table: &FrequencyTable, stopwords: &HashSet<&str>) -> Vec<String> {
    table
        .iter()
        .map(|e| e.word.as_str())
        .filter(|w| w.chars().count() >= SUSPECT_MIN_LEN && !stopwords.contains(w))
        .filter(|w| is_suspect(w))
        .map(str::to_string)
        .collect()
}

fn is_suspect(word: &str) -> bool {
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let no_vowels = !word.chars().any(is_vowel);
    let consonants = word.chars().filter(|&c| !is_vowel(c)).count();

    no_vowels || consonants > SUSPECT_MAX_CONSONANTS || has_letter_run(word, SUSPECT_REPEAT_RUN)
}

fn has_letter_run(word: &str, run: usize) -> bool {
    let mut prev = None;
    let mut len = 0;
    for c in word.chars() {
        if Some(c) == prev && c.is_ascii_lowercase() {
            len += 1;
        } else {
            len = 1;
        }
        if len >= run && c.is_ascii_lowercase() {
            return true;
        }
        prev = Some(c);
    }
    false
}
