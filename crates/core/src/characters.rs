//! Character-class counts for non-whitespace characters.

use serde::Serialize;

/// Counts of vowels, consonants, digits, and everything else.
///
/// Letters are classified case-insensitively and only ASCII letters count as
/// vowels or consonants. Accented and other non-ASCII letters fall into
/// `symbols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharacterFrequency {
    /// `a e i o u`, either case.
    pub vowels: usize,
    /// Any other ASCII letter.
    pub consonants: usize,
    /// `0` to `9`.
    pub digits: usize,
    /// Everything else that is not whitespace.
    pub symbols: usize,
}

impl CharacterFrequency {
    /// Sum of all four counters; equals the non-whitespace character count.
    pub fn total(&self) -> usize {
        self.vowels + self.consonants + self.digits + self.symbols
    }

    fn record(&mut self, c: char) {
        match c.to_ascii_lowercase() {
            'a' | 'e' | 'i' | 'o' | 'u' => self.vowels += 1,
            l if l.is_ascii_lowercase() => self.consonants += 1,
            d if d.is_ascii_digit() => self.digits += 1,
            _ => self.symbols += 1,
        }
    }
}

/// Classify every non-whitespace character of the trimmed text.
pub fn classify(text: &str) -> CharacterFrequency {
    let mut frequency = CharacterFrequency::default();
    for c in text.trim().chars().filter(|c| !c.is_whitespace()) {
        frequency.record(c);
    }
    frequency
}
