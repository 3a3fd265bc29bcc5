//! The aggregate analysis record and its derived metrics.
//!
//! [`AnalysisResult`] is a plain value: every field is always present, and an
//! empty input produces a zeroed record instead of an error, so callers can
//! render a "no content" state the same way they render real results.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::Result;
use crate::characters::{CharacterFrequency, classify};
use crate::frequency::{FrequencyTable, WordCount, analyze_table, find_suspect_words, word_length_distribution};
use crate::readability::{FleschBand, GradeLevel, ReadabilityInput, ReadabilityScores};
use crate::stopwords::stopwords;
use crate::tokenize::Tokens;

/// Reading speed used for time estimates.
pub const WORDS_PER_MINUTE: f64 = 225.0;

/// Maximum number of suspect words kept as examples.
const SUSPECT_EXAMPLES: usize = 5;

/// Estimated reading time at [`WORDS_PER_MINUTE`].
///
/// Displays as seconds up to and including one minute ("60 seconds"), and as
/// minutes plus seconds above that ("2 minutes 0 seconds").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingTime {
    seconds: u64,
}

impl ReadingTime {
    /// Reading time for a number of words.
    pub fn from_words(word_count: usize) -> Self {
        let seconds = (word_count as f64 / WORDS_PER_MINUTE * 60.0).round() as u64;
        Self { seconds }
    }

    /// Total seconds, rounded.
    pub fn as_seconds(&self) -> u64 {
        self.seconds
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds <= 60 {
            write!(f, "{} second{}", self.seconds, plural(self.seconds))
        } else {
            let minutes = self.seconds / 60;
            let seconds = self.seconds % 60;
            write!(f, "{} minute{} {} second{}", minutes, plural(minutes), seconds, plural(seconds))
        }
    }
}

/// Words that look like noise rather than language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SuspectWords {
    /// Number of distinct suspect words.
    pub count: usize,
    /// Share of distinct words that are suspect, as a rounded percentage.
    pub percentage: u32,
    /// Up to five suspect words in first-seen order.
    pub examples: Vec<String>,
}

/// Complete statistics for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Number of words under the configured tokenization mode.
    pub word_count: usize,
    /// Characters in the trimmed text, whitespace included.
    pub char_count: usize,
    /// Non-whitespace characters in the trimmed text.
    pub char_no_spaces_count: usize,
    /// Average letter-only word length, one decimal.
    pub avg_word_length: f64,
    /// Longest word with non-letters removed, case preserved.
    pub longest_word: String,
    /// Letters in `longest_word`.
    pub longest_word_length: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Average words per sentence, one decimal.
    pub avg_words_per_sentence: f64,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Flesch Reading Ease, `0..=100`.
    pub flesch_score: u32,
    /// Band for `flesch_score`.
    pub flesch_band: FleschBand,
    /// Gunning Fog Index.
    pub gunning_fog_score: u32,
    /// SMOG grade (approximate below 30 sentences).
    pub smog_score: u32,
    /// Words with three or more syllables.
    pub complex_word_count: usize,
    /// Complex words as a percentage of all words, one decimal.
    pub complex_word_percentage: f64,
    /// Sum of estimated syllables.
    pub total_syllables: usize,
    /// Average syllables per word, two decimals.
    pub avg_syllables_per_word: f64,
    /// Distinct normalized words.
    pub unique_word_count: usize,
    /// Distinct words as a percentage of all words, one decimal.
    pub unique_word_percentage: f64,
    /// Most frequent repeated words.
    pub top_words: Vec<WordCount>,
    /// Most frequent repeated words, stop words excluded.
    pub top_meaningful_words: Vec<WordCount>,
    /// Letter-only word length to occurrence count.
    pub word_length_distribution: BTreeMap<usize, usize>,
    /// Character-class counts.
    pub character_frequency: CharacterFrequency,
    /// Reading time in seconds.
    pub reading_time_seconds: u64,
    /// Reading time formatted for display.
    pub reading_time_estimate: String,
    /// Words that look like keyboard noise.
    pub suspect_words: SuspectWords,
}

impl AnalysisResult {
    /// Assemble the record from a tokenization of `text`.
    pub fn from_tokens(text: &str, tokens: &Tokens, top_n: usize) -> Self {
        let trimmed = text.trim();
        let words = &tokens.words;
        let word_count = words.len();

        let character_frequency = classify(trimmed);
        let total_letters: usize = words.iter().map(|w| w.length).sum();
        let total_syllables: usize = words.iter().map(|w| w.syllables).sum();
        let complex_word_count = words.iter().filter(|w| w.is_complex()).count();

        let scores = ReadabilityScores::compute(&ReadabilityInput {
            words: word_count,
            sentences: tokens.sentence_count,
            syllables: total_syllables,
            complex_words: complex_word_count,
        });

        let table = FrequencyTable::from_words(words);
        let frequency = analyze_table(&table, stopwords(), top_n);
        let suspects = find_suspect_words(&table, stopwords());

        let (longest_word, longest_word_length) = tokens
            .longest_word()
            .map_or((String::new(), 0), |w| (w.letters.clone(), w.length));

        let reading_time = ReadingTime::from_words(word_count);

        Self {
            word_count,
            char_count: trimmed.chars().count(),
            char_no_spaces_count: character_frequency.total(),
            avg_word_length: round_to(ratio(total_letters, word_count), 1),
            longest_word,
            longest_word_length,
            sentence_count: tokens.sentence_count,
            avg_words_per_sentence: round_to(ratio(word_count, tokens.sentence_count), 1),
            paragraph_count: tokens.paragraph_count,
            flesch_score: scores.flesch,
            flesch_band: scores.flesch_band,
            gunning_fog_score: scores.gunning_fog,
            smog_score: scores.smog,
            complex_word_count,
            complex_word_percentage: round_to(ratio(complex_word_count, word_count) * 100.0, 1),
            total_syllables,
            avg_syllables_per_word: round_to(ratio(total_syllables, word_count), 2),
            unique_word_count: frequency.unique_words,
            unique_word_percentage: round_to(ratio(frequency.unique_words, word_count) * 100.0, 1),
            top_words: frequency.all,
            top_meaningful_words: frequency.meaningful,
            word_length_distribution: word_length_distribution(words),
            character_frequency,
            reading_time_seconds: reading_time.as_seconds(),
            reading_time_estimate: reading_time.to_string(),
            suspect_words: SuspectWords {
                count: suspects.len(),
                percentage: (ratio(suspects.len(), frequency.unique_words) * 100.0).round() as u32,
                examples: suspects.into_iter().take(SUSPECT_EXAMPLES).collect(),
            },
        }
    }

    /// Whether the analyzed text contained no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Education level implied by the Gunning Fog score.
    pub fn fog_level(&self) -> GradeLevel {
        GradeLevel::from_grade(self.gunning_fog_score)
    }

    /// Education level implied by the SMOG grade.
    pub fn smog_level(&self) -> GradeLevel {
        GradeLevel::from_grade(self.smog_score)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty { serde_json::to_string_pretty(self)? } else { serde_json::to_string(self)? };
        Ok(json)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 { 0.0 } else { numerator as f64 / denominator as f64 }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn result_for(text: &str) -> AnalysisResult {
        AnalysisResult::from_tokens(text, &tokenize(text), 10)
    }

    #[test]
    fn test_reading_time_formatting() {
        assert_eq!(ReadingTime::from_words(0).to_string(), "0 seconds");
        assert_eq!(ReadingTime::from_words(4).to_string(), "1 second");
        assert_eq!(ReadingTime::from_words(225).to_string(), "60 seconds");
        assert_eq!(ReadingTime::from_words(450).to_string(), "2 minutes 0 seconds");
        assert_eq!(ReadingTime::from_words(230).to_string(), "1 minute 1 second");
        assert_eq!(ReadingTime::from_words(1000).to_string(), "4 minutes 27 seconds");
    }

    #[test]
    fn test_reading_time_seconds() {
        assert_eq!(ReadingTime::from_words(225).as_seconds(), 60);
        assert_eq!(ReadingTime::from_words(450).as_seconds(), 120);
    }

    #[test]
    fn test_basic_fields() {
        let result = result_for("The quick brown fox. The lazy dog sleeps.");
        assert_eq!(result.word_count, 8);
        assert_eq!(result.char_count, 41);
        assert_eq!(result.char_no_spaces_count, 34);
        assert_eq!(result.avg_word_length, 4.0);
        assert_eq!(result.longest_word, "sleeps");
        assert_eq!(result.avg_words_per_sentence, 4.0);
        // "lazy" estimates at two syllables
        assert_eq!(result.total_syllables, 9);
        assert_eq!(result.avg_syllables_per_word, 1.13);
        assert_eq!(result.flesch_score, 100);
        assert_eq!(result.complex_word_count, 0);
        assert_eq!(result.unique_word_count, 7);
        assert_eq!(result.unique_word_percentage, 87.5);
    }

    #[test]
    fn test_empty_result_is_zeroed() {
        let result = result_for("");
        assert!(result.is_empty());
        assert_eq!(result.avg_word_length, 0.0);
        assert_eq!(result.avg_words_per_sentence, 0.0);
        assert_eq!(result.longest_word, "");
        assert_eq!(result.flesch_band, FleschBand::VeryDifficult);
        assert_eq!(result.suspect_words, SuspectWords::default());
        assert_eq!(result.reading_time_estimate, "0 seconds");
    }

    #[test]
    fn test_suspect_words_summary() {
        let result = result_for("qwrtzpk hello world zzzzap brrrr qwrtzpk");
        assert_eq!(result.suspect_words.count, 3);
        assert_eq!(result.suspect_words.percentage, 60);
        assert_eq!(result.suspect_words.examples, vec!["qwrtzpk", "zzzzap", "brrrr"]);
    }

    #[test]
    fn test_grade_levels() {
        let result = result_for("Extraordinary institutional responsibilities necessitate comprehensive deliberation.");
        assert!(result.gunning_fog_score >= 17);
        assert_eq!(result.fog_level(), GradeLevel::CollegeGraduate);
    }

    #[test]
    fn test_to_json() {
        let result = result_for("Hello world. Hello again.");
        let json = result.to_json(false).unwrap();
        assert!(json.contains(r#""word_count":4"#));
        assert!(json.contains(r#""flesch_band":"#));
        assert!(json.contains(r#""top_words":[{"word":"hello","count":2}]"#));

        let pretty = result.to_json(true).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.25, 1), 4.3);
        assert_eq!(round_to(1.3333, 2), 1.33);
        assert_eq!(round_to(0.0, 1), 0.0);
    }
}
