//! Plain-text rendering of an analysis result.

use std::fmt;

use wordgauge_core::{AnalysisResult, WordCount};

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 30;

/// Human-readable report for an [`AnalysisResult`].
pub struct Report<'a> {
    result: &'a AnalysisResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "─".repeat(title.chars().count()))
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {:<26}{}", format!("{}:", label), value)
}

fn ranking(f: &mut fmt::Formatter<'_>, title: &str, words: &[WordCount]) -> fmt::Result {
    heading(f, title)?;
    if words.is_empty() {
        return writeln!(f, "  (no repeated words)");
    }
    for (rank, entry) in words.iter().enumerate() {
        writeln!(f, "  {:>2}. {:<20}{}", rank + 1, entry.word, entry.count)?;
    }
    Ok(())
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;

        if r.is_empty() {
            writeln!(f, "No words found.")?;
            writeln!(f)?;
        }

        heading(f, "Basic Statistics")?;
        row(f, "Words", r.word_count)?;
        row(f, "Characters", r.char_count)?;
        row(f, "Characters (no spaces)", r.char_no_spaces_count)?;
        row(f, "Average word length", format!("{:.1}", r.avg_word_length))?;
        if !r.longest_word.is_empty() {
            row(f, "Longest word", format!("{} ({} chars)", r.longest_word, r.longest_word_length))?;
        }
        row(f, "Sentences", r.sentence_count)?;
        row(f, "Words per sentence", format!("{:.1}", r.avg_words_per_sentence))?;
        row(f, "Paragraphs", r.paragraph_count)?;
        row(f, "Unique words", format!("{} ({:.1}%)", r.unique_word_count, r.unique_word_percentage))?;
        row(f, "Reading time", &r.reading_time_estimate)?;
        writeln!(f)?;

        heading(f, "Readability")?;
        row(
            f,
            "Flesch Reading Ease",
            format!("{} ({}, {})", r.flesch_score, r.flesch_band, r.flesch_band.audience()),
        )?;
        row(f, "Gunning Fog Index", format!("{} ({})", r.gunning_fog_score, r.fog_level()))?;
        row(f, "SMOG Grade (approx.)", format!("{} ({})", r.smog_score, r.smog_level()))?;
        row(f, "Complex words", format!("{} ({:.1}%)", r.complex_word_count, r.complex_word_percentage))?;
        row(f, "Syllables", r.total_syllables)?;
        row(f, "Syllables per word", format!("{:.2}", r.avg_syllables_per_word))?;
        writeln!(f)?;

        ranking(f, "Top Words", &r.top_words)?;
        writeln!(f)?;
        ranking(f, "Top Meaningful Words", &r.top_meaningful_words)?;
        writeln!(f)?;

        heading(f, "Word Length Distribution")?;
        let max = r.word_length_distribution.values().copied().max().unwrap_or(0);
        for (length, count) in &r.word_length_distribution {
            let bar = if max == 0 { 0 } else { (count * BAR_WIDTH).div_ceil(max) };
            writeln!(f, "  {:>3} │ {:<width$} {}", length, "█".repeat(bar), count, width = BAR_WIDTH)?;
        }
        writeln!(f)?;

        heading(f, "Character Frequency")?;
        let chars = &r.character_frequency;
        row(f, "Vowels", chars.vowels)?;
        row(f, "Consonants", chars.consonants)?;
        row(f, "Digits", chars.digits)?;
        row(f, "Symbols", chars.symbols)?;

        if r.suspect_words.count > 0 {
            writeln!(f)?;
            heading(f, "Possibly Nonsensical Words")?;
            row(
                f,
                "Count",
                format!("{} ({}% of unique words)", r.suspect_words.count, r.suspect_words.percentage),
            )?;
            row(f, "Examples", r.suspect_words.examples.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgauge_core::analyze;

    #[test]
    fn test_report_sections() {
        let result = analyze("The quick brown fox. The lazy dog sleeps.");
        let text = Report::new(&result).to_string();

        assert!(text.contains("Basic Statistics"));
        assert!(text.contains("Words:                    8"));
        assert!(text.contains("Longest word:             sleeps (6 chars)"));
        assert!(text.contains("SMOG Grade (approx.)"));
        assert!(text.contains(" 1. the                 2"));
        assert!(text.contains("(no repeated words)"));
        assert!(!text.contains("Possibly Nonsensical Words"));
    }

    #[test]
    fn test_report_empty() {
        let result = analyze("");
        let text = Report::new(&result).to_string();
        assert!(text.starts_with("No words found."));
        assert!(text.contains("Reading time:             0 seconds"));
        assert!(!text.contains("Longest word"));
    }

    #[test]
    fn test_report_suspect_words() {
        let result = analyze("qwrtzpk hello world");
        let text = Report::new(&result).to_string();
        assert!(text.contains("Possibly Nonsensical Words"));
        assert!(text.contains("qwrtzpk"));
    }
}
