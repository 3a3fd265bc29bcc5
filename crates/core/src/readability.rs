//! Readability formulas: Flesch Reading Ease, Gunning Fog, and SMOG.
//!
//! All three formulas take the same [`ReadabilityInput`] counts and fail soft:
//! when there are no words or no sentences they return 0 rather than dividing
//! by zero.
//!
//! The SMOG grade is an approximation. The published formula assumes a sample
//! of 30 sentences; for shorter texts the complex-word count is scaled up by
//! `sqrt(30 / sentences)` before the usual formula is applied. That adjustment
//! is not part of the peer-reviewed SMOG definition and should be labelled as
//! approximate wherever it is shown.
//!
//! # Example
//!
//! ```rust
//! use wordgauge_core::readability::{ReadabilityInput, ReadabilityScores, FleschBand};
//!
//! let input = ReadabilityInput { words: 9, sentences: 2, syllables: 9, complex_words: 0 };
//! let scores = ReadabilityScores::compute(&input);
//! assert_eq!(scores.flesch, 100);
//! assert_eq!(scores.flesch_band, FleschBand::VeryEasy);
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;

const FOG_WEIGHT: f64 = 0.4;

const SMOG_SAMPLE_SENTENCES: f64 = 30.0;
const SMOG_SLOPE: f64 = 1.0430;
const SMOG_INTERCEPT: f64 = 3.1291;

/// Counts the formulas are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadabilityInput {
    /// Total words.
    pub words: usize,
    /// Total sentences.
    pub sentences: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Words with three or more syllables.
    pub complex_words: usize,
}

impl ReadabilityInput {
    fn is_degenerate(&self) -> bool {
        self.words == 0 || self.sentences == 0
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }
}

/// Flesch Reading Ease, rounded and clamped to `[0, 100]`.
pub fn flesch_reading_ease(input: &ReadabilityInput) -> u32 {
    if input.is_degenerate() {
        return 0;
    }

    let syllables_per_word = input.syllables as f64 / input.words as f64;
    let score = FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * input.words_per_sentence()
        - FLESCH_SYLLABLE_WEIGHT * syllables_per_word;

    score.round().clamp(0.0, 100.0) as u32
}

/// Gunning Fog Index, rounded but not capped.
///
/// Presentation layers that show a capped scale (for example "19+") should do
/// the capping themselves; the stored value is the computed grade.
pub fn gunning_fog(input: &ReadabilityInput) -> u32 {
    if input.is_degenerate() {
        return 0;
    }

    let complex_ratio = input.complex_words as f64 / input.words as f64;
    let score = FOG_WEIGHT * (input.words_per_sentence() + 100.0 * complex_ratio);

    score.round().max(0.0) as u32
}

/// SMOG grade, rounded. Approximate below 30 sentences (see module docs).
pub fn smog_grade(input: &ReadabilityInput) -> u32 {
    if input.is_degenerate() {
        return 0;
    }

    let sentences = input.sentences.max(1) as f64;
    let mut complex = input.complex_words as f64;
    if sentences < SMOG_SAMPLE_SENTENCES {
        complex *= (SMOG_SAMPLE_SENTENCES / sentences).sqrt();
    }

    let score = SMOG_SLOPE * (complex * (SMOG_SAMPLE_SENTENCES / sentences)).sqrt() + SMOG_INTERCEPT;
    score.round() as u32
}

/// Categorical interpretation of a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FleschBand {
    /// 90 and above.
    VeryEasy,
    /// 80 to 89.
    Easy,
    /// 70 to 79.
    FairlyEasy,
    /// 60 to 69.
    Standard,
    /// 50 to 59.
    FairlyDifficult,
    /// 30 to 49.
    Difficult,
    /// Below 30.
    VeryDifficult,
}

impl FleschBand {
    /// Band for a Flesch Reading Ease score.
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::VeryEasy,
            80..=89 => Self::Easy,
            70..=79 => Self::FairlyEasy,
            60..=69 => Self::Standard,
            50..=59 => Self::FairlyDifficult,
            30..=49 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }

    /// The reader level the band corresponds to.
    pub fn audience(&self) -> &'static str {
        match self {
            Self::VeryEasy => "5th grade",
            Self::Easy => "6th grade",
            Self::FairlyEasy => "7th grade",
            Self::Standard => "8th-9th grade",
            Self::FairlyDifficult => "High school",
            Self::Difficult => "College",
            Self::VeryDifficult => "College graduate",
        }
    }
}

impl fmt::Display for FleschBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for FleschBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Education level implied by a grade-style score (Gunning Fog, SMOG).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeLevel {
    /// Grade 5 and below.
    Elementary,
    /// Grades 6 and 7.
    MiddleSchool,
    /// Grades 8 to 12.
    HighSchool,
    /// Grades 13 to 16.
    College,
    /// Grade 17 and above.
    CollegeGraduate,
}

impl GradeLevel {
    /// Level for a grade-style score.
    pub fn from_grade(grade: u32) -> Self {
        match grade {
            17.. => Self::CollegeGraduate,
            13..=16 => Self::College,
            8..=12 => Self::HighSchool,
            6..=7 => Self::MiddleSchool,
            _ => Self::Elementary,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Elementary => "Elementary",
            Self::MiddleSchool => "Middle school",
            Self::HighSchool => "High school",
            Self::College => "College",
            Self::CollegeGraduate => "College graduate",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All three scores plus the Flesch band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadabilityScores {
    /// Flesch Reading Ease, `0..=100`.
    pub flesch: u32,
    /// Band for `flesch`.
    pub flesch_band: FleschBand,
    /// Gunning Fog Index.
    pub gunning_fog: u32,
    /// SMOG grade (approximate below 30 sentences).
    pub smog: u32,
}

impl ReadabilityScores {
    /// Compute every score from one set of counts.
    pub fn compute(input: &ReadabilityInput) -> Self {
        let flesch = flesch_reading_ease(input);
        Self {
            flesch,
            flesch_band: FleschBand::from_score(flesch),
            gunning_fog: gunning_fog(input),
            smog: smog_grade(input),
        }
    }
}
