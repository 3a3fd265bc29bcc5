//! Main analysis API.
//!
//! The entry point is the [`Analyzer`] struct, along with the convenience
//! functions [`analyze`] and [`analyze_with_options`]. Analysis is a pure
//! function of its input: no I/O, no shared mutable state, and no errors. Empty
//! or whitespace-only text yields a zeroed [`AnalysisResult`].
//!
//! # Example
//!
//! ```rust
//! use wordgauge_core::analyze;
//!
//! let result = analyze("The quick brown fox. The lazy dog sleeps.");
//! assert_eq!(result.sentence_count, 2);
//! assert_eq!(result.longest_word, "sleeps");
//! ```

use tracing::debug;

use crate::frequency::DEFAULT_TOP_N;
use crate::stats::AnalysisResult;
use crate::tokenize::{TokenizationMode, Tokenizer};

#[cfg(feature = "html")]
use crate::parse::Document;
#[cfg(feature = "html")]
use crate::scoring::SelectorConfig;
#[cfg(feature = "html")]
use crate::select::ContentSelector;
#[cfg(feature = "html")]
use crate::{Result, WordGaugeError};

/// Options for a single analysis.
///
/// # Example
///
/// ```rust
/// use wordgauge_core::{AnalysisOptions, TokenizationMode};
///
/// let options = AnalysisOptions::builder()
///     .top_n(5)
///     .tokenization_mode(TokenizationMode::LetterRuns)
///     .build();
/// assert_eq!(options.top_n, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Entries kept in each frequency ranking (default: 10).
    pub top_n: usize,
    /// How text is split into words (default: whitespace).
    pub tokenization_mode: TokenizationMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, tokenization_mode: TokenizationMode::default() }
    }
}

impl AnalysisOptions {
    /// Creates a new builder for AnalysisOptions.
    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::new()
    }
}

/// Builder for [`AnalysisOptions`].
#[derive(Debug, Clone)]
pub struct AnalysisOptionsBuilder {
    options: AnalysisOptions,
}

impl AnalysisOptionsBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { options: AnalysisOptions::default() }
    }

    /// Sets the ranking length.
    pub fn top_n(mut self, value: usize) -> Self {
        self.options.top_n = value;
        self
    }

    /// Sets the tokenization mode.
    pub fn tokenization_mode(mut self, value: TokenizationMode) -> Self {
        self.options.tokenization_mode = value;
        self
    }

    /// Builds the options.
    pub fn build(self) -> AnalysisOptions {
        self.options
    }
}

impl Default for AnalysisOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes statistics for text.
///
/// # Example
///
/// ```rust
/// use wordgauge_core::{AnalysisOptions, Analyzer};
///
/// let analyzer = Analyzer::with_options(AnalysisOptions::builder().top_n(3).build());
/// let result = analyzer.analyze("one two two three three three");
/// assert_eq!(result.top_words.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalysisOptions,
}

impl Analyzer {
    /// Analyzer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with custom options.
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze text.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = Tokenizer::new(self.options.tokenization_mode).tokenize(text);
        let result = AnalysisResult::from_tokens(text, &tokens, self.options.top_n);

        debug!(
            mode = %self.options.tokenization_mode,
            words = result.word_count,
            sentences = result.sentence_count,
            flesch = result.flesch_score,
            "analyzed text"
        );

        result
    }

    /// Select the main content of an HTML page and analyze it.
    ///
    /// Scripts, styles, and comments are stripped before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`WordGaugeError::NoContent`] if no element holds enough text.
    #[cfg(feature = "html")]
    pub fn analyze_html(&self, html: &str, selector: &SelectorConfig) -> Result<AnalysisResult> {
        let doc = Document::parse_with_preprocessing(html);
        let text = ContentSelector::with_config(selector.clone())
            .select(&doc.root())
            .ok_or(WordGaugeError::NoContent)?;
        Ok(self.analyze(&text))
    }
}

/// Analyze text with default options.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::new().analyze(text)
}

/// Analyze text with custom options.
pub fn analyze_with_options(text: &str, options: &AnalysisOptions) -> AnalysisResult {
    Analyzer::with_options(*options).analyze(text)
}

/// Select the main content of an HTML page and analyze it.
///
/// # Errors
///
/// Returns [`WordGaugeError::NoContent`] if no element holds enough text.
///
/// # Example
///
/// ```rust
/// use wordgauge_core::{AnalysisOptions, SelectorConfig, analyze_html};
///
/// let html = format!("<html><body><article><p>{}</p></article></body></html>", "Words worth reading. ".repeat(5));
/// let result = analyze_html(&html, &AnalysisOptions::default(), &SelectorConfig::default()).unwrap();
/// assert_eq!(result.word_count, 15);
/// ```
#[cfg(feature = "html")]
pub fn analyze_html(html: &str, options: &AnalysisOptions, selector: &SelectorConfig) -> Result<AnalysisResult> {
    Analyzer::with_options(*options).analyze_html(html, selector)
}
