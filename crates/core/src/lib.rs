pub mod analyze;
pub mod characters;
pub mod error;
pub mod frequency;
pub mod input;
pub mod memory;
pub mod node;
#[cfg(feature = "html")]
pub mod parse;
#[cfg(feature = "html")]
pub mod preprocess;
pub mod readability;
pub mod scoring;
pub mod select;
pub mod stats;
pub mod stopwords;
pub mod syllables;
pub mod tokenize;

#[cfg(feature = "html")]
pub use analyze::analyze_html;
pub use analyze::{AnalysisOptions, AnalysisOptionsBuilder, Analyzer, analyze, analyze_with_options};
pub use characters::{CharacterFrequency, classify};
pub use error::{Result, WordGaugeError};
pub use frequency::{FrequencyAnalysis, FrequencyTable, WordCount, analyze_frequency, word_length_distribution};
pub use input::{Source, read_file, read_stdin};
pub use memory::MemoryNode;
pub use node::{AttrOp, ContentNode, Matcher, NodeQuery};
#[cfg(feature = "html")]
pub use parse::{Document, Element};
pub use readability::{FleschBand, GradeLevel, ReadabilityInput, ReadabilityScores};
#[doc(hidden)]
pub use scoring::{ScoreResult, score_candidate};
pub use scoring::SelectorConfig;
pub use select::{ContentSelector, SelectorRule, select_main_content};
pub use stats::{AnalysisResult, ReadingTime, SuspectWords};
pub use stopwords::{is_stopword, stopwords};
pub use syllables::{count_syllables, is_complex_word};
pub use tokenize::{TokenizationMode, Tokenizer, Tokens, Word, tokenize};
