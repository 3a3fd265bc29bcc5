//! Error types for wordgauge operations.
//!
//! Text analysis itself never fails: empty or malformed input degrades to a
//! zeroed [`AnalysisResult`](crate::AnalysisResult). The variants here cover the
//! host-facing edges of the library: HTML parsing, reading input, rendering
//! results, and the case where no text could be obtained at all.
//!
//! # Example
//!
//! ```rust
//! use wordgauge_core::{WordGaugeError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(WordGaugeError::NoContent);
//!     }
//!     Ok(text)
//! }
//! # assert!(require_text("  ").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wordgauge operations.
#[derive(Error, Debug)]
pub enum WordGaugeError {
    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid or markup cannot be processed.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No text could be obtained.
    ///
    /// Returned by host-level helpers when no explicit text was supplied and
    /// the content selector found no node above the minimum text length.
    #[error("No text supplied and no main content could be selected")]
    NoContent,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Input read errors.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),

    /// Result serialization errors.
    #[error("Failed to serialize result: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type alias for WordGaugeError.
pub type Result<T> = std::result::Result<T, WordGaugeError>;
