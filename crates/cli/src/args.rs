// Command-line arguments. `build.rs` includes this file to generate shell
// completions, so it holds plain comments only at the top level.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use wordgauge_core::TokenizationMode;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Measure word counts, readability, and word frequency of a text
#[derive(Parser, Debug)]
#[command(name = "wordgauge")]
#[command(author = "Wordgauge Contributors")]
#[command(version)]
#[command(about = "Word counts, readability scores, and word frequency", long_about = None)]
pub struct Args {
    /// Text or HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Treat the input as HTML and analyze its main content
    #[arg(long)]
    pub html: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Number of entries in the word rankings
    #[arg(long, default_value = "10", value_name = "NUM")]
    pub top: usize,

    /// Word splitting strategy (whitespace, letter-runs)
    #[arg(long, default_value = "whitespace", value_name = "MODE")]
    pub mode: TokenizationMode,

    /// Minimum characters for a main-content candidate (HTML only)
    #[arg(long, default_value = "50", value_name = "NUM")]
    pub min_text: usize,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
