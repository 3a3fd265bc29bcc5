//! Reading text from the host: local files and standard input.
//!
//! The analysis engine never does I/O. These helpers sit at the host edge and
//! turn a command-line style argument into text, reporting failures through
//! [`WordGaugeError`].

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::{Result, WordGaugeError};

/// Extensions treated as HTML when no explicit choice is made.
const HTML_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Where input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input, spelled `-`.
    Stdin,
    /// A local file.
    File(PathBuf),
}

impl Source {
    /// Interpret a command-line argument: `-` is stdin, anything else a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" { Self::Stdin } else { Self::File(PathBuf::from(arg)) }
    }

    /// Whether the source is a file with an HTML extension.
    pub fn looks_like_html(&self) -> bool {
        match self {
            Self::Stdin => false,
            Self::File(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| HTML_EXTENSIONS.iter().any(|h| h.eq_ignore_ascii_case(ext))),
        }
    }

    /// Read the whole source into a string.
    ///
    /// # Errors
    ///
    /// Returns [`WordGaugeError::FileNotFound`] for a missing file and
    /// [`WordGaugeError::ReadError`] for any other I/O failure.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => read_stdin(),
            Self::File(path) => read_file(path),
        }
    }
}

/// Reads text from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(WordGaugeError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Reads all of standard input until EOF.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert_eq!(Source::from_arg("-"), Source::Stdin);
        assert_eq!(Source::from_arg("essay.txt"), Source::File(PathBuf::from("essay.txt")));
    }

    #[test]
    fn test_looks_like_html() {
        assert!(Source::from_arg("page.html").looks_like_html());
        assert!(Source::from_arg("PAGE.HTM").looks_like_html());
        assert!(!Source::from_arg("notes.txt").looks_like_html());
        assert!(!Source::from_arg("README").looks_like_html());
        assert!(!Source::Stdin.looks_like_html());
    }

    #[test]
    fn test_read_file_not_found() {
        let result = Source::from_arg("/nonexistent/path/essay.txt").read();
        assert!(matches!(result, Err(WordGaugeError::FileNotFound(_))));
    }

    #[test]
    fn test_read_file() {
        let text = read_file(Path::new("../../tests/fixtures/essay.txt")).unwrap();
        assert!(text.starts_with("Reading is a habit"));
    }
}
