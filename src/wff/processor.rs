//! File processing API for expression batches
//!
//! An expression file starts with a count line holding an integer *n*;
//! the following `min(n, remaining)` lines each hold one expression. This
//! module reads such files, validates every expression in input order,
//! and serializes the resulting verdicts in one of the supported output
//! formats.
//!
//! Lines are trimmed before validation; whitespace handling inside an
//! expression is the lexer's business, surrounding it is ours. A negative
//! count selects zero expressions. Extra lines beyond the count are
//! ignored, and a count larger than the file simply stops at the last
//! line.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::wff::validator::{validate, Verdict};

/// Output format for a batch of verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One verdict string per line
    Text,
    /// A JSON array of verdict strings
    Json,
}

impl OutputFormat {
    /// Parse a format string like "text" or "json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ProcessingError::InvalidFormat(format_str.to_string())),
        }
    }
}

/// Errors the processing layer can surface to the user. These are the
/// recoverable, user-visible conditions; nothing from inside the
/// validation of a single line ever shows up here.
#[derive(Debug)]
pub enum ProcessingError {
    /// The input file does not exist
    FileNotFound(String),
    /// Any other I/O failure while reading the input file
    Io(std::io::Error),
    /// The first line of the file is not an integer
    InvalidHeader(String),
    /// An unknown output format string was requested
    InvalidFormat(String),
    /// Verdict serialization failed
    Serialization(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "file not found: {}", path),
            ProcessingError::Io(err) => write!(f, "error reading input file: {}", err),
            ProcessingError::InvalidHeader(header) => {
                write!(f, "invalid expression count on the first line: {:?}", header)
            }
            ProcessingError::InvalidFormat(format) => {
                write!(f, "unknown output format: {:?}", format)
            }
            ProcessingError::Serialization(msg) => write!(f, "serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

/// Validate every expression in `source` and return the verdicts in
/// input order.
pub fn process_source(source: &str) -> Result<Vec<Verdict>, ProcessingError> {
    let mut lines = source.lines();
    let header = lines.next().unwrap_or("").trim();
    let count: i64 = header
        .parse()
        .map_err(|_| ProcessingError::InvalidHeader(header.to_string()))?;

    Ok(lines
        .take(count.max(0) as usize)
        .map(|line| validate(line.trim()))
        .collect())
}

/// Read and process an expression file.
pub fn process_file(path: &Path) -> Result<Vec<Verdict>, ProcessingError> {
    let source = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ProcessingError::FileNotFound(path.display().to_string()),
        _ => ProcessingError::Io(err),
    })?;
    process_source(&source)
}

/// Render verdicts in the requested output format.
pub fn serialize_verdicts(
    verdicts: &[Verdict],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for verdict in verdicts {
                output.push_str(verdict.as_str());
                output.push('\n');
            }
            Ok(output)
        }
        OutputFormat::Json => serde_json::to_string_pretty(verdicts)
            .map_err(|err| ProcessingError::Serialization(err.to_string())),
    }
}
