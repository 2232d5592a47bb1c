//! Error types for doxreport core.

use std::path::PathBuf;
use std::{error::Error, fmt, io};

/// Error type for doxreport core operations.
#[derive(Debug)]
pub enum DoxReportError {
    /// An underlying I/O error, typically while reading the diagnostic log.
    Io(io::Error),
    /// A source file named in the log could not be read for line counting.
    MissingSource {
        /// Resolved path of the source file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The line number field of a diagnostic record is not an integer.
    InvalidLineNumber {
        /// The logical line that carried the bad field.
        line: String,
        /// The offending field, trimmed.
        value: String,
    },
    /// A file has diagnostics but no lines to score against.
    ZeroLineCount {
        /// File name as it appears in the log.
        file: String,
    },
    /// The score distribution could not be parsed or is not descending.
    InvalidDistribution(String),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for DoxReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::MissingSource { path, source } => {
                write!(f, "cannot count lines of {}: {source}", path.display())
            }
            Self::InvalidLineNumber { line, value } => {
                write!(f, "invalid line number {value:?} in log record: {line}")
            }
            Self::ZeroLineCount { file } => {
                write!(f, "{file} has diagnostics but zero lines")
            }
            Self::InvalidDistribution(message) => write!(f, "invalid distribution: {message}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DoxReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::MissingSource { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for DoxReportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Convenience result type for doxreport core.
pub type Result<T> = std::result::Result<T, DoxReportError>;
