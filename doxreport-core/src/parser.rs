//! Classification of logical log lines into diagnostics and noise.

use crate::canonicalize::canonicalize;
use crate::domain::{DiagnosticEntry, DiagnosticKind};
use crate::error::{DoxReportError, Result};

const FIELD_SEPARATOR: char = ':';
const MIN_DIAGNOSTIC_FIELDS: usize = 4;
const ERROR_TOKEN: &str = "error";

/// Outcome of parsing one logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A documentation diagnostic.
    Diagnostic(DiagnosticEntry),
    /// The upstream tool reported a problem of its own.
    ErrorNotice(String),
    /// Unrecognised output, such as build chatter or banners.
    Noise(String),
    /// Markup artifacts and blank lines, dropped without comment.
    Discarded,
}

/// Operator-facing notice raised while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Line beginning with the `error` token.
    UpstreamError(String),
    /// Line that is neither a diagnostic nor recognised output.
    Malformed(String),
}

/// Entries and notices extracted from a whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Diagnostics in log order, duplicates included.
    pub entries: Vec<DiagnosticEntry>,
    /// Notices in log order.
    pub notices: Vec<Notice>,
}

/// Parse one logical line.
///
/// Fails only when a line has enough fields to be a diagnostic but its line
/// number is not a non-negative integer.
pub fn parse_record(line: &str) -> Result<Record> {
    if line.starts_with('<') {
        return Ok(Record::Discarded);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_DIAGNOSTIC_FIELDS {
        return Ok(if line.starts_with(ERROR_TOKEN) {
            Record::ErrorNotice(line.to_string())
        } else if !line.is_empty() {
            Record::Noise(line.to_string())
        } else {
            Record::Discarded
        });
    }

    let value = fields[1].trim();
    let line_number = value
        .parse::<u32>()
        .map_err(|_| DoxReportError::InvalidLineNumber {
            line: line.to_string(),
            value: value.to_string(),
        })?;

    Ok(Record::Diagnostic(DiagnosticEntry {
        file_name: fields[0].trim().to_string(),
        line_number,
        kind: DiagnosticKind::Documentation,
        severity: fields[2].trim().to_string(),
        message: fields[3..].join(":").trim().to_string(),
    }))
}

/// Canonicalize and parse a complete log.
///
/// Notices are logged as they are found and also returned to the caller.
pub fn parse_log(text: &str) -> Result<ParsedLog> {
    let logical = canonicalize(text.lines());
    log::debug!("canonicalized log into {} logical lines", logical.len());

    let mut parsed = ParsedLog::default();
    for line in &logical {
        match parse_record(line)? {
            Record::Diagnostic(entry) => parsed.entries.push(entry),
            Record::ErrorNotice(text) => {
                log::error!("{text}");
                parsed.notices.push(Notice::UpstreamError(text));
            }
            Record::Noise(text) => {
                log::warn!("Consider using doxygen -s: {text}");
                parsed.notices.push(Notice::Malformed(text));
            }
            Record::Discarded => {}
        }
    }

    log::debug!(
        "parsed {} diagnostics and {} notices",
        parsed.entries.len(),
        parsed.notices.len()
    );
    Ok(parsed)
}
