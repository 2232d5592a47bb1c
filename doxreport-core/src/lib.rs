#![deny(missing_docs)]
//! doxreport core library.
//!
//! Turns a doxygen warning log into per-file documentation health scores:
//! log lines are canonicalized into records, parsed into diagnostics, grouped
//! by file and line, scored against each file's line count, and rendered.

pub mod aggregate;
pub mod canonicalize;
pub mod distribution;
pub mod domain;
pub mod error;
pub mod fs;
pub mod line_count;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod scoring;

pub use aggregate::organize;
pub use canonicalize::canonicalize;
pub use distribution::{DEFAULT_THRESHOLDS, ScoreBand, ScoreDistribution};
pub use domain::{Corpus, CorpusReport, DiagnosticEntry, DiagnosticKind, FileReport, FileScore};
pub use error::{DoxReportError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use line_count::{LineCounter, SourceLineCounter};
pub use parser::{Notice, ParsedLog, Record, parse_log, parse_record};
pub use pipeline::{Analysis, analyze_log, read_log};
pub use report::{
    ScorePainter, render_average, render_csv_summary, render_json, render_text_summary,
};
pub use scoring::{PERFECT_SCORE, ZeroLinePolicy, average_score, compute_score, score_corpus};
