//! End-to-end analysis of a doxygen log.

use std::path::Path;

use crate::aggregate::organize;
use crate::domain::{Corpus, CorpusReport};
use crate::error::Result;
use crate::fs::FileSystem;
use crate::line_count::LineCounter;
use crate::parser::{Notice, parse_log};
use crate::scoring::{ZeroLinePolicy, score_corpus};

/// Result of analysing one log.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Diagnostics grouped by file and line.
    pub corpus: Corpus,
    /// Scores derived from the corpus.
    pub report: CorpusReport,
    /// Notices raised while parsing.
    pub notices: Vec<Notice>,
}

/// Read a diagnostic log through `fs`.
pub fn read_log<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<String> {
    let text = fs.read_to_string(path)?;
    log::debug!("read {} bytes of log from {}", text.len(), path.display());
    Ok(text)
}

/// Parse, aggregate, and score the text of a diagnostic log.
pub fn analyze_log<C: LineCounter + ?Sized>(
    text: &str,
    counter: &C,
    policy: ZeroLinePolicy,
) -> Result<Analysis> {
    let parsed = parse_log(text)?;
    let corpus = organize(parsed.entries);
    log::debug!("aggregated diagnostics for {} files", corpus.len());
    let report = score_corpus(&corpus, counter, policy)?;
    Ok(Analysis {
        corpus,
        report,
        notices: parsed.notices,
    })
}
