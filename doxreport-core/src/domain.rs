//! Domain entities for doxreport.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Category of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Missing or malformed documentation.
    Documentation,
}

impl DiagnosticKind {
    /// Tag used for this kind in csv output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
        }
    }
}

/// A single finding reported by the documentation generator.
///
/// Equality is structural, which is what de-duplication relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticEntry {
    /// Source file the finding refers to.
    pub file_name: String,
    /// Line within the source file.
    pub line_number: u32,
    /// Finding category.
    pub kind: DiagnosticKind,
    /// Severity as written by the upstream tool (e.g. `warning`).
    pub severity: String,
    /// Free-form message text.
    pub message: String,
}

/// Diagnostics for one source file, grouped by line number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    lines: BTreeMap<u32, BTreeSet<DiagnosticEntry>>,
}

impl FileReport {
    /// Create an empty file report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, returning false when an equal entry already exists.
    pub fn insert(&mut self, entry: DiagnosticEntry) -> bool {
        self.lines.entry(entry.line_number).or_default().insert(entry)
    }

    /// Number of distinct lines carrying at least one diagnostic.
    pub fn bad_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of distinct entries across all lines.
    pub fn entry_count(&self) -> usize {
        self.lines.values().map(BTreeSet::len).sum()
    }

    /// Entries recorded for a single line.
    pub fn entries_at(&self, line_number: u32) -> Option<&BTreeSet<DiagnosticEntry>> {
        self.lines.get(&line_number)
    }

    /// Line numbers with diagnostics, ascending.
    pub fn bad_lines(&self) -> impl Iterator<Item = u32> + '_ {
        self.lines.keys().copied()
    }
}

/// All file reports produced from one diagnostic log, keyed by file name.
pub type Corpus = BTreeMap<String, FileReport>;

/// Computed score for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileScore {
    /// Source file name as it appears in the log.
    pub file_name: String,
    /// Line count reported by the line counter.
    pub total_lines: usize,
    /// Distinct lines with diagnostics.
    pub bad_lines: usize,
    /// Percentage of lines free of diagnostics, 0-100.
    pub score: f64,
}

/// Scores for a whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Per-file scores, ordered by file name.
    pub files: Vec<FileScore>,
    /// Unweighted mean of the per-file scores.
    pub average: f64,
}
