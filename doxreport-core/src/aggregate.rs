//! Groups diagnostics by file and line.

use crate::domain::{Corpus, DiagnosticEntry};

/// Fold entries into a corpus keyed by file name, then line number.
///
/// Structurally equal entries collapse to one, so the result does not depend
/// on the order of `entries`.
pub fn organize<I>(entries: I) -> Corpus
where
    I: IntoIterator<Item = DiagnosticEntry>,
{
    entries.into_iter().fold(Corpus::new(), |mut corpus, entry| {
        corpus
            .entry(entry.file_name.clone())
            .or_default()
            .insert(entry);
        corpus
    })
}
