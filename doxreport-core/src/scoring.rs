//! Documentation health scores.

use crate::domain::{Corpus, CorpusReport, FileScore};
use crate::error::{DoxReportError, Result};
use crate::line_count::LineCounter;

/// Score reported for a corpus with no diagnostics at all.
pub const PERFECT_SCORE: f64 = 100.0;

/// What to do with a file that has diagnostics but zero counted lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroLinePolicy {
    /// Leave the file out of the report and log a warning.
    #[default]
    Skip,
    /// Abort with [`DoxReportError::ZeroLineCount`].
    Fail,
}

/// Percentage of `total_lines` free of diagnostics, clamped to 0-100.
pub fn compute_score(total_lines: usize, bad_lines: usize) -> Option<f64> {
    if total_lines == 0 {
        return None;
    }
    let score = (total_lines as f64 - bad_lines as f64) / total_lines as f64 * 100.0;
    Some(score.clamp(0.0, PERFECT_SCORE))
}

/// Unweighted mean of file scores; an empty slice averages to 100.
pub fn average_score(files: &[FileScore]) -> f64 {
    if files.is_empty() {
        return PERFECT_SCORE;
    }
    files.iter().map(|file| file.score).sum::<f64>() / files.len() as f64
}

/// Score every file in the corpus.
pub fn score_corpus<C: LineCounter + ?Sized>(
    corpus: &Corpus,
    counter: &C,
    policy: ZeroLinePolicy,
) -> Result<CorpusReport> {
    let mut files = Vec::with_capacity(corpus.len());

    for (file_name, report) in corpus {
        let total_lines = counter.count_lines(file_name)?;
        let bad_lines = report.bad_line_count();
        match compute_score(total_lines, bad_lines) {
            Some(score) => files.push(FileScore {
                file_name: file_name.clone(),
                total_lines,
                bad_lines,
                score,
            }),
            None if policy == ZeroLinePolicy::Fail => {
                return Err(DoxReportError::ZeroLineCount {
                    file: file_name.clone(),
                });
            }
            None => {
                log::warn!("skipping {file_name}: {bad_lines} flagged lines but no lines counted");
            }
        }
    }

    let average = average_score(&files);
    log::debug!("scored {} files, average {average:.2}", files.len());
    Ok(CorpusReport { files, average })
}
