//! Report formatting utilities for doxreport outputs.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::distribution::{ScoreBand, ScoreDistribution};
use crate::domain::{CorpusReport, DiagnosticKind, FileScore};
use crate::error::{DoxReportError, Result};

/// Annotates report lines according to the bracket their score falls into.
#[derive(Debug, Clone)]
pub struct ScorePainter {
    distribution: ScoreDistribution,
    color: bool,
}

impl ScorePainter {
    /// Create a painter; with `color` off lines are returned unchanged.
    pub fn new(distribution: ScoreDistribution, color: bool) -> Self {
        Self {
            distribution,
            color,
        }
    }

    /// Render `line` in the colour of the bracket `score` falls into.
    pub fn paint(&self, score: f64, line: &str) -> String {
        if !self.color {
            return line.to_string();
        }
        match self.distribution.classify(score) {
            ScoreBand::Top => line.green().to_string(),
            ScoreBand::Near(_) => line.yellow().to_string(),
            ScoreBand::Below => line.red().to_string(),
        }
    }
}

/// Render per-file scores as aligned columns.
///
/// File names are padded to the longest name in the report.
pub fn render_text_summary(report: &CorpusReport, painter: &ScorePainter) -> String {
    let width = report
        .files
        .iter()
        .map(|file| file.file_name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for file in &report.files {
        let line = format!(
            "{:<width$} {:>8} {:>8}   {:.2}%",
            file.file_name, file.total_lines, file.bad_lines, file.score
        );
        let _ = writeln!(output, "{}", painter.paint(file.score, &line));
    }
    output
}

/// Render per-file scores as comma-separated records.
///
/// Fields: record kind, file name, total lines, bad lines, score.
pub fn render_csv_summary(report: &CorpusReport, painter: &ScorePainter) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for file in &report.files {
        wtr.write_record(csv_fields(file))
            .map_err(|err| DoxReportError::Other(format!("csv error: {err}")))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|err| DoxReportError::Other(format!("csv error: {err}")))?;
    let plain = String::from_utf8(bytes)
        .map_err(|err| DoxReportError::Other(format!("csv error: {err}")))?;

    let mut output = String::new();
    for (line, file) in plain.lines().zip(&report.files) {
        let _ = writeln!(output, "{}", painter.paint(file.score, line));
    }
    Ok(output)
}

/// Render the corpus average as a single number with two decimals.
pub fn render_average(report: &CorpusReport, painter: &ScorePainter) -> String {
    let line = format!("{:.2}", report.average);
    format!("{}\n", painter.paint(report.average, &line))
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(
    payload: &T,
) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn csv_fields(file: &FileScore) -> [String; 5] {
    [
        DiagnosticKind::Documentation.as_str().to_string(),
        file.file_name.clone(),
        file.total_lines.to_string(),
        file.bad_lines.to_string(),
        format!("{:.2}%", file.score),
    ]
}
