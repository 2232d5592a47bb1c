//! Score brackets used to annotate report lines.

use std::str::FromStr;

use crate::error::{DoxReportError, Result};

/// Thresholds used when none are configured: perfect and near-perfect.
pub const DEFAULT_THRESHOLDS: [f64; 2] = [100.0, 95.0];

/// Bracket a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// At or above the first threshold.
    Top,
    /// At or above the threshold with this index (never 0).
    Near(usize),
    /// Below every threshold.
    Below,
}

/// Descending list of minimum scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDistribution {
    thresholds: Vec<f64>,
}

impl ScoreDistribution {
    /// Build a distribution, rejecting empty, non-finite, or ascending lists.
    pub fn new(thresholds: Vec<f64>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(DoxReportError::InvalidDistribution(
                "at least one threshold is required".to_string(),
            ));
        }
        if let Some(bad) = thresholds.iter().find(|value| !value.is_finite()) {
            return Err(DoxReportError::InvalidDistribution(format!(
                "threshold {bad} is not a finite number"
            )));
        }
        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0] < pair[1]) {
            return Err(DoxReportError::InvalidDistribution(format!(
                "thresholds must be descending, but {} precedes {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { thresholds })
    }

    /// Configured thresholds, highest first.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Select the bracket for `score`. The score itself is never altered.
    pub fn classify(&self, score: f64) -> ScoreBand {
        match self.thresholds.iter().position(|minimum| score >= *minimum) {
            Some(0) => ScoreBand::Top,
            Some(index) => ScoreBand::Near(index),
            None => ScoreBand::Below,
        }
    }
}

impl Default for ScoreDistribution {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

impl FromStr for ScoreDistribution {
    type Err = DoxReportError;

    /// Accepts `[100, 95]` as well as a bare `100,95`.
    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let list = if trimmed.starts_with('[') {
            trimmed.to_string()
        } else {
            format!("[{trimmed}]")
        };
        let thresholds: Vec<f64> = serde_json::from_str(&list)
            .map_err(|err| DoxReportError::InvalidDistribution(format!("{text:?}: {err}")))?;
        Self::new(thresholds)
    }
}
