use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounds of the reported percentage change.
pub const PERCENT_LIMIT: f64 = 100.0;

/// What the presentation layer shows for one requested key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub key: i64,
    /// Recorded count, or the model's denormalized estimate.
    pub count: u64,
    /// Change versus the last known count, in [-100, 100]. Only present for
    /// model-derived results whose last known count is nonzero.
    pub percent_change: Option<f64>,
    pub is_model_derived: bool,
}

impl PredictionResult {
    pub fn recorded(key: i64, count: u64) -> PredictionResult {
        PredictionResult { key, count, percent_change: None, is_model_derived: false }
    }

    pub fn predicted(key: i64, count: u64, last_count: u64) -> PredictionResult {
        PredictionResult {
            key,
            count,
            percent_change: percent_change(count, last_count),
            is_model_derived: true,
        }
    }
}

/// `(predicted − last) / last × 100`, clamped to ±100; `None` when `last` is 0.
pub fn percent_change(predicted: u64, last: u64) -> Option<f64> {
    if last == 0 {
        return None;
    }
    let raw = (predicted as f64 - last as f64) / last as f64 * 100.0;
    Some(raw.clamp(-PERCENT_LIMIT, PERCENT_LIMIT))
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.count)?;
        if let Some(p) = self.percent_change {
            write!(f, " ({p:+.1}%)")?;
        }
        if self.is_model_derived {
            write!(f, " [predicted]")?;
        }
        Ok(())
    }
}
