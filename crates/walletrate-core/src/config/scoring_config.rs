//! Numeric values assigned to scored ratings.

use serde::{Deserialize, Serialize};

use crate::rating::Rating;

/// Values used when averaging ratings. Exempt and unrated never score.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Default: 1.0.
    pub pass_value: Option<f64>,
    /// Default: 0.5.
    pub partial_value: Option<f64>,
    /// Default: 0.0.
    pub fail_value: Option<f64>,
}

impl ScoringConfig {
    pub fn effective_pass_value(&self) -> f64 {
        self.pass_value.unwrap_or(1.0)
    }

    pub fn effective_partial_value(&self) -> f64 {
        self.partial_value.unwrap_or(0.5)
    }

    pub fn effective_fail_value(&self) -> f64 {
        self.fail_value.unwrap_or(0.0)
    }

    /// The value a rating contributes to an average, or `None` if it is
    /// excluded from scoring.
    pub fn value_of(&self, rating: Rating) -> Option<f64> {
        match rating {
            Rating::Pass => Some(self.effective_pass_value()),
            Rating::Partial => Some(self.effective_partial_value()),
            Rating::Fail => Some(self.effective_fail_value()),
            Rating::Exempt | Rating::Unrated => None,
        }
    }
}
