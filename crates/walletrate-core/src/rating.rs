//! Ratings, evaluations, and rating scales.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete outcome of evaluating one attribute for one wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    Pass,
    Partial,
    Fail,
    /// Not applicable to the rated variant. Never scored.
    Exempt,
    /// Insufficient data. Never scored, but shown distinctly from `Exempt`.
    Unrated,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::Pass,
        Rating::Partial,
        Rating::Fail,
        Rating::Exempt,
        Rating::Unrated,
    ];

    /// Whether this rating participates in score averages.
    pub fn is_scored(self) -> bool {
        matches!(self, Rating::Pass | Rating::Partial | Rating::Fail)
    }

    pub fn name(self) -> &'static str {
        match self {
            Rating::Pass => "PASS",
            Rating::Partial => "PARTIAL",
            Rating::Fail => "FAIL",
            Rating::Exempt => "EXEMPT",
            Rating::Unrated => "UNRATED",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computed rating plus the explanation shown next to it.
///
/// Evaluations are created once and never mutated; transforms produce new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub rating: Rating,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_improve: Option<String>,
}

impl Evaluation {
    pub fn new(rating: Rating, explanation: impl Into<String>) -> Self {
        Self {
            rating,
            explanation: explanation.into(),
            how_to_improve: None,
        }
    }

    pub fn pass(explanation: impl Into<String>) -> Self {
        Self::new(Rating::Pass, explanation)
    }

    pub fn partial(explanation: impl Into<String>) -> Self {
        Self::new(Rating::Partial, explanation)
    }

    pub fn fail(explanation: impl Into<String>) -> Self {
        Self::new(Rating::Fail, explanation)
    }

    pub fn exempt(reason: impl Into<String>) -> Self {
        Self::new(Rating::Exempt, reason)
    }

    pub fn unrated(explanation: impl Into<String>) -> Self {
        Self::new(Rating::Unrated, explanation)
    }

    /// Attach a suggestion for how the wallet could improve this rating.
    pub fn with_improvement(mut self, how: impl Into<String>) -> Self {
        self.how_to_improve = Some(how.into());
        self
    }
}

/// What each rating means for a given attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingScale {
    Binary {
        pass: &'static str,
        fail: &'static str,
    },
    Graded {
        pass: &'static str,
        partial: &'static str,
        fail: &'static str,
    },
}

impl RatingScale {
    /// Description of a rating on this scale, if the scale can produce it.
    pub fn describe(&self, rating: Rating) -> Option<&'static str> {
        match (self, rating) {
            (RatingScale::Binary { pass, .. }, Rating::Pass)
            | (RatingScale::Graded { pass, .. }, Rating::Pass) => Some(pass),
            (RatingScale::Binary { fail, .. }, Rating::Fail)
            | (RatingScale::Graded { fail, .. }, Rating::Fail) => Some(fail),
            (RatingScale::Graded { partial, .. }, Rating::Partial) => Some(partial),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pass_partial_fail_are_scored() {
        let scored: Vec<Rating> = Rating::ALL.into_iter().filter(|r| r.is_scored()).collect();
        assert_eq!(scored, vec![Rating::Pass, Rating::Partial, Rating::Fail]);
    }

    #[test]
    fn binary_scale_has_no_partial() {
        let scale = RatingScale::Binary {
            pass: "yes",
            fail: "no",
        };
        assert_eq!(scale.describe(Rating::Pass), Some("yes"));
        assert_eq!(scale.describe(Rating::Partial), None);
        assert_eq!(scale.describe(Rating::Exempt), None);
    }

    #[test]
    fn rating_serializes_screaming() {
        let json = serde_json::to_string(&Rating::Unrated).unwrap();
        assert_eq!(json, "\"UNRATED\"");
    }
}
