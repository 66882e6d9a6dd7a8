//! Confidence banding for candidate scores.
//!
//! The numeric score drives ranking; this enum is the single place that
//! translates it into the coarse bands the safety gate and the report
//! wording key off.

use serde::{Deserialize, Serialize};

/// Coarse confidence band for a candidate score.
///
/// Ordered weakest to strongest so `Ord` comparisons read naturally
/// (`level >= ConfidenceLevel::High`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Insufficient,
    Low,
    Moderate,
    High,
    Definitive,
}

impl ConfidenceLevel {
    /// Band boundaries. Half-open on the left: a score sits in the lowest
    /// band whose upper bound it does not reach.
    ///
    /// This is the only mapping from score to band in the codebase.
    pub fn from_score(score: f64) -> ConfidenceLevel {
        if score < 0.15 {
            ConfidenceLevel::Insufficient
        } else if score < 0.4 {
            ConfidenceLevel::Low
        } else if score < 0.65 {
            ConfidenceLevel::Moderate
        } else if score < 0.9 {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Definitive
        }
    }

    /// Smallest score that lands in this band.
    pub fn floor_score(&self) -> f64 {
        match self {
            ConfidenceLevel::Insufficient => 0.0,
            ConfidenceLevel::Low => 0.15,
            ConfidenceLevel::Moderate => 0.4,
            ConfidenceLevel::High => 0.65,
            ConfidenceLevel::Definitive => 0.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Insufficient => "insufficient",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Moderate => "moderate",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Definitive => "definitive",
        }
    }

    /// Whether this band clears the bar for actionable foraging advice.
    pub fn supports_foraging_advice(&self) -> bool {
        *self >= ConfidenceLevel::High
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
