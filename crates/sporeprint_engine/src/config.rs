//! Engine tuning knobs.
//!
//! The defaults are the calibrated values the rule tiers were authored
//! against; changing one without re-reading the rule base is a bad idea.
//! Config is plain data so a host application can load it from its own
//! settings layer.

use serde::{Deserialize, Serialize};
use sporeprint_common::EvidenceTier;

/// Weights for hierarchical evidence combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Fixed baseline any definitive match sets. Definitive evidence does
    /// not stack; one volva is as good as three.
    pub definitive_baseline: f64,
    /// Base weight of the first strong match.
    pub strong_base: f64,
    /// Base weight of the first moderate match.
    pub moderate_base: f64,
    /// Base weight of the first weak match.
    pub weak_base: f64,
    /// Diminishing-returns factor applied per further match within a tier.
    pub decay: f64,
    /// Fraction of the tier base a contradicting match subtracts.
    pub contradiction_factor: f64,
}

impl Default for ScoringWeights {
    fn default() -> ScoringWeights {
        ScoringWeights {
            definitive_baseline: 0.80,
            strong_base: 0.35,
            moderate_base: 0.12,
            weak_base: 0.04,
            decay: 0.6,
            contradiction_factor: 0.5,
        }
    }
}

impl ScoringWeights {
    /// Base weight for one match of the given tier. Exclusionary evidence
    /// has no weight; it eliminates instead.
    pub fn base_for(&self, tier: EvidenceTier) -> f64 {
        match tier {
            EvidenceTier::Definitive => self.definitive_baseline,
            EvidenceTier::Strong => self.strong_base,
            EvidenceTier::Moderate => self.moderate_base,
            EvidenceTier::Weak => self.weak_base,
            EvidenceTier::Exclusionary => 0.0,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    /// Upper bound on follow-up questions per result.
    pub max_questions: usize,
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            weights: ScoringWeights::default(),
            max_questions: 5,
        }
    }
}
