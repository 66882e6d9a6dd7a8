//! Shared data model for mushroom genus identification.
//!
//! Everything here is either plain data (observations, rules, heuristics,
//! profiles, safety tables) or the immutable result types the engine
//! produces. No I/O, no state, no scoring logic; the engine crate owns the
//! algorithms.

pub mod confidence;
pub mod error;
pub mod genus;
pub mod heuristics;
pub mod observation;
pub mod profiles;
pub mod result;
pub mod rules;
pub mod safety;
pub mod validate;

pub use confidence::ConfidenceLevel;
pub use error::DatasetError;
pub use genus::{Family, Genus};
pub use heuristics::{
    builtin_heuristics, Heuristic, HeuristicCategory, HeuristicPriority, HeuristicProcedure,
    HeuristicStep, HeuristicTarget,
};
pub use observation::{FieldValue, Observation, ObservationField};
pub use profiles::{builtin_profiles, profile_for, EdibilityClass, GenusProfile};
pub use result::{
    AmbiguityFlag, CandidateScore, EdibilityAssessment, EvidenceItem, IdentificationResult,
    Inference, InferenceConfidence, Question, ReasoningStage, ReasoningStep, SafetyReport,
    SafetyWarning, SuggestedAction, TriggeredHeuristic, WithholdReason,
};
pub use rules::{builtin_rules, EvidenceTier, FeatureRule, RuleSet, RuleTest};
pub use safety::{
    dangerous_entry, is_dangerous, is_safety_feature, safety_fields_for, DangerousGenus,
    KeyMeasurement, LookalikePair, ToxicityClass, DANGEROUS_GENERA, KEY_MEASUREMENTS,
    LOOKALIKE_PAIRS, SAFETY_FEATURES,
};
pub use validate::validate_datasets;
