//! The identification result and everything it is built from.
//!
//! One call produces one immutable result: scored candidates, the reasoning
//! chain that led to them, safety and edibility output, follow-up questions,
//! ambiguity flags and triggered heuristics. Nothing here is ever mutated
//! after assembly; downstream consumers read or serialize it as is.

use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceLevel;
use crate::genus::Genus;
use crate::heuristics::{HeuristicCategory, HeuristicPriority, HeuristicStep};
use crate::observation::ObservationField;
use crate::profiles::EdibilityClass;
use crate::rules::{EvidenceTier, FeatureRule};
use crate::safety::ToxicityClass;

/// One piece of evidence, snapshotted from the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub rule_id: String,
    pub field: ObservationField,
    pub tier: EvidenceTier,
    /// Polarity of the underlying rule. A supporting rule can land in the
    /// contradicting list when its field was observed and the match failed.
    pub supporting: bool,
    pub description: String,
}

impl EvidenceItem {
    pub fn from_rule(rule: &FeatureRule) -> EvidenceItem {
        EvidenceItem {
            rule_id: rule.id.clone(),
            field: rule.field,
            tier: rule.tier,
            supporting: rule.supporting,
            description: rule.description.clone(),
        }
    }
}

/// Per-genus scoring output. Recomputed fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub genus: Genus,
    pub score: f64,
    pub confidence: ConfidenceLevel,
    /// Hard removal by an exclusionary match; independent of the score.
    pub eliminated: bool,
    pub matching: Vec<EvidenceItem>,
    pub contradicting: Vec<EvidenceItem>,
    /// Fields rules wanted but the observation did not carry, deduplicated,
    /// in field declaration order.
    pub missing_fields: Vec<ObservationField>,
}

impl CandidateScore {
    /// A candidate still in play: not eliminated and carrying any positive
    /// evidence. This is the one definition of "active" used everywhere.
    pub fn is_active(&self) -> bool {
        !self.eliminated && self.score > 0.0
    }
}

/// Confidence attached to an inferred field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceConfidence {
    High,
    Medium,
}

/// One contextual default filled in by feature inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inference {
    pub field: ObservationField,
    pub value: String,
    pub confidence: InferenceConfidence,
    pub reason: String,
}

/// Pipeline stage a reasoning step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningStage {
    Inference,
    NotesPreprocessing,
    Scoring,
    Elimination,
    Ambiguity,
    QuestionSelection,
    Heuristics,
    Safety,
    Edibility,
}

/// One line of the explain-why trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStep {
    pub stage: ReasoningStage,
    pub summary: String,
}

impl ReasoningStep {
    pub fn new(stage: ReasoningStage, summary: impl Into<String>) -> ReasoningStep {
        ReasoningStep {
            stage,
            summary: summary.into(),
        }
    }
}

/// A safety warning. Emitted whenever the relevant genus is in play,
/// regardless of confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SafetyWarning {
    DangerousGenus {
        genus: Genus,
        toxicity: ToxicityClass,
        message: String,
    },
    DangerousLookalike {
        sought: Genus,
        dangerous: Genus,
        distinguishing_features: Vec<String>,
        message: String,
    },
}

impl SafetyWarning {
    pub fn is_critical(&self) -> bool {
        match self {
            SafetyWarning::DangerousGenus { .. } => true,
            SafetyWarning::DangerousLookalike { .. } => false,
        }
    }

    /// The genus this warning is about.
    pub fn concerns(&self) -> Genus {
        match self {
            SafetyWarning::DangerousGenus { genus, .. } => *genus,
            SafetyWarning::DangerousLookalike { dangerous, .. } => *dangerous,
        }
    }
}

/// Safety section of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub warnings: Vec<SafetyWarning>,
    /// The conjunctive foraging gate: top confidence at least high AND no
    /// dangerous genus still in play.
    pub confidence_sufficient_for_foraging: bool,
    /// Blanket advisory line, present on every result.
    pub advisory: String,
}

/// Why edibility information was withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithholdReason {
    NoCandidates,
    ConfidenceBelowThreshold,
    DangerousGenusActive,
}

/// Edibility output, gated identically to the foraging flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EdibilityAssessment {
    Granted {
        genus: Genus,
        edibility: EdibilityClass,
        summary: String,
        caveats: Vec<String>,
    },
    Withheld {
        reason: WithholdReason,
        /// Specific checks that would unblock the assessment.
        missing_checks: Vec<String>,
    },
}

/// A follow-up question the forager may answer or skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub field: ObservationField,
    pub prompt: String,
    pub info_gain: f64,
    pub safety_relevant: bool,
    /// Always true; there is no mechanism to force an answer.
    pub skippable: bool,
    /// Active genera an answer would discriminate between.
    pub discriminates: Vec<Genus>,
}

/// A context-dependent observation combination worth clarifying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityFlag {
    pub fields: Vec<ObservationField>,
    pub question: String,
    pub rationale: String,
    /// The subset of active genera the ambiguity concerns.
    pub genera: Vec<Genus>,
}

/// A heuristic that fired for a qualifying candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggeredHeuristic {
    pub heuristic_id: String,
    pub name: String,
    /// Highest-scoring candidate that qualified.
    pub genus: Genus,
    pub candidate_confidence: ConfidenceLevel,
    pub priority: HeuristicPriority,
    pub category: HeuristicCategory,
    pub steps: Vec<HeuristicStep>,
    pub outcomes: Vec<String>,
}

/// A concrete next thing to do, derived from a triggered heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub description: String,
    pub priority: HeuristicPriority,
    pub safety_critical: bool,
    pub source_heuristic: String,
}

/// The complete, immutable output of one identification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificationResult {
    /// All genera, sorted by score descending, eliminated genera last.
    pub candidates: Vec<CandidateScore>,
    pub inferences: Vec<Inference>,
    pub reasoning_chain: Vec<ReasoningStep>,
    pub safety: SafetyReport,
    pub edibility: EdibilityAssessment,
    pub suggested_actions: Vec<SuggestedAction>,
    pub follow_up_questions: Vec<Question>,
    pub ambiguities: Vec<AmbiguityFlag>,
    pub triggered_heuristics: Vec<TriggeredHeuristic>,
}

impl IdentificationResult {
    /// The best non-eliminated candidate with any evidence, if one exists.
    pub fn top_candidate(&self) -> Option<&CandidateScore> {
        self.candidates.iter().find(|c| c.is_active())
    }

    /// Candidates still in play, best first.
    pub fn active_candidates(&self) -> Vec<&CandidateScore> {
        self.candidates.iter().filter(|c| c.is_active()).collect()
    }
}
