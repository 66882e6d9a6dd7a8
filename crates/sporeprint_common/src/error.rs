//! Dataset validation errors.
//!
//! The engine itself is total and raises nothing in normal operation;
//! these errors exist for the authoring-time checks over the static
//! tables, run from tests and from dataset tooling.

use thiserror::Error;

use crate::genus::Genus;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("genus {0} has no authored rules")]
    GenusWithoutRules(Genus),

    #[error("duplicate rule id '{0}'")]
    DuplicateRuleId(String),

    #[error("rule '{0}' is supporting but exclusionary; exclusion only makes sense for contradictions")]
    ExclusionarySupport(String),

    #[error("rule '{0}' supports a genus on field absence; absence rules would match an empty observation")]
    AbsenceSupport(String),

    #[error("rule '{0}' has an empty description")]
    EmptyDescription(String),

    #[error("rule '{0}' has an inverted numeric range")]
    InvertedRange(String),

    #[error("rule '{0}' has a month outside 1-12")]
    InvalidMonth(String),

    #[error("rule '{0}' has an empty match vocabulary")]
    EmptyVocabulary(String),

    #[error("duplicate heuristic id '{0}'")]
    DuplicateHeuristicId(String),

    #[error("heuristic '{0}' has no procedure steps")]
    EmptyProcedure(String),

    #[error("heuristic '{0}' has no outcomes")]
    NoOutcomes(String),

    #[error("heuristic '{0}' has a target covering no genus")]
    TargetWithoutGenera(String),

    #[error("genus {0} has no profile")]
    GenusWithoutProfile(Genus),

    #[error("lookalike pair lists {0} on both sides")]
    SelfLookalike(Genus),

    #[error("lookalike pair names {0} as its dangerous side, but the dangerous table does not list it")]
    DangerousSideUnlisted(Genus),
}
