//! The identification pipeline.
//!
//! `identify` is the one entry point hosts call: infer contextual defaults,
//! mine the notes, score every genus, then layer ambiguities, questions,
//! heuristics, safety and edibility on top, recording a reasoning step for
//! each stage that did something. The function is pure: same observation,
//! datasets, config and clock in, same result out. The multi-turn loop
//! outside re-supplies the accumulated observation each call; nothing is
//! retained here between calls.

use chrono::{DateTime, Utc};
use tracing::debug;

use sporeprint_common::{
    builtin_heuristics, builtin_rules, is_dangerous, EdibilityAssessment, EvidenceTier, Genus,
    Heuristic, IdentificationResult, Observation, ReasoningStage, ReasoningStep, RuleSet,
    WithholdReason,
};

use crate::ambiguity::detect_ambiguities;
use crate::config::EngineConfig;
use crate::heuristics::{find_applicable_heuristics, heuristic_actions};
use crate::inference::infer;
use crate::notes::preprocess_notes;
use crate::questions::select_questions;
use crate::safety::{assess_edibility, build_safety_report};
use crate::scoring::score_all;

/// Run the full identification pipeline over one observation.
///
/// Never refuses: an empty observation yields a complete result whose
/// candidates all sit at zero, with edibility withheld for lack of
/// candidates.
pub fn identify(
    observation: &Observation,
    rules: &RuleSet,
    heuristics: &[Heuristic],
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> IdentificationResult {
    let mut chain: Vec<ReasoningStep> = Vec::new();

    let (observation, inferences) = infer(observation, now);
    for inference in &inferences {
        chain.push(ReasoningStep::new(
            ReasoningStage::Inference,
            format!(
                "assumed {} = {}: {}",
                inference.field, inference.value, inference.reason
            ),
        ));
    }

    let analysis = preprocess_notes(&observation, rules);
    for rule in &analysis.synthetic_rules {
        chain.push(ReasoningStep::new(
            ReasoningStage::NotesPreprocessing,
            rule.description.clone(),
        ));
    }
    let extended_rules;
    let active_rules = if analysis.synthetic_rules.is_empty() {
        rules
    } else {
        extended_rules = rules.extended(analysis.synthetic_rules.clone());
        &extended_rules
    };

    let candidates = score_all(&observation, active_rules, &config.weights);
    let active_genera: Vec<Genus> = candidates
        .iter()
        .filter(|c| c.is_active())
        .map(|c| c.genus)
        .collect();
    match candidates.iter().find(|c| c.is_active()) {
        Some(top) => chain.push(ReasoningStep::new(
            ReasoningStage::Scoring,
            format!(
                "{} leads at {:.2} ({}); {} of {} genera remain in play",
                top.genus,
                top.score,
                top.confidence,
                active_genera.len(),
                candidates.len()
            ),
        )),
        None => chain.push(ReasoningStep::new(
            ReasoningStage::Scoring,
            "no observed character supports any genus yet",
        )),
    }
    for candidate in candidates.iter().filter(|c| c.eliminated) {
        if let Some(item) = candidate
            .contradicting
            .iter()
            .find(|e| e.tier == EvidenceTier::Exclusionary)
        {
            chain.push(ReasoningStep::new(
                ReasoningStage::Elimination,
                format!("{} ruled out: {}", candidate.genus, item.description),
            ));
        }
    }

    let ambiguities = detect_ambiguities(&observation, &active_genera);
    if !ambiguities.is_empty() {
        chain.push(ReasoningStep::new(
            ReasoningStage::Ambiguity,
            format!(
                "{} recorded combination(s) of characters deserve a second look",
                ambiguities.len()
            ),
        ));
    }

    let mut follow_up_questions = select_questions(&candidates, &observation, active_rules);
    follow_up_questions.truncate(config.max_questions);
    if let Some(first) = follow_up_questions.first() {
        chain.push(ReasoningStep::new(
            ReasoningStage::QuestionSelection,
            format!("the most informative next check is {}", first.field),
        ));
    }

    let triggered_heuristics = find_applicable_heuristics(&candidates, heuristics);
    let suggested_actions = heuristic_actions(&triggered_heuristics);
    if let Some(first) = triggered_heuristics.first() {
        chain.push(ReasoningStep::new(
            ReasoningStage::Heuristics,
            format!(
                "{} field test(s) apply; '{}' leads",
                triggered_heuristics.len(),
                first.name
            ),
        ));
    }

    let safety = build_safety_report(&candidates);
    let gate_note = if safety.confidence_sufficient_for_foraging {
        "confidence and field safety both clear the foraging bar".to_string()
    } else if let Some(danger) = active_genera.iter().copied().find(|g| is_dangerous(*g)) {
        format!("foraging advice blocked: {} cannot be ruled out", danger)
    } else if active_genera.is_empty() {
        "foraging advice blocked: no candidate is supported yet".to_string()
    } else {
        "foraging advice blocked: confidence has not reached high".to_string()
    };
    chain.push(ReasoningStep::new(ReasoningStage::Safety, gate_note));

    let edibility = assess_edibility(&candidates, &observation);
    let edibility_note = match &edibility {
        EdibilityAssessment::Granted { genus, .. } => {
            format!("edibility notes released for {}", genus)
        }
        EdibilityAssessment::Withheld { reason, .. } => match reason {
            WithholdReason::NoCandidates => "edibility withheld: nothing to assess yet".to_string(),
            WithholdReason::ConfidenceBelowThreshold => {
                "edibility withheld: the identification is not confident enough".to_string()
            }
            WithholdReason::DangerousGenusActive => {
                "edibility withheld: a dangerous genus is still in play".to_string()
            }
        },
    };
    chain.push(ReasoningStep::new(ReasoningStage::Edibility, edibility_note));

    debug!(
        active = active_genera.len(),
        questions = follow_up_questions.len(),
        warnings = safety.warnings.len(),
        "assembled identification result"
    );

    IdentificationResult {
        candidates,
        inferences,
        reasoning_chain: chain,
        safety,
        edibility,
        suggested_actions,
        follow_up_questions,
        ambiguities,
        triggered_heuristics,
    }
}

/// `identify` against the builtin datasets with default tuning.
pub fn identify_with_builtins(
    observation: &Observation,
    now: DateTime<Utc>,
) -> IdentificationResult {
    identify(
        observation,
        builtin_rules(),
        builtin_heuristics(),
        &EngineConfig::default(),
        now,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_october() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 12, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_observation_yields_a_complete_result() {
        let result = identify_with_builtins(&Observation::default(), at_october());
        assert_eq!(result.candidates.len(), Genus::ALL.len());
        assert!(result.top_candidate().is_none());
        assert!(result.inferences.is_empty());
        assert!(result.follow_up_questions.is_empty());
        assert!(result.triggered_heuristics.is_empty());
        assert!(!result.safety.advisory.is_empty());
        assert!(matches!(
            result.edibility,
            EdibilityAssessment::Withheld {
                reason: WithholdReason::NoCandidates,
                ..
            }
        ));
        // The chain still explains itself: scoring, safety and edibility
        // steps are always present.
        for stage in [
            ReasoningStage::Scoring,
            ReasoningStage::Safety,
            ReasoningStage::Edibility,
        ] {
            assert!(
                result.reasoning_chain.iter().any(|s| s.stage == stage),
                "missing {:?} step",
                stage
            );
        }
    }

    #[test]
    fn test_question_budget_is_respected() {
        let obs = Observation {
            habitat: Some("woodland".to_string()),
            ..Default::default()
        };
        let config = EngineConfig {
            max_questions: 2,
            ..Default::default()
        };
        let result = identify(
            &obs,
            builtin_rules(),
            builtin_heuristics(),
            &config,
            at_october(),
        );
        assert!(result.follow_up_questions.len() <= 2);
    }

    #[test]
    fn test_inference_steps_reach_the_chain() {
        let obs = Observation {
            growth_pattern: Some("tiered".to_string()),
            ..Default::default()
        };
        let result = identify_with_builtins(&obs, at_october());
        assert!(!result.inferences.is_empty());
        assert!(result
            .reasoning_chain
            .iter()
            .any(|s| s.stage == ReasoningStage::Inference));
    }
}
