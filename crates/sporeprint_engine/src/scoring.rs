//! Candidate scoring: hierarchical, non-additive evidence combination.
//!
//! Per genus the rules partition into matching, contradicting and missing.
//! One exclusionary contradiction eliminates outright. Otherwise a
//! definitive match sets a fixed baseline, lower tiers add diminishing
//! returns in authoring order, and every surviving contradiction subtracts
//! half its tier base. The shape is deliberate: categorical evidentiary
//! power, so ten weak cues can never impersonate one volva.
//!
//! A supporting rule whose field was observed but whose match failed counts
//! as mild contradicting evidence, except on the free-text notes field,
//! where unrelated prose would contradict every notes rule at once.

use std::collections::BTreeSet;

use tracing::debug;

use sporeprint_common::{
    CandidateScore, ConfidenceLevel, EvidenceItem, EvidenceTier, Genus, Observation,
    ObservationField, RuleSet, RuleTest,
};

use crate::config::ScoringWeights;

/// Score one genus against an observation.
pub fn score_genus(
    observation: &Observation,
    genus: Genus,
    rules: &RuleSet,
    weights: &ScoringWeights,
) -> CandidateScore {
    let mut matching: Vec<EvidenceItem> = Vec::new();
    let mut contradicting: Vec<EvidenceItem> = Vec::new();
    let mut matched_tiers: Vec<EvidenceTier> = Vec::new();
    let mut missing: BTreeSet<ObservationField> = BTreeSet::new();

    for rule in rules.for_genus(genus) {
        let value = observation.field(rule.field);
        if value.is_none() && !matches!(rule.test, RuleTest::Absent) {
            missing.insert(rule.field);
            continue;
        }

        let matched = rule.test.matches(value.as_ref());
        if rule.supporting {
            if matched {
                matched_tiers.push(rule.tier);
                matching.push(EvidenceItem::from_rule(rule));
            } else if rule.field != ObservationField::DescriptionNotes {
                // Observed field, expected value absent: mild contradiction.
                contradicting.push(EvidenceItem::from_rule(rule));
            }
        } else if matched {
            contradicting.push(EvidenceItem::from_rule(rule));
        }
    }

    let eliminated = contradicting
        .iter()
        .any(|item| item.tier == EvidenceTier::Exclusionary);

    let score = if eliminated || matching.is_empty() {
        0.0
    } else {
        combine(&matched_tiers, &contradicting, weights)
    };

    CandidateScore {
        genus,
        score,
        confidence: ConfidenceLevel::from_score(score),
        eliminated,
        matching,
        contradicting,
        missing_fields: missing.into_iter().collect(),
    }
}

/// The hierarchical combination itself. `matched_tiers` is in authoring
/// order, which fixes the diminishing-returns series deterministically.
fn combine(
    matched_tiers: &[EvidenceTier],
    contradicting: &[EvidenceItem],
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;

    // Definitive evidence is a fixed baseline, not a sum.
    if matched_tiers.contains(&EvidenceTier::Definitive) {
        score = weights.definitive_baseline;
    }

    for tier in [EvidenceTier::Strong, EvidenceTier::Moderate, EvidenceTier::Weak] {
        let mut position = 0i32;
        for matched in matched_tiers.iter().filter(|t| **t == tier) {
            score += weights.base_for(*matched) * weights.decay.powi(position);
            position += 1;
        }
    }

    for item in contradicting {
        score -= weights.contradiction_factor * weights.base_for(item.tier);
    }

    score.clamp(0.0, 1.0)
}

/// Score every genus, best first, eliminated genera always last whatever
/// their nominal score.
pub fn score_all(
    observation: &Observation,
    rules: &RuleSet,
    weights: &ScoringWeights,
) -> Vec<CandidateScore> {
    let mut candidates: Vec<CandidateScore> = Genus::ALL
        .iter()
        .map(|genus| score_genus(observation, *genus, rules, weights))
        .collect();

    // Stable sort from genus declaration order keeps ties deterministic.
    candidates.sort_by(|a, b| {
        a.eliminated
            .cmp(&b.eliminated)
            .then(b.score.total_cmp(&a.score))
    });

    let active = candidates.iter().filter(|c| c.is_active()).count();
    let eliminated = candidates.iter().filter(|c| c.eliminated).count();
    debug!(active, eliminated, "scored all candidates");

    candidates
}
