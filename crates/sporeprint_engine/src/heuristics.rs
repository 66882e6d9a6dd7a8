//! Matching field heuristics to qualifying candidates.
//!
//! A heuristic fires when a candidate its target covers is still in play
//! and has reached the heuristic's minimum confidence; the highest-scoring
//! such candidate is the one it fires for. Triggered procedures sort
//! critical-first, safety discrimination ahead of edibility within a
//! priority. The first step or two of each becomes a concrete suggested
//! action.

use tracing::debug;

use sporeprint_common::{
    CandidateScore, Heuristic, HeuristicCategory, HeuristicPriority, SuggestedAction,
    TriggeredHeuristic,
};

/// How many leading steps of a triggered heuristic become actions.
const ACTION_STEPS: usize = 2;

/// Match the heuristic table against the scored candidates.
///
/// `candidates` must be in scoring order, best first; the first qualifying
/// candidate a heuristic finds is then its best one.
pub fn find_applicable_heuristics(
    candidates: &[CandidateScore],
    heuristics: &[Heuristic],
) -> Vec<TriggeredHeuristic> {
    let mut triggered: Vec<TriggeredHeuristic> = Vec::new();
    for heuristic in heuristics {
        let Some(best) = candidates.iter().find(|c| {
            c.is_active()
                && heuristic.target.applies_to(c.genus)
                && c.confidence >= heuristic.min_confidence
        }) else {
            continue;
        };
        triggered.push(TriggeredHeuristic {
            heuristic_id: heuristic.id.clone(),
            name: heuristic.name.clone(),
            genus: best.genus,
            candidate_confidence: best.confidence,
            priority: heuristic.priority,
            category: heuristic.category,
            steps: heuristic.steps(),
            outcomes: heuristic.outcomes.clone(),
        });
    }

    // Stable sort: ties keep table authoring order.
    triggered.sort_by_key(|t| (t.priority, t.category));

    if !triggered.is_empty() {
        debug!(count = triggered.len(), "matched field heuristics");
    }
    triggered
}

/// Flatten the leading steps of each triggered heuristic into suggested
/// actions, safety notes folded into the wording.
pub fn heuristic_actions(triggered: &[TriggeredHeuristic]) -> Vec<SuggestedAction> {
    let mut actions: Vec<SuggestedAction> = Vec::new();
    for t in triggered {
        for step in t.steps.iter().take(ACTION_STEPS) {
            let safety_critical = t.priority == HeuristicPriority::Critical
                || t.category == HeuristicCategory::SafetyDiscrimination
                || step.safety_note.is_some();
            let description = match &step.safety_note {
                Some(note) => format!("{} ({})", step.instruction, note),
                None => step.instruction.clone(),
            };
            actions.push(SuggestedAction {
                description,
                priority: t.priority,
                safety_critical,
                source_heuristic: t.heuristic_id.clone(),
            });
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use sporeprint_common::{builtin_heuristics, ConfidenceLevel, Genus};

    fn make_candidate(genus: Genus, score: f64, eliminated: bool) -> CandidateScore {
        CandidateScore {
            genus,
            score,
            confidence: ConfidenceLevel::from_score(score),
            eliminated,
            matching: Vec::new(),
            contradicting: Vec::new(),
            missing_fields: Vec::new(),
        }
    }

    fn find<'a>(triggered: &'a [TriggeredHeuristic], id: &str) -> Option<&'a TriggeredHeuristic> {
        triggered.iter().find(|t| t.heuristic_id == id)
    }

    #[test]
    fn test_below_minimum_confidence_never_fires() {
        // The taste test needs moderate confidence; 0.2 is only low.
        let candidates = vec![make_candidate(Genus::Russula, 0.2, false)];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        assert!(find(&triggered, "russulaceae-taste-test").is_none());
    }

    #[test]
    fn test_at_minimum_confidence_fires() {
        let candidates = vec![make_candidate(Genus::Russula, 0.5, false)];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        let taste = find(&triggered, "russulaceae-taste-test").unwrap();
        assert_eq!(taste.genus, Genus::Russula);
        assert_eq!(taste.candidate_confidence, ConfidenceLevel::Moderate);
        assert!(!taste.steps.is_empty());
    }

    #[test]
    fn test_low_bar_heuristics_fire_early() {
        // Base excavation deliberately has a low bar: any live amanita
        // possibility warrants digging.
        let candidates = vec![make_candidate(Genus::Amanita, 0.2, false)];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        assert!(find(&triggered, "amanita-base-excavation").is_some());
    }

    #[test]
    fn test_eliminated_and_zero_candidates_never_fire() {
        let candidates = vec![
            make_candidate(Genus::Amanita, 0.9, true),
            make_candidate(Genus::Russula, 0.0, false),
        ];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        assert!(triggered.is_empty());
    }

    #[test]
    fn test_family_target_picks_the_best_member() {
        let candidates = vec![
            make_candidate(Genus::Russula, 0.8, false),
            make_candidate(Genus::Lactarius, 0.5, false),
        ];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        let taste = find(&triggered, "russulaceae-taste-test").unwrap();
        assert_eq!(taste.genus, Genus::Russula);
    }

    #[test]
    fn test_triggered_order_is_priority_then_category() {
        // A confident chanterelle call fires the critical ridge check and
        // lower-priority procedures together.
        let candidates = vec![
            make_candidate(Genus::Cantharellus, 0.8, false),
            make_candidate(Genus::Lactarius, 0.5, false),
            make_candidate(Genus::Pleurotus, 0.5, false),
        ];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        assert!(triggered.len() >= 3);
        for pair in triggered.windows(2) {
            assert!(
                (pair[0].priority, pair[0].category) <= (pair[1].priority, pair[1].category),
                "{} sorted after {}",
                pair[0].heuristic_id,
                pair[1].heuristic_id
            );
        }
        assert_eq!(triggered[0].priority, HeuristicPriority::Critical);
    }

    #[test]
    fn test_actions_take_leading_steps_and_fold_notes() {
        let candidates = vec![make_candidate(Genus::Lycoperdon, 0.5, false)];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        let actions = heuristic_actions(&triggered);
        assert!(!actions.is_empty());
        let section = actions
            .iter()
            .find(|a| a.source_heuristic == "lycoperdon-section-test")
            .unwrap();
        assert!(section.safety_critical);
        // The noted first step carries its warning inline.
        assert!(section.description.contains('('));
        for action in &actions {
            assert!(!action.description.is_empty());
        }
    }

    #[test]
    fn test_actions_per_heuristic_are_capped() {
        let candidates = vec![make_candidate(Genus::Cantharellus, 0.8, false)];
        let triggered = find_applicable_heuristics(&candidates, builtin_heuristics());
        let actions = heuristic_actions(&triggered);
        let ridge_actions = actions
            .iter()
            .filter(|a| a.source_heuristic == "cantharellus-ridge-check")
            .count();
        // The ridge check has three steps; only the first two become actions.
        assert_eq!(ridge_actions, 2);
    }
}
