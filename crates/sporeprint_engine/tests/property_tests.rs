//! Property-Based Tests
//!
//! Tests that verify engine invariants hold across randomized observations.
//! Uses standard library for test generation rather than external crates
//! to minimize dependencies.
//!
//! ## Invariants Tested
//!
//! - PROP-SCORE-001: Candidate scores always land in [0.0, 1.0]
//! - PROP-SCORE-002: Eliminated candidates score zero and carry the exclusion
//! - PROP-SCORE-003: Confidence is always the band of the score
//! - PROP-SCORE-004: Candidate order is survivors-first, best-first, complete
//! - PROP-SCORE-005: Adding agreeing evidence never lowers a genus
//! - PROP-NOTES-001: Notes evidence never eliminates a candidate
//! - PROP-QUEST-001: Questions only target unanswered fields
//! - PROP-QUEST-002: Questions are skippable, bounded and discriminating
//! - PROP-HEUR-001: Triggered heuristics respect their confidence floor
//! - PROP-GATE-001: The foraging gate never opens past a dangerous genus
//! - PROP-GATE-002: Every withhold reason is consistent with the candidates
//! - PROP-RESULT-001: Identification is a pure function of its inputs

use chrono::{DateTime, TimeZone, Utc};

use sporeprint_common::{
    builtin_heuristics, is_dangerous, ConfidenceLevel, EdibilityAssessment, EvidenceTier, Genus,
    IdentificationResult, Observation, ObservationField, WithholdReason,
};
use sporeprint_engine::{identify_with_builtins, STANDING_ADVISORY};

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Simple pseudo-random number generator for test inputs
/// Uses xorshift64 algorithm
struct TestRng {
    state: u64,
}

impl TestRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }

    fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % (max - min))
    }

    fn chance(&mut self, one_in: u64) -> bool {
        self.next_u64() % one_in == 0
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }
}

// Vocabulary pools drawn from the rule base, plus off-vocabulary strays the
// engine must shrug at.
const CAP_COLORS: &[&str] = &[
    "white", "cream", "yellow", "egg-yellow", "red", "brown", "grey", "violet", "orange", "teal",
];
const GILL_TYPES: &[&str] = &["gills", "pores", "teeth", "ridges", "none"];
const GILL_COLORS: &[&str] = &["white", "cream", "pink", "brown", "black", "rusty brown"];
const HABITATS: &[&str] = &["woodland", "grassland", "parkland", "garden", "heath"];
const SUBSTRATES: &[&str] = &["soil", "wood", "dung", "litter", "sand"];
const GROWTH_PATTERNS: &[&str] = &["single", "scattered", "clustered", "tiered", "ring"];
const FLESH_TEXTURES: &[&str] = &["brittle", "fibrous", "firm", "soft"];
const PRINT_COLORS: &[&str] = &["white", "cream", "pink", "rusty brown", "brown", "olive-brown"];
const SMELLS: &[&str] = &["mushroomy", "aniseed", "phenolic", "apricot", "mealy"];
const NOTES: &[&str] = &[
    "does not deliquesce",
    "no ring anywhere on the stem",
    "probably not an amanita",
    "cannot be a galerina",
    "black bootlace cords under the bark",
    "glows faintly in the dark",
    "weeps white milk when nicked",
    "smells strongly of apricot without any ring",
];

/// A sparse observation with each character present only sometimes, the way
/// real field records arrive.
fn random_observation(rng: &mut TestRng) -> Observation {
    let mut obs = Observation::default();
    if rng.chance(3) {
        obs.cap_diameter_cm = Some((rng.next_f64() * 30.0).max(0.5));
    }
    if rng.chance(3) {
        obs.cap_color = Some(rng.pick(CAP_COLORS).to_string());
    }
    if rng.chance(3) {
        obs.gill_type = Some(rng.pick(GILL_TYPES).to_string());
    }
    if rng.chance(3) {
        obs.gill_color = Some(rng.pick(GILL_COLORS).to_string());
    }
    if rng.chance(4) {
        obs.stem_present = Some(rng.chance(2));
    }
    if rng.chance(4) {
        obs.stem_height_cm = Some(rng.next_f64() * 40.0);
    }
    if rng.chance(4) {
        obs.ring_present = Some(rng.chance(2));
    }
    if rng.chance(5) {
        obs.volva_present = Some(rng.chance(3));
    }
    if rng.chance(4) {
        obs.flesh_texture = Some(rng.pick(FLESH_TEXTURES).to_string());
    }
    if rng.chance(4) {
        obs.milk_present = Some(rng.chance(3));
    }
    if rng.chance(4) {
        obs.spore_print_color = Some(rng.pick(PRINT_COLORS).to_string());
    }
    if rng.chance(3) {
        obs.habitat = Some(rng.pick(HABITATS).to_string());
    }
    if rng.chance(3) {
        obs.substrate = Some(rng.pick(SUBSTRATES).to_string());
    }
    if rng.chance(3) {
        obs.growth_pattern = Some(rng.pick(GROWTH_PATTERNS).to_string());
    }
    if rng.chance(4) {
        obs.nearby_trees = Some(vec![rng.pick(&["oak", "birch", "beech", "pine"]).to_string()]);
    }
    if rng.chance(4) {
        obs.season_month = Some(rng.next_range(1, 13) as u32);
    }
    if rng.chance(4) {
        obs.smell = Some(rng.pick(SMELLS).to_string());
    }
    if rng.chance(3) {
        obs.description_notes = Some(rng.pick(NOTES).to_string());
    }
    obs
}

fn random_clock(rng: &mut TestRng) -> DateTime<Utc> {
    let month = rng.next_range(1, 13) as u32;
    Utc.with_ymd_and_hms(2024, month, 15, 12, 0, 0).unwrap()
}

fn run_random(seed: u64, iterations: usize, mut check: impl FnMut(&Observation, &IdentificationResult)) {
    let mut rng = TestRng::new(seed);
    for _ in 0..iterations {
        let obs = random_observation(&mut rng);
        let result = identify_with_builtins(&obs, random_clock(&mut rng));
        check(&obs, &result);
    }
}

// ============================================================================
// PROP-SCORE: Scoring Invariants
// ============================================================================

mod scoring_properties {
    use super::*;

    /// Every candidate score MUST stay inside [0.0, 1.0]
    #[test]
    fn test_prop_score_001_scores_bounded() {
        run_random(42, 200, |_, result| {
            for c in &result.candidates {
                assert!(
                    (0.0..=1.0).contains(&c.score),
                    "{} scored {}",
                    c.genus,
                    c.score
                );
            }
        });
    }

    /// Elimination MUST zero the score and record the exclusionary match
    #[test]
    fn test_prop_score_002_eliminated_candidates_score_zero() {
        run_random(43, 200, |_, result| {
            for c in result.candidates.iter().filter(|c| c.eliminated) {
                assert_eq!(c.score, 0.0, "{} eliminated but scored", c.genus);
                assert!(!c.is_active());
                assert!(
                    c.contradicting
                        .iter()
                        .any(|e| e.tier == EvidenceTier::Exclusionary),
                    "{} eliminated without exclusionary evidence",
                    c.genus
                );
            }
        });
    }

    /// The confidence band MUST always be derived from the score
    #[test]
    fn test_prop_score_003_confidence_matches_band() {
        run_random(44, 200, |_, result| {
            for c in &result.candidates {
                assert_eq!(c.confidence, ConfidenceLevel::from_score(c.score));
            }
        });
    }

    /// Candidate order MUST be survivors-first, best-first, with every genus
    /// present exactly once
    #[test]
    fn test_prop_score_004_order_and_completeness() {
        run_random(45, 200, |_, result| {
            assert_eq!(result.candidates.len(), Genus::ALL.len());
            for genus in Genus::ALL {
                assert_eq!(
                    result.candidates.iter().filter(|c| c.genus == genus).count(),
                    1
                );
            }
            let survivors = result.candidates.iter().take_while(|c| !c.eliminated);
            let mut previous = f64::INFINITY;
            for c in survivors {
                assert!(c.score <= previous, "scores not descending at {}", c.genus);
                previous = c.score;
            }
            let first_out = result
                .candidates
                .iter()
                .position(|c| c.eliminated)
                .unwrap_or(result.candidates.len());
            assert!(
                result.candidates[first_out..].iter().all(|c| c.eliminated),
                "eliminated candidate sorted before a survivor"
            );
        });
    }

    /// Evidence that agrees with a genus MUST never lower its score
    #[test]
    fn test_prop_score_005_agreeing_evidence_is_monotonic() {
        // Each chain adds one more character that matches the target genus;
        // the clock sits inside both genera's seasonal windows.
        let september = Utc.with_ymd_and_hms(2024, 9, 15, 12, 0, 0).unwrap();

        let boletus_chain = [
            Observation {
                habitat: Some("woodland".to_string()),
                ..Default::default()
            },
            Observation {
                habitat: Some("woodland".to_string()),
                gill_type: Some("pores".to_string()),
                ..Default::default()
            },
            Observation {
                habitat: Some("woodland".to_string()),
                gill_type: Some("pores".to_string()),
                substrate: Some("soil".to_string()),
                ..Default::default()
            },
            Observation {
                habitat: Some("woodland".to_string()),
                gill_type: Some("pores".to_string()),
                substrate: Some("soil".to_string()),
                bruising_color: Some("blue".to_string()),
                ..Default::default()
            },
        ];
        let amanita_chain = [
            Observation {
                habitat: Some("woodland".to_string()),
                ..Default::default()
            },
            Observation {
                habitat: Some("woodland".to_string()),
                gill_type: Some("gills".to_string()),
                ..Default::default()
            },
            Observation {
                habitat: Some("woodland".to_string()),
                gill_type: Some("gills".to_string()),
                gill_color: Some("white".to_string()),
                ..Default::default()
            },
            Observation {
                habitat: Some("woodland".to_string()),
                gill_type: Some("gills".to_string()),
                gill_color: Some("white".to_string()),
                ring_present: Some(true),
                volva_present: Some(true),
                ..Default::default()
            },
        ];

        for (genus, chain) in [
            (Genus::Boletus, &boletus_chain),
            (Genus::Amanita, &amanita_chain),
        ] {
            let mut previous = 0.0;
            for obs in chain {
                let result = identify_with_builtins(obs, september);
                let score = result
                    .candidates
                    .iter()
                    .find(|c| c.genus == genus)
                    .unwrap()
                    .score;
                assert!(
                    score >= previous,
                    "{genus} dropped from {previous} to {score}"
                );
                previous = score;
            }
        }
    }
}

// ============================================================================
// PROP-NOTES: Notes Mining Invariants
// ============================================================================

mod notes_properties {
    use super::*;

    /// Prose evidence MUST weigh in but never eliminate
    #[test]
    fn test_prop_notes_001_notes_never_eliminate() {
        run_random(46, 200, |_, result| {
            for c in &result.candidates {
                for item in &c.contradicting {
                    if item.field == ObservationField::DescriptionNotes {
                        assert_ne!(
                            item.tier,
                            EvidenceTier::Exclusionary,
                            "notes evidence eliminated {}",
                            c.genus
                        );
                    }
                }
            }
        });
    }
}

// ============================================================================
// PROP-QUEST: Question Selection Invariants
// ============================================================================

mod question_properties {
    use super::*;

    /// Questions MUST never re-ask an observed or inferred field
    #[test]
    fn test_prop_quest_001_only_unanswered_fields() {
        run_random(47, 200, |obs, result| {
            for q in &result.follow_up_questions {
                assert!(!obs.has(q.field), "asked about observed {}", q.field);
                assert!(
                    result.inferences.iter().all(|i| i.field != q.field),
                    "asked about inferred {}",
                    q.field
                );
            }
        });
    }

    /// Questions MUST be skippable, within budget, and aimed at live genera
    #[test]
    fn test_prop_quest_002_skippable_bounded_discriminating() {
        run_random(48, 200, |_, result| {
            assert!(result.follow_up_questions.len() <= 5);
            if result.active_candidates().len() <= 1 {
                assert!(result.follow_up_questions.is_empty());
            }
            let active: Vec<Genus> = result
                .active_candidates()
                .iter()
                .map(|c| c.genus)
                .collect();
            for q in &result.follow_up_questions {
                assert!(q.skippable);
                assert!(q.info_gain > 0.0);
                assert!(!q.discriminates.is_empty());
                assert!(!q.prompt.is_empty());
                for genus in &q.discriminates {
                    assert!(active.contains(genus), "{genus} is not in play");
                }
            }
        });
    }
}

// ============================================================================
// PROP-HEUR: Heuristic Invariants
// ============================================================================

mod heuristic_properties {
    use super::*;

    /// A heuristic MUST only fire for a live candidate at or above its floor
    #[test]
    fn test_prop_heur_001_confidence_floor_respected() {
        run_random(49, 200, |_, result| {
            for triggered in &result.triggered_heuristics {
                let heuristic = builtin_heuristics()
                    .iter()
                    .find(|h| h.id == triggered.heuristic_id)
                    .expect("triggered heuristic not in the builtin set");
                assert!(triggered.candidate_confidence >= heuristic.min_confidence);
                assert!(heuristic.target.applies_to(triggered.genus));
                let candidate = result
                    .candidates
                    .iter()
                    .find(|c| c.genus == triggered.genus)
                    .unwrap();
                assert!(candidate.is_active());
                assert_eq!(candidate.confidence, triggered.candidate_confidence);
            }
        });
    }
}

// ============================================================================
// PROP-GATE: Safety Gate Invariants
// ============================================================================

mod safety_properties {
    use super::*;

    /// The gate MUST stay shut while any dangerous genus is in play or the
    /// leader sits below high confidence
    #[test]
    fn test_prop_gate_001_never_opens_past_danger() {
        run_random(50, 200, |_, result| {
            assert_eq!(result.safety.advisory, STANDING_ADVISORY);
            let dangerous_alive = result
                .active_candidates()
                .iter()
                .any(|c| is_dangerous(c.genus));
            if result.safety.confidence_sufficient_for_foraging {
                assert!(!dangerous_alive, "gate open with a dangerous genus alive");
                let top = result.top_candidate().expect("gate open with no leader");
                assert!(top.confidence >= ConfidenceLevel::High);
            }
            // Edibility release and the gate are the same decision.
            match &result.edibility {
                EdibilityAssessment::Granted { genus, .. } => {
                    assert!(result.safety.confidence_sufficient_for_foraging);
                    assert_eq!(*genus, result.top_candidate().unwrap().genus);
                }
                EdibilityAssessment::Withheld { .. } => {
                    assert!(!result.safety.confidence_sufficient_for_foraging);
                }
            }
            // Critical warnings only ever name live dangerous candidates.
            for warning in result.safety.warnings.iter().filter(|w| w.is_critical()) {
                let named = result
                    .candidates
                    .iter()
                    .find(|c| c.genus == warning.concerns())
                    .unwrap();
                assert!(named.is_active());
                assert!(is_dangerous(named.genus));
            }
        });
    }

    /// Every withhold reason MUST match the candidate list it was built from
    #[test]
    fn test_prop_gate_002_withhold_reasons_consistent() {
        run_random(51, 200, |_, result| {
            let active = result.active_candidates();
            match &result.edibility {
                EdibilityAssessment::Granted { .. } => {}
                EdibilityAssessment::Withheld {
                    reason,
                    missing_checks,
                } => match reason {
                    WithholdReason::NoCandidates => {
                        assert!(active.is_empty());
                        assert!(!missing_checks.is_empty());
                    }
                    WithholdReason::DangerousGenusActive => {
                        assert!(active.iter().any(|c| is_dangerous(c.genus)));
                        assert!(!missing_checks.is_empty());
                    }
                    WithholdReason::ConfidenceBelowThreshold => {
                        assert!(!active.is_empty());
                        assert!(!active.iter().any(|c| is_dangerous(c.genus)));
                        assert!(active[0].confidence < ConfidenceLevel::High);
                    }
                },
            }
        });
    }
}

// ============================================================================
// PROP-RESULT: Determinism
// ============================================================================

mod result_properties {
    use super::*;

    /// The same observation and clock MUST always produce the same result
    #[test]
    fn test_prop_result_001_pure_function() {
        let mut rng = TestRng::new(52);
        for _ in 0..40 {
            let obs = random_observation(&mut rng);
            let clock = random_clock(&mut rng);
            let first = identify_with_builtins(&obs, clock);
            let second = identify_with_builtins(&obs, clock);
            assert_eq!(first, second);
        }
    }
}
