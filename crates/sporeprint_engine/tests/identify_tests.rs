//! End-to-end golden tests for the identification pipeline.
//!
//! Each test feeds one realistic field observation through `identify` and
//! pins the behaviour a forager would actually see: who leads, who is ruled
//! out, what gets asked next, and whether the safety gate opens. Tests
//! verify:
//! - An empty observation yields a complete, fully-withheld result
//! - Classic single-character portraits land on the expected genus
//! - Elimination, inference, notes mining and lookalike warnings all
//!   surface in the result and its reasoning chain
//! - Dangerous genera block foraging advice regardless of the leader
//! - The pipeline is deterministic and the result round-trips through JSON

use chrono::{DateTime, TimeZone, Utc};

use sporeprint_common::{
    CandidateScore, ConfidenceLevel, EdibilityAssessment, EdibilityClass, EvidenceTier, Genus,
    IdentificationResult, InferenceConfidence, Observation, ObservationField, ReasoningStage,
    SafetyWarning, WithholdReason,
};
use sporeprint_engine::identify_with_builtins;

/// A fixed clock; the engine takes the time as an argument.
fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

fn candidate<'a>(result: &'a IdentificationResult, genus: Genus) -> &'a CandidateScore {
    result
        .candidates
        .iter()
        .find(|c| c.genus == genus)
        .unwrap_or_else(|| panic!("{genus} missing from the candidate list"))
}

fn stage_summaries(result: &IdentificationResult, stage: ReasoningStage) -> Vec<&str> {
    result
        .reasoning_chain
        .iter()
        .filter(|s| s.stage == stage)
        .map(|s| s.summary.as_str())
        .collect()
}

// =============================================================================
// Blank input
// =============================================================================

#[test]
fn golden_empty_observation_yields_a_complete_withheld_result() {
    let result = identify_with_builtins(&Observation::default(), at(2024, 3, 15));

    assert_eq!(result.candidates.len(), Genus::ALL.len());
    for c in &result.candidates {
        assert_eq!(c.score, 0.0);
        assert!(!c.eliminated);
        assert!(!c.is_active());
    }
    assert!(result.top_candidate().is_none());
    assert!(result.inferences.is_empty());
    assert!(result.follow_up_questions.is_empty());
    assert!(result.triggered_heuristics.is_empty());

    assert!(!result.safety.confidence_sufficient_for_foraging);
    assert!(!result.safety.advisory.is_empty());
    match &result.edibility {
        EdibilityAssessment::Withheld {
            reason: WithholdReason::NoCandidates,
            missing_checks,
        } => assert!(!missing_checks.is_empty()),
        other => panic!("expected a no-candidates withhold, got {other:?}"),
    }

    // The chain still narrates every mandatory stage.
    assert_eq!(
        stage_summaries(&result, ReasoningStage::Scoring),
        vec!["no observed character supports any genus yet"]
    );
    assert_eq!(stage_summaries(&result, ReasoningStage::Safety).len(), 1);
    assert_eq!(stage_summaries(&result, ReasoningStage::Edibility).len(), 1);
}

// =============================================================================
// Classic portraits
// =============================================================================

#[test]
fn golden_brittle_flesh_narrows_to_the_russulaceae_split() {
    let obs = Observation {
        flesh_texture: Some("brittle".to_string()),
        ..Default::default()
    };
    // March sits outside every seasonal window, so the inferred month adds
    // nothing on top of the flesh character.
    let result = identify_with_builtins(&obs, at(2024, 3, 15));

    assert_eq!(result.candidates[0].genus, Genus::Lactarius);
    assert_eq!(result.candidates[1].genus, Genus::Russula);
    for genus in [Genus::Lactarius, Genus::Russula] {
        let c = candidate(&result, genus);
        assert!((c.score - 0.80).abs() < 1e-9, "{genus} at {}", c.score);
        assert_eq!(c.confidence, ConfidenceLevel::High);
        assert!(c.is_active());
    }
    assert_eq!(result.active_candidates().len(), 2);
    assert!(result.candidates.iter().all(|c| !c.eliminated));

    // A definitive autumn character observed in spring leaves the seasonal
    // genera contradicted but never eliminated.
    let amanita = candidate(&result, Genus::Amanita);
    assert_eq!(amanita.score, 0.0);
    assert!(!amanita.eliminated);
    assert!(!amanita.contradicting.is_empty());

    // The month was filled in from the clock.
    let season = result
        .inferences
        .iter()
        .find(|i| i.field == ObservationField::SeasonMonth)
        .unwrap();
    assert_eq!(season.value, "3");

    // Latex is the one check that splits the two: definitive for a milkcap,
    // exclusionary for a brittlegill.
    assert_eq!(
        result.follow_up_questions[0].field,
        ObservationField::MilkPresent
    );
    assert!(result.follow_up_questions[0].skippable);

    let taste = result
        .triggered_heuristics
        .iter()
        .find(|h| h.heuristic_id == "russulaceae-taste-test")
        .unwrap();
    assert_eq!(taste.genus, Genus::Lactarius);

    // No dangerous genus is in play and the leader is at high confidence.
    assert!(result.safety.confidence_sufficient_for_foraging);
    match &result.edibility {
        EdibilityAssessment::Granted {
            genus, edibility, ..
        } => {
            assert_eq!(*genus, Genus::Lactarius);
            assert_eq!(*edibility, EdibilityClass::EdibleWithCaution);
        }
        other => panic!("expected a granted assessment, got {other:?}"),
    }
}

#[test]
fn golden_pore_layer_reads_as_a_bolete() {
    let obs = Observation {
        gill_type: Some("pores".to_string()),
        ..Default::default()
    };
    let result = identify_with_builtins(&obs, at(2024, 3, 15));

    let top = result.top_candidate().unwrap();
    assert_eq!(top.genus, Genus::Boletus);
    assert_eq!(top.confidence, ConfidenceLevel::High);
    assert!(top.score > 0.7 && top.score < 0.8);

    // Only the two pore-bearers survive; every gilled genus is hard-excluded.
    assert_eq!(result.candidates[1].genus, Genus::Laetiporus);
    assert!(result.candidates[1].is_active());
    let eliminated: Vec<&CandidateScore> =
        result.candidates.iter().filter(|c| c.eliminated).collect();
    assert_eq!(eliminated.len(), 16);
    for c in &eliminated {
        assert_eq!(c.score, 0.0);
        assert!(c
            .contradicting
            .iter()
            .any(|e| e.tier == EvidenceTier::Exclusionary));
    }
    // Eliminated candidates sort after every survivor.
    assert!(result.candidates[2..].iter().all(|c| c.eliminated));

    assert!(stage_summaries(&result, ReasoningStage::Elimination).len() >= 10);
    assert!(result
        .triggered_heuristics
        .iter()
        .any(|h| h.heuristic_id == "boletus-pore-check"));

    assert!(result.safety.confidence_sufficient_for_foraging);
    match &result.edibility {
        EdibilityAssessment::Granted {
            genus, edibility, ..
        } => {
            assert_eq!(*genus, Genus::Boletus);
            assert_eq!(*edibility, EdibilityClass::ChoiceEdible);
        }
        other => panic!("expected a granted assessment, got {other:?}"),
    }
}

// =============================================================================
// The deadly one
// =============================================================================

fn amanita_observation() -> Observation {
    Observation {
        gill_type: Some("gills".to_string()),
        gill_color: Some("white".to_string()),
        ring_present: Some(true),
        volva_present: Some(true),
        habitat: Some("woodland".to_string()),
        ..Default::default()
    }
}

#[test]
fn golden_volvate_white_gilled_woodlander_is_an_amanita_and_blocks_everything() {
    let result = identify_with_builtins(&amanita_observation(), at(2024, 10, 15));

    let top = result.top_candidate().unwrap();
    assert_eq!(top.genus, Genus::Amanita);
    assert_eq!(top.score, 1.0);
    assert_eq!(top.confidence, ConfidenceLevel::Definitive);

    // The volva alone eliminates all seventeen other genera.
    assert_eq!(result.active_candidates().len(), 1);
    assert_eq!(
        result.candidates.iter().filter(|c| c.eliminated).count(),
        Genus::ALL.len() - 1
    );

    // Nothing left to discriminate means nothing left to ask.
    assert!(result.follow_up_questions.is_empty());

    // One critical warning for the genus itself, plus the two lookalike
    // confusions that name an amanita as their dangerous side.
    let critical: Vec<&SafetyWarning> = result
        .safety
        .warnings
        .iter()
        .filter(|w| w.is_critical())
        .collect();
    assert_eq!(critical.len(), 1);
    assert!(result.safety.warnings.len() >= 3);
    assert!(result
        .safety
        .warnings
        .iter()
        .all(|w| w.concerns() == Genus::Amanita));

    assert!(!result.safety.confidence_sufficient_for_foraging);
    assert!(stage_summaries(&result, ReasoningStage::Safety)[0]
        .contains("Amanita cannot be ruled out"));

    // Volva, ring and gill colour are all already observed, so no field
    // check remains to soften the withhold.
    match &result.edibility {
        EdibilityAssessment::Withheld {
            reason: WithholdReason::DangerousGenusActive,
            missing_checks,
        } => {
            assert_eq!(missing_checks.len(), 1);
            assert!(missing_checks[0].contains("treat it as dangerous"));
        }
        other => panic!("expected a dangerous-genus withhold, got {other:?}"),
    }

    // The base excavation drill fires even at definitive confidence.
    assert_eq!(result.triggered_heuristics.len(), 1);
    assert_eq!(
        result.triggered_heuristics[0].heuristic_id,
        "amanita-base-excavation"
    );
    assert_eq!(result.suggested_actions.len(), 2);
    assert!(result.suggested_actions[0].safety_critical);

    // With the print still untaken, the key-measurement flag stays up.
    assert_eq!(result.ambiguities.len(), 1);
    assert_eq!(
        result.ambiguities[0].fields,
        vec![ObservationField::SporePrintColor]
    );
    assert_eq!(result.ambiguities[0].genera, vec![Genus::Amanita]);
}

// =============================================================================
// Lookalike traps
// =============================================================================

#[test]
fn golden_ridged_golden_funnel_warns_about_the_jack_o_lantern() {
    let obs = Observation {
        cap_color: Some("egg-yellow".to_string()),
        gill_type: Some("ridges".to_string()),
        substrate: Some("soil".to_string()),
        habitat: Some("woodland".to_string()),
        ..Default::default()
    };
    let result = identify_with_builtins(&obs, at(2024, 10, 15));

    let top = result.top_candidate().unwrap();
    assert_eq!(top.genus, Genus::Cantharellus);
    assert_eq!(top.confidence, ConfidenceLevel::Definitive);

    // Soil growth and failed gill characters take the jack-o'-lantern out
    // of play, but the confusion still earns its warning.
    assert!(!candidate(&result, Genus::Omphalotus).is_active());
    let lookalike = result
        .safety
        .warnings
        .iter()
        .find_map(|w| match w {
            SafetyWarning::DangerousLookalike {
                sought,
                dangerous,
                distinguishing_features,
                ..
            } if *sought == Genus::Cantharellus => {
                Some((*dangerous, distinguishing_features.clone()))
            }
            _ => None,
        })
        .expect("no chanterelle lookalike warning");
    assert_eq!(lookalike.0, Genus::Omphalotus);
    assert!(!lookalike.1.is_empty());

    // Ridges always deserve the second look.
    let ridge_flag = result
        .ambiguities
        .iter()
        .find(|a| a.fields == vec![ObservationField::GillType])
        .expect("no ridge ambiguity flag");
    assert!(ridge_flag.genera.contains(&Genus::Cantharellus));

    assert!(result
        .triggered_heuristics
        .iter()
        .any(|h| h.heuristic_id == "cantharellus-ridge-check"));
}

// =============================================================================
// Notes mining
// =============================================================================

#[test]
fn golden_negated_notes_phrase_counters_its_own_keyword() {
    let obs = Observation {
        description_notes: Some("does not deliquesce into liquid".to_string()),
        ..Default::default()
    };
    let result = identify_with_builtins(&obs, at(2024, 3, 15));

    // The keyword match still lands, the mined negation halves it back.
    let coprinus = candidate(&result, Genus::Coprinus);
    assert!(coprinus.is_active());
    assert!(coprinus
        .matching
        .iter()
        .any(|e| e.rule_id == "coprinus-deliquescing-notes"));
    assert!(coprinus
        .contradicting
        .iter()
        .any(|e| e.rule_id == "notes-negates-coprinus-deliquescing-notes"));
    assert!(!coprinus.eliminated);
    assert!((coprinus.score - 0.155).abs() < 1e-9, "{}", coprinus.score);
    assert_eq!(coprinus.confidence, ConfidenceLevel::Low);

    assert_eq!(result.top_candidate().unwrap().genus, Genus::Coprinus);
    assert!(!stage_summaries(&result, ReasoningStage::NotesPreprocessing).is_empty());
}

// =============================================================================
// Inference feeding the scorer
// =============================================================================

#[test]
fn golden_tiered_growth_fills_ecology_and_flags_the_wood_cluster() {
    let obs = Observation {
        growth_pattern: Some("tiered".to_string()),
        ..Default::default()
    };
    let result = identify_with_builtins(&obs, at(2024, 6, 15));

    // Substrate, stem habit and month all arrive by inference, in order.
    assert_eq!(result.inferences.len(), 3);
    assert_eq!(result.inferences[0].field, ObservationField::Substrate);
    assert_eq!(result.inferences[0].value, "wood");
    assert_eq!(result.inferences[0].confidence, InferenceConfidence::High);
    assert_eq!(result.inferences[1].field, ObservationField::StemPresent);
    assert_eq!(result.inferences[2].field, ObservationField::SeasonMonth);
    assert_eq!(stage_summaries(&result, ReasoningStage::Inference).len(), 3);

    // June favours the bracket; the oyster sits just behind it.
    assert_eq!(result.candidates[0].genus, Genus::Laetiporus);
    assert_eq!(result.candidates[0].confidence, ConfidenceLevel::High);
    assert_eq!(result.candidates[1].genus, Genus::Pleurotus);
    assert!(result.candidates[1].score > 0.6);

    // The same inferred wood keeps the deadly wood-rotters alive.
    assert!(candidate(&result, Genus::Galerina).is_active());
    assert!(candidate(&result, Genus::Omphalotus).is_active());
    for genus in [Genus::Galerina, Genus::Omphalotus] {
        assert!(result
            .safety
            .warnings
            .iter()
            .any(|w| w.is_critical() && w.concerns() == genus));
    }
    assert!(result
        .safety
        .warnings
        .iter()
        .any(|w| matches!(w, SafetyWarning::DangerousLookalike { dangerous, .. }
            if *dangerous == Genus::Galerina)));

    assert!(!result.safety.confidence_sufficient_for_foraging);
    match &result.edibility {
        EdibilityAssessment::Withheld {
            reason: WithholdReason::DangerousGenusActive,
            missing_checks,
        } => {
            assert!(missing_checks.iter().any(|c| c.contains("Galerina")));
            assert!(missing_checks.iter().any(|c| c.contains("spore print")));
        }
        other => panic!("expected a dangerous-genus withhold, got {other:?}"),
    }

    // The untaken print is also the standing key measurement here.
    assert!(result
        .ambiguities
        .iter()
        .any(|a| a.fields == vec![ObservationField::SporePrintColor]
            && a.genera.contains(&Genus::Galerina)));

    // The critical print drill outranks the supplementary ecology check.
    let ids: Vec<&str> = result
        .triggered_heuristics
        .iter()
        .map(|h| h.heuristic_id.as_str())
        .collect();
    assert_eq!(ids[0], "armillaria-print-check");
    assert!(ids.contains(&"pleurotus-ecology-check"));
    assert!(result.suggested_actions.len() >= 2);
    assert!(result.suggested_actions[0].safety_critical);
}

// =============================================================================
// Multi-turn accumulation
// =============================================================================

#[test]
fn golden_more_evidence_tightens_the_candidate_field() {
    let first = Observation {
        habitat: Some("woodland".to_string()),
        gill_type: Some("gills".to_string()),
        ..Default::default()
    };
    let turn_one = identify_with_builtins(&first, at(2024, 3, 15));
    assert!(turn_one.active_candidates().len() > 2);
    assert!(turn_one.top_candidate().unwrap().confidence < ConfidenceLevel::Definitive);

    let answers = Observation {
        flesh_texture: Some("brittle".to_string()),
        milk_present: Some(false),
        ..Default::default()
    };
    let turn_two = identify_with_builtins(&first.merge(&answers), at(2024, 3, 15));

    // Accumulated answers never widen the field.
    let was_active: Vec<Genus> = turn_one
        .active_candidates()
        .iter()
        .map(|c| c.genus)
        .collect();
    for c in turn_two.active_candidates() {
        assert!(was_active.contains(&c.genus), "{} appeared late", c.genus);
    }
    assert!(turn_two.active_candidates().len() <= was_active.len());

    // Brittle flesh with no milk is the brittlegill, not the milkcap.
    let top = turn_two.top_candidate().unwrap();
    assert_eq!(top.genus, Genus::Russula);
    assert_eq!(top.confidence, ConfidenceLevel::Definitive);
    assert!(candidate(&turn_two, Genus::Lactarius)
        .contradicting
        .iter()
        .any(|e| e.rule_id == "lactarius-latex"));

    // An amanita is still faintly alive, so the volva question leads.
    assert!(candidate(&turn_two, Genus::Amanita).is_active());
    assert_eq!(
        turn_two.follow_up_questions[0].field,
        ObservationField::VolvaPresent
    );
    assert!(turn_two.follow_up_questions[0].safety_relevant);
    assert!(!turn_two.safety.confidence_sufficient_for_foraging);
}

// =============================================================================
// Determinism and wire format
// =============================================================================

#[test]
fn golden_identify_is_deterministic() {
    let obs = amanita_observation();
    let first = identify_with_builtins(&obs, at(2024, 10, 15));
    let second = identify_with_builtins(&obs, at(2024, 10, 15));
    assert_eq!(first, second);
}

#[test]
fn golden_result_round_trips_through_json() {
    let result = identify_with_builtins(&amanita_observation(), at(2024, 10, 15));
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"kind\":\"dangerous_genus\""));
    assert!(json.contains("\"status\":\"withheld\""));
    let back: IdentificationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
