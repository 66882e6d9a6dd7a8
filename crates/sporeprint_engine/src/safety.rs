//! Safety annotation and the edibility gate.
//!
//! Two rules the rest of the engine never overrides: a dangerous genus in
//! play always warns, whatever its score, and foraging advice needs both a
//! high-confidence top candidate and a field clear of dangerous candidates.
//! A confident identification of a death cap is still a death cap, so
//! confidence alone opens no gate.

use tracing::debug;

use sporeprint_common::{
    dangerous_entry, is_dangerous, profile_for, safety_fields_for, CandidateScore,
    EdibilityAssessment, Genus, Observation, ObservationField, SafetyReport, SafetyWarning,
    WithholdReason, LOOKALIKE_PAIRS,
};

/// The blanket advisory attached to every result.
pub const STANDING_ADVISORY: &str =
    "Never eat any wild mushroom on the strength of this output alone. Confirm the \
     identification with an expert and a current regional guide, and keep an uncooked \
     sample of anything you eat.";

/// Assemble warnings and the foraging gate from the scored candidates.
pub fn build_safety_report(candidates: &[CandidateScore]) -> SafetyReport {
    let active: Vec<&CandidateScore> = candidates.iter().filter(|c| c.is_active()).collect();

    let mut warnings: Vec<SafetyWarning> = Vec::new();
    for candidate in &active {
        if let Some(entry) = dangerous_entry(candidate.genus) {
            warnings.push(SafetyWarning::DangerousGenus {
                genus: entry.genus,
                toxicity: entry.toxicity,
                message: entry.warning.to_string(),
            });
        }
    }

    // A lookalike warning fires when either side of the pair is in play:
    // seeking the safe one risks the dangerous one, and vice versa.
    for pair in LOOKALIKE_PAIRS {
        if active
            .iter()
            .any(|c| c.genus == pair.sought || c.genus == pair.dangerous)
        {
            warnings.push(SafetyWarning::DangerousLookalike {
                sought: pair.sought,
                dangerous: pair.dangerous,
                distinguishing_features: pair
                    .distinguishing_features
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                message: format!(
                    "Anything taken for {} must first be told apart from {}.",
                    pair.sought, pair.dangerous
                ),
            });
        }
    }

    let top_confident = active
        .first()
        .is_some_and(|c| c.confidence.supports_foraging_advice());
    let danger_active = active.iter().any(|c| is_dangerous(c.genus));
    let gate = top_confident && !danger_active;

    debug!(
        warnings = warnings.len(),
        foraging_gate = gate,
        "assembled the safety report"
    );
    SafetyReport {
        warnings,
        confidence_sufficient_for_foraging: gate,
        advisory: STANDING_ADVISORY.to_string(),
    }
}

/// Decide whether edibility information may be released.
///
/// Withhold precedence: nothing to assess, then a dangerous genus still in
/// play, then insufficient confidence. Each withheld answer names the
/// specific checks that would unblock it.
pub fn assess_edibility(
    candidates: &[CandidateScore],
    observation: &Observation,
) -> EdibilityAssessment {
    let active: Vec<&CandidateScore> = candidates.iter().filter(|c| c.is_active()).collect();

    let Some(top) = active.first() else {
        return EdibilityAssessment::Withheld {
            reason: WithholdReason::NoCandidates,
            missing_checks: vec![
                "Record any character of the find; nothing observed so far supports a candidate."
                    .to_string(),
            ],
        };
    };

    let dangerous: Vec<Genus> = active
        .iter()
        .map(|c| c.genus)
        .filter(|g| is_dangerous(*g))
        .collect();
    if !dangerous.is_empty() {
        let mut checks: Vec<String> = Vec::new();
        for genus in &dangerous {
            for field in safety_fields_for(*genus) {
                if observation.has(*field) {
                    continue;
                }
                let check = format!("{} (to settle {})", check_phrase(*field), genus);
                if !checks.contains(&check) {
                    checks.push(check);
                }
            }
        }
        if checks.is_empty() {
            checks.push(format!(
                "No remaining field check separates this find from {}; treat it as dangerous.",
                genus_list(&dangerous)
            ));
        }
        return EdibilityAssessment::Withheld {
            reason: WithholdReason::DangerousGenusActive,
            missing_checks: checks,
        };
    }

    if !top.confidence.supports_foraging_advice() {
        let checks: Vec<String> = top
            .missing_fields
            .iter()
            .take(3)
            .map(|f| check_phrase(*f))
            .collect();
        return EdibilityAssessment::Withheld {
            reason: WithholdReason::ConfidenceBelowThreshold,
            missing_checks: checks,
        };
    }

    // The profile table is validated complete; the degrade arm withholds
    // rather than panics if that ever breaks.
    match profile_for(top.genus) {
        Some(profile) => EdibilityAssessment::Granted {
            genus: top.genus,
            edibility: profile.edibility,
            summary: profile.summary.clone(),
            caveats: profile.caveats.clone(),
        },
        None => EdibilityAssessment::Withheld {
            reason: WithholdReason::ConfidenceBelowThreshold,
            missing_checks: vec![format!("No reference profile covers {}.", top.genus)],
        },
    }
}

/// Imperative phrasing for a missing check.
fn check_phrase(field: ObservationField) -> String {
    match field {
        ObservationField::VolvaPresent => {
            "Dig out the stem base and check for a volval sac".to_string()
        }
        ObservationField::RingPresent => "Check the stem for a ring".to_string(),
        ObservationField::GillColor => "Read the gill colour in daylight".to_string(),
        ObservationField::SporePrintColor => "Take an overnight spore print".to_string(),
        ObservationField::CapDiameterCm => "Measure the open cap diameter".to_string(),
        ObservationField::GillType => "Confirm what the cap carries underneath".to_string(),
        ObservationField::Substrate => "Establish what it is growing from".to_string(),
        ObservationField::BruisingColor => "Cut the flesh and watch for staining".to_string(),
        ObservationField::Smell => "Smell the cut flesh".to_string(),
        ObservationField::FleshTexture => "Snap a piece of cap flesh".to_string(),
        ObservationField::MilkPresent => "Nick the gills and watch for latex".to_string(),
        ObservationField::Habitat => "Note the habitat it grew in".to_string(),
        other => format!("Record the {}", other.as_str().replace('_', " ")),
    }
}

fn genus_list(genera: &[Genus]) -> String {
    genera
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join(" and ")
}
