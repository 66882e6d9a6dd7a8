//! Contextual defaults for unobserved fields.
//!
//! Some absences are informative. Tiered growth happens on wood; dung lies
//! in grazed grass; a shelving wood fungus rarely has a central stem. Each
//! default fills an unobserved field only, is recorded with its own
//! confidence and reason, and chains: an inferred substrate can feed the
//! stem inference in the same pass. Explicit answers are never overwritten.

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use sporeprint_common::{Inference, InferenceConfidence, Observation, ObservationField};

/// Fill contextual defaults into a copy of the observation.
///
/// Returns the enriched copy together with every default that was applied,
/// in application order. The season month comes from `now`, and only when
/// at least one other field was recorded; an empty observation stays empty.
pub fn infer(observation: &Observation, now: DateTime<Utc>) -> (Observation, Vec<Inference>) {
    let mut enriched = observation.clone();
    let mut applied: Vec<Inference> = Vec::new();

    let tiered = text_is(&enriched.growth_pattern, "tiered");

    if enriched.substrate.is_none() && tiered {
        enriched.substrate = Some("wood".to_string());
        applied.push(Inference {
            field: ObservationField::Substrate,
            value: "wood".to_string(),
            confidence: InferenceConfidence::High,
            reason: "tiered growth is a wood-decay habit; caps shelving in tiers stand on wood"
                .to_string(),
        });
    }

    if enriched.substrate.is_none()
        && text_one_of(&enriched.habitat, &["grassland", "parkland", "garden"])
    {
        enriched.substrate = Some("soil".to_string());
        applied.push(Inference {
            field: ObservationField::Substrate,
            value: "soil".to_string(),
            confidence: InferenceConfidence::Medium,
            reason: "open grassy ground without a recorded substrate usually means soil"
                .to_string(),
        });
    }

    if enriched.habitat.is_none() && text_is(&enriched.substrate, "dung") {
        enriched.habitat = Some("grassland".to_string());
        applied.push(Inference {
            field: ObservationField::Habitat,
            value: "grassland".to_string(),
            confidence: InferenceConfidence::Medium,
            reason: "dung lies where grazing animals graze".to_string(),
        });
    }

    // Note the chain: the substrate checked here may itself have been
    // inferred from the growth pattern a few lines up.
    if enriched.stem_present.is_none() && tiered && text_is(&enriched.substrate, "wood") {
        enriched.stem_present = Some(false);
        applied.push(Inference {
            field: ObservationField::StemPresent,
            value: "false".to_string(),
            confidence: InferenceConfidence::Medium,
            reason: "shelving caps on wood are usually stemless or nearly so".to_string(),
        });
    }

    if enriched.season_month.is_none() && !observation.is_empty() {
        let month = now.month();
        enriched.season_month = Some(month);
        applied.push(Inference {
            field: ObservationField::SeasonMonth,
            value: month.to_string(),
            confidence: InferenceConfidence::Medium,
            reason: "taken from the date of the report".to_string(),
        });
    }

    if !applied.is_empty() {
        debug!(count = applied.len(), "filled contextual defaults");
    }
    (enriched, applied)
}

fn text_is(field: &Option<String>, want: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(want))
}

fn text_one_of(field: &Option<String>, options: &[&str]) -> bool {
    field
        .as_deref()
        .is_some_and(|v| options.iter().any(|o| v.trim().eq_ignore_ascii_case(o)))
}
