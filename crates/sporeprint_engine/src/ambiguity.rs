//! Contextual ambiguity checks.
//!
//! Some observation combinations look decisive but are not: soil over a
//! buried log, grassland inside the root run of a tree, ridges written down
//! as gills. Each check fires only when it concerns a genus still in play
//! and emits an advisory flag carrying a clarifying question. Nothing here
//! changes a score.

use tracing::debug;

use sporeprint_common::{AmbiguityFlag, Genus, Observation, ObservationField, KEY_MEASUREMENTS};

/// Genera that fruit from wood yet pass for terrestrial finds.
const WOOD_DECAY: &[Genus] = &[
    Genus::Armillaria,
    Genus::Galerina,
    Genus::Laetiporus,
    Genus::Omphalotus,
    Genus::Pleurotus,
];

/// Mycorrhizal genera that follow their partner trees out into grass.
const TREE_PARTNERS: &[Genus] = &[
    Genus::Amanita,
    Genus::Boletus,
    Genus::Cantharellus,
    Genus::Cortinarius,
    Genus::Hydnum,
    Genus::Lactarius,
    Genus::Russula,
];

/// Genera whose undersides get ridges and gills mixed up.
const RIDGE_CONFUSABLE: &[Genus] = &[Genus::Cantharellus, Genus::Omphalotus];

/// Run every contextual check against the observation and the genera still
/// in play. Flags come back in check order; each names the fields involved,
/// a clarifying question and the active genera it concerns.
pub fn detect_ambiguities(observation: &Observation, active: &[Genus]) -> Vec<AmbiguityFlag> {
    let mut flags: Vec<AmbiguityFlag> = Vec::new();

    // Soil in woodland can be wood underneath.
    if text_is(&observation.substrate, "soil")
        && text_one_of(&observation.habitat, &["woodland", "parkland"])
    {
        let concerned = intersect(active, WOOD_DECAY);
        if !concerned.is_empty() {
            flags.push(AmbiguityFlag {
                fields: vec![ObservationField::Substrate, ObservationField::Habitat],
                question: "Probe under the fruitbody: does it rise from buried wood or roots \
                           rather than open soil?"
                    .to_string(),
                rationale: "Wood-decay fungi often look terrestrial when their log or root lies \
                            just under the litter."
                    .to_string(),
                genera: concerned,
            });
        }
    }

    // Grassland with trees recorded is not open grassland.
    if text_is(&observation.habitat, "grassland") && has_trees(observation) {
        let concerned = intersect(active, TREE_PARTNERS);
        if !concerned.is_empty() {
            flags.push(AmbiguityFlag {
                fields: vec![ObservationField::Habitat, ObservationField::NearbyTrees],
                question: "Are the fruitbodies within ten metres or so of the recorded trees?"
                    .to_string(),
                rationale: "Mycorrhizal genera follow their partner trees well out into grass; \
                            the habitat label alone cannot exclude them here."
                    .to_string(),
                genera: concerned,
            });
        }
    }

    // Ridges get recorded as gills and gills as ridges.
    if text_is(&observation.gill_type, "ridges") {
        let concerned = intersect(active, RIDGE_CONFUSABLE);
        if !concerned.is_empty() {
            flags.push(AmbiguityFlag {
                fields: vec![ObservationField::GillType],
                question: "Check the underside again: do the ridges fork, run down the stem and \
                           resist flaking off, unlike true gills?"
                    .to_string(),
                rationale: "Blunt false ridges against sharp true blades is what separates the \
                            chanterelle from the jack-o'-lantern."
                    .to_string(),
                genera: concerned,
            });
        }
    }

    // White gills against pale pink needs a second look when both grassland
    // agarics are live.
    if text_is(&observation.gill_color, "white")
        && active.contains(&Genus::Agaricus)
        && active.contains(&Genus::Amanita)
    {
        flags.push(AmbiguityFlag {
            fields: vec![ObservationField::GillColor],
            question: "In daylight, are the gills pure white or is there the faintest pink flush?"
                .to_string(),
            rationale: "Young field mushrooms show pale pink where amanitas stay pure white; this \
                        one shade separates dinner from disaster."
                .to_string(),
            genera: intersect(active, &[Genus::Agaricus, Genus::Amanita]),
        });
    }

    // A risky genus in play without its key measurement.
    for measurement in KEY_MEASUREMENTS {
        if observation.has(measurement.field) {
            continue;
        }
        let concerned = intersect(active, measurement.genera);
        if concerned.is_empty() {
            continue;
        }
        flags.push(AmbiguityFlag {
            fields: vec![measurement.field],
            question: measurement.ask.to_string(),
            rationale: measurement.why.to_string(),
            genera: concerned,
        });
    }

    if !flags.is_empty() {
        debug!(count = flags.len(), "raised ambiguity flags");
    }
    flags
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

fn has_trees(observation: &Observation) -> bool {
    observation
        .nearby_trees
        .as_ref()
        .is_some_and(|trees| !trees.is_empty())
}

/// Active genera, in their incoming order, restricted to `of`.
fn intersect(active: &[Genus], of: &[Genus]) -> Vec<Genus> {
    active.iter().copied().filter(|g| of.contains(g)).collect()
}
