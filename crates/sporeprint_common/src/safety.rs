//! Static safety tables: dangerous genera, lookalike pairs and the
//! per-genus characters that settle them.
//!
//! These are read-only module-level data. The annotator consults them on
//! every call and warns whenever a listed genus is in play, regardless of
//! how confident the identification is.

use serde::{Deserialize, Serialize};

use crate::genus::Genus;
use crate::observation::ObservationField;

/// How bad a mistake with this genus gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToxicityClass {
    /// Species in the genus kill healthy adults.
    Deadly,
    /// Species cause severe poisoning, usually survived.
    SeriouslyToxic,
}

impl ToxicityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToxicityClass::Deadly => "deadly",
            ToxicityClass::SeriouslyToxic => "seriously_toxic",
        }
    }
}

/// One entry in the dangerous-genus table.
#[derive(Debug, Clone, Copy)]
pub struct DangerousGenus {
    pub genus: Genus,
    pub toxicity: ToxicityClass,
    /// Principal toxin family.
    pub agent: &'static str,
    pub warning: &'static str,
}

pub static DANGEROUS_GENERA: &[DangerousGenus] = &[
    DangerousGenus {
        genus: Genus::Amanita,
        toxicity: ToxicityClass::Deadly,
        agent: "amatoxins",
        warning: "This genus contains the death cap and destroying angel. A single cap \
                  can be fatal and symptoms arrive only after the toxin has done its work.",
    },
    DangerousGenus {
        genus: Genus::Galerina,
        toxicity: ToxicityClass::Deadly,
        agent: "amatoxins",
        warning: "Funeral bells carry death-cap amatoxins and fruit on the same logs as \
                  edible honey fungus.",
    },
    DangerousGenus {
        genus: Genus::Cortinarius,
        toxicity: ToxicityClass::Deadly,
        agent: "orellanine",
        warning: "Fool's webcap destroys the kidneys with symptoms delayed up to two \
                  weeks. No field test redeems a webcap.",
    },
    DangerousGenus {
        genus: Genus::Lepiota,
        toxicity: ToxicityClass::Deadly,
        agent: "amatoxins",
        warning: "Several dapperlings are amatoxic. Anything parasol-like with a cap \
                  under 10 cm must be treated as one of them.",
    },
    DangerousGenus {
        genus: Genus::Omphalotus,
        toxicity: ToxicityClass::SeriouslyToxic,
        agent: "illudins",
        warning: "Jack-o'-lanterns cause violent cramps and vomiting. They are the \
                  classic price of a careless chanterelle basket.",
    },
];

/// One known dangerous-lookalike pairing.
#[derive(Debug, Clone, Copy)]
pub struct LookalikePair {
    /// The genus foragers want it to be.
    pub sought: Genus,
    /// The genus it turns out to be on a bad day.
    pub dangerous: Genus,
    /// Concrete characters that separate the two in the field.
    pub distinguishing_features: &'static [&'static str],
}

pub static LOOKALIKE_PAIRS: &[LookalikePair] = &[
    LookalikePair {
        sought: Genus::Agaricus,
        dangerous: Genus::Amanita,
        distinguishing_features: &[
            "spore print: chocolate brown for Agaricus, pure white for Amanita",
            "mature gills: pink to brown for Agaricus, always white for Amanita",
            "stem base: dig it out; any sac or cup means Amanita",
        ],
    },
    LookalikePair {
        sought: Genus::Macrolepiota,
        dangerous: Genus::Lepiota,
        distinguishing_features: &[
            "open cap diameter: parasols exceed 10 cm, dapperlings stay under 6 cm",
            "ring: thick and freely movable on a parasol, small and fixed on a dapperling",
            "stem: snakeskin banding marks the true parasol",
        ],
    },
    LookalikePair {
        sought: Genus::Armillaria,
        dangerous: Genus::Galerina,
        distinguishing_features: &[
            "spore print: white for honey fungus, rusty brown for funeral bells",
            "stature: honey fungus is larger with a scaly cap centre",
            "both cluster on wood, so print every gathering",
        ],
    },
    LookalikePair {
        sought: Genus::Lepista,
        dangerous: Genus::Cortinarius,
        distinguishing_features: &[
            "spore print: pale pink for blewits, rusty brown for webcaps",
            "young veil: webcaps show a cobweb cortina, blewits show none",
            "smell: blewits are sweetly perfumed",
        ],
    },
    LookalikePair {
        sought: Genus::Lycoperdon,
        dangerous: Genus::Amanita,
        distinguishing_features: &[
            "section test: a true puffball is featureless white right through",
            "any cap, gill or stem outline inside is an amanita egg",
        ],
    },
    LookalikePair {
        sought: Genus::Cantharellus,
        dangerous: Genus::Omphalotus,
        distinguishing_features: &[
            "underside: blunt forking ridges against sharp crowded true gills",
            "substrate: chanterelles fruit from soil, jack-o'-lanterns from wood",
            "growth: chanterelles scatter, jack-o'-lanterns pack in dense clusters",
        ],
    },
];

/// Characters that settle identity for or against a risky genus. Questions
/// touching these fields are ranked safety-relevant.
pub static SAFETY_FEATURES: &[(Genus, &[ObservationField])] = &[
    (Genus::Amanita, &[
        ObservationField::VolvaPresent,
        ObservationField::RingPresent,
        ObservationField::GillColor,
    ]),
    (Genus::Galerina, &[
        ObservationField::SporePrintColor,
        ObservationField::RingPresent,
    ]),
    (Genus::Cortinarius, &[ObservationField::SporePrintColor]),
    (Genus::Lepiota, &[ObservationField::CapDiameterCm]),
    (Genus::Omphalotus, &[
        ObservationField::GillType,
        ObservationField::Substrate,
    ]),
    (Genus::Armillaria, &[ObservationField::SporePrintColor]),
    (Genus::Lepista, &[ObservationField::SporePrintColor]),
    (Genus::Macrolepiota, &[
        ObservationField::CapDiameterCm,
        ObservationField::RingPresent,
    ]),
    (Genus::Agaricus, &[
        ObservationField::GillColor,
        ObservationField::BruisingColor,
        ObservationField::Smell,
        ObservationField::SporePrintColor,
    ]),
];

/// A measurement whose absence leaves a known dangerous confusion open.
#[derive(Debug, Clone, Copy)]
pub struct KeyMeasurement {
    pub field: ObservationField,
    /// Genera the measurement matters for.
    pub genera: &'static [Genus],
    /// How to take it, phrased as an instruction.
    pub ask: &'static str,
    /// What hangs on it.
    pub why: &'static str,
}

pub static KEY_MEASUREMENTS: &[KeyMeasurement] = &[
    KeyMeasurement {
        field: ObservationField::CapDiameterCm,
        genera: &[Genus::Lepiota, Genus::Macrolepiota],
        ask: "Measure the widest open cap in centimetres before going any further.",
        why: "Cap size is the first split between edible parasols and deadly dapperlings.",
    },
    KeyMeasurement {
        field: ObservationField::SporePrintColor,
        genera: &[
            Genus::Amanita,
            Genus::Armillaria,
            Genus::Cortinarius,
            Genus::Galerina,
            Genus::Lepista,
        ],
        ask: "Take an overnight spore print, half on white paper and half on dark.",
        why: "Print colour settles the wood-cluster and blewit confusions that field \
              characters leave open.",
    },
];

/// Dangerous-table lookup.
pub fn dangerous_entry(genus: Genus) -> Option<&'static DangerousGenus> {
    DANGEROUS_GENERA.iter().find(|d| d.genus == genus)
}

/// Whether the genus sits in the dangerous table at all.
pub fn is_dangerous(genus: Genus) -> bool {
    dangerous_entry(genus).is_some()
}

/// Safety characters for a genus; empty for genera with no entry.
pub fn safety_fields_for(genus: Genus) -> &'static [ObservationField] {
    SAFETY_FEATURES
        .iter()
        .find(|(g, _)| *g == genus)
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

/// Whether asking about `field` bears on the safety of `genus`.
pub fn is_safety_feature(genus: Genus, field: ObservationField) -> bool {
    safety_fields_for(genus).contains(&field)
}
