//! The fixed genus list the engine scores against.
//!
//! Candidates are genera, not species: field observation rarely supports a
//! safe species call, and every safety table in this crate is keyed at genus
//! level. The list is closed by design - rules, profiles and safety tables
//! are validated against it.

use serde::{Deserialize, Serialize};

/// A taxonomic genus under scoring consideration.
///
/// Declaration order is the stable display order used for deterministic
/// tie-breaks in candidate sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genus {
    Agaricus,
    Amanita,
    Armillaria,
    Boletus,
    Cantharellus,
    Coprinus,
    Cortinarius,
    Galerina,
    Hydnum,
    Lactarius,
    Laetiporus,
    Lepiota,
    Lepista,
    Lycoperdon,
    Macrolepiota,
    Omphalotus,
    Pleurotus,
    Russula,
}

/// Taxonomic family, used to scope heuristics that apply across genera
/// (e.g. the Russulaceae taste test covers both Russula and Lactarius).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Agaricaceae,
    Amanitaceae,
    Boletaceae,
    Cantharellaceae,
    Cortinariaceae,
    Fomitopsidaceae,
    Hydnaceae,
    Hymenogastraceae,
    Omphalotaceae,
    Physalacriaceae,
    Pleurotaceae,
    Russulaceae,
    Tricholomataceae,
}

impl Genus {
    /// Every genus in display order.
    pub const ALL: [Genus; 18] = [
        Genus::Agaricus,
        Genus::Amanita,
        Genus::Armillaria,
        Genus::Boletus,
        Genus::Cantharellus,
        Genus::Coprinus,
        Genus::Cortinarius,
        Genus::Galerina,
        Genus::Hydnum,
        Genus::Lactarius,
        Genus::Laetiporus,
        Genus::Lepiota,
        Genus::Lepista,
        Genus::Lycoperdon,
        Genus::Macrolepiota,
        Genus::Omphalotus,
        Genus::Pleurotus,
        Genus::Russula,
    ];

    /// Latin name as written (capitalised, the form shown to users).
    pub fn name(&self) -> &'static str {
        match self {
            Genus::Agaricus => "Agaricus",
            Genus::Amanita => "Amanita",
            Genus::Armillaria => "Armillaria",
            Genus::Boletus => "Boletus",
            Genus::Cantharellus => "Cantharellus",
            Genus::Coprinus => "Coprinus",
            Genus::Cortinarius => "Cortinarius",
            Genus::Galerina => "Galerina",
            Genus::Hydnum => "Hydnum",
            Genus::Lactarius => "Lactarius",
            Genus::Laetiporus => "Laetiporus",
            Genus::Lepiota => "Lepiota",
            Genus::Lepista => "Lepista",
            Genus::Lycoperdon => "Lycoperdon",
            Genus::Macrolepiota => "Macrolepiota",
            Genus::Omphalotus => "Omphalotus",
            Genus::Pleurotus => "Pleurotus",
            Genus::Russula => "Russula",
        }
    }

    /// Common field name for the genus group.
    pub fn common_name(&self) -> &'static str {
        match self {
            Genus::Agaricus => "field mushrooms",
            Genus::Amanita => "amanitas",
            Genus::Armillaria => "honey fungus",
            Genus::Boletus => "boletes",
            Genus::Cantharellus => "chanterelles",
            Genus::Coprinus => "ink caps",
            Genus::Cortinarius => "webcaps",
            Genus::Galerina => "funeral bells",
            Genus::Hydnum => "hedgehog fungi",
            Genus::Lactarius => "milkcaps",
            Genus::Laetiporus => "chicken of the woods",
            Genus::Lepiota => "dapperlings",
            Genus::Lepista => "blewits",
            Genus::Lycoperdon => "puffballs",
            Genus::Macrolepiota => "parasols",
            Genus::Omphalotus => "jack-o'-lantern mushrooms",
            Genus::Pleurotus => "oyster mushrooms",
            Genus::Russula => "brittlegills",
        }
    }

    /// Taxonomic family, for family-scoped heuristics.
    pub fn family(&self) -> Family {
        match self {
            Genus::Agaricus => Family::Agaricaceae,
            Genus::Amanita => Family::Amanitaceae,
            Genus::Armillaria => Family::Physalacriaceae,
            Genus::Boletus => Family::Boletaceae,
            Genus::Cantharellus => Family::Cantharellaceae,
            // Coprinus comatus sits in the Agaricaceae since the genus split.
            Genus::Coprinus => Family::Agaricaceae,
            Genus::Cortinarius => Family::Cortinariaceae,
            Genus::Galerina => Family::Hymenogastraceae,
            Genus::Hydnum => Family::Hydnaceae,
            Genus::Lactarius => Family::Russulaceae,
            Genus::Laetiporus => Family::Fomitopsidaceae,
            Genus::Lepiota => Family::Agaricaceae,
            Genus::Lepista => Family::Tricholomataceae,
            Genus::Lycoperdon => Family::Agaricaceae,
            Genus::Macrolepiota => Family::Agaricaceae,
            Genus::Omphalotus => Family::Omphalotaceae,
            Genus::Pleurotus => Family::Pleurotaceae,
            Genus::Russula => Family::Russulaceae,
        }
    }

    /// Case-insensitive lookup by Latin name. Used by the notes preprocessor
    /// when matching genus exclusions in free text.
    pub fn from_name(name: &str) -> Option<Genus> {
        Genus::ALL
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(name.trim()))
    }

    /// All members of a family, in display order.
    pub fn in_family(family: Family) -> Vec<Genus> {
        Genus::ALL
            .iter()
            .copied()
            .filter(|g| g.family() == family)
            .collect()
    }
}

impl std::fmt::Display for Genus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
