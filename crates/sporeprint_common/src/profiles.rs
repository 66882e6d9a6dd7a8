//! Per-genus reference profiles: edibility class, print colour, notable
//! species and field notes.
//!
//! Edibility is a genus-level generalisation and is always delivered behind
//! the confidence gate with species-level caveats attached. Nothing here is
//! a licence to eat anything.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::genus::Genus;

/// Broad edibility of a genus, worst plausible confusion included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdibilityClass {
    ChoiceEdible,
    Edible,
    EdibleWithCaution,
    Inedible,
    Toxic,
    Deadly,
}

impl EdibilityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdibilityClass::ChoiceEdible => "choice_edible",
            EdibilityClass::Edible => "edible",
            EdibilityClass::EdibleWithCaution => "edible_with_caution",
            EdibilityClass::Inedible => "inedible",
            EdibilityClass::Toxic => "toxic",
            EdibilityClass::Deadly => "deadly",
        }
    }

    /// Whether any species in the class is worth carrying home at all.
    pub fn is_edible(&self) -> bool {
        matches!(
            self,
            EdibilityClass::ChoiceEdible
                | EdibilityClass::Edible
                | EdibilityClass::EdibleWithCaution
        )
    }
}

impl std::fmt::Display for EdibilityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference profile for one genus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenusProfile {
    pub genus: Genus,
    pub edibility: EdibilityClass,
    /// One-paragraph field picture of the genus.
    pub summary: String,
    /// Expected spore print colour.
    pub spore_print_color: String,
    /// Species worth knowing by name, the good and the bad both.
    pub notable_species: Vec<String>,
    /// Species-level caveats that survive a correct genus call.
    pub caveats: Vec<String>,
}

impl GenusProfile {
    fn new(genus: Genus, edibility: EdibilityClass, print: &str, summary: &str) -> GenusProfile {
        GenusProfile {
            genus,
            edibility,
            summary: summary.to_string(),
            spore_print_color: print.to_string(),
            notable_species: Vec::new(),
            caveats: Vec::new(),
        }
    }

    fn with_species(mut self, species: &str) -> GenusProfile {
        self.notable_species.push(species.to_string());
        self
    }

    fn with_caveat(mut self, caveat: &str) -> GenusProfile {
        self.caveats.push(caveat.to_string());
        self
    }
}

static PROFILES: Lazy<Vec<GenusProfile>> = Lazy::new(|| {
    use EdibilityClass::*;

    vec![
        GenusProfile::new(
            Genus::Agaricus, EdibleWithCaution, "chocolate brown",
            "The true mushrooms of shops and fields: chocolate-printed agarics of \
             open grassy ground with free gills that turn from pink to dark brown.",
        )
        .with_species("Agaricus campestris")
        .with_species("Agaricus arvensis")
        .with_species("Agaricus xanthodermus")
        .with_caveat("The yellow stainer is common, smells of ink and upsets most people who eat it.")
        .with_caveat("Every white grassland agaric must be checked against young amanitas."),
        GenusProfile::new(
            Genus::Amanita, Deadly, "white",
            "White-spored woodland agarics grown from a universal veil: volva at \
             the base, usually a ring, often veil patches on the cap. The genus \
             holds the death cap and destroying angel.",
        )
        .with_species("Amanita phalloides")
        .with_species("Amanita virosa")
        .with_species("Amanita muscaria")
        .with_caveat("No amanita belongs in a beginner's basket, whatever the species."),
        GenusProfile::new(
            Genus::Armillaria, EdibleWithCaution, "white",
            "Honey fungus: clustered, white-printed caps erupting from trunks, \
             stumps and buried roots, spreading by black bootlace rhizomorphs.",
        )
        .with_species("Armillaria mellea")
        .with_species("Armillaria ostoyae")
        .with_caveat("Must be cooked thoroughly; upsets some people even then.")
        .with_caveat("Share a log with deadly funeral bells; a spore print is not optional."),
        GenusProfile::new(
            Genus::Boletus, ChoiceEdible, "olive brown",
            "Stout mycorrhizal fungi with a sponge of pores instead of gills and \
             an olive-brown print; the cep is the type.",
        )
        .with_species("Boletus edulis")
        .with_species("Boletus reticulatus")
        .with_caveat("Red-pored and strongly bluing species are best left in the ground."),
        GenusProfile::new(
            Genus::Cantharellus, ChoiceEdible, "pale yellow",
            "Egg-yellow funnels with blunt forking ridges running down the stem, \
             a faint apricot scent, strictly on woodland soil.",
        )
        .with_species("Cantharellus cibarius")
        .with_species("Cantharellus pallens")
        .with_caveat("Check for true ridges: sharp gills mean the jack-o'-lantern or false chanterelle."),
        GenusProfile::new(
            Genus::Coprinus, Edible, "black",
            "Shaggy ink caps: tall white woolly caps on disturbed ground that \
             dissolve from the rim into black ink within a day of picking.",
        )
        .with_species("Coprinus comatus")
        .with_species("Coprinopsis atramentaria")
        .with_caveat("Only young specimens with white gills are worth the pan, and they will not keep.")
        .with_caveat("The related common ink cap reacts badly with alcohol; know which you hold."),
        GenusProfile::new(
            Genus::Cortinarius, Deadly, "rusty brown",
            "Webcaps: a vast rusty-printed genus, the cobweb cortina its badge. \
             The fool's webcap destroys kidneys with a delay of days to weeks.",
        )
        .with_species("Cortinarius rubellus")
        .with_species("Cortinarius orellanus")
        .with_caveat("Symptoms can arrive two weeks after the meal, long past a useful diagnosis."),
        GenusProfile::new(
            Genus::Galerina, Deadly, "rusty brown",
            "Funeral bells: small tawny rusty-printed caps on rotten wood carrying \
             the same amatoxins as the death cap.",
        )
        .with_species("Galerina marginata")
        .with_caveat("Grows beside and among honey fungus on the same logs."),
        GenusProfile::new(
            Genus::Hydnum, ChoiceEdible, "white",
            "Hedgehog fungi: cream to apricot caps with soft spines underneath \
             instead of gills; no dangerous lookalike carries spines.",
        )
        .with_species("Hydnum repandum")
        .with_species("Hydnum rufescens")
        .with_caveat("Older caps turn bitter; take young firm ones."),
        GenusProfile::new(
            Genus::Lactarius, EdibleWithCaution, "cream",
            "Milkcaps: brittle-fleshed Russulaceae that weep latex from cut \
             gills; latex colour and its changes separate the species.",
        )
        .with_species("Lactarius deliciosus")
        .with_species("Lactarius torminosus")
        .with_species("Lactarius turpis")
        .with_caveat("The saffron milkcaps are excellent; most white-milked species are acrid or worse."),
        GenusProfile::new(
            Genus::Laetiporus, EdibleWithCaution, "white",
            "Chicken of the woods: sulphur-yellow tiered brackets on trunks, soft \
             and moist when young.",
        )
        .with_species("Laetiporus sulphureus")
        .with_caveat("Specimens on yew are contaminated by the host; leave them.")
        .with_caveat("Upsets a fair minority of eaters; try a small cooked portion first."),
        GenusProfile::new(
            Genus::Lepiota, Deadly, "white",
            "Dapperlings: small scaly-capped white-gilled agarics, several of \
             them amatoxic. A parasol in miniature is the warning picture.",
        )
        .with_species("Lepiota brunneoincarnata")
        .with_species("Lepiota cristata")
        .with_caveat("Cap size is the headline check: nothing parasol-like under 10 cm is safe."),
        GenusProfile::new(
            Genus::Lepista, Edible, "pale pink",
            "Blewits: lilac-flushed caps and stems with a pale pink print, \
             fruiting late into the frosts in woods and gardens.",
        )
        .with_species("Lepista nuda")
        .with_species("Lepista saeva")
        .with_caveat("Must be cooked; raw blewits upset the stomach.")
        .with_caveat("Lilac webcaps mimic them; the print settles it."),
        GenusProfile::new(
            Genus::Lycoperdon, EdibleWithCaution, "olive brown",
            "Puffballs: spherical to pear-shaped fruitbodies with no cap, gills \
             or stem, puffing spores through a pore when ripe.",
        )
        .with_species("Lycoperdon perlatum")
        .with_species("Lycoperdon pyriforme")
        .with_caveat("Edible only while pure white right through; the section test is mandatory."),
        GenusProfile::new(
            Genus::Macrolepiota, ChoiceEdible, "white",
            "Parasols: dinner-plate caps on tall snakeskin stems with a movable \
             double ring, standing in open grassland.",
        )
        .with_species("Macrolepiota procera")
        .with_caveat("Size matters: small lookalikes are dapperlings, and they kill."),
        GenusProfile::new(
            Genus::Omphalotus, Toxic, "cream",
            "Jack-o'-lanterns: vivid orange clustered agarics on wood with \
             sharp decurrent gills that glow faintly in the dark.",
        )
        .with_species("Omphalotus olearius")
        .with_species("Omphalotus illudens")
        .with_caveat("Causes severe cramps and vomiting; survivors rarely mistake a chanterelle twice."),
        GenusProfile::new(
            Genus::Pleurotus, ChoiceEdible, "white to lilac grey",
            "Oyster mushrooms: shell-shaped caps shelving in tiers off broadleaf \
             wood, gills running into a short or absent stem.",
        )
        .with_species("Pleurotus ostreatus")
        .with_species("Pleurotus pulmonarius")
        .with_caveat("Nothing dangerous shares the habit in this list; check the wood and the gill run anyway."),
        GenusProfile::new(
            Genus::Russula, EdibleWithCaution, "white to ochre",
            "Brittlegills: bright-capped woodland agarics whose chalk-brittle \
             flesh snaps rather than tears; no ring, no volva, no milk.",
        )
        .with_species("Russula cyanoxantha")
        .with_species("Russula virescens")
        .with_species("Russula emetica")
        .with_caveat("Edibility follows taste: mild species are good, acrid ones are sickeners."),
    ]
});

/// Profile lookup. Every genus in the builtin list has one; validation
/// enforces it.
pub fn profile_for(genus: Genus) -> Option<&'static GenusProfile> {
    PROFILES.iter().find(|p| p.genus == genus)
}

/// All builtin profiles.
pub fn builtin_profiles() -> &'static [GenusProfile] {
    &PROFILES
}
