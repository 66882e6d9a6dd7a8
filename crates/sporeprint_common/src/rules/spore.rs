//! Spore print colour.
//!
//! An overnight print is the single cheapest lab-grade character a forager
//! can take, and it splits the worst lookalike pairs in this list: white
//! against rusty separates honey fungus from funeral bells, and blewits
//! from webcaps.

use super::{EvidenceTier::*, FeatureRule, RuleTest};
use crate::genus::Genus::*;
use crate::observation::ObservationField::*;

pub(super) fn rules() -> Vec<FeatureRule> {
    vec![
        // --- supporting prints ---
        FeatureRule::supports(
            "amanita-pale-print", Amanita, SporePrintColor,
            RuleTest::one_of(&["white", "cream"]),
            Strong,
            "amanitas print white to cream",
        ),
        FeatureRule::supports(
            "agaricus-chocolate-print", Agaricus, SporePrintColor,
            RuleTest::one_of(&["chocolate-brown", "purple-brown"]),
            Strong,
            "true mushrooms print deep chocolate brown",
        ),
        FeatureRule::supports(
            "boletus-olive-print", Boletus, SporePrintColor,
            RuleTest::one_of(&["olive-brown", "olive"]),
            Strong,
            "boletes print olive brown",
        ),
        FeatureRule::supports(
            "coprinus-black-print", Coprinus, SporePrintColor,
            RuleTest::equals("black"), Strong,
            "ink caps print jet black",
        ),
        FeatureRule::supports(
            "armillaria-white-print", Armillaria, SporePrintColor,
            RuleTest::one_of(&["white", "cream"]),
            Strong,
            "honey fungus prints white, often dusting lower caps in a cluster",
        ),
        FeatureRule::supports(
            "galerina-rusty-print", Galerina, SporePrintColor,
            RuleTest::one_of(&["rusty-brown", "rust"]),
            Strong,
            "funeral bells print rusty brown",
        ),
        FeatureRule::supports(
            "cortinarius-rusty-print", Cortinarius, SporePrintColor,
            RuleTest::one_of(&["rusty-brown", "rust"]),
            Strong,
            "webcaps print rusty brown, the spores dusting the cortina",
        ),
        FeatureRule::supports(
            "lepista-pink-print", Lepista, SporePrintColor,
            RuleTest::one_of(&["pale pink", "pink", "pinkish-buff"]),
            Strong,
            "blewits print pale pink, never rust",
        ),
        FeatureRule::supports(
            "russula-pale-print", Russula, SporePrintColor,
            RuleTest::one_of(&["white", "cream", "ochre", "pale yellow"]),
            Moderate,
            "brittlegills print white through cream to ochre",
        ),
        FeatureRule::supports(
            "lactarius-pale-print", Lactarius, SporePrintColor,
            RuleTest::one_of(&["white", "cream", "pale pink"]),
            Moderate,
            "milkcaps print white to pale pinkish cream",
        ),
        FeatureRule::supports(
            "macrolepiota-pale-print", Macrolepiota, SporePrintColor,
            RuleTest::one_of(&["white", "cream"]),
            Moderate,
            "parasols print white",
        ),
        FeatureRule::supports(
            "lepiota-pale-print", Lepiota, SporePrintColor,
            RuleTest::one_of(&["white", "cream"]),
            Moderate,
            "dapperlings print white",
        ),
        FeatureRule::supports(
            "pleurotus-pale-print", Pleurotus, SporePrintColor,
            RuleTest::one_of(&["white", "cream", "pale lilac"]),
            Moderate,
            "oysters print white to pale lilac-grey",
        ),
        FeatureRule::supports(
            "cantharellus-pale-print", Cantharellus, SporePrintColor,
            RuleTest::one_of(&["yellow", "pale yellow", "cream"]),
            Weak,
            "chanterelles print pale yellow to cream",
        ),
        FeatureRule::supports(
            "omphalotus-cream-print", Omphalotus, SporePrintColor,
            RuleTest::one_of(&["cream", "pale yellow"]),
            Weak,
            "jack-o'-lanterns print cream to pale yellow",
        ),
        FeatureRule::supports(
            "hydnum-white-print", Hydnum, SporePrintColor,
            RuleTest::one_of(&["white", "cream"]),
            Weak,
            "hedgehog fungi print white",
        ),
        // --- print exclusions and contradictions ---
        FeatureRule::excludes(
            "amanita-dark-print", Amanita, SporePrintColor,
            RuleTest::one_of(&[
                "brown", "chocolate-brown", "purple-brown", "rusty-brown", "black",
            ]),
            "amanitas are white-spored; any dark print rules the genus out",
        ),
        FeatureRule::excludes(
            "agaricus-pale-print", Agaricus, SporePrintColor,
            RuleTest::one_of(&["white", "cream"]),
            "a white print from a supposed true mushroom means an amanita was picked",
        ),
        FeatureRule::excludes(
            "armillaria-rusty-print", Armillaria, SporePrintColor,
            RuleTest::one_of(&["rusty-brown", "rust"]),
            "a rusty print on wood-clustered caps points at funeral bells, not honey fungus",
        ),
        FeatureRule::excludes(
            "galerina-pale-print", Galerina, SporePrintColor,
            RuleTest::one_of(&["white", "cream"]),
            "a white print rules out the funeral bell",
        ),
        FeatureRule::excludes(
            "cortinarius-odd-print", Cortinarius, SporePrintColor,
            RuleTest::one_of(&["white", "cream", "pink", "black"]),
            "webcaps only ever print rusty brown",
        ),
        FeatureRule::excludes(
            "lepista-rusty-print", Lepista, SporePrintColor,
            RuleTest::one_of(&["rusty-brown", "rust"]),
            "a rusty print on a lilac cap means a webcap, not a blewit",
        ),
        FeatureRule::contradicts(
            "coprinus-pale-print", Coprinus, SporePrintColor,
            RuleTest::one_of(&["white", "cream", "pink"]),
            Strong,
            "ink caps never print pale",
        ),
        FeatureRule::contradicts(
            "russula-dark-print", Russula, SporePrintColor,
            RuleTest::one_of(&["brown", "chocolate-brown", "black"]),
            Strong,
            "brittlegills never print brown or black",
        ),
        FeatureRule::contradicts(
            "macrolepiota-dark-print", Macrolepiota, SporePrintColor,
            RuleTest::one_of(&["brown", "chocolate-brown", "rusty-brown"]),
            Moderate,
            "parasols print white, not brown",
        ),
    ]
}
