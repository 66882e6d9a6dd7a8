//! Stem characters: presence, height, colour, ring, volva and base shape.
//!
//! Ring and volva are the veil remnants that separate the deadly amanitas
//! from everything they get mistaken for, so the exclusions here are
//! deliberately blunt: in this genus list a volval sac means Amanita, full
//! stop.

use super::{EvidenceTier::*, FeatureRule, RuleTest};
use crate::genus::Genus::*;
use crate::observation::ObservationField::*;

pub(super) fn rules() -> Vec<FeatureRule> {
    vec![
        // --- stem presence ---
        FeatureRule::supports(
            "pleurotus-stemless", Pleurotus, StemPresent,
            RuleTest::flag(false), Strong,
            "oysters grow straight off the wood, stemless or nearly so",
        ),
        FeatureRule::supports(
            "laetiporus-stemless", Laetiporus, StemPresent,
            RuleTest::flag(false), Moderate,
            "chicken of the woods brackets have no stem",
        ),
        FeatureRule::contradicts(
            "laetiporus-stemmed", Laetiporus, StemPresent,
            RuleTest::flag(true), Moderate,
            "a distinct central stem sits badly with a bracket fungus",
        ),
        FeatureRule::supports(
            "lycoperdon-stemless", Lycoperdon, StemPresent,
            RuleTest::flag(false), Moderate,
            "puffballs have at most a sterile base, never a true stem",
        ),
        // --- stem height ---
        FeatureRule::supports(
            "macrolepiota-tall-stem", Macrolepiota, StemHeightCm,
            RuleTest::between(15.0, 40.0), Strong,
            "parasols stand on tall slender stems, 15 cm and up",
        ),
        FeatureRule::supports(
            "coprinus-tall-stem", Coprinus, StemHeightCm,
            RuleTest::between(10.0, 35.0), Weak,
            "shaggy ink caps run tall for their cap size",
        ),
        FeatureRule::supports(
            "galerina-short-stem", Galerina, StemHeightCm,
            RuleTest::between(2.0, 8.0), Weak,
            "funeral bell stems are short and slender",
        ),
        // --- stem colour ---
        FeatureRule::supports(
            "lepista-lilac-stem", Lepista, StemColor,
            RuleTest::one_of(&["lilac", "violet", "purple"]),
            Strong,
            "the wood blewit's stem shares the cap's lilac flush",
        ),
        FeatureRule::supports(
            "amanita-white-stem", Amanita, StemColor,
            RuleTest::one_of(&["white", "cream"]),
            Weak,
            "amanita stems are white to cream",
        ),
        FeatureRule::supports(
            "russula-white-stem", Russula, StemColor,
            RuleTest::one_of(&["white", "cream"]),
            Weak,
            "brittlegill stems are typically plain white",
        ),
        // --- ring ---
        FeatureRule::supports(
            "amanita-ring", Amanita, RingPresent,
            RuleTest::flag(true), Strong,
            "a skirt-like ring on the upper stem is a partial veil remnant",
        ),
        FeatureRule::supports(
            "agaricus-ring", Agaricus, RingPresent,
            RuleTest::flag(true), Moderate,
            "true mushrooms keep a membranous ring",
        ),
        FeatureRule::supports(
            "macrolepiota-ring", Macrolepiota, RingPresent,
            RuleTest::flag(true), Moderate,
            "parasols carry a thick double-edged ring",
        ),
        FeatureRule::supports(
            "armillaria-ring", Armillaria, RingPresent,
            RuleTest::flag(true), Moderate,
            "honey fungus usually shows a whitish-yellow ring",
        ),
        FeatureRule::supports(
            "lepiota-ring", Lepiota, RingPresent,
            RuleTest::flag(true), Weak,
            "dapperlings keep a small, often fleeting ring",
        ),
        FeatureRule::supports(
            "galerina-ring", Galerina, RingPresent,
            RuleTest::flag(true), Weak,
            "funeral bells show a small fragile ring zone",
        ),
        FeatureRule::supports(
            "coprinus-ring", Coprinus, RingPresent,
            RuleTest::flag(true), Weak,
            "the shaggy ink cap carries a loose movable ring",
        ),
        FeatureRule::contradicts(
            "cortinarius-membranous-ring", Cortinarius, RingPresent,
            RuleTest::flag(true), Moderate,
            "webcaps leave a cobwebby cortina zone, never a true membranous ring",
        ),
        FeatureRule::contradicts(
            "boletus-ring", Boletus, RingPresent,
            RuleTest::flag(true), Moderate,
            "boletes in the strict sense carry no ring",
        ),
        FeatureRule::excludes(
            "russula-ring", Russula, RingPresent,
            RuleTest::flag(true),
            "brittlegills never form a ring",
        ),
        FeatureRule::excludes(
            "lactarius-ring", Lactarius, RingPresent,
            RuleTest::flag(true),
            "milkcaps never form a ring",
        ),
        FeatureRule::excludes(
            "cantharellus-ring", Cantharellus, RingPresent,
            RuleTest::flag(true),
            "chanterelles never form a ring",
        ),
        FeatureRule::excludes(
            "hydnum-ring", Hydnum, RingPresent,
            RuleTest::flag(true),
            "hedgehog fungi never form a ring",
        ),
        FeatureRule::excludes(
            "lepista-ring", Lepista, RingPresent,
            RuleTest::flag(true),
            "blewits never form a ring",
        ),
        FeatureRule::excludes(
            "pleurotus-ring", Pleurotus, RingPresent,
            RuleTest::flag(true),
            "oyster mushrooms never form a ring",
        ),
        FeatureRule::excludes(
            "omphalotus-ring", Omphalotus, RingPresent,
            RuleTest::flag(true),
            "jack-o'-lanterns never form a ring",
        ),
        FeatureRule::excludes(
            "lycoperdon-ring", Lycoperdon, RingPresent,
            RuleTest::flag(true),
            "puffballs have no veil and so no ring",
        ),
        // --- volva ---
        FeatureRule::supports(
            "amanita-volva", Amanita, VolvaPresent,
            RuleTest::flag(true), Definitive,
            "a volval sac or cup at the stem base is the amanita hallmark",
        ),
        FeatureRule::excludes(
            "agaricus-volva", Agaricus, VolvaPresent,
            RuleTest::flag(true),
            "a volva on a supposed true mushroom means an amanita was picked",
        ),
        FeatureRule::excludes(
            "armillaria-volva", Armillaria, VolvaPresent,
            RuleTest::flag(true),
            "honey fungus never grows from a volva",
        ),
        FeatureRule::excludes(
            "boletus-volva", Boletus, VolvaPresent,
            RuleTest::flag(true),
            "boletes never grow from a volva",
        ),
        FeatureRule::excludes(
            "cantharellus-volva", Cantharellus, VolvaPresent,
            RuleTest::flag(true),
            "chanterelles never grow from a volva",
        ),
        FeatureRule::excludes(
            "coprinus-volva", Coprinus, VolvaPresent,
            RuleTest::flag(true),
            "ink caps never grow from a volva",
        ),
        FeatureRule::excludes(
            "cortinarius-volva", Cortinarius, VolvaPresent,
            RuleTest::flag(true),
            "webcaps never grow from a volva",
        ),
        FeatureRule::excludes(
            "galerina-volva", Galerina, VolvaPresent,
            RuleTest::flag(true),
            "funeral bells never grow from a volva",
        ),
        FeatureRule::excludes(
            "hydnum-volva", Hydnum, VolvaPresent,
            RuleTest::flag(true),
            "hedgehog fungi never grow from a volva",
        ),
        FeatureRule::excludes(
            "lactarius-volva", Lactarius, VolvaPresent,
            RuleTest::flag(true),
            "milkcaps never grow from a volva",
        ),
        FeatureRule::excludes(
            "laetiporus-volva", Laetiporus, VolvaPresent,
            RuleTest::flag(true),
            "brackets never grow from a volva",
        ),
        FeatureRule::excludes(
            "lepiota-volva", Lepiota, VolvaPresent,
            RuleTest::flag(true),
            "dapperlings never grow from a volva",
        ),
        FeatureRule::excludes(
            "lepista-volva", Lepista, VolvaPresent,
            RuleTest::flag(true),
            "blewits never grow from a volva",
        ),
        FeatureRule::excludes(
            "lycoperdon-volva", Lycoperdon, VolvaPresent,
            RuleTest::flag(true),
            "a cup round the base means a sectioned amanita egg, not a puffball",
        ),
        FeatureRule::excludes(
            "macrolepiota-volva", Macrolepiota, VolvaPresent,
            RuleTest::flag(true),
            "parasols bulge at the base but never form a sac",
        ),
        FeatureRule::excludes(
            "omphalotus-volva", Omphalotus, VolvaPresent,
            RuleTest::flag(true),
            "jack-o'-lanterns never grow from a volva",
        ),
        FeatureRule::excludes(
            "pleurotus-volva", Pleurotus, VolvaPresent,
            RuleTest::flag(true),
            "oyster mushrooms never grow from a volva",
        ),
        FeatureRule::excludes(
            "russula-volva", Russula, VolvaPresent,
            RuleTest::flag(true),
            "brittlegills never grow from a volva",
        ),
        // --- stem base ---
        FeatureRule::supports(
            "amanita-swollen-base", Amanita, StemBase,
            RuleTest::one_of(&["bulbous", "swollen", "sack-like"]),
            Strong,
            "the stem base swells into a bulb or sac below ground",
        ),
        FeatureRule::supports(
            "boletus-stout-base", Boletus, StemBase,
            RuleTest::one_of(&["swollen", "bulbous"]),
            Moderate,
            "boletes stand on stout, often club-shaped stems",
        ),
        FeatureRule::supports(
            "macrolepiota-bulbous-base", Macrolepiota, StemBase,
            RuleTest::equals("bulbous"), Weak,
            "the parasol stem rises from a distinct bulb",
        ),
    ]
}
