//! Hymenium characters: what the underside of the cap carries.
//!
//! The spore-bearing surface is the first thing worth checking on any
//! agaric-like find, so this is the densest part of the rule base. Most
//! genera also carry an exclusion here: a pore layer on a supposed
//! brittlegill is not weak evidence, it is a different family.

use super::{EvidenceTier::*, FeatureRule, RuleTest};
use crate::genus::Genus::*;
use crate::observation::ObservationField::*;

pub(super) fn rules() -> Vec<FeatureRule> {
    vec![
        // --- spore surface kind, supporting ---
        FeatureRule::supports(
            "boletus-pore-layer", Boletus, GillType,
            RuleTest::equals("pores"), Definitive,
            "a sponge-like pore layer instead of gills defines the boletes",
        ),
        FeatureRule::supports(
            "laetiporus-pore-layer", Laetiporus, GillType,
            RuleTest::equals("pores"), Strong,
            "chicken of the woods carries fine sulphur pores underneath",
        ),
        FeatureRule::supports(
            "cantharellus-false-gills", Cantharellus, GillType,
            RuleTest::equals("ridges"), Definitive,
            "blunt, forking, interveined ridges rather than true gills",
        ),
        FeatureRule::supports(
            "hydnum-spines", Hydnum, GillType,
            RuleTest::equals("teeth"), Definitive,
            "soft spines under the cap define the hedgehog fungus",
        ),
        FeatureRule::supports(
            "lycoperdon-no-hymenium", Lycoperdon, GillType,
            RuleTest::equals("none"), Strong,
            "puffballs show no gills, pores or spines at any stage",
        ),
        FeatureRule::supports(
            "amanita-true-gills", Amanita, GillType,
            RuleTest::equals("gills"), Moderate,
            "amanitas are true gilled agarics",
        ),
        FeatureRule::supports(
            "agaricus-true-gills", Agaricus, GillType,
            RuleTest::equals("gills"), Moderate,
            "true mushrooms are gilled",
        ),
        FeatureRule::supports(
            "russula-true-gills", Russula, GillType,
            RuleTest::equals("gills"), Moderate,
            "brittlegills are gilled",
        ),
        FeatureRule::supports(
            "lactarius-true-gills", Lactarius, GillType,
            RuleTest::equals("gills"), Moderate,
            "milkcaps are gilled",
        ),
        FeatureRule::supports(
            "coprinus-true-gills", Coprinus, GillType,
            RuleTest::equals("gills"), Moderate,
            "ink caps are gilled, the gills dissolving with age",
        ),
        FeatureRule::supports(
            "armillaria-true-gills", Armillaria, GillType,
            RuleTest::equals("gills"), Moderate,
            "honey fungus is gilled",
        ),
        FeatureRule::supports(
            "galerina-true-gills", Galerina, GillType,
            RuleTest::equals("gills"), Moderate,
            "funeral bells are gilled",
        ),
        FeatureRule::supports(
            "cortinarius-true-gills", Cortinarius, GillType,
            RuleTest::equals("gills"), Moderate,
            "webcaps are gilled",
        ),
        FeatureRule::supports(
            "omphalotus-sharp-gills", Omphalotus, GillType,
            RuleTest::equals("gills"), Moderate,
            "jack-o'-lanterns have sharp-edged true gills, unlike the chanterelle",
        ),
        FeatureRule::supports(
            "pleurotus-true-gills", Pleurotus, GillType,
            RuleTest::equals("gills"), Moderate,
            "oyster mushrooms are gilled",
        ),
        FeatureRule::supports(
            "lepista-true-gills", Lepista, GillType,
            RuleTest::equals("gills"), Weak,
            "blewits are gilled",
        ),
        FeatureRule::supports(
            "lepiota-true-gills", Lepiota, GillType,
            RuleTest::equals("gills"), Weak,
            "dapperlings are gilled",
        ),
        FeatureRule::supports(
            "macrolepiota-true-gills", Macrolepiota, GillType,
            RuleTest::equals("gills"), Moderate,
            "parasols are gilled",
        ),
        // --- spore surface kind, exclusions ---
        FeatureRule::excludes(
            "agaricus-wrong-hymenium", Agaricus, GillType,
            RuleTest::one_of(&["pores", "teeth", "ridges"]),
            "no true mushroom carries pores, spines or ridges",
        ),
        FeatureRule::excludes(
            "amanita-wrong-hymenium", Amanita, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "no amanita carries pores or spines",
        ),
        FeatureRule::excludes(
            "armillaria-wrong-hymenium", Armillaria, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "honey fungus never carries pores or spines",
        ),
        FeatureRule::excludes(
            "boletus-wrong-hymenium", Boletus, GillType,
            RuleTest::one_of(&["gills", "teeth", "ridges"]),
            "a bolete with true gills is not a bolete",
        ),
        FeatureRule::excludes(
            "cantharellus-wrong-hymenium", Cantharellus, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "chanterelles never carry pores or spines",
        ),
        FeatureRule::excludes(
            "coprinus-wrong-hymenium", Coprinus, GillType,
            RuleTest::one_of(&["pores", "teeth", "ridges"]),
            "ink caps never carry pores, spines or ridges",
        ),
        FeatureRule::excludes(
            "cortinarius-wrong-hymenium", Cortinarius, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "webcaps never carry pores or spines",
        ),
        FeatureRule::excludes(
            "galerina-wrong-hymenium", Galerina, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "funeral bells never carry pores or spines",
        ),
        FeatureRule::excludes(
            "hydnum-wrong-hymenium", Hydnum, GillType,
            RuleTest::one_of(&["gills", "pores", "ridges"]),
            "a hedgehog fungus has spines, nothing else",
        ),
        FeatureRule::excludes(
            "lactarius-wrong-hymenium", Lactarius, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "milkcaps never carry pores or spines",
        ),
        FeatureRule::excludes(
            "lepiota-wrong-hymenium", Lepiota, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "dapperlings never carry pores or spines",
        ),
        FeatureRule::excludes(
            "lepista-wrong-hymenium", Lepista, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "blewits never carry pores or spines",
        ),
        FeatureRule::excludes(
            "lycoperdon-any-hymenium", Lycoperdon, GillType,
            RuleTest::one_of(&["gills", "pores", "ridges", "teeth"]),
            "any visible spore surface rules out a puffball",
        ),
        FeatureRule::excludes(
            "macrolepiota-wrong-hymenium", Macrolepiota, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "parasols never carry pores or spines",
        ),
        FeatureRule::excludes(
            "omphalotus-wrong-hymenium", Omphalotus, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "jack-o'-lanterns never carry pores or spines",
        ),
        FeatureRule::excludes(
            "pleurotus-wrong-hymenium", Pleurotus, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "oyster mushrooms never carry pores or spines",
        ),
        FeatureRule::excludes(
            "russula-wrong-hymenium", Russula, GillType,
            RuleTest::one_of(&["pores", "teeth"]),
            "brittlegills never carry pores or spines",
        ),
        FeatureRule::excludes(
            "laetiporus-wrong-hymenium", Laetiporus, GillType,
            RuleTest::one_of(&["gills", "teeth", "ridges"]),
            "chicken of the woods is a polypore, pores only",
        ),
        // --- gill colour ---
        FeatureRule::supports(
            "amanita-white-gills", Amanita, GillColor,
            RuleTest::one_of(&["white", "cream"]),
            Strong,
            "amanita gills stay white to cream at every age",
        ),
        FeatureRule::supports(
            "agaricus-pink-gills", Agaricus, GillColor,
            RuleTest::one_of(&["pink", "pale pink"]),
            Moderate,
            "young true mushrooms show pale pink gills",
        ),
        FeatureRule::supports(
            "agaricus-brown-gills", Agaricus, GillColor,
            RuleTest::one_of(&["chocolate-brown", "purple-brown", "dark brown"]),
            Moderate,
            "mature true mushroom gills darken to chocolate brown",
        ),
        FeatureRule::contradicts(
            "agaricus-white-gills", Agaricus, GillColor,
            RuleTest::equals("white"), Weak,
            "pure white gills at maturity sit badly with a true mushroom",
        ),
        FeatureRule::supports(
            "coprinus-blackening-gills", Coprinus, GillColor,
            RuleTest::one_of(&["black", "inky-black", "blackening"]),
            Strong,
            "ink cap gills blacken from the edge as they deliquesce",
        ),
        FeatureRule::supports(
            "cortinarius-rusty-gills", Cortinarius, GillColor,
            RuleTest::one_of(&["rusty-brown", "rust", "cinnamon"]),
            Moderate,
            "webcap gills turn rusty cinnamon as spores mature",
        ),
        FeatureRule::supports(
            "omphalotus-orange-gills", Omphalotus, GillColor,
            RuleTest::equals("orange"), Strong,
            "gills the same vivid orange as the cap",
        ),
        FeatureRule::supports(
            "macrolepiota-white-gills", Macrolepiota, GillColor,
            RuleTest::one_of(&["white", "cream"]),
            Moderate,
            "parasol gills are white to cream",
        ),
        FeatureRule::supports(
            "lepiota-white-gills", Lepiota, GillColor,
            RuleTest::one_of(&["white", "cream"]),
            Moderate,
            "dapperling gills are white to cream",
        ),
        FeatureRule::supports(
            "russula-pale-gills", Russula, GillColor,
            RuleTest::one_of(&["white", "cream", "pale ochre"]),
            Moderate,
            "brittlegill gills run white to pale ochre",
        ),
        FeatureRule::supports(
            "lactarius-pale-gills", Lactarius, GillColor,
            RuleTest::one_of(&["white", "cream", "pale yellow"]),
            Weak,
            "milkcap gills are whitish to pale yellow",
        ),
        FeatureRule::supports(
            "armillaria-pale-gills", Armillaria, GillColor,
            RuleTest::one_of(&["white", "cream", "pinkish-cream"]),
            Weak,
            "honey fungus gills are whitish, spotting darker with age",
        ),
        // --- gill attachment ---
        FeatureRule::supports(
            "amanita-free-gills", Amanita, GillAttachment,
            RuleTest::equals("free"), Moderate,
            "amanita gills are free of the stem",
        ),
        FeatureRule::supports(
            "agaricus-free-gills", Agaricus, GillAttachment,
            RuleTest::equals("free"), Moderate,
            "true mushroom gills are free of the stem",
        ),
        FeatureRule::supports(
            "macrolepiota-free-gills", Macrolepiota, GillAttachment,
            RuleTest::equals("free"), Moderate,
            "parasol gills are free, leaving a gap round the stem",
        ),
        FeatureRule::supports(
            "lepiota-free-gills", Lepiota, GillAttachment,
            RuleTest::equals("free"), Moderate,
            "dapperling gills are free of the stem",
        ),
        FeatureRule::supports(
            "cantharellus-decurrent-ridges", Cantharellus, GillAttachment,
            RuleTest::equals("decurrent"), Moderate,
            "chanterelle ridges run well down the stem",
        ),
        FeatureRule::supports(
            "pleurotus-decurrent-gills", Pleurotus, GillAttachment,
            RuleTest::equals("decurrent"), Moderate,
            "oyster gills run down into the short lateral stem",
        ),
        FeatureRule::supports(
            "omphalotus-decurrent-gills", Omphalotus, GillAttachment,
            RuleTest::equals("decurrent"), Moderate,
            "jack-o'-lantern gills are strongly decurrent",
        ),
        // --- gill spacing ---
        FeatureRule::supports(
            "lepista-crowded-gills", Lepista, GillSpacing,
            RuleTest::equals("crowded"), Weak,
            "blewit gills are crowded and easily rubbed free",
        ),
        FeatureRule::supports(
            "cantharellus-distant-ridges", Cantharellus, GillSpacing,
            RuleTest::equals("distant"), Weak,
            "chanterelle ridges are widely spaced and shallow",
        ),
    ]
}
