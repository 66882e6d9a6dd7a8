//! Flesh characters: texture, bruising reactions and latex.

use super::{EvidenceTier::*, FeatureRule, RuleTest};
use crate::genus::Genus::*;
use crate::observation::ObservationField::*;

pub(super) fn rules() -> Vec<FeatureRule> {
    vec![
        // --- flesh texture ---
        FeatureRule::supports(
            "russula-brittle-flesh", Russula, FleshTexture,
            RuleTest::equals("brittle"), Definitive,
            "flesh that snaps like chalk, never tearing in fibres, is Russulaceae",
        ),
        FeatureRule::supports(
            "lactarius-brittle-flesh", Lactarius, FleshTexture,
            RuleTest::equals("brittle"), Definitive,
            "milkcaps share the brittlegills' chalky, fibreless flesh",
        ),
        FeatureRule::contradicts(
            "russula-fibrous-flesh", Russula, FleshTexture,
            RuleTest::equals("fibrous"), Strong,
            "stringy, fibrous flesh argues firmly against a brittlegill",
        ),
        FeatureRule::contradicts(
            "lactarius-fibrous-flesh", Lactarius, FleshTexture,
            RuleTest::equals("fibrous"), Strong,
            "stringy, fibrous flesh argues firmly against a milkcap",
        ),
        FeatureRule::supports(
            "pleurotus-firm-flesh", Pleurotus, FleshTexture,
            RuleTest::equals("firm"), Weak,
            "oyster flesh is firm and slightly rubbery",
        ),
        FeatureRule::supports(
            "laetiporus-soft-flesh", Laetiporus, FleshTexture,
            RuleTest::equals("soft"), Weak,
            "young chicken of the woods is soft and moist, drying crumbly",
        ),
        // --- bruising ---
        FeatureRule::supports(
            "boletus-blue-bruising", Boletus, BruisingColor,
            RuleTest::one_of(&["blue", "blue-black", "blue-green"]),
            Strong,
            "many boletes stain blue within seconds of cutting",
        ),
        FeatureRule::supports(
            "agaricus-yellow-stain", Agaricus, BruisingColor,
            RuleTest::one_of(&["yellow", "chrome-yellow"]),
            Moderate,
            "some true mushrooms stain yellow where rubbed, strongest at the stem base",
        ),
        FeatureRule::supports(
            "agaricus-pink-stain", Agaricus, BruisingColor,
            RuleTest::one_of(&["pink", "reddish"]),
            Weak,
            "field mushroom flesh blushes faintly pink when cut",
        ),
        // --- latex ---
        FeatureRule::supports(
            "lactarius-latex", Lactarius, MilkPresent,
            RuleTest::flag(true), Definitive,
            "gills that weep milky latex when cut define the milkcaps",
        ),
        FeatureRule::excludes(
            "russula-latex", Russula, MilkPresent,
            RuleTest::flag(true),
            "a brittlegill that weeps milk is a milkcap",
        ),
        FeatureRule::excludes(
            "amanita-latex", Amanita, MilkPresent,
            RuleTest::flag(true),
            "amanitas never exude latex",
        ),
        FeatureRule::excludes(
            "agaricus-latex", Agaricus, MilkPresent,
            RuleTest::flag(true),
            "true mushrooms never exude latex",
        ),
        FeatureRule::excludes(
            "cortinarius-latex", Cortinarius, MilkPresent,
            RuleTest::flag(true),
            "webcaps never exude latex",
        ),
        FeatureRule::excludes(
            "boletus-latex", Boletus, MilkPresent,
            RuleTest::flag(true),
            "boletes never exude latex",
        ),
        // --- latex colour ---
        FeatureRule::supports(
            "lactarius-latex-colour", Lactarius, MilkColor,
            RuleTest::Present, Strong,
            "a recorded latex colour means latex was seen at all",
        ),
        FeatureRule::supports(
            "lactarius-carrot-latex", Lactarius, MilkColor,
            RuleTest::one_of(&["orange", "carrot-orange"]),
            Moderate,
            "carrot-orange latex points at the saffron milkcap group",
        ),
    ]
}
