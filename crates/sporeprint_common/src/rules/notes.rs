//! Free-text rules over the description notes.
//!
//! Substring matches against unstructured prose. The search values here are
//! also what the notes preprocessor checks negations against: "no milk"
//! overlaps the milkcap rule below and synthesises a contradiction from it.

use super::{EvidenceTier::*, FeatureRule, RuleTest};
use crate::genus::Genus::*;
use crate::observation::ObservationField::*;

pub(super) fn rules() -> Vec<FeatureRule> {
    vec![
        FeatureRule::supports(
            "coprinus-deliquescing-notes", Coprinus, DescriptionNotes,
            RuleTest::contains("deliquesc"), Strong,
            "caps deliquescing into black liquid are the ink cap signature",
        ),
        FeatureRule::supports(
            "coprinus-inky-notes", Coprinus, DescriptionNotes,
            RuleTest::contains("ink"), Strong,
            "mention of ink or inky drips points at the ink caps",
        ),
        FeatureRule::supports(
            "armillaria-bootlace-notes", Armillaria, DescriptionNotes,
            RuleTest::contains("bootlace"), Strong,
            "black bootlace rhizomorphs under the bark are honey fungus",
        ),
        FeatureRule::supports(
            "omphalotus-glowing-notes", Omphalotus, DescriptionNotes,
            RuleTest::contains("glow"), Strong,
            "gills glowing faintly in the dark are the jack-o'-lantern's party trick",
        ),
        FeatureRule::supports(
            "cortinarius-cobweb-notes", Cortinarius, DescriptionNotes,
            RuleTest::contains("cobweb"), Strong,
            "a cobweb veil between cap edge and stem is the webcap cortina",
        ),
        FeatureRule::supports(
            "macrolepiota-snakeskin-notes", Macrolepiota, DescriptionNotes,
            RuleTest::contains("snakeskin"), Strong,
            "snakeskin banding on the stem is classic parasol",
        ),
        FeatureRule::supports(
            "macrolepiota-loose-ring-notes", Macrolepiota, DescriptionNotes,
            RuleTest::contains("movable ring"), Strong,
            "a ring that slides freely up and down the stem is classic parasol",
        ),
        FeatureRule::supports(
            "lycoperdon-puffing-notes", Lycoperdon, DescriptionNotes,
            RuleTest::contains("puff"), Strong,
            "a ripe fruitbody puffing spores when pressed is a puffball",
        ),
        FeatureRule::supports(
            "boletus-sponge-notes", Boletus, DescriptionNotes,
            RuleTest::contains("sponge"), Strong,
            "a sponge-like underside in prose means pores",
        ),
        FeatureRule::supports(
            "lactarius-milky-notes", Lactarius, DescriptionNotes,
            RuleTest::contains("milk"), Strong,
            "prose mention of milk or milky droplets points at the milkcaps",
        ),
        FeatureRule::supports(
            "russula-snapping-notes", Russula, DescriptionNotes,
            RuleTest::contains("snap"), Moderate,
            "flesh described as snapping cleanly suggests a brittlegill",
        ),
        FeatureRule::supports(
            "hydnum-spiny-notes", Hydnum, DescriptionNotes,
            RuleTest::contains("spine"), Moderate,
            "prose mention of spines under the cap suggests the hedgehog fungus",
        ),
        FeatureRule::supports(
            "cantharellus-forking-notes", Cantharellus, DescriptionNotes,
            RuleTest::contains("forking"), Moderate,
            "forking, vein-like ridges described in prose fit the chanterelle",
        ),
        FeatureRule::supports(
            "pleurotus-shelving-notes", Pleurotus, DescriptionNotes,
            RuleTest::contains("shelf"), Moderate,
            "caps described as shelving off wood fit the oyster mushroom",
        ),
    ]
}
