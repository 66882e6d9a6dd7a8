//! Ecological characters: where and when the fruitbody grew, and smell.
//!
//! Ecology rarely clinches an identification by itself, so nearly
//! everything here sits at moderate or weak tier. The one hard call is
//! substrate for the chanterelle: it is strictly mycorrhizal and never
//! fruits from wood, which is exactly how it differs from the
//! jack-o'-lantern.

use super::{EvidenceTier::*, FeatureRule, RuleTest};
use crate::genus::Genus::*;
use crate::observation::ObservationField::*;

pub(super) fn rules() -> Vec<FeatureRule> {
    vec![
        // --- habitat ---
        FeatureRule::supports(
            "amanita-woodland", Amanita, Habitat,
            RuleTest::equals("woodland"), Moderate,
            "amanitas are mycorrhizal woodland fungi",
        ),
        FeatureRule::supports(
            "boletus-woodland", Boletus, Habitat,
            RuleTest::equals("woodland"), Moderate,
            "boletes fruit with their woodland host trees",
        ),
        FeatureRule::supports(
            "russula-woodland", Russula, Habitat,
            RuleTest::equals("woodland"), Moderate,
            "brittlegills fruit with their woodland host trees",
        ),
        FeatureRule::supports(
            "lactarius-woodland", Lactarius, Habitat,
            RuleTest::equals("woodland"), Moderate,
            "milkcaps fruit with their woodland host trees",
        ),
        FeatureRule::supports(
            "cantharellus-woodland", Cantharellus, Habitat,
            RuleTest::equals("woodland"), Moderate,
            "chanterelles fruit on woodland floors, often in moss",
        ),
        FeatureRule::supports(
            "cortinarius-woodland", Cortinarius, Habitat,
            RuleTest::equals("woodland"), Moderate,
            "webcaps are woodland mycorrhizal fungi",
        ),
        FeatureRule::supports(
            "hydnum-woodland", Hydnum, Habitat,
            RuleTest::equals("woodland"), Moderate,
            "hedgehog fungi fruit on woodland floors",
        ),
        FeatureRule::supports(
            "agaricus-open-ground", Agaricus, Habitat,
            RuleTest::one_of(&["grassland", "parkland", "garden"]),
            Moderate,
            "true mushrooms favour open grassy ground",
        ),
        FeatureRule::supports(
            "coprinus-open-ground", Coprinus, Habitat,
            RuleTest::one_of(&["grassland", "parkland", "garden"]),
            Moderate,
            "shaggy ink caps favour lawns, verges and disturbed ground",
        ),
        FeatureRule::supports(
            "macrolepiota-open-ground", Macrolepiota, Habitat,
            RuleTest::one_of(&["grassland", "parkland"]),
            Moderate,
            "parasols stand in open grassland and wood edges",
        ),
        FeatureRule::supports(
            "lepista-mixed-ground", Lepista, Habitat,
            RuleTest::one_of(&["woodland", "garden", "parkland"]),
            Weak,
            "blewits turn up in woods, hedgerows and garden compost alike",
        ),
        // --- substrate ---
        FeatureRule::supports(
            "armillaria-on-wood", Armillaria, Substrate,
            RuleTest::equals("wood"), Strong,
            "honey fungus fruits on trunks, stumps and buried roots",
        ),
        FeatureRule::supports(
            "galerina-on-wood", Galerina, Substrate,
            RuleTest::equals("wood"), Strong,
            "funeral bells fruit on rotting wood, often well-decayed conifer",
        ),
        FeatureRule::supports(
            "pleurotus-on-wood", Pleurotus, Substrate,
            RuleTest::equals("wood"), Strong,
            "oysters shelve on standing and fallen broadleaf wood",
        ),
        FeatureRule::supports(
            "laetiporus-on-wood", Laetiporus, Substrate,
            RuleTest::equals("wood"), Strong,
            "chicken of the woods brackets living and dead trunks",
        ),
        FeatureRule::supports(
            "omphalotus-on-wood", Omphalotus, Substrate,
            RuleTest::equals("wood"), Strong,
            "jack-o'-lanterns cluster at the base of trees and on stumps",
        ),
        FeatureRule::supports(
            "cantharellus-on-soil", Cantharellus, Substrate,
            RuleTest::equals("soil"), Moderate,
            "chanterelles fruit from soil, never from wood",
        ),
        FeatureRule::excludes(
            "cantharellus-on-wood", Cantharellus, Substrate,
            RuleTest::equals("wood"),
            "a chanterelle-like fungus growing from wood is a jack-o'-lantern or false chanterelle",
        ),
        FeatureRule::supports(
            "boletus-on-soil", Boletus, Substrate,
            RuleTest::equals("soil"), Moderate,
            "boletes fruit from soil near their hosts",
        ),
        FeatureRule::supports(
            "hydnum-on-soil", Hydnum, Substrate,
            RuleTest::equals("soil"), Moderate,
            "hedgehog fungi fruit from soil",
        ),
        FeatureRule::contradicts(
            "pleurotus-on-soil", Pleurotus, Substrate,
            RuleTest::equals("soil"), Moderate,
            "oysters need wood; soil growth suggests something else",
        ),
        FeatureRule::contradicts(
            "laetiporus-on-soil", Laetiporus, Substrate,
            RuleTest::equals("soil"), Moderate,
            "chicken of the woods fruits from wood, not open soil",
        ),
        FeatureRule::contradicts(
            "boletus-on-wood", Boletus, Substrate,
            RuleTest::equals("wood"), Moderate,
            "boletes rarely fruit from wood itself",
        ),
        FeatureRule::contradicts(
            "amanita-on-wood", Amanita, Substrate,
            RuleTest::equals("wood"), Moderate,
            "amanitas fruit from soil, not from wood",
        ),
        FeatureRule::supports(
            "coprinus-rich-ground", Coprinus, Substrate,
            RuleTest::one_of(&["soil", "dung", "litter"]),
            Weak,
            "ink caps favour enriched and disturbed ground",
        ),
        // --- growth pattern ---
        FeatureRule::supports(
            "armillaria-clustered", Armillaria, GrowthPattern,
            RuleTest::equals("clustered"), Strong,
            "honey fungus erupts in dense tufts from shared bases",
        ),
        FeatureRule::supports(
            "omphalotus-clustered", Omphalotus, GrowthPattern,
            RuleTest::equals("clustered"), Strong,
            "jack-o'-lanterns grow in tight overlapping clusters",
        ),
        FeatureRule::supports(
            "galerina-clustered", Galerina, GrowthPattern,
            RuleTest::equals("clustered"), Moderate,
            "funeral bells often cluster on their log",
        ),
        FeatureRule::supports(
            "pleurotus-tiered", Pleurotus, GrowthPattern,
            RuleTest::equals("tiered"), Strong,
            "oysters shelve in overlapping tiers",
        ),
        FeatureRule::supports(
            "laetiporus-tiered", Laetiporus, GrowthPattern,
            RuleTest::equals("tiered"), Strong,
            "chicken of the woods builds fans in overlapping tiers",
        ),
        FeatureRule::supports(
            "lepista-fairy-ring", Lepista, GrowthPattern,
            RuleTest::equals("ring"), Moderate,
            "blewits commonly fruit in rings and troops",
        ),
        FeatureRule::supports(
            "agaricus-fairy-ring", Agaricus, GrowthPattern,
            RuleTest::equals("ring"), Weak,
            "field mushrooms can fruit in wide grassland rings",
        ),
        FeatureRule::supports(
            "coprinus-trooping", Coprinus, GrowthPattern,
            RuleTest::one_of(&["troop", "scattered", "clustered"]),
            Weak,
            "shaggy ink caps troop across disturbed ground",
        ),
        FeatureRule::supports(
            "amanita-lone-growth", Amanita, GrowthPattern,
            RuleTest::one_of(&["solitary", "scattered"]),
            Weak,
            "amanitas stand alone or loosely scattered",
        ),
        FeatureRule::supports(
            "boletus-lone-growth", Boletus, GrowthPattern,
            RuleTest::one_of(&["solitary", "scattered"]),
            Weak,
            "boletes stand alone or loosely scattered",
        ),
        FeatureRule::supports(
            "lycoperdon-grouped", Lycoperdon, GrowthPattern,
            RuleTest::one_of(&["clustered", "troop"]),
            Weak,
            "puffballs often sit in groups on the same patch",
        ),
        // --- tree associations ---
        FeatureRule::supports(
            "amanita-birch-association", Amanita, NearbyTrees,
            RuleTest::contains("birch"), Weak,
            "the fly agaric keeps close company with birch",
        ),
        FeatureRule::supports(
            "boletus-oak-association", Boletus, NearbyTrees,
            RuleTest::contains("oak"), Weak,
            "ceps favour oak and beech stands",
        ),
        FeatureRule::supports(
            "lactarius-birch-association", Lactarius, NearbyTrees,
            RuleTest::contains("birch"), Weak,
            "several milkcaps pair with birch",
        ),
        FeatureRule::supports(
            "russula-beech-association", Russula, NearbyTrees,
            RuleTest::contains("beech"), Weak,
            "many brittlegills pair with beech",
        ),
        FeatureRule::supports(
            "hydnum-beech-association", Hydnum, NearbyTrees,
            RuleTest::contains("beech"), Weak,
            "hedgehog fungi favour beech litter",
        ),
        FeatureRule::supports(
            "cantharellus-oak-association", Cantharellus, NearbyTrees,
            RuleTest::contains("oak"), Weak,
            "chanterelles pair with oak, beech and birch",
        ),
        // --- season ---
        FeatureRule::supports(
            "lepista-late-season", Lepista, SeasonMonth,
            RuleTest::months(9, 12), Moderate,
            "blewits are late fruiters, carrying on past the first frosts",
        ),
        FeatureRule::supports(
            "amanita-autumn", Amanita, SeasonMonth,
            RuleTest::months(8, 11), Weak,
            "amanitas peak in late summer and autumn",
        ),
        FeatureRule::supports(
            "boletus-autumn", Boletus, SeasonMonth,
            RuleTest::months(8, 11), Weak,
            "boletes peak in late summer and autumn",
        ),
        FeatureRule::supports(
            "cantharellus-long-season", Cantharellus, SeasonMonth,
            RuleTest::months(7, 11), Weak,
            "chanterelles run from midsummer into late autumn",
        ),
        FeatureRule::supports(
            "laetiporus-summer", Laetiporus, SeasonMonth,
            RuleTest::months(5, 9), Weak,
            "chicken of the woods is a late spring to summer bracket",
        ),
        FeatureRule::supports(
            "coprinus-long-season", Coprinus, SeasonMonth,
            RuleTest::months(5, 11), Weak,
            "shaggy ink caps appear from late spring to the frosts",
        ),
        FeatureRule::supports(
            "galerina-cool-season", Galerina, SeasonMonth,
            RuleTest::months(9, 12), Weak,
            "funeral bells favour cool, damp months",
        ),
        // --- smell ---
        FeatureRule::supports(
            "agaricus-sweet-smell", Agaricus, Smell,
            RuleTest::one_of(&["almond", "aniseed"]),
            Strong,
            "an almond or aniseed scent marks the pleasant-smelling true mushrooms",
        ),
        FeatureRule::supports(
            "agaricus-phenolic-smell", Agaricus, Smell,
            RuleTest::equals("phenolic"), Weak,
            "an inky, phenolic smell points at the yellow stainer within the genus",
        ),
        FeatureRule::supports(
            "cantharellus-apricot-smell", Cantharellus, Smell,
            RuleTest::equals("apricot"), Strong,
            "a faint apricot scent is classic chanterelle",
        ),
        FeatureRule::supports(
            "lepista-perfumed-smell", Lepista, Smell,
            RuleTest::one_of(&["perfumed", "fruity"]),
            Moderate,
            "blewits smell sweetly perfumed",
        ),
    ]
}
