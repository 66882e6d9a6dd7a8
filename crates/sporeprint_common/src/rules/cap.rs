//! Cap characters: diameter, colour, shape and surface.

use super::{EvidenceTier::*, FeatureRule, RuleTest};
use crate::genus::Genus::*;
use crate::observation::ObservationField::*;

pub(super) fn rules() -> Vec<FeatureRule> {
    vec![
        // --- cap diameter ---
        FeatureRule::supports(
            "macrolepiota-broad-cap", Macrolepiota, CapDiameterCm,
            RuleTest::between(10.0, 30.0), Strong,
            "parasol caps open dinner-plate wide, 10-30 cm across",
        ),
        FeatureRule::contradicts(
            "macrolepiota-small-cap", Macrolepiota, CapDiameterCm,
            RuleTest::between(0.0, 6.0), Strong,
            "a parasol-like cap under 6 cm is far more likely a dapperling",
        ),
        FeatureRule::supports(
            "lepiota-small-cap", Lepiota, CapDiameterCm,
            RuleTest::between(1.0, 6.0), Strong,
            "dapperlings stay small, rarely passing 6 cm",
        ),
        FeatureRule::contradicts(
            "lepiota-broad-cap", Lepiota, CapDiameterCm,
            RuleTest::between(10.0, 100.0), Strong,
            "a cap over 10 cm is outside dapperling range",
        ),
        FeatureRule::supports(
            "galerina-small-cap", Galerina, CapDiameterCm,
            RuleTest::between(0.5, 4.0), Moderate,
            "funeral bells carry small caps, usually under 4 cm",
        ),
        FeatureRule::contradicts(
            "galerina-broad-cap", Galerina, CapDiameterCm,
            RuleTest::between(8.0, 100.0), Strong,
            "a cap past 8 cm is well outside funeral bell range",
        ),
        // --- cap colour ---
        FeatureRule::supports(
            "russula-bright-cap", Russula, CapColor,
            RuleTest::one_of(&["red", "purple", "violet", "green", "yellow", "ochre"]),
            Moderate,
            "brittlegill caps come in bright paintbox colours",
        ),
        FeatureRule::supports(
            "armillaria-honey-cap", Armillaria, CapColor,
            RuleTest::one_of(&["honey", "honey-brown", "tawny", "yellow-brown"]),
            Moderate,
            "honey fungus caps are honey to tawny brown",
        ),
        FeatureRule::supports(
            "galerina-tawny-cap", Galerina, CapColor,
            RuleTest::one_of(&["tawny", "ochre", "honey", "brown", "yellow-brown"]),
            Moderate,
            "funeral bell caps are tawny to ochre brown, often hygrophanous",
        ),
        FeatureRule::supports(
            "laetiporus-sulphur-cap", Laetiporus, CapColor,
            RuleTest::one_of(&["yellow", "orange", "sulphur-yellow"]),
            Strong,
            "chicken of the woods brackets are unmistakable sulphur yellow to orange",
        ),
        FeatureRule::supports(
            "omphalotus-orange-cap", Omphalotus, CapColor,
            RuleTest::one_of(&["orange", "bright orange"]),
            Strong,
            "jack-o'-lantern fruitbodies are vivid orange throughout",
        ),
        FeatureRule::supports(
            "lepista-lilac-cap", Lepista, CapColor,
            RuleTest::one_of(&["lilac", "violet", "purple", "blue-lilac"]),
            Strong,
            "wood blewit caps carry a lilac to violet flush",
        ),
        FeatureRule::supports(
            "cortinarius-violet-cap", Cortinarius, CapColor,
            RuleTest::one_of(&["violet", "purple", "lilac"]),
            Moderate,
            "several webcaps share the blewit's violet tones",
        ),
        FeatureRule::supports(
            "cantharellus-golden-cap", Cantharellus, CapColor,
            RuleTest::one_of(&["yellow", "egg-yellow", "golden"]),
            Strong,
            "chanterelles are egg-yolk yellow from cap to stem",
        ),
        FeatureRule::supports(
            "hydnum-buff-cap", Hydnum, CapColor,
            RuleTest::one_of(&["cream", "buff", "pale orange", "apricot"]),
            Moderate,
            "hedgehog fungus caps are cream to pale apricot",
        ),
        // --- cap shape ---
        FeatureRule::supports(
            "coprinus-tall-cap", Coprinus, CapShape,
            RuleTest::one_of(&["cylindrical", "egg-shaped", "bell-shaped", "conical"]),
            Strong,
            "ink caps start as tall eggs and open to narrow bells",
        ),
        FeatureRule::supports(
            "pleurotus-shell-cap", Pleurotus, CapShape,
            RuleTest::one_of(&["fan-shaped", "shell-shaped", "oyster-shaped"]),
            Strong,
            "oyster mushrooms grow as fans or shells off the wood",
        ),
        FeatureRule::supports(
            "lycoperdon-round-body", Lycoperdon, CapShape,
            RuleTest::one_of(&["spherical", "round", "pear-shaped"]),
            Strong,
            "puffballs are spherical to pear-shaped with no true cap",
        ),
        // --- cap surface ---
        FeatureRule::supports(
            "amanita-veil-patches", Amanita, CapSurface,
            RuleTest::one_of(&["warty", "patchy"]),
            Moderate,
            "white warts or patches on the cap are universal veil remnants",
        ),
        FeatureRule::supports(
            "coprinus-shaggy-cap", Coprinus, CapSurface,
            RuleTest::one_of(&["shaggy", "woolly", "scaly"]),
            Strong,
            "the shaggy ink cap wears loose woolly scales",
        ),
        FeatureRule::supports(
            "macrolepiota-scaly-cap", Macrolepiota, CapSurface,
            RuleTest::one_of(&["scaly", "shaggy"]),
            Moderate,
            "parasol caps break into large brown scales over white",
        ),
        FeatureRule::supports(
            "lepiota-scaly-cap", Lepiota, CapSurface,
            RuleTest::equals("scaly"), Moderate,
            "dapperling caps carry fine concentric scales",
        ),
        FeatureRule::supports(
            "lycoperdon-spiny-surface", Lycoperdon, CapSurface,
            RuleTest::one_of(&["spiny", "warty", "granular"]),
            Moderate,
            "the common puffball is covered in short pearly spines",
        ),
    ]
}
