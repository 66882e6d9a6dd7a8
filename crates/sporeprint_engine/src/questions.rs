//! Follow-up question selection.
//!
//! With several candidates alive, the cheapest way forward is the question
//! that best splits them. Information gain here is coverage: the fraction
//! of active genera with a rule on the field, plus flat bonuses when an
//! answer could eliminate a candidate outright or confirm one outright.
//! Safety-relevant questions outrank the merely informative whatever their
//! gain. Every question is skippable; the forager decides what they are
//! willing or able to check.

use tracing::debug;

use sporeprint_common::{
    is_safety_feature, CandidateScore, EvidenceTier, FeatureRule, Genus, Observation,
    ObservationField, Question, RuleSet, RuleTest,
};

/// Flat gain bonus when an answer could hard-eliminate an active genus.
const EXCLUSION_BONUS: f64 = 0.3;
/// Flat gain bonus when an answer could confirm an active genus outright.
const DEFINITIVE_BONUS: f64 = 0.4;

/// Rank the unobserved fields worth asking about.
///
/// Returns nothing once one or zero candidates remain in play: there is no
/// field left to discriminate on. Otherwise one question per useful field,
/// safety-relevant first, then by gain, with field declaration order as the
/// final tie-break. The caller truncates to its own question budget.
pub fn select_questions(
    candidates: &[CandidateScore],
    observation: &Observation,
    rules: &RuleSet,
) -> Vec<Question> {
    let active: Vec<Genus> = candidates
        .iter()
        .filter(|c| c.is_active())
        .map(|c| c.genus)
        .collect();
    if active.len() <= 1 {
        return Vec::new();
    }

    let mut questions: Vec<Question> = Vec::new();
    for field in ObservationField::ALL {
        if observation.has(field) {
            continue;
        }

        // Rules on this field for genera still in play. Absence predicates
        // are already answered by the missing value and are no reason to ask.
        let applicable: Vec<&FeatureRule> = rules
            .rules()
            .iter()
            .filter(|r| {
                r.field == field
                    && !matches!(r.test, RuleTest::Absent)
                    && active.contains(&r.genus)
            })
            .collect();
        if applicable.is_empty() {
            continue;
        }

        let discriminates: Vec<Genus> = active
            .iter()
            .copied()
            .filter(|g| applicable.iter().any(|r| r.genus == *g))
            .collect();

        let mut info_gain = discriminates.len() as f64 / active.len() as f64;
        if applicable.iter().any(|r| r.tier == EvidenceTier::Exclusionary) {
            info_gain += EXCLUSION_BONUS;
        }
        if applicable
            .iter()
            .any(|r| r.supporting && r.tier == EvidenceTier::Definitive)
        {
            info_gain += DEFINITIVE_BONUS;
        }

        let safety_relevant = active.iter().any(|g| is_safety_feature(*g, field));

        questions.push(Question {
            field,
            prompt: field_prompt(field).to_string(),
            info_gain,
            safety_relevant,
            skippable: true,
            discriminates,
        });
    }

    // Stable sort over the declaration-ordered fields keeps ties
    // deterministic.
    questions.sort_by(|a, b| {
        b.safety_relevant
            .cmp(&a.safety_relevant)
            .then(b.info_gain.total_cmp(&a.info_gain))
    });

    debug!(
        active = active.len(),
        questions = questions.len(),
        "ranked follow-up questions"
    );
    questions
}

/// Field-guide phrasing for each field's question.
pub fn field_prompt(field: ObservationField) -> &'static str {
    match field {
        ObservationField::CapDiameterCm => {
            "How wide is the open cap at its widest point, in centimetres?"
        }
        ObservationField::CapColor => "What colour is the cap surface?",
        ObservationField::CapShape => {
            "What shape is the cap: convex, flat, funnel, bell or spherical?"
        }
        ObservationField::CapSurface => {
            "How does the cap surface look and feel: smooth, scaly, shaggy, warty or slimy?"
        }
        ObservationField::GillType => {
            "Under the cap: true gills, a sponge of pores, blunt ridges, soft spines or nothing?"
        }
        ObservationField::GillColor => "What colour are the gills right now?",
        ObservationField::GillAttachment => {
            "How do the gills meet the stem: free of it, attached to it or running down it?"
        }
        ObservationField::GillSpacing => "Are the gills crowded together or widely spaced?",
        ObservationField::StemPresent => "Is there a distinct stem?",
        ObservationField::StemHeightCm => "How tall is the stem, in centimetres?",
        ObservationField::StemColor => "What colour is the stem?",
        ObservationField::RingPresent => "Is there a ring or skirt of tissue on the stem?",
        ObservationField::VolvaPresent => {
            "Dig out the stem base: is there a sac, cup or rim of tissue wrapping it?"
        }
        ObservationField::StemBase => {
            "What does the stem base look like: straight, swollen, bulbous or rooting?"
        }
        ObservationField::FleshTexture => {
            "Break a piece of cap: does the flesh snap like chalk, tear in fibres or bend?"
        }
        ObservationField::BruisingColor => {
            "Cut or bruise the flesh: does it change colour, and to what?"
        }
        ObservationField::MilkPresent => "Nick the gills: do they weep any milky latex?",
        ObservationField::MilkColor => {
            "What colour is the latex, and does it change after a few minutes on the flesh?"
        }
        ObservationField::SporePrintColor => {
            "Take an overnight spore print on half white, half dark paper: what colour is it?"
        }
        ObservationField::Habitat => {
            "Where was it growing: woodland, grassland, parkland, garden or heath?"
        }
        ObservationField::Substrate => {
            "What is it growing from: soil, wood, dung or leaf litter?"
        }
        ObservationField::GrowthPattern => {
            "How are the fruitbodies arranged: solitary, scattered, clustered, tiered or in a ring?"
        }
        ObservationField::NearbyTrees => "Which trees stand within ten metres or so?",
        ObservationField::SeasonMonth => "Which month was it found in?",
        ObservationField::Smell => {
            "What does the cut flesh smell of: mushroom, almond, aniseed, apricot, ink or nothing?"
        }
        ObservationField::DescriptionNotes => "Anything else notable about it, in your own words?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sporeprint_common::{builtin_rules, ConfidenceLevel};

    fn make_candidate(genus: Genus, score: f64, eliminated: bool) -> CandidateScore {
        CandidateScore {
            genus,
            score,
            confidence: ConfidenceLevel::from_score(score),
            eliminated,
            matching: Vec::new(),
            contradicting: Vec::new(),
            missing_fields: Vec::new(),
        }
    }

    #[test]
    fn test_single_survivor_gets_no_questions() {
        let candidates = vec![
            make_candidate(Genus::Boletus, 0.8, false),
            make_candidate(Genus::Russula, 0.0, false),
            make_candidate(Genus::Amanita, 0.6, true),
        ];
        let questions = select_questions(&candidates, &Observation::default(), builtin_rules());
        assert!(questions.is_empty());
    }

    #[test]
    fn test_observed_fields_are_never_asked_again() {
        let candidates = vec![
            make_candidate(Genus::Russula, 0.5, false),
            make_candidate(Genus::Lactarius, 0.4, false),
        ];
        let obs = Observation {
            flesh_texture: Some("brittle".to_string()),
            habitat: Some("woodland".to_string()),
            ..Default::default()
        };
        let questions = select_questions(&candidates, &obs, builtin_rules());
        assert!(!questions.is_empty());
        for q in &questions {
            assert_ne!(q.field, ObservationField::FleshTexture);
            assert_ne!(q.field, ObservationField::Habitat);
            assert!(q.skippable);
            assert!(!q.discriminates.is_empty());
        }
    }

    #[test]
    fn test_safety_relevant_questions_lead() {
        let candidates = vec![
            make_candidate(Genus::Agaricus, 0.5, false),
            make_candidate(Genus::Amanita, 0.4, false),
        ];
        let questions = select_questions(&candidates, &Observation::default(), builtin_rules());
        assert!(questions[0].safety_relevant);
        let first_plain = questions
            .iter()
            .position(|q| !q.safety_relevant)
            .unwrap_or(questions.len());
        assert!(questions[..first_plain].iter().all(|q| q.safety_relevant));
        assert!(questions[first_plain..].iter().all(|q| !q.safety_relevant));
    }

    #[test]
    fn test_elimination_and_confirmation_bonuses() {
        let rules = RuleSet::new(vec![
            FeatureRule::supports(
                "r-gills",
                Genus::Russula,
                ObservationField::GillType,
                RuleTest::equals("gills"),
                EvidenceTier::Moderate,
                "gilled",
            ),
            FeatureRule::supports(
                "a-gills",
                Genus::Amanita,
                ObservationField::GillType,
                RuleTest::equals("gills"),
                EvidenceTier::Moderate,
                "gilled",
            ),
            FeatureRule::supports(
                "a-volva",
                Genus::Amanita,
                ObservationField::VolvaPresent,
                RuleTest::flag(true),
                EvidenceTier::Definitive,
                "volva",
            ),
            FeatureRule::excludes(
                "r-volva",
                Genus::Russula,
                ObservationField::VolvaPresent,
                RuleTest::flag(true),
                "no volva on brittlegills",
            ),
        ]);
        let candidates = vec![
            make_candidate(Genus::Russula, 0.5, false),
            make_candidate(Genus::Amanita, 0.4, false),
        ];
        let questions = select_questions(&candidates, &Observation::default(), &rules);
        assert_eq!(questions.len(), 2);
        let volva = questions
            .iter()
            .find(|q| q.field == ObservationField::VolvaPresent)
            .unwrap();
        let gills = questions
            .iter()
            .find(|q| q.field == ObservationField::GillType)
            .unwrap();
        // Full coverage both; the volva question adds both bonuses.
        assert_relative_eq!(gills.info_gain, 1.0, epsilon = 1e-9);
        assert_relative_eq!(volva.info_gain, 1.0 + 0.3 + 0.4, epsilon = 1e-9);
        assert_eq!(questions[0].field, ObservationField::VolvaPresent);
    }

    #[test]
    fn test_equal_gain_falls_back_to_declaration_order() {
        let rules = RuleSet::new(vec![
            FeatureRule::supports(
                "r-stem",
                Genus::Russula,
                ObservationField::StemColor,
                RuleTest::equals("white"),
                EvidenceTier::Weak,
                "white stem",
            ),
            FeatureRule::supports(
                "r-cap",
                Genus::Russula,
                ObservationField::CapColor,
                RuleTest::equals("red"),
                EvidenceTier::Weak,
                "red cap",
            ),
        ]);
        let candidates = vec![
            make_candidate(Genus::Russula, 0.5, false),
            make_candidate(Genus::Boletus, 0.4, false),
        ];
        let questions = select_questions(&candidates, &Observation::default(), &rules);
        assert_eq!(questions.len(), 2);
        assert_relative_eq!(questions[0].info_gain, questions[1].info_gain);
        // CapColor is declared before StemColor.
        assert_eq!(questions[0].field, ObservationField::CapColor);
        assert_eq!(questions[1].field, ObservationField::StemColor);
    }

    #[test]
    fn test_discriminates_lists_only_covered_active_genera() {
        let rules = RuleSet::new(vec![FeatureRule::supports(
            "l-milk",
            Genus::Lactarius,
            ObservationField::MilkPresent,
            RuleTest::flag(true),
            EvidenceTier::Definitive,
            "latex",
        )]);
        let candidates = vec![
            make_candidate(Genus::Russula, 0.5, false),
            make_candidate(Genus::Lactarius, 0.4, false),
        ];
        let questions = select_questions(&candidates, &Observation::default(), &rules);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].discriminates, vec![Genus::Lactarius]);
        assert_relative_eq!(questions[0].info_gain, 0.5 + 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_every_field_has_a_prompt() {
        for field in ObservationField::ALL {
            assert!(!field_prompt(field).is_empty());
        }
    }
}
