//! Field heuristics: hands-on procedural tests a forager can run.
//!
//! A heuristic is reference data, not code: a target genus or family, the
//! minimum confidence at which suggesting it makes sense, and the procedure
//! itself. Procedures come in two forms, a plain text block split on
//! newlines or structured steps carrying inline safety notes; `steps()`
//! flattens either form.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceLevel;
use crate::genus::{Family, Genus};

/// How urgently a triggered heuristic should be carried out.
///
/// Ordered for sorting: critical procedures come first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicPriority {
    Critical,
    Standard,
    Supplementary,
}

impl HeuristicPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicPriority::Critical => "critical",
            HeuristicPriority::Standard => "standard",
            HeuristicPriority::Supplementary => "supplementary",
        }
    }
}

/// What a heuristic establishes. Ordered for sorting within a priority:
/// telling dangerous genera apart beats deciding what is worth eating.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicCategory {
    SafetyDiscrimination,
    EdibilityDetermination,
    EcologicalContext,
}

impl HeuristicCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicCategory::SafetyDiscrimination => "safety_discrimination",
            HeuristicCategory::EdibilityDetermination => "edibility_determination",
            HeuristicCategory::EcologicalContext => "ecological_context",
        }
    }
}

/// Which candidates a heuristic applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicTarget {
    Genus(Genus),
    Family(Family),
}

impl HeuristicTarget {
    pub fn applies_to(&self, genus: Genus) -> bool {
        match self {
            HeuristicTarget::Genus(g) => *g == genus,
            HeuristicTarget::Family(f) => genus.family() == *f,
        }
    }
}

/// One step of a procedure, optionally with a safety note to read first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicStep {
    pub instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_note: Option<String>,
}

/// The procedure body, in either authored form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicProcedure {
    /// Newline-separated plain text.
    Text(String),
    /// Structured steps with inline safety notes.
    Steps(Vec<HeuristicStep>),
}

/// An externally authored field test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heuristic {
    pub id: String,
    pub name: String,
    pub target: HeuristicTarget,
    /// Confidence the candidate must have reached before suggesting this.
    pub min_confidence: ConfidenceLevel,
    pub priority: HeuristicPriority,
    pub category: HeuristicCategory,
    pub procedure: HeuristicProcedure,
    /// How to read the result, one line per outcome.
    pub outcomes: Vec<String>,
}

impl Heuristic {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target: HeuristicTarget,
        min_confidence: ConfidenceLevel,
        priority: HeuristicPriority,
        category: HeuristicCategory,
    ) -> Heuristic {
        Heuristic {
            id: id.into(),
            name: name.into(),
            target,
            min_confidence,
            priority,
            category,
            procedure: HeuristicProcedure::Steps(Vec::new()),
            outcomes: Vec::new(),
        }
    }

    /// Replace the procedure with a plain text block.
    pub fn with_text_procedure(mut self, text: impl Into<String>) -> Heuristic {
        self.procedure = HeuristicProcedure::Text(text.into());
        self
    }

    /// Append a structured step. Discards a text procedure if one was set.
    pub fn with_step(mut self, instruction: impl Into<String>) -> Heuristic {
        self.push_step(HeuristicStep {
            instruction: instruction.into(),
            safety_note: None,
        });
        self
    }

    /// Append a structured step with a safety note.
    pub fn with_noted_step(
        mut self,
        instruction: impl Into<String>,
        note: impl Into<String>,
    ) -> Heuristic {
        self.push_step(HeuristicStep {
            instruction: instruction.into(),
            safety_note: Some(note.into()),
        });
        self
    }

    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Heuristic {
        self.outcomes.push(outcome.into());
        self
    }

    fn push_step(&mut self, step: HeuristicStep) {
        match &mut self.procedure {
            HeuristicProcedure::Steps(steps) => steps.push(step),
            HeuristicProcedure::Text(_) => {
                self.procedure = HeuristicProcedure::Steps(vec![step]);
            }
        }
    }

    /// The procedure flattened to ordered steps, whichever form it was
    /// authored in.
    pub fn steps(&self) -> Vec<HeuristicStep> {
        match &self.procedure {
            HeuristicProcedure::Steps(steps) => steps.clone(),
            HeuristicProcedure::Text(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| HeuristicStep {
                    instruction: line.to_string(),
                    safety_note: None,
                })
                .collect(),
        }
    }
}

static BUILTIN: Lazy<Vec<Heuristic>> = Lazy::new(|| {
    use ConfidenceLevel::*;
    use HeuristicCategory::*;
    use HeuristicPriority::*;

    vec![
        Heuristic::new(
            "amanita-base-excavation",
            "Excavate the stem base",
            HeuristicTarget::Genus(Genus::Amanita),
            Low,
            Critical,
            SafetyDiscrimination,
        )
        .with_noted_step(
            "Dig out the entire stem base with a knife rather than picking the cap off at ground level.",
            "The volva often sits below the soil surface; cutting the stem hides the single most important character.",
        )
        .with_step("Look for a sac, cup or rim of tissue wrapping the swollen base.")
        .with_outcome("Any sac or cup round the base confirms an amanita; treat the find as deadly.")
        .with_outcome("No volva after full excavation weakens the amanita case but does not settle it alone."),
        Heuristic::new(
            "lycoperdon-section-test",
            "Cut the puffball in half",
            HeuristicTarget::Genus(Genus::Lycoperdon),
            Low,
            Critical,
            SafetyDiscrimination,
        )
        .with_noted_step(
            "Slice the fruitbody vertically from top to base with a clean knife.",
            "Never eat any puffball that has not been sectioned; amanita eggs mimic them exactly.",
        )
        .with_step("Examine the cut face in good light for any internal structure.")
        .with_outcome("Pure white, featureless flesh throughout is a true young puffball.")
        .with_outcome("Any cap, gill or stem outline in the section is a buttoned amanita; discard the whole gathering.")
        .with_outcome("Yellow or olive flesh means the puffball is past eating."),
        Heuristic::new(
            "agaricus-cut-and-sniff",
            "Cut-and-sniff the stem base",
            HeuristicTarget::Genus(Genus::Agaricus),
            Moderate,
            Critical,
            SafetyDiscrimination,
        )
        .with_step("Cut the stem lengthways right at the base and watch the cut surface for a minute.")
        .with_step("Smell the cut immediately, then again after thirty seconds.")
        .with_outcome("A chrome-yellow flash at the base plus an inky, phenolic smell is the yellow stainer; reject it.")
        .with_outcome("Faint pink blush and a mushroomy or aniseed smell fit the edible field and horse mushrooms."),
        Heuristic::new(
            "armillaria-print-check",
            "Overnight spore print against funeral bells",
            HeuristicTarget::Genus(Genus::Armillaria),
            Low,
            Critical,
            SafetyDiscrimination,
        )
        .with_noted_step(
            "Take a spore print overnight: cap gill-side down, half on white paper, half on dark, under a glass.",
            "Do not taste or cook any of the gathering until the print is read; funeral bells share the habit and habitat.",
        )
        .with_step("Read the print colour in daylight.")
        .with_outcome("A white print fits honey fungus.")
        .with_outcome("A rusty brown print means funeral bells; discard everything from that log."),
        Heuristic::new(
            "cortinarius-print-check",
            "Spore print to settle a webcap",
            HeuristicTarget::Genus(Genus::Cortinarius),
            Low,
            Critical,
            SafetyDiscrimination,
        )
        .with_noted_step(
            "Take an overnight spore print and check the upper stem for cobwebby cortina threads.",
            "Webcap kidney damage can surface a week or more after the meal; nothing from the gathering is safe until the print is read.",
        )
        .with_step("Read the print colour in daylight.")
        .with_outcome("A rusty brown print with cortina remnants confirms a webcap; reject the gathering.")
        .with_outcome("A white or pale pink print moves the find back towards the blewits and their kin."),
        Heuristic::new(
            "lepista-print-check",
            "Spore print against webcaps",
            HeuristicTarget::Genus(Genus::Lepista),
            Moderate,
            Critical,
            SafetyDiscrimination,
        )
        .with_step("Take an overnight spore print on white paper.")
        .with_step("Check the young stem apex for any cobwebby veil fibres.")
        .with_outcome("A pale pink print with no cortina confirms the blewit.")
        .with_outcome("A rusty print or cobweb veil remnants mean a webcap; reject the gathering."),
        Heuristic::new(
            "cantharellus-ridge-check",
            "Ridge or gill check",
            HeuristicTarget::Genus(Genus::Cantharellus),
            Moderate,
            Critical,
            SafetyDiscrimination,
        )
        .with_step("Run a fingertip across the underside: chanterelle ridges are blunt, shallow and cross-veined.")
        .with_step("Try to flake one ridge off with a thumbnail; true gills separate as thin blades, ridges do not.")
        .with_step("Note the flesh colour inside: chanterelle flesh is pale, not orange throughout.")
        .with_outcome("Blunt forking ridges that will not flake off fit the chanterelle.")
        .with_outcome("Sharp, crowded, knife-edge gills point at the jack-o'-lantern or false chanterelle."),
        Heuristic::new(
            "russulaceae-taste-test",
            "Brittlegill taste test",
            HeuristicTarget::Family(Family::Russulaceae),
            Moderate,
            Standard,
            EdibilityDetermination,
        )
        .with_noted_step(
            "Break off a pea-sized piece of cap flesh and chew it on the tip of the tongue for ten seconds.",
            "Spit everything out and rinse; swallow nothing. The test is only safe once brittle Russulaceae flesh is confirmed.",
        )
        .with_step("Wait a further ten seconds for any delayed burn before judging.")
        .with_outcome("Mild, nutty taste: the find is in the edible group.")
        .with_outcome("Acrid, peppery burn: inedible or sickener group; reject it."),
        Heuristic::new(
            "lactarius-latex-check",
            "Latex colour and colour change",
            HeuristicTarget::Genus(Genus::Lactarius),
            Moderate,
            Standard,
            EdibilityDetermination,
        )
        .with_step("Nick the gills with a fingernail and watch the latex bead.")
        .with_step("Note the colour immediately and again after five minutes on the flesh.")
        .with_outcome("Carrot-orange latex staining green fits the saffron milkcap group.")
        .with_outcome("White latex turning yellow marks several poor or toxic species; reject.")
        .with_outcome("Copious white latex with an acrid burn marks the peppery milkcaps."),
        Heuristic::new(
            "boletus-pore-check",
            "Pore colour and bruising check",
            HeuristicTarget::Genus(Genus::Boletus),
            Moderate,
            Standard,
            EdibilityDetermination,
        )
        .with_step("Check the pore surface colour: white through yellow to olive is the cep group.")
        .with_step("Press the pores and cut the cap; time any colour change.")
        .with_outcome("Unchanging white-to-olive pores fit the choice edible boletes.")
        .with_outcome("Red or orange pores, or an instant deep blue flash, mark the suspect group; leave them."),
        Heuristic::new(
            "macrolepiota-ring-test",
            "Ring and stem check for parasols",
            HeuristicTarget::Genus(Genus::Macrolepiota),
            Moderate,
            Standard,
            SafetyDiscrimination,
        )
        .with_step("Try to slide the ring: a true parasol's double ring moves freely up and down the stem.")
        .with_step("Look for snakeskin banding on the stem and measure the open cap.")
        .with_outcome("Movable ring, snakeskin stem and a cap over 10 cm confirm the parasol.")
        .with_outcome("A fixed ring on a small cap points at the dapperlings; treat as deadly."),
        Heuristic::new(
            "pleurotus-ecology-check",
            "Oyster growth habit check",
            HeuristicTarget::Genus(Genus::Pleurotus),
            Moderate,
            Supplementary,
            EcologicalContext,
        )
        .with_text_procedure(
            "Confirm the caps grow shelf-like from wood, not from soil.\n\
             Check the gills run down into a short, off-centre or absent stem.\n\
             Note the wood: oysters favour standing or fallen broadleaf timber.",
        )
        .with_outcome("Shelving growth on broadleaf wood with decurrent gills fits the oyster mushroom."),
    ]
});

/// The builtin heuristic table.
pub fn builtin_heuristics() -> &'static [Heuristic] {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_sorts_critical_first() {
        let mut priorities = vec![
            HeuristicPriority::Supplementary,
            HeuristicPriority::Critical,
            HeuristicPriority::Standard,
        ];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![
                HeuristicPriority::Critical,
                HeuristicPriority::Standard,
                HeuristicPriority::Supplementary,
            ]
        );
    }

    #[test]
    fn test_category_sorts_safety_first() {
        assert!(HeuristicCategory::SafetyDiscrimination < HeuristicCategory::EdibilityDetermination);
        assert!(HeuristicCategory::EdibilityDetermination < HeuristicCategory::EcologicalContext);
    }

    #[test]
    fn test_family_target_covers_both_russulaceae_genera() {
        let target = HeuristicTarget::Family(Family::Russulaceae);
        assert!(target.applies_to(Genus::Russula));
        assert!(target.applies_to(Genus::Lactarius));
        assert!(!target.applies_to(Genus::Amanita));
    }

    #[test]
    fn test_text_procedure_flattens_on_newlines() {
        let h = Heuristic::new(
            "text-form",
            "Text form",
            HeuristicTarget::Genus(Genus::Pleurotus),
            ConfidenceLevel::Low,
            HeuristicPriority::Standard,
            HeuristicCategory::EcologicalContext,
        )
        .with_text_procedure("first step\n  second step  \n\nthird step");
        let steps = h.steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].instruction, "second step");
        assert!(steps.iter().all(|s| s.safety_note.is_none()));
    }

    #[test]
    fn test_structured_steps_keep_safety_notes() {
        let h = Heuristic::new(
            "steps-form",
            "Steps form",
            HeuristicTarget::Genus(Genus::Lycoperdon),
            ConfidenceLevel::Low,
            HeuristicPriority::Critical,
            HeuristicCategory::SafetyDiscrimination,
        )
        .with_noted_step("cut it", "never skip the cut")
        .with_step("inspect it");
        let steps = h.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].safety_note.as_deref(), Some("never skip the cut"));
        assert_eq!(steps[1].safety_note, None);
    }

    #[test]
    fn test_builtin_taste_test_targets_russulaceae() {
        let taste = builtin_heuristics()
            .iter()
            .find(|h| h.id == "russulaceae-taste-test")
            .unwrap();
        assert_eq!(taste.target, HeuristicTarget::Family(Family::Russulaceae));
        assert_eq!(taste.min_confidence, ConfidenceLevel::Moderate);
        assert!(!taste.steps().is_empty());
    }
}
