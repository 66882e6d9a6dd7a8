//! Free-text mining of the description notes.
//!
//! Two pattern families run over the prose: negations ("no milk", "does not
//! deliquesce") and explicit genus exclusions ("can't be Amanita"). A
//! negation that overlaps the search value of a supporting notes rule
//! synthesises a contradiction at that rule's own tier; a recognised genus
//! exclusion synthesises a strong contradiction. Synthetic rules live for
//! one call only and are never exclusionary: prose parsing is approximate,
//! so it must never hard-eliminate on its own.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use sporeprint_common::{
    EvidenceTier, FeatureRule, Genus, Observation, ObservationField, RuleSet, RuleTest,
};

/// What the preprocessor extracted and synthesised from one observation.
#[derive(Debug, Clone, Default)]
pub struct NotesAnalysis {
    /// Terms the prose declares absent, tidied and deduplicated.
    pub negated_terms: Vec<String>,
    /// Genera the prose explicitly rules out.
    pub excluded_genera: Vec<Genus>,
    /// Per-call contra-rules, appended to the rule set for this call only.
    pub synthetic_rules: Vec<FeatureRule>,
}

impl NotesAnalysis {
    pub fn is_empty(&self) -> bool {
        self.synthetic_rules.is_empty()
    }
}

// Longer alternatives first: the alternation is first-match-wins, so "not"
// must be tried before "no" and "does not" before either.
static NEGATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:does\s+not|doesn['’]?t|isn['’]?t|hasn['’]?t|absence\s+of|without|never|lacks|not|no)\s+(?:a\s+|an\s+|the\s+|any\s+)?([a-z][a-z\- ]{2,40})",
    )
    .unwrap()
});

static EXCLUSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:rule[sd]?\s+out|exclude[sd]?|can(?:not|['’]t)\s+be|(?:probably|definitely)\s+not|unlikely(?:\s+to\s+be)?|not)(?:\s+(?:a|an|the))?\s+([a-z]+)",
    )
    .unwrap()
});

/// Mine the description notes and synthesise per-call contra-rules.
///
/// Returns an empty analysis when there are no notes. Nothing here is
/// persisted; the caller extends its rule set for the one scoring pass.
pub fn preprocess_notes(observation: &Observation, rules: &RuleSet) -> NotesAnalysis {
    let Some(notes) = observation.description_notes.as_deref() else {
        return NotesAnalysis::default();
    };
    let notes = notes.trim();
    if notes.is_empty() {
        return NotesAnalysis::default();
    }

    let mut analysis = NotesAnalysis::default();

    for cap in NEGATION_RE.captures_iter(notes) {
        let term = tidy_term(&cap[1]);
        if term.len() < 3 {
            continue;
        }
        if !analysis.negated_terms.contains(&term) {
            analysis.negated_terms.push(term);
        }
    }

    // A negated term that overlaps a supporting notes rule turns that
    // rule's evidence on its head: same tier, opposite polarity.
    let mut countered: Vec<&str> = Vec::new();
    for term in &analysis.negated_terms {
        for rule in rules.supporting_on_field(ObservationField::DescriptionNotes) {
            let Some(needle) = search_value(&rule.test) else {
                continue;
            };
            if !overlaps(term, needle) || countered.contains(&rule.id.as_str()) {
                continue;
            }
            countered.push(&rule.id);
            analysis.synthetic_rules.push(FeatureRule::contradicts(
                format!("notes-negates-{}", rule.id),
                rule.genus,
                ObservationField::DescriptionNotes,
                RuleTest::Present,
                rule.tier,
                format!("the notes negate '{}', countering: {}", term, rule.description),
            ));
        }
    }

    for cap in EXCLUSION_RE.captures_iter(notes) {
        let Some(genus) = Genus::from_name(&cap[1]) else {
            continue;
        };
        if analysis.excluded_genera.contains(&genus) {
            continue;
        }
        analysis.excluded_genera.push(genus);
        analysis.synthetic_rules.push(FeatureRule::contradicts(
            format!("notes-excludes-{}", genus.name().to_ascii_lowercase()),
            genus,
            ObservationField::DescriptionNotes,
            RuleTest::Present,
            EvidenceTier::Strong,
            format!("the notes explicitly rule out {}", genus),
        ));
    }

    if !analysis.is_empty() {
        debug!(
            negations = analysis.negated_terms.len(),
            exclusions = analysis.excluded_genera.len(),
            synthesised = analysis.synthetic_rules.len(),
            "mined the description notes"
        );
    }
    analysis
}

/// The searchable text of a notes predicate, if it has one.
fn search_value(test: &RuleTest) -> Option<&str> {
    match test {
        RuleTest::TextContains(s) | RuleTest::TextEquals(s) => Some(s),
        _ => None,
    }
}

/// Either-direction substring overlap, case-insensitive.
fn overlaps(term: &str, needle: &str) -> bool {
    let term = term.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    term.contains(&needle) || needle.contains(&term)
}

/// Lowercase the captured term and cut it at the first clause joiner, so
/// "milk when cut and the cap is dry" reduces to "milk".
fn tidy_term(raw: &str) -> String {
    let mut term = raw.trim().to_ascii_lowercase();
    for joiner in [" and ", " but ", " or ", " when ", " with ", " which ", " that ", " then "] {
        if let Some(pos) = term.find(joiner) {
            term.truncate(pos);
        }
    }
    term.trim().to_string()
}
