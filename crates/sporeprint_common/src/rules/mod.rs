//! The feature rule base.
//!
//! A rule is one declarative fact: this field, matching this predicate,
//! supports or contradicts this genus at this evidence tier. Rules are pure
//! data; the scorer never mutates the set at runtime. The builtin set is
//! assembled once from the per-character modules below and kept in authoring
//! order, which is the deterministic iteration order the diminishing-returns
//! scoring depends on.

mod cap;
mod ecology;
mod flesh;
mod hymenium;
mod notes;
mod spore;
mod stem;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::genus::Genus;
use crate::observation::{FieldValue, ObservationField};

/// Categorical weight and elimination power of one observed feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceTier {
    /// Near-certain on its own (a volval sac, a true pore layer).
    Definitive,
    Strong,
    Moderate,
    Weak,
    /// One match rules the genus out entirely.
    Exclusionary,
}

impl EvidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceTier::Definitive => "definitive",
            EvidenceTier::Strong => "strong",
            EvidenceTier::Moderate => "moderate",
            EvidenceTier::Weak => "weak",
            EvidenceTier::Exclusionary => "exclusionary",
        }
    }
}

impl std::fmt::Display for EvidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Match predicate for one observation field.
///
/// Total over every input: a value of the wrong shape simply does not match,
/// it is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTest {
    /// Field carries no value.
    Absent,
    /// Field carries any value.
    Present,
    /// Case-insensitive text equality. List fields match on any element.
    TextEquals(String),
    /// Case-insensitive substring containment. List fields match on any
    /// element.
    TextContains(String),
    /// Case-insensitive membership in a fixed vocabulary.
    TextOneOf(Vec<String>),
    /// Boolean field equals.
    FlagIs(bool),
    /// Inclusive numeric range.
    NumberBetween { min: f64, max: f64 },
    /// Inclusive month range; wraps across the new year when `from > to`.
    MonthBetween { from: u32, to: u32 },
}

fn text_matches(value: &str, test: &RuleTest) -> bool {
    let value = value.trim();
    match test {
        RuleTest::TextEquals(want) => value.eq_ignore_ascii_case(want),
        RuleTest::TextContains(needle) => {
            value.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
        }
        RuleTest::TextOneOf(options) => {
            options.iter().any(|opt| value.eq_ignore_ascii_case(opt))
        }
        _ => false,
    }
}

impl RuleTest {
    pub fn equals(value: impl Into<String>) -> RuleTest {
        RuleTest::TextEquals(value.into())
    }

    pub fn contains(value: impl Into<String>) -> RuleTest {
        RuleTest::TextContains(value.into())
    }

    pub fn one_of(options: &[&str]) -> RuleTest {
        RuleTest::TextOneOf(options.iter().map(|s| s.to_string()).collect())
    }

    pub fn flag(value: bool) -> RuleTest {
        RuleTest::FlagIs(value)
    }

    pub fn between(min: f64, max: f64) -> RuleTest {
        RuleTest::NumberBetween { min, max }
    }

    pub fn months(from: u32, to: u32) -> RuleTest {
        RuleTest::MonthBetween { from, to }
    }

    /// Nullity-testing predicates are evaluated even on unobserved fields;
    /// everything else needs a value first.
    pub fn tests_nullity(&self) -> bool {
        matches!(self, RuleTest::Absent | RuleTest::Present)
    }

    /// Evaluate against a field value. `None` means the field was not
    /// observed.
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        match (self, value) {
            (RuleTest::Absent, None) => true,
            (RuleTest::Absent, Some(_)) => false,
            (RuleTest::Present, v) => v.is_some(),
            (_, None) => false,
            (test, Some(FieldValue::Text(s))) => text_matches(s, test),
            (test, Some(FieldValue::List(items))) => {
                items.iter().any(|item| text_matches(item, test))
            }
            (RuleTest::FlagIs(want), Some(FieldValue::Flag(actual))) => want == actual,
            (RuleTest::NumberBetween { min, max }, Some(FieldValue::Number(n))) => {
                *n >= *min && *n <= *max
            }
            (RuleTest::MonthBetween { from, to }, Some(FieldValue::Month(m))) => {
                if from <= to {
                    m >= from && m <= to
                } else {
                    m >= from || m <= to
                }
            }
            // Shape mismatch: not a match, not an error.
            _ => false,
        }
    }
}

/// One atomic identification fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRule {
    pub id: String,
    pub genus: Genus,
    pub field: ObservationField,
    pub test: RuleTest,
    pub tier: EvidenceTier,
    /// True when a match argues for the genus, false when it argues against.
    pub supporting: bool,
    /// Field-guide phrasing, reused verbatim in explanations.
    pub description: String,
}

impl FeatureRule {
    pub fn supports(
        id: impl Into<String>,
        genus: Genus,
        field: ObservationField,
        test: RuleTest,
        tier: EvidenceTier,
        description: impl Into<String>,
    ) -> FeatureRule {
        FeatureRule {
            id: id.into(),
            genus,
            field,
            test,
            tier,
            supporting: true,
            description: description.into(),
        }
    }

    pub fn contradicts(
        id: impl Into<String>,
        genus: Genus,
        field: ObservationField,
        test: RuleTest,
        tier: EvidenceTier,
        description: impl Into<String>,
    ) -> FeatureRule {
        FeatureRule {
            id: id.into(),
            genus,
            field,
            test,
            tier,
            supporting: false,
            description: description.into(),
        }
    }

    /// A contradiction at exclusionary tier: one match rules the genus out.
    pub fn excludes(
        id: impl Into<String>,
        genus: Genus,
        field: ObservationField,
        test: RuleTest,
        description: impl Into<String>,
    ) -> FeatureRule {
        FeatureRule::contradicts(id, genus, field, test, EvidenceTier::Exclusionary, description)
    }
}

/// An ordered collection of feature rules.
///
/// Order is authoring order and is load-bearing: the scorer's
/// diminishing-returns series walks matches in this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<FeatureRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<FeatureRule>) -> RuleSet {
        RuleSet { rules }
    }

    pub fn rules(&self) -> &[FeatureRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules for one genus, in authoring order.
    pub fn for_genus(&self, genus: Genus) -> Vec<&FeatureRule> {
        self.rules.iter().filter(|r| r.genus == genus).collect()
    }

    /// Genera that have at least one authored rule.
    pub fn genera(&self) -> BTreeSet<Genus> {
        self.rules.iter().map(|r| r.genus).collect()
    }

    /// Supporting rules that target `field`, in authoring order.
    pub fn supporting_on_field(&self, field: ObservationField) -> Vec<&FeatureRule> {
        self.rules
            .iter()
            .filter(|r| r.supporting && r.field == field)
            .collect()
    }

    /// A new set with `extra` appended after the authored rules. Used for
    /// per-call synthetic rules; the builtin set is never modified.
    pub fn extended(&self, extra: Vec<FeatureRule>) -> RuleSet {
        let mut rules = self.rules.clone();
        rules.extend(extra);
        RuleSet { rules }
    }
}

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
    let mut rules = Vec::new();
    rules.extend(cap::rules());
    rules.extend(hymenium::rules());
    rules.extend(stem::rules());
    rules.extend(flesh::rules());
    rules.extend(spore::rules());
    rules.extend(ecology::rules());
    rules.extend(notes::rules());
    RuleSet::new(rules)
});

/// The builtin rule base, assembled once.
pub fn builtin_rules() -> &'static RuleSet {
    &BUILTIN
}
