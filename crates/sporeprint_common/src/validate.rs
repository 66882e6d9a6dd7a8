//! Authoring-time validation of the static datasets.
//!
//! A genus with zero rules, a duplicate id or a supporting rule that would
//! match an empty observation are authoring defects, not runtime
//! conditions. The checks collect every problem rather than stopping at
//! the first so a dataset edit gets one complete report.

use std::collections::HashSet;

use crate::error::DatasetError;
use crate::genus::Genus;
use crate::heuristics::Heuristic;
use crate::profiles::profile_for;
use crate::rules::{EvidenceTier, RuleSet, RuleTest};
use crate::safety::{is_dangerous, LOOKALIKE_PAIRS};

/// Validate a rule set and heuristic table together with the builtin
/// profile and lookalike tables. Empty result means everything holds.
pub fn validate_datasets(rules: &RuleSet, heuristics: &[Heuristic]) -> Vec<DatasetError> {
    let mut errors = Vec::new();
    validate_rules(rules, &mut errors);
    validate_heuristics(heuristics, &mut errors);
    validate_static_tables(&mut errors);
    errors
}

fn validate_rules(rules: &RuleSet, errors: &mut Vec<DatasetError>) {
    let covered = rules.genera();
    for genus in Genus::ALL {
        if !covered.contains(&genus) {
            errors.push(DatasetError::GenusWithoutRules(genus));
        }
    }

    let mut seen_ids = HashSet::new();
    for rule in rules.rules() {
        if !seen_ids.insert(rule.id.clone()) {
            errors.push(DatasetError::DuplicateRuleId(rule.id.clone()));
        }
        if rule.supporting && rule.tier == EvidenceTier::Exclusionary {
            errors.push(DatasetError::ExclusionarySupport(rule.id.clone()));
        }
        if rule.supporting && matches!(rule.test, RuleTest::Absent) {
            errors.push(DatasetError::AbsenceSupport(rule.id.clone()));
        }
        if rule.description.trim().is_empty() {
            errors.push(DatasetError::EmptyDescription(rule.id.clone()));
        }
        match &rule.test {
            RuleTest::NumberBetween { min, max } if min > max => {
                errors.push(DatasetError::InvertedRange(rule.id.clone()));
            }
            RuleTest::MonthBetween { from, to } => {
                for month in [from, to] {
                    if !(1..=12).contains(month) {
                        errors.push(DatasetError::InvalidMonth(rule.id.clone()));
                    }
                }
            }
            RuleTest::TextOneOf(options) if options.is_empty() => {
                errors.push(DatasetError::EmptyVocabulary(rule.id.clone()));
            }
            _ => {}
        }
    }
}

fn validate_heuristics(heuristics: &[Heuristic], errors: &mut Vec<DatasetError>) {
    let mut seen_ids = HashSet::new();
    for heuristic in heuristics {
        if !seen_ids.insert(heuristic.id.clone()) {
            errors.push(DatasetError::DuplicateHeuristicId(heuristic.id.clone()));
        }
        if heuristic.steps().is_empty() {
            errors.push(DatasetError::EmptyProcedure(heuristic.id.clone()));
        }
        if heuristic.outcomes.is_empty() {
            errors.push(DatasetError::NoOutcomes(heuristic.id.clone()));
        }
        if !Genus::ALL.iter().any(|g| heuristic.target.applies_to(*g)) {
            errors.push(DatasetError::TargetWithoutGenera(heuristic.id.clone()));
        }
    }
}

fn validate_static_tables(errors: &mut Vec<DatasetError>) {
    for genus in Genus::ALL {
        if profile_for(genus).is_none() {
            errors.push(DatasetError::GenusWithoutProfile(genus));
        }
    }
    for pair in LOOKALIKE_PAIRS {
        if pair.sought == pair.dangerous {
            errors.push(DatasetError::SelfLookalike(pair.sought));
        }
        if !is_dangerous(pair.dangerous) {
            errors.push(DatasetError::DangerousSideUnlisted(pair.dangerous));
        }
    }
}
