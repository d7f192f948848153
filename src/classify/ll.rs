//! The LL(1) grammar class.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::grammar::Grammar;
use crate::prediction::GrammarSets;
use crate::symbol::Symbol;

/// Select sets of one pair of alternatives of the same non-terminal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectCheck {
    /// The non-terminal.
    pub lhs: Symbol,
    /// Index of the earlier alternative.
    pub first: usize,
    /// Index of the later alternative.
    pub second: usize,
    /// Select set of the earlier alternative.
    pub first_select: BTreeSet<Symbol>,
    /// Select set of the later alternative.
    pub second_select: BTreeSet<Symbol>,
    /// Lookahead terminals that select both alternatives.
    pub intersection: BTreeSet<Symbol>,
}

impl SelectCheck {
    /// Checks whether the two alternatives collide on some lookahead.
    pub fn is_conflict(&self) -> bool {
        !self.intersection.is_empty()
    }
}

/// Container for classifying nonterminals as LL(1) or conflicting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LlClassification {
    checks: Vec<SelectCheck>,
    classes: BTreeMap<Symbol, LlNonterminalClass>,
}

/// A nonterminal class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Two of the alternatives share a lookahead.
    Conflicting,
}

impl LlClassification {
    /// Compares the Select sets of every pair of alternatives, for every
    /// non-terminal.
    pub fn new(grammar: &Grammar, sets: &GrammarSets) -> Self {
        let mut result = LlClassification {
            checks: vec![],
            classes: BTreeMap::new(),
        };
        for production in grammar.productions() {
            let lhs = production.lhs;
            let selects = production
                .alternatives
                .iter()
                .map(|alt| sets.select_set(lhs, &alt[..]))
                .collect::<Vec<_>>();
            let mut class = LlNonterminalClass::Ll1;
            for (first, first_select) in selects.iter().enumerate() {
                for (second, second_select) in selects.iter().enumerate().skip(first + 1) {
                    let intersection = first_select
                        .intersection(second_select)
                        .copied()
                        .collect::<BTreeSet<_>>();
                    if !intersection.is_empty() {
                        warn!(
                            "{} -> {} and {} -> {} both select on {}",
                            grammar.name(lhs),
                            grammar.sym_source().stringify(&production.alternatives[first]),
                            grammar.name(lhs),
                            grammar.sym_source().stringify(&production.alternatives[second]),
                            grammar
                                .sym_source()
                                .stringify(&intersection.iter().copied().collect::<Vec<_>>()),
                        );
                        class = LlNonterminalClass::Conflicting;
                    }
                    result.checks.push(SelectCheck {
                        lhs,
                        first,
                        second,
                        first_select: first_select.clone(),
                        second_select: second_select.clone(),
                        intersection,
                    });
                }
            }
            result.classes.insert(lhs, class);
        }
        debug!(
            "checked {} pairs of alternatives, {} conflicting",
            result.checks.len(),
            result.conflicts().count()
        );
        result
    }

    /// Checks whether no pair of alternatives conflicts.
    pub fn is_ll1(&self) -> bool {
        self.classes
            .values()
            .all(|&class| class == LlNonterminalClass::Ll1)
    }

    /// Access all pairwise checks, in production order.
    pub fn checks(&self) -> &[SelectCheck] {
        &self.checks[..]
    }

    /// Iterates over conflicting pairs.
    pub fn conflicts(&self) -> impl Iterator<Item = &SelectCheck> {
        self.checks.iter().filter(|check| check.is_conflict())
    }

    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<Symbol, LlNonterminalClass> {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn classify(text: &str) -> (Grammar, LlClassification) {
        let grammar = Grammar::load("S", text).unwrap();
        let sets = GrammarSets::new(&grammar, &Config::default()).unwrap();
        let classification = LlClassification::new(&grammar, &sets);
        (grammar, classification)
    }

    #[test]
    fn test_ll1() {
        let (grammar, classification) = classify("S -> aA|b\nA -> c|ε");
        assert!(classification.is_ll1());
        assert_eq!(classification.checks().len(), 2);
        assert_eq!(classification.conflicts().count(), 0);
        let s = grammar.start().unwrap();
        assert_eq!(classification.classes()[&s], LlNonterminalClass::Ll1);
    }

    #[test]
    fn test_first_first_conflict() {
        let (grammar, classification) = classify("S -> aA|aB\nA -> c\nB -> d");
        assert!(!classification.is_ll1());
        let [s, a, lower_a] = ["S", "A", "a"].map(|n| grammar.sym_source().get(n).unwrap());
        let conflict = classification.conflicts().next().unwrap();
        assert_eq!((conflict.lhs, conflict.first, conflict.second), (s, 0, 1));
        assert_eq!(conflict.intersection, BTreeSet::from([lower_a]));
        assert_eq!(classification.classes()[&s], LlNonterminalClass::Conflicting);
        assert_eq!(classification.classes()[&a], LlNonterminalClass::Ll1);
    }

    #[test]
    fn test_first_follow_conflict() {
        let (grammar, classification) = classify("S -> Ac\nA -> c|ε");
        let [a, c] = ["A", "c"].map(|n| grammar.sym_source().get(n).unwrap());
        let conflicts = classification.conflicts().collect::<Vec<_>>();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].lhs, a);
        assert_eq!(conflicts[0].intersection, BTreeSet::from([c]));
    }
}
