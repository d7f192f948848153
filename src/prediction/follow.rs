//! FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Error;
use crate::grammar::Grammar;
use crate::symbol::Symbol;

use super::{extend_set, fixed_point, FirstSets, NullableSet, PerSymbolSets};

/// FOLLOW sets.
#[derive(Clone, Debug)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// FOLLOW of the start symbol begins as `{#}`. For every occurrence of a
    /// non-terminal `B` in `A → α B β`, FIRST(β) without `ε` is added to
    /// FOLLOW(B), and FOLLOW(A) is added too when β is nullable.
    pub fn new(
        grammar: &Grammar,
        start_sym: Symbol,
        nullable: &NullableSet,
        first_sets: &FirstSets,
        max_iterations: usize,
    ) -> Result<Self, Error> {
        let mut this = FollowSets {
            map: BTreeMap::new(),
        };

        for production in grammar.productions() {
            this.map.entry(production.lhs).or_default();
        }
        this.map
            .entry(start_sym)
            .or_default()
            .insert(Symbol::END_OF_INPUT);

        let non_terminals = grammar.non_terminals();
        fixed_point("FOLLOW", max_iterations, || {
            let mut changed = false;
            for rule in grammar.rules() {
                for (pos, &sym) in rule.rhs.iter().enumerate() {
                    if !non_terminals[sym] {
                        continue;
                    }
                    let mut additions = BTreeSet::new();
                    let mut reaches_end = true;
                    for &next in &rule.rhs[pos + 1..] {
                        if next == Symbol::EPSILON {
                            continue;
                        }
                        if !non_terminals[next] {
                            additions.insert(next);
                            reaches_end = false;
                            break;
                        }
                        if let Some(first_set) = first_sets.get(next) {
                            additions.extend(
                                first_set.iter().copied().filter(|&s| s != Symbol::EPSILON),
                            );
                        }
                        if !nullable.is_nullable(next) {
                            reaches_end = false;
                            break;
                        }
                    }
                    if reaches_end {
                        if let Some(lhs_follow) = this.map.get(&rule.lhs) {
                            additions.extend(lhs_follow.iter().copied());
                        }
                    }
                    changed |= extend_set(&mut this.map, sym, &additions);
                }
            }
            changed
        })?;

        Ok(this)
    }

    /// Returns a reference to FOLLOW sets.
    pub fn follow_sets(&self) -> &PerSymbolSets {
        &self.map
    }

    /// Returns the FOLLOW set of a non-terminal.
    pub fn get(&self, sym: Symbol) -> Option<&BTreeSet<Symbol>> {
        self.map.get(&sym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_sets() {
        let grammar = Grammar::load("S", "S -> AB\nA -> aA|ε\nB -> bBc|").unwrap();
        let nullable = NullableSet::new(&grammar, 100).unwrap();
        let first = FirstSets::new(&grammar, &nullable, 100).unwrap();
        let start = grammar.start().unwrap();
        let follow = FollowSets::new(&grammar, start, &nullable, &first, 100).unwrap();
        let [a, b, lower_b, lower_c] =
            ["A", "B", "b", "c"].map(|n| grammar.sym_source().get(n).unwrap());

        assert_eq!(follow.get(start), Some(&BTreeSet::from([Symbol::END_OF_INPUT])));
        assert_eq!(
            follow.get(a),
            Some(&BTreeSet::from([Symbol::END_OF_INPUT, lower_b]))
        );
        assert_eq!(
            follow.get(b),
            Some(&BTreeSet::from([Symbol::END_OF_INPUT, lower_c]))
        );
    }

    #[test]
    fn test_iteration_limit() {
        let grammar = Grammar::load("S", "S -> A\nA -> B\nB -> b").unwrap();
        let nullable = NullableSet::new(&grammar, 100).unwrap();
        let first = FirstSets::new(&grammar, &nullable, 100).unwrap();
        let start = grammar.start().unwrap();
        let err = FollowSets::new(&grammar, start, &nullable, &first, 1).unwrap_err();
        assert_eq!(
            err,
            Error::FixedPointLimit {
                set: "FOLLOW",
                iterations: 1
            }
        );
        assert!(FollowSets::new(&grammar, start, &nullable, &first, 10).is_ok());
    }
}
