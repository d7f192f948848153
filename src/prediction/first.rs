//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Error;
use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolBitSet};

use super::{extend_set, fixed_point, NullableSet, PerSymbolSets};

/// FIRST sets of non-terminals.
///
/// A set contains `ε` when its non-terminal is nullable. The FIRST set of a
/// terminal is the terminal itself and is not stored.
#[derive(Clone, Debug)]
pub struct FirstSets {
    map: PerSymbolSets,
    non_terminals: SymbolBitSet,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// We compute the transitive closure of this relation.
    pub fn new(
        grammar: &Grammar,
        nullable: &NullableSet,
        max_iterations: usize,
    ) -> Result<Self, Error> {
        let mut this = FirstSets {
            map: BTreeMap::new(),
            non_terminals: grammar.non_terminals(),
        };
        for production in grammar.productions() {
            this.map.entry(production.lhs).or_default();
        }

        fixed_point("FIRST", max_iterations, || {
            let mut changed = false;
            for rule in grammar.rules() {
                let lookahead = this.first_set_for_string(nullable, rule.rhs);
                changed |= extend_set(&mut this.map, rule.lhs, &lookahead);
            }
            changed
        })?;

        Ok(this)
    }

    /// Returns a reference to FIRST sets.
    pub fn first_sets(&self) -> &PerSymbolSets {
        &self.map
    }

    /// Returns the FIRST set of a non-terminal.
    pub fn get(&self, sym: Symbol) -> Option<&BTreeSet<Symbol>> {
        self.map.get(&sym)
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// Scans left to right, merging FIRST sets of non-terminals without `ε`.
    /// Stops after the first terminal or the first non-nullable
    /// non-terminal. `ε` is in the result if the whole string is nullable.
    pub fn first_set_for_string(
        &self,
        nullable: &NullableSet,
        string: &[Symbol],
    ) -> BTreeSet<Symbol> {
        let mut result = BTreeSet::new();
        for &sym in string {
            if sym == Symbol::EPSILON {
                continue;
            }
            if !self.non_terminals[sym] {
                result.insert(sym);
                return result;
            }
            if let Some(set) = self.map.get(&sym) {
                result.extend(set.iter().copied().filter(|&s| s != Symbol::EPSILON));
            }
            if !nullable.is_nullable(sym) {
                return result;
            }
        }
        result.insert(Symbol::EPSILON);
        result
    }
}
