//! All derived sets of a grammar, computed together.

use std::collections::BTreeSet;

use log::debug;

use crate::classify::LeftRecursion;
use crate::config::Config;
use crate::error::Error;
use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolBitSet};

use super::{FirstSets, FollowSets, NullableSet, PerSymbolSets};

/// Nullable, FIRST and FOLLOW sets of one grammar, along with the
/// terminal/non-terminal split they were computed with.
#[derive(Clone, Debug)]
pub struct GrammarSets {
    start: Symbol,
    non_terminals: SymbolBitSet,
    nullable: NullableSet,
    first: FirstSets,
    follow: FollowSets,
}

impl GrammarSets {
    /// Validates the grammar and computes its derived sets.
    ///
    /// Fails with [`Error::LeftRecursion`] for grammars whose left recursion
    /// survived normalization.
    pub fn new(grammar: &Grammar, config: &Config) -> Result<Self, Error> {
        grammar.validate()?;
        let start = grammar.start().ok_or(Error::MissingStart)?;
        let nullable = NullableSet::new(grammar, config.max_iterations)?;

        let left_recursive = LeftRecursion::new(grammar, &nullable).left_recursive();
        if !left_recursive.is_empty() {
            return Err(Error::LeftRecursion {
                symbols: left_recursive
                    .into_iter()
                    .map(|sym| grammar.name(sym).to_string())
                    .collect(),
            });
        }

        let first = FirstSets::new(grammar, &nullable, config.max_iterations)?;
        let follow = FollowSets::new(grammar, start, &nullable, &first, config.max_iterations)?;
        debug!(
            "computed sets for {} non-terminals, {} nullable",
            first.first_sets().len(),
            nullable.symbols().count()
        );
        Ok(GrammarSets {
            start,
            non_terminals: grammar.non_terminals(),
            nullable,
            first,
            follow,
        })
    }

    /// The start symbol the FOLLOW sets were seeded from.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Checks whether a symbol is terminal. `ε` and `#` are terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        !self.non_terminals[sym]
    }

    /// Checks whether a non-terminal derives the empty string.
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.nullable.is_nullable(sym)
    }

    /// Checks whether a string of symbols derives the empty string.
    pub fn is_all_nullable(&self, string: &[Symbol]) -> bool {
        self.nullable.is_all_nullable(string)
    }

    /// Calculates the FIRST set of a string of symbols.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> BTreeSet<Symbol> {
        self.first.first_set_for_string(&self.nullable, string)
    }

    /// Returns the FOLLOW set of a non-terminal, or the empty set.
    pub fn follow(&self, sym: Symbol) -> BTreeSet<Symbol> {
        self.follow.get(sym).cloned().unwrap_or_default()
    }

    /// Calculates the Select set of the alternative `lhs → string`.
    ///
    /// If the first symbol that is not `ε` is a terminal, the set is just
    /// that terminal. Otherwise, a nullable string selects on FIRST of the
    /// string without `ε` together with FOLLOW of `lhs`, and any other string
    /// selects on its FIRST set. The result never contains `ε`.
    pub fn select_set(&self, lhs: Symbol, string: &[Symbol]) -> BTreeSet<Symbol> {
        let leading = string.iter().copied().find(|&sym| sym != Symbol::EPSILON);
        if let Some(sym) = leading {
            if self.is_terminal(sym) {
                return BTreeSet::from([sym]);
            }
        }
        let mut result = self.first_set_for_string(string);
        result.remove(&Symbol::EPSILON);
        if self.is_all_nullable(string) {
            result.extend(self.follow(lhs));
        }
        result
    }

    /// Returns the nullable non-terminals.
    pub fn nullable(&self) -> &NullableSet {
        &self.nullable
    }

    /// Returns FIRST sets of all non-terminals.
    pub fn first_sets(&self) -> &PerSymbolSets {
        self.first.first_sets()
    }

    /// Returns FOLLOW sets of all non-terminals.
    pub fn follow_sets(&self) -> &PerSymbolSets {
        self.follow.follow_sets()
    }
}
