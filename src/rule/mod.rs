//! This module defines grammar rules. Each production in a context-free grammar
//! consists of a single symbol on its left-hand side and an ordered list of
//! alternatives, each an ordered string of symbols.

pub mod builder;

use std::ops::Deref;

use crate::symbol::Symbol;

/// One right-hand side choice of a production.
///
/// An alternative may be empty. An empty alternative and the alternative `ε`
/// both derive the empty string.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Alternative {
    symbols: Vec<Symbol>,
}

impl Alternative {
    /// Creates an alternative from a string of symbols.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Alternative { symbols }
    }

    /// Creates the alternative that consists of exactly `ε`.
    pub fn epsilon() -> Self {
        Alternative {
            symbols: vec![Symbol::EPSILON],
        }
    }

    /// Returns the symbols of this alternative.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols[..]
    }

    /// Checks whether this alternative is empty or consists only of `ε`.
    pub fn is_epsilon(&self) -> bool {
        self.symbols.iter().all(|&sym| sym == Symbol::EPSILON)
    }

    /// Returns a copy of this alternative with `sym` appended.
    pub fn with_suffix(&self, sym: Symbol) -> Self {
        let mut symbols = Vec::with_capacity(self.symbols.len() + 1);
        symbols.extend(self.symbols.iter().copied());
        symbols.push(sym);
        Alternative { symbols }
    }
}

impl Deref for Alternative {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.symbols[..]
    }
}

impl From<Vec<Symbol>> for Alternative {
    fn from(symbols: Vec<Symbol>) -> Self {
        Alternative { symbols }
    }
}

impl<'a> From<&'a [Symbol]> for Alternative {
    fn from(symbols: &'a [Symbol]) -> Self {
        Alternative {
            symbols: symbols.to_vec(),
        }
    }
}

/// Grammar production with all of its alternatives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Production {
    /// The production's left-hand side symbol.
    pub lhs: Symbol,
    /// The production's right-hand side choices, in derivation order.
    pub alternatives: Vec<Alternative>,
}

impl Production {
    /// Creates a production.
    pub fn new(lhs: Symbol, alternatives: Vec<Alternative>) -> Self {
        Production { lhs, alternatives }
    }

    /// Iterates over this production's alternatives as rules.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        let lhs = self.lhs;
        self.alternatives
            .iter()
            .enumerate()
            .map(move |(alternative, rhs)| RuleRef {
                lhs,
                rhs: &rhs[..],
                alternative,
            })
    }
}

/// References rule's components.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RuleRef<'a> {
    /// Left-hand side.
    pub lhs: Symbol,
    /// Right-hand side.
    pub rhs: &'a [Symbol],
    /// Index of the alternative within its production.
    pub alternative: usize,
}
