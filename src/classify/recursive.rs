//! Detection of left recursion, including indirect left recursion.

use bit_matrix::BitMatrix;
use log::trace;

use crate::grammar::Grammar;
use crate::prediction::NullableSet;
use crate::symbol::{Symbol, SymbolBitSet};

/// The left-corner relation of a grammar and its transitive closure.
///
/// `A` is related to `B` when the grammar has a rule `A → α B β` where
/// `α` is nullable. A non-terminal is left-recursive when it is related
/// to itself after closure.
pub struct LeftRecursion {
    left_corner: BitMatrix,
    non_terminals: SymbolBitSet,
}

impl LeftRecursion {
    /// Computes the closed left-corner relation.
    pub fn new(grammar: &Grammar, nullable: &NullableSet) -> Self {
        let num_syms = grammar.num_syms();
        let non_terminals = grammar.non_terminals();
        let mut left_corner = BitMatrix::new(num_syms, num_syms);

        for rule in grammar.rules() {
            for &sym in rule.rhs {
                if sym == Symbol::EPSILON {
                    continue;
                }
                if !non_terminals[sym] {
                    break;
                }
                left_corner.set(rule.lhs.usize(), sym.usize(), true);
                if !nullable.is_nullable(sym) {
                    break;
                }
            }
        }

        left_corner.transitive_closure();

        LeftRecursion {
            left_corner,
            non_terminals,
        }
    }

    /// Checks whether `lhs` can derive a string that starts with `lhs`.
    pub fn is_left_recursive(&self, lhs: Symbol) -> bool {
        self.non_terminals[lhs] && self.left_corner[(lhs.usize(), lhs.usize())]
    }

    /// Returns every left-recursive non-terminal, in symbol order.
    pub fn left_recursive(&self) -> Vec<Symbol> {
        let result = self
            .non_terminals
            .iter()
            .filter(|&sym| self.is_left_recursive(sym))
            .collect::<Vec<_>>();
        trace!("left-recursive symbols: {:?}", result);
        result
    }
}
