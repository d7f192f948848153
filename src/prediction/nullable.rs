//! Nullable non-terminals.

use crate::error::Error;
use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolBitSet};

use super::fixed_point;

/// The set of non-terminals that derive the empty string.
#[derive(Clone, Debug)]
pub struct NullableSet {
    set: SymbolBitSet,
}

impl NullableSet {
    /// Computes the nullable non-terminals of the grammar.
    ///
    /// Every non-terminal starts out not nullable. A non-terminal becomes
    /// nullable once some alternative consists only of `ε` and nullable
    /// non-terminals. The empty alternative qualifies.
    pub fn new(grammar: &Grammar, max_iterations: usize) -> Result<Self, Error> {
        let mut set = SymbolBitSet::from_elem(grammar.sym_source(), false);
        fixed_point("Nullable", max_iterations, || {
            let mut changed = false;
            for production in grammar.productions() {
                if set[production.lhs] {
                    continue;
                }
                let nullable = production
                    .alternatives
                    .iter()
                    .any(|alt| alt.iter().all(|&sym| sym == Symbol::EPSILON || set[sym]));
                if nullable {
                    set.set(production.lhs, true);
                    changed = true;
                }
            }
            changed
        })?;
        Ok(NullableSet { set })
    }

    /// Checks whether a non-terminal is nullable. Terminals never are.
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.set[sym]
    }

    /// Checks whether every symbol of the string is `ε` or a nullable
    /// non-terminal. The empty string is nullable.
    pub fn is_all_nullable(&self, string: &[Symbol]) -> bool {
        string
            .iter()
            .all(|&sym| sym == Symbol::EPSILON || self.set[sym])
    }

    /// Returns the nullable non-terminals as a set.
    pub fn symbols(&self) -> &SymbolBitSet {
        &self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitive_nullable() {
        let grammar = Grammar::load("S", "S -> AB|a\nA -> ε|x\nB -> A|\nC -> Cc|y").unwrap();
        let nullable = NullableSet::new(&grammar, 100).unwrap();
        let [s, a, b, c, x] = ["S", "A", "B", "C", "x"].map(|n| grammar.sym_source().get(n).unwrap());
        assert!(nullable.is_nullable(s));
        assert!(nullable.is_nullable(a));
        assert!(nullable.is_nullable(b));
        assert!(!nullable.is_nullable(c));
        assert!(!nullable.is_nullable(x));
        assert!(nullable.is_all_nullable(&[]));
        assert!(nullable.is_all_nullable(&[a, Symbol::EPSILON, b]));
        assert!(!nullable.is_all_nullable(&[a, x]));
    }

    #[test]
    fn test_iteration_limit() {
        let grammar = Grammar::load("S", "S -> A\nA -> B\nB -> ε").unwrap();
        let err = NullableSet::new(&grammar, 1).unwrap_err();
        assert_eq!(
            err,
            Error::FixedPointLimit {
                set: "Nullable",
                iterations: 1
            }
        );
        assert!(NullableSet::new(&grammar, 10).is_ok());
    }
}
