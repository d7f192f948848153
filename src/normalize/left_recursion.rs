//! Elimination of immediate left recursion.
//!
//! `A → Aα₁ | … | Aαₘ | β₁ | … | βₙ` becomes `A → β₁A' | … | βₙA'` and
//! `A' → α₁A' | … | αₘA' | ε`.

use std::mem;

use log::trace;

use crate::grammar::Grammar;
use crate::rule::{Alternative, Production};
use crate::symbol::Symbol;

impl Grammar {
    /// Eliminates immediate left recursion from every production.
    ///
    /// Indirect left recursion is not removed. Returns the new non-terminals.
    pub fn eliminate_left_recursion(&mut self) -> Vec<Symbol> {
        let productions = mem::take(self.productions_mut());
        let mut rewritten = Vec::with_capacity(productions.len());
        let mut added = vec![];

        for production in productions {
            let lhs = production.lhs;
            let (recursive, other): (Vec<_>, Vec<_>) = production
                .alternatives
                .into_iter()
                .partition(|alt| alt.first() == Some(&lhs));
            if recursive.is_empty() {
                rewritten.push(Production::new(lhs, other));
                continue;
            }
            let base = self.name(lhs).to_string();
            let primed = self.sym_source_mut().fresh_primed(&base);
            trace!(
                "{} has {} left-recursive alternative(s), introducing {}",
                base,
                recursive.len(),
                self.name(primed)
            );
            let alternatives = other
                .iter()
                .map(|beta| {
                    if beta.is_epsilon() {
                        Alternative::new(vec![primed])
                    } else {
                        beta.with_suffix(primed)
                    }
                })
                .collect();
            rewritten.push(Production::new(lhs, alternatives));
            // `A → A` has an empty tail and derives nothing new.
            let mut tails = recursive
                .iter()
                .filter(|alt| alt.len() > 1)
                .map(|alt| Alternative::from(&alt[1..]).with_suffix(primed))
                .collect::<Vec<_>>();
            tails.push(Alternative::epsilon());
            added.push(Production::new(primed, tails));
        }

        let new_syms = added.iter().map(|prod| prod.lhs).collect();
        rewritten.extend(added);
        *self.productions_mut() = rewritten;
        new_syms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eliminate_immediate_left_recursion() {
        let mut grammar = Grammar::load("E", "E -> E+T|T\nT -> i").unwrap();
        let added = grammar.eliminate_left_recursion();
        assert_eq!(added.len(), 1);
        assert_eq!(grammar.name(added[0]), "E'");
        assert_eq!(grammar.stringify(), "E -> TE'\nT -> i\nE' -> +TE'|ε\n");
        let e = grammar.start().unwrap();
        for production in grammar.productions() {
            for alternative in &production.alternatives {
                assert_ne!(alternative.first(), Some(&production.lhs));
            }
        }
        assert!(grammar.production(e).is_some());
    }

    #[test]
    fn test_self_loop_and_epsilon_base() {
        let mut grammar = Grammar::load("A", "A -> A|Ab|ε").unwrap();
        grammar.eliminate_left_recursion();
        assert_eq!(grammar.stringify(), "A -> A'\nA' -> bA'|ε\n");
    }

    #[test]
    fn test_only_recursive_alternatives() {
        let mut grammar = Grammar::load("A", "A -> Aa").unwrap();
        grammar.eliminate_left_recursion();
        assert!(grammar.production(grammar.start().unwrap()).unwrap().alternatives.is_empty());
        assert!(grammar.validate().is_err());
    }

    #[test]
    fn test_no_recursion_is_untouched() {
        let mut grammar = Grammar::load("S", "S -> aS|b").unwrap();
        assert!(grammar.eliminate_left_recursion().is_empty());
        assert_eq!(grammar.stringify(), "S -> aS|b\n");
    }
}
