//! Grammar rules can be built with the builder pattern.

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Symbol,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder for the given LHS.
    pub fn new(grammar: &'a mut Grammar, lhs: Symbol) -> Self {
        RuleBuilder { lhs, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar. Alternatives of the same LHS
    /// are kept in one production, in the order they were added.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.grammar.add_alternative(self.lhs, syms.as_ref().into());
        self
    }
}
