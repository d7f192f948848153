//! Definitions of the context-free grammar type.

use std::fmt;

use crate::error::Error;
use crate::rule::builder::RuleBuilder;
use crate::rule::{Alternative, Production, RuleRef};
use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};

/// Context-free grammar type.
///
/// Owns the start symbol and the ordered list of productions. Symbols are
/// terminal exactly when they are not the left-hand side of a production.
/// Derived sets live outside of the grammar, in [`GrammarSets`].
///
/// [`GrammarSets`]: crate::prediction::GrammarSets
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    /// The start symbol.
    start: Option<Symbol>,
    /// The array of productions, in insertion order.
    productions: Vec<Production>,
}

impl Grammar {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context-free grammar with the given symbol source.
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        Grammar {
            sym_source,
            start: None,
            productions: vec![],
        }
    }

    /// Interns a symbol by name.
    pub fn sym(&mut self, name: &str) -> Symbol {
        self.sym_source.intern(name)
    }

    /// Interns several symbols by name.
    pub fn syms<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.sym_source.intern(name))
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Allows mutable access to the symbol source through a reference.
    pub fn sym_source_mut(&mut self) -> &mut SymbolSource {
        &mut self.sym_source
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the display name of a symbol.
    pub fn name(&self, sym: Symbol) -> &str {
        self.sym_source.name(sym)
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the start symbol, if one was assigned.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self, lhs)
    }

    /// Appends an alternative to the production of `lhs`, creating the
    /// production if needed.
    pub fn add_alternative(&mut self, lhs: Symbol, alternative: Alternative) {
        match self.productions.iter_mut().find(|prod| prod.lhs == lhs) {
            Some(production) => production.alternatives.push(alternative),
            None => self.productions.push(Production::new(lhs, vec![alternative])),
        }
    }

    /// Returns the list of productions.
    pub fn productions(&self) -> &[Production] {
        &self.productions[..]
    }

    /// Returns the production for the given LHS.
    pub fn production(&self, lhs: Symbol) -> Option<&Production> {
        self.productions.iter().find(|prod| prod.lhs == lhs)
    }

    pub(crate) fn productions_mut(&mut self) -> &mut Vec<Production> {
        &mut self.productions
    }

    /// Returns an iterator over all alternatives of all productions.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        self.productions.iter().flat_map(|prod| prod.rules())
    }

    /// Constructs the set of non-terminals: the left-hand sides of productions.
    pub fn non_terminals(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::from_elem(&self.sym_source, false);
        for production in &self.productions {
            set.set(production.lhs, true);
        }
        set
    }

    /// Constructs the set of terminals: symbols on some right-hand side that
    /// are not non-terminals. `ε` is never included.
    pub fn terminals(&self) -> SymbolBitSet {
        let non_terminals = self.non_terminals();
        let mut set = SymbolBitSet::from_elem(&self.sym_source, false);
        for rule in self.rules() {
            for &sym in rule.rhs {
                if !non_terminals[sym] && sym != Symbol::EPSILON {
                    set.set(sym, true);
                }
            }
        }
        set
    }

    /// Checks whether a symbol is a non-terminal of this grammar.
    pub fn is_non_terminal(&self, sym: Symbol) -> bool {
        self.productions.iter().any(|prod| prod.lhs == sym)
    }

    /// Checks whether a symbol is terminal in this grammar. Reserved symbols
    /// are always terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        !self.is_non_terminal(sym)
    }

    /// Checks that the grammar has a start symbol defined by some production
    /// and that no production is left without alternatives.
    pub fn validate(&self) -> Result<(), Error> {
        let start = self.start.ok_or(Error::MissingStart)?;
        if !self.is_non_terminal(start) {
            return Err(Error::StartNotNonterminal(self.name(start).to_string()));
        }
        if let Some(production) = self
            .productions
            .iter()
            .find(|prod| prod.alternatives.is_empty())
        {
            return Err(Error::EmptyProduction(
                self.name(production.lhs).to_string(),
            ));
        }
        Ok(())
    }

    /// Writes the grammar as `A -> ab|c` lines.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for production in &self.productions {
            let alternatives = production
                .alternatives
                .iter()
                .map(|alt| self.sym_source.stringify(&alt[..]))
                .collect::<Vec<_>>();
            result.push_str(self.name(production.lhs));
            result.push_str(" -> ");
            result.push_str(&alternatives.join("|"));
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr_grammar() -> Grammar {
        let mut grammar = Grammar::new();
        let [e, t, plus, i] = grammar.syms(["E", "T", "+", "i"]);
        grammar.rule(e).rhs([e, plus, t]).rhs([t]).rule(t).rhs([i]);
        grammar.set_start(e);
        grammar
    }

    #[test]
    fn test_terminal_tagging() {
        let grammar = expr_grammar();
        let [e, t, plus, i] = ["E", "T", "+", "i"].map(|name| grammar.sym_source().get(name).unwrap());
        assert!(grammar.is_non_terminal(e));
        assert!(grammar.is_non_terminal(t));
        assert!(grammar.is_terminal(plus));
        assert!(grammar.is_terminal(Symbol::END_OF_INPUT));
        assert_eq!(grammar.non_terminals().iter().collect::<Vec<_>>(), vec![e, t]);
        assert_eq!(grammar.terminals().iter().collect::<Vec<_>>(), vec![plus, i]);
    }

    #[test]
    fn test_alternatives_are_merged() {
        let mut grammar = expr_grammar();
        let [t, x] = grammar.syms(["T", "x"]);
        grammar.rule(t).rhs([x]);
        assert_eq!(grammar.productions().len(), 2);
        assert_eq!(grammar.production(t).unwrap().alternatives.len(), 2);
        assert_eq!(grammar.rules().count(), 4);
    }

    #[test]
    fn test_stringify() {
        let mut grammar = expr_grammar();
        let t = grammar.sym("T");
        grammar.rule(t).rhs(Vec::<Symbol>::new());
        assert_eq!(grammar.stringify(), "E -> E+T|T\nT -> i|ε\n");
    }

    #[test]
    fn test_validate() {
        let mut grammar = expr_grammar();
        assert_eq!(grammar.validate(), Ok(()));
        let i = grammar.sym("i");
        grammar.set_start(i);
        assert_eq!(
            grammar.validate(),
            Err(Error::StartNotNonterminal("i".to_string()))
        );
        assert_eq!(Grammar::new().validate(), Err(Error::MissingStart));
    }
}
