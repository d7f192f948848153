//! The LL(1) predict table.

use std::collections::BTreeMap;

use log::{error, trace};

use crate::classify::LlClassification;
use crate::error::Error;
use crate::grammar::Grammar;
use crate::prediction::GrammarSets;
use crate::symbol::Symbol;

/// The alternative expanded for a non-terminal on a lookahead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictEntry {
    /// The non-terminal being expanded.
    pub lhs: Symbol,
    /// Index of the alternative that justified this cell.
    pub alternative: usize,
    /// Symbols pushed in place of `lhs`. Empty when `derives_empty` is set.
    pub rhs: Vec<Symbol>,
    /// Whether the cell was filled through FOLLOW, expanding `lhs → ε`.
    pub derives_empty: bool,
}

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
struct PredictTableKey {
    nonterminal: Symbol,
    terminal: Symbol,
}

/// LL(1) predict table.
#[derive(Clone, Debug)]
pub struct PredictTable {
    map: BTreeMap<PredictTableKey, PredictEntry>,
    start: Symbol,
}

impl PredictTable {
    /// Creates the predict table of a grammar certified LL(1).
    pub fn new(
        grammar: &Grammar,
        sets: &GrammarSets,
        classification: &LlClassification,
    ) -> Result<Self, Error> {
        if !classification.is_ll1() {
            return Err(Error::NotLl1 {
                conflicts: classification.conflicts().count(),
            });
        }
        let mut this = PredictTable {
            map: BTreeMap::new(),
            start: sets.start(),
        };
        // Table[A,a] contains the rule A → w if and only if
        // a is in FIRST(w) or
        // ε is in FIRST(w) and a is in FOLLOW(A).
        for rule in grammar.rules() {
            let rhs_first_set = sets.first_set_for_string(rule.rhs);
            for &terminal in rhs_first_set.iter().filter(|&&sym| sym != Symbol::EPSILON) {
                let entry = PredictEntry {
                    lhs: rule.lhs,
                    alternative: rule.alternative,
                    rhs: rule.rhs.to_vec(),
                    derives_empty: false,
                };
                this.insert(grammar, terminal, entry);
            }
            if rhs_first_set.contains(&Symbol::EPSILON) {
                for terminal in sets.follow(rule.lhs) {
                    let entry = PredictEntry {
                        lhs: rule.lhs,
                        alternative: rule.alternative,
                        rhs: vec![],
                        derives_empty: true,
                    };
                    this.insert(grammar, terminal, entry);
                }
            }
        }
        Ok(this)
    }

    fn insert(&mut self, grammar: &Grammar, terminal: Symbol, entry: PredictEntry) {
        let key = PredictTableKey {
            nonterminal: entry.lhs,
            terminal,
        };
        if let Some(existing) = self.map.get(&key) {
            error!(
                "predict cell [{}, {}] already holds alternative {}; ignoring alternative {}",
                grammar.name(entry.lhs),
                grammar.name(terminal),
                existing.alternative,
                entry.alternative
            );
            return;
        }
        trace!(
            "predict [{}, {}] = alternative {}",
            grammar.name(entry.lhs),
            grammar.name(terminal),
            entry.alternative
        );
        self.map.insert(key, entry);
    }

    /// Looks up the expansion of `nonterminal` on the lookahead `terminal`.
    pub fn get(&self, nonterminal: Symbol, terminal: Symbol) -> Option<&PredictEntry> {
        self.map.get(&PredictTableKey {
            nonterminal,
            terminal,
        })
    }

    /// Iterates over filled cells as `(nonterminal, terminal, entry)`.
    pub fn entries(&self) -> impl Iterator<Item = (Symbol, Symbol, &PredictEntry)> {
        self.map
            .iter()
            .map(|(key, entry)| (key.nonterminal, key.terminal, entry))
    }

    /// The number of filled cells.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether no cell is filled.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The start symbol of the grammar this table was built for.
    pub fn start(&self) -> Symbol {
        self.start
    }
}
