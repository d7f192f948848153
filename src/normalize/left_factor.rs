//! Extraction of common prefixes among alternatives of one production.

use std::mem;

use log::trace;

use crate::grammar::Grammar;
use crate::rule::{Alternative, Production};
use crate::symbol::Symbol;

impl Grammar {
    /// Runs one left-factoring pass over the current productions.
    ///
    /// Alternatives of a production are grouped by their first symbol. Every
    /// group with more than one member is replaced with `prefix N`, where
    /// `prefix` is the group's longest common prefix and `N` is a new
    /// non-terminal whose alternatives are the remaining suffixes. A suffix
    /// may be empty. Productions created by this pass are not factored again
    /// until the next pass.
    ///
    /// Returns the new non-terminals.
    pub fn left_factor(&mut self) -> Vec<Symbol> {
        let productions = mem::take(self.productions_mut());
        let mut rewritten = Vec::with_capacity(productions.len());
        let mut added = vec![];

        for production in productions {
            let mut alternatives = vec![];
            for group in group_by_first_symbol(production.alternatives) {
                if group.len() == 1 {
                    alternatives.extend(group);
                    continue;
                }
                let prefix_len = common_prefix_len(&group[..]);
                let base = base_name(self.name(production.lhs)).to_string();
                let fresh = self.sym_source_mut().fresh_numbered(&base);
                let prefix = &group[0][..prefix_len];
                trace!(
                    "factoring {} out of {} alternatives of {}",
                    self.sym_source().stringify(prefix),
                    group.len(),
                    self.name(production.lhs)
                );
                let mut factored = prefix.to_vec();
                factored.push(fresh);
                alternatives.push(Alternative::new(factored));
                let suffixes = group
                    .iter()
                    .map(|alt| Alternative::from(&alt[prefix_len..]))
                    .collect();
                added.push(Production::new(fresh, suffixes));
            }
            rewritten.push(Production::new(production.lhs, alternatives));
        }

        let new_syms = added.iter().map(|prod| prod.lhs).collect();
        rewritten.extend(added);
        *self.productions_mut() = rewritten;
        new_syms
    }
}

/// Groups alternatives by their first symbol. Groups appear in order of
/// their first member. Empty alternatives are never grouped.
fn group_by_first_symbol(alternatives: Vec<Alternative>) -> Vec<Vec<Alternative>> {
    let mut groups: Vec<(Option<Symbol>, Vec<Alternative>)> = vec![];
    for alternative in alternatives {
        let key = alternative.first().copied();
        match groups
            .iter_mut()
            .find(|(group_key, _)| key.is_some() && *group_key == key)
        {
            Some((_, group)) => group.push(alternative),
            None => groups.push((key, vec![alternative])),
        }
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

/// Length of the longest prefix shared by all alternatives.
fn common_prefix_len(group: &[Alternative]) -> usize {
    let reference = &group[0];
    group[1..].iter().fold(reference.len(), |len, alt| {
        reference
            .iter()
            .zip(alt.iter())
            .take(len)
            .take_while(|(a, b)| a == b)
            .count()
    })
}

/// Strips suffixes added by earlier normalization, so `S1` and `S'`
/// generate names from `S`.
fn base_name(name: &str) -> &str {
    let base = name.trim_end_matches(|ch: char| ch.is_ascii_digit() || ch == '\'');
    if base.is_empty() {
        name
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_factor() {
        let mut grammar = Grammar::load("S", "S -> iEtS|iEtSeS|a\nE -> b").unwrap();
        let added = grammar.left_factor();
        assert_eq!(added.len(), 1);
        assert_eq!(grammar.name(added[0]), "S1");
        assert_eq!(grammar.stringify(), "S -> iEtSS1|a\nE -> b\nS1 -> ε|eS\n");
        let s1 = grammar.production(added[0]).unwrap();
        assert!(s1.alternatives[0].is_empty());
    }

    #[test]
    fn test_groups_keep_order_and_empty_alternatives() {
        let mut grammar = Grammar::load("S", "S -> b||ax|c|ay").unwrap();
        grammar.left_factor();
        assert_eq!(grammar.stringify(), "S -> b|ε|aS1|c\nS1 -> x|y\n");
    }

    #[test]
    fn test_left_factor_is_idempotent() {
        let mut grammar = Grammar::load("S", "S -> ab|ac").unwrap();
        assert_eq!(grammar.left_factor().len(), 1);
        let before = grammar.stringify();
        assert!(grammar.left_factor().is_empty());
        assert_eq!(grammar.stringify(), before);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("S12"), "S");
        assert_eq!(base_name("E'"), "E");
        assert_eq!(base_name("1"), "1");
    }
}
