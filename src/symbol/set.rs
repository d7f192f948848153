//! Sets of symbols in the form of a bit vector.

use std::iter;
use std::ops;

use bit_vec::BitVec;

use crate::symbol::{Symbol, SymbolSource};

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` with room for every symbol of the source.
    pub fn from_elem(sym_source: &SymbolSource, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(sym_source.num_syms(), elem),
        }
    }

    /// Sets the entry for a symbol, growing the set when needed.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        let idx = sym.usize();
        if idx >= self.bit_vec.len() {
            if !elem {
                return;
            }
            let grow_by = idx + 1 - self.bit_vec.len();
            self.bit_vec.grow(grow_by, false);
        }
        self.bit_vec.set(idx, elem);
    }

    /// Checks whether a given symbol is in this set.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Adds every symbol of `other`. Returns whether this set changed.
    pub fn union(&mut self, other: &SymbolBitSet) -> bool {
        let mut changed = false;
        for sym in other.iter() {
            if !self.has_sym(sym) {
                self.set(sym, true);
                changed = true;
            }
        }
        changed
    }

    /// Number of symbols in the set.
    pub fn count(&self) -> usize {
        self.bit_vec.iter().filter(|&present| present).count()
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a SymbolBitSet {
    type Item = Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Symbol> for SymbolBitSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolBitSet::new();
        for sym in iter {
            set.set(sym, true);
        }
        set
    }
}

impl PartialEq for SymbolBitSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for SymbolBitSet {}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.has_sym(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_grows_and_iterates() {
        let mut set = SymbolBitSet::new();
        let a = Symbol::from(5);
        let b = Symbol::from(3);
        set.set(a, true);
        set.set(b, true);
        assert!(set[a]);
        assert!(!set[Symbol::from(100)]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(set.count(), 2);
        set.set(a, false);
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_union_reports_change() {
        let mut left: SymbolBitSet = [Symbol::from(2)].into_iter().collect();
        let right: SymbolBitSet = [Symbol::from(2), Symbol::from(4)].into_iter().collect();
        assert!(left.union(&right));
        assert!(!left.union(&right));
        assert!(left[Symbol::from(4)]);
    }
}
