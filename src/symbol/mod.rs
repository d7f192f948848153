//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs.

pub mod set;
pub mod source;

use std::num::NonZeroU32;

pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

/// A common grammar symbol type.
///
/// Whether a symbol is terminal is a property of the grammar it belongs to,
/// not of the symbol. See [`Grammar::is_terminal`].
///
/// [`Grammar::is_terminal`]: crate::Grammar::is_terminal
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Symbol {
    /// The symbol that derives the empty string, displayed as `ε`.
    pub const EPSILON: Symbol = Symbol {
        n: NonZeroU32::MIN,
    };
    /// The end of input and bottom of the analysis stack, displayed as `#`.
    pub const END_OF_INPUT: Symbol = Symbol {
        n: NonZeroU32::MIN.saturating_add(1),
    };

    /// Number of symbols reserved by every symbol source.
    pub(crate) const NUM_RESERVED: usize = 2;

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }

    /// Checks whether this is `EPSILON` or `END_OF_INPUT`.
    #[inline]
    pub fn is_reserved(self) -> bool {
        self.usize() < Self::NUM_RESERVED
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol {
            n: NonZeroU32::MIN.saturating_add(id as u32),
        }
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> usize {
        sym.usize()
    }
}
