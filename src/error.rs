//! Errors reported by the grammar pipeline.

use thiserror::Error;

use crate::load::LoadError;

/// An error that stops the pipeline for a grammar.
///
/// A grammar that is not LL(1) is not an error of [`Analysis::new`]; it
/// shows up here only when a predict table is requested for it.
///
/// [`Analysis::new`]: crate::Analysis::new
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The grammar description could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// No start symbol was assigned.
    #[error("the grammar has no start symbol")]
    MissingStart,

    /// The start symbol is not the left-hand side of any production.
    #[error("start symbol {0} is not a non-terminal")]
    StartNotNonterminal(String),

    /// A non-terminal lost all of its alternatives.
    #[error("non-terminal {0} has no alternatives")]
    EmptyProduction(String),

    /// The grammar is left-recursive in a way normalization cannot remove.
    #[error("grammar not supported: left recursion through {}", .symbols.join(", "))]
    LeftRecursion {
        /// Names of the left-recursive non-terminals.
        symbols: Vec<String>,
    },

    /// A fixed point was not reached within the configured number of passes.
    #[error("{set} sets did not converge within {iterations} passes")]
    FixedPointLimit {
        /// Which set was being computed.
        set: &'static str,
        /// The pass limit.
        iterations: usize,
    },

    /// A predict table was requested for a grammar with Select conflicts.
    #[error("the grammar is not LL(1): {conflicts} conflicting pair(s) of alternatives")]
    NotLl1 {
        /// Number of conflicting alternative pairs.
        conflicts: usize,
    },
}
