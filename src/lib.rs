//! Construction of LL(1) predictive parsers for context-free grammars.
//!
//! A grammar is loaded from `A -> ab|c` lines, normalized by left-factoring
//! and immediate left-recursion elimination, and analyzed. The analysis
//! computes Nullable, FIRST and FOLLOW sets, checks that the Select sets of
//! every non-terminal's alternatives are disjoint, and builds a predict
//! table that drives a two-stack parser.
//!
//! ```
//! use cfg_ll::{Analysis, Config, Grammar};
//!
//! let grammar = Grammar::load("E", "E -> E+T|T\nT -> T*F|F\nF -> (E)|i").unwrap();
//! let analysis = Analysis::new(grammar, &Config::default()).unwrap();
//! let parser = analysis.parser().unwrap();
//! assert!(parser.parse("i+i*i").verdict.is_accept());
//! ```

#![deny(unsafe_code)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod classify;
pub mod config;
pub mod error;
mod grammar;
pub mod load;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod prediction;
pub mod rule;
pub mod symbol;
pub mod table;

pub use crate::config::{Config, Factoring};
pub use crate::error::Error;
pub use crate::grammar::Grammar;
pub use crate::load::{GrammarLoader, LoadError};
pub use crate::parser::{LlParser, ParseOutcome, Verdict};
pub use crate::pipeline::Analysis;
pub use crate::symbol::Symbol;
