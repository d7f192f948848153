//! Prediction for predictive parsers: Nullable, FIRST and FOLLOW sets.

mod first;
mod follow;
mod nullable;
mod sets;

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::nullable::NullableSet;
pub use self::sets::GrammarSets;

use crate::error::Error;
use crate::symbol::Symbol;

/// The representation of FIRST and FOLLOW sets.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

/// Repeats full passes until a pass reports no change.
///
/// Returns the number of passes, or an error if `max_iterations` passes
/// were not enough.
fn fixed_point(
    set: &'static str,
    max_iterations: usize,
    mut pass: impl FnMut() -> bool,
) -> Result<usize, Error> {
    for iteration in 1..=max_iterations {
        if !pass() {
            trace!("{} sets converged after {} passes", set, iteration);
            return Ok(iteration);
        }
    }
    Err(Error::FixedPointLimit {
        set,
        iterations: max_iterations,
    })
}

/// Adds `additions` to the set at `key`. Returns whether the set grew.
fn extend_set(map: &mut PerSymbolSets, key: Symbol, additions: &BTreeSet<Symbol>) -> bool {
    let set = map.entry(key).or_default();
    let prev_cardinality = set.len();
    set.extend(additions.iter().copied());
    prev_cardinality != set.len()
}
