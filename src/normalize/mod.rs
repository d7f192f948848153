//! Grammar normalization: left-factoring and immediate left-recursion
//! elimination.
//!
//! Both rewrites leave a grammar that needs no rewriting unchanged.

mod left_factor;
mod left_recursion;

use log::{debug, warn};

use crate::config::{Config, Factoring};
use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// Non-terminals introduced by normalization.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NormalizeReport {
    /// Introduced by left-factoring, in order of creation.
    pub factored: Vec<Symbol>,
    /// Introduced by left-recursion elimination, in order of creation.
    pub unrolled: Vec<Symbol>,
    /// Whether exhaustive factoring ran out of rounds while common prefixes
    /// were left.
    pub factoring_limit_hit: bool,
}

impl NormalizeReport {
    /// Checks whether normalization left the grammar as it was.
    pub fn is_unchanged(&self) -> bool {
        self.factored.is_empty() && self.unrolled.is_empty()
    }
}

impl Grammar {
    /// Extracts common prefixes first, then eliminates immediate left recursion.
    pub fn normalize(&mut self, config: &Config) -> NormalizeReport {
        let mut report = NormalizeReport::default();
        let max_rounds = match config.factoring {
            Factoring::SinglePass => 1,
            Factoring::Exhaustive => config.max_rounds.max(1),
        };
        let mut last_created = false;
        for _ in 0..max_rounds {
            let created = self.left_factor();
            last_created = !created.is_empty();
            if !last_created {
                break;
            }
            report.factored.extend(created);
        }
        if last_created && config.factoring == Factoring::Exhaustive {
            report.factoring_limit_hit = !self.clone().left_factor().is_empty();
            if report.factoring_limit_hit {
                warn!("left-factoring stopped after {} rounds", max_rounds);
            }
        }
        if !report.factored.is_empty() {
            debug!("left-factored grammar:\n{}", self);
        }
        report.unrolled = self.eliminate_left_recursion();
        if !report.unrolled.is_empty() {
            debug!("grammar without immediate left recursion:\n{}", self);
        }
        report
    }
}
