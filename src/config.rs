//! Pipeline configuration.

/// How often left-factoring runs during normalization.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Factoring {
    /// One pass over the productions as they were before factoring.
    /// Productions created by the pass are not factored again.
    SinglePass,
    /// Repeat passes until one of them creates nothing, so common prefixes
    /// nested inside common prefixes are factored too.
    #[default]
    Exhaustive,
}

/// Options for normalization and the derived set solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Left-factoring strategy.
    pub factoring: Factoring,
    /// Upper bound on left-factoring passes with `Factoring::Exhaustive`.
    pub max_rounds: usize,
    /// Upper bound on full passes of each fixed-point computation.
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            factoring: Factoring::Exhaustive,
            max_rounds: 64,
            max_iterations: 10_000,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the left-factoring strategy.
    pub fn with_factoring(mut self, factoring: Factoring) -> Self {
        self.factoring = factoring;
        self
    }

    /// Sets the upper bound on left-factoring passes.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the upper bound on fixed-point passes.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
