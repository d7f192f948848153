//! The whole pipeline, from a loaded grammar to a parser.

use log::{debug, info};

use crate::classify::LlClassification;
use crate::config::Config;
use crate::error::Error;
use crate::grammar::Grammar;
use crate::normalize::NormalizeReport;
use crate::parser::LlParser;
use crate::prediction::GrammarSets;
use crate::table::PredictTable;

/// A normalized grammar with everything derived from it.
///
/// The predict table is only built for grammars certified LL(1). A grammar
/// with conflicts is still analyzed; its conflicts are available through
/// [`Analysis::classification`].
#[derive(Clone, Debug)]
pub struct Analysis {
    grammar: Grammar,
    report: NormalizeReport,
    sets: GrammarSets,
    classification: LlClassification,
    table: Option<PredictTable>,
}

impl Analysis {
    /// Normalizes the grammar and runs every analysis on it.
    pub fn new(mut grammar: Grammar, config: &Config) -> Result<Self, Error> {
        grammar.validate()?;
        let report = grammar.normalize(config);
        let sets = GrammarSets::new(&grammar, config)?;
        let classification = LlClassification::new(&grammar, &sets);
        let table = if classification.is_ll1() {
            Some(PredictTable::new(&grammar, &sets, &classification)?)
        } else {
            info!(
                "grammar is not LL(1): {} conflicting pair(s)",
                classification.conflicts().count()
            );
            None
        };
        debug!(
            "analysis done, predict table has {} cells",
            table.as_ref().map_or(0, |table| table.len())
        );
        Ok(Analysis {
            grammar,
            report,
            sets,
            classification,
            table,
        })
    }

    /// The normalized grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The non-terminals introduced by normalization.
    pub fn normalize_report(&self) -> &NormalizeReport {
        &self.report
    }

    /// Nullable, FIRST and FOLLOW sets of the normalized grammar.
    pub fn sets(&self) -> &GrammarSets {
        &self.sets
    }

    /// Select checks of every pair of alternatives.
    pub fn classification(&self) -> &LlClassification {
        &self.classification
    }

    /// Checks whether the normalized grammar is LL(1).
    pub fn is_ll1(&self) -> bool {
        self.classification.is_ll1()
    }

    /// The predict table, if the grammar is LL(1).
    pub fn predict_table(&self) -> Option<&PredictTable> {
        self.table.as_ref()
    }

    /// A parser, if the grammar is LL(1).
    pub fn parser(&self) -> Option<LlParser<'_>> {
        self.table
            .as_ref()
            .map(|table| LlParser::new(&self.grammar, table))
    }
}
