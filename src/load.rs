//! Allows us to load context-free grammars from the line-oriented
//! `LEFT -> ALT1|ALT2` notation.
//!
//! Every symbol is a single character. The character `ε` stands for the
//! empty string. Whether a symbol is terminal is decided once all left-hand
//! sides are known.

use std::fmt;

use log::debug;

use crate::grammar::Grammar;
use crate::rule::Alternative;
use crate::symbol::Symbol;

/// Represents an error when loading a grammar description.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened, or `None` for the start symbol.
    ///
    /// One-indexed.
    pub line: Option<u32>,
}

impl LoadError {
    fn new(reason: impl Into<String>, line: Option<u32>) -> Self {
        LoadError {
            reason: reason.into(),
            line,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.reason),
            None => write!(f, "{}", self.reason),
        }
    }
}

impl std::error::Error for LoadError {}

/// Loads a grammar one production line at a time.
///
/// A rejected line is skipped and the loader stays usable, so an
/// interactive driver can report the error and re-prompt.
#[derive(Debug)]
pub struct GrammarLoader {
    grammar: Grammar,
    line: u32,
}

impl GrammarLoader {
    /// Creates a loader for a grammar with the given start symbol.
    pub fn new(start: &str) -> Result<Self, LoadError> {
        let start = single_char(start.trim()).ok_or_else(|| {
            LoadError::new("start symbol must be a single character", None)
        })?;
        let mut grammar = Grammar::new();
        let start = grammar.sym(start.encode_utf8(&mut [0; 4]));
        grammar.set_start(start);
        Ok(GrammarLoader { grammar, line: 0 })
    }

    /// Adds one production line. Blank lines and `//` comments are accepted
    /// and ignored.
    pub fn add_line(&mut self, line: &str) -> Result<(), LoadError> {
        self.line += 1;
        let line_no = Some(self.line);
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            return Ok(());
        }
        let parts = line.split("->").collect::<Vec<_>>();
        let (lhs, rhs) = match parts[..] {
            [lhs, rhs] => (lhs.trim(), rhs.trim()),
            _ => return Err(LoadError::new("invalid production: expected `LEFT -> RIGHT`", line_no)),
        };
        let lhs = match single_char(lhs) {
            Some(lhs) if lhs != 'ε' => lhs,
            _ => {
                return Err(LoadError::new(
                    format!("left side `{}` must be a single character", lhs),
                    line_no,
                ))
            }
        };
        let lhs = self.grammar.sym(lhs.encode_utf8(&mut [0; 4]));
        for alternative in rhs.split('|') {
            let symbols = alternative
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| {
                    if ch == 'ε' {
                        Symbol::EPSILON
                    } else {
                        self.grammar.sym(ch.encode_utf8(&mut [0; 4]))
                    }
                })
                .collect::<Vec<_>>();
            self.grammar.add_alternative(lhs, Alternative::new(symbols));
        }
        debug!("loaded line {}: {}", self.line, line);
        Ok(())
    }

    /// Finishes loading.
    pub fn finish(self) -> Result<Grammar, LoadError> {
        let start = self
            .grammar
            .start()
            .ok_or_else(|| LoadError::new("missing start symbol", None))?;
        if self.grammar.productions().is_empty() {
            return Err(LoadError::new("the grammar has no productions", None));
        }
        if !self.grammar.is_non_terminal(start) {
            return Err(LoadError::new(
                format!(
                    "start symbol {} has no production",
                    self.grammar.name(start)
                ),
                None,
            ));
        }
        Ok(self.grammar)
    }
}

impl Grammar {
    /// Loads a grammar from a multi-line description. Fails on the first
    /// malformed line.
    pub fn load(start: &str, text: &str) -> Result<Grammar, LoadError> {
        let mut loader = GrammarLoader::new(start)?;
        for line in text.lines() {
            loader.add_line(line)?;
        }
        loader.finish()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
