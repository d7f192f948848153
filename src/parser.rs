//! Table-driven LL(1) parsing with a step trace.
//!
//! The parser keeps two stacks. The analysis stack starts as `# S` with the
//! start symbol on top. The input stack holds the remaining characters
//! followed by `#`. Every step inspects both tops and either matches a
//! terminal, expands a non-terminal through the predict table, accepts, or
//! rejects.

use std::fmt;

use log::trace;

use crate::grammar::Grammar;
use crate::table::{PredictEntry, PredictTable};
use crate::symbol::Symbol;

/// One input character, resolved against the grammar's terminals.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The character as written. The end marker is `#`.
    pub ch: char,
    /// The terminal this character stands for, or `None` for characters
    /// that are not terminals of the grammar.
    pub sym: Option<Symbol>,
}

impl Token {
    /// The end-of-input marker.
    pub const END: Token = Token {
        ch: '#',
        sym: Some(Symbol::END_OF_INPUT),
    };
}

/// What a step did.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepAction {
    /// The terminal on top of the analysis stack matched the input.
    Match(Symbol),
    /// The non-terminal on top was replaced by an alternative.
    Expand(PredictEntry),
    /// Both stacks reached `#`.
    Accept,
    /// A terminal on top of the analysis stack differs from the input.
    Mismatch { expected: Symbol, found: Token },
    /// The predict table has no cell for the non-terminal and lookahead.
    NoEntry { nonterminal: Symbol, lookahead: Token },
}

/// A trace record. Stacks are captured before the action is applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseStep {
    /// One-based step number.
    pub index: usize,
    /// The analysis stack, bottom first.
    pub stack: Vec<Symbol>,
    /// The remaining input, ending with `#`.
    pub input: Vec<Token>,
    /// What the step did with the two stacks.
    pub action: StepAction,
}

/// The final outcome of a parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The input is derivable from the start symbol.
    Accept,
    /// A terminal on the analysis stack did not match the input.
    RejectMismatch {
        /// The step that rejected.
        step: usize,
        /// Name of the terminal on top of the analysis stack.
        expected: String,
        /// The input character.
        found: char,
    },
    /// The predict table had no cell for the non-terminal on top.
    RejectNoEntry {
        /// The step that rejected.
        step: usize,
        /// Name of the non-terminal on top of the analysis stack.
        nonterminal: String,
        /// The input character.
        lookahead: char,
    },
}

impl Verdict {
    /// Checks whether the input was accepted.
    pub fn is_accept(&self) -> bool {
        *self == Verdict::Accept
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Accept => write!(f, "accepted"),
            Verdict::RejectMismatch {
                step,
                expected,
                found,
            } => write!(
                f,
                "rejected at step {}: expected `{}`, found `{}`",
                step, expected, found
            ),
            Verdict::RejectNoEntry {
                step,
                nonterminal,
                lookahead,
            } => write!(
                f,
                "rejected at step {}: no production for {} on `{}`",
                step, nonterminal, lookahead
            ),
        }
    }
}

/// A complete parse: the trace and the verdict.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutcome {
    /// Every step, including the one that accepted or rejected.
    pub steps: Vec<ParseStep>,
    /// How the parse ended.
    pub verdict: Verdict,
}

/// A parser driven by a predict table.
///
/// Holds no state of its own. Any number of inputs may be parsed at once
/// against the same table.
#[derive(Copy, Clone, Debug)]
pub struct LlParser<'a> {
    grammar: &'a Grammar,
    table: &'a PredictTable,
}

impl<'a> LlParser<'a> {
    /// Creates a parser for the grammar the table was built from.
    pub fn new(grammar: &'a Grammar, table: &'a PredictTable) -> Self {
        LlParser { grammar, table }
    }

    /// Resolves input characters against the grammar's terminals and
    /// appends the end marker.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut buf = [0; 4];
        input
            .chars()
            .map(|ch| Token {
                ch,
                sym: self
                    .grammar
                    .sym_source()
                    .get(ch.encode_utf8(&mut buf))
                    .filter(|&sym| self.grammar.is_terminal(sym)),
            })
            .chain(Some(Token::END))
            .collect()
    }

    /// Returns an iterator over the steps of parsing `input`.
    pub fn steps(&self, input: &str) -> Parse<'a> {
        let mut input = self.tokenize(input);
        input.reverse();
        Parse {
            parser: *self,
            stack: vec![Symbol::END_OF_INPUT, self.table.start()],
            input,
            index: 0,
            finished: false,
        }
    }

    /// Parses `input` to completion.
    pub fn parse(&self, input: &str) -> ParseOutcome {
        let steps = self.steps(input).collect::<Vec<_>>();
        let verdict = match steps.last().map(|step| (step.index, &step.action)) {
            Some((step, &StepAction::Mismatch { expected, found })) => Verdict::RejectMismatch {
                step,
                expected: self.grammar.name(expected).to_string(),
                found: found.ch,
            },
            Some((
                step,
                &StepAction::NoEntry {
                    nonterminal,
                    lookahead,
                },
            )) => Verdict::RejectNoEntry {
                step,
                nonterminal: self.grammar.name(nonterminal).to_string(),
                lookahead: lookahead.ch,
            },
            _ => Verdict::Accept,
        };
        ParseOutcome { steps, verdict }
    }

    /// Renders a stack of symbols, bottom first.
    pub fn stringify_stack(&self, stack: &[Symbol]) -> String {
        stack.iter().map(|&sym| self.grammar.name(sym)).collect()
    }

    /// Renders the remaining input.
    pub fn stringify_input(input: &[Token]) -> String {
        input.iter().map(|token| token.ch).collect()
    }

    /// Describes an action as a line of the trace.
    pub fn describe(&self, action: &StepAction) -> String {
        match action {
            StepAction::Match(sym) => format!("match {}", self.grammar.name(*sym)),
            StepAction::Expand(entry) => {
                let rhs = if entry.derives_empty {
                    self.grammar.name(Symbol::EPSILON).to_string()
                } else {
                    self.grammar.sym_source().stringify(&entry.rhs)
                };
                format!("{} -> {}", self.grammar.name(entry.lhs), rhs)
            }
            StepAction::Accept => "accept".to_string(),
            StepAction::Mismatch { expected, found } => format!(
                "mismatch: expected {}, found {}",
                self.grammar.name(*expected),
                found.ch
            ),
            StepAction::NoEntry {
                nonterminal,
                lookahead,
            } => format!(
                "no entry for [{}, {}]",
                self.grammar.name(*nonterminal),
                lookahead.ch
            ),
        }
    }
}

/// A parse in progress. Yields one [`ParseStep`] per step and ends after
/// the step that accepts or rejects.
#[derive(Clone, Debug)]
pub struct Parse<'a> {
    parser: LlParser<'a>,
    stack: Vec<Symbol>,
    /// Remaining input, reversed so that the front is at the end.
    input: Vec<Token>,
    index: usize,
    finished: bool,
}

impl<'a> Parse<'a> {
    fn lookahead(&self) -> Token {
        self.input.last().copied().unwrap_or(Token::END)
    }

    fn action(&self, top: Symbol, lookahead: Token) -> StepAction {
        if !self.parser.grammar.is_non_terminal(top) {
            if lookahead.sym == Some(top) {
                if top == Symbol::END_OF_INPUT {
                    StepAction::Accept
                } else {
                    StepAction::Match(top)
                }
            } else {
                StepAction::Mismatch {
                    expected: top,
                    found: lookahead,
                }
            }
        } else {
            let entry = lookahead
                .sym
                .and_then(|terminal| self.parser.table.get(top, terminal));
            match entry {
                Some(entry) => StepAction::Expand(entry.clone()),
                None => StepAction::NoEntry {
                    nonterminal: top,
                    lookahead,
                },
            }
        }
    }
}

impl<'a> Iterator for Parse<'a> {
    type Item = ParseStep;

    fn next(&mut self) -> Option<ParseStep> {
        if self.finished {
            return None;
        }
        let top = match self.stack.last() {
            Some(&top) => top,
            None => {
                self.finished = true;
                return None;
            }
        };
        self.index += 1;
        let lookahead = self.lookahead();
        let action = self.action(top, lookahead);
        let step = ParseStep {
            index: self.index,
            stack: self.stack.clone(),
            input: self.input.iter().rev().copied().collect(),
            action: action.clone(),
        };
        trace!(
            "step {}: {} | {} | {}",
            step.index,
            self.parser.stringify_stack(&step.stack),
            LlParser::stringify_input(&step.input),
            self.parser.describe(&action)
        );
        match action {
            StepAction::Match(_) => {
                self.stack.pop();
                self.input.pop();
            }
            StepAction::Expand(entry) => {
                self.stack.pop();
                if !entry.derives_empty {
                    self.stack.extend(
                        entry
                            .rhs
                            .iter()
                            .rev()
                            .copied()
                            .filter(|&sym| sym != Symbol::EPSILON),
                    );
                }
            }
            StepAction::Accept | StepAction::Mismatch { .. } | StepAction::NoEntry { .. } => {
                self.finished = true;
            }
        }
        Some(step)
    }
}
