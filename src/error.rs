use thiserror::Error;

use crate::parser::coord::Coord;

/// A grammar violation while tokenizing or parsing one FOL sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{coord}: {msg}")]
pub struct ParseError {
    pub coord: Coord,
    pub msg: String,
}

impl ParseError {
    pub fn new(coord: Coord, msg: impl Into<String>) -> Self {
        Self { coord, msg: msg.into() }
    }
}

/// A malformed `input.txt`: wrong line counts, missing lines, or a query
/// whose literal contains a variable where the problem requires it ground.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a query count on line 1, found {found:?}")]
    BadQueryCount { found: String },
    #[error("expected a sentence count on line {line}, found {found:?}")]
    BadSentenceCount { line: usize, found: String },
    #[error("input.txt declares {declared} {kind} but only {found} lines are present")]
    TruncatedInput {
        declared: usize,
        found: usize,
        kind: &'static str,
    },
    #[error("query {index} ({literal:?}) contains a variable; queries must be ground")]
    NonGroundQuery { index: usize, literal: String },

    #[error("{path}: {message}")]
    Io { path: String, message: String },
}

/// Top-level error for anything that can stop the prover before it produces
/// a result: a malformed sentence, or a malformed input file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}
