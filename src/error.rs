//! Error values produced by the tokenizer and parser.
//!
//! Each error carries the 1-based position of the offending character or token so that the
//! caller can point at it; see [crate::diagnostic] for the renderers used by the CLI.

use crate::source::{Position, SourceIndex};

pub type Result<T> = std::result::Result<T, Error>;

/// A character outside the accepted alphabet was found in the input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

impl LexError {
    pub fn unexpected_char(c: char, position: Position) -> Self {
        Self {
            message: format!("Unexpected character '{c}'"),
            position,
        }
    }
}

/// The token stream does not form exactly one RPN expression
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Any failure of the text to LaTeX conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Self::Lex(e) => &e.message,
            Self::Parse(e) => &e.message,
        }
    }

    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position,
            Self::Parse(e) => e.position,
        }
    }

    pub const fn line(&self) -> SourceIndex {
        self.position().line
    }

    pub const fn column(&self) -> SourceIndex {
        self.position().column
    }

    /// Short name of the pipeline stage that failed
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lex",
            Self::Parse(_) => "parse",
        }
    }
}
