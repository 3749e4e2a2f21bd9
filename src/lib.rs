//! Conversion of Reverse Polish Notation arithmetic into LaTeX math-mode infix.
//!
//! The pipeline runs text through [tokenize], [parse] and [generate]; [convert] chains the
//! three and stops at the first error. No stage keeps state between calls.

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod latex;
pub mod parse;
pub mod shared;
pub mod source;

pub use ast::Expr;
pub use error::{Error, LexError, ParseError, Result};
pub use latex::generate;
pub use parse::{
    lex::{Lexer, Token, TokenKind},
    parse,
};
pub use source::{Position, SourceFile};

/// Split source text into tokens, ending with a [TokenKind::EndOfInput] marker
pub fn tokenize(text: &str) -> std::result::Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}

/// Convert an RPN expression into a `$`-delimited LaTeX string
pub fn convert(text: &str) -> Result<String> {
    let tokens = tokenize(text)?;
    let expr = parse(tokens)?;
    Ok(generate(&expr))
}
