use crate::{shared::operator::ArithmeticOperator, source::Position};

/// One lexical unit of RPN input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token, empty for [TokenKind::EndOfInput]
    pub text: String,
    /// Position of the token's first character
    pub pos: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Operator(ArithmeticOperator),
    EndOfInput,
}

impl Token {
    pub fn number(text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind: TokenKind::Number,
            text: text.into(),
            pos,
        }
    }

    pub fn operator(op: ArithmeticOperator, pos: Position) -> Self {
        Self {
            kind: TokenKind::Operator(op),
            text: op.to_string(),
            pos,
        }
    }

    pub fn end(pos: Position) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            pos,
        }
    }
}
