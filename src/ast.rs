use crate::{shared::operator::ArithmeticOperator, source::Position};

/// Node of the expression tree built by the parser. Every binary node owns both children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(NumberLiteral),
    Binary(BinaryOperation),
}

/// Number exactly as written in the source, never converted to a numeric type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub text: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperation {
    pub op: ArithmeticOperator,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    /// Position of the operator token that produced this node
    pub pos: Position,
}

impl Expr {
    pub fn number(text: impl Into<String>, pos: Position) -> Self {
        Self::Number(NumberLiteral { text: text.into(), pos })
    }

    pub fn binary(op: ArithmeticOperator, lhs: Expr, rhs: Expr, pos: Position) -> Self {
        Self::Binary(BinaryOperation {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            pos,
        })
    }

    pub const fn pos(&self) -> Position {
        match self {
            Self::Number(n) => n.pos,
            Self::Binary(b) => b.pos,
        }
    }

    /// Operator at the root of this expression, `None` for a bare number
    pub const fn operator(&self) -> Option<ArithmeticOperator> {
        match self {
            Self::Number(_) => None,
            Self::Binary(b) => Some(b.op),
        }
    }
}
