//! Stack-based reduction of an RPN token stream into a single expression tree.

pub mod lex;

use crate::{ast::Expr, error::ParseError, source::Position};

use lex::{Token, TokenKind};

/// Operand stack for one parse. Built fresh per call and consumed by [Parser::finish]
#[derive(Debug, Default)]
pub struct Parser {
    stack: Vec<Expr>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single token to the stack. Numbers are pushed, operators pop their right then
    /// left operand and push the combined node
    pub fn push(&mut self, tok: Token) -> Result<(), ParseError> {
        match tok.kind {
            TokenKind::Number => self.stack.push(Expr::number(tok.text, tok.pos)),
            TokenKind::Operator(op) => {
                let (Some(rhs), Some(lhs)) = (self.stack.pop(), self.stack.pop()) else {
                    return Err(ParseError::new(
                        format!("Operator '{op}' requires two operands"),
                        tok.pos,
                    ))
                };

                log::trace!("reduce {op} at {} with {} operands left", tok.pos, self.stack.len());
                self.stack.push(Expr::binary(op, lhs, rhs, tok.pos));
            },
            TokenKind::EndOfInput => (),
        }

        Ok(())
    }

    /// Check that exactly one expression remains once input ends at `end`
    pub fn finish(mut self, end: Position) -> Result<Expr, ParseError> {
        match self.stack.len() {
            0 => Err(ParseError::new("Empty expression", end)),
            1 => Ok(self.stack.remove(0)),
            _ => Err(ParseError::new(
                "Incomplete expression: too many operands",
                self.stack[0].pos(),
            )),
        }
    }
}

/// Parse a token sequence up to its end marker into one expression. A sequence missing its
/// end marker is treated as ending at the last token given
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Expr, ParseError> {
    let mut parser = Parser::new();
    let mut end = Position::START;

    for tok in tokens {
        end = tok.pos;
        if tok.kind == TokenKind::EndOfInput {
            break
        }

        parser.push(tok)?;
    }

    let expr = parser.finish(end)?;
    log::debug!("parsed expression rooted at {}", expr.pos());
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::operator::ArithmeticOperator;

    fn parse_str(src: &str) -> Result<Expr, ParseError> {
        parse(lex::Lexer::new(src).tokenize().unwrap())
    }

    #[test]
    fn single_number() {
        assert_eq!(parse_str("42").unwrap(), Expr::number("42", Position::new(1, 1)));
    }

    #[test]
    fn operands_keep_source_order() {
        let expected = Expr::binary(
            ArithmeticOperator::Sub,
            Expr::number("5", Position::new(1, 1)),
            Expr::number("3", Position::new(1, 3)),
            Position::new(1, 5),
        );
        assert_eq!(parse_str("5 3 -").unwrap(), expected);
    }

    #[test]
    fn nested_right_operand() {
        let Expr::Binary(root) = parse_str("2 3 4 + *").unwrap() else {
            panic!("expected binary root")
        };
        assert_eq!(root.op, ArithmeticOperator::Mul);
        assert_eq!(*root.lhs, Expr::number("2", Position::new(1, 1)));
        assert_eq!(root.rhs.operator(), Some(ArithmeticOperator::Add));
    }

    #[test]
    fn operator_without_operands() {
        let err = parse_str("5 +").unwrap_err();
        assert_eq!(err.message, "Operator '+' requires two operands");
        assert_eq!(err.position, Position::new(1, 3));
    }

    #[test]
    fn empty_expression_reported_at_end() {
        let err = parse_str("  \n ").unwrap_err();
        assert_eq!(err.message, "Empty expression");
        assert_eq!(err.position, Position::new(2, 2));
    }

    #[test]
    fn leftover_operands_reported_at_first() {
        let err = parse_str("5 3 2 +").unwrap_err();
        assert_eq!(err.message, "Incomplete expression: too many operands");
        assert_eq!(err.position, Position::new(1, 1));
    }

    #[test]
    fn first_error_wins() {
        let err = parse_str("1 + 2 3").unwrap_err();
        assert_eq!(err.message, "Operator '+' requires two operands");
    }

    #[test]
    fn missing_end_marker() {
        let tokens = vec![
            Token::number("1", Position::new(1, 1)),
            Token::number("2", Position::new(1, 3)),
            Token::operator(ArithmeticOperator::Div, Position::new(1, 5)),
        ];
        assert_eq!(parse(tokens).unwrap().operator(), Some(ArithmeticOperator::Div));
    }
}
