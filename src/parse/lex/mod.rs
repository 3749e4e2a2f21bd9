use std::{iter::Peekable, str::CharIndices};

pub mod tok;
pub mod chars;

pub use tok::{Token, TokenKind};

use crate::{error::LexError, shared::operator::ArithmeticOperator, source::Position};

/// Lexer producing a stream of tokens with position data from RPN source text.
/// All cursor state lives here, so each tokenization starts from a fresh lexer.
pub struct Lexer<'src> {
    src: &'src str,
    text: Peekable<CharIndices<'src>>,
    pos: Position,
    done: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new token stream from the given source text
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            text: src.char_indices().peekable(),
            pos: Position::START,
            done: false,
        }
    }

    /// Consume the whole input, returning every token up to and including the end marker
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        let tokens = self.collect::<Result<Vec<_>, _>>()?;
        log::debug!("tokenized input into {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Consume a character from the input stream, tracking line and column
    fn char(&mut self) -> Option<(usize, char)> {
        let (idx, ch) = self.text.next()?;
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }

        Some((idx, ch))
    }

    fn peek_char(&mut self) -> Option<char> {
        self.text.peek().map(|(_, c)| c).copied()
    }

    /// Byte offset of the next unconsumed character
    fn offset(&mut self) -> usize {
        self.text.peek().map_or(self.src.len(), |(idx, _)| *idx)
    }

    fn digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.char();
        }
    }

    /// Consume the remainder of a number literal whose first character (a digit or a `-`) starts
    /// at the byte offset `start`. A `.` after the integer digits is always taken, with or
    /// without fraction digits after it
    fn number_literal(&mut self, start: usize, pos: Position) -> Token {
        self.digits();

        if self.peek_char() == Some('.') {
            self.char();
            self.digits();
        }

        let end = self.offset();
        Token::number(&self.src[start..end], pos)
    }

    /// Consume characters from the input stream and produce the next token
    fn token(&mut self) -> Result<Token, LexError> {
        let (pos, first) = loop {
            let pos = self.pos;
            let Some(next) = self.char() else {
                return Ok(Token::end(pos))
            };
            if !chars::is_separator(next.1) {
                break (pos, next)
            }
        };

        match first.1 {
            '-' => match self.peek_char() {
                Some(c) if c.is_ascii_digit() => Ok(self.number_literal(first.0, pos)),
                _ => Ok(Token::operator(ArithmeticOperator::Sub, pos)),
            },
            d if d.is_ascii_digit() => Ok(self.number_literal(first.0, pos)),
            c => ArithmeticOperator::from_char(c)
                .map(|op| Token::operator(op, pos))
                .ok_or_else(|| LexError::unexpected_char(c, pos)),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens through the end marker or the first error, then stops
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None
        }

        let next = self.token();
        self.done = match &next {
            Ok(tok) => tok.kind == TokenKind::EndOfInput,
            Err(_) => true,
        };

        if let Ok(tok) = &next {
            log::trace!("{:?} {:?} at {}", tok.kind, tok.text, tok.pos);
        }

        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_is_only_end_marker() {
        let tokens = Lexer::new("").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::end(Position::new(1, 1))]);
    }

    #[test]
    fn whitespace_only_input() {
        let tokens = Lexer::new("  \t\n ").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::end(Position::new(2, 2))]);
    }

    #[test]
    fn operators_and_numbers() {
        assert_eq!(
            kinds("5 3 + 2 * 1 - 4 /"),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Operator(ArithmeticOperator::Add),
                TokenKind::Number,
                TokenKind::Operator(ArithmeticOperator::Mul),
                TokenKind::Number,
                TokenKind::Operator(ArithmeticOperator::Sub),
                TokenKind::Number,
                TokenKind::Operator(ArithmeticOperator::Div),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn number_text_is_verbatim() {
        let tokens = Lexer::new("3.14 007 1.50").tokenize().unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["3.14", "007", "1.50", ""]);
    }

    #[test]
    fn minus_followed_by_digit_is_negative_literal() {
        let tokens = Lexer::new("5 -3 +").tokenize().unwrap();
        assert_eq!(tokens[1], Token::number("-3", Position::new(1, 3)));
        assert_eq!(tokens[2].kind, TokenKind::Operator(ArithmeticOperator::Add));
    }

    #[test]
    fn detached_minus_is_operator() {
        let tokens = Lexer::new("5 3 - -").tokenize().unwrap();
        assert_eq!(tokens[2], Token::operator(ArithmeticOperator::Sub, Position::new(1, 5)));
        assert_eq!(tokens[3], Token::operator(ArithmeticOperator::Sub, Position::new(1, 7)));
    }

    #[test]
    fn operators_need_no_separator() {
        assert_eq!(
            kinds("1 2+3*"),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Operator(ArithmeticOperator::Add),
                TokenKind::Number,
                TokenKind::Operator(ArithmeticOperator::Mul),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let tokens = Lexer::new("5 3\n  +\t2").tokenize().unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(1, 1),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(2, 5),
                Position::new(2, 6),
            ]
        );
    }

    #[test]
    fn unexpected_character() {
        let err = Lexer::new("2 3 ^").tokenize().unwrap_err();
        assert_eq!(err, LexError::unexpected_char('^', Position::new(1, 5)));
    }

    #[test]
    fn trailing_dot_is_part_of_number() {
        let tokens = Lexer::new("5. 3 +").tokenize().unwrap();
        assert_eq!(tokens[0], Token::number("5.", Position::new(1, 1)));
        assert_eq!(tokens[1], Token::number("3", Position::new(1, 4)));
    }

    #[test]
    fn leading_dot_is_unexpected() {
        let err = Lexer::new(".5").tokenize().unwrap_err();
        assert_eq!(err, LexError::unexpected_char('.', Position::new(1, 1)));
    }

    #[test]
    fn second_dot_is_unexpected() {
        let err = Lexer::new("5.3.2").tokenize().unwrap_err();
        assert_eq!(err, LexError::unexpected_char('.', Position::new(1, 4)));
    }

    #[test]
    fn negative_decimal_literal() {
        let tokens = Lexer::new("-2.5 3 *").tokenize().unwrap();
        assert_eq!(tokens[0], Token::number("-2.5", Position::new(1, 1)));
        assert_eq!(tokens[1], Token::number("3", Position::new(1, 6)));
    }

    #[test]
    fn end_marker_follows_last_token() {
        let tokens = Lexer::new("5 3 +").tokenize().unwrap();
        assert_eq!(tokens.last(), Some(&Token::end(Position::new(1, 6))));
    }

    #[test]
    fn stream_stops_after_error() {
        let mut lexer = Lexer::new("1 x 2");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }
}
