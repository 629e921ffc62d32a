//! Number literal lexing.
//!
//! Only decimal literals exist: an integer is a run of digits, a real
//! literal is digits, a dot, and more digits. A dot that is not followed
//! by a digit is left for the next token so that `123.size` lexes as an
//! integer, a dot and an identifier.

use crate::chars::is_digit;
use crate::error::{LexError, LexResult};
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or real literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `007` (parsed as `i64`)
    /// - Real: `3.14`, `0.5` (parsed as `f64`)
    pub fn lex_number(&mut self) -> LexResult<Token> {
        self.cursor.eat_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);

            let text = self.cursor.slice_from(self.token_start);
            // digits '.' digits is always valid f64 syntax; huge values round to inf
            let value = text.parse::<f64>().unwrap_or(f64::INFINITY);
            return Ok(self.make_token(TokenKind::RealLiteral).with_value(Literal::Float(value)));
        }

        let text = self.cursor.slice_from(self.token_start);
        match text.parse::<i64>() {
            Ok(value) => Ok(self
                .make_token(TokenKind::IntegerLiteral)
                .with_value(Literal::Integer(value))),
            Err(_) => {
                let (line, column) = self.token_start_position();
                Err(LexError::IntegerOverflow {
                    literal: text.to_string(),
                    line,
                    column,
                })
            },
        }
    }
}
