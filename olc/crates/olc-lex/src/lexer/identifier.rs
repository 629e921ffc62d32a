//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of ASCII alphanumerics and underscores, then
    /// looks the run up in the keyword table. `true` and `false` carry their
    /// boolean value.
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        match keyword_from_ident(text) {
            Some(TokenKind::True) => self.make_token(TokenKind::True).with_value(Literal::Bool(true)),
            Some(TokenKind::False) => {
                self.make_token(TokenKind::False).with_value(Literal::Bool(false))
            },
            Some(kind) => self.make_token(kind),
            None => self.make_token(TokenKind::Identifier),
        }
    }
}
