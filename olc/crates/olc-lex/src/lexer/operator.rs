//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, delimiters, and punctuation.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one-character token of the given kind.
    pub fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Lexes colon or assignment.
    ///
    /// Handles: `:`, `:=`
    pub fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign)
        } else {
            self.make_token(TokenKind::Colon)
        }
    }

    /// Lexes equals or fat arrow.
    ///
    /// Handles: `=`, `=>`
    pub fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            self.make_token(TokenKind::Arrow)
        } else {
            self.make_token(TokenKind::Equal)
        }
    }
}
