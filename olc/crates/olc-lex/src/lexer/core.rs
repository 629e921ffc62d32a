//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, token dispatch, and the
//! drivers that turn repeated `next_token` calls into a token sequence.

use std::iter::FusedIterator;

use crate::chars::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for the O programming language.
///
/// The lexer borrows a complete source buffer and produces one token per
/// [`Lexer::next_token`] call. It skips whitespace and comments, tracks
/// line and column through its [`Cursor`], and stops at the first lexical
/// error.
///
/// # Example
///
/// ```
/// use olc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x := 1");
/// let kinds: Vec<TokenKind> = lexer
///     .tokenize()
///     .unwrap()
///     .into_iter()
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Var,
///         TokenKind::Identifier,
///         TokenKind::Assign,
///         TokenKind::IntegerLiteral,
///         TokenKind::Eof,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has yielded the end-of-input token or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Tokenizes the rest of the input.
    ///
    /// The returned sequence always ends with exactly one
    /// [`TokenKind::Eof`] token. The first lexical error aborts the whole
    /// pass and is returned instead.
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the first
    /// character of the token. At end of input this returns an
    /// end-of-input token with an empty lexeme, on every call.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments()?;
        self.start_token();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        match self.cursor.current_char() {
            '.' => Ok(self.lex_single(TokenKind::Dot)),
            ',' => Ok(self.lex_single(TokenKind::Comma)),
            '(' => Ok(self.lex_single(TokenKind::LParen)),
            ')' => Ok(self.lex_single(TokenKind::RParen)),
            '[' => Ok(self.lex_single(TokenKind::LBracket)),
            ']' => Ok(self.lex_single(TokenKind::RBracket)),
            '{' => Ok(self.lex_single(TokenKind::LBrace)),
            '}' => Ok(self.lex_single(TokenKind::RBrace)),
            '<' => Ok(self.lex_single(TokenKind::LAngle)),
            '>' => Ok(self.lex_single(TokenKind::RAngle)),
            ':' => Ok(self.lex_colon()),
            '=' => Ok(self.lex_equals()),
            '"' => self.lex_string(),
            c if is_ident_start(c) => Ok(self.lex_identifier()),
            c if is_digit(c) => self.lex_number(),
            c => Err(LexError::UnexpectedCharacter {
                ch: c,
                line: self.token_start_line,
                column: self.token_start_column,
            }),
        }
    }

    /// Records the cursor position as the start of the next token.
    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the current token start to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token of `kind` whose lexeme is the text consumed so far.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.slice_from(self.token_start), self.token_span())
    }

    /// Line and column where the current token started.
    pub(crate) fn token_start_position(&self) -> (u32, u32) {
        (self.token_start_line, self.token_start_column)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    /// Yields every token including the final end-of-input token, or the
    /// first error, and then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if !matches!(&result, Ok(token) if !token.is_eof()) {
            self.finished = true;
        }
        Some(result)
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
