//! String literal lexing.
//!
//! Strings are delimited by double quotes and may span lines. The escapes
//! `\n`, `\t`, `\r`, `\\` and `\"` are decoded into the token value; any
//! other `\X` is kept as written. The lexeme always holds the raw text.

use crate::error::{LexError, LexResult};
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// End of input before the closing quote is reported where it was hit,
    /// not at the opening quote.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            let Some(c) = self.cursor.advance() else {
                return Err(self.unterminated_string());
            };

            match c {
                '"' => break,
                '\\' => {
                    let Some(escaped) = self.cursor.advance() else {
                        return Err(self.unterminated_string());
                    };
                    match escaped {
                        'n' => content.push('\n'),
                        't' => content.push('\t'),
                        'r' => content.push('\r'),
                        '\\' => content.push('\\'),
                        '"' => content.push('"'),
                        other => {
                            content.push('\\');
                            content.push(other);
                        },
                    }
                },
                _ => content.push(c),
            }
        }

        Ok(self
            .make_token(TokenKind::StringLiteral)
            .with_value(Literal::String(content)))
    }

    fn unterminated_string(&self) -> LexError {
        LexError::UnterminatedString {
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{LexError, LexResult};
    use crate::token::{Literal, Token, TokenKind};
    use crate::Lexer;

    fn lex_str(source: &str) -> LexResult<Token> {
        let mut lexer = Lexer::new(source);
        lexer.lex_string()
    }

    fn value(source: &str) -> String {
        match lex_str(source).unwrap().value {
            Some(Literal::String(s)) => s,
            other => panic!("expected string value, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_string() {
        let token = lex_str("\"hello\"").unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "\"hello\"");
        assert_eq!(token.value, Some(Literal::String("hello".to_string())));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(value("\"\""), "");
    }

    #[test]
    fn test_known_escapes() {
        assert_eq!(value(r#""a\nb""#), "a\nb");
        assert_eq!(value(r#""a\tb""#), "a\tb");
        assert_eq!(value(r#""a\rb""#), "a\rb");
        assert_eq!(value(r#""a\\b""#), "a\\b");
        assert_eq!(value(r#""escaped\"quote""#), "escaped\"quote");
    }

    #[test]
    fn test_unknown_escape_is_kept() {
        assert_eq!(value(r#""a\qb""#), "a\\qb");
        assert_eq!(value(r#""\0""#), "\\0");
    }

    #[test]
    fn test_lexeme_keeps_raw_escapes() {
        let token = lex_str(r#""a\nb" tail"#).unwrap();
        assert_eq!(token.lexeme, r#""a\nb""#);
    }

    #[test]
    fn test_multiline_string() {
        let mut lexer = Lexer::new("\"one\ntwo\" x");
        let token = lexer.lex_string().unwrap();
        assert_eq!(token.value, Some(Literal::String("one\ntwo".to_string())));
        assert_eq!((token.line(), token.column()), (1, 1));
        assert_eq!((lexer.line(), lexer.column()), (2, 5));
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex_str("\"unterminated").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 14 });
    }

    #[test]
    fn test_unterminated_after_backslash() {
        let err = lex_str("\"abc\\").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 6 });
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let err = lex_str(r#""abc\""#).unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 7 });
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(value("\"héllo → wörld\""), "héllo → wörld");
    }
}
