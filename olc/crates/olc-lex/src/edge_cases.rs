//! Edge case tests for olc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, LexErrorKind, Lexer, Literal, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tokens = tokenize(source).unwrap();
        assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::Eof));
        tokens
    }

    fn lex_err(source: &str) -> LexError {
        tokenize(source).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_eof_position_on_empty_source() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
        assert_eq!(tokens[0].lexeme, "");
    }

    #[test]
    fn test_edge_eof_position_after_trailing_newline() {
        let tokens = tokenize("x\n").unwrap();
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 1));
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_lone_underscore() {
        let t = lex_all("_");
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} := 1", name));
        assert_eq!(t[1].lexeme, name);
        assert_eq!(t[2].column(), 10006);
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        let t = lex_all("Class CLASS class");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[2].kind, TokenKind::Class);
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        let t = lex_all("classy ending variable");
        assert!(t.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_bool_keywords_carry_values() {
        let t = lex_all("true false");
        assert_eq!(t[0].value, Some(Literal::Bool(true)));
        assert_eq!(t[1].value, Some(Literal::Bool(false)));
    }

    #[test]
    fn test_edge_zero() {
        let t = lex_all("0 0.0");
        assert_eq!(t[0].value, Some(Literal::Integer(0)));
        assert_eq!(t[1].value, Some(Literal::Float(0.0)));
    }

    #[test]
    fn test_edge_leading_dot_is_not_a_number() {
        let t = lex_all(".5");
        assert_eq!(t[0].kind, TokenKind::Dot);
        assert_eq!(t[1].value, Some(Literal::Integer(5)));
    }

    #[test]
    fn test_edge_overflow_reports_token_start() {
        let err = lex_err("x := 99999999999999999999");
        assert_eq!(err.kind(), LexErrorKind::IntegerOverflow);
        assert_eq!((err.line(), err.column()), (1, 6));
    }

    #[test]
    fn test_edge_huge_real_is_infinite() {
        let source = format!("{}.0", "9".repeat(400));
        let t = lex_all(&source);
        assert_eq!(t[0].value, Some(Literal::Float(f64::INFINITY)));
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].value, Some(Literal::String(String::new())));
    }

    #[test]
    fn test_edge_string_with_comment_markers() {
        let t = lex_all("\"// not /* a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(
            t[0].value,
            Some(Literal::String("// not /* a comment".to_string()))
        );
    }

    #[test]
    fn test_edge_only_quote() {
        let err = lex_err("\"");
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 2 });
    }

    #[test]
    fn test_edge_all_delimiters() {
        let t = lex_all("( ) { } [ ] , : . => := = < >");
        assert_eq!(t.len(), 14);
        assert!(t.iter().any(|t| t.kind == TokenKind::LBrace));
        assert!(t.iter().any(|t| t.kind == TokenKind::Arrow));
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("(([{<>}]))");
        assert_eq!(t.len(), 10);
        assert_eq!(t[4].kind, TokenKind::LAngle);
        assert_eq!(t[5].kind, TokenKind::RAngle);
    }

    #[test]
    fn test_edge_no_whitespace_between_tokens() {
        let t = lex_all("a:=b.c(1,2.5)");
        let kinds: Vec<TokenKind> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::IntegerLiteral,
                TokenKind::Comma,
                TokenKind::RealLiteral,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_line_comment_at_eof() {
        assert!(lex_all("// trailing").is_empty());
    }

    #[test]
    fn test_edge_block_comment_adjacent_to_tokens() {
        let t = lex_all("a/**/b");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].column(), 6);
    }

    #[test]
    fn test_edge_deeply_nested_comment() {
        let depth = 200;
        let source = format!("{}{}x", "/*".repeat(depth), "*/".repeat(depth));
        let t = lex_all(&source);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_unbalanced_nested_comment() {
        let err = lex_err("/* /* */");
        assert_eq!(err.kind(), LexErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_edge_comment_close_without_open() {
        let err = lex_err("*/");
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: '*',
                line: 1,
                column: 1
            }
        );
    }

    #[test]
    fn test_edge_non_ascii_identifier_rejected() {
        let err = lex_err("café");
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: 'é',
                line: 1,
                column: 4
            }
        );
    }

    #[test]
    fn test_edge_columns_count_characters() {
        let t = lex_all("\"ñññ\" x");
        assert_eq!(t[1].column(), 7);
        assert_eq!(t[1].span.start, 9);
    }

    #[test]
    fn test_edge_form_feed_is_not_whitespace() {
        let err = lex_err("\u{000C}");
        assert_eq!(err.kind(), LexErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn test_edge_eof_repeats() {
        let mut lexer = Lexer::new("x");
        lexer.next_token().unwrap();
        for _ in 0..3 {
            assert!(lexer.next_token().unwrap().is_eof());
        }
    }

    #[test]
    fn test_edge_iterator_stops_after_error() {
        let items: Vec<_> = Lexer::new("a $ b").collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }
}
