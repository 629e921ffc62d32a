//! Token definitions for the O language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme it was scanned
//! from, an optional decoded [`Literal`], and the [`Span`] where it starts.

use std::fmt;

use crate::span::Span;

/// The category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Keywords
    /// `class`
    Class,
    /// `is`
    Is,
    /// `end`
    End,
    /// `extends`
    Extends,
    /// `var`
    Var,
    /// `method`
    Method,
    /// `this`
    This,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `while`
    While,
    /// `loop`
    Loop,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,
    /// `base`
    Base,

    /// A name that is not a keyword.
    Identifier,

    // Literals
    /// Decimal integer literal, e.g. `42`.
    IntegerLiteral,
    /// Decimal literal with a fractional part, e.g. `3.14`.
    RealLiteral,
    /// Double-quoted string literal.
    StringLiteral,

    // Punctuation
    /// `:`
    Colon,
    /// `:=`
    Assign,
    /// `=`
    Equal,
    /// `=>`
    Arrow,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `<`
    LAngle,
    /// `>`
    RAngle,

    /// End of input. Always the last token of a scan.
    Eof,
}

/// Keyword spellings paired with their kinds.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("class", TokenKind::Class),
    ("is", TokenKind::Is),
    ("end", TokenKind::End),
    ("extends", TokenKind::Extends),
    ("var", TokenKind::Var),
    ("method", TokenKind::Method),
    ("this", TokenKind::This),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("loop", TokenKind::Loop),
    ("return", TokenKind::Return),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("base", TokenKind::Base),
];

/// Looks up a keyword by its exact, case-sensitive spelling.
///
/// ```
/// use olc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("Class"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "class" => TokenKind::Class,
        "is" => TokenKind::Is,
        "end" => TokenKind::End,
        "extends" => TokenKind::Extends,
        "var" => TokenKind::Var,
        "method" => TokenKind::Method,
        "this" => TokenKind::This,
        "if" => TokenKind::If,
        "then" => TokenKind::Then,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "loop" => TokenKind::Loop,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "base" => TokenKind::Base,
        _ => return None,
    };
    Some(kind)
}

impl TokenKind {
    /// Returns true for the sixteen reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Is
                | TokenKind::End
                | TokenKind::Extends
                | TokenKind::Var
                | TokenKind::Method
                | TokenKind::This
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Loop
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Base
        )
    }

    /// Returns true for kinds that carry a [`Literal`] value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::RealLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Upper-case display name used by token listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Class => "CLASS",
            TokenKind::Is => "IS",
            TokenKind::End => "END",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Var => "VAR",
            TokenKind::Method => "METHOD",
            TokenKind::This => "THIS",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Loop => "LOOP",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Base => "BASE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::RealLiteral => "REAL_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Colon => "COLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::Arrow => "ARROW",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LAngle => "LANGLE",
            TokenKind::RAngle => "RANGLE",
            TokenKind::Eof => "END_OF_FILE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// `true` or `false`.
    Bool(bool),
    /// String contents with escapes decoded.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{}", v),
            Literal::Bool(v) => write!(f, "{}", v),
            Literal::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text of the token. String literals keep their
    /// quotes and undecoded escapes here.
    pub lexeme: String,
    /// Decoded value for literals and boolean keywords.
    pub value: Option<Literal>,
    /// Where the token sits in the source.
    pub span: Span,
}

impl Token {
    /// Creates a token without a literal value.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            value: None,
            span,
        }
    }

    /// Attaches a literal value.
    pub fn with_value(mut self, value: Literal) -> Self {
        self.value = Some(value);
        self
    }

    /// Line of the first character (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based).
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Whether this is the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at {}:{}",
            self.kind,
            self.lexeme,
            self.line(),
            self.column()
        )?;
        if let Some(value) = &self.value {
            write!(f, " (value: {})", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_matches_lookup() {
        for (spelling, kind) in KEYWORDS {
            assert_eq!(keyword_from_ident(spelling), Some(*kind));
            assert!(kind.is_keyword());
        }
        assert_eq!(KEYWORDS.len(), 16);
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(keyword_from_ident("While"), None);
        assert_eq!(keyword_from_ident("TRUE"), None);
        assert_eq!(keyword_from_ident("classes"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_literal_kinds() {
        assert!(TokenKind::IntegerLiteral.is_literal());
        assert!(TokenKind::False.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(!TokenKind::Identifier.is_keyword());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Assign.name(), "ASSIGN");
        assert_eq!(TokenKind::RealLiteral.to_string(), "REAL_LITERAL");
        assert_eq!(TokenKind::Eof.to_string(), "END_OF_FILE");
    }

    #[test]
    fn test_token_display_without_value() {
        let token = Token::new(TokenKind::Identifier, "x", Span::new(4, 5, 1, 5));
        assert_eq!(token.to_string(), "IDENTIFIER 'x' at 1:5");
    }

    #[test]
    fn test_token_display_with_values() {
        let int = Token::new(TokenKind::IntegerLiteral, "42", Span::new(0, 2, 1, 1))
            .with_value(Literal::Integer(42));
        assert_eq!(int.to_string(), "INTEGER_LITERAL '42' at 1:1 (value: 42)");

        let real = Token::new(TokenKind::RealLiteral, "2.75", Span::new(0, 4, 2, 3))
            .with_value(Literal::Float(2.75));
        assert_eq!(real.to_string(), "REAL_LITERAL '2.75' at 2:3 (value: 2.75)");

        let boolean = Token::new(TokenKind::False, "false", Span::new(0, 5, 1, 1))
            .with_value(Literal::Bool(false));
        assert_eq!(boolean.to_string(), "FALSE 'false' at 1:1 (value: false)");

        let string = Token::new(TokenKind::StringLiteral, "\"hi\"", Span::new(0, 4, 1, 1))
            .with_value(Literal::String("hi".to_string()));
        assert_eq!(string.to_string(), "STRING_LITERAL '\"hi\"' at 1:1 (value: \"hi\")");
    }
}
