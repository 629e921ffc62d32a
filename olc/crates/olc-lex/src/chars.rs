//! Character classes recognised by the O lexer.
//!
//! The language is ASCII-only outside of string literals and comments; any
//! other character falls through to an unexpected-character error.

/// Whitespace skipped between tokens.
///
/// ```
/// use olc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\u{00A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Checks if a character can start an identifier or keyword.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier or keyword.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
