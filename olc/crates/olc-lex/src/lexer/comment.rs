//! Whitespace and comment skipping.
//!
//! Line comments run from `//` up to, but not including, the next newline.
//! Block comments `/* ... */` nest.

use crate::chars::is_whitespace;
use crate::error::{LexError, LexResult};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. Fails only on a block comment that
    /// is still open at end of input.
    pub fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }

            match self.cursor.current_char() {
                c if is_whitespace(c) => {
                    self.cursor.advance();
                },
                '/' => match self.cursor.peek_char(1) {
                    '/' => self.skip_line_comment(),
                    '*' => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    /// Skips a line comment (from // to end of line).
    fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment, tracking nesting depth.
    ///
    /// The error position is where end of input was reached.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        self.cursor.advance_n(2);
        let mut depth: usize = 1;

        while depth > 0 {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedComment {
                    line: self.cursor.line(),
                    column: self.cursor.column(),
                });
            }

            let c = self.cursor.current_char();
            let next = self.cursor.peek_char(1);
            if c == '/' && next == '*' {
                self.cursor.advance_n(2);
                depth += 1;
            } else if c == '*' && next == '/' {
                self.cursor.advance_n(2);
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }

        Ok(())
    }
}
