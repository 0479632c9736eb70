//! Whitespace and comment skipping.
//!
//! Whitespace and comments are not tokens: they are consumed silently
//! between token requests. Line comments start with `//` and run to the
//! end of the line; the terminating newline is left for the whitespace
//! loop so line counting stays in one place.

use super::core::Lexer;

impl<'a, 'h> Lexer<'a, 'h> {
    /// Skips whitespace and comments until the next token character.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `//` comment up to (not including) the line terminator.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '\n' || c == '\r' {
                break;
            }
            self.cursor.advance();
        }
    }
}
