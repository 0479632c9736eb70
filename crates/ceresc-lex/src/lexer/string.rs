//! String literal scanning.
//!
//! String literals are double-quoted with no escape sequences: every
//! byte between the quotes is taken literally, and there is no way to
//! embed a `"` in a string. The token text excludes both quotes. A
//! string that hits end of input or a line terminator before its
//! closing quote is unterminated; the terminator is left unconsumed
//! and the error is attributed to the line of the opening quote.

use super::core::Lexer;
use crate::token::{LexError, Token, TokenKind};

impl<'a, 'h> Lexer<'a, 'h> {
    /// Scans a string literal. The cursor sits on the opening quote.
    pub(crate) fn lex_string(&mut self) -> Token<'a> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return self.error_token(LexError::UnterminatedString);
            }
            match self.cursor.current_char() {
                '"' => break,
                '\n' | '\r' => return self.error_token(LexError::UnterminatedString),
                _ => self.cursor.advance(),
            }
        }

        let text = self.cursor.slice_from(content_start);
        self.cursor.advance();
        self.token(TokenKind::Str(text))
    }
}
