//! Identifier and keyword scanning.

use super::core::Lexer;
use crate::token::{self, Token, TokenKind};

/// Returns true if `c` can start an identifier.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a, 'h> Lexer<'a, 'h> {
    /// Scans an identifier or keyword.
    ///
    /// The longest run of identifier characters is consumed, then the
    /// whole lexeme is checked against the keyword table. A keyword match
    /// must be exact: `forever` is one identifier, never `for` plus
    /// `ever`.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = token::keyword_from_ident(text).unwrap_or(TokenKind::Ident(text));
        self.token(kind)
    }
}
