//! Operator scanning.
//!
//! Every multi-character operator is resolved with a single character
//! of lookahead via [`Cursor::match_char`](crate::cursor::Cursor), so
//! the scanner never backtracks. Maximal munch applies: `==` is one
//! token, `===` is `==` then `=`.

use super::core::Lexer;
use crate::token::{LexError, Token, TokenKind};

impl<'a, 'h> Lexer<'a, 'h> {
    /// Scans `+`, `++` or `+=`.
    pub(crate) fn lex_plus(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('+') {
            TokenKind::PlusPlus
        } else if self.cursor.match_char('=') {
            TokenKind::PlusEq
        } else {
            TokenKind::Plus
        };
        self.token(kind)
    }

    /// Scans `-`, `--` or `-=`. A minus is always its own token, never
    /// folded into a following numeric literal.
    pub(crate) fn lex_minus(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('-') {
            TokenKind::MinusMinus
        } else if self.cursor.match_char('=') {
            TokenKind::MinusEq
        } else {
            TokenKind::Minus
        };
        self.token(kind)
    }

    /// Scans `*` or `*=`.
    pub(crate) fn lex_star(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::StarEq
        } else {
            TokenKind::Star
        };
        self.token(kind)
    }

    /// Scans `/` or `/=`. Comments were already skipped, so a second
    /// slash can no longer appear here.
    pub(crate) fn lex_slash(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::SlashEq
        } else {
            TokenKind::Slash
        };
        self.token(kind)
    }

    /// Scans `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::EqEq
        } else {
            TokenKind::Eq
        };
        self.token(kind)
    }

    /// Scans `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::NotEq
        } else {
            TokenKind::Bang
        };
        self.token(kind)
    }

    /// Scans `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else {
            TokenKind::Lt
        };
        self.token(kind)
    }

    /// Scans `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else {
            TokenKind::Gt
        };
        self.token(kind)
    }

    /// Scans `&&`. A lone `&` has no meaning in the grammar.
    pub(crate) fn lex_ampersand(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.token(TokenKind::AndAnd)
        } else {
            self.error_token(LexError::UnexpectedChar('&'))
        }
    }

    /// Scans `||`. A lone `|` has no meaning in the grammar.
    pub(crate) fn lex_pipe(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.token(TokenKind::OrOr)
        } else {
            self.error_token(LexError::UnexpectedChar('|'))
        }
    }
}
