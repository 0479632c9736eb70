//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct, the classifier that
//! routes each token request to a sub-scanner, and error-token creation.

use ceresc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{LexError, Token, TokenKind};

/// Lexer for Ceres source code.
///
/// The lexer transforms source text into a stream of tokens, produced
/// lazily one per [`next_token`](Lexer::next_token) call. It owns its
/// cursor, so independent lexers over the same buffer never share state.
///
/// Lexical errors are reported twice: as an error-kind token returned to
/// the caller and as a diagnostic emitted to the session [`Handler`].
/// An error token is terminal for the stream; requesting further tokens
/// after one is unsupported.
pub struct Lexer<'a, 'h> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic handler for error reporting.
    handler: &'h mut Handler,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Buffered token for single-token lookahead.
    peeked: Option<Token<'a>>,
}

impl<'a, 'h> Lexer<'a, 'h> {
    /// Creates a new lexer for the given source code, positioned at the
    /// start of line 1.
    pub fn new(source: &'a str, handler: &'h mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            peeked: None,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace
    /// and comments, then dispatches to the appropriate scanning method
    /// based on the current character. The caller requests tokens until
    /// one of kind [`TokenKind::Eof`] or [`TokenKind::Error`] is returned.
    pub fn next_token(&mut self) -> Token<'a> {
        if let Some(token) = self.peeked.take() {
            return token;
        }
        self.scan_token()
    }

    /// Returns the next token without consuming it.
    ///
    /// At most one token is buffered; consumers needing deeper lookahead
    /// must buffer tokens themselves. Peeking does not change scanning
    /// semantics.
    pub fn peek_token(&mut self) -> Token<'a> {
        match self.peeked {
            Some(token) => token,
            None => {
                let token = self.scan_token();
                self.peeked = Some(token);
                token
            }
        }
    }

    /// Scans one token starting at the first unconsumed character.
    fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.token(TokenKind::Eof);
        }

        match self.cursor.current_char() {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            '?' => self.single(TokenKind::Question),
            '%' => self.single(TokenKind::Percent),
            '.' => self.single(TokenKind::Dot),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '"' => self.lex_string(),
            c if super::identifier::is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.error_token(LexError::UnexpectedChar(c))
            }
        }
    }

    /// Builds a token of the given kind at the current token start line.
    #[inline]
    pub(crate) fn token(&self, kind: TokenKind<'a>) -> Token<'a> {
        Token::new(kind, self.token_start_line)
    }

    /// Consumes one character and builds a single-character token.
    #[inline]
    pub(crate) fn single(&mut self, kind: TokenKind<'a>) -> Token<'a> {
        self.cursor.advance();
        self.token(kind)
    }

    /// Builds an error token and mirrors it to the diagnostic handler.
    pub(crate) fn error_token(&mut self, error: LexError) -> Token<'a> {
        let code = match error {
            LexError::UnterminatedString => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexError::UnexpectedChar(_) => DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
        };
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(error.to_string())
            .code(code)
            .span(span)
            .emit(&*self.handler);
        self.token(TokenKind::Error(error))
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a, 'h> Iterator for Lexer<'a, 'h> {
    type Item = Token<'a>;

    /// Yields tokens up to and including the first error token, and
    /// excluding end-of-input. Lexical errors are terminal: after an
    /// error token the iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = &self.peeked {
            if token.is_error() {
                return None;
            }
        }
        let token = self.next_token();
        if token.is_eof() {
            None
        } else if token.is_error() {
            // Hold the error in the peek slot so further calls fuse.
            self.peeked = Some(token);
            Some(token)
        } else {
            Some(token)
        }
    }
}
