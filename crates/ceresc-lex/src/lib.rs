//! Lexical analysis for the Ceres compiler.
//!
//! This crate turns Ceres source text into a stream of tokens. The
//! [`Lexer`] is pull-based: nothing is scanned until a token is
//! requested, and exactly one token is produced per request. Token
//! lexemes borrow from the source buffer, so tokens are cheap `Copy`
//! values that remain valid for the lifetime of the input.
//!
//! # Example
//!
//! ```
//! use ceresc_lex::{Lexer, TokenKind};
//! use ceresc_util::Handler;
//!
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new("var x = 42", &mut handler);
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Var);
//! assert_eq!(lexer.next_token().kind, TokenKind::Ident("x"));
//! assert_eq!(lexer.next_token().kind, TokenKind::Eq);
//! assert_eq!(lexer.next_token().kind, TokenKind::Int("42"));
//! assert_eq!(lexer.next_token().kind, TokenKind::Eof);
//! ```

#![warn(missing_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, LexError, Token, TokenKind};
