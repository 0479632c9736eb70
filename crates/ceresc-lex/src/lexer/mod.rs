//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused
//! components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Numeric literal scanning
//! - `string` - String literal scanning
//! - `operator` - Operator and punctuation scanning
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
