//! ceresc-util - Foundation types for the Ceres compiler front end.
//!
//! This crate provides the types shared by every compilation phase:
//!
//! - [`span`] - Source location tracking ([`Span`])
//! - [`diagnostic`] - Error and warning reporting ([`Handler`],
//!   [`Diagnostic`], [`DiagnosticBuilder`], [`DiagnosticCode`])
//!
//! # Example
//!
//! ```
//! use ceresc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
