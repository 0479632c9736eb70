//! Fluent builder for diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// Fluent builder for constructing diagnostics.
///
/// # Examples
///
/// ```
/// use ceresc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use ceresc_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character '@'")
///     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
///     .span(Span::new(0, 1, 1, 1))
///     .note("only ASCII letters, digits, and operators are recognized")
///     .emit(&handler);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start building a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Finish building, returning the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Finish building and emit to the handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
