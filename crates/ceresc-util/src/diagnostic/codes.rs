//! Diagnostic codes for categorizing front-end errors.

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" for
/// errors or "W" for warnings and `number` is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g. "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Lexer - unexpected character
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - unterminated string literal
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1002);

    /// E0101: Driver - input file could not be read
    pub const E_DRIVER_IO: Self = Self::new("E", 101);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
