//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing source code
//! locations as byte offsets plus line/column information.

/// Source location span
///
/// A `Span` represents a range in source code, identified by byte offsets
/// (start, end) and the line/column where the range begins. Line and column
/// are 1-based; offsets are 0-based byte positions into the source buffer.
///
/// # Examples
///
/// ```
/// use ceresc_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 11);
/// assert_eq!(span.len(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number where the span begins (1-based)
    pub line: u32,
    /// Column number where the span begins (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use ceresc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 11);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-length span at a single location
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Extract the spanned text from a source buffer.
    ///
    /// Returns `None` if the span is out of bounds for the buffer.
    pub fn snippet<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}
