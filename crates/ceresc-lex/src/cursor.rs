//! Character cursor for traversing source code.
//!
//! This module provides the [`Cursor`] struct which maintains position
//! state while iterating through source text. The token grammar is
//! ASCII-only, but the cursor steps over multi-byte UTF-8 sequences
//! safely so that stray non-ASCII input surfaces as a lexical error
//! instead of a panic.
//!
//! The cursor only ever moves forward, and its line counter only ever
//! increases. A CRLF pair counts as a single line increment.

/// A cursor for traversing source code character by character.
///
/// The cursor is an owned value: one lives per tokenization session, and
/// independent cursors over the same buffer never share state.
///
/// # Example
///
/// ```
/// use ceresc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x = 42");
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position, or `'\0'` at the end
    /// of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character at the given byte offset from the current
    /// position, or `'\0'` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use ceresc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("+=");
    /// assert_eq!(cursor.peek_char(0), '+');
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (the entire token grammar).
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor by one character.
    ///
    /// Line tracking: LF increments the line counter; CR increments it
    /// only when not immediately followed by LF, so a CRLF pair counts
    /// once. Does nothing at the end of the source.
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            match b {
                b'\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                b'\r' => {
                    if self.position >= self.source.len()
                        || self.source.as_bytes()[self.position] != b'\n'
                    {
                        self.line += 1;
                        self.column = 1;
                    }
                }
                _ => self.column += 1,
            }
            return;
        }

        // Multi-byte UTF-8: step over the whole sequence.
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the expected character if it is next.
    ///
    /// Returns true if the character was matched and consumed. This is
    /// the single character of lookahead used to disambiguate
    /// two-character operators; no backtracking ever happens.
    ///
    /// # Example
    ///
    /// ```
    /// use ceresc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use ceresc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("var x = 42");
        assert_eq!(cursor.current_char(), 'v');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_past_end() {
        let cursor = Cursor::new("a");
        assert_eq!(cursor.peek_char(1), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_lf_increments_line() {
        let mut cursor = Cursor::new("a\nb");
        assert_eq!(cursor.line(), 1);
        cursor.advance_n(2);
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_crlf_counts_one_line() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance(); // 'a'
        cursor.advance(); // '\r' - no increment yet, LF follows
        assert_eq!(cursor.line(), 1);
        cursor.advance(); // '\n'
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_lone_cr_increments_line() {
        let mut cursor = Cursor::new("a\rb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("+=");
        assert!(cursor.match_char('+'));
        assert!(!cursor.match_char('+'));
        assert!(cursor.match_char('='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("const y");
        let start = cursor.position();
        cursor.advance_n(5);
        assert_eq!(cursor.slice_from(start), "const");
    }

    #[test]
    fn test_non_ascii_stepped_over_whole() {
        let mut cursor = Cursor::new("α=");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), '=');
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance_n(2);
        assert_eq!(cursor.column(), 3);
        cursor.advance(); // '\n'
        assert_eq!(cursor.column(), 1);
        cursor.advance();
        assert_eq!(cursor.column(), 2);
    }
}
