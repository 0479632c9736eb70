//! Numeric literal scanning.
//!
//! Integer and float literals are unsigned digit sequences; a leading
//! minus is always tokenized as a separate operator. A `.` belongs to
//! the number only when a digit follows it, so `3.` is an integer then
//! a dot, and `.3` is a dot then an integer. At most one dot is ever
//! consumed: `1.2.3` is a float followed by a dot and an integer.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a, 'h> Lexer<'a, 'h> {
    /// Scans an integer or float literal.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut is_float = false;
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        if is_float {
            self.token(TokenKind::Float(text))
        } else {
            self.token(TokenKind::Int(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;
    use ceresc_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind<'_>> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            out.push(token.kind);
        }
        out
    }

    #[test]
    fn test_integer_literal() {
        assert_eq!(kinds("42"), vec![TokenKind::Int("42")]);
        assert_eq!(kinds("0"), vec![TokenKind::Int("0")]);
        assert_eq!(kinds("007"), vec![TokenKind::Int("007")]);
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(kinds("3.14"), vec![TokenKind::Float("3.14")]);
        assert_eq!(kinds("0.5"), vec![TokenKind::Float("0.5")]);
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_number() {
        assert_eq!(kinds("3."), vec![TokenKind::Int("3"), TokenKind::Dot]);
    }

    #[test]
    fn test_leading_dot_is_not_part_of_number() {
        assert_eq!(kinds(".3"), vec![TokenKind::Dot, TokenKind::Int("3")]);
    }

    #[test]
    fn test_second_dot_terminates_float() {
        assert_eq!(
            kinds("1.2.3"),
            vec![
                TokenKind::Float("1.2"),
                TokenKind::Dot,
                TokenKind::Int("3"),
            ]
        );
    }

    #[test]
    fn test_minus_is_separate_from_literal() {
        assert_eq!(kinds("-7"), vec![TokenKind::Minus, TokenKind::Int("7")]);
        assert_eq!(
            kinds("-2.5"),
            vec![TokenKind::Minus, TokenKind::Float("2.5")]
        );
    }

    #[test]
    fn test_number_adjacent_to_identifier() {
        // Maximal digits, then a fresh identifier token.
        assert_eq!(
            kinds("12abc"),
            vec![TokenKind::Int("12"), TokenKind::Ident("abc")]
        );
    }

    #[test]
    fn test_number_followed_by_operator_not_swallowed() {
        assert_eq!(
            kinds("1+2"),
            vec![TokenKind::Int("1"), TokenKind::Plus, TokenKind::Int("2")]
        );
        assert_eq!(
            kinds("42)"),
            vec![TokenKind::Int("42"), TokenKind::RParen]
        );
    }
}
