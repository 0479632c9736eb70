//! Token type definitions.
//!
//! A [`Token`] is the unit of lexer output: a classified kind plus the
//! 1-based source line it started on. Kinds that carry a literal value
//! (identifiers, numbers, strings) hold a `&str` borrowed from the source
//! buffer, so token text can never outlive the buffer it points into.

use std::fmt;
use thiserror::Error;

/// A lexical error condition, carried inside an error token.
///
/// The set is closed: these are the only two ways scanning can fail.
/// Messages are fixed; the offending location travels on the token's line
/// and the diagnostic span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// An opening quote with no closing quote before a line break or
    /// end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that does not start any recognized token form.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

/// The closed set of token kinds produced by the lexer.
///
/// Literal-carrying kinds borrow their text from the source buffer; the
/// borrowed slice never includes string delimiter quotes. Fixed-spelling
/// kinds carry no payload because their spelling is implied by the kind
/// (see [`TokenKind::spelling`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'src> {
    /// Identifier, e.g. `offset` or `_tmp2`
    Ident(&'src str),
    /// Integer literal, e.g. `42`
    Int(&'src str),
    /// Floating-point literal, e.g. `3.14`
    Float(&'src str),
    /// String literal content, quotes excluded
    Str(&'src str),
    /// Boolean literal `true`
    True,
    /// Boolean literal `false`
    False,

    // Keywords
    /// `case`
    Case,
    /// `const`
    Const,
    /// `default`
    Default,
    /// `else`
    Else,
    /// `for`
    For,
    /// `if`
    If,
    /// `return`
    Return,
    /// `switch`
    Switch,
    /// `type`
    Type,
    /// `var`
    Var,
    /// `while`
    While,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `?`
    Question,

    // Operators
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `!`
    Bang,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,

    /// A recoverable lexical error; terminal for the token stream
    Error(LexError),
    /// End of input
    Eof,
}

impl<'src> TokenKind<'src> {
    /// Every fixed-spelling kind, for exhaustive spelling checks.
    pub const FIXED: [TokenKind<'static>; 44] = [
        TokenKind::True,
        TokenKind::False,
        TokenKind::Case,
        TokenKind::Const,
        TokenKind::Default,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Return,
        TokenKind::Switch,
        TokenKind::Type,
        TokenKind::Var,
        TokenKind::While,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Question,
        TokenKind::Eq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::PlusPlus,
        TokenKind::MinusMinus,
        TokenKind::PlusEq,
        TokenKind::MinusEq,
        TokenKind::StarEq,
        TokenKind::SlashEq,
        TokenKind::Bang,
        TokenKind::AndAnd,
        TokenKind::OrOr,
    ];

    /// Canonical spelling of a fixed-spelling kind.
    ///
    /// Returns `None` for kinds whose text comes from the source buffer
    /// (identifiers, literals, errors) and for end-of-input.
    pub fn spelling(&self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Case => "case",
            TokenKind::Const => "const",
            TokenKind::Default => "default",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Return => "return",
            TokenKind::Switch => "switch",
            TokenKind::Type => "type",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::Bang => "!",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            _ => return None,
        };
        Some(spelling)
    }

    /// Upper-case kind name used by the token dump.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "IDENTIFIER",
            TokenKind::Int(_) => "INT",
            TokenKind::Float(_) => "FLOAT",
            TokenKind::Str(_) => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Case => "CASE",
            TokenKind::Const => "CONST",
            TokenKind::Default => "DEFAULT",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Return => "RETURN",
            TokenKind::Switch => "SWITCH",
            TokenKind::Type => "TYPE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::LParen => "LEFT_PAREN",
            TokenKind::RParen => "RIGHT_PAREN",
            TokenKind::LBrace => "LEFT_BRACE",
            TokenKind::RBrace => "RIGHT_BRACE",
            TokenKind::LBracket => "LEFT_BRACKET",
            TokenKind::RBracket => "RIGHT_BRACKET",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Question => "QUESTION",
            TokenKind::Eq => "EQUAL",
            TokenKind::EqEq => "EQUAL_EQUAL",
            TokenKind::NotEq => "BANG_EQUAL",
            TokenKind::Lt => "LESS",
            TokenKind::LtEq => "LESS_EQUAL",
            TokenKind::Gt => "GREATER",
            TokenKind::GtEq => "GREATER_EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::PlusPlus => "PLUS_PLUS",
            TokenKind::MinusMinus => "MINUS_MINUS",
            TokenKind::PlusEq => "PLUS_EQUAL",
            TokenKind::MinusEq => "MINUS_EQUAL",
            TokenKind::StarEq => "STAR_EQUAL",
            TokenKind::SlashEq => "SLASH_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::AndAnd => "AND",
            TokenKind::OrOr => "OR",
            TokenKind::Error(_) => "ERROR",
            TokenKind::Eof => "EOF",
        }
    }

    /// Literal text for kinds that borrow from the source buffer.
    pub fn text(&self) -> Option<&'src str> {
        match self {
            TokenKind::Ident(text)
            | TokenKind::Int(text)
            | TokenKind::Float(text)
            | TokenKind::Str(text) => Some(text),
            _ => None,
        }
    }
}

/// Map an identifier to its keyword kind, if it is a reserved word.
///
/// The comparison is a full-slice match, so it is exact in both length
/// and content: `forever` is an identifier, never the `for` keyword.
pub fn keyword_from_ident<'src>(ident: &str) -> Option<TokenKind<'src>> {
    let kind = match ident {
        "case" => TokenKind::Case,
        "const" => TokenKind::Const,
        "default" => TokenKind::Default,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "return" => TokenKind::Return,
        "switch" => TokenKind::Switch,
        "true" => TokenKind::True,
        "type" => TokenKind::Type,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// A classified lexical unit: a kind plus the 1-based line it started on.
///
/// Tokens are small `Copy` values created fresh on every
/// [`Lexer::next_token`](crate::Lexer::next_token) call; the lexer keeps
/// no history of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is, with any borrowed literal text.
    pub kind: TokenKind<'src>,
    /// The 1-based source line the token started on.
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Create a token
    #[inline]
    pub fn new(kind: TokenKind<'src>, line: u32) -> Self {
        Self { kind, line }
    }

    /// True for the end-of-input token
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// True for error tokens
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }
}

impl fmt::Display for Token<'_> {
    /// Human-readable dump line, one token per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident(text) => write!(f, "IDENTIFIER '{}' {}", text, self.line),
            TokenKind::Int(text) => write!(f, "INT |{}| {}", text, self.line),
            TokenKind::Float(text) => write!(f, "FLOAT |{}| {}", text, self.line),
            TokenKind::Str(text) => write!(f, "STRING \"{}\" {}", text, self.line),
            TokenKind::Error(err) => write!(f, "ERROR: {} at line {}", err, self.line),
            TokenKind::Eof => write!(f, "EOF {}", self.line),
            kind => {
                // Remaining kinds all have a fixed spelling.
                let spelling = kind.spelling().unwrap_or("?");
                write!(f, "{} {} {}", kind.name(), spelling, self.line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_exact() {
        assert_eq!(keyword_from_ident("for"), Some(TokenKind::For));
        assert_eq!(keyword_from_ident("forever"), None);
        assert_eq!(keyword_from_ident("fo"), None);
        assert_eq!(keyword_from_ident("whil"), None);
        assert_eq!(keyword_from_ident("whiles"), None);
    }

    #[test]
    fn test_keyword_lookup_case_sensitive() {
        assert_eq!(keyword_from_ident("If"), None);
        assert_eq!(keyword_from_ident("VAR"), None);
        assert_eq!(keyword_from_ident("if"), Some(TokenKind::If));
    }

    #[test]
    fn test_booleans_are_keywords() {
        assert_eq!(keyword_from_ident("true"), Some(TokenKind::True));
        assert_eq!(keyword_from_ident("false"), Some(TokenKind::False));
    }

    #[test]
    fn test_every_fixed_kind_has_a_spelling() {
        for kind in TokenKind::FIXED {
            assert!(kind.spelling().is_some(), "{:?} has no spelling", kind);
        }
    }

    #[test]
    fn test_payload_kinds_have_no_spelling() {
        assert_eq!(TokenKind::Ident("x").spelling(), None);
        assert_eq!(TokenKind::Int("1").spelling(), None);
        assert_eq!(TokenKind::Eof.spelling(), None);
        assert_eq!(TokenKind::Error(LexError::UnterminatedString).spelling(), None);
    }

    #[test]
    fn test_keyword_spellings_round_trip_through_lookup() {
        for kind in TokenKind::FIXED {
            let spelling = kind.spelling().unwrap();
            if spelling.chars().all(|c| c.is_ascii_lowercase()) {
                assert_eq!(keyword_from_ident(spelling), Some(kind));
            }
        }
    }

    #[test]
    fn test_text_accessor() {
        assert_eq!(TokenKind::Ident("abc").text(), Some("abc"));
        assert_eq!(TokenKind::Str("hi").text(), Some("hi"));
        assert_eq!(TokenKind::Plus.text(), None);
    }

    #[test]
    fn test_display_ident() {
        let token = Token::new(TokenKind::Ident("count"), 4);
        assert_eq!(format!("{}", token), "IDENTIFIER 'count' 4");
    }

    #[test]
    fn test_display_literals() {
        assert_eq!(format!("{}", Token::new(TokenKind::Int("42"), 1)), "INT |42| 1");
        assert_eq!(
            format!("{}", Token::new(TokenKind::Float("3.14"), 2)),
            "FLOAT |3.14| 2"
        );
        assert_eq!(
            format!("{}", Token::new(TokenKind::Str("abc"), 3)),
            "STRING \"abc\" 3"
        );
    }

    #[test]
    fn test_display_fixed_and_eof() {
        assert_eq!(
            format!("{}", Token::new(TokenKind::EqEq, 7)),
            "EQUAL_EQUAL == 7"
        );
        assert_eq!(format!("{}", Token::new(TokenKind::Eof, 9)), "EOF 9");
    }

    #[test]
    fn test_display_error() {
        let token = Token::new(TokenKind::Error(LexError::UnterminatedString), 7);
        assert_eq!(
            format!("{}", token),
            "ERROR: unterminated string literal at line 7"
        );
    }

    #[test]
    fn test_error_message_unexpected_char() {
        assert_eq!(
            LexError::UnexpectedChar('&').to_string(),
            "unexpected character '&'"
        );
    }
}
