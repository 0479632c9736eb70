//! Edge-case and property-based tests for the lexer.

use crate::{Lexer, Token, TokenKind};
use ceresc_util::Handler;
use proptest::prelude::*;

fn lex_to_end(source: &str) -> Vec<Token<'_>> {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(source, &mut handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof() || token.is_error();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

#[test]
fn test_deeply_nested_parens() {
    let source = "((((((((((x))))))))))";
    let tokens = lex_to_end(source);
    // 10 opens + ident + 10 closes + EOF
    assert_eq!(tokens.len(), 22);
    assert!(!tokens.iter().any(|t| t.is_error()));
}

#[test]
fn test_long_identifier() {
    let source = "a".repeat(10_000);
    let tokens = lex_to_end(&source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind.text().map(str::len), Some(10_000));
}

#[test]
fn test_long_number() {
    let source = "9".repeat(4_096);
    let tokens = lex_to_end(&source);
    assert_eq!(tokens[0].kind, TokenKind::Int(source.as_str()));
}

#[test]
fn test_no_whitespace_between_tokens() {
    let tokens = lex_to_end("if(x==1){return}else{y--}");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Ident("x"),
            TokenKind::EqEq,
            TokenKind::Int("1"),
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::RBrace,
            TokenKind::Else,
            TokenKind::LBrace,
            TokenKind::Ident("y"),
            TokenKind::MinusMinus,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_all_whitespace_forms_between_tokens() {
    let tokens = lex_to_end("a \tb\rc\nd\r\ne");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a"),
            TokenKind::Ident("b"),
            TokenKind::Ident("c"),
            TokenKind::Ident("d"),
            TokenKind::Ident("e"),
            TokenKind::Eof,
        ]
    );
    // The lone CR before `c` is a line break; the CRLF pair counts once.
    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 3, 4, 4]);
}

#[test]
fn test_comment_does_not_hide_next_line() {
    let tokens = lex_to_end("x // = 1\ny");
    assert_eq!(tokens[0].kind, TokenKind::Ident("x"));
    assert_eq!(tokens[1].kind, TokenKind::Ident("y"));
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_error_line_after_many_newlines() {
    let mut source = "\n".repeat(99);
    source.push('$');
    let tokens = lex_to_end(&source);
    assert!(tokens[0].is_error());
    assert_eq!(tokens[0].line, 100);
}

#[test]
fn test_dot_heavy_input() {
    let tokens = lex_to_end("x.y.3.z");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("x"),
            TokenKind::Dot,
            TokenKind::Ident("y"),
            TokenKind::Dot,
            TokenKind::Int("3"),
            TokenKind::Dot,
            TokenKind::Ident("z"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string_leaves_rest_unread() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("\"ab\nvar", &mut handler);
    let token = lexer.next_token();
    assert!(token.is_error());
    // The cursor stopped at the line break.
    assert_eq!(lexer.position(), 3);
}

proptest! {
    /// Scanning any ASCII input terminates, every token line is within
    /// the input's line count, and lines never decrease.
    #[test]
    fn prop_lexer_terminates_with_monotonic_lines(source in "[ -~\t\r\n]{0,200}") {
        let tokens = lex_to_end(&source);
        prop_assert!(tokens.len() <= source.len() + 1);
        let mut last_line = 1u32;
        for token in &tokens {
            prop_assert!(token.line >= last_line);
            last_line = token.line;
        }
    }

    /// Any lowercase alphabetic word lexes to exactly one token: the
    /// matching keyword, or an identifier carrying the input verbatim.
    #[test]
    fn prop_word_is_single_token(word in "[a-z_][a-z0-9_]{0,30}") {
        let tokens = lex_to_end(&word);
        prop_assert_eq!(tokens.len(), 2);
        match tokens[0].kind {
            TokenKind::Ident(text) => prop_assert_eq!(text, word.as_str()),
            kind => prop_assert_eq!(kind.spelling(), Some(word.as_str())),
        }
    }

    /// Digit sequences always lex to a single integer token.
    #[test]
    fn prop_digits_are_one_int(digits in "[0-9]{1,30}") {
        let tokens = lex_to_end(&digits);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int(digits.as_str()));
    }

    /// Quote-free, newline-free content always round-trips through a
    /// string literal with the quotes stripped.
    #[test]
    fn prop_string_content_round_trips(content in "[ -!#-~]{0,50}") {
        let source = format!("\"{}\"", content);
        let tokens = lex_to_end(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Str(content.as_str()));
    }
}
