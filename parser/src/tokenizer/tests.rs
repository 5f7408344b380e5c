use pretty_assertions::assert_eq;

use super::{lex, Token, Tokenizer};
use crate::{Span, SyntaxError};

#[test]
fn literals() {
    let mut lexer = Tokenizer::new("ab]");

    assert_eq!(lexer.next_token(), Some(Ok(Token::Literal('a', Span(0..1)))));
    assert_eq!(lexer.next_token(), Some(Ok(Token::Literal('b', Span(1..2)))));
    assert_eq!(lexer.next_token(), Some(Ok(Token::Literal(']', Span(2..3)))));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn special_characters() {
    assert_eq!(
        lex(&"^a.*$").unwrap(),
        vec![
            Token::Circumflex(Span(0..1)),
            Token::Literal('a', Span(1..2)),
            Token::AnyChar(Span(2..3)),
            Token::Asterisk(Span(3..4)),
            Token::DollarSign(Span(4..5)),
        ]
    );
}

#[test]
fn escapes() {
    assert_eq!(
        lex(&r"\^\$\.\*\\").unwrap(),
        vec![
            Token::Literal('^', Span(0..2)),
            Token::Literal('$', Span(2..4)),
            Token::Literal('.', Span(4..6)),
            Token::Literal('*', Span(6..8)),
            Token::Literal('\\', Span(8..10)),
        ]
    );

    assert_eq!(
        lex(&r"a\{1,2\}").unwrap(),
        vec![
            Token::Literal('a', Span(0..1)),
            Token::LeftBraceEscape(Span(1..3)),
            Token::Literal('1', Span(3..4)),
            Token::Literal(',', Span(4..5)),
            Token::Literal('2', Span(5..6)),
            Token::RightBraceEscape(Span(6..8)),
        ]
    );
}

#[test]
fn invalid_escapes() {
    assert_eq!(
        lex(&r"ab\"),
        Err(SyntaxError::InvalidEscape { escaped: None, span: Span(2..3) })
    );

    assert_eq!(
        lex(&r"a\b"),
        Err(SyntaxError::InvalidEscape {
            escaped: Some('b'),
            span: Span(1..3)
        })
    );

    assert_eq!(
        lex(&r"\["),
        Err(SyntaxError::InvalidEscape {
            escaped: Some('['),
            span: Span(0..2)
        })
    );
}

#[test]
fn misplaced_anchors() {
    assert_eq!(
        lex(&"ab^c"),
        Err(SyntaxError::MisplacedAnchor {
            anchor: '^',
            expected: "at the start of the pattern",
            span: Span(2..3)
        })
    );

    assert_eq!(
        lex(&"a$b"),
        Err(SyntaxError::MisplacedAnchor {
            anchor: '$',
            expected: "at the end of the pattern",
            span: Span(1..2)
        })
    );

    assert!(lex(&"^^").is_err());
    assert!(lex(&"$$").is_err());
}

#[test]
fn leading_asterisk() {
    assert_eq!(
        lex(&"*abc"),
        Err(SyntaxError::DanglingQuantifier { span: Span(0..1) })
    );
}

#[test]
fn bracket_expressions() {
    assert_eq!(
        lex(&"[^]a-z^$.*]").unwrap(),
        vec![
            Token::BracketOpen(Span(0..1)),
            Token::Circumflex(Span(1..2)),
            Token::Literal(']', Span(2..3)),
            Token::Literal('a', Span(3..4)),
            Token::Hyphen(Span(4..5)),
            Token::Literal('z', Span(5..6)),
            Token::Literal('^', Span(6..7)),
            Token::Literal('$', Span(7..8)),
            Token::Literal('.', Span(8..9)),
            Token::Literal('*', Span(9..10)),
            Token::BracketClose(Span(10..11)),
        ]
    );

    // The `^` is a negation marker only right after the `[`.
    assert_eq!(
        lex(&"[a^]").unwrap(),
        vec![
            Token::BracketOpen(Span(0..1)),
            Token::Literal('a', Span(1..2)),
            Token::Literal('^', Span(2..3)),
            Token::BracketClose(Span(3..4)),
        ]
    );

    // Inside brackets the backslash escapes anything.
    assert_eq!(
        lex(&r"[\-\]]").unwrap(),
        vec![
            Token::BracketOpen(Span(0..1)),
            Token::Literal('-', Span(1..3)),
            Token::Literal(']', Span(3..5)),
            Token::BracketClose(Span(5..6)),
        ]
    );
}

#[test]
fn bracket_constructs() {
    assert_eq!(
        lex(&"[[:alpha:][=e=][.ch.][]").unwrap(),
        vec![
            Token::BracketOpen(Span(0..1)),
            Token::CharClass("alpha".to_string(), Span(1..10)),
            Token::Equivalence('e', Span(10..15)),
            Token::CollatingSymbol("ch".to_string(), Span(15..21)),
            Token::Literal('[', Span(21..22)),
            Token::BracketClose(Span(22..23)),
        ]
    );

    assert_eq!(
        lex(&"[[:alpha]"),
        Err(SyntaxError::MalformedBracket {
            reason: "character class not closed with `:]`",
            span: Span(1..9)
        })
    );

    assert_eq!(
        lex(&"[[=ab=]]"),
        Err(SyntaxError::MalformedBracket {
            reason: "equivalence class must contain a single character",
            span: Span(1..7)
        })
    );
}

#[test]
fn unterminated_brackets() {
    assert_eq!(
        lex(&"ab[cd"),
        Err(SyntaxError::UnterminatedBracket { span: Span(2..5) })
    );

    assert_eq!(
        lex(&"[]"),
        Err(SyntaxError::UnterminatedBracket { span: Span(0..2) })
    );
}

#[test]
fn stops_after_error() {
    let mut lexer = Tokenizer::new(r"\qabc");
    assert!(matches!(lexer.next_token(), Some(Err(_))));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn char_slices() {
    let pattern = ['a', '.', 'b'];
    assert_eq!(
        lex(&pattern.as_slice()).unwrap(),
        vec![
            Token::Literal('a', Span(0..1)),
            Token::AnyChar(Span(1..2)),
            Token::Literal('b', Span(2..3)),
        ]
    );
}

#[test]
fn collating_brackets() {
    assert_eq!(
        lex(&"a[.xy.]"),
        Err(SyntaxError::UnsupportedBracketConstruct {
            construct: "[.xy.]".to_string(),
            span: Span(1..7)
        })
    );

    assert!(lex(&"[.x.]*").is_err());

    // Without anything between the dots these are ordinary brackets.
    assert_eq!(
        lex(&"[.]").unwrap(),
        vec![
            Token::BracketOpen(Span(0..1)),
            Token::Literal('.', Span(1..2)),
            Token::BracketClose(Span(2..3)),
        ]
    );
    assert!(lex(&"[..]").is_ok());
    assert!(lex(&"[.ab]").is_ok());
    assert!(lex(&r"[.a\.]").is_ok());
}
