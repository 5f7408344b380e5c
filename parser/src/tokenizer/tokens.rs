use std::fmt::{Display, Formatter};

use crate::Span;

/// Each of the tokens produced by the [`Tokenizer`](super::Tokenizer).
///
/// Every variant carries the [`Span`] covering the characters of the pattern
/// that produced the token. For instance, the span of the
/// [`Token::LeftBraceEscape`] token produced by `\{` covers two characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A character that matches itself. Escaped special characters like
    /// `\*` and `\.` also produce this token.
    Literal(char, Span),
    /// The dot (`.`).
    AnyChar(Span),
    /// A `^` at the start of the pattern, or right after the `[` that
    /// opens a bracket expression.
    Circumflex(Span),
    /// A `$` at the end of the pattern.
    DollarSign(Span),
    /// The Kleene star (`*`).
    Asterisk(Span),
    /// The `\{` digraph that opens a brace quantifier.
    LeftBraceEscape(Span),
    /// The `\}` digraph that closes a brace quantifier.
    RightBraceEscape(Span),
    /// The `[` that opens a bracket expression.
    BracketOpen(Span),
    /// The `]` that closes a bracket expression.
    BracketClose(Span),
    /// An unescaped `-` inside a bracket expression.
    Hyphen(Span),
    /// A POSIX character class like `[:alpha:]`, the string is the name of
    /// the class.
    CharClass(String, Span),
    /// An equivalence class like `[=a=]`.
    Equivalence(char, Span),
    /// A collating symbol like `[.ch.]`.
    CollatingSymbol(String, Span),
}

impl Token {
    /// Returns the span of the token.
    pub fn span(&self) -> &Span {
        match self {
            Token::Literal(_, span)
            | Token::AnyChar(span)
            | Token::Circumflex(span)
            | Token::DollarSign(span)
            | Token::Asterisk(span)
            | Token::LeftBraceEscape(span)
            | Token::RightBraceEscape(span)
            | Token::BracketOpen(span)
            | Token::BracketClose(span)
            | Token::Hyphen(span)
            | Token::CharClass(_, span)
            | Token::Equivalence(_, span)
            | Token::CollatingSymbol(_, span) => span,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal(c, _) => write!(f, "{}", c),
            Token::AnyChar(_) => write!(f, "."),
            Token::Circumflex(_) => write!(f, "^"),
            Token::DollarSign(_) => write!(f, "$"),
            Token::Asterisk(_) => write!(f, "*"),
            Token::LeftBraceEscape(_) => write!(f, "\\{{"),
            Token::RightBraceEscape(_) => write!(f, "\\}}"),
            Token::BracketOpen(_) => write!(f, "["),
            Token::BracketClose(_) => write!(f, "]"),
            Token::Hyphen(_) => write!(f, "-"),
            Token::CharClass(name, _) => write!(f, "[:{}:]", name),
            Token::Equivalence(c, _) => write!(f, "[={}=]", c),
            Token::CollatingSymbol(s, _) => write!(f, "[.{}.]", s),
        }
    }
}
