use thiserror::Error;

use crate::Span;

/// Error found while lexing or parsing a pattern.
///
/// Every variant carries the [`Span`] of the offending portion of the
/// pattern. Any of these errors aborts the compilation of the pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `^` that is not the first character of the pattern, or a `$` that
    /// is not the last one.
    #[error("anchor `{anchor}` at {span} is only allowed {expected}")]
    MisplacedAnchor { anchor: char, expected: &'static str, span: Span },

    /// A quantifier with nothing to repeat.
    #[error("quantifier at {span} has nothing to repeat")]
    DanglingQuantifier { span: Span },

    /// A quantifier applied to an atom that is already quantified, like in
    /// `a**` or `a\{2\}*`.
    #[error("quantifier at {span} is applied to an already quantified atom")]
    NestedQuantifier { span: Span },

    /// A brace quantifier that is not `\{n\}`, `\{n,\}` or `\{n,m\}`.
    #[error("malformed brace quantifier at {span}: {reason}")]
    MalformedBrace { reason: &'static str, span: Span },

    /// A backslash followed by an unsupported character, or by nothing.
    /// `escaped` is `None` for a trailing backslash.
    #[error("invalid escape sequence at {span}")]
    InvalidEscape { escaped: Option<char>, span: Span },

    /// A bracket expression construct that is not supported, like the
    /// collating symbol `[.xy.]`.
    #[error("unsupported construct `{construct}` at {span}")]
    UnsupportedBracketConstruct { construct: String, span: Span },

    /// A bracket expression without its closing `]`.
    #[error("unterminated bracket expression at {span}")]
    UnterminatedBracket { span: Span },

    /// A `[:`, `[=` or `[.` inside a bracket expression that is not properly
    /// closed, or an equivalence class with more than one character.
    #[error("malformed bracket expression at {span}: {reason}")]
    MalformedBracket { reason: &'static str, span: Span },

    /// A range whose bounds are reversed or are not single characters.
    #[error("invalid range at {span}: {reason}")]
    InvalidRange { reason: String, span: Span },

    /// A `[:name:]` class that is not one of the POSIX classes.
    #[error("unknown character class `{name}` at {span}")]
    UnknownCharClass { name: String, span: Span },
}

impl SyntaxError {
    /// Returns the span of the pattern where the error was found.
    pub fn span(&self) -> &Span {
        match self {
            SyntaxError::MisplacedAnchor { span, .. }
            | SyntaxError::DanglingQuantifier { span }
            | SyntaxError::NestedQuantifier { span }
            | SyntaxError::MalformedBrace { span, .. }
            | SyntaxError::InvalidEscape { span, .. }
            | SyntaxError::UnsupportedBracketConstruct { span, .. }
            | SyntaxError::UnterminatedBracket { span }
            | SyntaxError::MalformedBracket { span, .. }
            | SyntaxError::InvalidRange { span, .. }
            | SyntaxError::UnknownCharClass { span, .. } => span,
        }
    }
}
