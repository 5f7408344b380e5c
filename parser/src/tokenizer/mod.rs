/*! Implements the pattern tokenizer.

Tokenization is the first step in the compilation process. The tokenizer
takes a pattern and produces a sequence of tokens that is later processed by
the parser. Each token is represented by a variant of the [`Token`] type.
*/

use crate::errors::SyntaxError;
use crate::source::PatternSource;
use crate::Span;

mod tokens;

pub use tokens::Token;

#[cfg(test)]
mod tests;

/// Tokenizes the whole pattern.
///
/// Returns the first error found, if any. The tokenizer never produces a
/// partial token stream.
pub fn lex(
    source: &(impl PatternSource + ?Sized),
) -> Result<Vec<Token>, SyntaxError> {
    Tokenizer::new(source).collect()
}

/// Takes a pattern and produces a sequence of tokens.
///
/// The tokenizer has two modes of operation: normal mode and bracket mode.
///
/// In normal mode every character is a literal except `^`, `$`, `.`, `*`,
/// `[` and `\`. The backslash can only escape one of `^ $ . * \ { }`, the
/// escaped braces produce the [`Token::LeftBraceEscape`] and
/// [`Token::RightBraceEscape`] digraphs, the rest produce literals. A `^` is
/// accepted only as the first character in the pattern, a `$` only as the
/// last one, and a `*` can't be the first character.
///
/// An opening bracket (`[`) switches the tokenizer to bracket mode, where
/// `^`, `$`, `.` and `*` are ordinary characters, a backslash escapes any
/// character, `-` produces [`Token::Hyphen`] and the `[:name:]`, `[=c=]` and
/// `[.xy.]` constructs are recognized as single tokens. The tokenizer goes
/// back to normal mode when it finds the closing bracket (`]`). A `]` that
/// comes right after `[` or `[^` is a literal, not the closing bracket. A
/// bracket expression written like a collating symbol, as in `a[.xy.]`, is
/// rejected.
pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    mode: Mode,
}

enum Mode {
    Normal,
    /// `opened_at` is the position of the `[` that opened the expression.
    Bracket { opened_at: usize, state: BracketState },
    /// Entered after an error, no more tokens are produced.
    Done,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BracketState {
    /// Right after `[`.
    Open,
    /// Right after `[^`.
    Negated,
    /// After the first member.
    Body,
}

impl Tokenizer {
    /// Creates a new [`Tokenizer`].
    pub fn new(source: &(impl PatternSource + ?Sized)) -> Self {
        let chars = source.to_chars();
        // Can't handle patterns greater than the maximum span size.
        assert!(chars.len() < Span::MAX);
        Self { chars, pos: 0, mode: Mode::Normal }
    }

    /// Returns the next token, or `None` at the end of the pattern.
    pub fn next_token(&mut self) -> Option<Result<Token, SyntaxError>> {
        let result = match self.mode {
            Mode::Normal => self.normal_token()?,
            Mode::Bracket { opened_at, state } => {
                self.bracket_token(opened_at, state)
            }
            Mode::Done => return None,
        };
        if result.is_err() {
            self.mode = Mode::Done;
        }
        Some(result)
    }

    fn normal_token(&mut self) -> Option<Result<Token, SyntaxError>> {
        let start = self.pos;
        let c = *self.chars.get(start)?;

        self.pos += 1;

        let token = match c {
            '\\' => return Some(self.normal_escape(start)),
            '^' if start == 0 => Token::Circumflex(self.span_from(start)),
            '^' => {
                return Some(Err(SyntaxError::MisplacedAnchor {
                    anchor: '^',
                    expected: "at the start of the pattern",
                    span: self.span_from(start),
                }))
            }
            '$' if self.pos == self.chars.len() => {
                Token::DollarSign(self.span_from(start))
            }
            '$' => {
                return Some(Err(SyntaxError::MisplacedAnchor {
                    anchor: '$',
                    expected: "at the end of the pattern",
                    span: self.span_from(start),
                }))
            }
            '*' if start == 0 => {
                return Some(Err(SyntaxError::DanglingQuantifier {
                    span: self.span_from(start),
                }))
            }
            '*' => Token::Asterisk(self.span_from(start)),
            '.' => Token::AnyChar(self.span_from(start)),
            '[' => {
                if let Some(err) = self.collating_bracket(start) {
                    return Some(Err(err));
                }
                self.mode = Mode::Bracket {
                    opened_at: start,
                    state: BracketState::Open,
                };
                Token::BracketOpen(self.span_from(start))
            }
            c => Token::Literal(c, self.span_from(start)),
        };

        Some(Ok(token))
    }

    fn normal_escape(&mut self, start: usize) -> Result<Token, SyntaxError> {
        let escaped = match self.chars.get(self.pos) {
            Some(c) => *c,
            None => {
                return Err(SyntaxError::InvalidEscape {
                    escaped: None,
                    span: self.span_from(start),
                })
            }
        };

        self.pos += 1;

        match escaped {
            '^' | '$' | '.' | '*' | '\\' => {
                Ok(Token::Literal(escaped, self.span_from(start)))
            }
            '{' => Ok(Token::LeftBraceEscape(self.span_from(start))),
            '}' => Ok(Token::RightBraceEscape(self.span_from(start))),
            _ => Err(SyntaxError::InvalidEscape {
                escaped: Some(escaped),
                span: self.span_from(start),
            }),
        }
    }

    fn bracket_token(
        &mut self,
        opened_at: usize,
        state: BracketState,
    ) -> Result<Token, SyntaxError> {
        let start = self.pos;
        let c = match self.chars.get(start) {
            Some(c) => *c,
            None => {
                return Err(SyntaxError::UnterminatedBracket {
                    span: self.span_from(opened_at),
                })
            }
        };

        self.pos += 1;

        let mut next_state = BracketState::Body;

        let token = match (state, c) {
            (BracketState::Open, '^') => {
                next_state = BracketState::Negated;
                Token::Circumflex(self.span_from(start))
            }
            (BracketState::Open | BracketState::Negated, ']') => {
                Token::Literal(']', self.span_from(start))
            }
            (_, ']') => {
                self.mode = Mode::Normal;
                return Ok(Token::BracketClose(self.span_from(start)));
            }
            (_, '\\') => match self.chars.get(self.pos) {
                Some(escaped) => {
                    let escaped = *escaped;
                    self.pos += 1;
                    Token::Literal(escaped, self.span_from(start))
                }
                None => {
                    return Err(SyntaxError::InvalidEscape {
                        escaped: None,
                        span: self.span_from(start),
                    })
                }
            },
            (_, '-') => Token::Hyphen(self.span_from(start)),
            (_, '[') => match self.chars.get(self.pos) {
                Some(delim @ (':' | '=' | '.')) => {
                    let delim = *delim;
                    self.bracket_construct(start, delim)?
                }
                _ => Token::Literal('[', self.span_from(start)),
            },
            (_, c) => Token::Literal(c, self.span_from(start)),
        };

        self.mode = Mode::Bracket { opened_at, state: next_state };

        Ok(token)
    }

    /// Tokenizes `[:name:]`, `[=c=]` and `[.xy.]`. When called, `start` is
    /// the position of the opening `[`, and `self.pos` is the position of
    /// the delimiter that follows it.
    fn bracket_construct(
        &mut self,
        start: usize,
        delim: char,
    ) -> Result<Token, SyntaxError> {
        let content_start = self.pos + 1;

        let content_end = (content_start..self.chars.len().saturating_sub(1))
            .find(|i| self.chars[*i] == delim && self.chars[*i + 1] == ']');

        let content_end = match content_end {
            Some(end) => end,
            None => {
                return Err(SyntaxError::MalformedBracket {
                    reason: match delim {
                        ':' => "character class not closed with `:]`",
                        '=' => "equivalence class not closed with `=]`",
                        _ => "collating symbol not closed with `.]`",
                    },
                    span: Span::new(start, self.chars.len()),
                })
            }
        };

        self.pos = content_end + 2;

        let content = &self.chars[content_start..content_end];
        let span = self.span_from(start);

        match (delim, content) {
            (':', _) => Ok(Token::CharClass(content.iter().collect(), span)),
            ('=', [c]) => Ok(Token::Equivalence(*c, span)),
            ('=', _) => Err(SyntaxError::MalformedBracket {
                reason: "equivalence class must contain a single character",
                span,
            }),
            (_, _) => {
                Ok(Token::CollatingSymbol(content.iter().collect(), span))
            }
        }
    }

    /// Detects a bracket expression that has the form of a collating
    /// symbol, like `[.xy.]`, which is not supported. `start` is the
    /// position of the `[`.
    ///
    /// `[.]` and `[..]` have nothing between the dots, they are ordinary
    /// bracket expressions.
    fn collating_bracket(&self, start: usize) -> Option<SyntaxError> {
        if self.chars.get(start + 1) != Some(&'.') {
            return None;
        }

        let mut i = start + 2;
        let mut ends_with_dot = false;

        while let Some(c) = self.chars.get(i) {
            match c {
                '\\' => {
                    ends_with_dot = false;
                    i += 2;
                }
                ']' => {
                    if !ends_with_dot || i < start + 4 {
                        return None;
                    }
                    return Some(SyntaxError::UnsupportedBracketConstruct {
                        construct: self.chars[start..=i].iter().collect(),
                        span: Span::new(start, i + 1),
                    });
                }
                c => {
                    ends_with_dot = *c == '.';
                    i += 1;
                }
            }
        }

        None
    }

    #[inline]
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
