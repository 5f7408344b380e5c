/*! Recursive-descent parser for patterns.

The parser consumes the tokens produced by the [`crate::tokenizer`] and builds
an [`ast::Node`]. The root of the resulting tree is always a
[`Node::Sequence`] with one node per atom in the pattern, where a quantifier
and the atom it applies to count as a single node.
*/

use crate::ast::Node;
use crate::errors::SyntaxError;
use crate::source::PatternSource;
use crate::tokenizer::{lex, Token};
use crate::Span;

mod bracket;
mod classes;


/// Receives a pattern and produces its Abstract Syntax Tree (AST).
///
/// # Example
///
/// ```
/// use scry_parser::ast::Node;
/// use scry_parser::Parser;
///
/// let ast = Parser::new().parse(r"^a\{2,\}").unwrap();
///
/// assert_eq!(
///     ast,
///     Node::Sequence(vec![
///         Node::LeftAnchor,
///         Node::AtLeast(2, Box::new(Node::Symbol('a'))),
///     ])
/// );
/// ```
#[derive(Debug, Default)]
pub struct Parser {}

impl Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self {}
    }

    /// Lexes and parses `src`.
    pub fn parse(
        &self,
        src: &(impl PatternSource + ?Sized),
    ) -> Result<Node, SyntaxError> {
        parse(lex(src)?.as_slice())
    }
}

/// Parses a sequence of tokens produced by [`crate::lex`].
pub fn parse(tokens: &[Token]) -> Result<Node, SyntaxError> {
    ParserImpl::new(tokens).pattern()
}

/// Internal parser state: the tokens and the index of the next one.
struct ParserImpl<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> ParserImpl<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Span that goes from `start` to the end of the last consumed token.
    /// Used for errors that are detected when the tokens run out.
    fn span_to_last(&self, start: &Span) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(last) => start.combine(last.span()),
            None => start.clone(),
        }
    }

    fn pattern(&mut self) -> Result<Node, SyntaxError> {
        let mut nodes = Vec::new();

        if let Some(Token::Circumflex(_)) = self.peek() {
            self.bump();
            nodes.push(Node::LeftAnchor);
        }

        // Index of the first node in `nodes` that a quantifier can apply to.
        let first_atom = nodes.len();

        while let Some(token) = self.bump() {
            match token {
                Token::Literal(c, _) => nodes.push(Node::Symbol(*c)),
                Token::AnyChar(_) => nodes.push(Node::Any),
                Token::BracketOpen(span) => {
                    let bracket = self.bracket_expr(span)?;
                    nodes.push(bracket);
                }
                Token::Asterisk(span) => {
                    let atom = take_atom(&mut nodes, first_atom, span)?;
                    nodes.push(Node::star(atom));
                }
                Token::LeftBraceEscape(span) => {
                    let (bounds, span) = self.brace_quantifier(span)?;
                    let atom =
                        Box::new(take_atom(&mut nodes, first_atom, &span)?);
                    nodes.push(match bounds {
                        Bounds::Exactly(n) => Node::Exactly(n, atom),
                        Bounds::AtLeast(n) => Node::AtLeast(n, atom),
                        Bounds::Between(n, m) => Node::Between(n, m, atom),
                    });
                }
                Token::DollarSign(span) => {
                    if self.peek().is_some() {
                        return Err(SyntaxError::MisplacedAnchor {
                            anchor: '$',
                            expected: "at the end of the pattern",
                            span: span.clone(),
                        });
                    }
                    nodes.push(Node::RightAnchor);
                }
                Token::Circumflex(span) => {
                    return Err(SyntaxError::MisplacedAnchor {
                        anchor: '^',
                        expected: "at the start of the pattern",
                        span: span.clone(),
                    });
                }
                Token::RightBraceEscape(span) => {
                    return Err(SyntaxError::MalformedBrace {
                        reason: "`\\}` without a matching `\\{`",
                        span: span.clone(),
                    });
                }
                Token::BracketClose(span)
                | Token::Hyphen(span)
                | Token::CharClass(_, span)
                | Token::Equivalence(_, span)
                | Token::CollatingSymbol(_, span) => {
                    return Err(SyntaxError::MalformedBracket {
                        reason: "only allowed inside a bracket expression",
                        span: span.clone(),
                    });
                }
            }
        }

        Ok(Node::Sequence(nodes))
    }

    /// Parses the body of a brace quantifier. When called the opening
    /// `\{` has already been consumed, `open` is its span.
    ///
    /// Returns the bounds together with the span of the whole quantifier.
    fn brace_quantifier(
        &mut self,
        open: &Span,
    ) -> Result<(Bounds, Span), SyntaxError> {
        let n = self.parse_number(open)?;

        let bounds = match self.bump() {
            Some(Token::RightBraceEscape(_)) => {
                return Ok((Bounds::Exactly(n), self.span_to_last(open)))
            }
            Some(Token::Literal(',', _)) => match self.peek() {
                Some(Token::RightBraceEscape(_)) => Bounds::AtLeast(n),
                _ => {
                    let m = self.parse_number(open)?;
                    if n > m {
                        // Consume the closing brace, if any, so that the
                        // span covers the whole quantifier.
                        if let Some(Token::RightBraceEscape(_)) = self.peek() {
                            self.bump();
                        }
                        return Err(SyntaxError::MalformedBrace {
                            reason: "lower bound is greater than upper bound",
                            span: self.span_to_last(open),
                        });
                    }
                    Bounds::Between(n, m)
                }
            },
            Some(token) => {
                return Err(SyntaxError::MalformedBrace {
                    reason: "expecting `,` or `\\}`",
                    span: token.span().clone(),
                })
            }
            None => {
                return Err(SyntaxError::MalformedBrace {
                    reason: "missing closing `\\}`",
                    span: self.span_to_last(open),
                })
            }
        };

        match self.bump() {
            Some(Token::RightBraceEscape(_)) => {
                Ok((bounds, self.span_to_last(open)))
            }
            Some(token) => Err(SyntaxError::MalformedBrace {
                reason: "expecting `\\}`",
                span: token.span().clone(),
            }),
            None => Err(SyntaxError::MalformedBrace {
                reason: "missing closing `\\}`",
                span: self.span_to_last(open),
            }),
        }
    }

    /// Parses a decimal number made of one or more digits. A number with
    /// more than one digit can't start with zero.
    fn parse_number(&mut self, open: &Span) -> Result<usize, SyntaxError> {
        let start = self.pos;
        let mut value: usize = 0;

        while let Some(Token::Literal(c, span)) = self.peek() {
            let digit = match c.to_digit(10) {
                Some(digit) => digit as usize,
                None => break,
            };
            if value == 0 && self.pos > start {
                return Err(SyntaxError::MalformedBrace {
                    reason: "numbers can't have leading zeros",
                    span: span.clone(),
                });
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| SyntaxError::MalformedBrace {
                    reason: "number is too large",
                    span: span.clone(),
                })?;
            self.bump();
        }

        if self.pos == start {
            return Err(SyntaxError::MalformedBrace {
                reason: "expecting a number",
                span: match self.peek() {
                    Some(token) => token.span().clone(),
                    None => self.span_to_last(open),
                },
            });
        }

        Ok(value)
    }
}

/// Bounds of a brace quantifier.
enum Bounds {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

/// Removes the last node from `nodes` so that a quantifier can be applied
/// to it. Only nodes at index `first_atom` or above can be quantified.
fn take_atom(
    nodes: &mut Vec<Node>,
    first_atom: usize,
    quantifier: &Span,
) -> Result<Node, SyntaxError> {
    if nodes.len() <= first_atom {
        return Err(SyntaxError::DanglingQuantifier {
            span: quantifier.clone(),
        });
    }
    match nodes.pop() {
        Some(node) if node.is_quantifier() => {
            Err(SyntaxError::NestedQuantifier { span: quantifier.clone() })
        }
        Some(node) => Ok(node),
        None => {
            Err(SyntaxError::DanglingQuantifier { span: quantifier.clone() })
        }
    }
}
