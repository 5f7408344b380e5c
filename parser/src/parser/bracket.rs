use crate::ast::Node;
use crate::errors::SyntaxError;
use crate::parser::{classes, ParserImpl};
use crate::tokenizer::Token;
use crate::Span;

impl<'t> ParserImpl<'t> {
    /// Parses a bracket expression. When called the opening `[` has already
    /// been consumed, `open` is its span.
    pub(super) fn bracket_expr(
        &mut self,
        open: &Span,
    ) -> Result<Node, SyntaxError> {
        let negated = if let Some(Token::Circumflex(_)) = self.peek() {
            self.bump();
            true
        } else {
            false
        };

        let mut members = Vec::new();

        loop {
            let token = match self.bump() {
                Some(token) => token,
                None => {
                    return Err(SyntaxError::UnterminatedBracket {
                        span: self.span_to_last(open),
                    })
                }
            };

            match token {
                Token::BracketClose(_) => break,
                Token::Literal(c, _) => members.push(Node::Symbol(*c)),
                Token::Hyphen(span) => {
                    // A hyphen at the start or at the end of the expression
                    // is a literal.
                    if members.is_empty()
                        || matches!(self.peek(), Some(Token::BracketClose(_)))
                    {
                        members.push(Node::Symbol('-'));
                    } else {
                        let range = self.range(&mut members, span)?;
                        members.push(range);
                    }
                }
                Token::CharClass(name, span) => {
                    match classes::posix_class(name) {
                        Some(class) => members.push(class),
                        None => {
                            return Err(SyntaxError::UnknownCharClass {
                                name: name.clone(),
                                span: span.clone(),
                            })
                        }
                    }
                }
                // Equivalence classes are not locale-aware, `[=c=]` is
                // just `c`.
                Token::Equivalence(c, _) => members.push(Node::Symbol(*c)),
                Token::CollatingSymbol(symbol, span) => {
                    return Err(SyntaxError::UnsupportedBracketConstruct {
                        construct: format!("[.{}.]", symbol),
                        span: span.clone(),
                    })
                }
                Token::BracketOpen(span)
                | Token::AnyChar(span)
                | Token::Circumflex(span)
                | Token::DollarSign(span)
                | Token::Asterisk(span)
                | Token::LeftBraceEscape(span)
                | Token::RightBraceEscape(span) => {
                    return Err(SyntaxError::MalformedBracket {
                        reason: "unexpected token in bracket expression",
                        span: span.clone(),
                    })
                }
            }
        }

        if negated {
            Ok(Node::NoneOf(members))
        } else {
            Ok(Node::AnyOf(members))
        }
    }

    /// Parses the upper bound of a range. When called, the hyphen has been
    /// consumed and the lower bound is the last node in `members`. The
    /// lower bound is removed from `members`.
    fn range(
        &mut self,
        members: &mut Vec<Node>,
        hyphen: &Span,
    ) -> Result<Node, SyntaxError> {
        // The token right before the hyphen. It exists because `members`
        // is not empty.
        let tokens = self.tokens;
        let lower_token = &tokens[self.pos - 2];

        let lo = match (members.last(), lower_token) {
            (Some(Node::Symbol(c)), Token::Literal(..) | Token::Hyphen(_)) => {
                *c
            }
            _ => {
                return Err(SyntaxError::InvalidRange {
                    reason: "range start must be a single character"
                        .to_string(),
                    span: lower_token.span().combine(hyphen),
                })
            }
        };

        let hi = match self.bump() {
            Some(Token::Literal(c, _)) => *c,
            Some(Token::Hyphen(_)) => '-',
            Some(token) => {
                return Err(SyntaxError::InvalidRange {
                    reason: "range end must be a single character"
                        .to_string(),
                    span: lower_token.span().combine(token.span()),
                })
            }
            None => {
                return Err(SyntaxError::UnterminatedBracket {
                    span: self.span_to_last(hyphen),
                })
            }
        };

        if lo > hi {
            return Err(SyntaxError::InvalidRange {
                reason: format!("`{}` is greater than `{}`", lo, hi),
                span: self.span_to_last(lower_token.span()),
            });
        }

        members.pop();

        Ok(Node::Range(lo, hi))
    }
}
