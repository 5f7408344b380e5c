/*! Lexes and parses POSIX-flavored basic regular expressions, producing an
Abstract Syntax Tree (AST).

The accepted grammar is a restricted form of the POSIX basic regular
expression syntax: literal characters, the dot, the Kleene star, the `^` and
`$` anchors, bounded repetitions written with escaped braces (`\{n\}`,
`\{n,\}` and `\{n,m\}`) and bracket expressions (`[...]` and `[^...]`) with
ranges, POSIX character classes and equivalence classes.

Parsing happens in two steps. First the [`tokenizer`] turns the pattern into
a sequence of [`tokenizer::Token`]s, resolving escape sequences and rejecting
misplaced anchors. Then the parser consumes those tokens and builds an
[`ast::Node`].

# Example

```rust
use scry_parser::ast::Node;
use scry_parser::Parser;

let ast = Parser::new().parse("ab*").unwrap();

assert_eq!(
    ast,
    Node::Sequence(vec![
        Node::Symbol('a'),
        Node::ZeroOrMore(Box::new(Node::Symbol('b'))),
    ])
);
```
*/

use std::fmt::{Display, Formatter};
use std::ops::Range;

pub use errors::SyntaxError;
pub use parser::{parse, Parser};
pub use source::PatternSource;
pub use tokenizer::lex;

pub mod ast;
pub mod tokenizer;

mod errors;
mod parser;
mod source;

/// Starting and ending positions of some token inside the pattern.
///
/// Positions are character indices, not byte offsets, because patterns are
/// read through [`PatternSource`], which exposes characters by index.
#[derive(Default, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Span(pub Range<u32>);

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start(), self.end())
    }
}

impl Span {
    const MAX: usize = u32::MAX as usize;

    /// Index of the first character covered by the span.
    #[inline]
    pub fn start(&self) -> usize {
        self.0.start as usize
    }

    /// Index of the character right after the span.
    #[inline]
    pub fn end(&self) -> usize {
        self.0.end as usize
    }

    /// Returns the span as a range of character indices.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.0.start as usize..self.0.end as usize
    }

    /// Returns a new [`Span`] that combines this span with `other`.
    ///
    /// The resulting span goes from `self.start()` to `other.end()`.
    ///
    /// ```
    /// # use scry_parser::Span;
    /// assert_eq!(Span(0..2).combine(&Span(4..5)), Span(0..5))
    /// ```
    pub fn combine(&self, other: &Self) -> Self {
        Self(self.0.start..other.0.end)
    }

    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self(start as u32..end as u32)
    }
}
