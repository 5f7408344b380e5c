/*! Abstract Syntax Tree (AST) for patterns.

The AST is the output of the parser. It is an ownership tree: every [`Node`]
owns its children, there are no cycles and no sharing. The tree is built
once per pattern and never modified afterwards; the optimizer consumes one
tree and produces a new one.
*/

use std::fmt;
use std::fmt::{Display, Formatter};

#[cfg(feature = "ascii-tree")]
mod ascii_tree;

pub mod dfs;

#[cfg(test)]
mod tests;

/// A node in the AST of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Ordered concatenation of nodes. The parser always returns a
    /// `Sequence` as the root of the tree.
    Sequence(Vec<Node>),
    /// Literal character.
    Symbol(char),
    /// The dot (`.`), matches any character.
    Any,
    /// Kleene star (`x*`).
    ZeroOrMore(Box<Node>),
    /// The `^` anchor.
    LeftAnchor,
    /// The `$` anchor.
    RightAnchor,
    /// `x\{n\}`.
    Exactly(usize, Box<Node>),
    /// `x\{n,\}`.
    AtLeast(usize, Box<Node>),
    /// `x\{n,m\}`, where `n <= m`.
    Between(usize, usize, Box<Node>),
    /// Range of characters inside a bracket expression. The lower bound is
    /// always less or equal than the upper bound.
    Range(char, char),
    /// Bracket expression (`[...]`), matches a character that matches any
    /// of the members.
    AnyOf(Vec<Node>),
    /// Negated bracket expression (`[^...]`), matches a character that
    /// doesn't match any of the members.
    NoneOf(Vec<Node>),
}

impl Node {
    /// Creates a [`Node::Sequence`].
    pub fn seq<I: IntoIterator<Item = Node>>(nodes: I) -> Self {
        Node::Sequence(nodes.into_iter().collect())
    }

    /// Wraps `node` in a [`Node::ZeroOrMore`].
    pub fn star(node: Node) -> Self {
        Node::ZeroOrMore(Box::new(node))
    }

    /// Returns true if the node is a quantifier (`*` or any of the brace
    /// quantifiers).
    pub fn is_quantifier(&self) -> bool {
        matches!(
            self,
            Node::ZeroOrMore(_)
                | Node::Exactly(..)
                | Node::AtLeast(..)
                | Node::Between(..)
        )
    }

    /// Returns the node's children, in pattern order.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Sequence(nodes)
            | Node::AnyOf(nodes)
            | Node::NoneOf(nodes) => nodes.as_slice(),
            Node::ZeroOrMore(inner)
            | Node::Exactly(_, inner)
            | Node::AtLeast(_, inner)
            | Node::Between(_, _, inner) => std::slice::from_ref(inner),
            Node::Symbol(_)
            | Node::Any
            | Node::LeftAnchor
            | Node::RightAnchor
            | Node::Range(..) => &[],
        }
    }

    /// Total number of nodes in the tree rooted at this node.
    pub fn size(&self) -> usize {
        dfs::DFSIter::new(self)
            .filter(|event| matches!(event, dfs::DFSEvent::Enter(_)))
            .count()
    }

    /// Returns a printable ASCII tree representing the node.
    #[cfg(feature = "ascii-tree")]
    pub fn ascii_tree(&self) -> ::ascii_tree::Tree {
        ascii_tree::node_ascii_tree(self)
    }
}

/// Renders the node back to pattern syntax.
///
/// The result is a pattern that parses to an equivalent node. Members of a
/// bracket expression that are themselves bracket expressions, like the ones
/// produced by POSIX classes, are rendered inline, which means that
/// `[[:digit:]]` is rendered as `[0-9]`.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Sequence(nodes) => {
                for node in nodes {
                    write!(f, "{}", node)?;
                }
                Ok(())
            }
            Node::Symbol('[') => write!(f, "[[]"),
            Node::Symbol(c) => {
                if matches!(c, '^' | '$' | '.' | '*' | '\\') {
                    write!(f, "\\")?;
                }
                write!(f, "{}", c)
            }
            Node::Any => write!(f, "."),
            Node::ZeroOrMore(inner) => write!(f, "{}*", inner),
            Node::LeftAnchor => write!(f, "^"),
            Node::RightAnchor => write!(f, "$"),
            Node::Exactly(n, inner) => write!(f, "{}\\{{{}\\}}", inner, n),
            Node::AtLeast(n, inner) => write!(f, "{}\\{{{},\\}}", inner, n),
            Node::Between(n, m, inner) => {
                write!(f, "{}\\{{{},{}\\}}", inner, n, m)
            }
            Node::Range(..) => {
                write!(f, "[")?;
                write_member(f, self)?;
                write!(f, "]")
            }
            Node::AnyOf(members) => {
                write!(f, "[")?;
                members.iter().try_for_each(|m| write_member(f, m))?;
                write!(f, "]")
            }
            Node::NoneOf(members) => {
                write!(f, "[^")?;
                members.iter().try_for_each(|m| write_member(f, m))?;
                write!(f, "]")
            }
        }
    }
}

/// Writes a member of a bracket expression.
fn write_member(f: &mut Formatter<'_>, member: &Node) -> fmt::Result {
    match member {
        Node::Symbol(c) => write_bracket_char(f, *c),
        Node::Range(lo, hi) => {
            write_bracket_char(f, *lo)?;
            write!(f, "-")?;
            write_bracket_char(f, *hi)
        }
        Node::AnyOf(members) | Node::NoneOf(members) => {
            members.iter().try_for_each(|m| write_member(f, m))
        }
        other => write!(f, "{}", other),
    }
}

fn write_bracket_char(f: &mut Formatter<'_>, c: char) -> fmt::Result {
    if matches!(c, ']' | '-' | '^' | '\\' | '[') {
        write!(f, "\\")?;
    }
    write!(f, "{}", c)
}
