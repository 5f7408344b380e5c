//! Depth-first traversal of the AST.
//!
//! [`DFSIter`] walks the tree rooted at some [`Node`] and emits a
//! [`DFSEvent::Enter`] event when a node is visited for the first time,
//! before visiting its children, and a [`DFSEvent::Leave`] event after all
//! the node's children have been visited. Children are visited in pattern
//! order.
//!
//! # Example
//!
//! Collecting the literal characters in a pattern, but not the ones inside
//! bracket expressions:
//!
//! ```rust
//! use scry_parser::ast::Node;
//! use scry_parser::ast::dfs::{DFSEvent, DFSIter};
//! use scry_parser::Parser;
//!
//! let ast = Parser::new().parse("ab*[cd]e").unwrap();
//!
//! let mut iter = DFSIter::new(&ast);
//! let mut symbols = Vec::new();
//!
//! while let Some(event) = iter.next() {
//!     match event {
//!         DFSEvent::Enter(Node::Symbol(c)) => symbols.push(*c),
//!         DFSEvent::Enter(Node::AnyOf(_)) => iter.prune(),
//!         _ => {}
//!     }
//! }
//!
//! assert_eq!(symbols, vec!['a', 'b', 'e']);
//! ```
use crate::ast::Node;

/// Events yielded by [`DFSIter`].
#[derive(Debug, PartialEq, Eq)]
pub enum DFSEvent<T> {
    Enter(T),
    Leave(T),
}

/// An iterator that traverses the AST in depth-first order.
pub struct DFSIter<'a> {
    stack: Vec<DFSEvent<&'a Node>>,
}

impl<'a> DFSIter<'a> {
    /// Creates a new [`DFSIter`] that starts at `node`.
    pub fn new(node: &'a Node) -> Self {
        Self { stack: vec![DFSEvent::Enter(node)] }
    }

    /// Prevents the traversal from visiting the children of the current
    /// node.
    ///
    /// When called right after a [`DFSEvent::Enter`] the children of the
    /// node that was entered are skipped, the next event will be the
    /// [`DFSEvent::Leave`] for that same node.
    pub fn prune(&mut self) {
        // Remove all DFSEvent::Enter from the stack until finding a
        // DFSEvent::Leave.
        while let Some(DFSEvent::Enter(_)) = self.stack.last() {
            self.stack.pop();
        }
    }
}

impl<'a> Iterator for DFSIter<'a> {
    type Item = DFSEvent<&'a Node>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            DFSEvent::Enter(node) => {
                self.stack.push(DFSEvent::Leave(node));
                // Children are pushed in reverse order so that they are
                // popped in pattern order.
                for child in node.children().iter().rev() {
                    self.stack.push(DFSEvent::Enter(child));
                }
                Some(DFSEvent::Enter(node))
            }
            DFSEvent::Leave(node) => Some(DFSEvent::Leave(node)),
        }
    }
}
