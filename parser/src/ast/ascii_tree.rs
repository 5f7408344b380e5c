/*! Functions that return an ASCII representation of pattern ASTs. */

use ::ascii_tree::Tree;
use ::ascii_tree::Tree::{Leaf, Node as Branch};

use crate::ast::dfs::{DFSEvent, DFSIter};
use crate::ast::Node;

/// Returns a representation of the node as an ASCII tree.
pub(crate) fn node_ascii_tree(node: &Node) -> Tree {
    let mut tree_stack: Vec<Tree> = Vec::new();
    let mut len_stack: Vec<usize> = Vec::new();

    for event in DFSIter::new(node) {
        match event {
            DFSEvent::Enter(_) => {
                // Anything pushed into `tree_stack` after this point and
                // before the matching Leave event is a child of this node.
                len_stack.push(tree_stack.len());
            }
            DFSEvent::Leave(node) => {
                let children_start = len_stack.pop().unwrap();
                let children = tree_stack.drain(children_start..).collect();
                tree_stack.push(build_tree_for_node(node, children));
            }
        }
    }

    assert_eq!(tree_stack.len(), 1);
    tree_stack.pop().unwrap()
}

fn build_tree_for_node(node: &Node, children: Vec<Tree>) -> Tree {
    match node {
        Node::Sequence(_) => Branch("sequence".to_string(), children),
        Node::Symbol(c) => Leaf(vec![format!("symbol {:?}", c)]),
        Node::Any => Leaf(vec!["any".to_string()]),
        Node::LeftAnchor => Leaf(vec!["left_anchor".to_string()]),
        Node::RightAnchor => Leaf(vec!["right_anchor".to_string()]),
        Node::Range(lo, hi) => Leaf(vec![format!("range {:?}-{:?}", lo, hi)]),
        Node::ZeroOrMore(_) => Branch("zero_or_more".to_string(), children),
        Node::Exactly(n, _) => Branch(format!("exactly {}", n), children),
        Node::AtLeast(n, _) => Branch(format!("at_least {}", n), children),
        Node::Between(n, m, _) => {
            Branch(format!("between {} {}", n, m), children)
        }
        Node::AnyOf(_) => Branch("any_of".to_string(), children),
        Node::NoneOf(_) => Branch("none_of".to_string(), children),
    }
}
