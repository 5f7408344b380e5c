/*! Rewrites pattern ASTs into equivalent ones that are cheaper to match.

Two rewrites are applied to sequences:

* Nested sequences are flattened into their parent.
* A starred atom followed by the same atom (`a*a`) is rewritten as the atom
  followed by the starred atom (`aa*`). Both match the same strings, but the
  second form lets the executor consume the mandatory occurrence before
  entering the repetition loop, which reduces backtracking.

The rewrite is applied until no starred atom is followed by its own atom,
so `a*a*a` becomes `aa*a*`. Nodes other than sequences are returned as is.
*/

use scry_parser::ast::Node;


/// Optimises `node`.
///
/// The function is idempotent: `optimise(optimise(x)) == optimise(x)`.
pub fn optimise(node: Node) -> Node {
    match node {
        Node::Sequence(nodes) => {
            let mut result = Vec::with_capacity(nodes.len());
            flatten_into(&mut result, nodes);
            Node::Sequence(result)
        }
        node => node,
    }
}

fn flatten_into(result: &mut Vec<Node>, nodes: Vec<Node>) {
    for node in nodes {
        match node {
            Node::Sequence(inner) => flatten_into(result, inner),
            node => push(result, node),
        }
    }
}

/// Appends `node` to `result` making sure that the last node in `result`
/// is not `ZeroOrMore(node)`. If it is, `node` goes before it.
///
/// No `ZeroOrMore(x)` in `result` is ever immediately followed by `x`. The
/// push is recursive because moving `node` one position back can leave it
/// right after another `ZeroOrMore(node)`.
fn push(result: &mut Vec<Node>, node: Node) {
    match result.pop() {
        Some(Node::ZeroOrMore(inner)) if *inner == node => {
            push(result, node);
            result.push(Node::ZeroOrMore(inner));
        }
        Some(last) => {
            result.push(last);
            result.push(node);
        }
        None => result.push(node),
    }
}
