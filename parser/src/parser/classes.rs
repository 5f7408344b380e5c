use crate::ast::Node;

/// Returns the members of the POSIX character class `name`, or `None` if
/// the class doesn't exist.
///
/// Classes are defined over ASCII, the locale is not taken into account.
pub(crate) fn posix_class(name: &str) -> Option<Node> {
    let class = match name {
        "upper" => upper(),
        "lower" => lower(),
        "alpha" => Node::AnyOf(vec![upper(), lower()]),
        "digit" => digit(),
        "xdigit" => Node::AnyOf(vec![
            digit(),
            Node::Range('a', 'f'),
            Node::Range('A', 'F'),
        ]),
        "alnum" => alnum(),
        "punct" => punct(),
        "blank" => symbols(&[' ', '\t']),
        "space" => symbols(&[' ', '\t', '\n', '\r', '\x0C', '\x0B']),
        "cntrl" => Node::Range('\x00', '\x1F'),
        "graph" => graph(),
        "print" => Node::AnyOf(vec![graph(), Node::Symbol(' ')]),
        "word" => Node::AnyOf(vec![alnum(), Node::Symbol('_')]),
        _ => return None,
    };
    Some(class)
}

fn upper() -> Node {
    Node::Range('A', 'Z')
}

fn lower() -> Node {
    Node::Range('a', 'z')
}

fn digit() -> Node {
    Node::Range('0', '9')
}

fn alnum() -> Node {
    Node::AnyOf(vec![upper(), lower(), digit()])
}

fn punct() -> Node {
    Node::AnyOf(vec![
        Node::Range('\x21', '\x2F'),
        Node::Range('\x3A', '\x40'),
        Node::Range('\x5B', '\x60'),
        Node::Range('\x7B', '\x7E'),
    ])
}

fn graph() -> Node {
    Node::AnyOf(vec![alnum(), punct()])
}

fn symbols(chars: &[char]) -> Node {
    Node::AnyOf(chars.iter().copied().map(Node::Symbol).collect())
}
