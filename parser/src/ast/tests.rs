use pretty_assertions::assert_eq;

use crate::ast::dfs::{DFSEvent, DFSIter};
use crate::ast::Node;
use crate::Parser;

#[test]
fn display() {
    let tests = vec![
        (line!(), Node::seq([Node::Symbol('a'), Node::Any]), "a."),
        (line!(), Node::star(Node::Symbol('*')), r"\**"),
        (line!(), Node::Symbol('['), "[[]"),
        (line!(), Node::Range('a', 'z'), "[a-z]"),
        (
            line!(),
            Node::Between(1, 3, Box::new(Node::Range('0', '9'))),
            r"[0-9]\{1,3\}",
        ),
        (
            line!(),
            Node::NoneOf(vec![
                Node::AnyOf(vec![Node::Range('a', 'z'), Node::Symbol('_')]),
                Node::Symbol('-'),
            ]),
            r"[^a-z_\-]",
        ),
    ];

    for t in tests {
        assert_eq!(t.1.to_string(), t.2, "test at line {}", t.0);
    }

    let ast = Parser::new().parse("[[:digit:]]").unwrap();
    assert_eq!(ast.to_string(), "[0-9]");
}

#[test]
fn quantifiers() {
    let a = || Box::new(Node::Symbol('a'));

    assert!(Node::star(Node::Any).is_quantifier());
    assert!(Node::Exactly(2, a()).is_quantifier());
    assert!(Node::AtLeast(2, a()).is_quantifier());
    assert!(Node::Between(2, 3, a()).is_quantifier());
    assert!(!Node::Symbol('a').is_quantifier());
    assert!(!Node::seq([Node::star(Node::Any)]).is_quantifier());
}

#[test]
fn dfs() {
    let ast = Parser::new().parse("a*[b-c]").unwrap();

    let events: Vec<_> = DFSIter::new(&ast)
        .map(|event| match event {
            DFSEvent::Enter(node) => format!("enter {}", node),
            DFSEvent::Leave(node) => format!("leave {}", node),
        })
        .collect();

    assert_eq!(
        events,
        vec![
            "enter a*[b-c]",
            "enter a*",
            "enter a",
            "leave a",
            "leave a*",
            "enter [b-c]",
            "enter [b-c]",
            "leave [b-c]",
            "leave [b-c]",
            "leave a*[b-c]",
        ]
    );

    assert_eq!(ast.size(), 5);
}

#[test]
fn dfs_prune() {
    let ast = Parser::new().parse(r"a\{2\}b").unwrap();
    let mut iter = DFSIter::new(&ast);
    let mut entered = Vec::new();

    while let Some(event) = iter.next() {
        if let DFSEvent::Enter(node) = event {
            entered.push(node.clone());
            if node.is_quantifier() {
                iter.prune();
            }
        }
    }

    assert_eq!(
        entered,
        vec![
            ast.clone(),
            Node::Exactly(2, Box::new(Node::Symbol('a'))),
            Node::Symbol('b'),
        ]
    );
}

#[cfg(feature = "ascii-tree")]
#[test]
fn ascii_tree() {
    let ast = Parser::new().parse(r"^a*[^b-c]\{2\}$").unwrap();
    let mut tree = String::new();

    ::ascii_tree::write_tree(&mut tree, &ast.ascii_tree()).unwrap();

    assert_eq!(
        tree,
        r#" sequence
 ├─ left_anchor
 ├─ zero_or_more
 │  └─ symbol 'a'
 ├─ exactly 2
 │  └─ none_of
 │     └─ range 'b'-'c'
 └─ right_anchor
"#
    );
}
