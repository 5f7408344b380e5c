use itertools::Itertools;
use rustc_hash::FxHashMap;
use scry_parser::ast::Node;

#[cfg(feature = "logging")]
use log::*;

use crate::nfa::{
    CharTest, Class, ClassId, Nfa, State, StateId, MAX_NFA_STATES,
};
use crate::Error;

/// Largest Unicode code point.
const MAX_CODE_POINT: u32 = char::MAX as u32;

/// Builds an [`Nfa`] from an AST.
///
/// States are created from the end of the pattern towards its start, in the
/// same way that [`crate::program::codegen`] generates matchers: the states
/// for each node are built once the state that follows them is known.
pub(crate) struct Compiler {
    states: Vec<State>,
    classes: Vec<Class>,
    // Maps each class to its index in `classes`. Bracket expressions are
    // copied when bounded repetitions are expanded, but each distinct class
    // is stored once.
    class_ids: FxHashMap<Class, ClassId>,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            classes: Vec::new(),
            class_ids: FxHashMap::default(),
        }
    }

    pub fn compile(mut self, ast: &Node) -> Result<Nfa, Error> {
        match count_states(ast).and_then(|n| n.checked_add(1)) {
            Some(n) if n <= MAX_NFA_STATES => {}
            _ => return Err(Error::TooLarge),
        }

        // The accepting state is the first one.
        let accept = self.push(State::Match);
        let start = self.node(ast, accept);

        #[cfg(feature = "logging")]
        debug!(
            "NFA for `{}`: {} states, {} classes",
            ast,
            self.states.len(),
            self.classes.len()
        );

        Ok(Nfa::from_parts(self.states, self.classes, start))
    }

    fn push(&mut self, state: State) -> StateId {
        self.states.push(state);
        self.states.len() - 1
    }

    /// Builds the states for `node`, returns the state where they start.
    /// `next` is the state that follows.
    fn node(&mut self, node: &Node, next: StateId) -> StateId {
        match node {
            Node::Sequence(nodes) => nodes
                .iter()
                .rev()
                .fold(next, |next, node| self.node(node, next)),
            Node::Symbol(c) => {
                self.push(State::Char { test: CharTest::Symbol(*c), next })
            }
            Node::Any => self.push(State::Char { test: CharTest::Any, next }),
            Node::Range(..) | Node::AnyOf(_) | Node::NoneOf(_) => {
                let class = self.class(node);
                self.push(State::Char { test: CharTest::Class(class), next })
            }
            Node::ZeroOrMore(inner) => self.star(inner, next),
            Node::Exactly(n, inner) => self.copies(inner, *n, next),
            Node::AtLeast(n, inner) => {
                let star = self.star(inner, next);
                self.copies(inner, *n, star)
            }
            Node::Between(n, m, inner) => {
                let optional =
                    self.optional_copies(inner, m.saturating_sub(*n), next);
                self.copies(inner, *n, optional)
            }
            Node::LeftAnchor => next,
            // Whatever follows `$` is ignored. Once the whole input has been
            // read, `EndOfInput` moves directly to the accepting state.
            Node::RightAnchor => self.push(State::EndOfInput),
        }
    }

    fn star(&mut self, inner: &Node, next: StateId) -> StateId {
        // The split's first target is patched once the inner states exist,
        // as they loop back to the split.
        let split = self.push(State::Split(next, next));
        let body = self.node(inner, split);
        self.states[split] = State::Split(body, next);
        split
    }

    /// `n` copies of `inner`, followed by `next`.
    fn copies(&mut self, inner: &Node, n: usize, next: StateId) -> StateId {
        (0..n).fold(next, |next, _| self.node(inner, next))
    }

    /// Between zero and `n` copies of `inner`, followed by `next`.
    fn optional_copies(
        &mut self,
        inner: &Node,
        n: usize,
        next: StateId,
    ) -> StateId {
        (0..n).fold(next, |rest, _| {
            let body = self.node(inner, rest);
            self.push(State::Split(body, next))
        })
    }

    fn class(&mut self, node: &Node) -> ClassId {
        let class = Class::new(class_ranges(node));
        if let Some(id) = self.class_ids.get(&class) {
            return *id;
        }
        let id = self.classes.len();
        self.classes.push(class.clone());
        self.class_ids.insert(class, id);
        id
    }
}

/// Number of states needed for `node`, or `None` if the number doesn't
/// fit in a `usize`.
fn count_states(node: &Node) -> Option<usize> {
    match node {
        Node::Sequence(nodes) => nodes.iter().try_fold(0_usize, |sum, node| {
            sum.checked_add(count_states(node)?)
        }),
        Node::Symbol(_)
        | Node::Any
        | Node::Range(..)
        | Node::AnyOf(_)
        | Node::NoneOf(_)
        | Node::RightAnchor => Some(1),
        Node::LeftAnchor => Some(0),
        Node::ZeroOrMore(inner) => count_states(inner)?.checked_add(1),
        Node::Exactly(n, inner) => count_states(inner)?.checked_mul(*n),
        Node::AtLeast(n, inner) => {
            let inner = count_states(inner)?;
            inner.checked_mul(*n)?.checked_add(inner)?.checked_add(1)
        }
        Node::Between(n, m, inner) => {
            let inner = count_states(inner)?;
            let optional =
                inner.checked_add(1)?.checked_mul(m.saturating_sub(*n))?;
            inner.checked_mul(*n)?.checked_add(optional)
        }
    }
}

/// Returns the code point ranges of the characters matched by a single
/// character node. Nodes that don't match a single character produce no
/// ranges.
fn class_ranges(node: &Node) -> Vec<(u32, u32)> {
    match node {
        Node::Symbol(c) => vec![(*c as u32, *c as u32)],
        Node::Range(lo, hi) => vec![(*lo as u32, *hi as u32)],
        Node::Any => vec![(0, MAX_CODE_POINT)],
        Node::AnyOf(members) => union(members),
        Node::NoneOf(members) => complement(&union(members)),
        _ => vec![],
    }
}

/// Union of the ranges of `members`, sorted and with overlapping or
/// adjacent ranges merged.
fn union(members: &[Node]) -> Vec<(u32, u32)> {
    members
        .iter()
        .flat_map(class_ranges)
        .sorted()
        .coalesce(|a, b| {
            if b.0 <= a.1.saturating_add(1) {
                Ok((a.0, a.1.max(b.1)))
            } else {
                Err((a, b))
            }
        })
        .collect()
}

/// Complement of sorted and disjoint `ranges`.
fn complement(ranges: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let mut result = Vec::with_capacity(ranges.len() + 1);
    let mut start = 0;

    for (lo, hi) in ranges {
        if *lo > start {
            result.push((start, lo - 1));
        }
        start = hi + 1;
    }

    if start <= MAX_CODE_POINT {
        result.push((start, MAX_CODE_POINT));
    }

    result
}
