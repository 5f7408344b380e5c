/*! A non-deterministic finite automaton (NFA) engine.

This is an alternative to the backtracking engine in [`crate::program`]. The
pattern is compiled into an automaton with [Thompson's construction][1], and
the automaton is simulated by tracking the set of states that are active
after reading each character from the input. The simulation reads every
character exactly once, so matching time is linear in the length of the
input for a given automaton, at the cost of building the automaton upfront.

Bounded repetitions are expanded by copying the repeated atom, so large
bounds produce large automata. The number of states is limited to
[`MAX_NFA_STATES`].

[1]: https://en.wikipedia.org/wiki/Thompson%27s_construction
*/

use std::mem;

use scry_parser::ast::Node;

use crate::nfa::compiler::Compiler;
use crate::nfa::stateset::StateSet;
use crate::Error;

mod compiler;
mod stateset;


/// Maximum number of states in an [`Nfa`].
pub const MAX_NFA_STATES: usize = 1 << 16;

/// Identifies a state in an [`Nfa`].
pub(crate) type StateId = usize;

/// Identifies a character class in an [`Nfa`].
pub(crate) type ClassId = usize;

/// A state in the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum State {
    /// Consumes a character that passes the test, and moves to `next`.
    Char { test: CharTest, next: StateId },
    /// Moves to both states without consuming anything.
    Split(StateId, StateId),
    /// Moves to the accepting state if the whole input has been read.
    EndOfInput,
    /// The accepting state.
    Match,
}

/// Test applied to the input character by [`State::Char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharTest {
    Symbol(char),
    Any,
    Class(ClassId),
}

/// A set of characters, as sorted and disjoint ranges of code points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct Class {
    ranges: Vec<(u32, u32)>,
}

impl Class {
    pub(crate) fn new(ranges: Vec<(u32, u32)>) -> Self {
        Self { ranges }
    }

    pub(crate) fn contains(&self, c: char) -> bool {
        let c = c as u32;
        self.ranges
            .binary_search_by(|(lo, hi)| {
                if *hi < c {
                    std::cmp::Ordering::Less
                } else if *lo > c {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

/// An automaton that decides if an input matches a pattern in its
/// entirety.
///
/// # Example
///
/// ```
/// use scry::nfa::Nfa;
/// use scry_parser::Parser;
///
/// let ast = Parser::new().parse(r"[a-c]*x\{2\}").unwrap();
/// let nfa = Nfa::new(&ast).unwrap();
///
/// assert!(nfa.is_match("abcxx"));
/// assert!(!nfa.is_match("abcx"));
/// ```
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<State>,
    classes: Vec<Class>,
    start: StateId,
}

impl Nfa {
    /// Builds the automaton for `ast`.
    ///
    /// Returns [`Error::TooLarge`] if the automaton would have more than
    /// [`MAX_NFA_STATES`] states.
    pub fn new(ast: &Node) -> Result<Self, Error> {
        Compiler::new().compile(ast)
    }

    pub(crate) fn from_parts(
        states: Vec<State>,
        classes: Vec<Class>,
        start: StateId,
    ) -> Self {
        Self { states, classes, start }
    }

    /// Number of states in the automaton.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the automaton has no states. Automata built with
    /// [`Nfa::new`] have at least the accepting state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns true if `input` matches the pattern in its entirety.
    pub fn is_match(&self, input: &str) -> bool {
        self.accepts(&input.chars().collect::<Vec<char>>())
    }

    /// Returns true if `input` matches the pattern in its entirety.
    pub fn accepts(&self, input: &[char]) -> bool {
        let mut current = StateSet::new(self.states.len());
        let mut next = StateSet::new(self.states.len());

        self.epsilon_closure(self.start, input.is_empty(), &mut current);

        for (i, c) in input.iter().enumerate() {
            let at_end = i + 1 == input.len();

            next.clear();

            for state in current.iter() {
                if let State::Char { test, next: target } = &self.states[state]
                {
                    if self.test(test, *c) {
                        self.epsilon_closure(*target, at_end, &mut next);
                    }
                }
            }

            mem::swap(&mut current, &mut next);

            if current.is_empty() {
                return false;
            }
        }

        current.contains(self.match_state())
    }

    fn test(&self, test: &CharTest, c: char) -> bool {
        match test {
            CharTest::Symbol(s) => *s == c,
            CharTest::Any => true,
            CharTest::Class(class) => self.classes[*class].contains(c),
        }
    }

    /// Adds to `closure` the states that can be reached from `start`
    /// without consuming input. `at_end` tells if the whole input has
    /// been read, which is what [`State::EndOfInput`] checks.
    fn epsilon_closure(
        &self,
        start: StateId,
        at_end: bool,
        closure: &mut StateSet,
    ) {
        let mut stack = vec![start];

        while let Some(state) = stack.pop() {
            if !closure.insert(state) {
                continue;
            }
            match &self.states[state] {
                State::Split(a, b) => {
                    stack.push(*b);
                    stack.push(*a);
                }
                State::EndOfInput if at_end => {
                    stack.push(self.match_state());
                }
                State::Char { .. } | State::EndOfInput | State::Match => {}
            }
        }
    }

    /// The accepting state is always the first one.
    #[inline]
    fn match_state(&self) -> StateId {
        0
    }
}
