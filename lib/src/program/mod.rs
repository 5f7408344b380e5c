/*! Matcher programs and the backtracking executor that runs them.

A [`Program`] is the result of lowering a pattern's AST with
[`codegen::generate`]. It is a sequence of [`Matcher`]s written in
continuation-passing style: every matcher, except [`Matcher::Noop`] and
[`Matcher::RightAnchor`], refers to the matcher that must be executed after
it succeeds. Matchers refer to each other by their address, which is their
index in the program. For instance, the pattern `ab*c` is lowered to:

```text
00000: ACCEPT 'a'
00001: ZERO_OR_MORE 00004
00002: ACCEPT 'c'
00003: NOOP
00004: ACCEPT 'b'
00005: NOOP
```

Matchers are laid out so that the continuation of a matcher is always the
one at the next address. Sub-matchers, like the body of a repetition, come
after the whole continuation.

Programs are immutable once generated, and can be executed any number of
times, from any number of threads, against different inputs.
*/

use std::fmt::{Display, Formatter};

pub mod codegen;
mod exec;


/// Address of a [`Matcher`] within a [`Program`].
pub type MatcherId = usize;

/// A matcher in a program.
///
/// The last field of each variant, when present, is the continuation: the
/// matcher that runs after this one succeeds, starting at the position
/// where this one stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Succeeds without consuming anything.
    Noop,
    /// Consumes the given character.
    Accept(char, MatcherId),
    /// Consumes any character except the given one.
    Reject(char, MatcherId),
    /// Consumes any character.
    AcceptAny(MatcherId),
    /// Consumes a character within the inclusive range.
    AcceptRange(char, char, MatcherId),
    /// Consumes a character outside the inclusive range.
    RejectRange(char, char, MatcherId),
    /// Runs the first matcher as many times as possible, then the
    /// continuation.
    ZeroOrMore(MatcherId, MatcherId),
    /// Runs the matcher exactly `n` times, then the continuation.
    AcceptN(usize, MatcherId, MatcherId),
    /// Runs the matcher up to `n` times, as many as possible, then the
    /// continuation.
    AcceptUpToN(usize, MatcherId, MatcherId),
    /// Start of the input. Always succeeds, as matching always starts at
    /// the start of the input.
    LeftAnchor(MatcherId),
    /// End of the input.
    RightAnchor,
    /// Runs both matchers and keeps the one that advanced the most. On ties
    /// the second one wins.
    Or(MatcherId, MatcherId),
    /// Runs both matchers, succeeds only if both succeed.
    And(MatcherId, MatcherId),
    /// Consumes a character if the first matcher, which is a predicate that
    /// only looks at the current character, succeeds.
    OpIf(MatcherId, MatcherId),
}

impl Matcher {
    /// Returns true if this is [`Matcher::Noop`].
    pub fn is_noop(&self) -> bool {
        matches!(self, Matcher::Noop)
    }

    /// Returns the addresses this matcher refers to, in layout order: the
    /// continuation first, and then the sub-matchers. [`Matcher::Or`] and
    /// [`Matcher::And`] don't have a continuation, their operands are laid
    /// out in order.
    fn children(&self) -> [Option<MatcherId>; 2] {
        match *self {
            Matcher::Noop | Matcher::RightAnchor => [None, None],
            Matcher::Accept(_, next)
            | Matcher::Reject(_, next)
            | Matcher::AcceptAny(next)
            | Matcher::AcceptRange(_, _, next)
            | Matcher::RejectRange(_, _, next)
            | Matcher::LeftAnchor(next) => [Some(next), None],
            Matcher::ZeroOrMore(inner, next)
            | Matcher::AcceptN(_, inner, next)
            | Matcher::AcceptUpToN(_, inner, next)
            | Matcher::OpIf(inner, next) => [Some(next), Some(inner)],
            Matcher::Or(left, right) | Matcher::And(left, right) => {
                [Some(left), Some(right)]
            }
        }
    }

    /// Returns a copy of this matcher where every address `id` is replaced
    /// with `f(id)`.
    fn relocate(&self, f: impl Fn(MatcherId) -> MatcherId) -> Matcher {
        match *self {
            Matcher::Noop => Matcher::Noop,
            Matcher::RightAnchor => Matcher::RightAnchor,
            Matcher::Accept(c, next) => Matcher::Accept(c, f(next)),
            Matcher::Reject(c, next) => Matcher::Reject(c, f(next)),
            Matcher::AcceptAny(next) => Matcher::AcceptAny(f(next)),
            Matcher::AcceptRange(lo, hi, next) => {
                Matcher::AcceptRange(lo, hi, f(next))
            }
            Matcher::RejectRange(lo, hi, next) => {
                Matcher::RejectRange(lo, hi, f(next))
            }
            Matcher::LeftAnchor(next) => Matcher::LeftAnchor(f(next)),
            Matcher::ZeroOrMore(inner, next) => {
                Matcher::ZeroOrMore(f(inner), f(next))
            }
            Matcher::AcceptN(n, inner, next) => {
                Matcher::AcceptN(n, f(inner), f(next))
            }
            Matcher::AcceptUpToN(n, inner, next) => {
                Matcher::AcceptUpToN(n, f(inner), f(next))
            }
            Matcher::Or(left, right) => Matcher::Or(f(left), f(right)),
            Matcher::And(left, right) => Matcher::And(f(left), f(right)),
            Matcher::OpIf(predicate, next) => {
                Matcher::OpIf(f(predicate), f(next))
            }
        }
    }
}

/// Prints the matcher as a line of the program listing.
impl Display for Matcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Noop => write!(f, "NOOP"),
            Matcher::RightAnchor => write!(f, "RIGHT_ANCHOR"),
            Matcher::Accept(c, _) => write!(f, "ACCEPT {:?}", c),
            Matcher::Reject(c, _) => write!(f, "REJECT {:?}", c),
            Matcher::AcceptAny(_) => write!(f, "ACCEPT_ANY"),
            Matcher::AcceptRange(lo, hi, _) => {
                write!(f, "ACCEPT_RANGE {:?}-{:?}", lo, hi)
            }
            Matcher::RejectRange(lo, hi, _) => {
                write!(f, "REJECT_RANGE {:?}-{:?}", lo, hi)
            }
            Matcher::LeftAnchor(_) => write!(f, "LEFT_ANCHOR"),
            Matcher::ZeroOrMore(inner, _) => {
                write!(f, "ZERO_OR_MORE {:05x}", inner)
            }
            Matcher::AcceptN(n, inner, _) => {
                write!(f, "ACCEPT_N({}) {:05x}", n, inner)
            }
            Matcher::AcceptUpToN(n, inner, _) => {
                write!(f, "ACCEPT_UP_TO_N({}) {:05x}", n, inner)
            }
            Matcher::OpIf(predicate, _) => write!(f, "IF {:05x}", predicate),
            Matcher::Or(left, right) => {
                write!(f, "OR {:05x} {:05x}", left, right)
            }
            Matcher::And(left, right) => {
                write!(f, "AND {:05x} {:05x}", left, right)
            }
        }
    }
}

/// A compiled pattern, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    matchers: Vec<Matcher>,
}

impl Program {
    /// Creates a program that starts at `matchers[root]`.
    ///
    /// Matchers that can't be reached from the root are discarded, and the
    /// rest are moved to their final addresses: the root goes first, and
    /// every matcher is followed by its continuation. A matcher referred to
    /// from more than one place is kept once.
    ///
    /// # Panics
    ///
    /// If any of the addresses is out of bounds.
    pub fn new(matchers: Vec<Matcher>, root: MatcherId) -> Self {
        // Final address of each matcher, `usize::MAX` for the ones not
        // reached yet.
        let mut addr = vec![usize::MAX; matchers.len()];
        let mut order = Vec::with_capacity(matchers.len());
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if addr[id] != usize::MAX {
                continue;
            }
            addr[id] = order.len();
            order.push(id);
            // Pushed in reverse, so that the first child is the next one
            // to be laid out.
            let [first, second] = matchers[id].children();
            stack.extend(second);
            stack.extend(first);
        }

        let matchers = order
            .into_iter()
            .map(|id| matchers[id].relocate(|child| addr[child]))
            .collect();

        Self { matchers }
    }

    /// Address of the first matcher in the program.
    #[inline]
    pub fn root(&self) -> MatcherId {
        0
    }

    /// Returns the matcher at the given address.
    ///
    /// # Panics
    ///
    /// If `id` is not lower than [`Program::len`].
    #[inline]
    pub fn matcher(&self, id: MatcherId) -> &Matcher {
        &self.matchers[id]
    }

    /// Returns all the matchers in the program, in address order.
    pub fn matchers(&self) -> &[Matcher] {
        self.matchers.as_slice()
    }

    /// Number of matchers in the program.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Programs built by [`codegen::generate`] always contain at least one
    /// matcher.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Returns true if the program consumes the whole `input`.
    pub fn is_match(&self, input: &[char]) -> bool {
        self.execute(input, 0) == Some(input.len())
    }
}

/// Prints the program as a listing with one matcher per line.
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        for (addr, matcher) in self.matchers.iter().enumerate() {
            writeln!(f, "{:05x}: {}", addr, matcher)?;
        }
        Ok(())
    }
}
