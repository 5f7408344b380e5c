/*! Lowers pattern ASTs into matcher programs.

Lowering is done from the end of each sequence towards its start: the
matcher for the tail of a sequence is emitted first, and its address is
passed down as the continuation of the matcher for the node that precedes
it.

Bracket expressions are lowered into a single [`Matcher::OpIf`], whose
predicate combines the members with [`Matcher::Or`] (for `[...]`) or
[`Matcher::And`] over negated members (for `[^...]`). Members are single
character matchers with [`Matcher::Noop`] as continuation, so the
continuation of the bracket expression runs once, after the predicate,
instead of once per member.
*/

use scry_parser::ast::Node;

use crate::program::{Matcher, MatcherId, Program};

/// Generates the program for `ast`.
pub fn generate(ast: &Node) -> Program {
    let mut codegen = CodeGen::default();
    let noop = codegen.emit(Matcher::Noop);
    let root = codegen.lower(ast, noop);
    Program::new(codegen.matchers, root)
}

#[derive(Default)]
struct CodeGen {
    // Matchers in emission order. `Program::new` moves them to their
    // final addresses and drops the ones that end up unreachable.
    matchers: Vec<Matcher>,
}

impl CodeGen {
    fn emit(&mut self, matcher: Matcher) -> MatcherId {
        self.matchers.push(matcher);
        self.matchers.len() - 1
    }

    /// Lowers `node`, with `next` as its continuation.
    fn lower(&mut self, node: &Node, next: MatcherId) -> MatcherId {
        match node {
            Node::Sequence(nodes) => nodes
                .iter()
                .rev()
                .fold(next, |next, node| self.lower(node, next)),
            Node::Symbol(c) => self.emit(Matcher::Accept(*c, next)),
            Node::Any => self.emit(Matcher::AcceptAny(next)),
            Node::Range(lo, hi) => {
                self.emit(Matcher::AcceptRange(*lo, *hi, next))
            }
            Node::ZeroOrMore(inner) => {
                let body = self.body(inner);
                self.emit(Matcher::ZeroOrMore(body, next))
            }
            Node::Exactly(n, inner) => {
                let body = self.body(inner);
                self.emit(Matcher::AcceptN(*n, body, next))
            }
            Node::AtLeast(n, inner) => {
                let star_body = self.body(inner);
                let star = self.emit(Matcher::ZeroOrMore(star_body, next));
                let body = self.body(inner);
                self.emit(Matcher::AcceptN(*n, body, star))
            }
            Node::Between(n, m, inner) => {
                let optional_body = self.body(inner);
                let optional = self.emit(Matcher::AcceptUpToN(
                    m.saturating_sub(*n),
                    optional_body,
                    next,
                ));
                let body = self.body(inner);
                self.emit(Matcher::AcceptN(*n, body, optional))
            }
            Node::LeftAnchor => self.emit(Matcher::LeftAnchor(next)),
            // The end of the input is the end of the match, nothing can
            // follow.
            Node::RightAnchor => self.emit(Matcher::RightAnchor),
            Node::AnyOf(_) | Node::NoneOf(_) => {
                let predicate = self.predicate(node);
                self.with_next(predicate, next)
            }
        }
    }

    /// Lowers the body of a quantifier.
    fn body(&mut self, node: &Node) -> MatcherId {
        let noop = self.emit(Matcher::Noop);
        self.lower(node, noop)
    }

    /// Emits a single character matcher, with [`Matcher::Noop`] as its
    /// continuation, that matches the same characters as `node`.
    fn predicate(&mut self, node: &Node) -> MatcherId {
        match node {
            Node::AnyOf(members) => self.any_of(members),
            Node::NoneOf(members) => {
                let predicate = self.any_of(members);
                self.negate(predicate);
                predicate
            }
            node => self.body(node),
        }
    }

    /// Right fold of `members` with [`Matcher::Or`]. A single member is
    /// returned as is.
    fn any_of(&mut self, members: &[Node]) -> MatcherId {
        let mut predicates: Vec<MatcherId> =
            members.iter().map(|member| self.predicate(member)).collect();

        match predicates.pop() {
            Some(last) => {
                predicates.into_iter().rev().fold(last, |rest, member| {
                    self.emit(Matcher::Or(member, rest))
                })
            }
            // An empty bracket expression matches nothing.
            None => {
                let noop = self.emit(Matcher::Noop);
                self.emit(Matcher::RejectRange('\0', char::MAX, noop))
            }
        }
    }

    /// Negates the single character matcher at `id`, in place.
    ///
    /// [`Matcher::Or`] and [`Matcher::And`] are negated with De Morgan's
    /// laws, because POSIX classes nest `[...]` inside `[^...]`.
    fn negate(&mut self, id: MatcherId) {
        let matcher = self.matchers[id];
        let negated = match matcher {
            Matcher::Accept(c, next) => Matcher::Reject(c, next),
            Matcher::Reject(c, next) => Matcher::Accept(c, next),
            Matcher::AcceptRange(lo, hi, next) => {
                Matcher::RejectRange(lo, hi, next)
            }
            Matcher::RejectRange(lo, hi, next) => {
                Matcher::AcceptRange(lo, hi, next)
            }
            Matcher::AcceptAny(next) => {
                Matcher::RejectRange('\0', char::MAX, next)
            }
            Matcher::Or(left, right) => {
                self.negate(left);
                self.negate(right);
                Matcher::And(left, right)
            }
            Matcher::And(left, right) => {
                self.negate(left);
                self.negate(right);
                Matcher::Or(left, right)
            }
            // Bracket expressions only contain the single character
            // matchers above.
            other => other,
        };
        self.matchers[id] = negated;
    }

    /// Gives a continuation to a predicate produced by
    /// [`CodeGen::predicate`].
    ///
    /// A predicate that is a single character matcher takes the
    /// continuation directly, anything else is wrapped in a
    /// [`Matcher::OpIf`].
    fn with_next(
        &mut self,
        predicate: MatcherId,
        next: MatcherId,
    ) -> MatcherId {
        let matcher = self.matchers[predicate];

        let rest = match matcher {
            Matcher::Accept(_, rest)
            | Matcher::Reject(_, rest)
            | Matcher::AcceptAny(rest)
            | Matcher::AcceptRange(_, _, rest)
            | Matcher::RejectRange(_, _, rest) => rest,
            _ => return self.emit(Matcher::OpIf(predicate, next)),
        };

        if !self.matchers[rest].is_noop() {
            return self.emit(Matcher::OpIf(predicate, next));
        }

        let retargeted = matcher.relocate(|_| next);

        self.matchers[predicate] = retargeted;
        predicate
    }
}
