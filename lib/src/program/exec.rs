use std::cmp;

use crate::program::{Matcher, MatcherId, Program};

impl Program {
    /// Runs the program on `input` starting at position `pos`.
    ///
    /// Returns the position where the match ends, or `None` if the program
    /// doesn't match at `pos`. Positions are indices in `input`.
    pub fn execute(&self, input: &[char], pos: usize) -> Option<usize> {
        self.run(self.root(), input, pos)
    }

    /// Runs the matcher at address `id` and its continuations on `input`,
    /// starting at `pos`.
    ///
    /// Quantifiers are greedy, they try the longest repetition first and
    /// fall back to shorter ones when the continuation fails. The result is
    /// the end position of the longest repetition for which the
    /// continuation succeeds.
    ///
    /// Continuations are followed in a loop, only sub-matchers and the
    /// continuations of repetitions are run with a recursive call.
    pub(crate) fn run(
        &self,
        mut id: MatcherId,
        input: &[char],
        mut pos: usize,
    ) -> Option<usize> {
        loop {
            match self.matchers[id] {
                Matcher::Noop => return Some(pos),
                Matcher::Accept(c, next) => match input.get(pos) {
                    Some(x) if *x == c => id = next,
                    _ => return None,
                },
                Matcher::Reject(c, next) => match input.get(pos) {
                    Some(x) if *x != c => id = next,
                    _ => return None,
                },
                Matcher::AcceptAny(next) => {
                    if pos >= input.len() {
                        return None;
                    }
                    id = next;
                }
                Matcher::AcceptRange(lo, hi, next) => match input.get(pos) {
                    Some(x) if lo <= *x && *x <= hi => id = next,
                    _ => return None,
                },
                Matcher::RejectRange(lo, hi, next) => match input.get(pos) {
                    Some(x) if *x < lo || hi < *x => id = next,
                    _ => return None,
                },
                Matcher::ZeroOrMore(inner, next) => {
                    return self.repeat(inner, next, input, pos, usize::MAX)
                }
                Matcher::AcceptN(n, inner, next) => {
                    for _ in 0..n {
                        pos = self.run(inner, input, pos)?;
                    }
                    id = next;
                    continue;
                }
                Matcher::AcceptUpToN(n, inner, next) => {
                    return self.repeat(inner, next, input, pos, n)
                }
                Matcher::LeftAnchor(next) => {
                    id = next;
                    continue;
                }
                Matcher::RightAnchor => {
                    return if pos == input.len() { Some(pos) } else { None }
                }
                Matcher::Or(left, right) => {
                    return match (
                        self.run(left, input, pos),
                        self.run(right, input, pos),
                    ) {
                        // `cmp::max` returns the second argument when both
                        // are equal.
                        (Some(l), Some(r)) => Some(cmp::max(l, r)),
                        (l, None) => l,
                        (None, r) => r,
                    }
                }
                Matcher::And(left, right) => {
                    return match (
                        self.run(left, input, pos),
                        self.run(right, input, pos),
                    ) {
                        (Some(l), Some(r)) => Some(cmp::max(l, r)),
                        _ => None,
                    }
                }
                Matcher::OpIf(predicate, next) => {
                    if pos >= input.len()
                        || self.run(predicate, input, pos).is_none()
                    {
                        return None;
                    }
                    id = next;
                }
            }
            // Every arm that falls through here consumed one character.
            pos += 1;
        }
    }

    /// Runs `inner` up to `max` times and then `next`.
    ///
    /// `next` is tried after every repetition, including zero repetitions,
    /// and the result is the one returned by `next` after the largest
    /// number of repetitions for which it succeeded. The loop stops when
    /// `inner` fails, when it succeeds without consuming anything, or after
    /// `max` repetitions.
    fn repeat(
        &self,
        inner: MatcherId,
        next: MatcherId,
        input: &[char],
        mut pos: usize,
        max: usize,
    ) -> Option<usize> {
        // With nothing after the repetition, the result is the end of the
        // longest run of `inner`.
        if self.matchers[next].is_noop() {
            for _ in 0..max {
                match self.run(inner, input, pos) {
                    Some(p) if p > pos => pos = p,
                    _ => break,
                }
            }
            return Some(pos);
        }

        let mut best = self.run(next, input, pos);

        for _ in 0..max {
            match self.run(inner, input, pos) {
                Some(p) if p > pos => pos = p,
                _ => break,
            }
            if let Some(end) = self.run(next, input, pos) {
                best = Some(end);
            }
        }

        best
    }
}
