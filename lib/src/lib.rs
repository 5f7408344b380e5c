/*! A full-match engine for POSIX-flavored basic regular expressions.

Patterns are written in a restricted form of the POSIX basic regular
expression syntax: literal characters, `.`, `*`, the `^` and `$` anchors,
bounded repetitions (`\{n\}`, `\{n,\}` and `\{n,m\}`) and bracket
expressions with ranges, POSIX character classes and equivalence classes.
Alternation, groups and back-references are not supported.

Compiling a pattern goes through the following steps:

* The pattern is lexed and parsed by the [`scry_parser`] crate, which
  produces an AST.
* The [`optimizer`] rewrites the AST into an equivalent one that requires
  less backtracking.
* The code generator in [`program::codegen`] lowers the AST into a
  [`Program`], a vector of matchers in continuation-passing style.

Programs are run by a backtracking executor that determines whether the
whole input matches. There's no search mode, `b` doesn't match `abc`.

The [`nfa`] module provides an alternative engine that compiles patterns
into a non-deterministic finite automaton.

# Example

```rust
use scry::Regex;

let re = Regex::new(r"^[a-z]\{2,4\}[[:digit:]]*$").unwrap();

assert!(re.is_match("abc123"));
assert!(!re.is_match("a123"));

// A quantifier can't be applied to an atom that is already quantified.
assert!(Regex::new(r"[a-z]*\{2\}").is_err());
```

# Performance

The backtracking executor tries the longest repetition first and falls back
to shorter ones, re-running the rest of the pattern each time. Patterns with
several adjacent unbounded repetitions, like `.*.*.*x`, can take time that is
polynomial, or worse, in the length of the input. The [`nfa`] engine doesn't
have this problem.
*/

#![deny(missing_docs)]

pub use errors::Error;
pub use flags::Flag;
pub use flags::Flags;
pub use program::Program;
pub use regex::regex_match;
pub use regex::Regex;

pub use scry_parser::SyntaxError;

pub mod nfa;
pub mod optimizer;
pub mod program;

mod errors;
mod flags;
mod regex;

#[cfg(test)]
mod tests;
