use std::fmt;
use std::fmt::{Debug, Display, Formatter};

#[cfg(feature = "logging")]
use log::*;

use scry_parser::ast::Node;
use scry_parser::{PatternSource, Parser};

use crate::flags::Flags;
use crate::optimizer::optimise;
use crate::program::codegen::generate;
use crate::program::Program;
use crate::Error;

/// A compiled pattern.
///
/// Compiling a pattern parses it, optimises its AST and generates a
/// [`Program`] for the backtracking executor. All of this is done once, the
/// compiled [`Regex`] can then be matched against any number of inputs, and
/// shared between threads.
///
/// Matching is always against the whole input. `Regex::new("b")` doesn't
/// match `"abc"`.
///
/// # Example
///
/// ```
/// use scry::Regex;
///
/// let re = Regex::new(r"[[:alpha:]_][[:alnum:]_]*").unwrap();
///
/// assert!(re.is_match("foo_bar1"));
/// assert!(!re.is_match("1foo"));
/// ```
#[derive(Clone)]
pub struct Regex {
    pattern: String,
    flags: Flags,
    ast: Node,
    program: Program,
}

impl Regex {
    /// Compiles `pattern` with the basic grammar.
    pub fn new(
        pattern: &(impl PatternSource + ?Sized),
    ) -> Result<Self, Error> {
        Self::with_flags(pattern, Flags::basic())
    }

    /// Compiles `pattern` with the given flags.
    ///
    /// The flags are stored with the compiled regex and returned by
    /// [`Regex::flags`], but they don't change how the pattern is parsed
    /// or matched.
    pub fn with_flags(
        pattern: &(impl PatternSource + ?Sized),
        flags: Flags,
    ) -> Result<Self, Error> {
        let ast = optimise(Parser::new().parse(pattern)?);
        let program = generate(&ast);
        let pattern: String = pattern.to_chars().into_iter().collect();

        #[cfg(feature = "logging")]
        {
            debug!("Compiled `{}`, optimised AST: `{}`", pattern, ast);
            debug!("AST nodes: {}, matchers: {}", ast.size(), program.len());
            debug!("Program for `{}`:{}", pattern, program);
        }

        Ok(Self { pattern, flags, ast, program })
    }

    /// Returns true if `input` matches the pattern in its entirety.
    pub fn is_match(&self, input: &str) -> bool {
        self.is_match_chars(&input.chars().collect::<Vec<char>>())
    }

    /// Like [`Regex::is_match`], but for input that is already split in
    /// characters.
    pub fn is_match_chars(&self, input: &[char]) -> bool {
        self.program.is_match(input)
    }

    /// Returns the pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the flags this regex was compiled with.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the optimised AST of the pattern.
    pub fn ast(&self) -> &Node {
        &self.ast
    }

    /// Returns the program executed by [`Regex::is_match`].
    pub fn program(&self) -> &Program {
        &self.program
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl Debug for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Regex").field(&self.pattern).finish()
    }
}

/// Compiles `pattern` and matches it against `input`.
///
/// This is a shortcut for `Regex::new(pattern)?.is_match(input)`. When the
/// same pattern is matched against many inputs, compile it once with
/// [`Regex::new`].
///
/// ```
/// assert_eq!(scry::regex_match(r"a\{2,3\}", "aaa"), Ok(true));
/// assert!(scry::regex_match("a$b", "ab").is_err());
/// ```
pub fn regex_match(
    pattern: &(impl PatternSource + ?Sized),
    input: &str,
) -> Result<bool, Error> {
    Ok(Regex::new(pattern)?.is_match(input))
}
