use thiserror::Error;

use scry_parser::SyntaxError;

/// Error returned while compiling a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern is not valid.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The pattern is valid, but its automaton has too many states. See
    /// [`crate::nfa::MAX_NFA_STATES`].
    #[error("regexp too large")]
    TooLarge,
}
