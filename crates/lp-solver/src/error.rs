use lp_parser::ParseError;
use thiserror::Error;

/// Everything that can keep a problem from being solved: a bad input line, or
/// an internal inconsistency that means §4 was assembled wrongly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A row/column size mismatch during assembly. Should be unreachable if
    /// the assembler is correct; surfaced rather than panicking so a bug here
    /// doesn't take the whole process down with it.
    #[error("internal shape error: {0}")]
    Shape(String),

    /// A pivot landed on a zero entry, which the ratio test should have
    /// excluded. Also should be unreachable.
    #[error("internal arithmetic error: {0}")]
    Arithmetic(String),
}

/// The library root error: every stage's error converts into this via
/// `#[from]`, so callers outside this crate (the CLI) only ever need to
/// handle one type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LpError {
    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl LpError {
    /// The `ParseError` underneath, if this failure traces back to a bad
    /// input line rather than an internal invariant violation.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LpError::Solve(SolveError::Parse(err)) => Some(err),
            LpError::Solve(_) => None,
        }
    }
}
