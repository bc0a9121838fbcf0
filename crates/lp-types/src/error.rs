use thiserror::Error;

/// Errors raised by the shared data types: malformed rational literals. Kept
/// separate from the parser's and solver's own error enums so a bug here
/// can't be mistaken for a bad input line. Carries the same 1-based input
/// line number `ParseError` does, since every literal this module parses
/// originates from a specific input line and `ParseError` wraps this type
/// via `#[from]` rather than re-deriving the line itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypesError {
    /// A numeric literal could not be parsed as an integer, decimal, or `p/q`
    /// fraction.
    #[error("line {line}: invalid numeric literal '{literal}'")]
    InvalidLiteral { line: usize, literal: String },

    /// A literal fraction or quotient chain divided by zero.
    #[error("line {line}: division by zero in literal '{literal}'")]
    DivisionByZero { line: usize, literal: String },
}

impl TypesError {
    pub fn line(&self) -> usize {
        match self {
            TypesError::InvalidLiteral { line, .. } | TypesError::DivisionByZero { line, .. } => {
                *line
            }
        }
    }
}
