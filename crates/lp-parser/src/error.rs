use lp_types::TypesError;
use thiserror::Error;

/// Every failure the lexer/term parser can raise, tagged with the 1-based
/// input line number so the CLI can point at the offending statement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: empty expression")]
    EmptyExpression { line: usize },

    #[error("line {line}: malformed term '{term}' (more than one variable)")]
    MalformedTerm { line: usize, term: String },

    #[error("line {line}: invalid numeric literal '{literal}'")]
    InvalidLiteral { line: usize, literal: String },

    #[error("line {line}: division by zero in literal '{literal}'")]
    DivisionByZero { line: usize, literal: String },

    #[error("line {line}: missing comparator (expected one of <=, >=, ==)")]
    MissingComparator { line: usize },

    #[error("line {line}: unrecognized line keyword '{keyword}'")]
    UnknownKeyword { line: usize, keyword: String },

    /// A literal failed to parse in `lp-types`; its own message already
    /// carries the line number, so it is relayed verbatim rather than
    /// re-wrapped.
    #[error(transparent)]
    Literal(#[from] TypesError),
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::EmptyExpression { line }
            | ParseError::MalformedTerm { line, .. }
            | ParseError::InvalidLiteral { line, .. }
            | ParseError::DivisionByZero { line, .. }
            | ParseError::MissingComparator { line }
            | ParseError::UnknownKeyword { line, .. } => *line,
            ParseError::Literal(err) => err.line(),
        }
    }
}
