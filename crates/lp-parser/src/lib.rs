pub mod error;
pub mod lexer;
pub mod line;
pub mod term;

pub use error::ParseError;
pub use line::{parse_program, Cmp, LineAst};
pub use term::Term;
