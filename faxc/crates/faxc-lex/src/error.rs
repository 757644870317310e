//! The lexer's single error type.

use thiserror::Error;

/// A lexical error, carrying the position of the offending token.
///
/// `tokenize` fails fast: the first `LexError` discards whatever tokens
/// were already produced, matching the fail-fast contract (no partial
/// token list is ever handed to a caller).
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message} ({line}:{col})")]
pub struct LexError {
    pub message: String,
    pub line: u32,
    pub col: u32,
}
