//! The parser's externally-visible error type.

use thiserror::Error;

/// A structural mismatch encountered while parsing a token stream.
///
/// Carries the position of the offending token (or the previous token,
/// when the mismatch is discovered at end of input).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message} ({line}:{col})")]
pub struct ParseError {
    pub message: String,
    pub line: u32,
    pub col: u32,
}
