//! Lexical analysis for the Scheme front-end.
//!
//! Transforms a source string into a token stream, failing fast on the
//! first lexical error (matching R5RS's "report the first failure and
//! stop" error-recovery posture — there is no attempt to resynchronize and
//! keep scanning after an error).

pub mod chars;
pub mod cursor;
#[cfg(test)]
mod edge_cases;
mod error;
mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{SpannedToken, Token};

use schemec_util::Handler;

/// Tokenizes `source` in full, stopping at the first lexical error.
///
/// On success, returns every token up to and including the final `Eof`.
/// On failure, the tokens produced so far are discarded and a single
/// [`LexError`] describing the first failure is returned.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let handler = Handler::new();
    let mut lexer = Lexer::new(source, &handler);
    let mut tokens = Vec::new();

    loop {
        let spanned = lexer.next_token();
        if handler.has_errors() {
            let diag = handler
                .diagnostics()
                .into_iter()
                .find(|d| d.level == schemec_util::Level::Error)
                .expect("has_errors implies at least one error diagnostic");
            return Err(LexError {
                message: diag.message,
                line: diag.span.line,
                col: diag.span.column,
            });
        }

        let is_eof = spanned.token == Token::Eof;
        tokens.push(spanned);
        if is_eof {
            break;
        }
    }

    Ok(tokens)
}
