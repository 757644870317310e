//! Parsing for the Scheme front-end: the datum reader and the program
//! parser built on top of it.
//!
//! Both stages share the "fail fast on the first error" posture already
//! used by `schemec-lex`'s `tokenize`: a [`Handler`] collects diagnostics
//! during a single pass, and the first error aborts the pass. There is no
//! error-recovery/resynchronization pass — the grammar is read once.

mod ast;
mod datum;
#[cfg(test)]
mod edge_cases;
mod error;
mod parser;
mod prettyprint;

pub use ast::{
    Assignment, Ast, Begin, Binding, Body, Case, CaseClause, Cond, CondClause, Conditional,
    Definition, Do, Formals, IterationSpec, Lambda, Let, LetKind, ProcedureCall,
};
pub use datum::{read_datum, Datum};
pub use error::ParseError;
pub use prettyprint::prettyprint;

use schemec_lex::SpannedToken;
use schemec_util::Handler;

/// Parses a full token stream (as produced by `schemec_lex::tokenize`)
/// into a sequence of top-level programs, stopping at the first
/// structural error.
pub fn parse(tokens: &[SpannedToken]) -> Result<Vec<Ast>, ParseError> {
    let handler = Handler::new();
    match parser::parse_program(tokens, &handler) {
        Some(items) => Ok(items),
        None => {
            let diag = handler
                .diagnostics()
                .into_iter()
                .find(|d| d.level == schemec_util::Level::Error)
                .expect("a None result implies at least one error diagnostic");
            Err(ParseError {
                message: diag.message,
                line: diag.span.line,
                col: diag.span.column,
            })
        }
    }
}

/// Reads a single datum from the start of `tokens`, for callers that only
/// want the S-expression view (e.g. a `--dump-datum` CLI mode) without
/// program-level classification.
pub fn read_one_datum(tokens: &[SpannedToken]) -> Result<Datum, ParseError> {
    let handler = Handler::new();
    match read_datum(tokens, 0, &handler) {
        Some((datum, _)) => Ok(datum),
        None => {
            let diag = handler
                .diagnostics()
                .into_iter()
                .find(|d| d.level == schemec_util::Level::Error)
                .expect("a None result implies at least one error diagnostic");
            Err(ParseError {
                message: diag.message,
                line: diag.span.line,
                col: diag.span.column,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemec_lex::tokenize;

    #[test]
    fn parses_simple_program() {
        let tokens = tokenize("(define x 1) (+ x 2)").unwrap();
        let items = parse(&tokens).unwrap();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], Ast::Definition(_)));
        assert!(matches!(items[1], Ast::ProcedureCall(_)));
    }

    #[test]
    fn parse_fails_fast_on_first_error() {
        let tokens = tokenize("(+ 1 2))").unwrap();
        assert!(parse(&tokens).is_err());
    }

    #[test]
    fn parse_empty_source_is_empty_program() {
        let tokens = tokenize("").unwrap();
        assert_eq!(parse(&tokens).unwrap(), Vec::new());
    }
}
