//! The datum reader: turns a token array into S-expression trees.
//!
//! `read_datum` is shared by the program parser (which reads a datum and
//! then classifies it) and by embedders that want a bare S-expression
//! view without the program-level classification (e.g. `prettyprint`).

use schemec_lex::{SpannedToken, Token};
use schemec_util::{DiagnosticCode, Handler};

/// An S-expression: the reader's output, syntax-free except for the
/// abbreviation wrappers.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Terminal(SpannedToken),
    /// May embed a `Terminal` holding the `.` punctuator as its
    /// second-to-last child, expressing an improper list.
    List(Vec<Datum>),
    Vector(Vec<Datum>),
    Quote(Box<Datum>),
    Quasiquote(Box<Datum>),
    Unquote(Box<Datum>),
    UnquoteSplicing(Box<Datum>),
}

fn report(handler: &Handler, tokens: &[SpannedToken], at: usize, message: impl Into<String>, code: DiagnosticCode) {
    let span = tokens
        .get(at)
        .or_else(|| tokens.last())
        .map(|t| t.span)
        .unwrap_or_default();
    handler.build_error(span, message).code(code).emit(handler);
}

/// Reads exactly one datum starting at `tokens[i]`, returning the datum
/// and the index just past it. Reports a diagnostic and returns `None`
/// on malformed input; callers check `handler.has_errors()`.
pub fn read_datum(tokens: &[SpannedToken], i: usize, handler: &Handler) -> Option<(Datum, usize)> {
    let spanned = match tokens.get(i) {
        Some(t) => t,
        None => {
            report(handler, tokens, i, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
            return None;
        }
    };

    match &spanned.token {
        Token::Eof => {
            report(handler, tokens, i, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
            None
        }
        Token::RParen | Token::Dot => {
            report(
                handler,
                tokens,
                i,
                format!("Unexpected token: {}", spanned.token.kind_name()),
                DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN,
            );
            None
        }
        Token::LParen => read_list(tokens, i + 1, handler),
        Token::VecOpen => read_vector(tokens, i + 1, handler),
        Token::Quote => read_abbreviation(tokens, i + 1, handler, Datum::Quote as fn(Box<Datum>) -> Datum),
        Token::Quasiquote => read_abbreviation(tokens, i + 1, handler, Datum::Quasiquote as fn(Box<Datum>) -> Datum),
        Token::Unquote => read_abbreviation(tokens, i + 1, handler, Datum::Unquote as fn(Box<Datum>) -> Datum),
        Token::UnquoteSplicing => {
            read_abbreviation(tokens, i + 1, handler, Datum::UnquoteSplicing as fn(Box<Datum>) -> Datum)
        }
        Token::Boolean(_) | Token::String(_) | Token::Character(_) | Token::Number(_) | Token::Identifier(_) => {
            Some((Datum::Terminal(spanned.clone()), i + 1))
        }
    }
}

fn read_abbreviation(
    tokens: &[SpannedToken],
    i: usize,
    handler: &Handler,
    wrap: fn(Box<Datum>) -> Datum,
) -> Option<(Datum, usize)> {
    let (inner, next) = read_datum(tokens, i, handler)?;
    Some((wrap(Box::new(inner)), next))
}

fn read_list(tokens: &[SpannedToken], mut i: usize, handler: &Handler) -> Option<(Datum, usize)> {
    let mut children = Vec::new();
    loop {
        match tokens.get(i).map(|t| &t.token) {
            Some(Token::RParen) => return Some((Datum::List(children), i + 1)),
            Some(Token::Dot) => {
                if children.is_empty() {
                    report(
                        handler,
                        tokens,
                        i,
                        "Improper list must start with a datum",
                        DiagnosticCode::E_PARSE_IMPROPER_LIST,
                    );
                    return None;
                }
                children.push(Datum::Terminal(tokens[i].clone()));
                let (tail, next) = read_datum(tokens, i + 1, handler)?;
                children.push(tail);
                i = next;
                return match tokens.get(i).map(|t| &t.token) {
                    Some(Token::RParen) => Some((Datum::List(children), i + 1)),
                    _ => {
                        report(
                            handler,
                            tokens,
                            i,
                            "Expected closing parenthesis",
                            DiagnosticCode::E_PARSE_EXPECTED_CLOSING_PAREN,
                        );
                        None
                    }
                };
            }
            Some(Token::Eof) | None => {
                report(handler, tokens, i, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                return None;
            }
            _ => {
                let (datum, next) = read_datum(tokens, i, handler)?;
                children.push(datum);
                i = next;
            }
        }
    }
}

fn read_vector(tokens: &[SpannedToken], mut i: usize, handler: &Handler) -> Option<(Datum, usize)> {
    let mut children = Vec::new();
    loop {
        match tokens.get(i).map(|t| &t.token) {
            Some(Token::RParen) => return Some((Datum::Vector(children), i + 1)),
            Some(Token::Eof) | None => {
                report(handler, tokens, i, "Unexpected end of input", DiagnosticCode::E_PARSE_UNEXPECTED_EOF);
                return None;
            }
            _ => {
                let (datum, next) = read_datum(tokens, i, handler)?;
                children.push(datum);
                i = next;
            }
        }
    }
}
