//! Library facade over the Scheme front-end, for embedders and for the
//! `schemec` CLI binary.
//!
//! This crate adds no analysis of its own: it re-exposes `tokenize` and
//! `parse` from the phase crates, plus two rendering helpers
//! (`dump_tokens`, `prettyprint`) and the CLI's config/error types.

pub mod config;
pub mod error;

pub use config::{Config, OutputFormat};
pub use error::{DrvError, Result};
pub use schemec_lex::{tokenize, LexError, SpannedToken, Token};
pub use schemec_par::{parse, prettyprint, read_one_datum, Ast, Datum, ParseError};

/// Renders a token stream in the `(kind value)` token-dump format, one
/// token per line.
pub fn dump_tokens(tokens: &[SpannedToken]) -> String {
    let mut out = String::new();
    for spanned in tokens {
        out.push('(');
        out.push_str(spanned.token.kind_name());
        if spanned.token != Token::Eof {
            out.push(' ');
            write_token_value(&spanned.token, &mut out);
        }
        out.push(')');
        out.push('\n');
    }
    out
}

fn write_token_value(token: &Token, out: &mut String) {
    match token {
        Token::String(s) => {
            out.push('"');
            out.push_str(s.as_str());
            out.push('"');
        }
        Token::Boolean(b) => out.push_str(if *b { "#t" } else { "#f" }),
        Token::Number(n) => out.push_str(&format!("{n}")),
        Token::Character(c) => {
            out.push_str("#\\");
            out.push_str(char_name(*c).as_deref().unwrap_or(&c.to_string()));
        }
        Token::Identifier(sym) => out.push_str(sym.as_str()),
        Token::Eof => {}
        other => {
            out.push('"');
            out.push_str(other.punctuator_text().unwrap_or(""));
            out.push('"');
        }
    }
}

fn char_name(c: char) -> Option<String> {
    match c {
        ' ' => Some("space".to_string()),
        '\n' => Some("newline".to_string()),
        _ => None,
    }
}
