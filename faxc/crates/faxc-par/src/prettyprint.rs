//! Renders a [`Datum`] back to source text.
//!
//! Used both as an external interface (dumping the reader's output for
//! inspection) and by the round-trip property tests: reading the
//! pretty-printed form of a datum must reproduce an equal datum.

use schemec_lex::Token;

use crate::datum::Datum;

pub fn prettyprint(datum: &Datum) -> String {
    let mut out = String::new();
    write_datum(datum, &mut out);
    out
}

fn write_datum(datum: &Datum, out: &mut String) {
    match datum {
        Datum::Terminal(spanned) => write_token(&spanned.token, out),
        Datum::List(children) => {
            out.push('(');
            write_joined(children, out);
            out.push(')');
        }
        Datum::Vector(children) => {
            out.push_str("#(");
            write_joined(children, out);
            out.push(')');
        }
        Datum::Quote(inner) => write_wrapped("quote", inner, out),
        Datum::Quasiquote(inner) => write_wrapped("quasiquote", inner, out),
        Datum::Unquote(inner) => write_wrapped("unquote", inner, out),
        Datum::UnquoteSplicing(inner) => write_wrapped("unquote-splicing", inner, out),
    }
}

fn write_wrapped(keyword: &str, inner: &Datum, out: &mut String) {
    out.push('(');
    out.push_str(keyword);
    out.push(' ');
    write_datum(inner, out);
    out.push(')');
}

fn write_joined(children: &[Datum], out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_datum(child, out);
    }
}

fn write_token(token: &Token, out: &mut String) {
    match token {
        Token::Boolean(b) => out.push_str(if *b { "#t" } else { "#f" }),
        Token::Number(n) => out.push_str(&format!("{n}")),
        Token::String(s) => {
            out.push('"');
            for c in s.as_str().chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    _ => out.push(c),
                }
            }
            out.push('"');
        }
        Token::Character(c) => {
            out.push_str("#\\");
            out.push_str(char_name(*c).as_deref().unwrap_or(&c.to_string()));
        }
        Token::Identifier(sym) => out.push_str(sym.as_str()),
        Token::Dot => out.push('.'),
        other => out.push_str(other.punctuator_text().unwrap_or("")),
    }
}

fn char_name(c: char) -> Option<String> {
    match c {
        ' ' => Some("space".to_string()),
        '\n' => Some("newline".to_string()),
        _ => None,
    }
}
