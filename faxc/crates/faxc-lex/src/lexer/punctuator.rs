//! `#`-dispatch, dot disambiguation, and sign disambiguation.

use schemec_util::{DiagnosticCode, Symbol};

use crate::chars::is_delimiter;
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a token starting with `#`: `#(`, `#t`, `#f`, or `#\` character
    /// literals.
    pub(super) fn lex_hash(&mut self) -> Token {
        self.cursor.advance(); // consume '#'
        match self.cursor.current_char() {
            '(' => {
                self.cursor.advance();
                Token::VecOpen
            },
            't' => {
                self.cursor.advance();
                Token::Boolean(true)
            },
            'f' => {
                self.cursor.advance();
                Token::Boolean(false)
            },
            '\\' => {
                self.cursor.advance();
                self.lex_character()
            },
            c => {
                self.report_error(
                    format!("Unexpected character after #: {}", c),
                    DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
                );
                Token::Eof
            },
        }
    }

    /// Lexes a token starting with `.`: the punctuator, a leading-decimal
    /// number, or the peculiar identifier `...`.
    pub(super) fn lex_dot(&mut self) -> Token {
        if is_delimiter(self.cursor.peek_char(1)) {
            self.cursor.advance();
            return Token::Dot;
        }
        if self.cursor.peek_char(1).is_ascii_digit() {
            return self.lex_number();
        }

        let start = self.cursor.position();
        while !is_delimiter(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        if text == "..." {
            Token::Identifier(Symbol::intern_known("..."))
        } else {
            self.report_error("Bad identifier observed", DiagnosticCode::E_LEX_BAD_IDENTIFIER);
            Token::Eof
        }
    }

    /// Lexes a token starting with `+` or `-`: a signed number, or the
    /// peculiar identifiers `+`/`-`.
    pub(super) fn lex_sign(&mut self) -> Token {
        let next = self.cursor.peek_char(1);
        if next.is_ascii_digit() || next == '.' {
            return self.lex_number();
        }
        if is_delimiter(next) {
            let sign = self.cursor.current_char();
            self.cursor.advance();
            return Token::Identifier(Symbol::intern_known(&sign.to_string()));
        }
        self.report_error(
            format!("Unexpected character: {}", self.cursor.current_char()),
            DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
        );
        self.cursor.advance();
        Token::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemec_util::Handler;

    fn lex_one(source: &str) -> (Token, Handler) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let spanned = lexer.next_token();
        (spanned.token, handler)
    }

    #[test]
    fn hash_vector_open() {
        let (token, handler) = lex_one("#(1 2)");
        assert_eq!(token, Token::VecOpen);
        assert!(!handler.has_errors());
    }

    #[test]
    fn hash_booleans() {
        assert_eq!(lex_one("#t").0, Token::Boolean(true));
        assert_eq!(lex_one("#f").0, Token::Boolean(false));
    }

    #[test]
    fn hash_unknown_errors() {
        let (_, handler) = lex_one("#q");
        assert!(handler.has_errors());
    }

    #[test]
    fn dot_alone_is_punctuator() {
        assert_eq!(lex_one(".").0, Token::Dot);
        assert_eq!(lex_one(". x").0, Token::Dot);
    }

    #[test]
    fn dot_number() {
        assert_eq!(lex_one(".5").0, Token::Number(0.5));
    }

    #[test]
    fn dot_dot_dot_is_identifier() {
        assert_eq!(lex_one("...").0, Token::Identifier(Symbol::intern("...")));
    }

    #[test]
    fn dot_bad_run_errors() {
        let (_, handler) = lex_one("..x");
        assert!(handler.has_errors());
    }

    #[test]
    fn sign_peculiar_identifiers() {
        assert_eq!(lex_one("+ ").0, Token::Identifier(Symbol::intern("+")));
        assert_eq!(lex_one("-)").0, Token::Identifier(Symbol::intern("-")));
    }

    #[test]
    fn sign_number() {
        assert_eq!(lex_one("-5").0, Token::Number(-5.0));
        assert_eq!(lex_one("+.5").0, Token::Number(0.5));
    }

    #[test]
    fn sign_bad_run_errors() {
        let (_, handler) = lex_one("+!x");
        assert!(handler.has_errors());
    }
}
