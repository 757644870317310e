//! Number literal lexing.
//!
//! Grammar: `sign? (digits ('.' digits?)? | '.' digits)`. Dispatch already
//! consumed the leading sign, if any, only far enough to decide this is a
//! number (see `Lexer::lex_sign` and `Lexer::lex_dot`), so this method
//! starts at the sign or digit itself.

use schemec_util::DiagnosticCode;

use crate::chars::is_delimiter;
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at the current position (which may
    /// be a leading `+`/`-` sign, a digit, or `.`).
    pub(super) fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();

        if self.cursor.current_char() == '+' || self.cursor.current_char() == '-' {
            self.cursor.advance();
        }

        let mut saw_digit = false;

        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
                saw_digit = true;
            }
        } else {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
                saw_digit = true;
            }
            if self.cursor.current_char() == '.' {
                self.cursor.advance();
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        if !saw_digit || !is_delimiter(self.cursor.current_char()) {
            self.report_error("Bad number observed", DiagnosticCode::E_LEX_BAD_NUMBER);
            return Token::Eof;
        }

        let text = self.cursor.slice_from(start);
        match text.parse::<f64>() {
            Ok(value) => Token::Number(value),
            Err(_) => {
                self.report_error("Bad number observed", DiagnosticCode::E_LEX_BAD_NUMBER);
                Token::Eof
            },
        }
    }
}
