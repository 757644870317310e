//! String and character literal lexing.

use schemec_util::{DiagnosticCode, Symbol};

use crate::chars::is_delimiter;
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal. Only `\"` and `\\` are legal escapes; any
    /// other `\x` is an error. Embedded newlines are preserved in the
    /// source but emitted in the token's value as the two-character escape
    /// `\n`, matching every other embedded newline.
    pub(super) fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // consume opening '"'

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                self.report_error("Unexpected end of input", DiagnosticCode::E_LEX_UNEXPECTED_EOF);
                return Token::Eof;
            }

            let c = self.cursor.current_char();

            if c == '"' {
                self.cursor.advance();
                break;
            }

            if c == '\n' {
                content.push_str("\\n");
                self.cursor.advance();
                continue;
            }

            if c == '\\' {
                self.cursor.advance();
                let escaped = self.cursor.current_char();
                match escaped {
                    '"' | '\\' => {
                        content.push(escaped);
                        self.cursor.advance();
                    },
                    _ => {
                        self.report_error(
                            format!("Unexpected escape sequence: \\{}", escaped),
                            DiagnosticCode::E_LEX_BAD_ESCAPE,
                        );
                        return Token::Eof;
                    },
                }
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        Token::String(Symbol::intern(&content))
    }

    /// Lexes a character literal after `#\` has already been consumed.
    /// Accepts the named forms `#\space` and `#\newline`, else exactly one
    /// character (a literal newline normalizes to `#\newline`).
    pub(super) fn lex_character(&mut self) -> Token {
        if self.cursor.is_at_end() {
            self.report_error("Bad character constant", DiagnosticCode::E_LEX_BAD_CHAR_CONSTANT);
            return Token::Eof;
        }

        if self.cursor.remaining().starts_with("space")
            && is_delimiter(self.cursor.peek_char(5))
        {
            self.cursor.advance_n(5);
            return Token::Character(' ');
        }
        if self.cursor.remaining().starts_with("newline")
            && is_delimiter(self.cursor.peek_char(7))
        {
            self.cursor.advance_n(7);
            return Token::Character('\n');
        }

        let c = self.cursor.current_char();
        self.cursor.advance();
        let value = if c == '\n' { '\n' } else { c };

        if !is_delimiter(self.cursor.current_char()) {
            self.report_error("Bad character constant", DiagnosticCode::E_LEX_BAD_CHAR_CONSTANT);
            return Token::Eof;
        }

        Token::Character(value)
    }
}
