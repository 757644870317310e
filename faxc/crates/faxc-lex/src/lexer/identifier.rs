//! Identifier lexing.

use schemec_util::{DiagnosticCode, Symbol};

use crate::chars::is_identifier_continue;
use crate::token::Token;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier. The first character was already classified as
    /// an identifier start by the caller's dispatch. The token's value is
    /// the source text lowercased.
    pub(super) fn lex_identifier(&mut self) -> Token {
        while is_identifier_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        if !crate::chars::is_delimiter(self.cursor.current_char()) {
            self.report_error("Bad identifier observed", DiagnosticCode::E_LEX_BAD_IDENTIFIER);
            return Token::Eof;
        }

        let text = self.cursor.slice_from(self.token_start);
        Token::Identifier(Symbol::intern_known(&text.to_lowercase()))
    }
}
