//! Core lexer implementation: the `Lexer` struct and its main dispatch.

use schemec_util::{DiagnosticCode, Handler, Span};

use crate::chars::is_identifier_start;
use crate::cursor::Cursor;
use crate::token::{SpannedToken, Token};

/// Lexer for the Scheme front-end.
///
/// Transforms source text into a stream of tokens one at a time via
/// [`Lexer::next_token`], or as an iterator. Errors are reported to the
/// attached [`Handler`] rather than returned directly; [`crate::tokenize`]
/// is the fail-fast entry point most callers want.
pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) handler: &'a Handler,

    /// Starting byte position of the token currently being lexed.
    pub(super) token_start: usize,
    /// Line of `token_start` (zero-based).
    pub(super) token_start_line: u32,
    /// Column of `token_start` (zero-based).
    pub(super) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 0,
            token_start_column: 0,
        }
    }

    /// Returns the next token from the source code, paired with its span.
    ///
    /// Skips atmosphere first, then dispatches on the first character per
    /// the lexer's dispatch table. Returns `Token::Eof` at end of input or
    /// after an error has been reported — callers should check
    /// `self.handler.has_errors()` rather than trust the returned token in
    /// that case.
    pub fn next_token(&mut self) -> SpannedToken {
        self.skip_atmosphere();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let token = if self.cursor.is_at_end() {
            Token::Eof
        } else {
            match self.cursor.current_char() {
                '(' => {
                    self.cursor.advance();
                    Token::LParen
                },
                ')' => {
                    self.cursor.advance();
                    Token::RParen
                },
                '\'' => {
                    self.cursor.advance();
                    Token::Quote
                },
                '`' => {
                    self.cursor.advance();
                    Token::Quasiquote
                },
                ',' => {
                    self.cursor.advance();
                    if self.cursor.match_char('@') {
                        Token::UnquoteSplicing
                    } else {
                        Token::Unquote
                    }
                },
                '#' => self.lex_hash(),
                '"' => self.lex_string(),
                '.' => self.lex_dot(),
                '+' | '-' => self.lex_sign(),
                c if c.is_ascii_digit() => self.lex_number(),
                c if is_identifier_start(c) => self.lex_identifier(),
                c => {
                    self.report_error(
                        format!("Unexpected character: {}", c),
                        DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
                    );
                    self.cursor.advance();
                    Token::Eof
                },
            }
        };

        SpannedToken {
            token,
            span: self.token_span(),
        }
    }

    /// The span from `token_start` to the cursor's current position.
    pub(super) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Reports a lexical error at the current token's span.
    pub(super) fn report_error(&self, message: impl Into<String>, code: DiagnosticCode) {
        self.handler
            .build_error(self.token_span(), message)
            .code(code)
            .emit(self.handler);
    }

    /// Returns the current line number (zero-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (zero-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        let spanned = self.next_token();
        if spanned.token == Token::Eof {
            None
        } else {
            Some(spanned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemec_util::Symbol;

    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let mut tokens = Vec::new();
        loop {
            let spanned = lexer.next_token();
            if spanned.token == Token::Eof {
                break;
            }
            tokens.push(spanned.token);
        }
        (tokens, handler)
    }

    #[test]
    fn empty_source_is_eof_only() {
        let (tokens, handler) = lex_all("");
        assert!(tokens.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn parens_and_quote_forms() {
        let (tokens, _) = lex_all("('a `b ,c ,@d)");
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Quote,
                Token::Identifier(Symbol::intern("a")),
                Token::Quasiquote,
                Token::Identifier(Symbol::intern("b")),
                Token::Unquote,
                Token::Identifier(Symbol::intern("c")),
                Token::UnquoteSplicing,
                Token::Identifier(Symbol::intern("d")),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn vector_open() {
        let (tokens, _) = lex_all("#(1 2 3)");
        assert_eq!(tokens[0], Token::VecOpen);
    }

    #[test]
    fn line_comment_is_atmosphere() {
        let (tokens, _) = lex_all("; a comment\n(+ 1 2)");
        assert_eq!(tokens[0], Token::LParen);
    }

    #[test]
    fn unknown_character_reports_error() {
        let (_, handler) = lex_all("(+ 1 2 ] 3)");
        assert!(handler.has_errors());
    }

    #[test]
    fn positions_are_zero_based() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("  x", &handler);
        let spanned = lexer.next_token();
        assert_eq!(spanned.span.line, 0);
        assert_eq!(spanned.span.column, 2);
        assert_eq!(spanned.span.start, 2);
        assert_eq!(spanned.span.end, 3);
    }
}
