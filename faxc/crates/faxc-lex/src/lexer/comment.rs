//! Atmosphere skipping: whitespace runs and `;` line comments.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips runs of whitespace and `;`-to-end-of-line comments, leaving
    /// the cursor at the first non-atmosphere character or EOF.
    pub(super) fn skip_atmosphere(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                },
                ';' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                    if !self.cursor.is_at_end() {
                        self.cursor.advance(); // consume the newline
                    }
                },
                _ => return,
            }
        }
    }
}
