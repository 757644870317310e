//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Level, Span};

/// A source code snippet for display in diagnostics.
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet without highlighting (point span).
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet as a source line with a `^` underline.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_len = (self.end_column - self.start_column).max(1);
        for _ in 0..self.start_column {
            result.push(' ');
        }
        for _ in 0..underline_len {
            result.push('^');
        }

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {label}"));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API.
///
/// # Examples
///
/// ```
/// use schemec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
///
/// let diag = DiagnosticBuilder::error("unexpected character '&'")
///     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
///     .span(Span::point(0, 4))
///     .build();
/// assert_eq!(diag.message, "unexpected character '&'");
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::diagnostic::{DiagnosticBuilder, Handler, Span};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("bad number observed")
    ///     .span(Span::DUMMY)
    ///     .emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_formatting() {
        let snippet = SourceSnippet::new("(+ 1 2", 0, 6, 7, Some("expected closing paren"));
        let formatted = snippet.format();
        assert!(formatted.contains("(+ 1 2"));
        assert!(formatted.contains('^'));
        assert!(formatted.contains("expected closing paren"));
    }

    #[test]
    fn point_snippet_single_caret() {
        let snippet = SourceSnippet::point("abc", 0, 1);
        assert_eq!(snippet.start_column, snippet.end_column);
    }

    #[test]
    fn builder_build_preserves_fields() {
        let diag = DiagnosticBuilder::error("unterminated string")
            .code(DiagnosticCode::E_LEX_UNEXPECTED_EOF)
            .span(Span::new(0, 5, 0, 0))
            .note("strings must be closed with '\"'")
            .help("add a closing quote")
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "unterminated string");
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_UNEXPECTED_EOF));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps.len(), 1);
    }

    #[test]
    fn builder_emit_reaches_handler() {
        let handler = super::super::Handler::new();
        DiagnosticBuilder::warning("shadowed keyword").span(Span::DUMMY).emit(&handler);
        assert_eq!(handler.warning_count(), 1);
    }
}
