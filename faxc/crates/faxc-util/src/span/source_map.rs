//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source
//! files and computing line/column information from byte offsets. Lines and
//! columns are zero-based, matching [`Span`].

use std::sync::Arc;

use super::{FileId, Span};

/// A source file with its content and metadata.
///
/// # Examples
///
/// ```
/// use schemec_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.scm", "(define x 1)");
/// assert_eq!(file.name(), "main.scm");
/// assert_eq!(file.content(), "(define x 1)");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file.
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = Vec::new();
        line_starts.push(0);

        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (zero-based line number).
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.scm", "line1\nline2\nline3");
    /// assert_eq!(file.line_start(0), Some(0));
    /// assert_eq!(file.line_start(1), Some(6));
    /// assert_eq!(file.line_start(10), None);
    /// ```
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to zero-based `(line, column)` coordinates.
    /// Column is measured in bytes from the start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.scm", "(hello)");
    /// let (line, col) = file.offset_to_line_col(1);
    /// assert_eq!(line, 0);
    /// assert_eq!(col, 1);
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line, 0),
            Err(insert_point) => {
                let line = insert_point - 1;
                let line_start = self.line_starts.get(line).copied().unwrap_or(0);
                (line, offset - line_start)
            }
        }
    }

    /// Get the source line containing a byte offset.
    pub fn line_at_offset(&self, offset: usize) -> Option<&str> {
        let (line, _) = self.offset_to_line_col(offset);
        self.line_at(line)
    }

    /// Get a specific source line (zero-based).
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.scm", "line1\nline2\nline3");
    /// assert_eq!(file.line_at(0), Some("line1"));
    /// assert_eq!(file.line_at(1), Some("line2"));
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).unwrap_or(self.content.len());

        let line_content = &self.content[start..end];
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or not on character boundaries.
    pub fn extract(&self, range: std::ops::Range<usize>) -> &str {
        &self.content[range]
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files.
///
/// # Examples
///
/// ```
/// use schemec_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("main.scm", "(define x 1)");
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "main.scm");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file, returning its [`FileId`].
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Render a span as a human-readable snippet with a `^` underline,
    /// for use by CLI-layer callers (library callers get `(line, column)`
    /// directly off `Span` and format it themselves).
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let line_num = span.line as usize;
        let col = span.column as usize;

        let line = file.line_at(line_num)?;
        let line_num_width = file.line_count().to_string().len().max(3);

        let mut result = String::new();
        result.push_str(&format!("--> {}:{}:{}\n", file.name(), line_num, col));
        result.push_str(&format!(
            "{:>width$} | {}\n",
            line_num,
            line,
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_len = if span.start == span.end {
            1
        } else {
            (span.end - span.start).max(1)
        };

        for _ in 0..col {
            result.push(' ');
        }
        for _ in 0..underline_len {
            result.push('^');
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_file_basics() {
        let file = SourceFile::new(0, "test.scm", "(define x 1)");
        assert_eq!(file.id().0, 0);
        assert_eq!(file.name(), "test.scm");
        assert_eq!(file.content(), "(define x 1)");
    }

    #[test]
    fn line_starts_and_count() {
        let file = SourceFile::new(0, "test.scm", "line1\nline2\nline3");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.line_start(1), Some(6));
        assert_eq!(file.line_start(2), Some(12));
        assert_eq!(file.line_start(3), None);
    }

    #[test]
    fn offset_to_line_col_is_zero_based() {
        let file = SourceFile::new(0, "test.scm", "(hello)");
        assert_eq!(file.offset_to_line_col(0), (0, 0));
        assert_eq!(file.offset_to_line_col(3), (0, 3));
    }

    #[test]
    fn line_at_and_line_at_offset() {
        let file = SourceFile::new(0, "test.scm", "line1\nline2\nline3");
        assert_eq!(file.line_at(0), Some("line1"));
        assert_eq!(file.line_at(2), Some("line3"));
        assert_eq!(file.line_at(3), None);
        assert_eq!(file.line_at_offset(7), Some("line2"));
    }

    #[test]
    fn extract_substring() {
        let file = SourceFile::new(0, "test.scm", "(define x 1)");
        assert_eq!(file.extract(0..7), "(define");
    }

    #[test]
    fn source_map_add_and_get() {
        let mut map = SourceMap::new();
        let file_id = map.add_file("main.scm", "(+ 1 2)");
        assert_eq!(file_id.0, 0);
        let file = map.get(file_id).unwrap();
        assert_eq!(file.name(), "main.scm");
        assert!(map.get(FileId(1)).is_none());
    }

    #[test]
    fn source_map_file_count() {
        let mut map = SourceMap::new();
        assert_eq!(map.file_count(), 0);
        map.add_file("a.scm", "");
        map.add_file("b.scm", "");
        assert_eq!(map.file_count(), 2);
    }

    #[test]
    fn format_span_contains_context() {
        let mut map = SourceMap::new();
        let file_id = map.add_file("main.scm", "(define x 1)");
        let span = Span::with_file(0, 7, file_id, 0, 0);
        let formatted = map.format_span(span).unwrap();
        assert!(formatted.contains("main.scm"));
        assert!(formatted.contains("(define x 1)"));
    }

    #[test]
    fn empty_file_has_one_line() {
        let file = SourceFile::new(0, "empty.scm", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.offset_to_line_col(0), (0, 0));
    }
}
