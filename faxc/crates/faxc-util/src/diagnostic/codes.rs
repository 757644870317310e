//! Diagnostic codes for categorizing lexer and parser errors.
//!
//! # Examples
//!
//! ```
//! use schemec_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message, `{prefix}{number:04}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // -- Lexer errors (E1xxx) --------------------------------------------

    /// Unexpected character that starts no valid token.
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// Unterminated string literal.
    pub const E_LEX_UNEXPECTED_EOF: Self = Self::new("E", 1002);
    /// Malformed numeric literal.
    pub const E_LEX_BAD_NUMBER: Self = Self::new("E", 1003);
    /// Malformed character constant (`#\...`).
    pub const E_LEX_BAD_CHAR_CONSTANT: Self = Self::new("E", 1004);
    /// Malformed identifier (e.g. a bare `+`/`-`/`.` that is not a peculiar
    /// identifier, number, or punctuator).
    pub const E_LEX_BAD_IDENTIFIER: Self = Self::new("E", 1005);
    /// Unrecognized escape sequence inside a string literal.
    pub const E_LEX_BAD_ESCAPE: Self = Self::new("E", 1006);

    // -- Parser errors (E2xxx) --------------------------------------------

    /// A specific token was expected and not found.
    pub const E_PARSE_EXPECTING_TOKEN: Self = Self::new("E", 2001);
    /// A closing `)` was expected and not found.
    pub const E_PARSE_EXPECTED_CLOSING_PAREN: Self = Self::new("E", 2002);
    /// A token appeared where no datum can start.
    pub const E_PARSE_UNEXPECTED_TOKEN: Self = Self::new("E", 2003);
    /// The token stream ended mid-form.
    pub const E_PARSE_UNEXPECTED_EOF: Self = Self::new("E", 2004);
    /// An improper list's `.` was malformed (no datum before/after it).
    pub const E_PARSE_IMPROPER_LIST: Self = Self::new("E", 2005);
    /// A `cond` had neither clauses nor an `else`.
    pub const E_PARSE_NO_COND_CLAUSE: Self = Self::new("E", 2006);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
