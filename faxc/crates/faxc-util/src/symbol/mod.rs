//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, which is a compact (4-byte) handle
//! to an interned string. Symbols enable O(1) string comparison and reduce memory
//! usage when the same identifier appears multiple times while lexing or parsing.
//!
//! # Overview
//!
//! - **Memory efficiency**: Each unique string is stored only once
//! - **Fast comparison**: Symbol comparison is O(1) via index comparison
//! - **Thread safety**: Safe to use across multiple threads concurrently
//! - **Stable handles**: Symbols remain valid for the program lifetime
//!
//! # Thread Safety
//!
//! The symbol interner is fully thread-safe (`Sync + Send`), backed by
//! DashMap. This front-end itself runs single-threaded per `Lexer`/`Parser`
//! invocation, but the interner is a process-global table, so concurrent
//! callers (e.g. batch-processing multiple files on a thread pool) share it
//! safely without extra locking on the caller's part.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use schemec_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);  // Same symbol for same string
//! assert_ne!(s1, s3);  // Different strings get different symbols
//! ```
//!
//! Using known keywords:
//!
//! ```
//! use schemec_util::symbol::{Symbol, KW_LAMBDA, KW_DEFINE};
//!
//! assert_eq!(KW_LAMBDA.as_str(), "lambda");
//! assert_eq!(KW_DEFINE.as_str(), "define");
//! assert!(KW_LAMBDA.is_known());  // Pre-defined reserved keyword
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner for profiling
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of hash collisions encountered
    pub collisions: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values
    pub const fn new(
        count: usize,
        capacity: usize,
        collisions: usize,
        hits: usize,
        misses: usize,
    ) -> Self {
        Self {
            count,
            capacity,
            collisions,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity). 0.0 if capacity is 0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Check if the interner is getting full (load factor > 0.75)
    pub fn is_near_capacity(&self) -> bool {
        self.load_factor() > 0.75
    }

    /// Calculate the hit rate (hits / (hits + misses)). 0.0 if no lookups.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }

    /// Get memory efficiency ratio (unique strings / total operations)
    pub fn memory_efficiency(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f64 / self.total_operations() as f64
        }
    }
}

/// Symbol - An interned string identifier
///
/// A Symbol is a compact (4-byte) handle to a string stored in a global
/// string table. This enables O(1) string comparison and reduces memory
/// usage when the same identifier or keyword appears multiple times.
///
/// # Examples
///
/// ```
/// use schemec_util::symbol::Symbol;
///
/// let keyword = Symbol::intern("lambda");
/// let name = Symbol::intern("main-loop");
///
/// assert_eq!(keyword.as_str(), "lambda");
/// assert_eq!(name.as_str(), "main-loop");
/// assert_eq!(keyword, Symbol::intern("lambda"));  // O(1) comparison
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

// ============================================================================
// KNOWN SYMBOLS (RESERVED KEYWORDS)
// ============================================================================
//
/// Reserved symbol indices for known symbols (reserved keywords)
///
/// All symbols with index < this value are pre-defined at startup and
/// correspond to the language's reserved keywords.
const RESERVED_SYMBOLS_END: u32 = 512;

// ----------------------------------------------------------------------------
// Reserved keywords
// ----------------------------------------------------------------------------

/// Known symbol for the `else` keyword (used in `cond`/`case`)
pub const KW_ELSE: Symbol = Symbol { index: 0 };
/// Known symbol for the `=>` keyword (used in `cond` clauses)
pub const KW_ARROW: Symbol = Symbol { index: 1 };
/// Known symbol for the `define` keyword
pub const KW_DEFINE: Symbol = Symbol { index: 2 };
/// Known symbol for the `unquote` keyword
pub const KW_UNQUOTE: Symbol = Symbol { index: 3 };
/// Known symbol for the `unquote-splicing` keyword
pub const KW_UNQUOTE_SPLICING: Symbol = Symbol { index: 4 };
/// Known symbol for the `quote` keyword
pub const KW_QUOTE: Symbol = Symbol { index: 5 };
/// Known symbol for the `lambda` keyword
pub const KW_LAMBDA: Symbol = Symbol { index: 6 };
/// Known symbol for the `if` keyword
pub const KW_IF: Symbol = Symbol { index: 7 };
/// Known symbol for the `set!` keyword
pub const KW_SET: Symbol = Symbol { index: 8 };
/// Known symbol for the `begin` keyword
pub const KW_BEGIN: Symbol = Symbol { index: 9 };
/// Known symbol for the `cond` keyword
pub const KW_COND: Symbol = Symbol { index: 10 };
/// Known symbol for the `and` keyword
pub const KW_AND: Symbol = Symbol { index: 11 };
/// Known symbol for the `or` keyword
pub const KW_OR: Symbol = Symbol { index: 12 };
/// Known symbol for the `case` keyword
pub const KW_CASE: Symbol = Symbol { index: 13 };
/// Known symbol for the `let` keyword
pub const KW_LET: Symbol = Symbol { index: 14 };
/// Known symbol for the `let*` keyword
pub const KW_LET_STAR: Symbol = Symbol { index: 15 };
/// Known symbol for the `letrec` keyword
pub const KW_LETREC: Symbol = Symbol { index: 16 };
/// Known symbol for the `do` keyword
pub const KW_DO: Symbol = Symbol { index: 17 };
/// Known symbol for the `delay` keyword
pub const KW_DELAY: Symbol = Symbol { index: 18 };
/// Known symbol for the `quasiquote` keyword
pub const KW_QUASIQUOTE: Symbol = Symbol { index: 19 };

impl Symbol {
    /// The maximum index value for a symbol
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Intern a string, returning its symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::symbol::Symbol;
    ///
    /// let keyword = Symbol::intern("lambda");
    /// let name = Symbol::intern("main-loop");
    ///
    /// assert_eq!(Symbol::intern("lambda"), keyword);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(sym.as_str(), "hello");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Check if the symbol's string starts with a given prefix
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Check if the symbol's string ends with a given suffix
    #[inline]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Compare the symbol's string with a `&str` without allocation
    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Returns true if this is a "known" symbol (a reserved keyword)
    ///
    /// Known symbols are interned at startup and have indices in a
    /// reserved range (0 to `RESERVED_SYMBOLS_END`).
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::symbol::{Symbol, KW_LAMBDA};
    ///
    /// assert!(KW_LAMBDA.is_known());
    /// assert!(!Symbol::intern("my-variable").is_known());
    /// ```
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    /// Get the raw index value
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Create a symbol from a raw index
    ///
    /// # Safety
    ///
    /// The index must correspond to a valid entry in the string table.
    #[inline]
    pub unsafe fn from_u32_unchecked(index: u32) -> Self {
        Self { index }
    }

    /// Get statistics about the string interner for profiling
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }

    /// Get basic statistics about the string interner (legacy API)
    ///
    /// Returns a tuple of (number of interned strings, hash map capacity).
    #[inline]
    pub fn stats() -> (usize, usize) {
        let stats = STRING_TABLE.stats();
        (stats.count, stats.capacity)
    }

    /// Intern a reserved keyword, returning its predefined symbol.
    ///
    /// For the 19 reserved keywords of the grammar, this returns the
    /// predefined constant symbol without hashing or allocation. Any
    /// other identifier is interned normally.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemec_util::symbol::{Symbol, KW_LAMBDA};
    ///
    /// let sym = Symbol::intern_known("lambda");
    /// assert_eq!(sym, KW_LAMBDA);
    ///
    /// let ident = Symbol::intern_known("not-a-keyword");
    /// assert!(!ident.is_known());
    /// ```
    #[inline]
    pub fn intern_known(string: &str) -> Self {
        match string {
            "else" => KW_ELSE,
            "=>" => KW_ARROW,
            "define" => KW_DEFINE,
            "unquote" => KW_UNQUOTE,
            "unquote-splicing" => KW_UNQUOTE_SPLICING,
            "quote" => KW_QUOTE,
            "lambda" => KW_LAMBDA,
            "if" => KW_IF,
            "set!" => KW_SET,
            "begin" => KW_BEGIN,
            "cond" => KW_COND,
            "and" => KW_AND,
            "or" => KW_OR,
            "case" => KW_CASE,
            "let" => KW_LET,
            "let*" => KW_LET_STAR,
            "letrec" => KW_LETREC,
            "do" => KW_DO,
            "delay" => KW_DELAY,
            "quasiquote" => KW_QUASIQUOTE,
            _ => Self::intern(string),
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pretty-print a symbol with quotes for debugging
///
/// # Examples
///
/// ```
/// use schemec_util::symbol::{Symbol, SymbolPretty};
///
/// let sym = Symbol::intern("hello");
/// assert_eq!(format!("{}", sym.pretty()), "\"hello\"");
/// ```
pub trait SymbolPretty {
    /// Get a pretty-printed version with quotes
    fn pretty(&self) -> SymbolPrettyDisplay<'_>;
}

impl SymbolPretty for Symbol {
    fn pretty(&self) -> SymbolPrettyDisplay<'_> {
        SymbolPrettyDisplay(self)
    }
}

/// Display wrapper for pretty-printing symbols with quotes
pub struct SymbolPrettyDisplay<'a>(&'a Symbol);

impl std::fmt::Display for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.as_str())
    }
}

impl std::fmt::Debug for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymbolPretty(\"{}\")", self.0.as_str())
    }
}

// Ensure Symbol is thread-safe
static_assertions::assert_impl_all!(Symbol: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_symbol_intern() {
        let s1 = Symbol::intern("hello");
        let s2 = Symbol::intern("hello");
        let s3 = Symbol::intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_eq!(s1.as_str(), "hello");
        assert_eq!(s3.as_str(), "world");
    }

    #[test]
    fn test_symbol_display() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s), "test");
        assert_eq!(format!("{:?}", s), "Symbol(test)");
    }

    #[test]
    fn test_symbol_pretty() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s.pretty()), "\"test\"");
        assert_eq!(format!("{:?}", s.pretty()), "SymbolPretty(\"test\")");
    }

    #[test]
    fn test_symbol_is_empty() {
        assert!(Symbol::intern("").is_empty());
        assert!(!Symbol::intern("a").is_empty());
    }

    #[test]
    fn test_symbol_len() {
        assert_eq!(Symbol::intern("").len(), 0);
        assert_eq!(Symbol::intern("a").len(), 1);
        assert_eq!(Symbol::intern("你好").len(), 6); // UTF-8 bytes
    }

    #[test]
    fn test_symbol_starts_with() {
        let sym = Symbol::intern("hello-world");
        assert!(sym.starts_with("hello"));
        assert!(!sym.starts_with("world"));
    }

    #[test]
    fn test_symbol_ends_with() {
        let sym = Symbol::intern("hello-world");
        assert!(sym.ends_with("world"));
        assert!(!sym.ends_with("hello"));
    }

    #[test]
    fn test_symbol_eq_str() {
        let sym = Symbol::intern("hello");
        assert!(sym.eq_str("hello"));
        assert!(!sym.eq_str("world"));
    }

    #[test]
    fn test_symbol_to_string() {
        let sym = Symbol::intern("hello");
        assert_eq!(sym.to_string(), "hello");
    }

    #[test]
    fn test_symbol_is_known() {
        assert!(KW_LAMBDA.is_known());
        assert!(KW_DEFINE.is_known());
        assert!(KW_QUASIQUOTE.is_known());
        assert!(!Symbol::intern("my-variable").is_known());
    }

    #[test]
    fn test_known_symbols_values() {
        assert_eq!(KW_ELSE.as_str(), "else");
        assert_eq!(KW_ARROW.as_str(), "=>");
        assert_eq!(KW_DEFINE.as_str(), "define");
        assert_eq!(KW_UNQUOTE.as_str(), "unquote");
        assert_eq!(KW_UNQUOTE_SPLICING.as_str(), "unquote-splicing");
        assert_eq!(KW_QUOTE.as_str(), "quote");
        assert_eq!(KW_LAMBDA.as_str(), "lambda");
        assert_eq!(KW_IF.as_str(), "if");
        assert_eq!(KW_SET.as_str(), "set!");
        assert_eq!(KW_BEGIN.as_str(), "begin");
        assert_eq!(KW_COND.as_str(), "cond");
        assert_eq!(KW_AND.as_str(), "and");
        assert_eq!(KW_OR.as_str(), "or");
        assert_eq!(KW_CASE.as_str(), "case");
        assert_eq!(KW_LET.as_str(), "let");
        assert_eq!(KW_LET_STAR.as_str(), "let*");
        assert_eq!(KW_LETREC.as_str(), "letrec");
        assert_eq!(KW_DO.as_str(), "do");
        assert_eq!(KW_DELAY.as_str(), "delay");
        assert_eq!(KW_QUASIQUOTE.as_str(), "quasiquote");
    }

    #[test]
    fn test_intern_known() {
        assert_eq!(Symbol::intern_known("lambda"), KW_LAMBDA);
        assert_eq!(Symbol::intern_known("let*"), KW_LET_STAR);

        let unknown = Symbol::intern_known("not-a-keyword");
        assert_eq!(unknown.as_str(), "not-a-keyword");
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_from_u32_unchecked() {
        let sym = Symbol::intern("test");
        let index = sym.as_u32();
        let sym2 = unsafe { Symbol::from_u32_unchecked(index) };
        assert_eq!(sym, sym2);
    }

    #[test]
    fn test_as_u32() {
        let sym = Symbol::intern("test");
        assert!(sym.as_u32() < Symbol::MAX_INDEX);
    }

    #[test]
    fn test_stats() {
        let (count, capacity) = Symbol::stats();
        assert!(count > 0); // Known symbols are pre-interned
        assert!(capacity >= count);
    }

    #[test]
    fn test_stats_struct() {
        let stats = Symbol::stats_struct();
        assert!(stats.count > 0);
        assert!(stats.capacity >= stats.count);
        assert!(stats.load_factor() >= 0.0);
        assert!(stats.load_factor() <= 1.0);
        assert!(stats.hit_rate() >= 0.0);
        assert!(stats.hit_rate() <= 1.0);
    }

    #[test]
    fn test_interner_stats_methods() {
        let stats = InternerStats::new(100, 200, 5, 80, 20);

        assert_eq!(stats.load_factor(), 0.5);
        assert!(!stats.is_near_capacity());
        assert_eq!(stats.hit_rate(), 0.8);
        assert_eq!(stats.total_operations(), 100);
        assert_eq!(stats.memory_efficiency(), 1.0);

        let stats_full = InternerStats::new(100, 120, 0, 0, 0);
        assert!(stats_full.is_near_capacity());

        let stats_empty = InternerStats::new(0, 0, 0, 0, 0);
        assert_eq!(stats_empty.load_factor(), 0.0);
        assert_eq!(stats_empty.hit_rate(), 0.0);
    }

    #[test]
    fn test_concurrent_intern() {
        let handles: Vec<_> = (0..10)
            .map(|i| thread::spawn(move || Symbol::intern(&format!("thread_{}", i))))
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..results.len() {
            for j in (i + 1)..results.len() {
                assert_ne!(results[i], results[j]);
            }
        }
    }

    #[test]
    fn test_concurrent_same_string() {
        let handles: Vec<_> = (0..10)
            .map(|_| thread::spawn(|| Symbol::intern("concurrent_same")))
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for symbol in &results[1..] {
            assert_eq!(results[0], *symbol);
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Symbol>();
        assert_send_sync::<InternerStats>();
    }

    #[test]
    fn test_empty_string() {
        let s = Symbol::intern("");
        assert_eq!(s.as_str(), "");
        assert!(s.is_empty());
    }

    #[test]
    fn test_unicode_strings() {
        let test_cases = ["你好", "世界", "🦀", "こんにちは", "Привет"];
        for test in &test_cases {
            let sym = Symbol::intern(test);
            assert_eq!(sym.as_str(), *test);
        }
    }

    #[test]
    fn test_long_strings() {
        let long_string = "a".repeat(10000);
        let sym = Symbol::intern(&long_string);
        assert_eq!(sym.as_str(), long_string.as_str());
        assert_eq!(sym.len(), 10000);
    }

    #[test]
    fn test_scheme_identifier_chars() {
        // Scheme peculiar identifiers and symbols with extended punctuation.
        let test_cases = ["...", "+", "-", "list->vector", "string-append", "1+"];
        for test in &test_cases {
            let sym = Symbol::intern(test);
            assert_eq!(sym.as_str(), *test);
        }
    }

    #[test]
    fn test_idempotence() {
        let test_strings = ["hello", "world", "test", "foo", "bar"];
        for s in &test_strings {
            let sym1 = Symbol::intern(s);
            let sym2 = Symbol::intern(s);
            let sym3 = Symbol::intern(&sym1.as_str());
            assert_eq!(sym1, sym2);
            assert_eq!(sym1, sym3);
        }
    }

    #[test]
    fn test_uniqueness() {
        let strings = ["abc", "def", "ghi", "jkl", "mno"];
        for i in 0..strings.len() {
            for j in (i + 1)..strings.len() {
                assert_ne!(Symbol::intern(strings[i]), Symbol::intern(strings[j]));
            }
        }
    }

    #[test]
    fn test_hit_miss_tracking() {
        STRING_TABLE.reset_stats();

        let _ = Symbol::intern("unique_perf_test");
        let stats = Symbol::stats_struct();
        assert!(stats.misses >= 1);

        let _ = Symbol::intern("unique_perf_test");
        let stats = Symbol::stats_struct();
        assert!(stats.hits >= 1);
        assert!(stats.hit_rate() > 0.0);
    }

    #[test]
    fn test_known_symbol_performance() {
        assert!(KW_LAMBDA.index < RESERVED_SYMBOLS_END);
        assert!(KW_DEFINE.index < RESERVED_SYMBOLS_END);

        for _ in 0..1000 {
            let _ = Symbol::intern_known("lambda");
            let _ = Symbol::intern_known("define");
        }
    }
}
