//! schemec-util - shared infrastructure for the Scheme front-end.
//!
//! This crate provides the foundation types used by both the lexer and the
//! parser: source locations (`span`), diagnostic reporting (`diagnostic`),
//! interned identifiers (`symbol`), and the handful of error types that
//! don't fit naturally into the `Handler`/`Diagnostic` flow (`error`).
//!
//! None of these types know anything about Scheme grammar; they are pure
//! plumbing, shared so that `schemec-lex` and `schemec-par` report errors
//! and track positions the same way.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::{FileId, Span};
pub use symbol::Symbol;

pub use rustc_hash::{FxHashMap, FxHashSet};
