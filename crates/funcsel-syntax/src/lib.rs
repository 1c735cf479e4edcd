//! `funcsel-syntax` - Lexer and function boundary detection for JavaScript
//! source text.
//!
//! This crate provides the low-level syntactic analysis selection expansion
//! is built on:
//!
//! - **Lexer**: Tokenizes source text into a stream of tokens
//! - **Context classification**: Labels every offset as code, string,
//!   comment, or regex literal
//! - **Brace matching**: Finds the innermost enclosing `{`/`}` pair,
//!   counting only code-context braces
//! - **Function boundaries**: Decides whether a brace pair is a function
//!   body and computes its signature and declaration spans
//!
//! # Design Principles
//!
//! There is deliberately no parser. The tool has to work on source that is
//! mid-edit and frequently malformed, so everything is derived from a
//! single error-tolerant lexing pass: unterminated strings, comments, and
//! regex literals extend to the end of the input instead of failing, and
//! every query degrades to "not found" rather than raising an error.
//!
//! # Example
//!
//! ```
//! use funcsel_syntax::context::{classify, ContextLabel};
//!
//! let source = r#"var s = "{"; // note"#;
//! let map = classify(source);
//!
//! // The brace at offset 9 is inside the string literal, so it never
//! // participates in brace matching.
//! assert_eq!(map.label_at(9.into()), ContextLabel::String);
//! assert_eq!(map.label_at(0.into()), ContextLabel::Code);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod boundary;
pub mod braces;
pub mod context;
pub mod lexer;

pub use boundary::{locate, FunctionBoundary};
pub use braces::{enclosing_pair, match_enclosing, BracePair};
pub use context::{classify, ContextLabel, ContextMap, ContextSpan};
pub use lexer::{lex, lex_with_text, Lexer, Token, TokenKind};
