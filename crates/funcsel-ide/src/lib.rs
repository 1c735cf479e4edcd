//! `funcsel-ide` - Selection expansion and history for JavaScript function
//! scopes.
//!
//! This crate provides the editor-facing core built on `funcsel-syntax`:
//!
//! - **Expansion**: Grow a selection to the enclosing function's signature,
//!   then its declaration, then the next outer function
//! - **History**: Record selections before each expansion and restore them
//!   exactly
//! - **Sessions**: Per-document state so open documents stay independent
//! - **Commands**: The entry points a host editor wires to its keybindings
//!
//! # Architecture
//!
//! Expansion is a pure function over the document text and the current
//! regions; all mutable state (the history stack) lives in
//! [`DocumentSession`], one per open document, owned by the host
//! integration layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod db;
pub mod expand;
pub mod history;
pub mod region;
pub mod session;

pub use commands::{expand_selection_to_function, restore_last_selection, SelectionHost};
pub use db::{Database, FileId, SourceDatabase};
pub use expand::expand_once;
pub use history::SelectionHistory;
pub use region::Region;
pub use session::DocumentSession;
