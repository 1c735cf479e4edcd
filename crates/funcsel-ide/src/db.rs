//! Document storage.
//!
//! The host editor owns the real text buffers; this is the minimal
//! read-only view the core needs: text by file identity. During one command
//! the text is immutable.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A file identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub u32);

/// Input queries supplied by the host.
pub trait SourceDatabase {
    /// Get the source text for a file.
    ///
    /// # Panics
    ///
    /// Panics when the file was never set; passing an unknown `FileId` is a
    /// caller contract violation, not a recoverable condition.
    fn source_text(&self, file_id: FileId) -> Arc<String>;

    /// Set the source text for a file.
    fn set_source_text(&mut self, file_id: FileId, text: String);
}

/// In-memory database, sufficient for hosts without their own buffer store.
#[derive(Debug, Default)]
pub struct Database {
    sources: FxHashMap<FileId, Arc<String>>,
}

impl Database {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SourceDatabase for Database {
    fn source_text(&self, file_id: FileId) -> Arc<String> {
        Arc::clone(&self.sources[&file_id])
    }

    fn set_source_text(&mut self, file_id: FileId, text: String) {
        self.sources.insert(file_id, Arc::new(text));
    }
}
