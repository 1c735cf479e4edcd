//! Per-document session state.
//!
//! History is the only mutable state the core owns, and it is scoped to one
//! document: the host keeps one session per open document rather than a
//! process-wide stack, so documents stay independent of each other.

use crate::db::FileId;
use crate::expand::expand_once;
use crate::history::SelectionHistory;
use crate::region::Region;

/// Expansion and restore state for one open document.
#[derive(Debug)]
pub struct DocumentSession {
    file_id: FileId,
    history: SelectionHistory,
}

impl DocumentSession {
    /// Creates a session for a document.
    #[must_use]
    pub fn new(file_id: FileId) -> Self {
        Self {
            file_id,
            history: SelectionHistory::new(),
        }
    }

    /// The document this session belongs to.
    #[must_use]
    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    /// Runs one expansion step over `regions`, recording the prior
    /// selection when the step changed anything. A no-op expansion is not
    /// recorded, so restore never replays a selection that is already
    /// active.
    pub fn expand(&mut self, source: &str, regions: &[Region]) -> Vec<Region> {
        let next = expand_once(source, regions);
        if next != regions {
            self.history.record(regions);
        }
        next
    }

    /// Pops the most recent selection snapshot. `None` when nothing was
    /// recorded; the host leaves the selection unchanged.
    pub fn restore(&mut self) -> Option<Vec<Region>> {
        self.history.restore()
    }

    /// Tells the session which document is now active. A different identity
    /// invalidates the history; the same identity (edits, cursor movement)
    /// keeps it.
    pub fn document_changed(&mut self, file_id: FileId) {
        if self.file_id != file_id {
            self.file_id = file_id;
            self.history.clear();
        }
    }

    /// Explicitly drops all recorded selections.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Read access to the recorded history.
    #[must_use]
    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }
}
