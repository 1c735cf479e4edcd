//! Host-facing command entry points.
//!
//! The host supplies the current selection through [`SelectionHost`] and a
//! document text through the database; each command reads the active
//! regions, runs the core, and concludes by setting the new regions. No
//! command reports an error: when there is nothing to do the selection is
//! simply left alone.

use tracing::debug;

use crate::db::SourceDatabase;
use crate::region::Region;
use crate::session::DocumentSession;

/// Selection accessors the host editor provides.
pub trait SelectionHost {
    /// The currently active selection regions, in document order.
    fn active_regions(&self) -> Vec<Region>;

    /// Replaces the active selection.
    fn set_active_regions(&mut self, regions: Vec<Region>);
}

/// Expands every active region to the enclosing function construct.
pub fn expand_selection_to_function(
    db: &dyn SourceDatabase,
    session: &mut DocumentSession,
    host: &mut dyn SelectionHost,
) {
    let regions = host.active_regions();
    if regions.is_empty() {
        return;
    }
    let source = db.source_text(session.file_id());
    debug!(file_id = ?session.file_id(), regions = regions.len(), "expand selection");
    let next = session.expand(source.as_str(), &regions);
    host.set_active_regions(next);
}

/// Restores the selection active before the last recorded expansion.
pub fn restore_last_selection(session: &mut DocumentSession, host: &mut dyn SelectionHost) {
    if let Some(regions) = session.restore() {
        debug!(file_id = ?session.file_id(), regions = regions.len(), "restore selection");
        host.set_active_regions(regions);
    }
}
