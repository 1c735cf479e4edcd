//! Selection regions.
//!
//! A region is the anchor/active offset pair the host editor works in: the
//! anchor is where the selection started, the active end is where the caret
//! is. Expansion grows the covered range but keeps the direction, and
//! history restoration reproduces both endpoints exactly.

use text_size::{TextRange, TextSize};

/// A selection span over document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    anchor: TextSize,
    active: TextSize,
}

impl Region {
    /// Creates a region from its anchor and active offsets.
    #[must_use]
    pub fn new(anchor: TextSize, active: TextSize) -> Self {
        Self { anchor, active }
    }

    /// Creates an empty region (a caret) at `offset`.
    #[must_use]
    pub fn cursor(offset: TextSize) -> Self {
        Self::new(offset, offset)
    }

    /// Creates a forward region covering `range`.
    #[must_use]
    pub fn from_range(range: TextRange) -> Self {
        Self::new(range.start(), range.end())
    }

    /// The fixed end of the selection.
    #[must_use]
    pub fn anchor(&self) -> TextSize {
        self.anchor
    }

    /// The caret end of the selection.
    #[must_use]
    pub fn active(&self) -> TextSize {
        self.active
    }

    /// The smaller endpoint.
    #[must_use]
    pub fn start(&self) -> TextSize {
        self.anchor.min(self.active)
    }

    /// The larger endpoint.
    #[must_use]
    pub fn end(&self) -> TextSize {
        self.anchor.max(self.active)
    }

    /// The covered range, ignoring direction.
    #[must_use]
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start(), self.end())
    }

    /// Returns `true` for a caret with no extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Returns `true` when the active end precedes the anchor.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// Returns a region covering `range`, keeping this region's direction.
    #[must_use]
    pub fn with_range(&self, range: TextRange) -> Self {
        if self.is_reversed() {
            Self::new(range.end(), range.start())
        } else {
            Self::new(range.start(), range.end())
        }
    }

    /// Returns `true` when this region covers all of `other`.
    #[must_use]
    pub fn contains(&self, other: &Region) -> bool {
        self.range().contains_range(other.range())
    }
}
