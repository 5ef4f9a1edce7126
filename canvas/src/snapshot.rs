//! Saved layouts: both zones plus the work view, as versioned JSON.
//!
//! The host stores the JSON in `localStorage` on "save" and restores it on
//! start-up. Anything that fails to parse, or carries a version this build
//! does not know, is rejected with a [`SnapshotError`] instead of being
//! half-applied.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::{Deserialize, Serialize};

use crate::camera::ViewBox;
use crate::doc::Zone;

/// Layout format written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors decoding a saved layout.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The stored text is not a valid layout document.
    #[error("failed to parse layout snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    /// The layout was written by a newer or unknown format.
    #[error("unsupported layout snapshot version: {0}")]
    UnsupportedVersion(u32),
    /// The stored work view has a zero, negative, or non-finite size.
    #[error("layout snapshot has an unusable work view")]
    InvalidView,
}

/// Everything needed to rebuild the editor's zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Format version; see [`SNAPSHOT_VERSION`].
    pub version: u32,
    /// Buffer zone polygons in draw order.
    pub buffer: Zone,
    /// Work zone polygons in draw order.
    pub work: Zone,
    /// Work zone view box at the time of saving.
    pub work_view: ViewBox,
}

impl LayoutSnapshot {
    /// Build a current-version snapshot.
    #[must_use]
    pub fn new(buffer: Zone, work: Zone, work_view: ViewBox) -> Self {
        Self { version: SNAPSHOT_VERSION, buffer, work, work_view }
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] if serialization fails (non-string map keys
    /// and the like; not expected for this type).
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate JSON written by [`LayoutSnapshot::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a layout document, the version is
    /// unknown, or the work view is unusable.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: LayoutSnapshot = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        if !snapshot.work_view.is_valid() {
            return Err(SnapshotError::InvalidView);
        }
        Ok(snapshot)
    }

    /// Total number of polygons across both zones.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.buffer.len() + self.work.len()
    }
}
