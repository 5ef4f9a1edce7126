//! Saved layout slot in `localStorage`.
//!
//! One layout is kept per browser profile. Anything unreadable is logged and
//! treated as "nothing saved" so a bad entry never blocks start-up.

#[cfg(test)]
#[path = "layout_store_test.rs"]
mod layout_store_test;

use canvas::snapshot::LayoutSnapshot;

use crate::util::ui_persistence::{load_item, remove_item, save_item};

/// Storage key for the saved layout.
pub const LAYOUT_KEY: &str = "polyzone.layout";

/// Write `snapshot` to storage. Returns whether it was stored.
pub fn save(snapshot: &LayoutSnapshot) -> bool {
    match snapshot.to_json() {
        Ok(raw) => save_item(LAYOUT_KEY, &raw),
        Err(e) => {
            log::warn!("failed to encode layout: {e}");
            false
        }
    }
}

/// Read the saved layout, if there is a usable one.
pub fn load() -> Option<LayoutSnapshot> {
    decode(&load_item(LAYOUT_KEY)?)
}

/// Forget the saved layout.
pub fn clear() {
    remove_item(LAYOUT_KEY);
}

/// Parse a stored layout, logging and discarding anything invalid.
pub fn decode(raw: &str) -> Option<LayoutSnapshot> {
    match LayoutSnapshot::from_json(raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::warn!("ignoring saved layout: {e}");
            None
        }
    }
}
