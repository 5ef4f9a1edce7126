//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so callers can
//! persist strings without repeating web-sys glue. On the server (and in
//! native tests) storage is absent: reads find nothing and writes report
//! failure.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Returns whether the write went through.
pub fn save_item(key: &str, value: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            log::warn!("localStorage unavailable; not saving {key}");
            return false;
        };
        match storage.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to save {key}: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        false
    }
}

/// Delete whatever is stored under `key`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage()
            && let Err(e) = storage.remove_item(key)
        {
            log::warn!("failed to clear {key}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
