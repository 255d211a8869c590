//! Theme persistence in `localStorage`.
//!
//! Storage is best-effort: private browsing or disabled storage just means
//! the preference does not survive the session.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::debug!("localStorage unavailable: {err:?}");
            None
        }
    }
}

/// Read the value stored under `key`.
pub fn load(key: &str) -> Option<String> {
    match local_storage()?.get_item(key) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("reading {key:?} failed: {err:?}");
            None
        }
    }
}

/// Write `value` under `key`.
pub fn save(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(key, value) {
        log::debug!("writing {key:?} failed: {err:?}");
    }
}
