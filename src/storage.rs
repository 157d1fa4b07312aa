//! Flat key→string preference store backed by localStorage.
//!
//! Storage can be absent or blocked (private browsing, sandboxed
//! frames); every failure is absorbed and the feature simply does not
//! persist.

pub fn get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(value) = storage.get_item(key) {
            return value;
        }
    }
    None
}

pub fn set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
