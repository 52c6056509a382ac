//! Browser `localStorage` backend used on the web platform.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable `localStorage`
//! degrades to "no persisted session" rather than crashing the app; the
//! authoritative session state always comes from the server.

use crate::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
