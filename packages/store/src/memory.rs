use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert!(store.get("access_token").await.is_none());

        store.set("access_token", "abc123").await;
        assert_eq!(store.get("access_token").await.as_deref(), Some("abc123"));

        store.set("access_token", "def456").await;
        assert_eq!(store.get("access_token").await.as_deref(), Some("def456"));

        store.remove("access_token").await;
        assert!(store.get("access_token").await.is_none());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.remove("user").await;
        store.set("user", "{}").await;
        store.remove("user").await;
        store.remove("user").await;
        assert!(store.get("user").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("user", "{\"id\":1}").await;
        assert_eq!(other.get("user").await.as_deref(), Some("{\"id\":1}"));
    }
}
