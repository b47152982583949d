use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and non-web fallback.
///
/// Clones share the underlying map, so a vault and the code under test can
/// observe each other's writes.
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

        assert!(store.get("auth_token").await.is_none());

        store.set("auth_token", "abc").await;
        assert_eq!(store.get("auth_token").await.as_deref(), Some("abc"));

        store.set("auth_token", "def").await;
        assert_eq!(store.get("auth_token").await.as_deref(), Some("def"));

        store.remove("auth_token").await;
        assert!(store.get("auth_token").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("auth_user", "{}").await;
        assert_eq!(other.get("auth_user").await.as_deref(), Some("{}"));

        other.remove("auth_user").await;
        assert!(store.get("auth_user").await.is_none());
    }
}
