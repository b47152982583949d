//! `localStorage`-backed store for the web platform.
//!
//! All methods silently swallow storage errors. An unavailable or blocked
//! `localStorage` degrades to "no persisted session" rather than crashing;
//! the authoritative copy of every entity lives on the backend anyway.

use crate::kv::KeyValueStore;

/// KeyValueStore over `window.localStorage`.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
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
