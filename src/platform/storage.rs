//! Key-value persistence seam
//!
//! The high score is the only persisted scalar besides tuning. It is kept
//! under the bare key `"highScore"` as a decimal string, the format the
//! browser version of this game has always used.

use std::collections::HashMap;

/// Minimal integer key-value store
pub trait ScoreStore {
    /// Read a value; `None` when the key is absent or unreadable
    fn get(&self, key: &str) -> Option<u32>;
    /// Write a value durably before returning
    fn set(&mut self, key: &str, value: u32);
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn get(&self, key: &str) -> Option<u32> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u32) {
        (**self).set(key, value);
    }
}

/// In-memory store for tests and the native demo
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, u32>,
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.map.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.map.insert(key.to_string(), value);
    }
}

/// Browser LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        Self {
            storage: web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorage {
    fn get(&self, key: &str) -> Option<u32> {
        let raw = self.storage.as_ref()?.get_item(key).ok()??;
        raw.trim().parse().ok()
    }

    fn set(&mut self, key: &str, value: u32) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set_item(key, &value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("highScore"), None);
        store.set("highScore", 12);
        assert_eq!(store.get("highScore"), Some(12));
        store.set("highScore", 15);
        assert_eq!(store.get("highScore"), Some(15));
    }
}
