//! State Persistence
//!
//! The whole `AppState` is stored as one JSON blob under a single key.
//! `StateStorage` abstracts the key-value slot so tests can run without a
//! browser.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Single-slot key-value storage
pub trait StateStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Fails when there is no window or storage is disabled (e.g. some
    /// private-browsing modes)
    pub fn open() -> AppResult<Self> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl StateStorage for LocalStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

/// In-memory storage for tests
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the saved state. `Ok(None)` when nothing was saved yet.
pub fn load_state(storage: &impl StateStorage, key: &str) -> AppResult<Option<AppState>> {
    let Some(json) = storage.get(key)? else {
        return Ok(None);
    };
    let mut state: AppState = serde_json::from_str(&json)?;
    state.normalize()?;
    Ok(Some(state))
}

pub fn save_state(storage: &impl StateStorage, key: &str, state: &AppState) -> AppResult<()> {
    let json = serde_json::to_string(state)?;
    storage.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "todo-app";

    #[test]
    fn test_load_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(load_state(&storage, KEY), Ok(None));
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let mut state = AppState::new();
        state.add_todo("Milk").unwrap();
        state.add_todo("Eggs").unwrap();
        state.toggle_todo(2).unwrap();
        state.hide_completed();
        state.set_filter_word("mi");

        save_state(&storage, KEY, &state).unwrap();
        let loaded = load_state(&storage, KEY).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_malformed_blob() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "{not json").unwrap();
        assert!(matches!(load_state(&storage, KEY), Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_load_repairs_next_id() {
        let storage = MemoryStorage::new();
        storage
            .set(KEY, r#"{"todos":[{"id":9,"text":"Imported","completed":false}],"filteredWord":"","nextId":2}"#)
            .unwrap();
        let loaded = load_state(&storage, KEY).unwrap().unwrap();
        assert_eq!(loaded.next_id, 10);
    }

    #[test]
    fn test_load_rejects_largest_id() {
        let storage = MemoryStorage::new();
        storage
            .set(KEY, r#"{"todos":[{"id":4294967295,"text":"Last","completed":false}],"nextId":1}"#)
            .unwrap();
        assert!(matches!(load_state(&storage, KEY), Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_keys_are_independent() {
        let storage = MemoryStorage::new();
        save_state(&storage, "other", &AppState::new()).unwrap();
        assert_eq!(load_state(&storage, KEY), Ok(None));
    }
}
