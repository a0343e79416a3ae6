//! Durable key-value storage.
//!
//! The leaderboard only needs `get`/`set` of one JSON string, so the store
//! is a minimal trait with two backends: browser `localStorage` for the real
//! game and an in-memory map for native tests. Storage failures are values,
//! not panics; the session keeps running on its in-memory state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// No window / no localStorage (private browsing, non-browser host).
    Unavailable,
    /// The backend rejected the operation (quota, security).
    Backend(String),
    /// Stored payload exists but does not parse.
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Backend(msg) => write!(f, "storage backend error: {msg}"),
            StorageError::Corrupt(msg) => write!(f, "stored data corrupt: {msg}"),
        }
    }
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// --- Browser backend ---------------------------------------------------------

/// `window.localStorage` backend. Only ever called from the wasm boundary.
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = win
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = win
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

// --- In-memory backend --------------------------------------------------------

/// HashMap-backed store for native tests and host environments without
/// localStorage. `fail_writes` simulates quota exhaustion.
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
    fail_writes: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `set` calls fail, like a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }

    /// Raw snapshot of a stored value, for assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    /// Pre-seed a value, e.g. a legacy payload.
    pub fn seed(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
