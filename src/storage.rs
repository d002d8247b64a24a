//! Key-Value Storage
//!
//! String-keyed persistence used by the gallery controller.
//! In the browser this is `window.localStorage`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No window or no localStorage (private mode, non-browser target)
    Unavailable,
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Backend(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string store the controller persists through
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
///
/// Looked up on every call so the handle never has to be held across
/// signal updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::raw()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::raw()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::{KeyValueStore, StorageResult};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store for tests
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
