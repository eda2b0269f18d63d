use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

/// Key-value store that outlives the page session.
pub trait PreferenceStorage {
    /// Missing keys and unreadable storage both read as `None`.
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                return Some(storage);
            }
        }
        None
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to persist {}={}: {:?}", key, value, e);
                }
            }
            None => log::warn!("Local storage unavailable, {} not persisted", key),
        }
    }
}

/// In-memory storage. Clones share the same map, so a clone handed to a
/// second store behaves like the same browser profile in a new session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
