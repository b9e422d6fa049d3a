//! # `localStorage` store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! resolves `window.localStorage` on every call through [`web_sys`]; the
//! handle is cheap to fetch and not `Send`, so nothing is cached.
//!
//! ## Error handling
//!
//! Storage can be missing (privacy mode, sandboxed iframes) or full. Every
//! failure degrades to "nothing stored": reads return `None`, writes and
//! removals are dropped. The session layer treats that as signed-out.

use crate::kv::KeyValueStore;
use web_sys::Storage;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
