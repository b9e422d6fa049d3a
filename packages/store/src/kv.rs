//! # Key-value persistence seam
//!
//! The browser gives us `window.localStorage`: string keys, string values,
//! synchronous access. [`KeyValueStore`] is that contract in Rust so the session
//! logic can run against [`crate::LocalStore`] in the browser and
//! [`crate::MemoryStore`] in tests and on native targets.

/// Synchronous string key-value storage.
///
/// Implementations swallow backend failures: a read that cannot be served is
/// `None`, a write that cannot be applied is dropped.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}
