//! Ordered key/value store holding raw setting text
//!
//! The store is the single source of truth for an editing session. It knows
//! nothing about the schema: unknown keys, metadata keys and managed keys all
//! live here as plain strings, in the order they were first seen.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from setting key to raw value
///
/// Iteration order is the serialization order. Equality compares keys,
/// values *and* order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingStore {
    entries: IndexMap<String, String>,
}

impl SettingStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or update a raw value
    ///
    /// A new key is appended at the end; an existing key keeps its position.
    /// Returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Replace the whole content and order with `other`
    pub fn replace_all(&mut self, other: SettingStore) {
        self.entries = other.entries;
    }

    /// Keys in serialization order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for SettingStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.iter().eq(other.iter())
    }
}

impl Eq for SettingStore {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SettingStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for SettingStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
