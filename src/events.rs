//! Change notifications for settings edits
//!
//! Front ends register callbacks here to re-render after a setting's raw
//! value changes. Callbacks receive `(key, old_raw, new_raw)` where `old_raw`
//! is `None` if the key was not in the store before.

use std::collections::HashMap;

/// Type alias for a change callback
pub type ChangeCallback = Box<dyn Fn(&str, Option<&str>, &str)>;

/// Registry of change listeners owned by one editing session
#[derive(Default)]
pub struct ChangeListeners {
    /// Global listeners (called for all changes)
    global: Vec<ChangeCallback>,

    /// Per-key listeners (called only for specific setting changes)
    by_key: HashMap<String, Vec<ChangeCallback>>,
}

impl std::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("global", &self.global.len())
            .field("by_key", &self.by_key.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ChangeListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global change listener (called for all settings changes)
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: Fn(&str, Option<&str>, &str) + 'static,
    {
        self.global.push(Box::new(callback));
    }

    /// Register a listener for a specific setting key
    pub fn watch<F>(&mut self, key: &str, callback: F)
    where
        F: Fn(&str, Option<&str>, &str) + 'static,
    {
        self.by_key
            .entry(key.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Notify listeners of a change
    ///
    /// Does nothing if the value did not actually change.
    pub fn notify(&self, key: &str, old: Option<&str>, new: &str) {
        if old == Some(new) {
            return;
        }
        for callback in &self.global {
            callback(key, old, new);
        }
        if let Some(listeners) = self.by_key.get(key) {
            for callback in listeners {
                callback(key, old, new);
            }
        }
    }

    /// Remove all listeners
    pub fn clear(&mut self) {
        self.global.clear();
        self.by_key.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.by_key.is_empty()
    }
}
