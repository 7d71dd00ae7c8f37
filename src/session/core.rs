use crate::coerce::{SettingValue, decode, encode, normalize};
use crate::config::{EditorConfig, Schema};
use crate::error::{Error, Result};
use crate::events::ChangeListeners;
use crate::session::state::HostState;
use crate::store::SettingStore;

use log::{debug, info};
use std::path::{Path, PathBuf};

/// One editing session over a single config file
///
/// Owns the working store, the last-read snapshot and the file path. All
/// typed access goes through the session's schema.
///
/// The session is single-owner: mutations take `&mut self`. A front end
/// that needs shared access wraps it in its own lock.
///
/// # Example
///
/// ```no_run
/// use videocfg::{EditorConfig, EditorSession, SettingValue};
///
/// let mut session = EditorSession::new(EditorConfig::builder("videocfg").build());
/// session.open("cs2_video.txt")?;
/// session.set("setting.max_fps", &SettingValue::Int(240))?;
/// session.save()?;
/// # Ok::<(), videocfg::Error>(())
/// ```
#[derive(Debug)]
pub struct EditorSession {
    pub(crate) config: EditorConfig,

    /// Working copy edited by the front end
    pub(crate) store: SettingStore,

    /// Content as last read from or written to disk
    pub(crate) snapshot: SettingStore,

    /// File the store belongs to
    pub(crate) path: Option<PathBuf>,

    pub(crate) host_state: HostState,

    pub(crate) listeners: ChangeListeners,
}

impl EditorSession {
    /// Create a session, loading host state if enabled
    pub fn new(config: EditorConfig) -> Self {
        let host_state = if config.persist_state {
            HostState::load(&config.state_path())
        } else {
            HostState::default()
        };

        debug!(
            "Session created with {} schema keys, last path '{}'",
            config.schema.len(),
            host_state.last_path
        );

        Self {
            config,
            store: SettingStore::new(),
            snapshot: SettingStore::new(),
            path: None,
            host_state,
            listeners: ChangeListeners::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn schema(&self) -> &Schema {
        &self.config.schema
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The working store
    pub fn store(&self) -> &SettingStore {
        &self.store
    }

    /// Path of the currently loaded file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn host_state(&self) -> &HostState {
        &self.host_state
    }

    /// Keys present in the store that the schema does not manage
    pub fn unmanaged_keys(&self) -> impl Iterator<Item = &str> {
        self.store
            .keys()
            .filter(|key| !self.config.schema.contains(key))
    }

    /// Whether the working store differs from the last-read snapshot
    pub fn is_dirty(&self) -> bool {
        self.store != self.snapshot
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    /// Decode a managed setting
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownKey` if the schema does not declare `key`.
    pub fn get(&self, key: &str) -> Result<SettingValue> {
        decode(&self.config.schema, key, &self.store)
    }

    /// Encode a managed setting into the working store
    ///
    /// Listeners are notified if the raw value changed.
    ///
    /// # Errors
    ///
    /// Any schema violation from [`encode`]; the store is untouched on error.
    pub fn set(&mut self, key: &str, value: &SettingValue) -> Result<()> {
        let old = encode(&self.config.schema, key, value, &mut self.store)?;
        if let Some(new) = self.store.get(key) {
            self.listeners.notify(key, old.as_deref(), new);
        }
        Ok(())
    }

    /// Parse user text according to the key's kind and store it
    ///
    /// Returns the value that was stored.
    ///
    /// # Errors
    ///
    /// `Error::UnknownKey` for unmanaged keys, otherwise any error from
    /// [`SettingValue::parse_input`] or [`EditorSession::set`].
    pub fn set_input(&mut self, key: &str, input: &str) -> Result<SettingValue> {
        let entry = self
            .config
            .schema
            .lookup(key)
            .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
        let value = SettingValue::parse_input(key, entry, input)?;
        self.set(key, &value)?;
        Ok(value)
    }

    /// Write every editable managed setting back in its decoded form
    ///
    /// Returns the keys whose raw value changed.
    pub fn normalize(&mut self) -> Vec<String> {
        let before = self.store.clone();
        let changed = normalize(&self.config.schema, &mut self.store);
        for key in &changed {
            if let Some(new) = self.store.get(key) {
                self.listeners.notify(key, before.get(key), new);
            }
        }
        changed
    }

    /// Throw away unsaved edits, restoring the last-read snapshot
    pub fn discard_changes(&mut self) {
        if self.is_dirty() {
            info!("Discarding unsaved changes");
        }
        self.store.replace_all(self.snapshot.clone());
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register a listener for every raw value change made through `set`
    ///
    /// Wholesale replacements (open, reload, discard) do not fire listeners;
    /// re-read the store after those.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: Fn(&str, Option<&str>, &str) + 'static,
    {
        self.listeners.on_change(callback);
    }

    /// Register a listener for a single key
    pub fn watch<F>(&mut self, key: &str, callback: F)
    where
        F: Fn(&str, Option<&str>, &str) + 'static,
    {
        self.listeners.watch(key, callback);
    }
}
