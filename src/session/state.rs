//! Persisted host state
//!
//! A tiny JSON document remembering the last config file the user worked
//! on. It is a convenience cache only: a missing or corrupt file yields the
//! default state and never blocks the editor.

use crate::error::Result;
use crate::storage::{read_text, write_atomic};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host state stored as `{ "last_path": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    /// Most recently opened or saved config file, empty if none
    #[serde(default)]
    pub last_path: String,
}

impl HostState {
    /// Load state from `path`, falling back to the default on any problem
    pub fn load(path: &Path) -> Self {
        let content = match read_text(path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                debug!("No host state at {}", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Ignoring unreadable host state: {e}");
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!("Ignoring corrupt host state {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write state to `path` as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the atomic write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, json)
    }

    /// The remembered path, if one is set
    pub fn last_path(&self) -> Option<PathBuf> {
        if self.last_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.last_path))
        }
    }

    pub fn set_last_path(&mut self, path: &Path) {
        self.last_path = path.to_string_lossy().into_owned();
    }
}
