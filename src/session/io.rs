use crate::error::{Error, Result};
use crate::session::core::EditorSession;
use crate::storage::{read_config, write_config};

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

impl EditorSession {
    /// Load a config file, replacing the store and the snapshot
    ///
    /// On error the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileRead` or `Error::InvalidEncoding`.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let loaded = read_config(path)?;

        self.snapshot = loaded.clone();
        self.store.replace_all(loaded);
        self.path = Some(path.to_path_buf());
        info!("Loaded {} ({} settings)", path.display(), self.store.len());

        self.remember_path(path);
        Ok(())
    }

    /// Open the file remembered in host state, if it still exists
    ///
    /// Returns `Ok(false)` when there is nothing to open.
    ///
    /// # Errors
    ///
    /// Same as [`EditorSession::open`].
    pub fn open_last(&mut self) -> Result<bool> {
        match self.host_state.last_path() {
            Some(path) if path.is_file() => {
                self.open(&path)?;
                Ok(true)
            }
            Some(path) => {
                debug!("Remembered file {} no longer exists", path.display());
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Re-read the current file from disk, discarding unsaved edits
    ///
    /// # Errors
    ///
    /// Returns `Error::NoFileLoaded` if nothing has been opened yet, or any
    /// error from [`EditorSession::open`].
    pub fn reload(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(Error::NoFileLoaded)?;
        self.open(path)
    }

    /// Write the store back to the current file
    ///
    /// # Errors
    ///
    /// Returns `Error::NoFileLoaded` if no path is set, or a write error.
    pub fn save(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(Error::NoFileLoaded)?;
        self.save_as(path)
    }

    /// Write the store to `path` and make it the current file
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectoryCreate` or `Error::FileWrite`. The target
    /// file and the session are unchanged on error.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        write_config(&path, &self.store)?;

        self.snapshot = self.store.clone();
        info!("Saved {} ({} settings)", path.display(), self.store.len());
        self.remember_path(&path);
        self.path = Some(path);
        Ok(())
    }

    /// Persist host state at shutdown
    pub fn close(&mut self) {
        if self.is_dirty() {
            warn!("Closing session with unsaved changes");
        }
        self.persist_host_state();
    }

    fn remember_path(&mut self, path: &Path) {
        self.host_state.set_last_path(path);
        self.persist_host_state();
    }

    fn persist_host_state(&self) {
        if !self.config.persist_state {
            return;
        }
        let state_path = self.config.state_path();
        if let Err(e) = self.host_state.save(&state_path) {
            warn!("Failed to save host state to {}: {e}", state_path.display());
        }
    }
}
