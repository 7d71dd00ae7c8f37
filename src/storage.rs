//! File access for config files and host state
//!
//! The engine itself is pure; everything touching the filesystem goes
//! through here. Writes are atomic: the content goes to a sibling temp file
//! which is then renamed over the target, so a failed save never leaves a
//! half-written config behind.

use crate::error::{Error, Result, create_dir, read_file, write_file};
use crate::format::{parse_config, serialize_config};
use crate::store::SettingStore;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Read a whole file as UTF-8 text
///
/// # Errors
///
/// - `Error::FileRead` if the file cannot be read
/// - `Error::InvalidEncoding` if it is not valid UTF-8
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = read_file(path)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    // Use .tmp suffix append to preserve original filename fully
    let file_name = path.file_name().ok_or_else(|| Error::FileWrite {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path must have a filename",
        ),
    })?;
    let mut temp_filename = file_name.to_os_string();
    temp_filename.push(".tmp");
    Ok(path.with_file_name(temp_filename))
}

/// Write `content` to `path` atomically
///
/// Creates the parent directory if needed.
///
/// # Errors
///
/// Returns `Error::DirectoryCreate` or `Error::FileWrite`. On error the
/// target file is left exactly as it was.
pub fn write_atomic(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }

    let temp_path = temp_path_for(path)?;
    if let Err(e) = write_file(&temp_path, content) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    std::fs::rename(&temp_path, path).map_err(|e| {
        if let Err(cleanup) = std::fs::remove_file(&temp_path) {
            warn!("Failed to remove temp file {}: {cleanup}", temp_path.display());
        }
        Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

/// Read and parse a config file
///
/// # Errors
///
/// Same as [`read_text`]. Parsing itself never fails.
pub fn read_config(path: &Path) -> Result<SettingStore> {
    let text = read_text(path)?;
    let store = parse_config(&text);
    debug!("Read {} settings from {}", store.len(), path.display());
    Ok(store)
}

/// Serialize and atomically write a config file
///
/// # Errors
///
/// Same as [`write_atomic`].
pub fn write_config(path: &Path, store: &SettingStore) -> Result<()> {
    write_atomic(path, serialize_config(store))?;
    debug!("Wrote {} settings to {}", store.len(), path.display());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
