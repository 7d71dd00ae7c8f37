//! Error types for videocfg

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for videocfg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for videocfg
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 text")]
    InvalidEncoding { path: PathBuf },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Schema Errors
    // -------------------------------------------------------------------------
    #[error("Setting '{0}' is not declared in the schema")]
    UnknownKey(String),

    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("Setting '{0}' is read-only metadata")]
    ReadOnlySetting(String),

    #[error("Invalid setting value for {key}: {reason}")]
    InvalidSettingValue { key: String, reason: String },

    #[error("Invalid schema entry for {key}: {reason}")]
    InvalidSchema { key: String, reason: String },

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error("No config file loaded")]
    NoFileLoaded,
}

impl Error {
    /// Check if this is a "not found" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::FileRead { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Error::UnknownKey(_) => true,
            _ => false,
        }
    }

    /// Check if this error comes from file access rather than the engine
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. }
                | Error::FileWrite { .. }
                | Error::DirectoryCreate { .. }
                | Error::InvalidEncoding { .. }
        )
    }

    /// Check if this is a programming error against the schema
    ///
    /// These are never worth retrying: the caller asked for a key the schema
    /// does not manage, or passed a value of the wrong shape.
    #[must_use]
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            Error::UnknownKey(_)
                | Error::TypeMismatch { .. }
                | Error::ReadOnlySetting(_)
                | Error::InvalidSettingValue { .. }
                | Error::InvalidSchema { .. }
        )
    }
}

// =============================================================================
// Filesystem Helper Functions
// =============================================================================
// These reduce repetitive map_err patterns in the storage and discovery modules.

use std::path::Path;

/// Create a directory (and parents) with proper error handling
pub fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a whole file as bytes with proper error handling
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write content to a file with proper error handling
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
