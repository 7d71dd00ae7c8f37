//! Schema registry and host configuration
//!
//! This module contains the foundational declaration types:
//! - `Schema` / `SchemaEntry` / `SettingKind` - the registry of managed keys
//! - `video_schema` - the built-in `cs2_video.txt` registry
//! - `EditorConfig` - configuration for an editing session

mod schema;
mod types;
mod video;

pub use schema::{Schema, SchemaEntry, SettingKind, SettingOption, opt};

pub use types::{DEFAULT_STATE_FILE, EditorConfig, EditorConfigBuilder};
pub use video::video_schema;
