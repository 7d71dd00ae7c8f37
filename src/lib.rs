//! # videocfg - schema-driven editor for `cs2_video.txt`
//!
//! A library for reading, editing and writing the quoted key/value file that
//! Counter-Strike 2 keeps its video settings in, without losing keys it does
//! not understand.
//!
//! ## Features
//!
//! - **Lossless format**: parse and serialize the `"video.cfg" { ... }` layout,
//!   keeping key order and unknown keys intact
//! - **Schema**: declare each managed key as a toggle, bounded number, choice
//!   or read-only metadata
//! - **Forgiving decode**: bad raw text falls back to a deterministic value
//! - **Strict encode**: values are checked against the declared kind
//! - **Sessions**: open, edit, save, reload and discard with a remembered
//!   last-opened file
//! - **Discovery**: find config files under Steam's `userdata` directories
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use videocfg::{EditorConfig, EditorSession, SettingValue};
//!
//! # fn example() -> videocfg::Result<()> {
//! let mut session = EditorSession::new(EditorConfig::builder("videocfg").build());
//! session.open("cs2_video.txt")?;
//!
//! // Typed access through the built-in video schema
//! let fps = session.get("setting.max_fps")?;
//! println!("FPS limit: {}", fps.display());
//!
//! session.set("setting.max_fps", &SettingValue::Int(240))?;
//! session.set_input("setting.cpu_level", "High")?;
//! session.save()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Schemas
//!
//! ```rust
//! use videocfg::{schema, opt, SchemaEntry, SettingStore, SettingValue, decode};
//!
//! let schema = schema! {
//!     "setting.fullscreen" => SchemaEntry::toggle("Fullscreen"),
//!     "setting.max_fps" => SchemaEntry::number("FPS Limit", 0, 999),
//!     "setting.msaa_samples" => SchemaEntry::select("MSAA", vec![
//!         opt("0", "Off"),
//!         opt("4", "4x"),
//!     ]),
//! }
//! .unwrap();
//!
//! let mut store = SettingStore::new();
//! store.set("setting.max_fps", "5000");
//!
//! // Out-of-range text is clamped on read
//! assert_eq!(
//!     decode(&schema, "setting.max_fps", &store).unwrap(),
//!     SettingValue::Int(999)
//! );
//! ```
//!
//! ## Format Only
//!
//! ```rust
//! use videocfg::{parse_config, serialize_config};
//!
//! let store = parse_config("\"video.cfg\"\n{\n\t\"Version\"\t\t\"15\"\n}");
//! assert_eq!(store.get("Version"), Some("15"));
//! assert_eq!(serialize_config(&store), "\"video.cfg\"\n{\n\t\"Version\"\t\t\"15\"\n}");
//! ```

// Core modules
mod coerce;
mod docs;
mod error;
mod events;
mod format;
mod session;
mod store;
pub mod storage;

// Grouped modules
pub mod config;
pub mod discovery;

// Re-exports from core
pub use coerce::{SettingValue, decode, decode_raw, encode, encode_raw, normalize};
pub use docs::{DocsConfig, generate_docs};
pub use error::{Error, Result};
pub use events::{ChangeCallback, ChangeListeners};
pub use format::{SECTION_HEADER, pairs, parse_config, serialize_config};
pub use session::{EditorSession, HostState};
pub use store::SettingStore;

// Re-exports from config
pub use config::{
    DEFAULT_STATE_FILE, EditorConfig, EditorConfigBuilder, Schema, SchemaEntry, SettingKind,
    SettingOption, opt, video_schema,
};

// Discovery re-exports
pub use discovery::{CandidateFinder, ConfigCandidate, SteamUserdataFinder};
