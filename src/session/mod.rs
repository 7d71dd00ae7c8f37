//! Editing session: the host-side owner of a setting store
//!
//! - `core` - the `EditorSession` struct and typed access
//! - `io` - open, reload, save
//! - `state` - persisted `{ "last_path": ... }` host state

mod core;
mod io;
mod state;

pub use self::core::EditorSession;
pub use state::HostState;
