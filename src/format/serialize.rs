//! Rendering a store back to the on-disk dialect

use crate::store::SettingStore;
use std::fmt::Write;

/// Section header written before the opening brace
pub const SECTION_HEADER: &str = "\"video.cfg\"";

/// Render `store` in the exact format the game reads
///
/// ```text
/// "video.cfg"
/// {
/// <TAB>"key"<TAB><TAB>"value"
/// }
/// ```
///
/// Lines are joined with `\n` and there is no newline after the closing brace.
///
/// ```rust
/// use videocfg::{serialize_config, SettingStore};
///
/// let mut store = SettingStore::new();
/// store.set("setting.fullscreen", "1");
/// assert_eq!(
///     serialize_config(&store),
///     "\"video.cfg\"\n{\n\t\"setting.fullscreen\"\t\t\"1\"\n}"
/// );
/// ```
#[must_use]
pub fn serialize_config(store: &SettingStore) -> String {
    let mut out = String::with_capacity(16 + store.len() * 48);
    out.push_str(SECTION_HEADER);
    out.push_str("\n{\n");
    for (key, value) in store.iter() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "\t\"{key}\"\t\t\"{value}\"");
    }
    out.push('}');
    out
}
