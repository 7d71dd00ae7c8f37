//! Lenient extraction of `"key" "value"` pairs

use crate::store::SettingStore;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// A quoted key, whitespace, a quoted value.
///
/// The dialect has no escapes: a backslash is an ordinary character, so
/// `"C:\Games\"` is a complete value.
static PAIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s+"([^"]*)""#).expect("pair pattern is valid"));

/// Iterate over every `(key, value)` pair in `text`, in textual order
///
/// Pairs never span lines. Anything that is not part of a pair (section
/// headers, braces, comments, garbage) is skipped.
pub fn pairs(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines().flat_map(|line| {
        PAIR_PATTERN.captures_iter(line).filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str();
            Some((key, value))
        })
    })
}

/// Parse config text into an ordered store
///
/// Never fails. A key seen more than once keeps the position of its first
/// occurrence and the value of its last.
///
/// ```rust
/// use videocfg::parse_config;
///
/// let store = parse_config("\"video.cfg\"\n{\n\t\"setting.fullscreen\"\t\t\"1\"\n}");
/// assert_eq!(store.get("setting.fullscreen"), Some("1"));
/// assert_eq!(store.len(), 1);
/// ```
pub fn parse_config(text: &str) -> SettingStore {
    let mut store = SettingStore::new();
    for (key, value) in pairs(text) {
        if let Some(previous) = store.set(key, value) {
            trace!("Duplicate key {key}: '{previous}' replaced by '{value}'");
        }
    }
    store
}
