//! Schema registry types
//!
//! # Overview
//!
//! A [`Schema`] is an ordered table of setting keys, each declaring exactly one
//! [`SettingKind`]:
//!
//! - **Boolean**: stored as `"1"` / `"0"`
//! - **BoundedInt**: decimal integer with `min`, `max` and an advisory `step`
//! - **Enum**: one of a fixed list of raw values, each with a display label
//! - **Metadata**: opaque text written by the game itself, never edited here
//!
//! Declaration order is kept so front ends can lay settings out in the same
//! order they were declared.
//!
//! ```rust
//! use videocfg::{schema, opt, SchemaEntry};
//!
//! let schema = schema! {
//!     "setting.fullscreen" => SchemaEntry::toggle("Fullscreen"),
//!     "setting.max_fps" => SchemaEntry::number("FPS Limit", 0, 999)
//!         .description("0 = unlimited"),
//!     "setting.cpu_level" => SchemaEntry::select("CPU Detail Level", vec![
//!         opt("0", "Low"),
//!         opt("1", "High"),
//!     ]),
//!     "Version" => SchemaEntry::info("Version"),
//! }
//! .unwrap();
//!
//! assert_eq!(schema.len(), 4);
//! assert!(schema.lookup("setting.fullscreen").is_some());
//! assert!(schema.lookup("setting.unknown").is_none());
//! ```

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Setting Kinds
// =============================================================================

/// Declared interpretation of a setting's raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettingKind {
    /// `"1"` is on, anything else is off
    Boolean,
    /// Integer clamped into `[min, max]` on read
    BoundedInt { min: i64, max: i64, step: i64 },
    /// One of a fixed set of raw values, first option is the fallback
    Enum { options: Vec<SettingOption> },
    /// Preserved verbatim, never written by the engine
    Metadata,
}

impl SettingKind {
    /// Short human-readable name of the kind, used in error messages
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SettingKind::Boolean => "boolean",
            SettingKind::BoundedInt { .. } => "integer",
            SettingKind::Enum { .. } => "enum",
            SettingKind::Metadata => "metadata",
        }
    }
}

// =============================================================================
// Setting Option
// =============================================================================

/// Option for Enum settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingOption {
    /// Raw value written to the file
    pub value: String,
    /// Display label
    pub label: String,
}

impl SettingOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Shorthand for creating a `SettingOption`
///
/// # Example
/// ```rust
/// use videocfg::opt;
/// let options = vec![opt("0", "Low"), opt("1", "High")];
/// assert_eq!(options[1].label, "High");
/// ```
pub fn opt(value: impl Into<String>, label: impl Into<String>) -> SettingOption {
    SettingOption::new(value, label)
}

// =============================================================================
// Schema Entry
// =============================================================================

/// Declaration of a single managed setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// How the raw value is interpreted
    #[serde(flatten)]
    pub kind: SettingKind,

    /// Display label
    pub label: String,

    /// Optional help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaEntry {
    // =========================================================================
    // Kind-specific constructors
    // =========================================================================

    /// Create a boolean toggle
    pub fn toggle(label: impl Into<String>) -> Self {
        Self::with_kind(label, SettingKind::Boolean)
    }

    /// Create a bounded integer with a step of 1
    pub fn number(label: impl Into<String>, min: i64, max: i64) -> Self {
        Self::with_kind(label, SettingKind::BoundedInt { min, max, step: 1 })
    }

    /// Create an enumerated setting
    ///
    /// **Options are required**; the first one is the fallback for unknown values.
    pub fn select(label: impl Into<String>, options: Vec<SettingOption>) -> Self {
        Self::with_kind(label, SettingKind::Enum { options })
    }

    /// Create a read-only metadata entry
    pub fn info(label: impl Into<String>) -> Self {
        Self::with_kind(label, SettingKind::Metadata)
    }

    fn with_kind(label: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            kind,
            label: label.into(),
            description: None,
        }
    }

    // =========================================================================
    // Builder setters
    // =========================================================================

    /// Set the UI increment for a bounded integer. Ignored for other kinds.
    #[must_use]
    pub fn step(mut self, val: i64) -> Self {
        if let SettingKind::BoundedInt { ref mut step, .. } = self.kind {
            *step = val;
        }
        self
    }

    /// Set help text
    #[must_use]
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Check if this entry is read-only metadata
    pub fn is_metadata(&self) -> bool {
        matches!(self.kind, SettingKind::Metadata)
    }

    /// Declared options, empty for non-enum kinds
    pub fn options(&self) -> &[SettingOption] {
        match &self.kind {
            SettingKind::Enum { options } => options,
            _ => &[],
        }
    }

    /// Display label of an enum option by raw value
    pub fn option_label(&self, raw: &str) -> Option<&str> {
        self.options()
            .iter()
            .find(|o| o.value == raw)
            .map(|o| o.label.as_str())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate the declaration itself
    ///
    /// Checks:
    /// - Integer range has min <= max
    /// - Step is positive
    /// - Enum has at least one option
    /// - Enum raw values are unique
    pub fn validate(&self) -> std::result::Result<(), String> {
        match &self.kind {
            SettingKind::BoundedInt { min, max, step } => {
                if min > max {
                    return Err(format!("min ({min}) cannot be greater than max ({max})"));
                }
                if *step <= 0 {
                    return Err(format!("step must be positive, got {step}"));
                }
            }
            SettingKind::Enum { options } => {
                if options.is_empty() {
                    return Err("Enum type must have options defined".to_string());
                }
                let mut seen = HashSet::new();
                for option in options {
                    if !seen.insert(option.value.as_str()) {
                        return Err(format!("duplicate option value '{}'", option.value));
                    }
                }
            }
            SettingKind::Boolean | SettingKind::Metadata => {}
        }
        Ok(())
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Ordered, read-only table of managed settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: IndexMap<String, SchemaEntry>,
}

impl Schema {
    /// Build a schema from `(key, entry)` pairs, validating every entry
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSchema` for a duplicate key or an entry that
    /// fails [`SchemaEntry::validate`].
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, SchemaEntry)>,
        K: Into<String>,
    {
        let mut map = IndexMap::new();
        for (key, entry) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(Error::InvalidSchema {
                    key,
                    reason: "declared more than once".into(),
                });
            }
            map.insert(key, entry);
        }

        let schema = Self { entries: map };
        schema.validate()?;
        Ok(schema)
    }

    /// Look up the declaration for a key. `None` means the key is unmanaged.
    pub fn lookup(&self, key: &str) -> Option<&SchemaEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display label of an enum option, if `key` is an enum declaring `raw`
    pub fn option_label(&self, key: &str, raw: &str) -> Option<&str> {
        self.lookup(key).and_then(|entry| entry.option_label(raw))
    }

    /// Validate every entry
    ///
    /// # Errors
    ///
    /// Returns the first `Error::InvalidSchema` found.
    pub fn validate(&self) -> Result<()> {
        for (key, entry) in &self.entries {
            entry.validate().map_err(|reason| Error::InvalidSchema {
                key: key.clone(),
                reason,
            })?;
        }
        Ok(())
    }
}

/// Macro for building a [`Schema`] more cleanly
///
/// Expands to `Schema::from_entries(...)` and therefore returns a `Result`.
///
/// # Example
/// ```rust
/// use videocfg::{schema, SchemaEntry};
///
/// let schema = schema! {
///     "setting.high_dpi" => SchemaEntry::toggle("High DPI"),
/// }
/// .unwrap();
/// assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["setting.high_dpi"]);
/// ```
#[macro_export]
macro_rules! schema {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let entries: Vec<(String, $crate::SchemaEntry)> = vec![
            $(($key.to_string(), $value),)*
        ];
        $crate::Schema::from_entries(entries)
    }};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_entry_builder() {
        let entry = SchemaEntry::number("Resolution Width", 320, 7680)
            .step(8)
            .description("Horizontal pixels");

        assert_eq!(
            entry.kind,
            SettingKind::BoundedInt {
                min: 320,
                max: 7680,
                step: 8
            }
        );
        assert_eq!(entry.label, "Resolution Width");
        assert_eq!(entry.description.as_deref(), Some("Horizontal pixels"));
    }

    #[test]
    fn test_step_ignored_for_other_kinds() {
        let entry = SchemaEntry::toggle("V-Sync").step(5);
        assert_eq!(entry.kind, SettingKind::Boolean);
    }

    #[test]
    fn test_select_option_label() {
        let entry = SchemaEntry::select(
            "MSAA Samples",
            vec![opt("0", "Off"), opt("2", "2x"), opt("4", "4x")],
        );

        assert_eq!(entry.option_label("2"), Some("2x"));
        assert_eq!(entry.option_label("3"), None);
        assert_eq!(entry.options().len(), 3);
    }

    #[test]
    fn test_entry_validation() {
        assert!(SchemaEntry::number("ok", 0, 10).validate().is_ok());
        assert!(SchemaEntry::number("equal", 5, 5).validate().is_ok());

        let inverted = SchemaEntry::number("bad", 10, 0).validate();
        assert_eq!(
            inverted.unwrap_err(),
            "min (10) cannot be greater than max (0)"
        );

        assert!(SchemaEntry::number("zero step", 0, 10).step(0).validate().is_err());
        assert!(SchemaEntry::select("empty", vec![]).validate().is_err());
        assert!(
            SchemaEntry::select("dupe", vec![opt("1", "A"), opt("1", "B")])
                .validate()
                .is_err()
        );

        // Duplicate labels are fine, only raw values must be unique
        assert!(
            SchemaEntry::select("labels", vec![opt("-1", "Quality"), opt("2", "Quality")])
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = schema! {
            "b" => SchemaEntry::toggle("B"),
            "a" => SchemaEntry::info("A"),
            "c" => SchemaEntry::number("C", 0, 1),
        }
        .unwrap();

        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert!(schema.lookup("a").unwrap().is_metadata());
    }

    #[test]
    fn test_schema_rejects_duplicate_keys() {
        let result = Schema::from_entries(vec![
            ("x", SchemaEntry::toggle("X")),
            ("x", SchemaEntry::info("X again")),
        ]);

        assert!(matches!(result, Err(Error::InvalidSchema { key, .. }) if key == "x"));
    }

    #[test]
    fn test_schema_rejects_invalid_entry() {
        let result = schema! {
            "setting.bad" => SchemaEntry::number("Bad", 9, 1),
        };

        assert!(matches!(result, Err(Error::InvalidSchema { key, .. }) if key == "setting.bad"));
    }

    #[test]
    fn test_serialization() {
        let entry = SchemaEntry::select("CPU", vec![opt("0", "Low")]);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["kind"], "enum");
        assert_eq!(json["options"][0]["label"], "Low");

        let back: SchemaEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
