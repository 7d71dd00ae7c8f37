//! Typed decode/encode of raw setting text
//!
//! Reading is forgiving: bad or legacy data falls back to a deterministic
//! value instead of failing. Writing trusts the caller's value but checks its
//! shape against the declared kind.
//!
//! | Kind       | Decode                                   | Encode               |
//! |------------|------------------------------------------|----------------------|
//! | Boolean    | `"1"` is true, anything else false       | `"1"` / `"0"`        |
//! | BoundedInt | parse, fallback `min`, clamp to range    | decimal, no clamping |
//! | Enum       | exact raw match, fallback first option   | option raw value     |
//! | Metadata   | raw text or absent                       | rejected             |

use crate::config::{Schema, SchemaEntry, SettingKind, SettingOption};
use crate::error::{Error, Result};
use crate::store::SettingStore;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

// =============================================================================
// Setting Value
// =============================================================================

/// Typed view of a setting, derived from raw text and its schema entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    /// Selected option. Only `value` matters when encoding.
    Enum(SettingOption),
    /// Opaque text, `None` when the key is absent from the store
    Metadata(Option<String>),
}

impl SettingValue {
    /// Enum selection by raw value, for encoding
    pub fn choice(raw: impl Into<String>) -> Self {
        SettingValue::Enum(SettingOption::new(raw, ""))
    }

    /// Name of the kind this value belongs to, matching [`SettingKind::name`]
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "boolean",
            SettingValue::Int(_) => "integer",
            SettingValue::Enum(_) => "enum",
            SettingValue::Metadata(_) => "metadata",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<&SettingOption> {
        match self {
            SettingValue::Enum(option) => Some(option),
            _ => None,
        }
    }

    /// Text for display: enum label, metadata text or `-` when absent
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            SettingValue::Bool(b) => b.to_string(),
            SettingValue::Int(n) => n.to_string(),
            SettingValue::Enum(option) => option.label.clone(),
            SettingValue::Metadata(text) => text.clone().unwrap_or_else(|| "-".to_string()),
        }
    }

    /// Parse user input into a value of the kind `entry` declares
    ///
    /// Booleans accept `1/0`, `true/false`, `on/off` and `yes/no`. Enums
    /// accept a raw value or, failing that, a case-insensitive label.
    ///
    /// # Errors
    ///
    /// - `Error::ReadOnlySetting` for metadata entries
    /// - `Error::InvalidSettingValue` if the text does not fit the kind
    pub fn parse_input(key: &str, entry: &SchemaEntry, input: &str) -> Result<Self> {
        let text = input.trim();
        let invalid = |reason: String| Error::InvalidSettingValue {
            key: key.to_string(),
            reason,
        };

        match &entry.kind {
            SettingKind::Boolean => match text.to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "0" | "false" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(invalid(format!("'{text}' is not a boolean"))),
            },
            SettingKind::BoundedInt { .. } => text
                .parse::<i64>()
                .map(SettingValue::Int)
                .map_err(|e| invalid(format!("'{text}' is not an integer: {e}"))),
            SettingKind::Enum { options } => options
                .iter()
                .find(|o| o.value == text)
                .or_else(|| options.iter().find(|o| o.label.eq_ignore_ascii_case(text)))
                .cloned()
                .map(SettingValue::Enum)
                .ok_or_else(|| {
                    let allowed: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                    invalid(format!(
                        "'{text}' is not one of: {}",
                        allowed.join(", ")
                    ))
                }),
            SettingKind::Metadata => Err(Error::ReadOnlySetting(key.to_string())),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<SettingOption> for SettingValue {
    fn from(value: SettingOption) -> Self {
        SettingValue::Enum(value)
    }
}

// =============================================================================
// Per-kind conversion
// =============================================================================

/// Parse an integer, saturating on overflow instead of failing
fn parse_saturating(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Decode a raw value (or its absence) under `entry`'s kind
///
/// Total: every input produces a value.
#[must_use]
pub fn decode_raw(entry: &SchemaEntry, raw: Option<&str>) -> SettingValue {
    match &entry.kind {
        SettingKind::Boolean => SettingValue::Bool(raw == Some("1")),
        SettingKind::BoundedInt { min, max, .. } => {
            let parsed = raw.and_then(parse_saturating).unwrap_or(*min);
            // max/min instead of clamp: never panics on an inverted range
            SettingValue::Int(parsed.max(*min).min(*max))
        }
        SettingKind::Enum { options } => {
            let selected = raw
                .and_then(|r| options.iter().find(|o| o.value == r))
                .or_else(|| options.first());
            match selected {
                Some(option) => SettingValue::Enum(option.clone()),
                // Only reachable with an unvalidated, option-less schema
                None => SettingValue::Enum(SettingOption::new(raw.unwrap_or_default(), "")),
            }
        }
        SettingKind::Metadata => SettingValue::Metadata(raw.map(str::to_string)),
    }
}

/// Render `value` as raw text under `entry`'s kind
///
/// # Errors
///
/// - `Error::TypeMismatch` if the value variant does not match the kind
/// - `Error::InvalidSettingValue` for an enum value that is not declared
/// - `Error::ReadOnlySetting` for metadata entries
pub fn encode_raw(key: &str, entry: &SchemaEntry, value: &SettingValue) -> Result<String> {
    let mismatch = || Error::TypeMismatch {
        key: key.to_string(),
        expected: entry.kind.name().to_string(),
        actual: value.kind_name().to_string(),
    };

    match (&entry.kind, value) {
        (SettingKind::Metadata, _) => Err(Error::ReadOnlySetting(key.to_string())),
        (SettingKind::Boolean, SettingValue::Bool(b)) => {
            Ok(if *b { "1" } else { "0" }.to_string())
        }
        (SettingKind::BoundedInt { .. }, SettingValue::Int(n)) => Ok(n.to_string()),
        (SettingKind::Enum { options }, SettingValue::Enum(selected)) => {
            if options.iter().any(|o| o.value == selected.value) {
                Ok(selected.value.clone())
            } else {
                Err(Error::InvalidSettingValue {
                    key: key.to_string(),
                    reason: format!("'{}' is not a declared option", selected.value),
                })
            }
        }
        _ => Err(mismatch()),
    }
}

// =============================================================================
// Store-level operations
// =============================================================================

/// Decode `key` from `store` using its schema entry
///
/// # Errors
///
/// Returns `Error::UnknownKey` if `key` has no schema entry.
pub fn decode(schema: &Schema, key: &str, store: &SettingStore) -> Result<SettingValue> {
    let entry = schema
        .lookup(key)
        .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
    Ok(decode_raw(entry, store.get(key)))
}

/// Encode `value` for `key` into `store`
///
/// Returns the previous raw value, if any. The store is untouched on error.
///
/// # Errors
///
/// - `Error::UnknownKey` if `key` has no schema entry
/// - any error from [`encode_raw`]
pub fn encode(
    schema: &Schema,
    key: &str,
    value: &SettingValue,
    store: &mut SettingStore,
) -> Result<Option<String>> {
    let entry = schema
        .lookup(key)
        .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
    let raw = encode_raw(key, entry, value)?;
    debug!("Encoded {key} = '{raw}'");
    Ok(store.set(key, raw))
}

/// Re-encode every editable managed key from its decoded value
///
/// Out-of-range integers become clamped, unknown enum values become the
/// first option, and managed keys missing from the store are appended in
/// schema order with their fallback value. Metadata and unmanaged keys are
/// left alone. Returns the keys whose raw value changed.
pub fn normalize(schema: &Schema, store: &mut SettingStore) -> Vec<String> {
    let mut changed = Vec::new();
    for (key, entry) in schema.iter() {
        if entry.is_metadata() {
            continue;
        }
        let value = decode_raw(entry, store.get(key));
        match encode_raw(key, entry, &value) {
            Ok(raw) => {
                if store.get(key) != Some(raw.as_str()) {
                    store.set(key, raw);
                    changed.push(key.to_string());
                }
            }
            Err(e) => warn!("Skipping {key} during normalize: {e}"),
        }
    }
    changed
}
