//! Documentation generator for a settings schema
//!
//! Generates a markdown reference from [`Schema`] declarations.

use crate::coerce::decode_raw;
use crate::config::{Schema, SchemaEntry, SettingKind};
use std::fmt::Write;

/// Configuration for docs generation
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Title for the documentation
    pub title: Option<String>,
    /// Description/introduction text
    pub description: Option<String>,
    /// Whether to list read-only metadata keys
    pub show_metadata: bool,
    /// Whether to split settings into one section per kind
    pub group_by_kind: bool,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_metadata: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[must_use]
    pub fn hide_metadata(mut self) -> Self {
        self.show_metadata = false;
        self
    }

    #[must_use]
    pub fn group_by_kind(mut self) -> Self {
        self.group_by_kind = true;
        self
    }
}

/// Generate markdown documentation for `schema`
///
/// Settings appear in declaration order, within each kind section when
/// grouping is enabled.
#[must_use]
pub fn generate_docs(schema: &Schema, config: DocsConfig) -> String {
    let mut output = String::new();

    let title = config
        .title
        .unwrap_or_else(|| "Video Settings Reference".to_string());
    let _ = writeln!(output, "# {title}\n");

    if let Some(desc) = config.description {
        let _ = writeln!(output, "{desc}\n");
    }

    let settings: Vec<(&str, &SchemaEntry)> = schema
        .iter()
        .filter(|(_, entry)| config.show_metadata || !entry.is_metadata())
        .collect();

    if config.group_by_kind {
        for (heading, rank) in [("Toggles", 0), ("Numbers", 1), ("Choices", 2), ("Metadata", 3)] {
            let group: Vec<_> = settings
                .iter()
                .filter(|(_, entry)| kind_rank(&entry.kind) == rank)
                .collect();
            if group.is_empty() {
                continue;
            }
            let _ = writeln!(output, "## {heading}\n");
            for (key, entry) in group {
                format_setting(&mut output, key, entry);
            }
        }
    } else {
        output.push_str("## Settings\n\n");
        for (key, entry) in &settings {
            format_setting(&mut output, key, entry);
        }
    }

    output
}

fn kind_rank(kind: &SettingKind) -> u8 {
    match kind {
        SettingKind::Boolean => 0,
        SettingKind::BoundedInt { .. } => 1,
        SettingKind::Enum { .. } => 2,
        SettingKind::Metadata => 3,
    }
}

fn format_setting(out: &mut String, key: &str, entry: &SchemaEntry) {
    let _ = writeln!(out, "### `{key}`\n");
    let _ = writeln!(out, "{}\n", entry.label);

    if entry.is_metadata() {
        out.push_str("Read-only\n\n");
    }

    if let Some(ref desc) = entry.description {
        let _ = writeln!(out, "{desc}\n");
    }

    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    let _ = writeln!(out, "| **Type** | {} |", format_kind(&entry.kind));
    if !entry.is_metadata() {
        let fallback = decode_raw(entry, None);
        let _ = writeln!(out, "| **Fallback** | `{}` |", fallback.display());
    }

    if let SettingKind::BoundedInt { min, max, step } = entry.kind {
        let _ = writeln!(out, "| **Range** | {min} - {max} |");
        let _ = writeln!(out, "| **Step** | {step} |");
    }

    out.push('\n');

    let options = entry.options();
    if !options.is_empty() {
        out.push_str("**Options:**\n\n");
        for opt in options {
            let _ = writeln!(out, "- `{}` - {}", opt.value, opt.label);
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
}

fn format_kind(kind: &SettingKind) -> &'static str {
    match kind {
        SettingKind::Boolean => "Boolean (`1` / `0`)",
        SettingKind::BoundedInt { .. } => "Integer",
        SettingKind::Enum { .. } => "Choice",
        SettingKind::Metadata => "Metadata",
    }
}

// =============================================================================
// Tests
// =============================================================================
