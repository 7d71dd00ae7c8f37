//! Format Integration Tests
//!
//! Parse/serialize behavior of the `video.cfg` dialect:
//! - Exact serializer layout
//! - Lossless round-trip of unknown keys and ordering
//! - Duplicate-key policy
//! - Tolerance of malformed input

mod common;

use common::SAMPLE_VIDEO_CFG;
use proptest::prelude::*;
use videocfg::{SettingStore, parse_config, serialize_config};

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_serialize_single_entry_literal() {
    let mut store = SettingStore::new();
    store.set("setting.fullscreen", "1");

    assert_eq!(
        serialize_config(&store),
        "\"video.cfg\"\n{\n\t\"setting.fullscreen\"\t\t\"1\"\n}"
    );
}

#[test]
fn test_sample_round_trips_byte_for_byte() {
    let store = parse_config(SAMPLE_VIDEO_CFG);

    assert_eq!(store.len(), 14);
    assert_eq!(serialize_config(&store), SAMPLE_VIDEO_CFG);
}

#[test]
fn test_unknown_keys_survive_editing_other_keys() {
    let mut store = parse_config(SAMPLE_VIDEO_CFG);
    store.set("setting.max_fps", "240");

    let reparsed = parse_config(&serialize_config(&store));

    assert_eq!(reparsed.get("setting.unknown_future_option"), Some("7"));
    assert_eq!(reparsed.get("setting.max_fps"), Some("240"));
    assert_eq!(
        reparsed.keys().collect::<Vec<_>>(),
        store.keys().collect::<Vec<_>>()
    );
}

// =============================================================================
// Lenient Parsing
// =============================================================================

#[test]
fn test_parse_ignores_structure_and_noise() {
    let text = "// exported by hand\n\
        \"video.cfg\"\n\
        {\n\
        \t\"setting.fullscreen\"   \"0\"\n\
        garbage line without quotes\n\
        \t\"half a pair\n\
        \t\"setting.max_fps\" \"300\"\n\
        }\n\
        trailing text";
    let store = parse_config(text);

    assert_eq!(
        store.iter().collect::<Vec<_>>(),
        vec![("setting.fullscreen", "0"), ("setting.max_fps", "300")]
    );
}

#[test]
fn test_parse_empty_and_headerless_input() {
    assert!(parse_config("").is_empty());
    assert!(parse_config("\"video.cfg\"\n{\n}").is_empty());

    let headerless = parse_config("\"setting.high_dpi\" \"1\"");
    assert_eq!(headerless.get("setting.high_dpi"), Some("1"));
}

#[test]
fn test_parse_crlf_line_endings() {
    let text = SAMPLE_VIDEO_CFG.replace('\n', "\r\n");
    let store = parse_config(&text);

    assert_eq!(store, parse_config(SAMPLE_VIDEO_CFG));
}

#[test]
fn test_trailing_backslash_value_survives_save() {
    let text = "\"video.cfg\"\n{\n\t\"custom.path\"\t\t\"C:\\Games\\\"\n\t\"setting.max_fps\"\t\t\"240\"\n}";
    let store = parse_config(text);

    assert_eq!(
        store.iter().collect::<Vec<_>>(),
        vec![("custom.path", "C:\\Games\\"), ("setting.max_fps", "240")]
    );
    assert_eq!(serialize_config(&store), text);
}

#[test]
fn test_backslash_does_not_swallow_next_pair_on_line() {
    let store = parse_config("\"a\" \"x\\\" \"b\" \"2\"");

    assert_eq!(store.iter().collect::<Vec<_>>(), vec![("a", "x\\"), ("b", "2")]);
}

#[test]
fn test_duplicate_key_last_value_first_position() {
    let store = parse_config("\"a\" \"1\"\n\"b\" \"2\"\n\"a\" \"3\"");

    assert_eq!(store.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
}

// =============================================================================
// Properties
// =============================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9._]{0,24}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._-]{0,12}"
}

proptest! {
    #[test]
    fn prop_serialize_then_parse_is_identity(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..32)
    ) {
        let store: SettingStore = entries.into_iter().collect();
        let reparsed = parse_config(&serialize_config(&store));
        prop_assert_eq!(reparsed, store);
    }

    #[test]
    fn prop_duplicates_keep_first_position_last_value(
        entries in prop::collection::vec(
            (prop::sample::select(vec!["a", "b", "c", "d"]), value_strategy()),
            0..24
        )
    ) {
        let text: String = entries
            .iter()
            .map(|(k, v)| format!("\t\"{k}\"\t\t\"{v}\"\n"))
            .collect();

        let mut expected: Vec<(String, String)> = Vec::new();
        for (k, v) in &entries {
            match expected.iter_mut().find(|(ek, _)| ek.as_str() == *k) {
                Some(slot) => slot.1 = v.clone(),
                None => expected.push((k.to_string(), v.clone())),
            }
        }

        let store = parse_config(&text);
        let actual: Vec<(String, String)> = store
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_reparse_of_serialized_parse_is_stable(
        text in prop::collection::vec(
            prop::sample::select(vec![
                "\"", "\\", "\t", " ", "\r", "\n", "\r\n", "{", "}", "a", "b", "1", "video.cfg",
            ]),
            0..64
        ).prop_map(|parts| parts.concat())
    ) {
        let store = parse_config(&text);
        prop_assert_eq!(parse_config(&serialize_config(&store)), store);
    }

    #[test]
    fn prop_parse_never_panics(text in any::<String>()) {
        let _ = parse_config(&text);
    }
}
