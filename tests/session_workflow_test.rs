//! Session Workflow Integration Tests
//!
//! End-to-end editing flows through `EditorSession`:
//! - Open, edit, save and reopen
//! - Save-as, reload and discard
//! - Remembered last path across sessions
//! - Custom schemas and change listeners

mod common;

use common::{SAMPLE_VIDEO_CFG, TestFixture, small_schema};
use std::cell::RefCell;
use std::rc::Rc;
use videocfg::{EditorConfig, EditorSession, Error, HostState, SettingValue, opt};

// =============================================================================
// Open / Edit / Save
// =============================================================================

#[test]
fn test_edit_and_save_preserves_unknown_keys() {
    let fixture = TestFixture::new();
    let mut session = fixture.opened_session();

    session.set("setting.max_fps", &SettingValue::Int(240)).unwrap();
    session.set_input("setting.msaa_samples", "8x").unwrap();
    session.save().unwrap();

    let expected = SAMPLE_VIDEO_CFG
        .replace("\"setting.max_fps\"\t\t\"400\"", "\"setting.max_fps\"\t\t\"240\"")
        .replace("\"setting.msaa_samples\"\t\t\"4\"", "\"setting.msaa_samples\"\t\t\"8\"");
    assert_eq!(fixture.read_config(), expected);
}

#[test]
fn test_saved_values_visible_to_new_session() {
    let fixture = TestFixture::new();
    {
        let mut session = fixture.opened_session();
        session.set("setting.cpu_level", &SettingValue::choice("3")).unwrap();
        session.save().unwrap();
    }

    let session = fixture.opened_session();
    assert_eq!(
        session.get("setting.cpu_level").unwrap(),
        SettingValue::Enum(opt("3", "Ultra"))
    );
    assert_eq!(
        session.get("setting.defaultres").unwrap(),
        SettingValue::Int(2560)
    );
}

#[test]
fn test_save_as_switches_current_file() {
    let fixture = TestFixture::new();
    let mut session = fixture.opened_session();
    let copy = fixture.temp_dir.path().join("backup").join("cs2_video.txt");

    session.set("setting.fullscreen", &SettingValue::Bool(false)).unwrap();
    session.save_as(&copy).unwrap();

    assert_eq!(session.path(), Some(copy.as_path()));
    assert!(!session.is_dirty());
    // Original untouched
    assert_eq!(fixture.read_config(), SAMPLE_VIDEO_CFG);
    assert!(
        std::fs::read_to_string(&copy)
            .unwrap()
            .contains("\"setting.fullscreen\"\t\t\"0\"")
    );
}

#[test]
fn test_reload_picks_up_external_changes() {
    let fixture = TestFixture::new();
    let mut session = fixture.opened_session();
    session.set("setting.max_fps", &SettingValue::Int(60)).unwrap();

    fixture.write_config("\"video.cfg\"\n{\n\t\"setting.max_fps\"\t\t\"144\"\n}");
    session.reload().unwrap();

    assert!(!session.is_dirty());
    assert_eq!(session.get("setting.max_fps").unwrap(), SettingValue::Int(144));
    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_discard_changes() {
    let fixture = TestFixture::new();
    let mut session = fixture.opened_session();

    session.set("setting.mat_vsync", &SettingValue::Bool(true)).unwrap();
    session.set("setting.high_dpi", &SettingValue::Bool(true)).unwrap();
    assert!(session.is_dirty());

    session.discard_changes();

    assert!(!session.is_dirty());
    assert_eq!(session.store().get("setting.mat_vsync"), Some("0"));
    assert!(!session.store().contains_key("setting.high_dpi"));
}

#[test]
fn test_setting_same_value_is_not_dirty() {
    let fixture = TestFixture::new();
    let mut session = fixture.opened_session();

    session.set("setting.fullscreen", &SettingValue::Bool(true)).unwrap();

    assert!(!session.is_dirty());
}

#[test]
fn test_normalize_then_save() {
    let fixture = TestFixture::empty();
    fixture.write_config("\"video.cfg\"\n{\n\t\"setting.max_fps\"\t\t\"5000\"\n\t\"Version\"\t\t\"15\"\n}");

    let mut session = EditorSession::new(
        EditorConfig::builder("videocfg-test")
            .schema(small_schema())
            .without_state()
            .build(),
    );
    session.open(fixture.config_path()).unwrap();
    let changed = session.normalize();
    session.save().unwrap();

    assert_eq!(
        changed,
        vec!["setting.fullscreen", "setting.max_fps", "setting.msaa_samples"]
    );
    assert_eq!(
        fixture.read_config(),
        "\"video.cfg\"\n{\n\t\"setting.max_fps\"\t\t\"999\"\n\t\"Version\"\t\t\"15\"\n\t\"setting.fullscreen\"\t\t\"0\"\n\t\"setting.msaa_samples\"\t\t\"0\"\n}"
    );
}

// =============================================================================
// Host State
// =============================================================================

#[test]
fn test_last_path_remembered_across_sessions() {
    let fixture = TestFixture::new();
    {
        let mut session = fixture.opened_session();
        session.close();
    }

    let mut session = fixture.session();
    assert_eq!(
        session.host_state().last_path(),
        Some(fixture.config_path())
    );
    assert!(session.open_last().unwrap());
    assert_eq!(session.path(), Some(fixture.config_path().as_path()));
}

#[test]
fn test_open_last_with_vanished_file() {
    let fixture = TestFixture::new();
    fixture.opened_session().close();
    std::fs::remove_file(fixture.config_path()).unwrap();

    let mut session = fixture.session();

    assert!(!session.open_last().unwrap());
    assert!(session.path().is_none());
}

#[test]
fn test_corrupt_host_state_is_ignored() {
    let fixture = TestFixture::new();
    let config = fixture.editor_config();
    std::fs::create_dir_all(&config.state_dir).unwrap();
    std::fs::write(config.state_path(), "{ not json").unwrap();

    let mut session = EditorSession::new(config);

    assert_eq!(session.host_state(), &HostState::default());
    assert!(!session.open_last().unwrap());
    session.open(fixture.config_path()).unwrap();
}

#[test]
fn test_without_state_writes_nothing() {
    let fixture = TestFixture::new();
    let mut session = EditorSession::new(
        EditorConfig::builder("videocfg-test")
            .state_dir(fixture.state_dir())
            .without_state()
            .build(),
    );

    session.open(fixture.config_path()).unwrap();
    session.close();

    assert!(!fixture.state_dir().exists());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_open_missing_file() {
    let fixture = TestFixture::empty();
    let mut session = fixture.session();

    let err = session.open(fixture.config_path()).unwrap_err();

    assert!(err.is_not_found());
    assert!(err.is_io_error());
    assert!(session.path().is_none());
}

#[test]
fn test_save_without_open() {
    let fixture = TestFixture::empty();
    let mut session = fixture.session();

    assert!(matches!(session.save(), Err(Error::NoFileLoaded)));
    assert!(!fixture.config_path().exists());
}

#[test]
fn test_metadata_is_read_only_through_session() {
    let fixture = TestFixture::new();
    let mut session = fixture.opened_session();

    assert_eq!(
        session.get("DeviceID").unwrap(),
        SettingValue::Metadata(Some("9860".to_string()))
    );
    assert!(matches!(
        session.set_input("Version", "16"),
        Err(Error::ReadOnlySetting(_))
    ));
    assert!(!session.is_dirty());
}

// =============================================================================
// Listeners
// =============================================================================

#[test]
fn test_watch_only_fires_for_its_key() {
    let fixture = TestFixture::new();
    let mut session = fixture.opened_session();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    session.watch("setting.max_fps", move |_, old, new| {
        sink.borrow_mut().push((old.map(String::from), new.to_string()));
    });

    session.set("setting.fullscreen", &SettingValue::Bool(false)).unwrap();
    session.set("setting.max_fps", &SettingValue::Int(300)).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![(Some("400".to_string()), "300".to_string())]
    );
}
