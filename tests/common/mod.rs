//! Common test utilities for videocfg integration tests
//!
//! Provides a sample `cs2_video.txt`, a small custom schema and a fixture
//! that owns a temporary directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use videocfg::{EditorConfig, EditorSession, Schema, SchemaEntry, opt, schema};

// =============================================================================
// Sample Data
// =============================================================================

/// A trimmed-down file as the game writes it, including an unmanaged key
pub const SAMPLE_VIDEO_CFG: &str = "\"video.cfg\"
{
\t\"Version\"\t\t\"15\"
\t\"VendorID\"\t\t\"4318\"
\t\"DeviceID\"\t\t\"9860\"
\t\"setting.cpu_level\"\t\t\"2\"
\t\"setting.gpu_mem_level\"\t\t\"3\"
\t\"setting.fullscreen\"\t\t\"1\"
\t\"setting.defaultres\"\t\t\"2560\"
\t\"setting.defaultresheight\"\t\t\"1440\"
\t\"setting.refreshrate_numerator\"\t\t\"165\"
\t\"setting.max_fps\"\t\t\"400\"
\t\"setting.msaa_samples\"\t\t\"4\"
\t\"setting.mat_vsync\"\t\t\"0\"
\t\"setting.unknown_future_option\"\t\t\"7\"
\t\"Autoconfig\"\t\t\"2\"
}";

/// A schema covering one entry of each kind
pub fn small_schema() -> Schema {
    schema! {
        "setting.fullscreen" => SchemaEntry::toggle("Fullscreen"),
        "setting.max_fps" => SchemaEntry::number("FPS Limit", 0, 999),
        "setting.msaa_samples" => SchemaEntry::select("MSAA", vec![
            opt("0", "Off"),
            opt("2", "2x"),
            opt("4", "4x"),
            opt("8", "8x"),
        ]),
        "Version" => SchemaEntry::info("Version"),
    }
    .expect("small schema is valid")
}

// =============================================================================
// Test Fixtures
// =============================================================================

/// Temporary directory holding a config file and the session's host state
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a fixture with the sample config written to `cs2_video.txt`
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write_config(SAMPLE_VIDEO_CFG);
        fixture
    }

    /// Create a fixture with no config file
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path of the config file under test
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("cs2_video.txt")
    }

    /// Directory where host state is persisted
    pub fn state_dir(&self) -> PathBuf {
        self.temp_dir.path().join("state")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read config")
    }

    /// Editor config storing host state inside the fixture
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig::builder("videocfg-test")
            .state_dir(self.state_dir())
            .build()
    }

    /// A fresh session (no file opened yet)
    pub fn session(&self) -> EditorSession {
        EditorSession::new(self.editor_config())
    }

    /// A session with the fixture's config file opened
    pub fn opened_session(&self) -> EditorSession {
        let mut session = self.session();
        session.open(self.config_path()).expect("Failed to open config");
        session
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Create `<root>/userdata/<account>/730/local/cfg/cs2_video.txt`
pub fn make_steam_account(root: &Path, account: &str, persona: Option<&str>) -> PathBuf {
    let cfg_dir = root
        .join("userdata")
        .join(account)
        .join("730")
        .join("local")
        .join("cfg");
    std::fs::create_dir_all(&cfg_dir).expect("Failed to create cfg dir");
    let config = cfg_dir.join("cs2_video.txt");
    std::fs::write(&config, SAMPLE_VIDEO_CFG).expect("Failed to write config");

    if let Some(name) = persona {
        let config_dir = root.join("userdata").join(account).join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::write(
            config_dir.join("localconfig.vdf"),
            format!(
                "\"UserLocalConfigStore\"\n{{\n\t\"friends\"\n\t{{\n\t\t\"PersonaName\"\t\t\"{name}\"\n\t}}\n}}"
            ),
        )
        .expect("Failed to write localconfig.vdf");
    }

    config
}
