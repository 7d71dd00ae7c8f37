//! Host configuration for an editing session

use std::borrow::Cow;
use std::path::PathBuf;

use super::schema::Schema;
use super::video::video_schema;

/// Default filename for persisted host state
pub const DEFAULT_STATE_FILE: &str = "editor_state.json";

/// Configuration for initializing an `EditorSession`
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Directory where the host state file is stored
    pub state_dir: PathBuf,

    /// Filename for the host state file (e.g., "editor_state.json")
    pub state_file: String,

    /// Application name (used for the default state directory)
    pub app_name: String,

    /// Schema the session decodes and encodes against
    pub schema: Cow<'static, Schema>,

    /// Whether to read and write the host state file at all
    pub persist_state: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("."),
            state_file: DEFAULT_STATE_FILE.into(),
            app_name: "videocfg".into(),
            schema: Cow::Borrowed(video_schema()),
            persist_state: true,
        }
    }
}

impl EditorConfig {
    /// Create a new builder for EditorConfig
    ///
    /// # Example
    /// ```rust
    /// use videocfg::EditorConfig;
    ///
    /// let config = EditorConfig::builder("videocfg")
    ///     .state_dir("/tmp/videocfg")
    ///     .build();
    /// assert_eq!(config.state_path(), std::path::PathBuf::from("/tmp/videocfg/editor_state.json"));
    /// ```
    pub fn builder(app_name: impl Into<String>) -> EditorConfigBuilder {
        EditorConfigBuilder::new(app_name)
    }

    /// Get the full path to the host state file
    pub fn state_path(&self) -> PathBuf {
        self.state_dir.join(&self.state_file)
    }
}

/// Builder for creating EditorConfig with a fluent API
#[derive(Debug, Clone)]
pub struct EditorConfigBuilder {
    state_dir: Option<PathBuf>,
    state_file: String,
    app_name: String,
    schema: Cow<'static, Schema>,
    persist_state: bool,
}

impl EditorConfigBuilder {
    /// Create a new builder with the required app name
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            state_dir: None,
            state_file: DEFAULT_STATE_FILE.into(),
            app_name: app_name.into(),
            schema: Cow::Borrowed(video_schema()),
            persist_state: true,
        }
    }

    /// Set the host state directory
    ///
    /// Supports `~` expansion for home directory.
    pub fn state_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let expanded = if path.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                home.join(path.strip_prefix("~").unwrap_or(&path))
            } else {
                path
            }
        } else {
            path
        };
        self.state_dir = Some(expanded);
        self
    }

    /// Set the host state filename (default: "editor_state.json")
    pub fn state_file(mut self, filename: impl Into<String>) -> Self {
        self.state_file = filename.into();
        self
    }

    /// Use a custom schema instead of the built-in video registry
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Cow::Owned(schema);
        self
    }

    /// Never read or write the host state file
    pub fn without_state(mut self) -> Self {
        self.persist_state = false;
        self
    }

    /// Build the EditorConfig
    ///
    /// If `state_dir` is not set, uses the system config directory for the app.
    pub fn build(self) -> EditorConfig {
        let state_dir = self.state_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|d| d.join(&self.app_name))
                .unwrap_or_else(|| PathBuf::from("."))
        });

        EditorConfig {
            state_dir,
            state_file: self.state_file,
            app_name: self.app_name,
            schema: self.schema,
            persist_state: self.persist_state,
        }
    }
}
