//! Locating candidate config files on disk
//!
//! The engine never searches the filesystem; it is handed a resolved path.
//! Host applications that want to offer a picker implement
//! [`CandidateFinder`], or use [`SteamUserdataFinder`] which scans Steam's
//! per-account `userdata` directories.

use crate::format::pairs;
use crate::storage::read_text;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Steam app id of Counter-Strike 2
pub const CS2_APP_ID: &str = "730";

/// Config filename inside `<userdata>/<account>/730/local/cfg`
pub const VIDEO_CONFIG_FILE: &str = "cs2_video.txt";

/// A config file found on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCandidate {
    /// Stable identifier, e.g. a Steam account id
    pub identifier: String,
    /// Full path to the config file
    pub path: PathBuf,
    /// Human-friendly name, if one could be found
    pub display_name: Option<String>,
}

/// Something that can list config files the user may want to edit
pub trait CandidateFinder {
    fn find_candidate_config_paths(&self) -> Vec<ConfigCandidate>;
}

/// Scans `<steam root>/userdata/<account>/730/local/cfg/cs2_video.txt`
///
/// The display name comes from the account's `config/localconfig.vdf`
/// `"PersonaName"` entry. Anything unreadable is skipped.
#[derive(Debug, Clone)]
pub struct SteamUserdataFinder {
    roots: Vec<PathBuf>,
}

impl Default for SteamUserdataFinder {
    fn default() -> Self {
        Self::new(default_steam_roots())
    }
}

impl SteamUserdataFinder {
    /// Finder over explicit Steam install roots, searched in order
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn scan_root(&self, root: &Path, found: &mut Vec<ConfigCandidate>) {
        let userdata = root.join("userdata");
        let entries = match std::fs::read_dir(&userdata) {
            Ok(entries) => entries,
            Err(e) => {
                trace!("Skipping {}: {e}", userdata.display());
                return;
            }
        };

        let mut accounts: Vec<(String, PathBuf)> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let id = entry.file_name().to_str()?.to_string();
                Some((id, entry.path()))
            })
            .collect();
        accounts.sort_by(|(a, _), (b, _)| account_order(a).cmp(&account_order(b)));

        for (id, account_dir) in accounts {
            let config_path = account_dir
                .join(CS2_APP_ID)
                .join("local")
                .join("cfg")
                .join(VIDEO_CONFIG_FILE);
            if !config_path.is_file() {
                continue;
            }

            let display_name = persona_name(&account_dir.join("config").join("localconfig.vdf"));
            debug!(
                "Found config for account {id} at {}",
                config_path.display()
            );
            found.push(ConfigCandidate {
                identifier: id,
                path: config_path,
                display_name,
            });
        }
    }
}

impl CandidateFinder for SteamUserdataFinder {
    fn find_candidate_config_paths(&self) -> Vec<ConfigCandidate> {
        let mut found = Vec::new();
        for root in &self.roots {
            self.scan_root(root, &mut found);
        }
        found
    }
}

/// Numeric account ids in numeric order, anything else after them by name
fn account_order(id: &str) -> (bool, u64, &str) {
    match id.parse::<u64>() {
        Ok(n) => (false, n, id),
        Err(_) => (true, 0, id),
    }
}

/// `"PersonaName"` value from a `localconfig.vdf`, if readable and non-empty
fn persona_name(vdf_path: &Path) -> Option<String> {
    let text = read_text(vdf_path).ok()?;
    pairs(&text)
        .find(|(key, _)| *key == "PersonaName")
        .map(|(_, value)| value.to_string())
        .filter(|name| !name.is_empty())
}

/// Usual Steam install locations for the current platform
pub fn default_steam_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if cfg!(windows) {
        for var in ["ProgramFiles(x86)", "ProgramFiles", "LocalAppData", "USERPROFILE"] {
            if let Some(dir) = std::env::var_os(var) {
                roots.push(PathBuf::from(dir).join("Steam"));
            }
        }
    } else if let Some(home) = dirs::home_dir() {
        if cfg!(target_os = "macos") {
            roots.push(home.join("Library/Application Support/Steam"));
        } else {
            roots.push(home.join(".steam/steam"));
            roots.push(home.join(".local/share/Steam"));
        }
    }

    roots.dedup();
    roots
}
