//! Probe settings schema and loading.
//!
//! Settings live in an optional `.envprobe.yml` at the project root. Every
//! field has a default, so an absent file behaves like an empty one.

use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, relative to the project root.
pub const SETTINGS_FILE: &str = ".envprobe.yml";

/// Root settings structure for `.envprobe.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Marker file checked for existence and loaded as the config unit.
    pub marker: PathBuf,

    /// Config field surfaced by the `check` sequence.
    pub field: String,

    /// Question asked by the `debug` sequence.
    pub question: String,

    /// Keys the config unit must define for acquisition to succeed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Modules acquired, in order, by the `imports` sequence.
    pub imports: Vec<String>,

    /// External collaborator files, keyed by module name.
    pub collaborators: BTreeMap<String, PathBuf>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            marker: PathBuf::from(".env"),
            field: "WALLET_PATH".to_string(),
            question: "Test question (type anything): ".to_string(),
            required: Vec::new(),
            imports: [
                "fs",
                "path",
                "url",
                "setup-wizard",
                "signal-engine",
                "logger",
                "config",
                "readline",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            collaborators: default_collaborators(),
        }
    }
}

fn default_collaborators() -> BTreeMap<String, PathBuf> {
    [
        ("setup-wizard", "src/utils/setupWizard.js"),
        ("signal-engine", "src/signalEngine/userSignalEngine.js"),
        ("logger", "src/utils/simpleLogger.js"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), PathBuf::from(path)))
    .collect()
}

/// Parse YAML content into settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<ProbeSettings> {
    if content.trim().is_empty() {
        return Ok(ProbeSettings::default());
    }

    serde_yaml::from_str(content).map_err(|e| ProbeError::SettingsParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from an explicit file.
///
/// # Errors
///
/// Returns `SettingsNotFound` if the file doesn't exist.
/// Returns `SettingsParse` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<ProbeSettings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::SettingsNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProbeError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Load settings for a project.
///
/// If `override_path` is given only that file is read and it must exist.
/// Otherwise `.envprobe.yml` under `project_root` is used when present, and
/// defaults apply when it is not.
pub fn load_settings(project_root: &Path, override_path: Option<&Path>) -> Result<ProbeSettings> {
    if let Some(path) = override_path {
        tracing::debug!("Loading settings from {}", path.display());
        return load_settings_file(path);
    }

    let path = project_root.join(SETTINGS_FILE);
    if path.is_file() {
        tracing::debug!("Loading settings from {}", path.display());
        load_settings_file(&path)
    } else {
        tracing::debug!("No {} found, using defaults", SETTINGS_FILE);
        Ok(ProbeSettings::default())
    }
}
