//! Error types for envprobe operations.
//!
//! This module defines [`ProbeError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe actions return `ProbeError` so the runner can stop on the first one
//! - The runner flattens every error into a single step failure for display

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Settings file given explicitly but missing.
    #[error("Settings not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// No module registered under this name.
    #[error("Unknown module: {name}")]
    UnknownModule { name: String },

    /// A registered module could not be acquired.
    #[error("Cannot load module '{name}': {message}")]
    ModuleLoad { name: String, message: String },

    /// A step asked for a module that no earlier step acquired.
    #[error("Module '{name}' has not been loaded")]
    ModuleNotLoaded { name: String },

    /// The configuration unit is missing a required key.
    #[error("Module '{module}' does not define required field '{field}'")]
    MissingField { module: String, field: String },

    /// The input session was released, or input ended before a line arrived.
    #[error("Input closed before a line was read")]
    InputClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for envprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_not_found_displays_path() {
        let err = ProbeError::SettingsNotFound {
            path: PathBuf::from("/foo/.envprobe.yml"),
        };
        assert!(err.to_string().contains("/foo/.envprobe.yml"));
    }

    #[test]
    fn settings_parse_displays_path_and_message() {
        let err = ProbeError::SettingsParse {
            path: PathBuf::from("/p/.envprobe.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/p/.envprobe.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_module_displays_name() {
        let err = ProbeError::UnknownModule {
            name: "signal-engine".into(),
        };
        assert_eq!(err.to_string(), "Unknown module: signal-engine");
    }

    #[test]
    fn module_load_displays_name_and_message() {
        let err = ProbeError::ModuleLoad {
            name: "logger".into(),
            message: "file not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("logger"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn missing_field_displays_module_and_field() {
        let err = ProbeError::MissingField {
            module: "config".into(),
            field: "WALLET_PATH".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config"));
        assert!(msg.contains("WALLET_PATH"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ProbeError = io_err.into();
        assert!(matches!(err, ProbeError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
