//! Configuration for envprobe.
//!
//! Two files are involved:
//! - the project's `.env` marker, parsed by [`env_file`] and exposed as the
//!   `config` module's fields
//! - envprobe's own optional settings, `.envprobe.yml`, in [`settings`]
//!
//! # Example
//!
//! ```
//! use envprobe::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".envprobe.yml"), "field: API_KEY").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert_eq!(settings.field, "API_KEY");
//! ```

pub mod env_file;
pub mod settings;

pub use env_file::EnvFileParser;
pub use settings::{
    load_settings, load_settings_file, parse_settings, ProbeSettings, SETTINGS_FILE,
};
