//! envprobe - Diagnostic probes for a project's host environment.
//!
//! envprobe runs short, ordered sequences of labelled checks against a
//! project directory: does the `.env` marker exist, does the configuration
//! load, can each named module be acquired, can a line be read from the
//! terminal. Every step is reported as it runs; the first failure is
//! reported once and stops the sequence.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.env` parsing and `.envprobe.yml` settings
//! - [`error`] - Error types and result aliases
//! - [`modules`] - Named module registry
//! - [`probe`] - Probe steps, runner, and built-in sequences
//! - [`ui`] - Operator-facing output
//!
//! # Example
//!
//! ```
//! use envprobe::config::ProbeSettings;
//! use envprobe::probe::{sequences, ProbeContext, ProbeRunner, RunStatus};
//! use envprobe::ui::MockUI;
//! use tempfile::TempDir;
//!
//! // No .env in an empty directory: the check stops at the gate, cleanly.
//! let temp = TempDir::new().unwrap();
//! let settings = ProbeSettings::default();
//! let mut ctx = ProbeContext::new(temp.path(), settings.clone());
//!
//! let mut ui = MockUI::new();
//! let result = ProbeRunner::new(&mut ui).run(sequences::check(&settings), &mut ctx);
//!
//! assert!(matches!(result.status(), RunStatus::Gated { .. }));
//! assert!(ui.has_success(".env exists: false"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod modules;
pub mod probe;
pub mod ui;

pub use error::{ProbeError, Result};
