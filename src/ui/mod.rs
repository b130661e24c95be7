//! Operator-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`NonInteractiveUI`] for piped or CI output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use envprobe::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("envprobe");
//! ui.success("fs imported OK");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::format_duration;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ProbeTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a progress line (a step label about to run).
    fn message(&mut self, msg: &str);

    /// Display a completed step.
    fn success(&mut self, msg: &str);

    /// Display a warning on the error stream.
    fn warning(&mut self, msg: &str);

    /// Display a failure on the error stream.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
