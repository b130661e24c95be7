//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion, both per kind and in emission order.
//!
//! # Example
//!
//! ```
//! use envprobe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking .env...");
//! ui.success(".env exists: true");
//!
//! assert!(ui.has_message("Checking"));
//! assert_eq!(ui.successes(), &[".env exists: true".to_string()]);
//! ```

use super::{OutputMode, UserInterface};

/// Which trait method produced a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Message,
    Success,
    Warning,
    Error,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<(LineKind, String)>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every captured line in emission order.
    pub fn lines(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success line containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
    }

    fn capture(&mut self, kind: LineKind, msg: &str) {
        self.lines.push((kind, msg.to_string()));
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            self.capture(LineKind::Message, msg);
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        self.capture(LineKind::Success, msg);
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.capture(LineKind::Warning, msg);
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.capture(LineKind::Error, msg);
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            self.capture(LineKind::Header, title);
            self.headers.push(title.to_string());
        }
    }
}
