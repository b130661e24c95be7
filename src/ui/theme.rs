//! Visual theme and styling.

use console::Style;

/// Styles for probe output.
#[derive(Debug, Clone)]
pub struct ProbeTheme {
    /// Style for completed steps (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failures (red bold).
    pub error: Style,
    /// Style for step labels and timings (dim).
    pub dim: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for ProbeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Failures get their own icon so they never read as a result line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_progress(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("· {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = ProbeTheme::plain().format_success("fs imported OK");
        assert_eq!(msg, "✓ fs imported OK");
    }

    #[test]
    fn theme_formats_error() {
        let msg = ProbeTheme::plain().format_error("Import failed: boom");
        assert_eq!(msg, "✗ Import failed: boom");
    }

    #[test]
    fn error_marker_differs_from_success_marker() {
        let theme = ProbeTheme::plain();
        let ok = theme.format_success("x");
        let err = theme.format_error("x");
        assert_ne!(ok.chars().next(), err.chars().next());
    }

    #[test]
    fn theme_formats_progress_and_warning() {
        let theme = ProbeTheme::plain();
        assert_eq!(theme.format_progress("Checking .env..."), "· Checking .env...");
        assert!(theme.format_warning("careful").contains("careful"));
    }

    #[test]
    fn colored_theme_creates_without_panic() {
        let theme = ProbeTheme::default();
        let _ = theme.format_header("envprobe");
    }
}
