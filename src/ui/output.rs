//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Progress, results, and per-step timings.
    Verbose,
    /// Progress and results.
    #[default]
    Normal,
    /// Results and failures only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows step labels before they run.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows step timings.
    pub fn shows_timings(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
