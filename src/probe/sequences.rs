//! Built-in probe sequences.
//!
//! Each function builds one ordered sequence from the active settings:
//!
//! | Sequence | What it checks |
//! |---|---|
//! | [`debug`] | marker exists, config and readline load, a line can be read |
//! | [`check`] | marker exists, config loads, one config field |
//! | [`prompt`] | a line can be read |
//! | [`imports`] | every configured module can be acquired |

use crate::config::ProbeSettings;

use super::runner::{LineMarker, ProbeSequence};
use super::step::ProbeStep;

/// Which built-in sequence to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Debug,
    Check,
    Prompt,
    Imports,
}

impl SequenceKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Check => "check",
            Self::Prompt => "prompt",
            Self::Imports => "imports",
        }
    }

    /// Build the sequence for this kind.
    pub fn build(&self, settings: &ProbeSettings) -> ProbeSequence {
        match self {
            Self::Debug => debug(settings),
            Self::Check => check(settings),
            Self::Prompt => prompt(),
            Self::Imports => imports(settings),
        }
    }
}

/// Gate on the marker file. `noun` is appended to the marker name in the
/// label, e.g. `Checking .env file...`.
fn marker_step(settings: &ProbeSettings, noun: &str) -> ProbeStep {
    let shown = settings.marker.display().to_string();
    let subject = if noun.is_empty() {
        shown.clone()
    } else {
        format!("{} {}", shown, noun)
    };
    ProbeStep::exists(
        format!("Checking {}...", subject),
        format!("{} exists", shown),
        settings.marker.clone(),
    )
}

/// Marker check, config and readline acquisition, then one interactive
/// question.
pub fn debug(settings: &ProbeSettings) -> ProbeSequence {
    ProbeSequence::new("debug", LineMarker::Step)
        .banner("Starting debug...")
        .step(marker_step(settings, ""))
        .step(ProbeStep::acquire(
            "Loading config...",
            "Config loaded successfully",
            "config",
        ))
        .step(ProbeStep::acquire(
            "Creating readline...",
            "Readline created",
            "readline",
        ))
        .step(ProbeStep::ask(
            "Asking question...",
            "Got answer",
            &settings.question,
        ))
        .closing("All working!", false)
        .failure_marker("Debug error")
}

/// Marker check, config acquisition, then the configured field.
pub fn check(settings: &ProbeSettings) -> ProbeSequence {
    ProbeSequence::new("check", LineMarker::Prefix("Debug: ".to_string()))
        .banner("Starting...")
        .step(marker_step(settings, "file"))
        .step(ProbeStep::acquire("Loading config...", "Config loaded", "config"))
        .step(ProbeStep::field(
            format!("Reading {}...", settings.field),
            settings.field.clone(),
            "config",
            &settings.field,
        ))
        .closing("All good, should show interface...", true)
        .failure_marker("Debug error")
}

/// A single interactive question.
pub fn prompt() -> ProbeSequence {
    ProbeSequence::new("prompt", LineMarker::Plain)
        .banner("Simple Test")
        .banner("Testing readline...")
        .step(ProbeStep::ask(
            "Waiting for input...",
            "You entered",
            "Enter something: ",
        ))
        .failure_marker("Debug error")
}

/// Acquire every configured module in order.
pub fn imports(settings: &ProbeSettings) -> ProbeSequence {
    let mut sequence =
        ProbeSequence::new("imports", LineMarker::Numbered).banner("Starting import test...");

    for name in &settings.imports {
        sequence = sequence.step(ProbeStep::acquire(
            format!("Testing {}...", name),
            format!("{} imported OK", name),
            name,
        ));
    }

    sequence
        .closing("All imports successful!", false)
        .failure_marker("Import failed")
}
