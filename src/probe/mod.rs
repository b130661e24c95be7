//! Probe steps, the sequential runner, and the built-in sequences.
//!
//! - [`step`] - [`ProbeStep`], [`Outcome`], and the [`ProbeContext`] actions run against
//! - [`runner`] - [`ProbeRunner`] and [`ProbeSequence`]
//! - [`result`] - [`RunResult`], the ordered record of one run
//! - [`input`] - [`InputSession`], scoped line input
//! - [`sequences`] - the `debug`, `check`, `prompt`, and `imports` sequences
//!
//! # Example
//!
//! ```
//! use envprobe::config::ProbeSettings;
//! use envprobe::probe::{LineMarker, Outcome, ProbeContext, ProbeRunner, ProbeSequence, ProbeStep};
//! use envprobe::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let mut ctx = ProbeContext::new(temp.path(), ProbeSettings::default());
//! let sequence = ProbeSequence::new("demo", LineMarker::Numbered)
//!     .step(ProbeStep::new("Counting...", "Counted", |_| Ok(Outcome::Value("3".into()))));
//!
//! let mut ui = MockUI::new();
//! let result = ProbeRunner::new(&mut ui).run(sequence, &mut ctx);
//!
//! assert!(result.is_success());
//! assert_eq!(ui.successes(), &["2. Counted: 3"]);
//! ```

pub mod input;
pub mod result;
pub mod runner;
pub mod sequences;
pub mod step;

pub use input::{InputFactory, InputSession};
pub use result::{Entry, RunResult, RunStatus, StepFailure, StepRecord};
pub use runner::{LineMarker, ProbeRunner, ProbeSequence};
pub use sequences::SequenceKind;
pub use step::{Action, Outcome, ProbeContext, ProbeStep};
