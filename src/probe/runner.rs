//! Sequential probe runner.
//!
//! The runner drives one [`ProbeSequence`] on a single control flow. Each
//! step's label is shown before it runs and one success line after it
//! completes. The first error is shown once on the error stream and ends the
//! run; nothing after it executes.

use std::time::Instant;

use crate::ui::{format_duration, UserInterface};

use super::result::{RunResult, RunStatus, StepRecord};
use super::step::{Outcome, ProbeContext, ProbeStep};

/// Prefix applied to every progress and success line of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMarker {
    /// `Step N: `
    Step,
    /// `N. `
    Numbered,
    /// A fixed prefix such as `Debug: `.
    Prefix(String),
    /// No prefix.
    Plain,
}

impl LineMarker {
    /// Apply the marker to the `n`th emitted line (1-based).
    pub fn apply(&self, n: usize, text: &str) -> String {
        match self {
            Self::Step => format!("Step {}: {}", n, text),
            Self::Numbered => format!("{}. {}", n, text),
            Self::Prefix(prefix) => format!("{}{}", prefix, text),
            Self::Plain => text.to_string(),
        }
    }
}

/// An ordered list of steps plus how to present them.
#[derive(Debug)]
pub struct ProbeSequence {
    /// Name used in logs.
    pub name: String,
    pub marker: LineMarker,
    /// Lines shown before the first step.
    pub banner: Vec<String>,
    pub steps: Vec<ProbeStep>,
    /// Line shown after the last step completes.
    pub closing: Option<String>,
    /// Also show `closing` when a gate stopped the run.
    pub close_when_gated: bool,
    /// Prefix of the failure line, e.g. `Debug error`.
    pub failure_marker: String,
}

impl ProbeSequence {
    /// Create an empty sequence.
    pub fn new(name: impl Into<String>, marker: LineMarker) -> Self {
        Self {
            name: name.into(),
            marker,
            banner: Vec::new(),
            steps: Vec::new(),
            closing: None,
            close_when_gated: false,
            failure_marker: "Probe failed".to_string(),
        }
    }

    pub fn banner(mut self, line: impl Into<String>) -> Self {
        self.banner.push(line.into());
        self
    }

    pub fn step(mut self, step: ProbeStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn closing(mut self, line: impl Into<String>, when_gated: bool) -> Self {
        self.closing = Some(line.into());
        self.close_when_gated = when_gated;
        self
    }

    pub fn failure_marker(mut self, marker: impl Into<String>) -> Self {
        self.failure_marker = marker.into();
        self
    }
}

/// Runs probe sequences against a UI.
pub struct ProbeRunner<'a> {
    ui: &'a mut dyn UserInterface,
    line: usize,
}

impl<'a> ProbeRunner<'a> {
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui, line: 0 }
    }

    fn next_line(&mut self, marker: &LineMarker, text: &str) -> String {
        self.line += 1;
        marker.apply(self.line, text)
    }

    /// Run every step of `sequence` in order, stopping at the first failure
    /// or at a gate that reports `false`.
    pub fn run(&mut self, sequence: ProbeSequence, ctx: &mut ProbeContext) -> RunResult {
        let ProbeSequence {
            name,
            marker,
            banner,
            steps,
            closing,
            close_when_gated,
            failure_marker,
        } = sequence;

        tracing::debug!("Running sequence '{}' ({} steps)", name, steps.len());
        self.line = 0;
        let mut result = RunResult::new();

        for line in &banner {
            let line = self.next_line(&marker, line);
            self.ui.message(&line);
        }

        for step in steps {
            let label = step.label().to_string();
            let report = step.report().to_string();
            let gate = step.is_gate();

            let line = self.next_line(&marker, &label);
            self.ui.message(&line);
            tracing::debug!("Step '{}' started", label);

            let start = Instant::now();
            match step.run(ctx) {
                Ok(outcome) => {
                    let elapsed = start.elapsed();
                    let mut text = outcome.render(&report);
                    if self.ui.output_mode().shows_timings() {
                        text = format!("{} ({})", text, format_duration(elapsed));
                    }
                    let line = self.next_line(&marker, &text);
                    self.ui.success(&line);
                    tracing::debug!("Step '{}' finished: {:?}", label, outcome);

                    let stop = gate && outcome == Outcome::Flag(false);
                    result.push(StepRecord {
                        label: label.clone(),
                        outcome,
                        elapsed,
                    });
                    if stop {
                        tracing::debug!("Gate '{}' closed, skipping remaining steps", label);
                        result.gate(&label);
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!("Step '{}' failed: {}", label, e);
                    self.ui.error(&format!("{}: {}", failure_marker, e));
                    result.fail(&label, e.to_string());
                    return result;
                }
            }
        }

        let show_closing = match result.status() {
            RunStatus::Completed => true,
            RunStatus::Gated { .. } => close_when_gated,
            RunStatus::Failed => false,
        };
        if let Some(closing) = closing.filter(|_| show_closing) {
            let line = self.next_line(&marker, &closing);
            self.ui.message(&line);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbeSettings;
    use crate::error::ProbeError;
    use crate::probe::result::Entry;
    use crate::ui::{MockUI, OutputMode};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn ok(label: &str, log: &Rc<RefCell<Vec<String>>>) -> ProbeStep {
        let log = log.clone();
        let name = label.to_string();
        ProbeStep::new(label, format!("{} done", label), move |_| {
            log.borrow_mut().push(name);
            Ok(Outcome::Done)
        })
    }

    fn failing(label: &str) -> ProbeStep {
        ProbeStep::new(label, "never", |_| {
            Err(ProbeError::ModuleLoad {
                name: "x".to_string(),
                message: "broken".to_string(),
            })
        })
    }

    fn ctx(temp: &TempDir) -> ProbeContext {
        ProbeContext::new(temp.path(), ProbeSettings::default())
    }

    #[test]
    fn runs_steps_in_order() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let seq = ProbeSequence::new("t", LineMarker::Plain)
            .step(ok("a", &log))
            .step(ok("b", &log))
            .step(ok("c", &log));

        let mut ui = MockUI::new();
        let result = ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));

        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(result.status(), &RunStatus::Completed);
        assert_eq!(ui.messages(), &["a", "b", "c"]);
        assert_eq!(ui.successes(), &["a done", "b done", "c done"]);
    }

    #[test]
    fn failure_halts_remaining_steps() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let seq = ProbeSequence::new("t", LineMarker::Plain)
            .step(ok("a", &log))
            .step(failing("b"))
            .step(ok("c", &log))
            .failure_marker("Debug error");

        let mut ui = MockUI::new();
        let result = ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));

        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(ui.successes().len(), 1);
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].starts_with("Debug error: "));
        assert!(ui.errors()[0].contains("broken"));
        assert!(!ui.has_message("c"));

        let entries = result.entries();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries.last(), Some(Entry::Failed(f)) if f.label == "b"));
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn success_lines_match_completed_steps_before_failure() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        for k in 0..4 {
            let mut seq = ProbeSequence::new("t", LineMarker::Plain);
            for i in 0..4 {
                seq = if i == k {
                    seq.step(failing(&format!("s{}", i)))
                } else {
                    seq.step(ok(&format!("s{}", i), &log))
                };
            }

            let mut ui = MockUI::new();
            let result = ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));
            assert_eq!(ui.successes().len(), k);
            assert_eq!(result.records().len(), k);
        }
    }

    #[test]
    fn failed_gate_stops_without_failure() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let seq = ProbeSequence::new("t", LineMarker::Plain)
            .step(ProbeStep::exists("Checking", "marker exists", ".env".into()))
            .step(ok("dependent", &log))
            .closing("All working!", false);

        let mut ui = MockUI::new();
        let result = ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));

        assert!(log.borrow().is_empty());
        assert!(ui.errors().is_empty());
        assert_eq!(ui.successes(), &["marker exists: false"]);
        assert!(!ui.has_message("All working!"));
        assert!(result.is_success());
        assert!(matches!(result.status(), RunStatus::Gated { .. }));
    }

    #[test]
    fn closing_shown_after_gate_when_requested() {
        let temp = TempDir::new().unwrap();
        let seq = ProbeSequence::new("t", LineMarker::Plain)
            .step(ProbeStep::exists("Checking", "exists", ".env".into()))
            .closing("All good", true);

        let mut ui = MockUI::new();
        ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));
        assert!(ui.has_message("All good"));
    }

    #[test]
    fn open_gate_continues() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".env"), "").unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let seq = ProbeSequence::new("t", LineMarker::Plain)
            .step(ProbeStep::exists("Checking", "exists", ".env".into()))
            .step(ok("dependent", &log));

        let mut ui = MockUI::new();
        let result = ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));
        assert_eq!(*log.borrow(), vec!["dependent"]);
        assert_eq!(result.status(), &RunStatus::Completed);
    }

    #[test]
    fn closing_not_shown_after_failure() {
        let temp = TempDir::new().unwrap();
        let seq = ProbeSequence::new("t", LineMarker::Plain)
            .step(failing("a"))
            .closing("done", true);

        let mut ui = MockUI::new();
        ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));
        assert!(!ui.has_message("done"));
    }

    #[test]
    fn step_marker_numbers_every_line() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let seq = ProbeSequence::new("t", LineMarker::Step)
            .banner("Starting debug...")
            .step(ok("a", &log))
            .closing("All working!", false);

        let mut ui = MockUI::new();
        ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));

        let lines: Vec<&str> = ui.lines().iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "Step 1: Starting debug...",
                "Step 2: a",
                "Step 3: a done",
                "Step 4: All working!"
            ]
        );
    }

    #[test]
    fn verbose_appends_timing() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let seq = ProbeSequence::new("t", LineMarker::Plain).step(ok("a", &log));

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        ProbeRunner::new(&mut ui).run(seq, &mut ctx(&temp));
        assert!(ui.successes()[0].starts_with("a done ("));
        assert!(ui.successes()[0].ends_with(')'));
    }

    #[test]
    fn markers_apply() {
        assert_eq!(LineMarker::Step.apply(3, "x"), "Step 3: x");
        assert_eq!(LineMarker::Numbered.apply(2, "x"), "2. x");
        assert_eq!(LineMarker::Prefix("Debug: ".into()).apply(9, "x"), "Debug: x");
        assert_eq!(LineMarker::Plain.apply(1, "x"), "x");
    }
}
