//! Outcome record of one probe run.

use std::time::Duration;

use super::step::Outcome;

/// A step that completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Label shown before the step ran.
    pub label: String,
    /// What the step produced.
    pub outcome: Outcome,
    /// Time spent in the step's action.
    pub elapsed: Duration,
}

/// The step that stopped the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub label: String,
    pub description: String,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Every step ran.
    Completed,
    /// A gate step reported `false`; later steps were skipped on purpose.
    Gated { label: String },
    /// A step failed; later steps were skipped.
    Failed,
}

/// One entry of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Completed(&'a StepRecord),
    Failed(&'a StepFailure),
}

/// Ordered record of what one run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    records: Vec<StepRecord>,
    failure: Option<StepFailure>,
    status: RunStatus,
}

impl RunResult {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            failure: None,
            status: RunStatus::Completed,
        }
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        debug_assert!(self.failure.is_none(), "no step may run after a failure");
        self.records.push(record);
    }

    pub(crate) fn gate(&mut self, label: &str) {
        self.status = RunStatus::Gated {
            label: label.to_string(),
        };
    }

    pub(crate) fn fail(&mut self, label: &str, description: String) {
        self.failure = Some(StepFailure {
            label: label.to_string(),
            description,
        });
        self.status = RunStatus::Failed;
    }

    /// Completed steps, in order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        self.failure.as_ref()
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// True unless a step failed. A gated run is a success.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Process exit code for this run: 0 on success, 1 on failure.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// All entries in order; a failure, if any, is always last.
    pub fn entries(&self) -> Vec<Entry<'_>> {
        self.records
            .iter()
            .map(Entry::Completed)
            .chain(self.failure.iter().map(Entry::Failed))
            .collect()
    }
}
