//! Probe steps and the context they run against.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ProbeSettings;
use crate::error::{ProbeError, Result};
use crate::modules::{LoadContext, LoadedModule, ModuleRegistry};

use super::input::{InputFactory, InputSession};

/// What a step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A value worth showing.
    Value(String),
    /// A yes/no answer (existence checks).
    Flag(bool),
    /// The looked-up value is not set.
    Absent,
    /// Completed with nothing to show.
    Done,
}

impl Outcome {
    /// Render the success line for a step with completion label `report`.
    pub fn render(&self, report: &str) -> String {
        match self {
            Self::Value(v) => format!("{}: {}", report, v),
            Self::Flag(b) => format!("{}: {}", report, b),
            Self::Absent => format!("{}: <unset>", report),
            Self::Done => report.to_string(),
        }
    }
}

/// Everything a step action can reach.
pub struct ProbeContext {
    project_root: PathBuf,
    settings: ProbeSettings,
    registry: ModuleRegistry,
    input: InputFactory,
    loaded: BTreeMap<String, LoadedModule>,
}

impl ProbeContext {
    /// Create a context with the built-in registry and stdio input.
    pub fn new(project_root: impl Into<PathBuf>, settings: ProbeSettings) -> Self {
        let registry = ModuleRegistry::with_builtins(&settings);
        Self {
            project_root: project_root.into(),
            settings,
            registry,
            input: InputSession::stdio_factory(),
            loaded: BTreeMap::new(),
        }
    }

    /// Replace the input source used by interactive steps.
    pub fn with_input(mut self, input: InputFactory) -> Self {
        self.input = input;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// A module acquired earlier in this run.
    pub fn module(&self, name: &str) -> Option<&LoadedModule> {
        self.loaded.get(name)
    }

    /// Acquire `name` through the registry and remember it for later steps.
    pub fn acquire(&mut self, name: &str) -> Result<&LoadedModule> {
        let ctx = LoadContext {
            project_root: &self.project_root,
            settings: &self.settings,
        };
        let module = self.registry.acquire(name, &ctx)?;
        self.loaded.insert(name.to_string(), module);
        Ok(&self.loaded[name])
    }

    /// Open a fresh input session.
    pub fn open_input(&mut self) -> InputSession {
        (self.input)()
    }
}

/// Signature of a step's action.
pub type Action = Box<dyn FnOnce(&mut ProbeContext) -> Result<Outcome>>;

/// One labelled diagnostic action.
///
/// `label` is shown before the action runs; `report` is shown with the
/// outcome after it succeeds.
pub struct ProbeStep {
    label: String,
    report: String,
    gate: bool,
    action: Action,
}

impl ProbeStep {
    /// Create a step from any action.
    pub fn new(
        label: impl Into<String>,
        report: impl Into<String>,
        action: impl FnOnce(&mut ProbeContext) -> Result<Outcome> + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            report: report.into(),
            gate: false,
            action: Box::new(action),
        }
    }

    /// Mark this step as a gate: a `Flag(false)` outcome ends the run
    /// without failure.
    pub fn gate(mut self) -> Self {
        self.gate = true;
        self
    }

    /// Gate on whether `path` (relative to the project root) exists.
    pub fn exists(label: impl Into<String>, report: impl Into<String>, path: PathBuf) -> Self {
        Self::new(label, report, move |ctx| {
            Ok(Outcome::Flag(ctx.project_root().join(&path).exists()))
        })
        .gate()
    }

    /// Acquire a module by name.
    pub fn acquire(label: impl Into<String>, report: impl Into<String>, module: &str) -> Self {
        let module = module.to_string();
        Self::new(label, report, move |ctx| {
            ctx.acquire(&module)?;
            Ok(Outcome::Done)
        })
    }

    /// Report one field of a module acquired by an earlier step.
    pub fn field(
        label: impl Into<String>,
        report: impl Into<String>,
        module: &str,
        field: &str,
    ) -> Self {
        let module = module.to_string();
        let field = field.to_string();
        Self::new(label, report, move |ctx| {
            let loaded = ctx
                .module(&module)
                .ok_or_else(|| ProbeError::ModuleNotLoaded {
                    name: module.clone(),
                })?;
            Ok(match loaded.field(&field) {
                Some(v) => Outcome::Value(v.to_string()),
                None => Outcome::Absent,
            })
        })
    }

    /// Ask one question on a fresh input session and report the answer.
    /// The session is released before the step returns, on every path.
    pub fn ask(label: impl Into<String>, report: impl Into<String>, question: &str) -> Self {
        let question = question.to_string();
        Self::new(label, report, move |ctx| {
            let answer = ctx.open_input().scoped(|session| session.ask(&question))?;
            Ok(Outcome::Value(answer))
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn is_gate(&self) -> bool {
        self.gate
    }

    /// Run the action. Consumes the step.
    pub fn run(self, ctx: &mut ProbeContext) -> Result<Outcome> {
        (self.action)(ctx)
    }
}

impl fmt::Debug for ProbeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeStep")
            .field("label", &self.label)
            .field("report", &self.report)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
