//! Probe sequence commands.
//!
//! `envprobe debug`, `check`, `prompt`, and `imports` all load settings,
//! build their sequence, and hand it to the runner.

use std::path::{Path, PathBuf};

use crate::config::load_settings;
use crate::error::Result;
use crate::probe::{InputFactory, InputSession, ProbeContext, ProbeRunner, SequenceKind};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs one built-in probe sequence.
pub struct ProbeCommand {
    project_root: PathBuf,
    settings_path: Option<PathBuf>,
    kind: SequenceKind,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(project_root: &Path, settings_path: Option<PathBuf>, kind: SequenceKind) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            settings_path,
            kind,
        }
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Execute with a specific input source for interactive steps.
    pub fn execute_with_input(
        &self,
        ui: &mut dyn UserInterface,
        input: InputFactory,
    ) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            ui.warning(&format!(
                "Project directory {} does not exist",
                self.project_root.display()
            ));
        }

        let settings = load_settings(&self.project_root, self.settings_path.as_deref())?;
        let sequence = self.kind.build(&settings);
        let mut ctx = ProbeContext::new(&self.project_root, settings).with_input(input);

        let result = ProbeRunner::new(ui).run(sequence, &mut ctx);
        tracing::debug!(
            "Sequence '{}' ended with {:?}",
            self.kind.name(),
            result.status()
        );

        if result.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(result.exit_code()))
        }
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with_input(ui, InputSession::stdio_factory())
    }
}
