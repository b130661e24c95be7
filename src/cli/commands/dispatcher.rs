//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::probe::SequenceKind;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    settings_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            settings_path: None,
        }
    }

    /// Use an explicit settings file instead of `.envprobe.yml`.
    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn probe(&self, kind: SequenceKind) -> super::probe::ProbeCommand {
        super::probe::ProbeCommand::new(&self.project_root, self.settings_path.clone(), kind)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Debug) => self.probe(SequenceKind::Debug).execute(ui),
            Some(Commands::Check) | None => self.probe(SequenceKind::Check).execute(ui),
            Some(Commands::Prompt) => self.probe(SequenceKind::Prompt).execute(ui),
            Some(Commands::Imports) => self.probe(SequenceKind::Imports).execute(ui),
            Some(Commands::Modules) => {
                let cmd =
                    super::modules::ModulesCommand::new(&self.project_root, self.settings_path.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn no_subcommand_runs_check() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "WALLET_PATH=/w\n").unwrap();
        let cli = Cli::parse_from(["envprobe"]);

        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("Debug: WALLET_PATH: /w"));
    }

    #[test]
    fn invalid_settings_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".envprobe.yml"), "imports: [").unwrap();
        let cli = Cli::parse_from(["envprobe", "imports"]);

        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(temp.path().to_path_buf()).dispatch(&cli, &mut ui);
        assert!(result.is_err());
    }
}
