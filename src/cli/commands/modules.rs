//! Modules command implementation.
//!
//! The `envprobe modules` command lists every module the probes can acquire.

use std::path::{Path, PathBuf};

use crate::config::load_settings;
use crate::error::Result;
use crate::modules::{ModuleRegistry, ModuleSource};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The modules command implementation.
pub struct ModulesCommand {
    project_root: PathBuf,
    settings_path: Option<PathBuf>,
}

impl ModulesCommand {
    /// Create a new modules command.
    pub fn new(project_root: &Path, settings_path: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            settings_path,
        }
    }
}

impl Command for ModulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.project_root, self.settings_path.as_deref())?;
        let registry = ModuleRegistry::with_builtins(&settings);

        ui.show_header("Modules:");
        for name in registry.names() {
            let Some(def) = registry.get(name) else {
                continue;
            };
            let kind = match def.source {
                ModuleSource::Builtin(_) => "builtin",
                ModuleSource::File(_) => "file",
            };
            let imported = if settings.imports.iter().any(|i| i == name) {
                " [imports]"
            } else {
                ""
            };
            ui.success(&format!(
                "{:<14} {:<8} {}{}",
                name, kind, def.description, imported
            ));
        }

        Ok(CommandResult::success())
    }
}
