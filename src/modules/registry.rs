//! Module registry and definitions.
//!
//! Defines which modules can be acquired by name and how. The registry holds
//! the built-in modules (fs, config, etc.) plus one file-backed module per
//! configured collaborator.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProbeSettings;
use crate::error::{ProbeError, Result};

use super::builtin;

/// What a loader can see while acquiring a module.
pub struct LoadContext<'a> {
    /// Directory the probes run against.
    pub project_root: &'a Path,
    /// Active settings.
    pub settings: &'a ProbeSettings,
}

/// A successfully acquired module and the fields it exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    name: String,
    fields: BTreeMap<String, String>,
}

impl LoadedModule {
    /// Create a module with no exported fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add an exported field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Replace all exported fields.
    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up one exported field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

/// Signature of a built-in loader.
pub type Loader = fn(&LoadContext<'_>) -> Result<LoadedModule>;

/// How a module is acquired.
pub enum ModuleSource {
    /// Resolved by an in-process loader.
    Builtin(Loader),
    /// Resolved by reading a file relative to the project root.
    File(PathBuf),
}

/// A module definition.
pub struct ModuleDef {
    /// Module name (e.g., "config", "logger")
    pub name: String,
    /// One-line description for `envprobe modules`
    pub description: String,
    /// How to acquire it
    pub source: ModuleSource,
}

/// Registry of all acquirable modules, resolved once at startup.
pub struct ModuleRegistry {
    modules: HashMap<String, ModuleDef>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Create a registry with the built-in modules and the collaborators
    /// named in `settings`.
    pub fn with_builtins(settings: &ProbeSettings) -> Self {
        let mut registry = Self::new();

        let builtins: [(&str, &str, Loader); 5] = [
            ("fs", "Project directory is readable", builtin::load_fs),
            ("path", "Project root resolves to a canonical path", builtin::load_path),
            ("url", "Project root converts to a file URL", builtin::load_url),
            ("config", "Configuration unit parsed from the marker file", builtin::load_config),
            ("readline", "Standard input can be acquired", builtin::load_readline),
        ];
        for (name, description, loader) in builtins {
            registry.register(ModuleDef {
                name: name.to_string(),
                description: description.to_string(),
                source: ModuleSource::Builtin(loader),
            });
        }

        for (name, path) in &settings.collaborators {
            registry.register(ModuleDef {
                name: name.clone(),
                description: format!("Collaborator file {}", path.display()),
                source: ModuleSource::File(path.clone()),
            });
        }

        registry
    }

    /// Register a module, replacing any existing one with the same name.
    pub fn register(&mut self, def: ModuleDef) {
        self.modules.insert(def.name.clone(), def);
    }

    /// Look up a module definition.
    pub fn get(&self, name: &str) -> Option<&ModuleDef> {
        self.modules.get(name)
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Acquire a module by name.
    ///
    /// # Errors
    ///
    /// `UnknownModule` if nothing is registered under `name`, otherwise
    /// whatever the module's loader reports.
    pub fn acquire(&self, name: &str, ctx: &LoadContext<'_>) -> Result<LoadedModule> {
        let def = self.get(name).ok_or_else(|| ProbeError::UnknownModule {
            name: name.to_string(),
        })?;

        tracing::debug!("Acquiring module '{}'", name);
        let result = match &def.source {
            ModuleSource::Builtin(loader) => loader(ctx),
            ModuleSource::File(path) => load_file(name, path, ctx),
        };

        if let Err(e) = &result {
            tracing::debug!("Module '{}' failed to load: {}", name, e);
        }
        result
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn load_file(name: &str, path: &Path, ctx: &LoadContext<'_>) -> Result<LoadedModule> {
    let full = ctx.project_root.join(path);
    let bytes = fs::read(&full).map_err(|e| ProbeError::ModuleLoad {
        name: name.to_string(),
        message: format!("{}: {}", full.display(), e),
    })?;

    Ok(LoadedModule::new(name)
        .with_field("path", path.display().to_string())
        .with_field("bytes", bytes.len().to_string()))
}
