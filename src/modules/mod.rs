//! Named module acquisition.
//!
//! Probes acquire modules by name through a [`ModuleRegistry`] built at
//! startup. Acquisition returns either a [`LoadedModule`] carrying exported
//! fields or an error; there is no runtime reflection involved.
//!
//! # Example
//!
//! ```
//! use envprobe::config::ProbeSettings;
//! use envprobe::modules::{LoadContext, ModuleRegistry};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let settings = ProbeSettings::default();
//! let registry = ModuleRegistry::with_builtins(&settings);
//! let ctx = LoadContext { project_root: temp.path(), settings: &settings };
//!
//! assert!(registry.acquire("fs", &ctx).is_ok());
//! assert!(registry.acquire("signal-engine", &ctx).is_err());
//! ```

pub mod builtin;
pub mod registry;

pub use registry::{LoadContext, LoadedModule, Loader, ModuleDef, ModuleRegistry, ModuleSource};
