//! Built-in module loaders.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use crate::config::EnvFileParser;
use crate::error::{ProbeError, Result};

use super::registry::{LoadContext, LoadedModule};

fn load_error(name: &str, err: impl std::fmt::Display) -> ProbeError {
    ProbeError::ModuleLoad {
        name: name.to_string(),
        message: err.to_string(),
    }
}

/// Project directory can be listed.
pub fn load_fs(ctx: &LoadContext<'_>) -> Result<LoadedModule> {
    let entries = fs::read_dir(ctx.project_root)
        .map_err(|e| load_error("fs", e))?
        .count();

    Ok(LoadedModule::new("fs")
        .with_field("root", ctx.project_root.display().to_string())
        .with_field("entries", entries.to_string()))
}

/// Project root resolves to a canonical path.
pub fn load_path(ctx: &LoadContext<'_>) -> Result<LoadedModule> {
    let canonical = ctx
        .project_root
        .canonicalize()
        .map_err(|e| load_error("path", e))?;

    Ok(LoadedModule::new("path").with_field("canonical", canonical.display().to_string()))
}

/// Project root converts to a `file://` URL.
pub fn load_url(ctx: &LoadContext<'_>) -> Result<LoadedModule> {
    let canonical = ctx
        .project_root
        .canonicalize()
        .map_err(|e| load_error("url", e))?;

    Ok(LoadedModule::new("url").with_field("url", file_url(&canonical)))
}

/// Marker file parses, and defines every required key.
pub fn load_config(ctx: &LoadContext<'_>) -> Result<LoadedModule> {
    let path = ctx.project_root.join(&ctx.settings.marker);
    let vars = EnvFileParser::load(&path).map_err(|e| load_error("config", format!("{:#}", e)))?;

    if let Some(missing) = ctx.settings.required.iter().find(|k| !vars.contains_key(*k)) {
        return Err(ProbeError::MissingField {
            module: "config".to_string(),
            field: missing.clone(),
        });
    }

    tracing::debug!("Config unit defines {} keys", vars.len());
    Ok(LoadedModule::new("config").with_fields(vars))
}

/// Standard input can be acquired.
pub fn load_readline(_ctx: &LoadContext<'_>) -> Result<LoadedModule> {
    let stdin = std::io::stdin();
    Ok(LoadedModule::new("readline").with_field("terminal", stdin.is_terminal().to_string()))
}

/// Build a `file://` URL for an absolute path, percent-encoding bytes that
/// are not allowed in a URL path.
pub fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let mut url = String::from("file://");
    if !raw.starts_with('/') {
        url.push('/');
    }

    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'/'
            | b'-'
            | b'_'
            | b'.'
            | b'~'
            | b':' => url.push(byte as char),
            _ => url.push_str(&format!("%{:02X}", byte)),
        }
    }
    url
}
