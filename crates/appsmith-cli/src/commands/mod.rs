//! Command handler implementations.
//!
//! Each submodule owns one subcommand: argument translation, adapter wiring,
//! engine invocation, and result display.  Shared wiring lives in this file.

use std::path::PathBuf;

use appsmith_adapters::{DirCatalog, LocalFilesystem, MarkerProbe, MemoryCatalog};
use appsmith_core::application::ports::TemplateCatalog;
use appsmith_core::domain::Operation;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

pub mod completions;
pub mod create;
pub mod modify;

/// Reserved endpoint name the base templates already provide.
const RESERVED_ENDPOINT: &str = "application";

/// Pick the template catalog: an on-disk tree when configured, the built-in
/// set otherwise.
fn build_catalog(config: &AppConfig) -> Box<dyn TemplateCatalog> {
    match &config.templates.local_path {
        Some(path) => Box::new(DirCatalog::new(path.clone())),
        None => Box::new(MemoryCatalog::with_builtin()),
    }
}

/// Detector over the real filesystem.
fn build_detector() -> MarkerProbe<LocalFilesystem> {
    MarkerProbe::new(LocalFilesystem::new())
}

/// Validate an application name before the engine normalizes it.
///
/// `Operation::new` is infallible, so degenerate names (no alphanumeric
/// content at all) are rejected here instead of deep in the engine.
fn validate_application_name(name: &str) -> CliResult<Operation> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidApplicationName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }

    let operation = Operation::new(name);
    if !operation.module_name().chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidApplicationName {
            name: name.into(),
            reason: "name must contain at least one alphanumeric character".into(),
        });
    }
    Ok(operation)
}

/// Reject endpoint names that collide with the application's own endpoint.
fn validate_endpoint_names(endpoints: &[String]) -> CliResult<()> {
    let reserved = Operation::new(RESERVED_ENDPOINT);
    for name in endpoints {
        if Operation::new(name) == reserved {
            return Err(CliError::ReservedEndpointName { name: name.clone() });
        }
    }
    Ok(())
}

/// Resolve the output directory: `--output` wins, else the current directory.
fn resolve_output_dir(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from("."))
}

/// The directory the tool was invoked from, for the create-mode safety probe.
fn working_directory() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve current directory".into(),
        source: e,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
