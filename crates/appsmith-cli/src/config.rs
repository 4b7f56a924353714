//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `APPSMITH_*` environment variables (e.g. `APPSMITH_OUTPUT__NO_COLOR`)
//! 3. Config file (`--config` path, or the default location if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for scaffold runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template type used when `--template-type` is not given.
    pub template_type: Option<String>,
    /// Hostname stamped into generated endpoint modules.
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding on-disk template environments.  When unset the
    /// built-in template set is used.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then `APPSMITH_*` env vars.
    ///
    /// `config_file` is the path the user passed via `--config`; passing a
    /// nonexistent explicit path is an error, while a missing default-location
    /// file is silently skipped.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.as_path()));
            }
            None => {
                builder = builder.add_source(
                    config::File::from(Self::config_path()).required(false),
                );
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("APPSMITH")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = builder.build()?.try_deserialize()?;
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.appsmith-config.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "appsmith", "appsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".appsmith-config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_has_no_local_template_path() {
        assert!(AppConfig::default().templates.local_path.is_none());
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
