//! The run descriptor and its value objects.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Operation;
use super::error::DomainError;

/// Which template-type variant overrides the base set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    /// Minimal application without an API description document.
    Basic,
    /// OpenAPI-first variant.
    OpenApi,
}

impl TemplateType {
    /// Directory name under `templates/` holding this variant's overrides.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::OpenApi => "openapi",
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for TemplateType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "openapi" => Ok(Self::OpenApi),
            other => Err(DomainError::UnknownTemplateType {
                value: other.to_string(),
            }),
        }
    }
}

/// Whether the run creates a new application or extends an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Create,
    Modify,
}

impl RunMode {
    /// The overwrite policy every write in this mode uses.
    ///
    /// `create` may clobber earlier phases' output (that is how template-type
    /// overrides work); `modify` must leave pre-existing files untouched.
    pub fn overwrite_policy(&self) -> OverwritePolicy {
        match self {
            Self::Create => OverwritePolicy::Overwrite,
            Self::Modify => OverwritePolicy::Reject,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Modify => f.write_str("modify"),
        }
    }
}

/// Governs whether an existing output file blocks a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace existing files silently.
    Overwrite,
    /// Skip existing files with a warning; never an error.
    Reject,
}

/// One generated API/route module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldEndpoint {
    pub operation: Operation,
    /// Display-only host the generated module documents.
    pub hostname: String,
}

impl ScaffoldEndpoint {
    /// Default local development host used when the caller gives none.
    pub const DEFAULT_HOSTNAME: &'static str = "http://127.0.0.1:8000";

    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            hostname: Self::DEFAULT_HOSTNAME.to_string(),
        }
    }

    pub fn with_hostname(operation: Operation, hostname: impl Into<String>) -> Self {
        Self {
            operation,
            hostname: hostname.into(),
        }
    }
}

/// An optional named feature to include, matched against the template
/// directory `templates/optional/<module_name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldModule {
    pub module_name: String,
}

impl ScaffoldModule {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
        }
    }
}

/// The fully-resolved description of one scaffold run.
///
/// Built once by the CLI layer and treated as the single mutable context for
/// the run: module hooks may write into [`extra`](Self::extra) before their
/// module's templates render, and the templating layer reads the whole
/// structure as key-value bindings (see [`super::RenderContext`]).
/// Execution is strictly sequential, so there are never concurrent writers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Where the generated tree is rooted.
    pub output_directory: PathBuf,
    /// Directory the tool was invoked from; probed by the safety checks.
    pub working_directory: PathBuf,
    /// The application's own operation.
    pub application: Operation,
    /// Template-type variant rendered on top of the base set, if any.
    pub template_type: Option<TemplateType>,
    /// Optional feature modules to include.
    pub modules: Vec<ScaffoldModule>,
    /// Scratch space module hooks may populate; surfaced to templates under
    /// the `module.` binding prefix.
    pub extra: Map<String, Value>,
    /// Endpoints to generate. The CLI layer guarantees at least one.
    pub endpoints: Vec<ScaffoldEndpoint>,
    pub mode: RunMode,
}

impl ScaffoldConfig {
    pub fn new(
        output_directory: impl Into<PathBuf>,
        application: Operation,
        mode: RunMode,
    ) -> Self {
        Self {
            output_directory: output_directory.into(),
            working_directory: PathBuf::from("."),
            application,
            template_type: None,
            modules: Vec::new(),
            extra: Map::new(),
            endpoints: Vec::new(),
            mode,
        }
    }

    /// Root of the generated application:
    /// `output_directory/<application.module_name>`.
    pub fn application_root(&self) -> PathBuf {
        self.output_directory.join(self.application.module_name())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
