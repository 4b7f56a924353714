//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold engine needs from external systems.
//! The `appsmith-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Operation, RenderContext, TemplateType};
use crate::error::AppsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `appsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `appsmith_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent; an
    /// already-existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> AppsmithResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> AppsmithResult<()>;

    /// Read a file's content.
    fn read_file(&self, path: &Path) -> AppsmithResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Which template root an environment is built from.
///
/// Maps onto the fixed source layout:
/// `templates/base/**`, `templates/<template_type>/**`,
/// `templates/optional/<name>/**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentKind {
    /// The always-present minimum viable application.
    Base,
    /// Overrides layered on top of base, same logical paths allowed.
    Type(TemplateType),
    /// An optional subtree: `endpoints`, or a feature module's name.
    Optional(String),
}

impl EnvironmentKind {
    /// Human-readable environment name used in logs and errors.
    pub fn name(&self) -> String {
        match self {
            Self::Base => "base".to_string(),
            Self::Type(t) => t.dir_name().to_string(),
            Self::Optional(name) => format!("optional/{name}"),
        }
    }
}

/// A named, rooted, listable collection of template sources.
///
/// Implemented by:
/// - `appsmith_adapters::template_source::DirTemplateSource` (walkdir)
/// - `appsmith_adapters::template_source::MemoryTemplateSource` (built-ins, tests)
pub trait TemplateSource: Send + Sync {
    /// The environment's name (for logs and errors).
    fn name(&self) -> &str;

    /// List logical template paths: finite, sorted, restartable, filtered to
    /// entries carrying the template suffix.
    fn list_templates(&self) -> AppsmithResult<Vec<String>>;

    /// Read one template's raw content by logical path.
    fn read_template(&self, logical_path: &str) -> AppsmithResult<String>;
}

/// Port for locating template environments.
pub trait TemplateCatalog: Send + Sync {
    /// Open the environment for a root, or `None` if that root does not
    /// exist (missing optional modules are not an error).
    fn open(&self, kind: &EnvironmentKind) -> AppsmithResult<Option<Box<dyn TemplateSource>>>;
}

/// Port for string rendering through the template engine.
///
/// The same engine renders file *contents* and logical *paths* (path segments
/// embed the same directive syntax), so this is the single seam both stages
/// of the pipeline go through.
pub trait ContentRenderer: Send + Sync {
    /// Substitute context bindings into a template string.
    fn render_str(&self, template: &str, ctx: &RenderContext) -> AppsmithResult<String>;
}

/// Port for detecting a previously-scaffolded application.
///
/// Implemented by `appsmith_adapters::detector::MarkerProbe`, which reads the
/// static marker file a scaffold run leaves behind. Best-effort heuristic:
/// every probe failure collapses to `false`.
pub trait ApplicationDetector: Send + Sync {
    /// Does `candidate_directory` contain an application named by
    /// `application`'s module form?
    fn detect(&self, candidate_directory: &Path, application: &Operation) -> bool;
}

/// Port for interactive confirmation.
pub trait UserPrompt: Send + Sync {
    /// Ask the user a yes/no question. `Ok(false)` means declined.
    fn confirm(&self, message: &str) -> AppsmithResult<bool>;
}
