//! Filesystem-backed template catalog.
//!
//! Discovers template environments under a fixed root layout:
//!
//! ```text
//! templates/
//! ├── base/                 ← always present, minimum viable application
//! │   └── {{application.module_name}}/__init__.py.tpl
//! ├── basic/                ← template-type overrides (same logical paths)
//! ├── openapi/
//! └── optional/
//!     ├── endpoints/        ← endpoint templates
//!     └── database/         ← one directory per feature module
//! ```
//!
//! Logical paths are the entries' paths relative to the environment root,
//! normalised to forward slashes, filtered to the template suffix. The path
//! segments themselves may contain template directives; resolution happens
//! later in the render engine, not here.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use appsmith_core::{
    TEMPLATE_SUFFIX,
    application::{
        ApplicationError,
        ports::{EnvironmentKind, TemplateCatalog, TemplateSource},
    },
    error::AppsmithResult,
};

/// Catalog rooted at a `templates/` directory on disk.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
}

impl DirCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn environment_dir(&self, kind: &EnvironmentKind) -> Option<PathBuf> {
        let subdir = match kind {
            EnvironmentKind::Base => PathBuf::from("base"),
            EnvironmentKind::Type(t) => PathBuf::from(t.dir_name()),
            EnvironmentKind::Optional(name) => {
                // Module names come from user input; never let them escape
                // the optional/ subtree.
                if name.contains('/') || name.contains('\\') || name.contains("..") {
                    warn!(module = name.as_str(), "refusing suspicious module name");
                    return None;
                }
                PathBuf::from("optional").join(name)
            }
        };
        Some(self.root.join(subdir))
    }
}

impl TemplateCatalog for DirCatalog {
    fn open(&self, kind: &EnvironmentKind) -> AppsmithResult<Option<Box<dyn TemplateSource>>> {
        let Some(dir) = self.environment_dir(kind) else {
            return Ok(None);
        };

        if !dir.is_dir() {
            debug!(path = %dir.display(), "environment directory absent");
            return Ok(None);
        }

        Ok(Some(Box::new(DirTemplateSource {
            name: kind.name(),
            root: dir,
        })))
    }
}

/// One on-disk template environment.
#[derive(Debug, Clone)]
pub struct DirTemplateSource {
    name: String,
    root: PathBuf,
}

impl DirTemplateSource {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

impl TemplateSource for DirTemplateSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn list_templates(&self) -> AppsmithResult<Vec<String>> {
        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    // Unreadable entries are skipped, not fatal; siblings
                    // still list.
                    warn!(environment = self.name, error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .expect("walkdir yields paths under its root");
            let logical = normalize(relative);
            if logical.ends_with(TEMPLATE_SUFFIX) {
                templates.push(logical);
            }
        }

        templates.sort();
        Ok(templates)
    }

    fn read_template(&self, logical_path: &str) -> AppsmithResult<String> {
        let path = self.root.join(logical_path);
        std::fs::read_to_string(&path).map_err(|_| {
            ApplicationError::TemplateNotFound {
                environment: self.name.clone(),
                logical_path: logical_path.to_string(),
            }
            .into()
        })
    }
}

/// Relative path → logical path: forward slashes on every platform.
fn normalize(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ── tests ─────────────────────────────────────────────────────────────────────
