//! In-memory template catalog (built-ins and tests).

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, RwLock},
};

use appsmith_core::{
    application::{
        ApplicationError,
        ports::{EnvironmentKind, TemplateCatalog, TemplateSource},
    },
    error::AppsmithResult,
};

/// Thread-safe in-memory catalog of template environments.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    environments: Arc<RwLock<HashMap<String, BTreeMap<String, String>>>>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the built-in template set.
    pub fn with_builtin() -> Self {
        let catalog = Self::new();
        crate::builtin::seed(&catalog);
        catalog
    }

    /// Insert one template into an environment, creating it on first use.
    pub fn insert(
        &self,
        kind: &EnvironmentKind,
        logical_path: impl Into<String>,
        content: impl Into<String>,
    ) {
        let mut environments = self.environments.write().unwrap();
        environments
            .entry(kind.name())
            .or_default()
            .insert(logical_path.into(), content.into());
    }

    /// Number of environments currently held.
    pub fn environment_count(&self) -> usize {
        self.environments.read().unwrap().len()
    }
}

impl TemplateCatalog for MemoryCatalog {
    fn open(&self, kind: &EnvironmentKind) -> AppsmithResult<Option<Box<dyn TemplateSource>>> {
        let environments = self.environments.read().unwrap();
        Ok(environments.get(&kind.name()).map(|templates| {
            Box::new(MemoryTemplateSource {
                name: kind.name(),
                templates: templates.clone(),
            }) as Box<dyn TemplateSource>
        }))
    }
}

/// One in-memory template environment; a snapshot taken at `open` time.
#[derive(Debug, Clone)]
pub struct MemoryTemplateSource {
    name: String,
    templates: BTreeMap<String, String>,
}

impl TemplateSource for MemoryTemplateSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn list_templates(&self) -> AppsmithResult<Vec<String>> {
        // BTreeMap keys iterate sorted, matching the directory source.
        Ok(self.templates.keys().cloned().collect())
    }

    fn read_template(&self, logical_path: &str) -> AppsmithResult<String> {
        self.templates.get(logical_path).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                environment: self.name.clone(),
                logical_path: logical_path.to_string(),
            }
            .into()
        })
    }
}
