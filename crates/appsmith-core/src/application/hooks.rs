//! Feature-module hooks.
//!
//! A module hook is pre-render code a feature module contributes: it runs
//! strictly before that module's templates render and may mutate the shared
//! [`ScaffoldConfig`] (typically by writing computed values into
//! `config.extra`, which templates see under the `module.` binding prefix).
//!
//! Hooks are registered explicitly at build time instead of being discovered
//! and executed from files inside the template tree: the CLI assembles a
//! [`HookRegistry`] at startup and hands it to the scaffolder.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ApplicationError;
use crate::domain::ScaffoldConfig;
use crate::error::AppsmithResult;

/// A named pre-render capability contributed by a feature module.
pub trait ModuleHook: Send + Sync {
    /// The feature module this hook belongs to (matches
    /// `ScaffoldModule::module_name`).
    fn module(&self) -> &str;

    /// Runs before the module's templates render; may mutate the config.
    /// Any error aborts the entire scaffold run unmodified.
    fn on_create(&self, config: &mut ScaffoldConfig) -> AppsmithResult<()>;
}

/// Registry of module hooks, keyed by module name.
///
/// A module may register several hooks; they run in registration order.
/// Modules without hooks are a silent no-op.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Vec<Arc<dyn ModuleHook>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook under its module's name.
    pub fn register(&mut self, hook: Arc<dyn ModuleHook>) {
        self.hooks
            .entry(hook.module().to_string())
            .or_default()
            .push(hook);
    }

    /// Number of modules with at least one hook.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook registered for `module`, in order.
    ///
    /// Failure semantics: the first hook error propagates unmodified and
    /// aborts the run; no recovery, no rollback of files already written.
    pub fn run_hooks(&self, module: &str, config: &mut ScaffoldConfig) -> AppsmithResult<()> {
        let Some(hooks) = self.hooks.get(module) else {
            debug!(module, "no hooks registered");
            return Ok(());
        };

        for hook in hooks {
            info!(module, "running module hook");
            hook.on_create(config).map_err(|e| {
                ApplicationError::HookFailed {
                    module: module.to_string(),
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Operation, RunMode};
    use serde_json::json;

    struct InjectHook;

    impl ModuleHook for InjectHook {
        fn module(&self) -> &str {
            "database"
        }

        fn on_create(&self, config: &mut ScaffoldConfig) -> AppsmithResult<()> {
            config
                .extra
                .insert("database".into(), json!({"url": "sqlite://dev.db"}));
            Ok(())
        }
    }

    struct FailingHook;

    impl ModuleHook for FailingHook {
        fn module(&self) -> &str {
            "broken"
        }

        fn on_create(&self, _config: &mut ScaffoldConfig) -> AppsmithResult<()> {
            Err(ApplicationError::RenderingFailed {
                reason: "boom".into(),
            }
            .into())
        }
    }

    fn config() -> ScaffoldConfig {
        ScaffoldConfig::new("/out", Operation::new("app"), RunMode::Create)
    }

    #[test]
    fn missing_module_is_a_noop() {
        let registry = HookRegistry::new();
        let mut cfg = config();
        registry.run_hooks("database", &mut cfg).unwrap();
        assert!(cfg.extra.is_empty());
    }

    #[test]
    fn hook_mutations_land_in_extra() {
        let mut registry = HookRegistry::new();
        registry.register(Arc::new(InjectHook));

        let mut cfg = config();
        registry.run_hooks("database", &mut cfg).unwrap();
        assert_eq!(
            cfg.extra["database"]["url"],
            json!("sqlite://dev.db")
        );
    }

    #[test]
    fn hook_failure_propagates() {
        let mut registry = HookRegistry::new();
        registry.register(Arc::new(FailingHook));

        let mut cfg = config();
        let err = registry.run_hooks("broken", &mut cfg).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
