//! Built-in module hooks.
//!
//! The hook registry handed to the scaffolder is assembled here, at startup,
//! from capabilities compiled into the binary.  Nothing in the template tree
//! is ever executed.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use appsmith_core::application::{HookRegistry, ModuleHook};
use appsmith_core::domain::ScaffoldConfig;
use appsmith_core::error::AppsmithResult;

/// Hook for the `database` feature module.
///
/// Computes a development database URL for the application and publishes it
/// to the templates as `module.database.url`, which the module's meta
/// template uses to decide whether session wiring is generated.
pub struct DatabaseHook;

impl ModuleHook for DatabaseHook {
    fn module(&self) -> &str {
        "database"
    }

    fn on_create(&self, config: &mut ScaffoldConfig) -> AppsmithResult<()> {
        let url = std::env::var("APPSMITH_DATABASE_URL")
            .unwrap_or_else(|_| format!("sqlite:///{}.db", config.application.module_name()));

        debug!(url, "database hook resolved URL");
        config.extra.insert("database".into(), json!({ "url": url }));
        Ok(())
    }
}

/// The registry of hooks this binary ships with.
pub fn builtin_registry() -> HookRegistry {
    let mut registry = HookRegistry::new();
    registry.register(Arc::new(DatabaseHook));
    registry
}
