//! Key-value bindings handed to the template engine.

use std::collections::HashMap;

use serde_json::Value;

use super::{ScaffoldConfig, ScaffoldEndpoint};

/// Immutable snapshot of a [`ScaffoldConfig`] as dotted-key bindings.
///
/// Rebuilt from the config at the start of each render phase, so values a
/// module hook wrote into `config.extra` are visible to every template that
/// renders after the hook ran. Transformations return new instances; render
/// phases never mutate a context they were handed.
///
/// ## Binding names
///
/// | Binding | Source |
/// |-------------------------------|----------------------------------------|
/// | `application.raw_name` | `config.application` |
/// | `application.url_path_name` | `config.application` |
/// | `application.module_name` | `config.application` |
/// | `template_type` | `config.template_type` (absent if none)|
/// | `mode` | `config.mode` |
/// | `module.<key>` | `config.extra`, nested maps flattened |
/// | `operation.*` | the endpoint being rendered |
/// | `endpoint.hostname` | the endpoint being rendered |
/// | `meta.templates` | sibling list, meta templates only |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Snapshot the config into bindings.
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        let mut ctx = Self::default();

        ctx.set("application.raw_name", config.application.raw_name());
        ctx.set(
            "application.url_path_name",
            config.application.url_path_name(),
        );
        ctx.set("application.module_name", config.application.module_name());
        ctx.set("mode", config.mode.to_string());
        if let Some(tt) = config.template_type {
            ctx.set("template_type", tt.to_string());
        }

        for (key, value) in &config.extra {
            flatten_into(&mut ctx.variables, &format!("module.{key}"), value);
        }

        ctx
    }

    /// Bindings for one endpoint's render pass, layered over `self`.
    pub fn with_endpoint(&self, endpoint: &ScaffoldEndpoint) -> Self {
        let mut ctx = self.clone();
        ctx.set("operation.raw_name", endpoint.operation.raw_name());
        ctx.set("operation.url_path_name", endpoint.operation.url_path_name());
        ctx.set("operation.module_name", endpoint.operation.module_name());
        ctx.set("endpoint.hostname", &endpoint.hostname);
        ctx
    }

    /// Attach the sibling template list a meta template steers with.
    pub fn with_meta_templates(&self, siblings: &[String]) -> Self {
        let mut ctx = self.clone();
        ctx.set("meta.templates", siblings.join("\n"));
        ctx
    }

    /// Set or replace a binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Look up a binding.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Conditional-block truthiness: present, non-empty, and not `"false"`.
    pub fn is_truthy(&self, key: &str) -> bool {
        match self.get(key) {
            Some(v) => !v.is_empty() && v != "false",
            None => false,
        }
    }

    /// Iterate over all bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Flatten a JSON value into dotted string bindings.
///
/// Scalars stringify; objects recurse with `.` separators; arrays join with
/// newlines so templates can iterate line-wise the same way meta manifests do.
fn flatten_into(out: &mut HashMap<String, String>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten_into(out, &format!("{prefix}.{k}"), v);
            }
        }
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join("\n");
            out.insert(prefix.to_string(), joined);
        }
        other => {
            out.insert(prefix.to_string(), scalar_to_string(other));
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Operation, RunMode, TemplateType};
    use serde_json::json;

    fn config() -> ScaffoldConfig {
        let mut c = ScaffoldConfig::new("/out", Operation::new("My App!"), RunMode::Create);
        c.template_type = Some(TemplateType::Basic);
        c
    }

    #[test]
    fn application_bindings_present() {
        let ctx = RenderContext::from_config(&config());
        assert_eq!(ctx.get("application.module_name"), Some("my_app_"));
        assert_eq!(ctx.get("application.url_path_name"), Some("my app!"));
        assert_eq!(ctx.get("template_type"), Some("basic"));
        assert_eq!(ctx.get("mode"), Some("create"));
    }

    #[test]
    fn endpoint_layering_does_not_leak() {
        let base = RenderContext::from_config(&config());
        let ep = ScaffoldEndpoint::new(Operation::new("widgets"));
        let layered = base.with_endpoint(&ep);

        assert_eq!(layered.get("operation.module_name"), Some("widgets"));
        assert_eq!(
            layered.get("endpoint.hostname"),
            Some(ScaffoldEndpoint::DEFAULT_HOSTNAME)
        );
        // The base snapshot stays untouched.
        assert_eq!(base.get("operation.module_name"), None);
    }

    #[test]
    fn extra_map_is_flattened_under_module_prefix() {
        let mut c = config();
        c.extra
            .insert("database".into(), json!({"url": "sqlite://x", "pool": 5}));
        c.extra.insert("flag".into(), json!(true));

        let ctx = RenderContext::from_config(&c);
        assert_eq!(ctx.get("module.database.url"), Some("sqlite://x"));
        assert_eq!(ctx.get("module.database.pool"), Some("5"));
        assert_eq!(ctx.get("module.flag"), Some("true"));
    }

    #[test]
    fn truthiness_rules() {
        let mut ctx = RenderContext::default();
        ctx.set("yes", "1");
        ctx.set("no", "false");
        ctx.set("empty", "");

        assert!(ctx.is_truthy("yes"));
        assert!(!ctx.is_truthy("no"));
        assert!(!ctx.is_truthy("empty"));
        assert!(!ctx.is_truthy("missing"));
    }

    #[test]
    fn meta_templates_joined_with_newlines() {
        let ctx = RenderContext::default()
            .with_meta_templates(&["a.tpl".to_string(), "b.tpl".to_string()]);
        assert_eq!(ctx.get("meta.templates"), Some("a.tpl\nb.tpl"));
    }
}
