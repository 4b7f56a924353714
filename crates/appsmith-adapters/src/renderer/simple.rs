//! Simple variable substitution renderer.
//!
//! Supports the two directive forms the engine needs:
//!
//! - `{{dotted.key}}` — substituted with the context binding of that name;
//!   unknown keys are left in place so typos stay visible in the output.
//! - `{{#if key}} … {{/if}}` — the block body is kept when the binding is
//!   truthy (present, non-empty, not `"false"`) and dropped otherwise.
//!   Blocks nest.
//!
//! The same renderer serves file contents and logical paths.

use appsmith_core::{
    application::{ApplicationError, ports::ContentRenderer},
    domain::RenderContext,
    error::AppsmithResult,
};
use tracing::instrument;

const IF_OPEN: &str = "{{#if ";
const IF_CLOSE: &str = "{{/if}}";

/// Simple renderer using basic variable substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ContentRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render_str(&self, template: &str, ctx: &RenderContext) -> AppsmithResult<String> {
        let conditioned = resolve_conditionals(template, ctx)?;
        Ok(substitute(&conditioned, ctx))
    }
}

/// Replace every `{{key}}` with its binding. Unknown placeholders survive.
fn substitute(input: &str, ctx: &RenderContext) -> String {
    let mut result = input.to_string();

    // Single-pass replacement. Order doesn't matter for independent variables.
    for (key, value) in ctx.iter() {
        let placeholder = format!("{{{{{key}}}}}");
        result = result.replace(&placeholder, value);
    }

    result
}

/// Strip or keep `{{#if key}} … {{/if}}` blocks, innermost handled by
/// recursion on the retained body.
fn resolve_conditionals(input: &str, ctx: &RenderContext) -> AppsmithResult<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open_at) = rest.find(IF_OPEN) {
        out.push_str(&rest[..open_at]);
        let after_open = &rest[open_at + IF_OPEN.len()..];

        let key_end = after_open.find("}}").ok_or_else(|| unterminated(input))?;
        let key = after_open[..key_end].trim();
        let body_start = &after_open[key_end + 2..];

        // Walk to the matching close, counting nested opens.
        let mut depth = 1usize;
        let mut scan = body_start;
        let mut body_len = 0usize;
        loop {
            let next_open = scan.find(IF_OPEN);
            let next_close = scan.find(IF_CLOSE).ok_or_else(|| unterminated(input))?;

            if next_open.is_some_and(|o| o < next_close) {
                let o = next_open.unwrap();
                depth += 1;
                body_len += o + IF_OPEN.len();
                scan = &scan[o + IF_OPEN.len()..];
            } else {
                depth -= 1;
                if depth == 0 {
                    body_len += next_close;
                    break;
                }
                body_len += next_close + IF_CLOSE.len();
                scan = &scan[next_close + IF_CLOSE.len()..];
            }
        }

        let body = &body_start[..body_len];
        if ctx.is_truthy(key) {
            out.push_str(&resolve_conditionals(body, ctx)?);
        }
        rest = &body_start[body_len + IF_CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

fn unterminated(template: &str) -> appsmith_core::error::AppsmithError {
    ApplicationError::RenderingFailed {
        reason: format!(
            "unterminated conditional block in template starting: {:.60}",
            template
        ),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        let mut c = RenderContext::default();
        c.set("application.module_name", "my_app");
        c.set("operation.module_name", "widgets");
        c.set("template_type", "basic");
        c
    }

    fn render(template: &str) -> String {
        SimpleRenderer::new().render_str(template, &ctx()).unwrap()
    }

    #[test]
    fn substitutes_dotted_keys() {
        assert_eq!(
            render("from {{application.module_name}}.endpoints import {{operation.module_name}}"),
            "from my_app.endpoints import widgets"
        );
    }

    #[test]
    fn unknown_placeholders_survive() {
        assert_eq!(render("{{not.a.key}}"), "{{not.a.key}}");
    }

    #[test]
    fn paths_render_like_content() {
        assert_eq!(
            render("{{application.module_name}}/endpoints/{{operation.module_name}}.py.tpl"),
            "my_app/endpoints/widgets.py.tpl"
        );
    }

    #[test]
    fn truthy_conditional_keeps_body() {
        assert_eq!(
            render("a{{#if template_type}}-{{template_type}}-{{/if}}b"),
            "a-basic-b"
        );
    }

    #[test]
    fn falsy_conditional_drops_body() {
        assert_eq!(render("a{{#if missing}}gone{{/if}}b"), "ab");
    }

    #[test]
    fn conditionals_nest() {
        let t = "{{#if template_type}}outer {{#if missing}}inner{{/if}}end{{/if}}";
        assert_eq!(render(t), "outer end");
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let err = SimpleRenderer::new()
            .render_str("{{#if template_type}}never closed", &ctx())
            .unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }
}
