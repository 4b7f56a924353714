//! The two-stage template rendering pipeline.
//!
//! Paths and contents run through the same template engine: a logical path
//! like `{{application.module_name}}/endpoints/{{operation.module_name}}.py.tpl`
//! carries the same directive syntax as file contents. The pipeline keeps the
//! stages separate — [`RenderEngine::render_path`] resolves the output
//! location, then the content render writes it — so each stage is testable on
//! its own.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::application::ApplicationError;
use crate::application::ports::{ContentRenderer, Filesystem, TemplateSource};
use crate::domain::{OverwritePolicy, RenderContext};
use crate::error::{AppsmithError, AppsmithResult};
use crate::{META_TEMPLATE, TEMPLATE_SUFFIX};

use super::materializer::DirectoryMaterializer;

/// What happened to one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Output file was written.
    Written(PathBuf),
    /// Output file pre-existed under the reject policy; left untouched.
    Skipped(PathBuf),
}

/// Per-phase tally, rolled up into the scaffold report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub written: usize,
    pub skipped: usize,
}

impl RenderStats {
    pub fn absorb(&mut self, other: RenderStats) {
        self.written += other.written;
        self.skipped += other.skipped;
    }

    fn record(&mut self, outcome: &RenderOutcome) {
        match outcome {
            RenderOutcome::Written(_) => self.written += 1,
            RenderOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

/// Renders template environments into the output tree.
///
/// Owns the run-scoped [`DirectoryMaterializer`]; one engine lives exactly as
/// long as one scaffold run.
pub struct RenderEngine<'a> {
    renderer: &'a dyn ContentRenderer,
    filesystem: &'a dyn Filesystem,
    materializer: DirectoryMaterializer,
}

impl<'a> RenderEngine<'a> {
    pub fn new(renderer: &'a dyn ContentRenderer, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            renderer,
            filesystem,
            materializer: DirectoryMaterializer::new(),
        }
    }

    /// Stage one: resolve a logical template path to a relative output path.
    ///
    /// Runs the path string through the engine, then strips the template
    /// suffix.
    pub fn render_path(&self, logical_path: &str, ctx: &RenderContext) -> AppsmithResult<PathBuf> {
        let rendered = self.renderer.render_str(logical_path, ctx)?;
        let stripped = rendered
            .strip_suffix(TEMPLATE_SUFFIX)
            .unwrap_or(rendered.as_str());
        Ok(PathBuf::from(stripped))
    }

    /// Render one template to its output file.
    ///
    /// `directory_prefix` is inserted between `output_root` and the rendered
    /// logical path; module environments use it to land under
    /// `<app>/modules/<module>/` while their logical paths stay plain.
    pub fn render_template(
        &mut self,
        source: &dyn TemplateSource,
        logical_path: &str,
        ctx: &RenderContext,
        output_root: &Path,
        directory_prefix: Option<&Path>,
        policy: OverwritePolicy,
    ) -> AppsmithResult<RenderOutcome> {
        let relative = self.render_path(logical_path, ctx)?;
        let output_path = match directory_prefix {
            Some(prefix) => output_root.join(prefix).join(&relative),
            None => output_root.join(&relative),
        };

        // Modify mode must not clobber: skip with a warning, no error.
        if policy == OverwritePolicy::Reject && self.filesystem.exists(&output_path) {
            warn!(path = %output_path.display(), "output file exists, skipping");
            return Ok(RenderOutcome::Skipped(output_path));
        }

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.materializer.ensure(self.filesystem, parent, policy)?;
            }
        }

        let raw = source.read_template(logical_path)?;
        let content = self.renderer.render_str(&raw, ctx)?;
        self.filesystem.write_file(&output_path, &content)?;

        debug!(
            environment = source.name(),
            template = logical_path,
            path = %output_path.display(),
            "template rendered"
        );
        Ok(RenderOutcome::Written(output_path))
    }

    /// Render every template in an environment.
    ///
    /// A template that fails to resolve is logged and skipped; sibling
    /// templates still attempt to run since they are independent files. Any
    /// other failure stops the phase.
    ///
    /// If the environment contains the reserved meta template, the per-file
    /// loop is not used at all — see [`Self::render_meta`].
    pub fn render_environment(
        &mut self,
        source: &dyn TemplateSource,
        ctx: &RenderContext,
        output_root: &Path,
        directory_prefix: Option<&Path>,
        policy: OverwritePolicy,
    ) -> AppsmithResult<RenderStats> {
        let templates = source.list_templates()?;

        if templates.iter().any(|t| t == META_TEMPLATE) {
            return self.render_meta(source, &templates, ctx, output_root, directory_prefix, policy);
        }

        let mut stats = RenderStats::default();
        for logical in &templates {
            match self.render_template(source, logical, ctx, output_root, directory_prefix, policy)
            {
                Ok(outcome) => stats.record(&outcome),
                Err(AppsmithError::Application(ApplicationError::TemplateNotFound {
                    environment,
                    logical_path,
                })) => {
                    warn!(environment, template = logical_path, "template not found, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            environment = source.name(),
            written = stats.written,
            skipped = stats.skipped,
            "environment rendered"
        );
        Ok(stats)
    }

    /// The meta escape hatch: the environment's meta template takes over
    /// rendering control for modules with non-uniform layouts.
    ///
    /// The meta template is rendered with its siblings' logical names bound
    /// to `meta.templates`, and its *output* is interpreted as a manifest
    /// rather than written to disk: each non-empty, non-`#` line names a
    /// sibling template to render through the normal pipeline. Siblings the
    /// manifest does not name are never rendered.
    fn render_meta(
        &mut self,
        source: &dyn TemplateSource,
        templates: &[String],
        ctx: &RenderContext,
        output_root: &Path,
        directory_prefix: Option<&Path>,
        policy: OverwritePolicy,
    ) -> AppsmithResult<RenderStats> {
        let siblings: Vec<String> = templates
            .iter()
            .filter(|t| *t != META_TEMPLATE)
            .cloned()
            .collect();

        let meta_ctx = ctx.with_meta_templates(&siblings);
        let raw = source.read_template(META_TEMPLATE)?;
        let manifest = self.renderer.render_str(&raw, &meta_ctx)?;

        debug!(
            environment = source.name(),
            siblings = siblings.len(),
            "meta template in control"
        );

        let mut stats = RenderStats::default();
        for line in manifest.lines() {
            let requested = line.trim();
            if requested.is_empty() || requested.starts_with('#') {
                continue;
            }
            if !siblings.iter().any(|s| s == requested) {
                warn!(
                    environment = source.name(),
                    template = requested,
                    "meta manifest names an unknown sibling, skipping"
                );
                continue;
            }
            let outcome = self.render_template(
                source,
                requested,
                &meta_ctx,
                output_root,
                directory_prefix,
                policy,
            )?;
            stats.record(&outcome);
        }

        info!(
            environment = source.name(),
            written = stats.written,
            skipped = stats.skipped,
            "meta-controlled environment rendered"
        );
        Ok(stats)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
