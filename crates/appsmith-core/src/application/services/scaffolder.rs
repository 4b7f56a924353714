//! Scaffolder - main application orchestrator.
//!
//! Sequences one scaffold run:
//! 1. Safety checks via the application detector
//! 2. Create-mode confirmation when the target already exists
//! 3. Module hooks, then the three-phase render pass
//!    (modules → base → template-type overrides → endpoints)
//! 4. Marker file write so later `modify` runs recognise the application
//!
//! Phase ordering is a correctness requirement, not an optimization: later
//! phases are allowed to overwrite earlier phases' output (that is how
//! template-type overrides work).

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

use crate::application::hooks::HookRegistry;
use crate::application::ports::{
    ApplicationDetector, ContentRenderer, EnvironmentKind, Filesystem, TemplateCatalog,
    TemplateSource, UserPrompt,
};
use crate::application::{ApplicationError, RenderEngine, RenderStats};
use crate::domain::{Operation, OverwritePolicy, RenderContext, RunMode, ScaffoldConfig};
use crate::error::AppsmithResult;
use crate::{MARKER_FILE, VERSION};

/// Endpoint name the base set already provides; user endpoints must not
/// collide with it.
const RESERVED_ENDPOINT: &str = "application";

/// Template root holding endpoint templates.
const ENDPOINTS_ENVIRONMENT: &str = "endpoints";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// All phases ran.
    Completed,
    /// The user declined the overwrite confirmation; nothing was written.
    Declined,
}

/// Result of one scaffold run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub outcome: ScaffoldOutcome,
    pub files_written: usize,
    pub files_skipped: usize,
}

impl ScaffoldReport {
    fn declined() -> Self {
        Self {
            outcome: ScaffoldOutcome::Declined,
            files_written: 0,
            files_skipped: 0,
        }
    }

    fn completed(stats: RenderStats) -> Self {
        Self {
            outcome: ScaffoldOutcome::Completed,
            files_written: stats.written,
            files_skipped: stats.skipped,
        }
    }
}

/// Main scaffolding orchestrator.
///
/// Single-threaded and synchronous: one `scaffold()` call is one run, and all
/// shared mutable state (the config the hooks write, the engine's checked
/// directory set) is confined to that call.
pub struct Scaffolder {
    catalog: Box<dyn TemplateCatalog>,
    renderer: Box<dyn ContentRenderer>,
    filesystem: Box<dyn Filesystem>,
    detector: Box<dyn ApplicationDetector>,
    prompt: Box<dyn UserPrompt>,
    hooks: HookRegistry,
}

impl Scaffolder {
    /// Create a new scaffolder with the given adapters.
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        renderer: Box<dyn ContentRenderer>,
        filesystem: Box<dyn Filesystem>,
        detector: Box<dyn ApplicationDetector>,
        prompt: Box<dyn UserPrompt>,
        hooks: HookRegistry,
    ) -> Self {
        Self {
            catalog,
            renderer,
            filesystem,
            detector,
            prompt,
            hooks,
        }
    }

    /// Run one scaffold.
    ///
    /// `config` is mutable because module hooks are allowed to write into
    /// `config.extra` before their module's templates render.
    #[instrument(
        skip_all,
        fields(
            application = %config.application,
            mode = %config.mode,
            output = %config.output_directory.display()
        )
    )]
    pub fn scaffold(&self, config: &mut ScaffoldConfig) -> AppsmithResult<ScaffoldReport> {
        info!("scaffold run started");

        // ── Safety checks (no filesystem writes before this passes) ───────
        let in_parent_directory = self
            .detector
            .detect(&config.output_directory, &config.application);
        let in_application_directory = self
            .detector
            .detect(&config.working_directory, &config.application);

        debug!(
            in_parent_directory,
            in_application_directory, "existing-application probe"
        );

        match config.mode {
            RunMode::Create if in_application_directory => {
                error!("refusing to create inside an existing application's own root");
                return Err(ApplicationError::SafetyViolation {
                    reason: format!(
                        "an application named '{}' already exists here; \
                         'create' must not run inside it",
                        config.application.module_name()
                    ),
                }
                .into());
            }
            RunMode::Modify if !in_parent_directory => {
                error!("modify must target an existing application");
                return Err(ApplicationError::SafetyViolation {
                    reason: format!(
                        "no application named '{}' found under {}; \
                         run 'modify' from its parent directory",
                        config.application.module_name(),
                        config.output_directory.display()
                    ),
                }
                .into());
            }
            _ => {}
        }

        // ── Create-mode overwrite confirmation ────────────────────────────
        if config.mode == RunMode::Create {
            let app_root = config.application_root();
            if self.filesystem.exists(&app_root) {
                let proceed = self.prompt.confirm(&format!(
                    "Directory {} already exists. Continue and overwrite?",
                    app_root.display()
                ))?;
                if !proceed {
                    info!("user declined, nothing written");
                    return Ok(ScaffoldReport::declined());
                }
            }
        }

        let mut engine = RenderEngine::new(self.renderer.as_ref(), self.filesystem.as_ref());
        let mut stats = RenderStats::default();

        match config.mode {
            RunMode::Create => {
                stats.absorb(self.render_modules(&mut engine, config)?);
                stats.absorb(self.render_base(&mut engine, config)?);
                stats.absorb(self.render_type_overrides(&mut engine, config)?);
                self.write_marker(config)?;
                stats.absorb(self.render_endpoints(&mut engine, config)?);
            }
            RunMode::Modify => {
                stats.absorb(self.render_endpoints(&mut engine, config)?);
            }
        }

        info!(
            written = stats.written,
            skipped = stats.skipped,
            "scaffold run completed"
        );
        Ok(ScaffoldReport::completed(stats))
    }

    // -------------------------------------------------------------------------
    // Render phases
    // -------------------------------------------------------------------------

    /// Phase (a): optional feature modules, hooks first, then templates.
    fn render_modules(
        &self,
        engine: &mut RenderEngine<'_>,
        config: &mut ScaffoldConfig,
    ) -> AppsmithResult<RenderStats> {
        let mut stats = RenderStats::default();
        let modules = config.modules.clone();

        for module in &modules {
            // Hooks run strictly before the module's templates; mutations to
            // config.extra are visible through the context snapshot below.
            self.hooks.run_hooks(&module.module_name, config)?;

            let kind = EnvironmentKind::Optional(module.module_name.clone());
            let Some(source) = self.catalog.open(&kind)? else {
                warn!(
                    module = module.module_name,
                    "no template directory for module, skipping"
                );
                continue;
            };

            let ctx = RenderContext::from_config(config);
            let prefix = PathBuf::from(config.application.module_name())
                .join("modules")
                .join(&module.module_name);

            info!(module = module.module_name, "rendering module templates");
            stats.absorb(engine.render_environment(
                source.as_ref(),
                &ctx,
                &config.output_directory,
                Some(&prefix),
                OverwritePolicy::Overwrite,
            )?);
        }
        Ok(stats)
    }

    /// Phase (b): the base set, the minimum viable generated application.
    fn render_base(
        &self,
        engine: &mut RenderEngine<'_>,
        config: &ScaffoldConfig,
    ) -> AppsmithResult<RenderStats> {
        let source = self.open_required(&EnvironmentKind::Base)?;
        let ctx = RenderContext::from_config(config);

        info!("rendering base templates");
        engine.render_environment(
            source.as_ref(),
            &ctx,
            &config.output_directory,
            None,
            OverwritePolicy::Overwrite,
        )
    }

    /// Phase (c): template-type overrides; renders after base so identical
    /// logical paths replace the base output.
    fn render_type_overrides(
        &self,
        engine: &mut RenderEngine<'_>,
        config: &ScaffoldConfig,
    ) -> AppsmithResult<RenderStats> {
        let Some(template_type) = config.template_type else {
            return Ok(RenderStats::default());
        };

        let source = self.open_required(&EnvironmentKind::Type(template_type))?;
        let ctx = RenderContext::from_config(config);

        info!(%template_type, "rendering template-type overrides");
        engine.render_environment(
            source.as_ref(),
            &ctx,
            &config.output_directory,
            None,
            OverwritePolicy::Overwrite,
        )
    }

    /// Phase (d): endpoint templates, once per endpoint.
    ///
    /// Create mode overwrites; modify mode rejects so pre-existing endpoint
    /// files are left untouched and only new ones are added.
    fn render_endpoints(
        &self,
        engine: &mut RenderEngine<'_>,
        config: &ScaffoldConfig,
    ) -> AppsmithResult<RenderStats> {
        let source = self.open_required(&EnvironmentKind::Optional(
            ENDPOINTS_ENVIRONMENT.to_string(),
        ))?;
        let base_ctx = RenderContext::from_config(config);
        let policy = config.mode.overwrite_policy();
        let reserved = Operation::new(RESERVED_ENDPOINT);

        let mut stats = RenderStats::default();
        for endpoint in &config.endpoints {
            if endpoint.operation == reserved {
                warn!(
                    endpoint = endpoint.operation.raw_name(),
                    "endpoint name is reserved, skipping"
                );
                continue;
            }

            let ctx = base_ctx.with_endpoint(endpoint);
            info!(endpoint = endpoint.operation.raw_name(), "rendering endpoint");
            stats.absorb(engine.render_environment(
                source.as_ref(),
                &ctx,
                &config.output_directory,
                None,
                policy,
            )?);
        }
        Ok(stats)
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn open_required(&self, kind: &EnvironmentKind) -> AppsmithResult<Box<dyn TemplateSource>> {
        self.catalog.open(kind)?.ok_or_else(|| {
            ApplicationError::EnvironmentNotFound { name: kind.name() }.into()
        })
    }

    /// Write the marker contract: a version string plus a scaffold flag,
    /// read by the detector on later runs.
    fn write_marker(&self, config: &ScaffoldConfig) -> AppsmithResult<()> {
        let app_root = config.application_root();
        self.filesystem.create_dir_all(&app_root)?;

        let marker: &Path = &app_root.join(MARKER_FILE);
        let content = format!("version = \"{VERSION}\"\nscaffolded = true\n");
        self.filesystem.write_file(marker, &content)?;

        debug!(path = %marker.display(), "marker written");
        Ok(())
    }
}
