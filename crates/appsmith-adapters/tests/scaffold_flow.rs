//! End-to-end scaffold runs through the in-memory adapters.

use std::path::Path;
use std::sync::Arc;

use appsmith_adapters::{MarkerProbe, MemoryCatalog, MemoryFilesystem, SimpleRenderer, StaticPrompt};
use appsmith_core::{
    application::{HookRegistry, ModuleHook, ScaffoldOutcome, Scaffolder, ports::Filesystem as _},
    domain::{
        Operation, RunMode, ScaffoldConfig, ScaffoldEndpoint, ScaffoldModule, TemplateType,
    },
    error::AppsmithResult,
};
use serde_json::json;

fn scaffolder(fs: &MemoryFilesystem, prompt: StaticPrompt, hooks: HookRegistry) -> Scaffolder {
    Scaffolder::new(
        Box::new(MemoryCatalog::with_builtin()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
        Box::new(MarkerProbe::new(fs.clone())),
        Box::new(prompt),
        hooks,
    )
}

fn create_config(name: &str) -> ScaffoldConfig {
    let application = Operation::new(name);
    let mut config = ScaffoldConfig::new("/srv/apps", application.clone(), RunMode::Create);
    config.working_directory = "/work".into();
    config.endpoints.push(ScaffoldEndpoint::new(application));
    config
}

// ── create mode ───────────────────────────────────────────────────────────────

#[test]
fn create_produces_expected_tree() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    let mut config = create_config("my_app");
    config.template_type = Some(TemplateType::Basic);
    config.endpoints = vec![ScaffoldEndpoint::new(Operation::new("widgets"))];

    let report = engine.scaffold(&mut config).unwrap();
    assert_eq!(report.outcome, ScaffoldOutcome::Completed);

    // Base files under output/<module_name>/.
    assert!(fs.exists(Path::new("/srv/apps/my_app/__init__.py")));
    assert!(fs.exists(Path::new("/srv/apps/my_app/app.py")));

    // Endpoint rendered with the operation's module form.
    let widgets = fs
        .read_file(Path::new("/srv/apps/my_app/endpoints/widgets.py"))
        .unwrap();
    assert!(widgets.contains("widgets"));

    // No modules were configured, so no modules/ subtree exists.
    assert!(
        fs.list_files()
            .iter()
            .all(|p| !p.to_string_lossy().contains("/modules/"))
    );
}

#[test]
fn template_type_overrides_base_output() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    let mut config = create_config("my_app");
    config.template_type = Some(TemplateType::OpenApi);

    engine.scaffold(&mut config).unwrap();

    // app.py exists in base and in the openapi set at the same logical path;
    // the type variant renders after base, so its content wins.
    let app = fs.read_file(Path::new("/srv/apps/my_app/app.py")).unwrap();
    assert!(app.contains("OpenAPI-first"));
    assert!(fs.exists(Path::new("/srv/apps/my_app/openapi.yaml")));
}

#[test]
fn create_writes_marker_for_later_detection() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    engine.scaffold(&mut create_config("my_app")).unwrap();

    let marker = fs
        .read_file(Path::new("/srv/apps/my_app/.appsmith.toml"))
        .unwrap();
    assert!(marker.contains("scaffolded = true"));
    assert!(marker.contains("version = "));
}

#[test]
fn reserved_application_endpoint_is_skipped() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    let mut config = create_config("my_app");
    config.endpoints = vec![
        ScaffoldEndpoint::new(Operation::new("application")),
        ScaffoldEndpoint::new(Operation::new("widgets")),
    ];

    engine.scaffold(&mut config).unwrap();

    // The base set's own application endpoint stays; no per-endpoint render
    // for the reserved name, but "widgets" still renders.
    assert!(fs.exists(Path::new("/srv/apps/my_app/endpoints/widgets.py")));
    let application = fs
        .read_file(Path::new("/srv/apps/my_app/endpoints/application.py"))
        .unwrap();
    assert!(application.contains("Root endpoint"));
}

// ── safety gate ───────────────────────────────────────────────────────────────

#[test]
fn create_inside_existing_application_aborts_without_writing() {
    let fs = MemoryFilesystem::new();
    // The working directory already contains a scaffolded my_app.
    fs.seed_file(
        "/work/my_app/.appsmith.toml",
        "version = \"0.1.0\"\nscaffolded = true\n",
    );
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    let err = engine.scaffold(&mut create_config("my_app")).unwrap_err();
    assert!(err.to_string().contains("Safety check failed"));

    // Only the pre-seeded marker exists; nothing was written.
    assert_eq!(fs.file_count(), 1);
}

#[test]
fn modify_without_existing_application_aborts() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    let mut config = create_config("my_app");
    config.mode = RunMode::Modify;

    let err = engine.scaffold(&mut config).unwrap_err();
    assert!(err.to_string().contains("Safety check failed"));
    assert_eq!(fs.file_count(), 0);
}

#[test]
fn declined_confirmation_ends_cleanly_with_no_writes() {
    let fs = MemoryFilesystem::new();
    // Target application directory already exists on disk.
    fs.seed_file("/srv/apps/my_app/untracked.txt", "keep me");
    let engine = scaffolder(&fs, StaticPrompt::always_no(), HookRegistry::new());

    let report = engine.scaffold(&mut create_config("my_app")).unwrap();
    assert_eq!(report.outcome, ScaffoldOutcome::Declined);
    assert_eq!(report.files_written, 0);
    assert_eq!(fs.file_count(), 1);
}

// ── modify mode ───────────────────────────────────────────────────────────────

/// Config for a modify run over the already-created `my_app`.
fn modified(endpoints: &[&str]) -> ScaffoldConfig {
    let mut config = create_config("my_app");
    config.mode = RunMode::Modify;
    config.endpoints = endpoints
        .iter()
        .map(|e| ScaffoldEndpoint::new(Operation::new(*e)))
        .collect();
    config
}

#[test]
fn modify_adds_new_endpoints_without_touching_existing_files() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());
    engine.scaffold(&mut create_config("my_app")).unwrap();

    // A user edited this endpoint after scaffolding.
    fs.seed_file("/srv/apps/my_app/endpoints/widgets.py", "# hand edited\n");

    let report = engine
        .scaffold(&mut modified(&["widgets", "gadgets"]))
        .unwrap();

    // widgets left byte-for-byte unchanged, gadgets added.
    assert_eq!(
        fs.read_file(Path::new("/srv/apps/my_app/endpoints/widgets.py"))
            .unwrap(),
        "# hand edited\n"
    );
    assert!(fs.exists(Path::new("/srv/apps/my_app/endpoints/gadgets.py")));
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.files_written, 1);
}

#[test]
fn modify_twice_is_idempotent() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());
    engine.scaffold(&mut create_config("my_app")).unwrap();

    engine.scaffold(&mut modified(&["gadgets"])).unwrap();
    let after_first = fs.list_files();
    let gadgets_first = fs
        .read_file(Path::new("/srv/apps/my_app/endpoints/gadgets.py"))
        .unwrap();

    let report = engine.scaffold(&mut modified(&["gadgets"])).unwrap();

    assert_eq!(fs.list_files(), after_first);
    assert_eq!(
        fs.read_file(Path::new("/srv/apps/my_app/endpoints/gadgets.py"))
            .unwrap(),
        gadgets_first
    );
    assert_eq!(report.files_written, 0);
    assert_eq!(report.files_skipped, 1);
}

// ── modules, hooks, and the meta escape hatch ─────────────────────────────────

struct DatabaseHook;

impl ModuleHook for DatabaseHook {
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

#[test]
fn module_hook_feeds_meta_controlled_templates() {
    let fs = MemoryFilesystem::new();
    let mut hooks = HookRegistry::new();
    hooks.register(Arc::new(DatabaseHook));
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), hooks);

    let mut config = create_config("my_app");
    config.modules.push(ScaffoldModule::new("database"));

    engine.scaffold(&mut config).unwrap();

    // The hook injected module.database.url, so the meta manifest enables
    // session.py; the value flows into the rendered content.
    let session = fs
        .read_file(Path::new("/srv/apps/my_app/modules/database/session.py"))
        .unwrap();
    assert!(session.contains("sqlite://dev.db"));
    assert!(fs.exists(Path::new("/srv/apps/my_app/modules/database/__init__.py")));
}

#[test]
fn meta_template_withholds_siblings_without_hook_data() {
    let fs = MemoryFilesystem::new();
    // No hook registered: module.database.url never set.
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    let mut config = create_config("my_app");
    config.modules.push(ScaffoldModule::new("database"));

    engine.scaffold(&mut config).unwrap();

    assert!(fs.exists(Path::new("/srv/apps/my_app/modules/database/__init__.py")));
    // The conditional manifest line dropped, so session.py never rendered.
    assert!(!fs.exists(Path::new("/srv/apps/my_app/modules/database/session.py")));
}

struct ExplodingHook;

impl ModuleHook for ExplodingHook {
    fn module(&self) -> &str {
        "database"
    }

    fn on_create(&self, _config: &mut ScaffoldConfig) -> AppsmithResult<()> {
        Err(appsmith_core::application::ApplicationError::RenderingFailed {
            reason: "hook exploded".into(),
        }
        .into())
    }
}

#[test]
fn hook_failure_aborts_the_run() {
    let fs = MemoryFilesystem::new();
    let mut hooks = HookRegistry::new();
    hooks.register(Arc::new(ExplodingHook));
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), hooks);

    let mut config = create_config("my_app");
    config.modules.push(ScaffoldModule::new("database"));

    let err = engine.scaffold(&mut config).unwrap_err();
    assert!(err.to_string().contains("database"));
    // Modules render first, so the abort happened before base wrote anything.
    assert_eq!(fs.file_count(), 0);
}

#[test]
fn missing_module_template_directory_is_skipped_with_a_warning() {
    let fs = MemoryFilesystem::new();
    let engine = scaffolder(&fs, StaticPrompt::always_yes(), HookRegistry::new());

    let mut config = create_config("my_app");
    config.modules.push(ScaffoldModule::new("no_such_module"));

    // The unknown module is skipped; the rest of the run completes.
    let report = engine.scaffold(&mut config).unwrap();
    assert_eq!(report.outcome, ScaffoldOutcome::Completed);
    assert!(fs.exists(Path::new("/srv/apps/my_app/__init__.py")));
}
