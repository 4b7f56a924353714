//! Implementation of the `appsmith create` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldConfig`, wire the
//! adapters, call the core scaffolder, and display results.  No business
//! logic lives here.

use std::str::FromStr;

use tracing::{debug, info, instrument};

use appsmith_adapters::{LocalFilesystem, SimpleRenderer, StaticPrompt, TerminalPrompt};
use appsmith_core::application::{ScaffoldOutcome, Scaffolder};
use appsmith_core::application::ports::UserPrompt;
use appsmith_core::domain::{
    Operation, RunMode, ScaffoldConfig, ScaffoldEndpoint, ScaffoldModule, TemplateType,
};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    hooks::builtin_registry,
    output::OutputManager,
};

use super::{
    build_catalog, build_detector, resolve_output_dir, validate_application_name,
    validate_endpoint_names, working_directory,
};

/// Execute the `appsmith create` command.
///
/// Dispatch sequence:
/// 1. Validate the application name and endpoint names
/// 2. Build the `ScaffoldConfig` from args + loaded config
/// 3. Wire adapters and run the scaffolder
/// 4. Print a summary and next-steps guidance
#[instrument(skip_all, fields(application = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate inputs
    let application = validate_application_name(&args.name)?;
    validate_endpoint_names(&args.endpoints)?;

    // 2. Build the run descriptor
    let mut scaffold_config = build_config(&args, application, &config)?;

    debug!(
        application = scaffold_config.application.module_name(),
        endpoints = scaffold_config.endpoints.len(),
        modules = scaffold_config.modules.len(),
        template_type = ?scaffold_config.template_type,
        "run descriptor built"
    );

    // 3. Wire adapters and run
    let prompt: Box<dyn UserPrompt> = if args.yes || global.quiet {
        Box::new(StaticPrompt::always_yes())
    } else {
        Box::new(TerminalPrompt::new())
    };

    let scaffolder = Scaffolder::new(
        build_catalog(&config),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(build_detector()),
        prompt,
        builtin_registry(),
    );

    output.header(&format!("Creating '{}'...", args.name))?;
    info!(
        application = scaffold_config.application.module_name(),
        output = %scaffold_config.output_directory.display(),
        "scaffold started"
    );

    let report = scaffolder.scaffold(&mut scaffold_config)?;

    // 4. Report the outcome
    if report.outcome == ScaffoldOutcome::Declined {
        output.info("Cancelled, nothing written")?;
        return Ok(());
    }

    output.success(&format!(
        "Application '{}' created ({} files)",
        args.name, report.files_written
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  cd {}",
            scaffold_config.application_root().display()
        ))?;
        output.print(&format!(
            "  appsmith modify {} -e <endpoint>   # add endpoints later",
            args.name
        ))?;
    }

    Ok(())
}

/// Translate CLI arguments into the engine's run descriptor.
fn build_config(
    args: &CreateArgs,
    application: Operation,
    config: &AppConfig,
) -> CliResult<ScaffoldConfig> {
    let output_dir = resolve_output_dir(args.output.clone());
    let mut scaffold_config = ScaffoldConfig::new(output_dir, application, RunMode::Create);
    scaffold_config.working_directory = working_directory()?;

    scaffold_config.template_type = resolve_template_type(args, config)?;

    scaffold_config.modules = args
        .modules
        .iter()
        .map(|m| ScaffoldModule::new(m.as_str()))
        .collect();

    scaffold_config.endpoints = build_endpoints(args, config, &scaffold_config.application);

    Ok(scaffold_config)
}

/// `--template-type` wins; `defaults.template_type` from config is the
/// fallback; neither means base templates only.
fn resolve_template_type(
    args: &CreateArgs,
    config: &AppConfig,
) -> CliResult<Option<TemplateType>> {
    if let Some(arg) = args.template_type {
        return Ok(Some(convert_template_type(arg)));
    }

    match &config.defaults.template_type {
        Some(value) => {
            let parsed = TemplateType::from_str(value).map_err(|e| CliError::ConfigError {
                message: format!("defaults.template_type: {e}"),
                source: Some(Box::new(e)),
            })?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_template_type(arg: crate::cli::TemplateTypeArg) -> TemplateType {
    match arg {
        crate::cli::TemplateTypeArg::Basic => TemplateType::Basic,
        crate::cli::TemplateTypeArg::OpenApi => TemplateType::OpenApi,
    }
}

/// With no `-e` flags the application gets one endpoint named after itself.
fn build_endpoints(
    args: &CreateArgs,
    config: &AppConfig,
    application: &Operation,
) -> Vec<ScaffoldEndpoint> {
    let names: Vec<Operation> = if args.endpoints.is_empty() {
        vec![application.clone()]
    } else {
        args.endpoints.iter().map(|n| Operation::new(n)).collect()
    };

    names
        .into_iter()
        .map(|op| match &config.defaults.hostname {
            Some(host) => ScaffoldEndpoint::with_hostname(op, host),
            None => ScaffoldEndpoint::new(op),
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TemplateTypeArg;
    use std::path::PathBuf;

    fn args(name: &str) -> CreateArgs {
        CreateArgs {
            name: name.into(),
            endpoints: vec![],
            template_type: None,
            modules: vec![],
            output: None,
            yes: true,
        }
    }

    #[test]
    fn no_endpoints_defaults_to_application_itself() {
        let config = AppConfig::default();
        let app = Operation::new("my-shop");
        let endpoints = build_endpoints(&args("my-shop"), &config, &app);
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].operation.module_name(), "my_shop");
    }

    #[test]
    fn explicit_endpoints_suppress_the_default() {
        let mut a = args("my-shop");
        a.endpoints = vec!["products".into(), "orders".into()];
        let endpoints = build_endpoints(&a, &AppConfig::default(), &Operation::new("my-shop"));
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[0].operation.module_name(), "products");
    }

    #[test]
    fn configured_hostname_applies_to_endpoints() {
        let mut config = AppConfig::default();
        config.defaults.hostname = Some("https://api.example.com".into());
        let endpoints = build_endpoints(&args("shop"), &config, &Operation::new("shop"));
        assert_eq!(endpoints[0].hostname, "https://api.example.com");
    }

    #[test]
    fn template_type_flag_wins_over_config() {
        let mut a = args("shop");
        a.template_type = Some(TemplateTypeArg::OpenApi);
        let mut config = AppConfig::default();
        config.defaults.template_type = Some("basic".into());

        let resolved = resolve_template_type(&a, &config).unwrap();
        assert_eq!(resolved, Some(TemplateType::OpenApi));
    }

    #[test]
    fn bad_configured_template_type_is_a_config_error() {
        let mut config = AppConfig::default();
        config.defaults.template_type = Some("graphql".into());

        let err = resolve_template_type(&args("shop"), &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn build_config_carries_modules_and_output() {
        let mut a = args("shop");
        a.modules = vec!["database".into()];
        a.output = Some(PathBuf::from("/srv/apps"));

        let cfg = build_config(&a, Operation::new("shop"), &AppConfig::default()).unwrap();
        assert_eq!(cfg.output_directory, PathBuf::from("/srv/apps"));
        assert_eq!(cfg.modules.len(), 1);
        assert_eq!(cfg.mode, RunMode::Create);
    }
}
