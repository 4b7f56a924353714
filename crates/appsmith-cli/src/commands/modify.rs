//! Implementation of the `appsmith modify` command.
//!
//! Adds endpoints to an application a previous `create` run generated.  The
//! engine's safety check requires the marker file to be present under the
//! output directory; everything already on disk is left untouched.

use tracing::{info, instrument};

use appsmith_adapters::{LocalFilesystem, SimpleRenderer, StaticPrompt};
use appsmith_core::application::{HookRegistry, Scaffolder};
use appsmith_core::domain::{Operation, RunMode, ScaffoldConfig, ScaffoldEndpoint};

use crate::{
    cli::{GlobalArgs, ModifyArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{
    build_catalog, build_detector, resolve_output_dir, validate_application_name,
    validate_endpoint_names, working_directory,
};

/// Execute the `appsmith modify` command.
#[instrument(skip_all, fields(application = %args.name))]
pub fn execute(
    args: ModifyArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let application = validate_application_name(&args.name)?;
    validate_endpoint_names(&args.endpoints)?;

    let output_dir = resolve_output_dir(args.output.clone());
    let mut scaffold_config = ScaffoldConfig::new(output_dir, application, RunMode::Modify);
    scaffold_config.working_directory = working_directory()?;
    // No -e flags means the application's own endpoint, same as create.
    let operations: Vec<Operation> = if args.endpoints.is_empty() {
        vec![scaffold_config.application.clone()]
    } else {
        args.endpoints.iter().map(|n| Operation::new(n.as_str())).collect()
    };
    scaffold_config.endpoints = operations
        .into_iter()
        .map(|op| match &config.defaults.hostname {
            Some(host) => ScaffoldEndpoint::with_hostname(op, host),
            None => ScaffoldEndpoint::new(op),
        })
        .collect();

    // Modify never prompts and never runs module hooks; existing files are
    // skipped by the engine's reject policy.
    let scaffolder = Scaffolder::new(
        build_catalog(&config),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(build_detector()),
        Box::new(StaticPrompt::always_yes()),
        HookRegistry::new(),
    );

    output.header(&format!("Modifying '{}'...", args.name))?;
    info!(
        application = scaffold_config.application.module_name(),
        endpoints = scaffold_config.endpoints.len(),
        "modify started"
    );

    let report = scaffolder.scaffold(&mut scaffold_config)?;

    output.success(&format!(
        "Added {} file(s) to '{}'",
        report.files_written, args.name
    ))?;
    if report.files_skipped > 0 && !global.quiet {
        output.warning(&format!(
            "{} existing file(s) left untouched",
            report.files_skipped
        ))?;
    }

    Ok(())
}
