//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appsmith",
    bin_name = "appsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f528} Scaffold and grow web applications from templates",
    long_about = "Appsmith generates a ready-to-run application skeleton from \
                  a layered template set, and can later add endpoints to an \
                  application it previously generated.",
    after_help = "EXAMPLES:\n\
        \x20 appsmith create my-shop -e products -e orders\n\
        \x20 appsmith create my-api  -t openapi -m database\n\
        \x20 appsmith modify my-shop -e customers\n\
        \x20 appsmith completions bash > /usr/share/bash-completion/completions/appsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new application.
    #[command(
        visible_alias = "c",
        about = "Scaffold a new application",
        after_help = "EXAMPLES:\n\
            \x20 appsmith create my-shop\n\
            \x20 appsmith create my-shop -e products -e orders\n\
            \x20 appsmith create my-api -t openapi -m database -o ./services"
    )]
    Create(CreateArgs),

    /// Add endpoints to an existing application.
    #[command(
        visible_alias = "m",
        about = "Add endpoints to an existing application",
        after_help = "EXAMPLES:\n\
            \x20 appsmith modify my-shop -e customers\n\
            \x20 appsmith modify my-shop -e invoices -o ./services"
    )]
    Modify(ModifyArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 appsmith completions bash > ~/.local/share/bash-completion/completions/appsmith\n\
            \x20 appsmith completions zsh  > ~/.zfunc/_appsmith\n\
            \x20 appsmith completions fish > ~/.config/fish/completions/appsmith.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `appsmith create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Application name. Normalized internally; `My Shop` becomes the
    /// `my_shop` package.
    #[arg(value_name = "NAME", help = "Application name")]
    pub name: String,

    /// Endpoint names to generate. Repeatable. Defaults to a single
    /// endpoint named after the application.
    #[arg(
        short = 'e',
        long = "endpoint",
        value_name = "NAME",
        help = "Endpoint to generate (repeatable)"
    )]
    pub endpoints: Vec<String>,

    /// Template-type variant layered over the base templates.
    #[arg(
        short = 't',
        long = "template-type",
        value_name = "TYPE",
        value_enum,
        help = "Template-type variant"
    )]
    pub template_type: Option<TemplateTypeArg>,

    /// Optional feature modules to include. Repeatable.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "NAME",
        help = "Feature module to include (repeatable)"
    )]
    pub modules: Vec<String>,

    /// Directory the application is generated under.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt when the target directory exists.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and scaffold immediately"
    )]
    pub yes: bool,
}

// ── modify ────────────────────────────────────────────────────────────────────

/// Arguments for `appsmith modify`.
#[derive(Debug, Args)]
pub struct ModifyArgs {
    /// Name of the existing application.
    #[arg(value_name = "NAME", help = "Application name")]
    pub name: String,

    /// Endpoint names to add. Repeatable; defaults to an endpoint named
    /// after the application when omitted.
    #[arg(
        short = 'e',
        long = "endpoint",
        value_name = "NAME",
        help = "Endpoint to add (repeatable)"
    )]
    pub endpoints: Vec<String>,

    /// Parent directory containing the application.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory of the application (default: current directory)"
    )]
    pub output: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `appsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Template-type variants exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TemplateTypeArg {
    /// Minimal application.
    Basic,
    /// OpenAPI-first application.
    OpenApi,
}

impl std::fmt::Display for TemplateTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::OpenApi => write!(f, "openapi"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
