//! Appsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Appsmith
//! scaffolding engine, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          appsmith-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (Scaffolder, RenderEngine, Hooks)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Catalog, Renderer, Probe)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    appsmith-adapters (Infrastructure)   │
//! │ (LocalFilesystem, DirCatalog, Marker…)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Operation, ScaffoldConfig, Context)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! The adapters (`catalog`, `renderer`, …) come from the companion adapters
//! crate, so the sketch below is illustrative rather than compilable here.
//!
//! ```rust,ignore
//! use appsmith_core::{
//!     application::Scaffolder,
//!     domain::{Operation, RunMode, ScaffoldConfig, ScaffoldEndpoint},
//! };
//!
//! // 1. Describe the run
//! let mut config = ScaffoldConfig::new("./out", Operation::new("my app"), RunMode::Create);
//! config.endpoints.push(ScaffoldEndpoint::new(Operation::new("widgets")));
//!
//! // 2. Drive the orchestrator (with injected adapters)
//! let scaffolder = Scaffolder::new(catalog, renderer, filesystem, detector, prompt, hooks);
//! scaffolder.scaffold(&mut config).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        HookRegistry, ModuleHook, RenderEngine, ScaffoldOutcome, ScaffoldReport, Scaffolder,
        ports::{
            ApplicationDetector, ContentRenderer, EnvironmentKind, Filesystem, TemplateCatalog,
            TemplateSource, UserPrompt,
        },
    };
    pub use crate::domain::{
        Operation, OverwritePolicy, RenderContext, RunMode, ScaffoldConfig, ScaffoldEndpoint,
        ScaffoldModule, TemplateType,
    };
    pub use crate::error::{AppsmithError, AppsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the scaffold marker a generated application carries.
///
/// Written at the end of a `create` run; read by the application detector on
/// later runs. See [`domain::ScaffoldConfig`] and the detector port.
pub const MARKER_FILE: &str = ".appsmith.toml";

/// Suffix that identifies a file in a template environment as a template.
pub const TEMPLATE_SUFFIX: &str = ".tpl";

/// Reserved logical name that hands rendering control to the template itself.
pub const META_TEMPLATE: &str = "__meta__.tpl";
