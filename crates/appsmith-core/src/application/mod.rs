//! Application layer for Appsmith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Scaffolder, RenderEngine)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Hooks**: The feature-module plugin registry
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod hooks;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DirectoryMaterializer, RenderEngine, RenderOutcome, RenderStats, ScaffoldOutcome,
    ScaffoldReport, Scaffolder,
};

// Re-export the hook plugin surface
pub use hooks::{HookRegistry, ModuleHook};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ApplicationDetector, ContentRenderer, EnvironmentKind, Filesystem, TemplateCatalog,
    TemplateSource, UserPrompt,
};

pub use error::ApplicationError;
