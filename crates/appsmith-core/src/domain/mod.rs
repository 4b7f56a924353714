//! Core domain layer for Appsmith.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and rendering concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Rich domain model**: Behavior lives in entities, not services

pub mod config;
pub mod context;
pub mod error;
pub mod operation;

// Re-exports for convenience
pub use config::{
    OverwritePolicy, RunMode, ScaffoldConfig, ScaffoldEndpoint, ScaffoldModule, TemplateType,
};
pub use context::RenderContext;
pub use error::{DomainError, ErrorCategory};
pub use operation::Operation;
