//! Infrastructure adapters for Appsmith.
//!
//! This crate implements the ports defined in
//! `appsmith-core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod builtin;
pub mod detector;
pub mod filesystem;
pub mod prompt;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use detector::MarkerProbe;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{StaticPrompt, TerminalPrompt};
pub use renderer::SimpleRenderer;
pub use template_source::{DirCatalog, MemoryCatalog};
