//! Template catalog and environment adapters.

pub mod directory;
pub mod memory;

pub use directory::{DirCatalog, DirTemplateSource};
pub use memory::{MemoryCatalog, MemoryTemplateSource};
