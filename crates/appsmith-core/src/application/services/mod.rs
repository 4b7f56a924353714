//! Application services: the scaffold orchestration machinery.

pub mod materializer;
pub mod render;
pub mod scaffolder;

pub use materializer::DirectoryMaterializer;
pub use render::{RenderEngine, RenderOutcome, RenderStats};
pub use scaffolder::{ScaffoldOutcome, ScaffoldReport, Scaffolder};
