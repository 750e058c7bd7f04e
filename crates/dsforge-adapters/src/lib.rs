//! Infrastructure adapters for dsforge.
//!
//! This crate implements the ports defined in `dsforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod host;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::{CatalogFileError, InMemoryCatalog};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use host::LoopBackFramework;
pub use renderer::TypeScriptRenderer;
