//! Application layer for dsforge.
//!
//! - **Services**: use case orchestration (`DataSourceService`)
//! - **Ports**: interface definitions for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DataSourceService, FileOutcome, GenerationReport, GeneratorOptions, InputCollector, RawInput,
    WrittenFile,
};

pub use ports::{
    ArtifactRenderer, ConnectorCatalog, HostFramework, ProjectFilesystem, Prompt, Prompter,
};

pub use error::ApplicationError;
