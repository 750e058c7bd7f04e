//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `dsforge-adapters` and the CLI implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `ProjectFilesystem`: reads and writes inside the host project
//!   - `HostFramework`: manifest convention and generated-code vocabulary
//!   - `ArtifactRenderer`: descriptor to artifact plan
//!   - `ConnectorCatalog`: connector definitions
//!   - `Prompter`: interactive input

pub mod output;

pub use output::{
    ArtifactRenderer, ConnectorCatalog, HostFramework, ProjectFilesystem, Prompt, Prompter,
};

#[cfg(test)]
pub use output::{MockConnectorCatalog, MockPrompter};
