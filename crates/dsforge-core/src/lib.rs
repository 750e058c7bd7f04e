//! dsforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the dsforge
//! data-source generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dsforge-cli (CLI)             │
//! │   (argument parsing, prompts, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DataSourceService, InputCollector)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, Catalog, Host,   │
//! │  Prompter)                              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dsforge-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Descriptor, coercion, naming, manifest)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dsforge_core::application::{DataSourceService, GeneratorOptions, RawInput};
//!
//! let service = DataSourceService::new(filesystem, renderer, catalog, host, GeneratorOptions::default());
//! let report = service.generate("./my-app", RawInput::named("db"), &prompter)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DataSourceService, GenerationReport, GeneratorOptions, RawInput,
        ports::{ArtifactRenderer, ConnectorCatalog, HostFramework, ProjectFilesystem, Prompter},
    };
    pub use crate::domain::{
        ArtifactNames, ArtifactPlan, ConnectorDef, ConnectorName, DataSourceDescriptor,
        SettingDef, SettingKind,
    };
    pub use crate::error::{DsforgeError, DsforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
