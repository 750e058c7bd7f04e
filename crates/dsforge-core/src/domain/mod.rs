//! Core domain layer for dsforge.
//!
//! Pure logic only: naming, coercion, collision policy and the manifest
//! check. Filesystem access, prompting and rendering sit behind the ports
//! defined in the application layer.

pub mod coercion;
pub mod collision;
pub mod entities;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod paths;
pub mod render_context;
pub mod value_objects;

pub use entities::{
    ArtifactPlan, ConnectorDef, DataSourceDescriptor, DescriptorBuilder, PlannedFile, SettingDef,
    SideEffect, WriteMode,
};
pub use error::{DomainError, ErrorCategory};
pub use manifest::Manifest;
pub use naming::{ArtifactNames, DATASOURCE_SUFFIX, INDEX_FILE, validate_name};
pub use render_context::RenderContext;
pub use value_objects::{ConnectorName, SettingKind};
