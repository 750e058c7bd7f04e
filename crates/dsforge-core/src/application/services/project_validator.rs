//! Host project precondition check.
//!
//! Runs before any prompt and never writes.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::{HostFramework, ProjectFilesystem},
    domain::{DomainError, Manifest},
    error::DsforgeResult,
};

/// Confirm `project_root` holds the host's manifest and that the manifest
/// declares the host's keyword.
#[instrument(skip_all, fields(root = %project_root.display(), host = host.name()))]
pub fn validate_project(
    filesystem: &dyn ProjectFilesystem,
    host: &dyn HostFramework,
    project_root: &Path,
) -> DsforgeResult<Manifest> {
    let manifest_path = project_root.join(host.manifest_file());

    if !filesystem.exists(&manifest_path) {
        return Err(DomainError::MissingManifest {
            manifest: host.manifest_file().to_string(),
            dir: project_root.to_path_buf(),
        }
        .into());
    }

    let source = filesystem.read_to_string(&manifest_path)?;
    let manifest = Manifest::parse(&source, &manifest_path)?;
    manifest.require_keyword(host.required_keyword(), &manifest_path)?;

    debug!(
        project = manifest.name.as_deref().unwrap_or("<unnamed>"),
        "Project validated"
    );
    Ok(manifest)
}
