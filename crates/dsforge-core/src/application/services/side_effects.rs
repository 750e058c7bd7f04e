//! Connector side effects beyond the three generated artifacts.
//!
//! Currently only the embedded store's data file. The chosen location is
//! recorded in the descriptor's `file` setting as `./<path>`.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tracing::{debug, info};

use crate::{
    application::ports::ProjectFilesystem,
    domain::{
        ConnectorDef, DataSourceDescriptor, DomainError, PlannedFile, SideEffect, WriteMode,
        collision::non_colliding_path,
        paths::{project_relative, to_slash},
    },
    error::DsforgeResult,
};

/// Setting holding the data file location.
pub const FILE_SETTING: &str = "file";

/// Initial content of a new data file.
pub fn empty_data_file() -> String {
    let mut content = serde_json::to_string_pretty(&json!({"ids": {}, "models": {}}))
        .unwrap_or_else(|_| String::from(r#"{"ids": {}, "models": {}}"#));
    content.push('\n');
    content
}

/// Plan the connector's side effect, if it has one.
///
/// Returns the descriptor to render (possibly with `file` set) and the
/// data file to create, if any.
pub fn plan_side_effect(
    filesystem: &dyn ProjectFilesystem,
    project_root: &Path,
    descriptor: DataSourceDescriptor,
    def: &ConnectorDef,
) -> DsforgeResult<(DataSourceDescriptor, Option<PlannedFile>)> {
    match def.side_effect {
        SideEffect::None => Ok((descriptor, None)),
        SideEffect::DataFile => plan_data_file(filesystem, project_root, descriptor),
    }
}

fn plan_data_file(
    filesystem: &dyn ProjectFilesystem,
    project_root: &Path,
    descriptor: DataSourceDescriptor,
) -> DsforgeResult<(DataSourceDescriptor, Option<PlannedFile>)> {
    let explicit = match descriptor.setting(FILE_SETTING) {
        None => None,
        Some(Value::String(raw)) => Some(relative_data_path(raw)?),
        Some(other) => {
            return Err(invalid_path(&other.to_string(), "expected a path string").into());
        }
    };

    let (path, planned) = match explicit {
        Some(path) if filesystem.is_dir(&project_root.join(&path)) => {
            return Err(invalid_path(&to_slash(&path), "is a directory, not a data file").into());
        }
        Some(path) if filesystem.exists(&project_root.join(&path)) => {
            info!(path = %path.display(), "Data file already exists, leaving it untouched");
            (path, None)
        }
        Some(path) => {
            let file = new_data_file(&path);
            (path, Some(file))
        }
        None => {
            let candidate = descriptor.names().default_data_file();
            let path = non_colliding_path(&candidate, |p| filesystem.exists(&project_root.join(p)));
            if path != candidate {
                info!(
                    taken = %candidate.display(),
                    chosen = %path.display(),
                    "Default data file exists, using a new name"
                );
            }
            let file = new_data_file(&path);
            (path, Some(file))
        }
    };

    let recorded = format!("./{}", to_slash(&path));
    debug!(file = %recorded, "Data file planned");
    Ok((
        descriptor.with_setting(FILE_SETTING, Value::String(recorded)),
        planned,
    ))
}

fn new_data_file(path: &Path) -> PlannedFile {
    PlannedFile {
        path: path.to_path_buf(),
        content: empty_data_file(),
        mode: WriteMode::CreateIfMissing,
    }
}

/// Normalize a user-supplied data file path to a project-relative one.
fn relative_data_path(raw: &str) -> Result<PathBuf, DomainError> {
    project_relative(raw).map_err(|rejection| invalid_path(raw.trim(), rejection.reason()))
}

fn invalid_path(value: &str, reason: &str) -> DomainError {
    DomainError::InvalidFieldType {
        field: FILE_SETTING.into(),
        expected: "relative path".into(),
        value: value.into(),
        reason: reason.into(),
    }
}
