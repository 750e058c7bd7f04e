//! Project-relative paths.
//!
//! Every file dsforge writes lives under the project root, so user-supplied
//! locations are normalized here before they reach a plan.

use std::path::{Component, Path, PathBuf};

/// Why a path was refused by [`project_relative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRejection {
    Absolute,
    EscapesProject,
    Empty,
}

impl PathRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Absolute => "must be relative to the project root",
            Self::EscapesProject => "cannot point outside the project",
            Self::Empty => "must name a path inside the project",
        }
    }
}

/// Normalize `raw` to a path relative to the project root.
///
/// `.` components are dropped. Absolute paths and any `..` component are
/// rejected, as is a path that normalizes to nothing.
pub fn project_relative(raw: &str) -> Result<PathBuf, PathRejection> {
    let raw = raw.trim();
    if raw.starts_with('/') || raw.starts_with('\\') {
        return Err(PathRejection::Absolute);
    }

    let mut normalized = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => normalized.push(part),
            Component::ParentDir => return Err(PathRejection::EscapesProject),
            Component::RootDir | Component::Prefix(_) => return Err(PathRejection::Absolute),
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(PathRejection::Empty);
    }
    Ok(normalized)
}

/// Render `path` with forward slashes.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
