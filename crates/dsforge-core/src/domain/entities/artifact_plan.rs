use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Files a generation run will touch, ready for materialization.
///
/// This is the output of the rendering step. Paths are relative to `root`;
/// the plan contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ArtifactPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<PlannedFile>,
}

/// How a planned file meets whatever is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace any existing content.
    Overwrite,
    /// Append the content as a line unless an identical line is present.
    AppendLine,
    /// Write only when nothing exists at the path yet.
    CreateIfMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
    pub mode: WriteMode,
}

impl ArtifactPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String, mode: WriteMode) {
        self.entries.push(PlannedFile {
            path: path.into(),
            content,
            mode,
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String, mode: WriteMode) -> Self {
        self.add_file(path, content, mode);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path_str = entry.path.display().to_string();
            if entry.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.entries.iter()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&PlannedFile> {
        let path = path.as_ref();
        self.entries.iter().find(|f| f.path == path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
