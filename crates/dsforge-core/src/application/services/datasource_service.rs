//! DataSource Service - main application orchestrator.
//!
//! Coordinates one generation run:
//! 1. Validate the host project
//! 2. Collect and coerce input
//! 3. Plan the connector side effect
//! 4. Render the artifacts
//! 5. Write to the filesystem
//!
//! Writes are not transactional. A failure part-way through leaves the
//! files already written in place.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{ArtifactRenderer, ConnectorCatalog, HostFramework, ProjectFilesystem, Prompter},
        services::{
            input_collector::{InputCollector, RawInput},
            project_validator::validate_project,
            side_effects::plan_side_effect,
        },
    },
    domain::{
        ArtifactPlan, ConnectorDef, ConnectorName, DataSourceDescriptor, Manifest, PlannedFile,
        WriteMode, paths::project_relative,
    },
    error::{DsforgeError, DsforgeResult},
};

/// Tunables supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Directory, relative to the project root, receiving the artifacts.
    pub datasources_dir: PathBuf,
    /// Connector used when none is given and prompting is off.
    pub default_connector: ConnectorName,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            datasources_dir: PathBuf::from("src/datasources"),
            default_connector: ConnectorName::memory(),
        }
    }
}

impl GeneratorOptions {
    /// The datasources directory, normalized and confined to the project.
    pub fn checked_datasources_dir(&self) -> DsforgeResult<PathBuf> {
        let raw = self.datasources_dir.to_string_lossy();
        project_relative(&raw).map_err(|rejection| DsforgeError::Configuration {
            message: format!("datasources_dir '{raw}' {}", rejection.reason()),
        })
    }
}

/// What happened to a planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Overwritten,
    Appended,
    /// Already in the desired state; nothing written.
    Unchanged,
}

impl FileOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "create",
            Self::Overwritten => "overwrite",
            Self::Appended => "update",
            Self::Unchanged => "identical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub descriptor: DataSourceDescriptor,
    pub project_root: PathBuf,
    pub files: Vec<WrittenFile>,
    /// `true` when nothing was actually written.
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn outcome_of(&self, path: impl AsRef<Path>) -> Option<FileOutcome> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path).map(|f| f.outcome)
    }
}

/// Main generation service.
pub struct DataSourceService {
    filesystem: Box<dyn ProjectFilesystem>,
    renderer: Box<dyn ArtifactRenderer>,
    catalog: Box<dyn ConnectorCatalog>,
    host: Box<dyn HostFramework>,
    options: GeneratorOptions,
}

impl DataSourceService {
    pub fn new(
        filesystem: Box<dyn ProjectFilesystem>,
        renderer: Box<dyn ArtifactRenderer>,
        catalog: Box<dyn ConnectorCatalog>,
        host: Box<dyn HostFramework>,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            catalog,
            host,
            options,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate a datasource into `project_root`.
    #[instrument(skip_all, fields(root = %project_root.as_ref().display()))]
    pub fn generate(
        &self,
        project_root: impl AsRef<Path>,
        input: RawInput,
        prompter: &dyn Prompter,
    ) -> DsforgeResult<GenerationReport> {
        self.run(project_root.as_ref(), input, prompter, false)
    }

    /// Validate, collect and render, but write nothing.
    #[instrument(skip_all, fields(root = %project_root.as_ref().display()))]
    pub fn preview(
        &self,
        project_root: impl AsRef<Path>,
        input: RawInput,
        prompter: &dyn Prompter,
    ) -> DsforgeResult<GenerationReport> {
        self.run(project_root.as_ref(), input, prompter, true)
    }

    pub fn validate_project(&self, project_root: &Path) -> DsforgeResult<Manifest> {
        validate_project(self.filesystem.as_ref(), self.host.as_ref(), project_root)
    }

    pub fn collect(
        &self,
        input: RawInput,
        prompter: &dyn Prompter,
    ) -> DsforgeResult<(DataSourceDescriptor, ConnectorDef)> {
        InputCollector::new(
            self.catalog.as_ref(),
            prompter,
            &self.options.default_connector,
        )
        .collect(input)
    }

    /// Plan every file for `descriptor`. The returned descriptor includes
    /// any setting the side effect recorded.
    pub fn plan(
        &self,
        project_root: &Path,
        descriptor: DataSourceDescriptor,
        def: &ConnectorDef,
    ) -> DsforgeResult<(DataSourceDescriptor, ArtifactPlan)> {
        let datasources_dir = self.options.checked_datasources_dir()?;
        let (descriptor, data_file) =
            plan_side_effect(self.filesystem.as_ref(), project_root, descriptor, def)?;

        let mut plan = self.renderer.render(
            &descriptor,
            self.host.as_ref(),
            project_root,
            &datasources_dir,
        )?;
        if let Some(PlannedFile {
            path,
            content,
            mode,
        }) = data_file
        {
            plan.add_file(path, content, mode);
        }

        plan.validate()?;
        Ok((descriptor, plan))
    }

    /// Materialize `plan`, or only compute outcomes when `dry_run` is set.
    pub fn write(&self, plan: &ArtifactPlan, dry_run: bool) -> DsforgeResult<Vec<WrittenFile>> {
        let mut written = Vec::with_capacity(plan.entry_count());
        for file in plan.files() {
            let outcome = self.write_one(plan.root(), file, dry_run)?;
            written.push(WrittenFile {
                path: file.path.clone(),
                outcome,
            });
        }
        Ok(written)
    }

    /// All connectors the catalog knows.
    pub fn connectors(&self) -> DsforgeResult<Vec<ConnectorDef>> {
        self.catalog.list()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run(
        &self,
        project_root: &Path,
        input: RawInput,
        prompter: &dyn Prompter,
        dry_run: bool,
    ) -> DsforgeResult<GenerationReport> {
        self.validate_project(project_root)?;

        let (descriptor, def) = self.collect(input, prompter)?;
        info!(
            name = descriptor.name(),
            connector = %descriptor.connector(),
            "Generating datasource"
        );

        let (descriptor, plan) = self.plan(project_root, descriptor, &def)?;
        let files = self.write(&plan, dry_run)?;

        if !dry_run {
            info!(files = files.len(), "Datasource generated");
        }
        Ok(GenerationReport {
            descriptor,
            project_root: project_root.to_path_buf(),
            files,
            dry_run,
        })
    }

    fn write_one(&self, root: &Path, file: &PlannedFile, dry_run: bool) -> DsforgeResult<FileOutcome> {
        let path = root.join(&file.path);
        let exists = self.filesystem.exists(&path);

        let (outcome, content) = match file.mode {
            WriteMode::Overwrite => {
                if exists {
                    warn!(path = %file.path.display(), "Overwriting existing file");
                    (FileOutcome::Overwritten, Some(file.content.clone()))
                } else {
                    (FileOutcome::Created, Some(file.content.clone()))
                }
            }
            WriteMode::CreateIfMissing => {
                if exists {
                    (FileOutcome::Unchanged, None)
                } else {
                    (FileOutcome::Created, Some(file.content.clone()))
                }
            }
            WriteMode::AppendLine => {
                let line = file.content.trim_end();
                if exists {
                    let current = self.filesystem.read_to_string(&path)?;
                    if current.lines().any(|l| l.trim_end() == line) {
                        (FileOutcome::Unchanged, None)
                    } else {
                        let mut updated = current;
                        if !updated.is_empty() && !updated.ends_with('\n') {
                            updated.push('\n');
                        }
                        updated.push_str(line);
                        updated.push('\n');
                        (FileOutcome::Appended, Some(updated))
                    }
                } else {
                    (FileOutcome::Created, Some(format!("{line}\n")))
                }
            }
        };

        if let (Some(content), false) = (content, dry_run) {
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &content)?;
        }

        Ok(outcome)
    }
}
