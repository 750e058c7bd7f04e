//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::{ArtifactPlan, ConnectorDef, ConnectorName, DataSourceDescriptor};
use crate::error::DsforgeResult;

/// Port for filesystem access inside the host project.
///
/// Implemented by:
/// - `dsforge_adapters::filesystem::LocalFilesystem` (production)
/// - `dsforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait ProjectFilesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> DsforgeResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DsforgeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> DsforgeResult<()>;
}

/// The host framework a datasource is generated for.
///
/// Generated code only references the framework's injection helper and
/// data-source base class; neither is reimplemented here.
pub trait HostFramework: Send + Sync {
    /// Display name, used in logs.
    fn name(&self) -> &str;

    /// Manifest file expected at the project root.
    fn manifest_file(&self) -> &str;

    /// Keyword the manifest must declare.
    fn required_keyword(&self) -> &str;

    /// Module exporting the injection decorator.
    fn injection_module(&self) -> &str;

    /// Name of the injection decorator.
    fn injection_helper(&self) -> &str;

    /// Module exporting the data-source base abstraction.
    fn base_module(&self) -> &str;

    /// Symbol imported from [`HostFramework::base_module`].
    fn base_import(&self) -> &str;

    /// Fully qualified base class the stub extends.
    fn base_class(&self) -> &str;

    /// Binding key under which a datasource's configuration is injected.
    fn config_binding_key(&self, datasource: &str) -> String;
}

/// Port for rendering a descriptor into files.
pub trait ArtifactRenderer: Send + Sync {
    /// Render the configuration, stub and index entry.
    ///
    /// Paths in the returned plan are relative to `project_root`.
    fn render(
        &self,
        descriptor: &DataSourceDescriptor,
        host: &dyn HostFramework,
        project_root: &Path,
        datasources_dir: &Path,
    ) -> DsforgeResult<ArtifactPlan>;
}

/// Port for connector definitions.
#[cfg_attr(test, mockall::automock)]
pub trait ConnectorCatalog: Send + Sync {
    /// Look up a connector. `Ok(None)` means the catalog does not know it.
    fn get(&self, name: &ConnectorName) -> DsforgeResult<Option<ConnectorDef>>;

    /// All known connectors, sorted by name.
    fn list(&self) -> DsforgeResult<Vec<ConnectorDef>>;

    /// Insert or replace a definition.
    fn insert(&self, def: ConnectorDef) -> DsforgeResult<()>;
}

/// A single question for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub key: String,
    pub message: String,
    pub default: Option<String>,
    pub secret: bool,
}

impl Prompt {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            default: None,
            secret: false,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }
}

/// Port for interactive input.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Whether questions can be asked at all. When `false` the collector
    /// never calls [`Prompter::ask`] or [`Prompter::choose`].
    fn is_interactive(&self) -> bool;

    /// Ask for free text. An empty answer means "leave unset".
    fn ask(&self, prompt: &Prompt) -> DsforgeResult<String>;

    /// Pick one of `items`, returning its index.
    fn choose(&self, message: &str, items: &[String], default: usize) -> DsforgeResult<usize>;
}
