//! In-process fakes shared by the service tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactRenderer, ConnectorCatalog, HostFramework, ProjectFilesystem},
    },
    domain::{ArtifactPlan, ConnectorDef, ConnectorName, DataSourceDescriptor, INDEX_FILE, WriteMode},
    error::DsforgeResult,
};

#[derive(Debug, Clone, Default)]
pub struct FakeFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl FakeFs {
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl ProjectFilesystem for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .lock()
            .unwrap()
            .keys()
            .any(|p| p == path || p.starts_with(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .lock()
            .unwrap()
            .keys()
            .any(|p| p != path && p.starts_with(path))
    }

    fn read_to_string(&self, path: &Path) -> DsforgeResult<String> {
        self.read(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn create_dir_all(&self, _path: &Path) -> DsforgeResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> DsforgeResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

pub struct FakeHost;

impl HostFramework for FakeHost {
    fn name(&self) -> &str {
        "fake"
    }
    fn manifest_file(&self) -> &str {
        "package.json"
    }
    fn required_keyword(&self) -> &str {
        "loopback"
    }
    fn injection_module(&self) -> &str {
        "@loopback/core"
    }
    fn injection_helper(&self) -> &str {
        "inject"
    }
    fn base_module(&self) -> &str {
        "@loopback/repository"
    }
    fn base_import(&self) -> &str {
        "juggler"
    }
    fn base_class(&self) -> &str {
        "juggler.DataSource"
    }
    fn config_binding_key(&self, datasource: &str) -> String {
        format!("datasources.config.{datasource}")
    }
}

/// Renders bare-bones artifacts with the real file layout.
pub struct FakeRenderer;

impl ArtifactRenderer for FakeRenderer {
    fn render(
        &self,
        descriptor: &DataSourceDescriptor,
        host: &dyn HostFramework,
        project_root: &Path,
        datasources_dir: &Path,
    ) -> DsforgeResult<ArtifactPlan> {
        let names = descriptor.names();
        let config = serde_json::to_string_pretty(&descriptor.to_config()).unwrap();
        Ok(ArtifactPlan::new(project_root)
            .with_file(
                names.config_path(datasources_dir),
                format!("{config}\n"),
                WriteMode::Overwrite,
            )
            .with_file(
                names.stub_path(datasources_dir),
                format!("export class {} extends {} {{}}\n", names.class_name(), host.base_class()),
                WriteMode::Overwrite,
            )
            .with_file(
                datasources_dir.join(INDEX_FILE),
                format!("export * from './{}';", names.module_name()),
                WriteMode::AppendLine,
            ))
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    defs: Mutex<BTreeMap<ConnectorName, ConnectorDef>>,
}

impl FakeCatalog {
    pub fn with(self, def: ConnectorDef) -> Self {
        self.defs.lock().unwrap().insert(def.name.clone(), def);
        self
    }
}

impl ConnectorCatalog for FakeCatalog {
    fn get(&self, name: &ConnectorName) -> DsforgeResult<Option<ConnectorDef>> {
        Ok(self.defs.lock().unwrap().get(name).cloned())
    }

    fn list(&self) -> DsforgeResult<Vec<ConnectorDef>> {
        Ok(self.defs.lock().unwrap().values().cloned().collect())
    }

    fn insert(&self, def: ConnectorDef) -> DsforgeResult<()> {
        self.defs.lock().unwrap().insert(def.name.clone(), def);
        Ok(())
    }
}
