//! In-memory connector catalog with built-in connectors.

use std::{
    collections::BTreeMap,
    path::Path,
    sync::{Arc, RwLock},
};

use dsforge_core::{
    application::{ApplicationError, ports::ConnectorCatalog},
    domain::{ConnectorDef, ConnectorName},
    error::DsforgeResult,
};
use tracing::{debug, instrument};

use crate::catalog::{builtin, file::load_catalog_file};

/// Thread-safe in-memory catalog. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<BTreeMap<ConnectorName, ConnectorDef>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in connectors loaded.
    pub fn with_builtin() -> DsforgeResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    pub fn load_builtin(&self) -> DsforgeResult<()> {
        for def in builtin::all_connectors()? {
            self.insert(def)?;
        }
        Ok(())
    }

    /// Merge definitions from a `connectors.json` or `connectors.toml` file.
    /// Entries replace built-ins of the same name.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load_file(&self, path: &Path) -> DsforgeResult<usize> {
        let defs = load_catalog_file(path).map_err(|e| ApplicationError::CatalogError {
            reason: e.to_string(),
        })?;
        let count = defs.len();
        for def in defs {
            self.insert(def)?;
        }
        debug!(count, total = self.count()?, "Connector definitions loaded");
        Ok(count)
    }

    /// Number of known connectors.
    pub fn count(&self) -> DsforgeResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.len())
    }
}

impl ConnectorCatalog for InMemoryCatalog {
    fn get(&self, name: &ConnectorName) -> DsforgeResult<Option<ConnectorDef>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(name).cloned())
    }

    fn list(&self) -> DsforgeResult<Vec<ConnectorDef>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.values().cloned().collect())
    }

    fn insert(&self, def: ConnectorDef) -> DsforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(def.name.clone(), def);
        Ok(())
    }
}
