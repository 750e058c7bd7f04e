//! Deterministic names derived from a datasource name.
//!
//! | Input      | File stem  | Class                  | Config variable |
//! |------------|------------|------------------------|-----------------|
//! | `ds`       | `ds`       | `DsDataSource`         | `dsConfig`      |
//! | `MyMongo`  | `my-mongo` | `MyMongoDataSource`    | `myMongoConfig` |
//! | `orders_db`| `orders-db`| `OrdersDbDataSource`   | `ordersDbConfig`|

use std::path::{Path, PathBuf};

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};

use crate::domain::error::DomainError;

/// Suffix of the typed wrapper module.
pub const DATASOURCE_SUFFIX: &str = ".datasource";

/// Barrel file collecting the generated wrapper modules.
pub const INDEX_FILE: &str = "index.ts";

/// Validate a user-supplied datasource name.
///
/// The name ends up in file names, a TypeScript class name and an injection
/// key, so anything that would break one of those is rejected here.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(DomainError::MissingRequiredField { field: "name" });
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(invalid("name cannot contain whitespace"));
    }
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("name must start with a letter"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(invalid(
            "only letters, digits, '-', '_' and '.' are allowed",
        ));
    }
    Ok(())
}

/// Every name a generated artifact needs, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    name: String,
    file_stem: String,
    class_name: String,
    config_var: String,
}

impl ArtifactNames {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            file_stem: name.to_kebab_case(),
            class_name: format!("{}DataSource", name.to_upper_camel_case()),
            config_var: format!("{}Config", name.to_lower_camel_case()),
            name,
        }
    }

    /// The name exactly as the user gave it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased, kebab-case stem used for every generated file.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn config_var(&self) -> &str {
        &self.config_var
    }

    /// `<stem>.datasource`, the module re-exported by the index file.
    pub fn module_name(&self) -> String {
        format!("{}{}", self.file_stem, DATASOURCE_SUFFIX)
    }

    pub fn stub_file(&self) -> String {
        format!("{}.ts", self.module_name())
    }

    pub fn config_file(&self) -> String {
        format!("{}.json", self.module_name())
    }

    /// Default location of an embedded store's data file.
    pub fn default_data_file(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.file_stem, crate::domain::collision::DATA_FILE_SUFFIX))
    }

    pub fn stub_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.stub_file())
    }

    pub fn config_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.config_file())
    }
}
