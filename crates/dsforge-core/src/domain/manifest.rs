//! Host project manifest (`package.json`).
//!
//! Only the parts needed for the capability check are modelled; every other
//! field is ignored. The manifest must be a JSON object, but the shape of
//! `name` and `keywords` is not enforced: a non-string name is dropped and
//! non-string keywords are skipped.

use std::path::Path;

use serde_json::Value;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<String>,
    pub keywords: Vec<String>,
}

impl Manifest {
    /// Parse manifest source read from `path`.
    pub fn parse(source: &str, path: &Path) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidManifest {
            path: path.to_path_buf(),
            reason,
        };

        let value: Value = serde_json::from_str(source).map_err(|e| invalid(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(invalid("expected a JSON object".into()));
        };

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let keywords = match fields.get("keywords") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self { name, keywords })
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Fail with `MissingCapability` unless `keyword` is declared.
    pub fn require_keyword(&self, keyword: &str, path: &Path) -> Result<(), DomainError> {
        if self.has_keyword(keyword) {
            Ok(())
        } else {
            Err(DomainError::MissingCapability {
                keyword: keyword.into(),
                manifest: path.to_path_buf(),
            })
        }
    }
}
