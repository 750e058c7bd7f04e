//! Domain value objects: SettingKind and ConnectorName.
//!
//! These are pure value types with equality-by-value and no identity. They
//! define the types, their string representations, and their `FromStr`
//! parsers. Coercion logic lives in `coercion.rs`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── SettingKind ──────────────────────────────────────────────────────────────

/// Declared type of a connector setting.
///
/// Governs how raw string input is converted before it is serialized into
/// the datasource configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    #[default]
    String,
    Number,
    Boolean,
    Object,
    Array,
    /// Any structured JSON value.
    Json,
}

impl SettingKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Json => "json",
        }
    }

    /// Whether raw input for this kind is parsed as serialized JSON.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Object | Self::Array | Self::Json)
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "password" => Ok(Self::String),
            "number" | "integer" => Ok(Self::Number),
            "boolean" | "bool" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "json" | "any" => Ok(Self::Json),
            other => Err(DomainError::InvalidFieldType {
                field: "type".into(),
                expected: "setting type".into(),
                value: other.into(),
                reason: format!("unknown setting type: {other}"),
            }),
        }
    }
}

// ── ConnectorName ────────────────────────────────────────────────────────────

/// Identifier selecting which backend-specific settings and side effects apply.
///
/// Open-ended: any non-empty identifier is accepted, the catalog decides
/// whether it knows anything more about it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConnectorName(String);

impl ConnectorName {
    /// The embedded file-backed store.
    pub const MEMORY: &'static str = "memory";

    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::InvalidConnector("name cannot be empty".into()));
        }
        if name.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
            return Err(DomainError::InvalidConnector(format!(
                "'{name}' cannot contain whitespace or path separators"
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn memory() -> Self {
        Self(Self::MEMORY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ConnectorName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ConnectorName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConnectorName> for String {
    fn from(value: ConnectorName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_kind_parses_catalog_types() {
        assert_eq!(SettingKind::from_str("number").unwrap(), SettingKind::Number);
        assert_eq!(SettingKind::from_str("Object").unwrap(), SettingKind::Object);
        assert_eq!(SettingKind::from_str("password").unwrap(), SettingKind::String);
        assert!(SettingKind::from_str("uuid").is_err());
    }

    #[test]
    fn structured_kinds() {
        assert!(SettingKind::Object.is_structured());
        assert!(SettingKind::Array.is_structured());
        assert!(SettingKind::Json.is_structured());
        assert!(!SettingKind::Number.is_structured());
    }

    #[test]
    fn connector_name_is_trimmed() {
        let name = ConnectorName::new("  cloudant ").unwrap();
        assert_eq!(name.as_str(), "cloudant");
    }

    #[test]
    fn connector_name_rejects_blank_and_paths() {
        assert!(ConnectorName::new("   ").is_err());
        assert!(ConnectorName::new("../memory").is_err());
        assert!(ConnectorName::new("my connector").is_err());
    }

    #[test]
    fn connector_name_deserializes_from_string() {
        let name: ConnectorName = serde_json::from_str("\"rest\"").unwrap();
        assert_eq!(name, ConnectorName::new("rest").unwrap());
        assert!(serde_json::from_str::<ConnectorName>("\"\"").is_err());
    }
}
