//! Connector catalog files.
//!
//! # Format
//!
//! An object keyed by connector name, in JSON (`connectors.json`) or TOML
//! (any other extension ending in `.toml`):
//!
//! ```json
//! {
//!   "mysql": {
//!     "description": "MySQL",
//!     "settings": {
//!       "host": {"type": "string", "description": "Host", "default": "localhost"},
//!       "port": {"type": "number", "required": true},
//!       "password": {"type": "password"}
//!     }
//!   },
//!   "sqlite3": {
//!     "description": "SQLite",
//!     "sideEffect": "data-file",
//!     "settings": {"file": {"type": "string"}}
//!   }
//! }
//! ```
//!
//! Settings keep file order in JSON. `password`-typed settings are masked
//! when prompted, and `default` is offered as the prompt's answer.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use dsforge_core::domain::{ConnectorDef, ConnectorName, SettingDef, SettingKind, SideEffect};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogFileError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{}: expected an object keyed by connector name", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("{}: connector '{name}': {reason}", .path.display())]
    Entry {
        path: PathBuf,
        name: String,
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryRecord {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    settings: Map<String, Value>,
    #[serde(default)]
    side_effect: SideEffect,
}

#[derive(Debug, Deserialize)]
struct SettingRecord {
    #[serde(rename = "type", default = "default_type")]
    kind: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    secret: Option<bool>,
    #[serde(default)]
    default: Option<Value>,
}

fn default_type() -> String {
    "string".into()
}

/// Read a catalog file, choosing the parser by extension.
pub fn load_catalog_file(path: &Path) -> Result<Vec<ConnectorDef>, CatalogFileError> {
    let source = fs::read_to_string(path).map_err(|source| CatalogFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let value = if is_toml {
        let table: toml::Value = toml::from_str(&source).map_err(|source| CatalogFileError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_value(table).map_err(|source| CatalogFileError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_json::from_str(&source).map_err(|source| CatalogFileError::Json {
            path: path.to_path_buf(),
            source,
        })?
    };

    parse_catalog(value, path)
}

/// Convert a parsed catalog document into connector definitions.
pub fn parse_catalog(value: Value, path: &Path) -> Result<Vec<ConnectorDef>, CatalogFileError> {
    let Value::Object(entries) = value else {
        return Err(CatalogFileError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    entries
        .into_iter()
        .map(|(name, entry)| {
            let entry_error = |reason: String| CatalogFileError::Entry {
                path: path.to_path_buf(),
                name: name.clone(),
                reason,
            };

            let connector = ConnectorName::new(&name).map_err(|e| entry_error(e.to_string()))?;
            let record: EntryRecord =
                serde_json::from_value(entry).map_err(|e| entry_error(e.to_string()))?;

            let mut def = ConnectorDef::new(
                connector,
                record
                    .description
                    .unwrap_or_else(|| format!("{name} connector")),
            )
            .with_side_effect(record.side_effect);

            for (key, raw) in record.settings {
                let setting: SettingRecord = serde_json::from_value(raw)
                    .map_err(|e| entry_error(format!("setting '{key}': {e}")))?;
                def = def.with_setting(to_setting_def(key, setting).map_err(entry_error)?);
            }
            Ok(def)
        })
        .collect()
}

fn to_setting_def(name: String, record: SettingRecord) -> Result<SettingDef, String> {
    let kind: SettingKind = record
        .kind
        .parse()
        .map_err(|e: dsforge_core::domain::DomainError| format!("setting '{name}': {e}"))?;
    let masked = record
        .secret
        .unwrap_or_else(|| record.kind.eq_ignore_ascii_case("password"));
    let message = match record.description {
        Some(description) => format!("{description}:"),
        None => format!("{name}:"),
    };

    let mut def = SettingDef::new(name, kind, message);
    def.required = record.required;
    def.secret = masked;
    def.default = match record.default {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    };
    Ok(def)
}
