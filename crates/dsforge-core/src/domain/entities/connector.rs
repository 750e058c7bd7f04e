use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConnectorName, SettingKind};

/// A setting a connector declares, with the type its input is coerced to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingDef {
    pub name: String,
    pub kind: SettingKind,
    /// Prompt text shown in interactive mode.
    pub message: String,
    #[serde(default)]
    pub required: bool,
    /// Input is masked when prompted.
    #[serde(default)]
    pub secret: bool,
    /// Answer offered when prompted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl SettingDef {
    pub fn new(name: impl Into<String>, kind: SettingKind, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            message: message.into(),
            required: false,
            secret: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Extra work a connector needs beyond the three generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SideEffect {
    #[default]
    None,
    /// Materialize a JSON data file for an embedded file-backed store.
    DataFile,
}

/// Catalog entry describing a connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorDef {
    pub name: ConnectorName,
    pub description: String,
    #[serde(default)]
    pub settings: Vec<SettingDef>,
    #[serde(default)]
    pub side_effect: SideEffect,
}

impl ConnectorDef {
    pub fn new(name: ConnectorName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            settings: Vec::new(),
            side_effect: SideEffect::None,
        }
    }

    /// Definition for a connector the catalog knows nothing about: no
    /// declared settings, so every value passes through as given.
    pub fn generic(name: ConnectorName) -> Self {
        let description = format!("{name} connector");
        Self::new(name, description)
    }

    pub fn with_setting(mut self, setting: SettingDef) -> Self {
        self.settings.push(setting);
        self
    }

    pub fn with_side_effect(mut self, side_effect: SideEffect) -> Self {
        self.side_effect = side_effect;
        self
    }

    pub fn setting(&self, name: &str) -> Option<&SettingDef> {
        self.settings.iter().find(|s| s.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<SettingKind> {
        self.setting(name).map(|s| s.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_declared_settings() {
        let def = ConnectorDef::new(ConnectorName::new("db2").unwrap(), "IBM DB2")
            .with_setting(SettingDef::new("port", SettingKind::Number, "Port:"))
            .with_setting(SettingDef::new("password", SettingKind::String, "Password:").secret());

        assert_eq!(def.kind_of("port"), Some(SettingKind::Number));
        assert!(def.setting("password").is_some_and(|s| s.secret));
        assert_eq!(def.kind_of("url"), None);
    }

    #[test]
    fn generic_connector_declares_nothing() {
        let def = ConnectorDef::generic(ConnectorName::new("kafka").unwrap());
        assert!(def.settings.is_empty());
        assert_eq!(def.side_effect, SideEffect::None);
        assert_eq!(def.description, "kafka connector");
    }

    #[test]
    fn side_effect_serializes_kebab_case() {
        let json = serde_json::to_string(&SideEffect::DataFile).unwrap();
        assert_eq!(json, "\"data-file\"");
    }
}
