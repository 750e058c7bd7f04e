use serde_json::{Map, Value};

use crate::domain::{
    error::DomainError,
    naming::{ArtifactNames, validate_name},
    value_objects::ConnectorName,
};

/// In-memory record of a datasource before serialization.
///
/// Immutable once built: [`DataSourceDescriptor::with_setting`] returns a
/// new instance. Settings keep insertion order so the configuration file
/// reads in the order values were collected.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceDescriptor {
    name: String,
    connector: ConnectorName,
    settings: Map<String, Value>,
}

impl DataSourceDescriptor {
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connector(&self) -> &ConnectorName {
        &self.connector
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn names(&self) -> ArtifactNames {
        ArtifactNames::new(self.name.clone())
    }

    /// Return a copy with `key` set, replacing any previous value.
    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !is_reserved(&key) {
            self.settings.insert(key, value);
        }
        self
    }

    /// The flat configuration record: `name`, `connector`, then settings.
    pub fn to_config(&self) -> Value {
        let mut record = Map::new();
        record.insert("name".into(), Value::String(self.name.clone()));
        record.insert(
            "connector".into(),
            Value::String(self.connector.as_str().to_string()),
        );
        for (key, value) in &self.settings {
            record.insert(key.clone(), value.clone());
        }
        Value::Object(record)
    }
}

fn is_reserved(key: &str) -> bool {
    key == "name" || key == "connector"
}

/// Builder for [`DataSourceDescriptor`].
#[derive(Debug, Default)]
pub struct DescriptorBuilder {
    name: Option<String>,
    connector: Option<ConnectorName>,
    settings: Map<String, Value>,
}

impl DescriptorBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn connector(mut self, connector: ConnectorName) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Add a setting. `name` and `connector` are owned by the descriptor
    /// itself and are ignored here.
    pub fn setting(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !is_reserved(&key) {
            self.settings.insert(key, value);
        }
        self
    }

    pub fn build(self) -> Result<DataSourceDescriptor, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        validate_name(&name)?;

        Ok(DataSourceDescriptor {
            name,
            connector: self.connector.unwrap_or_else(ConnectorName::memory),
            settings: self.settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn config_record_is_flat_and_ordered() {
        let descriptor = DataSourceDescriptor::builder()
            .name("ds")
            .connector(ConnectorName::new("db2").unwrap())
            .setting("host", json!("localhost"))
            .setting("port", json!(100))
            .build()
            .unwrap();

        let config = descriptor.to_config();
        assert_eq!(
            config,
            json!({"name": "ds", "connector": "db2", "host": "localhost", "port": 100})
        );

        let keys: Vec<_> = config.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["name", "connector", "host", "port"]);
    }

    #[test]
    fn settings_cannot_override_identity() {
        let descriptor = DataSourceDescriptor::builder()
            .name("ds")
            .setting("name", json!("other"))
            .setting("connector", json!("rest"))
            .build()
            .unwrap();

        assert_eq!(descriptor.to_config(), json!({"name": "ds", "connector": "memory"}));
    }

    #[test]
    fn name_is_required() {
        assert_eq!(
            DataSourceDescriptor::builder().build(),
            Err(DomainError::MissingRequiredField { field: "name" })
        );
    }

    #[test]
    fn with_setting_returns_updated_copy() {
        let base = DataSourceDescriptor::builder().name("memory").build().unwrap();
        let updated = base.clone().with_setting("file", json!("./memory.db.json"));

        assert!(base.setting("file").is_none());
        assert_eq!(updated.setting("file"), Some(&json!("./memory.db.json")));
    }
}
