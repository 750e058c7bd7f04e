//! Built-in connector definitions.
//!
//! Only settings with a non-string type or a masked prompt matter for
//! coercion; the rest are declared so interactive mode asks for them.

use dsforge_core::domain::{
    ConnectorDef, ConnectorName, DomainError, SettingDef, SettingKind, SideEffect,
};

fn string(name: &str) -> SettingDef {
    SettingDef::new(name, SettingKind::String, format!("{name}:"))
}

fn number(name: &str) -> SettingDef {
    SettingDef::new(name, SettingKind::Number, format!("{name}:"))
}

fn password() -> SettingDef {
    SettingDef::new("password", SettingKind::String, "password:").secret()
}

fn connector(name: &str, description: &str) -> Result<ConnectorDef, DomainError> {
    Ok(ConnectorDef::new(ConnectorName::new(name)?, description))
}

/// Connectors shipped with the generator.
pub fn all_connectors() -> Result<Vec<ConnectorDef>, DomainError> {
    Ok(vec![
        connector("memory", "In-memory db")?
            .with_setting(string("localStorage"))
            .with_setting(string("file"))
            .with_side_effect(SideEffect::DataFile),
        connector("cloudant", "IBM Cloudant DB")?
            .with_setting(string("url").required())
            .with_setting(string("database"))
            .with_setting(string("username"))
            .with_setting(password())
            .with_setting(string("modelIndex")),
        connector("db2", "IBM DB2")?
            .with_setting(string("dsn"))
            .with_setting(string("host"))
            .with_setting(number("port"))
            .with_setting(string("user"))
            .with_setting(password())
            .with_setting(string("database"))
            .with_setting(string("schema")),
        connector("rest", "REST services")?
            .with_setting(string("baseURL"))
            .with_setting(SettingDef::new("options", SettingKind::Object, "options:"))
            .with_setting(SettingDef::new("operations", SettingKind::Array, "operations:"))
            .with_setting(SettingDef::new("crud", SettingKind::Boolean, "crud:")),
        connector("mysql", "MySQL")?
            .with_setting(string("url"))
            .with_setting(string("host"))
            .with_setting(number("port"))
            .with_setting(string("user"))
            .with_setting(password())
            .with_setting(string("database")),
        connector("postgresql", "PostgreSQL")?
            .with_setting(string("url"))
            .with_setting(string("host"))
            .with_setting(number("port"))
            .with_setting(string("user"))
            .with_setting(password())
            .with_setting(string("database")),
        connector("mongodb", "MongoDB")?
            .with_setting(string("url"))
            .with_setting(string("host"))
            .with_setting(number("port"))
            .with_setting(string("user"))
            .with_setting(password())
            .with_setting(string("database"))
            .with_setting(SettingDef::new(
                "useNewUrlParser",
                SettingKind::Boolean,
                "Feature flag for the new URL parser:",
            )),
        connector("redis", "Redis key-value connector")?
            .with_setting(string("url"))
            .with_setting(string("host"))
            .with_setting(number("port"))
            .with_setting(password())
            .with_setting(string("db")),
        connector("mssql", "Microsoft SQL")?
            .with_setting(string("url"))
            .with_setting(string("host"))
            .with_setting(number("port"))
            .with_setting(string("user"))
            .with_setting(password())
            .with_setting(string("database")),
        connector("oracle", "Oracle")?
            .with_setting(string("tns"))
            .with_setting(string("url"))
            .with_setting(string("host"))
            .with_setting(number("port"))
            .with_setting(string("user"))
            .with_setting(password())
            .with_setting(string("database")),
    ])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let all = all_connectors().unwrap();
        let names: HashSet<_> = all.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names.len(), all.len());
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn only_memory_has_a_data_file() {
        for def in all_connectors().unwrap() {
            let expected = if def.name.as_str() == "memory" {
                SideEffect::DataFile
            } else {
                SideEffect::None
            };
            assert_eq!(def.side_effect, expected, "{}", def.name);
        }
    }

    #[test]
    fn passwords_are_masked() {
        for def in all_connectors().unwrap() {
            if let Some(setting) = def.setting("password") {
                assert!(setting.secret, "{}", def.name);
            }
        }
    }
}
