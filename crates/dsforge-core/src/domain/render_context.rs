use std::collections::HashMap;

use crate::domain::naming::ArtifactNames;

/// Variables available to artifact templates.
///
/// ## Built-in Variables
///
/// | Variable | Example (`MyMongo`) |
/// |----------|---------------------|
/// | `DATASOURCE_NAME` | `MyMongo` |
/// | `FILE_STEM` | `my-mongo` |
/// | `MODULE_NAME` | `my-mongo.datasource` |
/// | `CLASS_NAME` | `MyMongoDataSource` |
/// | `CONFIG_VAR` | `myMongoConfig` |
///
/// Host-specific values (import modules, binding keys) are added by the
/// renderer with [`RenderContext::with_variable`].
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(names: &ArtifactNames) -> Self {
        let mut vars = HashMap::new();
        vars.insert("DATASOURCE_NAME".to_string(), names.name().to_string());
        vars.insert("FILE_STEM".to_string(), names.file_stem().to_string());
        vars.insert("MODULE_NAME".to_string(), names.module_name());
        vars.insert("CLASS_NAME".to_string(), names.class_name().to_string());
        vars.insert("CONFIG_VAR".to_string(), names.config_var().to_string());

        Self { variables: vars }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder. Unknown placeholders are
    /// left as-is; see [`RenderContext::unresolved`].
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// Placeholders in `rendered` that no variable matched.
    pub fn unresolved(rendered: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut rest = rendered;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else { break };
            let key = &after[..end];
            if !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            {
                found.push(key.to_string());
            }
            rest = &after[end + 2..];
        }
        found
    }
}
