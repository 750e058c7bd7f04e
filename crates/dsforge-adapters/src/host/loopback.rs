//! LoopBack 4 host binding.

use dsforge_core::application::ports::HostFramework;

/// LoopBack 4 application: a `package.json` tagged with the `loopback`
/// keyword, datasources injected through `@loopback/core` and built on
/// `juggler.DataSource` from `@loopback/repository`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopBackFramework;

impl LoopBackFramework {
    pub const MANIFEST: &'static str = "package.json";
    pub const KEYWORD: &'static str = "loopback";

    pub fn new() -> Self {
        Self
    }
}

impl HostFramework for LoopBackFramework {
    fn name(&self) -> &str {
        "loopback4"
    }

    fn manifest_file(&self) -> &str {
        Self::MANIFEST
    }

    fn required_keyword(&self) -> &str {
        Self::KEYWORD
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
