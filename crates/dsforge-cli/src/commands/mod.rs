//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod connectors;
pub mod datasource;
pub mod init;

use dsforge_adapters::{InMemoryCatalog, LocalFilesystem, LoopBackFramework, TypeScriptRenderer};
use dsforge_core::application::DataSourceService;
use tracing::debug;

use crate::{config::AppConfig, error::CliResult};

/// Wire the generator service against the real filesystem and the
/// configured connector catalog.
pub(crate) fn build_service(config: &AppConfig) -> CliResult<DataSourceService> {
    let catalog = InMemoryCatalog::with_builtin()?;
    if let Some(path) = &config.generator.connectors_file {
        let loaded = catalog.load_file(path)?;
        debug!(path = %path.display(), loaded, "Loaded extra connectors");
    }

    Ok(DataSourceService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TypeScriptRenderer::new()),
        Box::new(catalog),
        Box::new(LoopBackFramework::new()),
        config.generator_options()?,
    ))
}
