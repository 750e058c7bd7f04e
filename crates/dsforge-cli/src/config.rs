//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the
//! [`GeneratorOptions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `DSFORGE_*` environment variables, `__` between nested keys
//!    (`DSFORGE_DEFAULTS__CONNECTOR=mysql`)
//! 3. `--config FILE`, or else `.dsforge.toml` in the working directory
//!    layered over the platform config file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use dsforge_core::{
    application::GeneratorOptions,
    domain::ConnectorName,
    error::DsforgeResult,
};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".dsforge.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Connector used when none is given and prompting is off.
    pub connector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Where artifacts go, relative to the project root.
    pub datasources_dir: PathBuf,
    /// Extra connector definitions (JSON or TOML), merged over the builtin set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectors_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            connector: ConnectorName::MEMORY.into(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            datasources_dir: PathBuf::from("src/datasources"),
            connectors_file: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path given with `--config`; it must exist. The
    /// implicit locations are optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder
                .add_source(config::File::from(Self::config_path()).required(false))
                .add_source(config::File::from(Self::local_path()).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix("DSFORGE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to read configuration")?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Platform config file, falling back to `.dsforge.toml` in the CWD.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dsforge", "dsforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(Self::local_path)
    }

    pub fn local_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Options for the generator service.
    pub fn generator_options(&self) -> DsforgeResult<GeneratorOptions> {
        let options = GeneratorOptions {
            datasources_dir: self.generator.datasources_dir.clone(),
            default_connector: ConnectorName::new(&self.defaults.connector)?,
        };
        let datasources_dir = options.checked_datasources_dir()?;
        Ok(GeneratorOptions {
            datasources_dir,
            ..options
        })
    }
}
