//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here. No
//! business logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "dsforge",
    bin_name = "dsforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate datasources for LoopBack-style projects",
    long_about = "dsforge adds a datasource to an existing LoopBack application: \
                  a JSON config, a TypeScript class stub and an index export, \
                  plus a data file for the in-memory connector.",
    after_help = "EXAMPLES:\n\
        \x20 dsforge datasource db --connector postgresql --host localhost --port 5432\n\
        \x20 dsforge ds cache --connector memory --file ./data/cache.json\n\
        \x20 dsforge ds api --connector rest --options '{\"baseURL\": \"http://x\"}' --yes\n\
        \x20 dsforge connectors --format list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a datasource in the current project.
    #[command(
        visible_alias = "ds",
        about = "Generate a datasource",
        after_help = "EXAMPLES:\n\
            \x20 dsforge datasource mydb --connector mysql --url mysql://localhost/db\n\
            \x20 dsforge ds store --connector memory --yes\n\
            \x20 dsforge ds legacy --connector db2 --set schema=APP --yes\n\
            \x20 dsforge ds mydb --answers answers.json --dry-run"
    )]
    Datasource(DatasourceArgs),

    /// List the connectors the generator knows about.
    #[command(
        visible_alias = "ls",
        about = "List known connectors",
        after_help = "EXAMPLES:\n\
            \x20 dsforge connectors\n\
            \x20 dsforge connectors --format json"
    )]
    Connectors(ConnectorsArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dsforge init           # platform config location\n\
            \x20 dsforge init --local   # .dsforge.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dsforge completions bash > ~/.local/share/bash-completion/completions/dsforge\n\
            \x20 dsforge completions zsh  > ~/.zfunc/_dsforge\n\
            \x20 dsforge completions fish > ~/.config/fish/completions/dsforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dsforge config get defaults.connector\n\
            \x20 dsforge config list\n\
            \x20 dsforge config path"
    )]
    Config(ConfigCommands),
}

// ── datasource ────────────────────────────────────────────────────────────────

/// Arguments for `dsforge datasource`.
///
/// Connector settings are taken as text; they are coerced to the type the
/// connector declares once the connector is known.
#[derive(Debug, Default, Args)]
pub struct DatasourceArgs {
    /// Datasource name. Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Datasource name")]
    pub name: Option<String>,

    #[arg(
        long = "connector",
        value_name = "CONNECTOR",
        help = "Connector to use (e.g. memory, mysql, mongodb)"
    )]
    pub connector: Option<String>,

    #[arg(long = "url", value_name = "URL", help = "Connection string")]
    pub url: Option<String>,

    #[arg(long = "host", value_name = "HOST", help = "Database host")]
    pub host: Option<String>,

    #[arg(long = "port", value_name = "PORT", help = "Database port")]
    pub port: Option<String>,

    #[arg(long = "username", value_name = "USER", help = "Account name (cloudant, couchdb)")]
    pub username: Option<String>,

    #[arg(long = "user", value_name = "USER", help = "Database user")]
    pub user: Option<String>,

    #[arg(long = "password", value_name = "PASSWORD", help = "Database password")]
    pub password: Option<String>,

    #[arg(long = "database", value_name = "NAME", help = "Database name")]
    pub database: Option<String>,

    #[arg(
        long = "options",
        value_name = "JSON",
        help = "Connector options as a JSON object"
    )]
    pub options: Option<String>,

    #[arg(
        long = "operations",
        value_name = "JSON",
        help = "Connector operations as a JSON array"
    )]
    pub operations: Option<String>,

    #[arg(
        long = "file",
        value_name = "PATH",
        help = "Data file for the memory connector, relative to the project"
    )]
    pub file: Option<String>,

    /// Any other connector setting. Repeatable.
    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "Set an arbitrary connector setting"
    )]
    pub set: Vec<(String, String)>,

    /// Answers as inline JSON (`{...}`) or the path to a JSON file. Flags
    /// take precedence over answers.
    #[arg(long = "answers", value_name = "JSON|FILE", help = "Pre-supplied answers")]
    pub answers: Option<String>,

    #[arg(
        short = 'C',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Project root"
    )]
    pub project_dir: PathBuf,

    #[arg(short = 'y', long = "yes", help = "Never prompt; use given values only")]
    pub yes: bool,

    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

impl DatasourceArgs {
    /// Named setting flags paired with their setting keys, then `--set`
    /// pairs. Absent flags are skipped.
    pub fn settings(&self) -> Vec<(String, String)> {
        let named = [
            ("url", &self.url),
            ("host", &self.host),
            ("port", &self.port),
            ("username", &self.username),
            ("user", &self.user),
            ("password", &self.password),
            ("database", &self.database),
            ("options", &self.options),
            ("operations", &self.operations),
            ("file", &self.file),
        ];

        named
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
            .chain(self.set.iter().cloned())
            .collect()
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

// ── connectors ────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConnectorsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `connectors` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.dsforge.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.connector`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
