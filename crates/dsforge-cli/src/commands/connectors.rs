//! `dsforge connectors`: list the connector catalog.

use dsforge_core::domain::{ConnectorDef, SideEffect};

use crate::{
    cli::{ConnectorsArgs, ListFormat, OutputFormat},
    commands::build_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ConnectorsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let connectors = build_service(&config)?.connectors()?;

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Json => output.json(&connectors)?,
        ListFormat::List => {
            for connector in &connectors {
                output.print(connector.name.as_str())?;
            }
        }
        ListFormat::Table => {
            output.header(&format!("{} connectors", connectors.len()))?;
            let width = connectors
                .iter()
                .map(|c| c.name.as_str().len())
                .max()
                .unwrap_or(0);
            for connector in &connectors {
                output.print(&table_row(connector, width))?;
            }
        }
    }

    Ok(())
}

fn table_row(connector: &ConnectorDef, width: usize) -> String {
    let mut row = format!(
        "  {:<width$}  {}",
        connector.name.as_str(),
        connector.description
    );
    if !connector.settings.is_empty() {
        let names: Vec<&str> = connector.settings.iter().map(|s| s.name.as_str()).collect();
        row.push_str(&format!(" [{}]", names.join(", ")));
    }
    if connector.side_effect == SideEffect::DataFile {
        row.push_str(" (creates a data file)");
    }
    row
}
