//! `dsforge datasource`: generate a datasource in an existing project.

use std::path::Path;

use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

use dsforge_core::application::{GenerationReport, RawInput};

use crate::{
    cli::{DatasourceArgs, OutputFormat},
    commands::build_service,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

#[instrument(skip_all, fields(project = %args.project_dir.display(), dry_run = args.dry_run))]
pub fn execute(args: DatasourceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = build_service(&config)?;
    let input = raw_input(&args)?;
    let prompter = prompt::for_session(args.yes);

    let report = if args.dry_run {
        service.preview(&args.project_dir, input, prompter.as_ref())?
    } else {
        service.generate(&args.project_dir, input, prompter.as_ref())?
    };

    if output.format() == OutputFormat::Json {
        output.json(&report_json(&report))?;
    } else {
        print_report(&report, &service.options().datasources_dir, &output)?;
    }
    Ok(())
}

/// Merge flags over `--answers`.
fn raw_input(args: &DatasourceArgs) -> CliResult<RawInput> {
    let mut settings = Map::new();
    for (key, value) in args.settings() {
        settings.insert(key, Value::String(value));
    }

    let flags = RawInput {
        name: args.name.clone(),
        connector: args.connector.clone(),
        settings,
    };

    match &args.answers {
        Some(raw) => {
            let answers = RawInput::from_answers(load_answers(raw)?)?;
            debug!(settings = answers.settings.len(), "Answers loaded");
            Ok(flags.or(answers))
        }
        None => Ok(flags),
    }
}

/// Inline JSON when it looks like an object, a file path otherwise.
fn load_answers(raw: &str) -> CliResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input(
            "--answers needs inline JSON or a path to a JSON file",
        ));
    }
    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed).with_cli_context(|| "--answers is not valid JSON");
    }

    let path = Path::new(trimmed);
    let content = std::fs::read_to_string(path).map_err(|e| CliError::InvalidInput {
        message: format!("cannot read answers file '{}': {e}", path.display()),
        source: Some(Box::new(e)),
    })?;
    serde_json::from_str(&content)
        .with_cli_context(|| format!("answers file '{}' is not valid JSON", path.display()))
}

fn print_report(
    report: &GenerationReport,
    datasources_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    for file in &report.files {
        output.file_action(file.outcome.as_str(), &file.path.display().to_string())?;
    }

    let name = report.descriptor.name();
    if report.dry_run {
        output.info(&format!(
            "Dry run: datasource {name} ({}) was not written",
            report.descriptor.connector()
        ))?;
    } else {
        output.success(&format!(
            "Datasource {name} was created in {}/",
            datasources_dir.display()
        ))?;
    }
    Ok(())
}

fn report_json(report: &GenerationReport) -> Value {
    let files: Vec<Value> = report
        .files
        .iter()
        .map(|f| {
            json!({
                "path": f.path.display().to_string(),
                "action": f.outcome.as_str(),
            })
        })
        .collect();

    json!({
        "name": report.descriptor.name(),
        "connector": report.descriptor.connector().as_str(),
        "projectRoot": report.project_root.display().to_string(),
        "dryRun": report.dry_run,
        "files": files,
        "config": report.descriptor.to_config(),
    })
}
