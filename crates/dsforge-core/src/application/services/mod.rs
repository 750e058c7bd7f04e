//! Application services - orchestrate use cases.

pub mod datasource_service;
pub mod input_collector;
pub mod project_validator;
pub mod side_effects;

#[cfg(test)]
pub(crate) mod test_support;

pub use datasource_service::{
    DataSourceService, FileOutcome, GenerationReport, GeneratorOptions, WrittenFile,
};
pub use input_collector::{InputCollector, RawInput};
pub use project_validator::validate_project;
pub use side_effects::{FILE_SETTING, empty_data_file, plan_side_effect};
