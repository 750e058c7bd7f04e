pub mod artifact_plan;
pub mod connector;
pub mod descriptor;

pub use artifact_plan::{ArtifactPlan, PlannedFile, WriteMode};
pub use connector::{ConnectorDef, SettingDef, SideEffect};
pub use descriptor::{DataSourceDescriptor, DescriptorBuilder};
