//! TypeScript artifact renderer.
//!
//! Produces, under the datasources directory:
//!
//! | File | Mode |
//! |------|------|
//! | `<stem>.datasource.json` | overwrite |
//! | `<stem>.datasource.ts` | overwrite |
//! | `index.ts` | append line |

use std::path::Path;

use dsforge_core::{
    application::{
        ApplicationError,
        ports::{ArtifactRenderer, HostFramework},
    },
    domain::{ArtifactPlan, DataSourceDescriptor, INDEX_FILE, RenderContext, WriteMode},
    error::DsforgeResult,
};
use tracing::{debug, instrument};

const STUB_TEMPLATE: &str = r#"import {{{INJECTION_HELPER}}} from '{{INJECTION_MODULE}}';
import {{{BASE_IMPORT}}} from '{{BASE_MODULE}}';
import * as config from './{{MODULE_NAME}}.json';

export class {{CLASS_NAME}} extends {{BASE_CLASS}} {
  static dataSourceName = '{{DATASOURCE_NAME}}';

  constructor(
    @{{INJECTION_HELPER}}('{{BINDING_KEY}}', {optional: true})
    {{CONFIG_VAR}}: object = config,
  ) {
    super({{CONFIG_VAR}});
  }
}
"#;

const INDEX_TEMPLATE: &str = "export * from './{{MODULE_NAME}}';";

/// Renders the configuration record, typed stub and index entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_config(descriptor: &DataSourceDescriptor) -> DsforgeResult<String> {
        let mut json = serde_json::to_string_pretty(&descriptor.to_config()).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: format!("cannot serialize configuration: {e}"),
            }
        })?;
        json.push('\n');
        Ok(json)
    }

    fn render_template(context: &RenderContext, template: &str) -> DsforgeResult<String> {
        let rendered = context.render(template);
        let unresolved = RenderContext::unresolved(&rendered);
        if !unresolved.is_empty() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("unresolved placeholders: {}", unresolved.join(", ")),
            }
            .into());
        }
        Ok(rendered)
    }
}

impl ArtifactRenderer for TypeScriptRenderer {
    #[instrument(skip_all, fields(datasource = descriptor.name()))]
    fn render(
        &self,
        descriptor: &DataSourceDescriptor,
        host: &dyn HostFramework,
        project_root: &Path,
        datasources_dir: &Path,
    ) -> DsforgeResult<ArtifactPlan> {
        let names = descriptor.names();
        let context = RenderContext::new(&names)
            .with_variable("INJECTION_HELPER", host.injection_helper())
            .with_variable("INJECTION_MODULE", host.injection_module())
            .with_variable("BASE_IMPORT", host.base_import())
            .with_variable("BASE_MODULE", host.base_module())
            .with_variable("BASE_CLASS", host.base_class())
            .with_variable("BINDING_KEY", host.config_binding_key(descriptor.name()));

        let plan = ArtifactPlan::new(project_root)
            .with_file(
                names.config_path(datasources_dir),
                Self::render_config(descriptor)?,
                WriteMode::Overwrite,
            )
            .with_file(
                names.stub_path(datasources_dir),
                Self::render_template(&context, STUB_TEMPLATE)?,
                WriteMode::Overwrite,
            )
            .with_file(
                datasources_dir.join(INDEX_FILE),
                Self::render_template(&context, INDEX_TEMPLATE)?,
                WriteMode::AppendLine,
            );

        debug!(files = plan.entry_count(), "Artifacts rendered");
        Ok(plan)
    }
}
