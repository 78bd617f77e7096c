//! Cron tools extension definition.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use agentry_protocols::error::ExtensionError;
use agentry_protocols::extension::{Extension, ExtensionContext, ExtensionManifest};
use agentry_protocols::types::Version;

use crate::tools::{CronNextRunsTool, CronOnceTool, CronParseTool};

/// Cron tools extension providing schedule parsing for agents.
pub struct CronToolsExtension {
    manifest: ExtensionManifest,
}

impl CronToolsExtension {
    pub fn new() -> Self {
        let mut manifest =
            ExtensionManifest::new("tools-cron", "Cron Tools", Version::new(0, 1, 0))
                .with_description(
                    "Schedule parsing: natural language to cron, upcoming run times, one-shot delays",
                );
        manifest.provides.tools = vec![
            "cron_parse".to_string(),
            "cron_next_runs".to_string(),
            "cron_once".to_string(),
        ];

        Self { manifest }
    }
}

impl Default for CronToolsExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for CronToolsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        ctx.tool_registry
            .register_tool(Arc::new(CronParseTool::new()))?;
        ctx.tool_registry
            .register_tool(Arc::new(CronNextRunsTool::new()))?;
        ctx.tool_registry
            .register_tool(Arc::new(CronOnceTool::new()))?;

        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
