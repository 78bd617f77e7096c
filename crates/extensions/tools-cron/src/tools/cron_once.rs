//! One-shot schedule tool.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Deserialize;

use agentry_protocols::error::ToolError;
use agentry_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::schedule::{self, format_timestamp};

/// Parameters for cron_once tool.
#[derive(Debug, Deserialize)]
struct CronOnceParams {
    /// Delay before execution (e.g., '5 minutes', '2 hours', '1 day').
    delay: String,
}

/// One-shot schedule tool implementation.
///
/// Converts a delay into the absolute UTC execution time and the
/// equivalent one-shot cron line. It does not run anything itself.
pub struct CronOnceTool {
    definition: ToolDefinition,
}

impl CronOnceTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "delay": {
                    "type": "string",
                    "description": "Delay before execution (e.g., '5 minutes', '2 hours', '1 day')"
                }
            },
            "required": ["delay"]
        });

        Self {
            definition: ToolDefinition::new(
                "cron_once",
                "One-Shot Schedule",
                "Convert a delay into an absolute execution time and a one-shot cron expression",
            )
            .with_parameters_schema(schema),
        }
    }
}

impl Default for CronOnceTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CronOnceTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: CronOnceParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let seconds = schedule::parse_delay(&params.delay)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let offset = i64::try_from(seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| too_large(&params.delay))?;
        let execute_at = Utc::now()
            .checked_add_signed(offset)
            .ok_or_else(|| too_large(&params.delay))?;

        // One-shot line in `minute hour day month *` form, per the target
        // minute of the execution time.
        let once_cron = execute_at.format("%M %H %d %m *").to_string();

        tracing::info!(delay = %params.delay, seconds, "computed one-shot schedule");

        Ok(ToolResult::success(format!(
            "One-time schedule:\nDelay: {} seconds\nExecute at: {}\nCron: {}",
            seconds,
            format_timestamp(execute_at),
            once_cron
        ))
        .with_metadata("delay_seconds", serde_json::json!(seconds)))
    }
}

fn too_large(delay: &str) -> ToolError {
    ToolError::InvalidParameters(format!("Delay '{delay}' is too large"))
}

#[cfg(test)]
#[path = "cron_once_tests.rs"]
mod tests;
