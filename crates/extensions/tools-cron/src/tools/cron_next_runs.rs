//! Next run times tool.

use async_trait::async_trait;
use serde::Deserialize;

use agentry_protocols::error::ToolError;
use agentry_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::schedule::{self, format_timestamp};

/// Ceiling on how many runs a single request may render. Requests above
/// it are clamped, not rejected; non-positive requests are floored to 1.
const MAX_RUNS: i64 = 20;

const DEFAULT_RUNS: i64 = 5;

fn default_count() -> i64 {
    DEFAULT_RUNS
}

/// Parameters for cron_next_runs tool.
#[derive(Debug, Deserialize)]
struct CronNextRunsParams {
    /// Cron expression or natural language.
    schedule: String,
    /// Number of upcoming runs to show.
    #[serde(default = "default_count")]
    count: i64,
}

/// Next run times tool implementation.
pub struct CronNextRunsTool {
    definition: ToolDefinition,
}

impl CronNextRunsTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "schedule": {
                    "type": "string",
                    "description": "Cron expression or natural language"
                },
                "count": {
                    "type": "integer",
                    "description": "Number of upcoming runs to show (default: 5, max: 20)"
                }
            },
            "required": ["schedule"]
        });

        Self {
            definition: ToolDefinition::new(
                "cron_next_runs",
                "Next Run Times",
                "Get the next N execution times for a cron expression",
            )
            .with_parameters_schema(schema),
        }
    }
}

impl Default for CronNextRunsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CronNextRunsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: CronNextRunsParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let expr = schedule::parse(&params.schedule)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let count = params.count.clamp(1, MAX_RUNS) as usize;
        let times: Vec<String> = expr
            .upcoming(chrono::Utc::now())
            .take(count)
            .map(format_timestamp)
            .collect();

        let listing = times
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect::<Vec<_>>()
            .join("\n");

        tracing::info!(cron = %expr, count, "computed next runs");

        Ok(ToolResult::success(format!(
            "Next {} runs for '{}':\n{}",
            times.len(),
            expr,
            listing
        )))
    }
}

#[cfg(test)]
#[path = "cron_next_runs_tests.rs"]
mod tests;
