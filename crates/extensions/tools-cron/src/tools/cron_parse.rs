//! Parse cron schedule tool.

use async_trait::async_trait;
use serde::Deserialize;

use agentry_protocols::error::ToolError;
use agentry_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::schedule::{self, format_timestamp};

/// Number of upcoming fire times shown after a successful parse.
const PREVIEW_COUNT: usize = 5;

/// Parameters for cron_parse tool.
#[derive(Debug, Deserialize)]
struct CronParseParams {
    /// Natural language or cron expression.
    expression: String,
}

/// Parse cron schedule tool implementation.
pub struct CronParseTool {
    definition: ToolDefinition,
}

impl CronParseTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "Natural language (e.g., 'daily at 9am', 'every Monday') or cron expression (e.g., '0 9 * * *')"
                }
            },
            "required": ["expression"]
        });

        Self {
            definition: ToolDefinition::new(
                "cron_parse",
                "Parse Cron Schedule",
                "Parse natural language or validate a cron expression and return the canonical cron format",
            )
            .with_parameters_schema(schema),
        }
    }
}

impl Default for CronParseTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CronParseTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: CronParseParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let expr = schedule::parse(&params.expression)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let times: Vec<String> = expr
            .upcoming(chrono::Utc::now())
            .take(PREVIEW_COUNT)
            .map(format_timestamp)
            .collect();

        let listing = if times.is_empty() {
            "(none within the search horizon)".to_string()
        } else {
            times.join("\n")
        };

        tracing::info!(input = %params.expression, cron = %expr, "parsed schedule");

        Ok(ToolResult::success_json(
            format!(
                "Cron expression: {expr}\nNext {PREVIEW_COUNT} occurrences:\n{listing}"
            ),
            serde_json::json!({
                "cron": expr.to_string(),
                "next": times,
            }),
        ))
    }
}

#[cfg(test)]
#[path = "cron_parse_tests.rs"]
mod tests;
