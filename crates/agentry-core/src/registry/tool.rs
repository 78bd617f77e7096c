//! Tool registry and dispatch.

use std::sync::Arc;

use agentry_protocols::error::{ExtensionError, ToolError};
use agentry_protocols::extension::ToolRegistryAccess;
use agentry_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Tool {
    fn registry_id(&self) -> &str {
        &self.definition().id
    }
}

/// Registry for managing tools.
///
/// Tools are registered by extensions and invoked by name with a
/// parameter map.
pub struct ToolRegistry {
    inner: BaseRegistry<dyn Tool>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register a tool.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.inner.register(tool)
    }

    /// Unregister a tool.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.inner.unregister(id)
    }

    /// Get a tool by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.inner.get(id)
    }

    /// List all tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.inner.iter().map(|t| t.definition().clone()).collect()
    }

    /// Look up a tool by ID, validate the parameters, and execute it.
    pub async fn execute(
        &self,
        tool_id: &str,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .get(tool_id)
            .ok_or_else(|| ToolError::NotFound(tool_id.to_string()))?;

        tool.validate(&params)?;

        tracing::debug!(
            tool = tool_id,
            session = %ctx.session_id,
            correlation = %ctx.correlation_id,
            "dispatching tool"
        );
        tool.execute(params, ctx).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistryAccess for ToolRegistry {
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.register(tool)
    }

    fn unregister_tool(&self, tool_id: &str) -> Result<(), ExtensionError> {
        self.unregister(tool_id)
    }
}
