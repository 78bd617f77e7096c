//! Tool definition types.

use serde::{Deserialize, Serialize};

use crate::types::RiskLevel;

/// Definition of a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique identifier for the tool.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Description of what the tool does.
    pub description: String,

    /// JSON Schema for the parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<serde_json::Value>,

    /// Risk level for this tool.
    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            parameters_schema: None,
            risk_level: RiskLevel::Low,
        }
    }

    /// Set the parameters schema.
    pub fn with_parameters_schema(mut self, schema: serde_json::Value) -> Self {
        self.parameters_schema = Some(schema);
        self
    }

    /// Set the risk level.
    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_new() {
        let def = ToolDefinition::new("my_tool", "My Tool", "Does things");
        assert_eq!(def.id, "my_tool");
        assert_eq!(def.name, "My Tool");
        assert_eq!(def.description, "Does things");
        assert!(def.parameters_schema.is_none());
        assert_eq!(def.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_with_parameters_schema() {
        let schema = serde_json::json!({"type": "object", "properties": {}});
        let def = ToolDefinition::new("t", "T", "d").with_parameters_schema(schema.clone());
        assert_eq!(def.parameters_schema, Some(schema));
    }

    #[test]
    fn test_with_risk_level() {
        let def = ToolDefinition::new("t", "T", "d").with_risk_level(RiskLevel::High);
        assert_eq!(def.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_serialization_skips_empty_schema() {
        let def = ToolDefinition::new("t", "T", "d");
        let json = serde_json::to_value(&def).unwrap();
        assert!(json.get("parameters_schema").is_none());
    }
}
