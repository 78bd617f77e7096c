//! Tool execution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let err = ToolError::NotFound("cron_parse".to_string());
        assert!(err.to_string().contains("Tool not found"));
        assert!(err.to_string().contains("cron_parse"));
    }

    #[test]
    fn test_execution_failed() {
        let err = ToolError::ExecutionFailed("boom".to_string());
        assert!(err.to_string().contains("execution failed"));
    }

    #[test]
    fn test_invalid_parameters() {
        let err = ToolError::InvalidParameters("missing field".to_string());
        assert!(err.to_string().contains("Invalid parameters"));
    }

    #[test]
    fn test_validation_failed() {
        let err = ToolError::ValidationFailed("type mismatch".to_string());
        assert!(err.to_string().contains("validation failed"));
    }
}
