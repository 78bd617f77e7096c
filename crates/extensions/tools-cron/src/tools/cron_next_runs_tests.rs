use super::*;
use std::path::PathBuf;

fn create_test_context() -> ToolContext {
    ToolContext::new("test", PathBuf::from("/tmp"))
}

#[test]
fn test_tool_definition() {
    let tool = CronNextRunsTool::new();
    assert_eq!(tool.definition().id, "cron_next_runs");
}

#[tokio::test]
async fn test_default_count() {
    let tool = CronNextRunsTool::new();
    let params = serde_json::json!({"schedule": "0 9 * * *"});

    let result = tool.execute(params, create_test_context()).await.unwrap();
    assert!(result.content.contains("Next 5 runs for '0 9 * * *'"));
    assert!(result.content.contains("5. "));
    assert!(!result.content.contains("6. "));
}

#[tokio::test]
async fn test_custom_count() {
    let tool = CronNextRunsTool::new();
    let params = serde_json::json!({"schedule": "0 9 * * *", "count": 3});

    let result = tool.execute(params, create_test_context()).await.unwrap();
    assert!(result.content.contains("Next 3 runs"));
    assert!(result.content.contains("3. "));
    assert!(!result.content.contains("4. "));
}

#[tokio::test]
async fn test_count_is_capped() {
    let tool = CronNextRunsTool::new();
    let params = serde_json::json!({"schedule": "0 * * * *", "count": 100});

    let result = tool.execute(params, create_test_context()).await.unwrap();
    assert!(result.content.contains("Next 20 runs"));
    assert!(result.content.contains("20. "));
    assert!(!result.content.contains("21. "));
}

#[tokio::test]
async fn test_non_positive_count_is_floored() {
    let tool = CronNextRunsTool::new();
    let params = serde_json::json!({"schedule": "0 * * * *", "count": -3});

    let result = tool.execute(params, create_test_context()).await.unwrap();
    assert!(result.content.contains("Next 1 runs"));
}

#[tokio::test]
async fn test_natural_language_schedule() {
    let tool = CronNextRunsTool::new();
    let params = serde_json::json!({"schedule": "daily at noon", "count": 2});

    let result = tool.execute(params, create_test_context()).await.unwrap();
    assert!(result.content.contains("Next 2 runs for '0 12 * * *'"));
    assert!(result.content.contains("12:00:00 UTC"));
}

#[tokio::test]
async fn test_invalid_schedule() {
    let tool = CronNextRunsTool::new();
    let params = serde_json::json!({"schedule": "invalid"});

    let result = tool.execute(params, create_test_context()).await;
    assert!(matches!(result, Err(ToolError::InvalidParameters(_))));
}
