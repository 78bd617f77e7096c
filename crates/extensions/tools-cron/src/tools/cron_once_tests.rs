use super::*;
use std::path::PathBuf;

fn create_test_context() -> ToolContext {
    ToolContext::new("test", PathBuf::from("/tmp"))
}

#[test]
fn test_tool_definition() {
    let tool = CronOnceTool::new();
    assert_eq!(tool.definition().id, "cron_once");
}

#[tokio::test]
async fn test_delay_in_minutes() {
    let tool = CronOnceTool::new();
    let params = serde_json::json!({"delay": "5 minutes"});

    let result = tool.execute(params, create_test_context()).await.unwrap();
    assert!(result.success);
    assert!(result.content.contains("Delay: 300 seconds"));
    assert!(result.content.contains("Execute at:"));
    assert!(result.content.contains(" UTC"));
    assert_eq!(
        result.metadata.get("delay_seconds"),
        Some(&serde_json::json!(300))
    );
}

#[tokio::test]
async fn test_one_shot_cron_line_is_valid() {
    let tool = CronOnceTool::new();
    let params = serde_json::json!({"delay": "2 hours"});

    let result = tool.execute(params, create_test_context()).await.unwrap();
    assert!(result.content.contains("Delay: 7200 seconds"));

    let cron_line = result
        .content
        .lines()
        .find_map(|line| line.strip_prefix("Cron: "))
        .unwrap();
    assert!(crate::schedule::parse(cron_line).is_ok());
}

#[tokio::test]
async fn test_unrecognized_delay() {
    let tool = CronOnceTool::new();
    let params = serde_json::json!({"delay": "sometime soon"});

    let result = tool.execute(params, create_test_context()).await;
    match result.unwrap_err() {
        ToolError::InvalidParameters(msg) => assert!(msg.contains("Could not parse delay")),
        e => panic!("Expected InvalidParameters, got {:?}", e),
    }
}

#[tokio::test]
async fn test_absurdly_large_delay() {
    let tool = CronOnceTool::new();
    let params = serde_json::json!({"delay": "99999999999 days"});

    let result = tool.execute(params, create_test_context()).await;
    match result.unwrap_err() {
        ToolError::InvalidParameters(msg) => assert!(msg.contains("too large")),
        e => panic!("Expected InvalidParameters, got {:?}", e),
    }
}
