//! Integration tests: the extension registered into a real tool registry
//! and invoked by name.

use std::path::PathBuf;
use std::sync::Arc;

use agentry_core::ToolRegistry;
use agentry_protocols::error::ToolError;
use agentry_protocols::extension::{Extension, ExtensionContext, ToolRegistryAccess};
use agentry_protocols::tool::ToolContext;
use agentry_tools_cron::CronToolsExtension;

async fn initialized_registry() -> Arc<ToolRegistry> {
    let registry = Arc::new(ToolRegistry::new());
    let ctx = ExtensionContext::new(
        serde_json::json!({}),
        registry.clone() as Arc<dyn ToolRegistryAccess>,
        PathBuf::from("/tmp"),
    );

    let mut extension = CronToolsExtension::new();
    extension.initialize(ctx).await.unwrap();
    registry
}

fn invocation_context() -> ToolContext {
    ToolContext::new("test-session", PathBuf::from("/tmp"))
}

#[tokio::test]
async fn test_extension_registers_all_tools() {
    let registry = initialized_registry().await;

    let ids: Vec<String> = registry.list().into_iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), 3);
    for id in ["cron_parse", "cron_next_runs", "cron_once"] {
        assert!(ids.contains(&id.to_string()), "missing tool {id}");
    }
}

#[tokio::test]
async fn test_invoke_cron_parse_by_name() {
    let registry = initialized_registry().await;

    let result = registry
        .execute(
            "cron_parse",
            serde_json::json!({"expression": "every 5 minutes"}),
            invocation_context(),
        )
        .await
        .unwrap();

    assert!(result.success);
    assert!(result.content.contains("Cron expression: */5 * * * *"));
}

#[tokio::test]
async fn test_invoke_cron_next_runs_with_capped_count() {
    let registry = initialized_registry().await;

    let result = registry
        .execute(
            "cron_next_runs",
            serde_json::json!({"schedule": "hourly", "count": 100}),
            invocation_context(),
        )
        .await
        .unwrap();

    assert!(result.content.contains("Next 20 runs"));
}

#[tokio::test]
async fn test_invoke_cron_once() {
    let registry = initialized_registry().await;

    let result = registry
        .execute(
            "cron_once",
            serde_json::json!({"delay": "1 hour"}),
            invocation_context(),
        )
        .await
        .unwrap();

    assert!(result.content.contains("Delay: 3600 seconds"));
}

#[tokio::test]
async fn test_unknown_tool_name() {
    let registry = initialized_registry().await;

    let result = registry
        .execute("cron_missing", serde_json::json!({}), invocation_context())
        .await;
    assert!(matches!(result, Err(ToolError::NotFound(_))));
}
