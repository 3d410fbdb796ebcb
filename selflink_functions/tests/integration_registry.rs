//! Integration tests calling functions through the registry.
//!
//! These tests verify that:
//! - `resource_name_from_self_link` handles self links, ids, truncated and repetitive input
//! - Invalid input surfaces as an argument error
//! - Custom pattern functions sit alongside the built-ins

use selflink_core::{FunctionRegistry, PatternDef, RunRequest, Severity};
use selflink_functions::{default_registry, register_custom};
use serde_json::json;

const FUNCTION: &str = "resource_name_from_self_link";
const RESOURCE_NAME: &str = "tf-test-my-resource";

fn call(registry: &FunctionRegistry, name: &str, input: &str) -> selflink_core::RunResponse {
    registry.call(name, &RunRequest::from_strings([input]))
}

#[test]
fn test_valid_self_link() {
    let registry = default_registry();
    let input = format!(
        "https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-c/instances/{RESOURCE_NAME}"
    );
    let response = call(&registry, FUNCTION, &input);
    assert_eq!(response.result.as_deref(), Some(RESOURCE_NAME));
    assert!(response.diagnostics.is_empty());
}

#[test]
fn test_truncated_self_link_gives_last_element() {
    let registry = default_registry();
    let response = call(
        &registry,
        FUNCTION,
        "https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-c",
    );
    assert_eq!(response.result.as_deref(), Some("us-central1-c"));
}

#[test]
fn test_valid_id() {
    let registry = default_registry();
    let input = format!("projects/my-project/zones/us-central1-c/instances/{RESOURCE_NAME}");
    let response = call(&registry, FUNCTION, &input);
    assert_eq!(response.result.as_deref(), Some(RESOURCE_NAME));
}

#[test]
fn test_repetitive_input_gives_final_element() {
    let registry = default_registry();
    let input = format!(
        "https://www.googleapis.com/compute/v1/projects/my-project/zones/us-central1-c/instances/not-this-1/instances/not-this-2/instances/{RESOURCE_NAME}"
    );
    let response = call(&registry, FUNCTION, &input);
    assert_eq!(response.result.as_deref(), Some(RESOURCE_NAME));
    assert_eq!(response.diagnostics.warnings().count(), 0);
}

#[test]
fn test_invalid_input_is_error() {
    let registry = default_registry();
    let response = call(&registry, FUNCTION, RESOURCE_NAME);
    assert!(response.is_error());

    let error = response
        .diagnostics
        .errors()
        .next()
        .cloned()
        .unwrap_or_else(|| panic!("expected an error diagnostic"));
    assert_eq!(error.severity, Severity::Error);
    assert_eq!(error.argument, Some(0));
    assert!(error.detail.contains(RESOURCE_NAME));
    assert!(error.detail.contains("resourceType/{name}$"));
}

#[test]
fn test_pubsub_topic_id() {
    let registry = default_registry();
    let input = format!("projects/my-project/topics/{RESOURCE_NAME}");
    assert_eq!(
        call(&registry, FUNCTION, &input).result.as_deref(),
        Some(RESOURCE_NAME)
    );
    assert_eq!(
        call(&registry, "project_from_id", &input).result.as_deref(),
        Some("my-project")
    );
}

#[test]
fn test_wrong_argument_type() {
    let registry = default_registry();
    let response = registry.call(FUNCTION, &RunRequest::new(vec![json!(["a", "b"])]));
    assert!(response.is_error());
    assert!(response.result.is_none());
}

#[test]
fn test_custom_function_alongside_builtins() {
    let mut registry = default_registry();
    let builtins = registry.len();
    let defs: Vec<PatternDef> = serde_json::from_value(json!([
        {
            "name": "subscription_from_id",
            "pattern": "subscriptions/(?P<Subscription>[^/]+)$",
            "template": "$Subscription",
            "description": "subscriptions/{subscription}$",
            "label": "subscription"
        }
    ]))
    .unwrap_or_default();
    assert_eq!(defs.len(), 1);

    assert!(register_custom(&mut registry, &defs).is_ok());
    assert_eq!(registry.len(), builtins + 1);

    let response = call(
        &registry,
        "subscription_from_id",
        "projects/my-project/subscriptions/orders",
    );
    assert_eq!(response.result.as_deref(), Some("orders"));

    let names: Vec<_> = registry.definitions().into_iter().map(|d| d.name).collect();
    assert!(names.contains(&"subscription_from_id".to_string()));
}

#[test]
fn test_concurrent_calls() {
    let registry = default_registry();
    std::thread::scope(|scope| {
        for i in 0..8 {
            let registry = &registry;
            scope.spawn(move || {
                let input = format!("projects/p/zones/z/instances/vm-{i}");
                let response = call(registry, FUNCTION, &input);
                assert_eq!(response.result, Some(format!("vm-{i}")));
            });
        }
    });
}
