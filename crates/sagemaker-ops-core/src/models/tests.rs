// crates/sagemaker-ops-core/src/models/tests.rs
// ============================================================================
// Module: Model Operation Tests
// Description: Unit tests for model forwarding helpers.
// Purpose: Pin payloads and response unwrapping for model operations.
// Dependencies: serde_json, tokio
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items,
    reason = "test code favors brevity over production lint walls"
)]

use serde_json::json;

use super::*;
use crate::session::Environment;
use crate::testing::StubTransport;

#[tokio::test]
async fn list_models_unwraps_collection() {
    let stub = StubTransport::new();
    stub.respond("ListModels", json!({"Models": [{"ModelName": "m"}]}));
    let client = stub.client(Environment::from_pairs([]));
    assert_eq!(list_models(&client).await.unwrap().len(), 1);
}

#[tokio::test]
async fn describe_model_returns_mapping_unmodified() {
    let details = json!({"ModelName": "m", "PrimaryContainer": {"Image": "x"}});
    let stub = StubTransport::new();
    stub.respond("DescribeModel", details.clone());
    let client = stub.client(Environment::from_pairs([]));

    let response = describe_model(&client, "m").await.unwrap();
    assert_eq!(response, details);
}

#[tokio::test]
async fn delete_model_forwards_name() {
    let stub = StubTransport::new();
    stub.respond("DeleteModel", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    delete_model(&client, "m").await.unwrap();
    assert_eq!(stub.calls()[0].payload, json!({"ModelName": "m"}));
}
