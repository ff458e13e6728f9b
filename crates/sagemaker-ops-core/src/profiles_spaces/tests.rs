// crates/sagemaker-ops-core/src/profiles_spaces/tests.rs
// ============================================================================
// Module: Profile & Space Operation Tests
// Description: Unit tests for profile and space listing helpers.
// Purpose: Pin collection-key unwrapping for both listings.
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
async fn user_profiles_unwrap_collection() {
    let stub = StubTransport::new();
    stub.respond(
        "ListUserProfiles",
        json!({"UserProfiles": [{"UserProfileName": "alice"}]}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let profiles = list_user_profiles(&client).await.unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(stub.calls()[0].payload, json!({}));
}

#[tokio::test]
async fn spaces_missing_key_is_empty() {
    let stub = StubTransport::new();
    stub.respond("ListSpaces", json!({}));
    let client = stub.client(Environment::from_pairs([]));
    assert!(list_spaces(&client).await.unwrap().is_empty());
}
