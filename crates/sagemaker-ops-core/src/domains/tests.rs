// crates/sagemaker-ops-core/src/domains/tests.rs
// ============================================================================
// Module: Domain Operation Tests
// Description: Unit tests for domain forwarding helpers.
// Purpose: Pin presigned-URL payload shape and response unwrapping.
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
async fn list_domains_unwraps_collection() {
    let stub = StubTransport::new();
    stub.respond("ListDomains", json!({"Domains": [{"DomainId": "d-1"}]}));
    let client = stub.client(Environment::from_pairs([]));
    assert_eq!(list_domains(&client).await.unwrap().len(), 1);
}

#[tokio::test]
async fn describe_domain_forwards_id() {
    let details = json!({"DomainId": "d-1", "Status": "InService"});
    let stub = StubTransport::new();
    stub.respond("DescribeDomain", details.clone());
    let client = stub.client(Environment::from_pairs([]));

    let response = describe_domain(&client, "d-1").await.unwrap();
    assert_eq!(response, details);
    assert_eq!(stub.calls()[0].payload, json!({"DomainId": "d-1"}));
}

#[tokio::test]
async fn presigned_domain_url_requires_profile_and_defaults_expiration() {
    let stub = StubTransport::new();
    stub.respond(
        "CreatePresignedDomainUrl",
        json!({"AuthorizedUrl": "https://studio.example/auth"}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let url = create_presigned_domain_url(&client, "d-1", "alice", None).await.unwrap();
    assert_eq!(url, "https://studio.example/auth");
    assert_eq!(
        stub.calls()[0].payload,
        json!({
            "DomainId": "d-1",
            "UserProfileName": "alice",
            "ExpirationSeconds": 3600,
        })
    );
}

#[tokio::test]
async fn delete_domain_forwards_id() {
    let stub = StubTransport::new();
    stub.respond("DeleteDomain", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    delete_domain(&client, "d-1").await.unwrap();
    assert_eq!(stub.calls()[0].operation, "DeleteDomain");
}
