// crates/sagemaker-ops-core/src/client/tests.rs
// ============================================================================
// Module: Client Tests
// Description: Unit tests for response decoding and the client seam.
// Purpose: Pin error-type trimming and list/string extraction behavior.
// Dependencies: serde_json
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items,
    reason = "test code favors brevity over production lint walls"
)]

use serde_json::json;

use super::*;
use crate::testing::StubTransport;

#[test]
fn take_list_returns_items() {
    let response = json!({"Endpoints": [{"EndpointName": "a"}, {"EndpointName": "b"}]});
    let items = take_list(response, "Endpoints");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["EndpointName"], "a");
}

#[test]
fn take_list_missing_key_is_empty() {
    assert!(take_list(json!({}), "Endpoints").is_empty());
}

#[test]
fn take_list_non_array_is_empty() {
    assert!(take_list(json!({"Endpoints": "oops"}), "Endpoints").is_empty());
}

#[test]
fn take_string_returns_value() {
    let response = json!({"PipelineExecutionArn": "arn:aws:sagemaker:us-east-1:1:pe/x"});
    assert_eq!(
        take_string(response, "PipelineExecutionArn"),
        "arn:aws:sagemaker:us-east-1:1:pe/x"
    );
}

#[test]
fn take_string_missing_key_is_empty() {
    assert_eq!(take_string(json!({}), "AuthorizedUrl"), "");
}

#[test]
fn error_type_trims_namespace_and_metadata() {
    assert_eq!(
        trim_error_type("com.amazonaws.sagemaker#ValidationException"),
        "ValidationException"
    );
    assert_eq!(
        trim_error_type("ResourceNotFound:http://internal.amazon.com/coral/"),
        "ResourceNotFound"
    );
    assert_eq!(trim_error_type("ThrottlingException"), "ThrottlingException");
}

#[test]
fn service_error_prefers_header_over_body_type() {
    let body = json!({"__type": "com.amazonaws.sagemaker#Other", "message": "nope"});
    let err = service_error(
        400,
        Some("ns#ValidationException".to_string()),
        &serde_json::to_vec(&body).unwrap(),
    );
    assert_eq!(err.to_string(), "ValidationException: nope");
}

#[test]
fn service_error_falls_back_to_body_type_and_status() {
    let body = json!({"__type": "ns#ResourceNotFound", "Message": "no such endpoint"});
    let err = service_error(400, None, &serde_json::to_vec(&body).unwrap());
    assert_eq!(err.to_string(), "ResourceNotFound: no such endpoint");

    let err = service_error(503, None, b"");
    assert_eq!(err.to_string(), "HTTP503: request rejected by service");
}

#[tokio::test]
async fn client_forwards_operation_and_payload() {
    let stub = StubTransport::new();
    stub.respond("DescribeEndpoint", json!({"EndpointName": "prod"}));
    let client = stub.client(Environment::from_pairs([]));

    let response = client
        .call("DescribeEndpoint", json!({"EndpointName": "prod"}))
        .await
        .unwrap();
    assert_eq!(response["EndpointName"], "prod");

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, "DescribeEndpoint");
    assert_eq!(calls[0].payload, json!({"EndpointName": "prod"}));
}

#[tokio::test]
async fn unscripted_operation_is_a_transport_error() {
    let stub = StubTransport::new();
    let client = stub.client(Environment::from_pairs([]));
    let err = client.call("ListEndpoints", json!({})).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
