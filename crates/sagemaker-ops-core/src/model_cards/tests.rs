// crates/sagemaker-ops-core/src/model_cards/tests.rs
// ============================================================================
// Module: Model Card Operation Tests
// Description: Unit tests for model card forwarding helpers.
// Purpose: Pin export-job filtering and version listing payloads.
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
async fn list_model_cards_unwraps_summaries() {
    let stub = StubTransport::new();
    stub.respond(
        "ListModelCards",
        json!({"ModelCardSummaries": [{"ModelCardName": "card"}]}),
    );
    let client = stub.client(Environment::from_pairs([]));
    assert_eq!(list_model_cards(&client).await.unwrap().len(), 1);
}

#[tokio::test]
async fn export_jobs_are_filtered_by_card_name() {
    let stub = StubTransport::new();
    stub.respond(
        "ListModelCardExportJobs",
        json!({"ModelCardExportJobSummaries": [{"ModelCardExportJobName": "export-1"}]}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let jobs = list_model_card_export_jobs(&client, "card").await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(stub.calls()[0].payload, json!({"ModelCardName": "card"}));
}

#[tokio::test]
async fn versions_unwrap_summary_list() {
    let stub = StubTransport::new();
    stub.respond(
        "ListModelCardVersions",
        json!({"ModelCardVersionSummaryList": [{"ModelCardVersion": 1}, {"ModelCardVersion": 2}]}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let versions = list_model_card_versions(&client, "card").await.unwrap();
    assert_eq!(versions.len(), 2);
}

#[tokio::test]
async fn delete_model_card_forwards_name() {
    let stub = StubTransport::new();
    stub.respond("DeleteModelCard", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    delete_model_card(&client, "card").await.unwrap();
    assert_eq!(stub.calls()[0].operation, "DeleteModelCard");
    assert_eq!(stub.calls()[0].payload, json!({"ModelCardName": "card"}));
}
