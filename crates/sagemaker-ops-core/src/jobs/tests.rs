// crates/sagemaker-ops-core/src/jobs/tests.rs
// ============================================================================
// Module: Job Operation Tests
// Description: Unit tests for job forwarding helpers.
// Purpose: Pin payloads and response-key unwrapping across job families.
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
async fn list_training_jobs_unwraps_summaries() {
    let stub = StubTransport::new();
    stub.respond(
        "ListTrainingJobs",
        json!({"TrainingJobSummaries": [{"TrainingJobName": "t1"}]}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let jobs = list_training_jobs(&client).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["TrainingJobName"], "t1");
}

#[tokio::test]
async fn list_processing_jobs_missing_key_is_empty() {
    let stub = StubTransport::new();
    stub.respond("ListProcessingJobs", json!({"NextToken": "abc"}));
    let client = stub.client(Environment::from_pairs([]));
    assert!(list_processing_jobs(&client).await.unwrap().is_empty());
}

#[tokio::test]
async fn describe_transform_job_returns_mapping_unmodified() {
    let details = json!({
        "TransformJobName": "batch-1",
        "TransformJobStatus": "Completed",
        "ModelName": "my-model",
    });
    let stub = StubTransport::new();
    stub.respond("DescribeTransformJob", details.clone());
    let client = stub.client(Environment::from_pairs([]));

    let response = describe_transform_job(&client, "batch-1").await.unwrap();
    assert_eq!(response, details);
    assert_eq!(
        stub.calls()[0].payload,
        json!({"TransformJobName": "batch-1"})
    );
}

#[tokio::test]
async fn stop_training_job_forwards_name() {
    let stub = StubTransport::new();
    stub.respond("StopTrainingJob", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    stop_training_job(&client, "t1").await.unwrap();
    let calls = stub.calls();
    assert_eq!(calls[0].operation, "StopTrainingJob");
    assert_eq!(calls[0].payload, json!({"TrainingJobName": "t1"}));
}

#[tokio::test]
async fn recommender_steps_unwrap_steps_key() {
    let stub = StubTransport::new();
    stub.respond(
        "ListInferenceRecommendationsJobSteps",
        json!({"Steps": [{"StepType": "BENCHMARK"}]}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let steps = list_inference_recommendations_job_steps(&client, "rec-1").await.unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(stub.calls()[0].payload, json!({"JobName": "rec-1"}));
}

#[tokio::test]
async fn stop_recommender_job_forwards_job_name() {
    let stub = StubTransport::new();
    stub.respond("StopInferenceRecommendationsJob", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    stop_inference_recommendations_job(&client, "rec-1").await.unwrap();
    assert_eq!(stub.calls()[0].payload, json!({"JobName": "rec-1"}));
}
