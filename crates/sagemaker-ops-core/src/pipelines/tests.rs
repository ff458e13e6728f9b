// crates/sagemaker-ops-core/src/pipelines/tests.rs
// ============================================================================
// Module: Pipeline Operation Tests
// Description: Unit tests for pipeline forwarding helpers.
// Purpose: Pin execution-start payload shape and response unwrapping.
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

const EXECUTION_ARN: &str = "arn:aws:sagemaker:us-east-1:123456789012:pipeline/p/execution/e";

#[tokio::test]
async fn list_pipelines_unwraps_summaries() {
    let stub = StubTransport::new();
    stub.respond(
        "ListPipelines",
        json!({"PipelineSummaries": [{"PipelineName": "p"}]}),
    );
    let client = stub.client(Environment::from_pairs([]));
    assert_eq!(list_pipelines(&client).await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_executions_forwards_pipeline_name() {
    let stub = StubTransport::new();
    stub.respond("ListPipelineExecutions", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    let executions = list_pipeline_executions(&client, "p").await.unwrap();
    assert!(executions.is_empty());
    assert_eq!(stub.calls()[0].payload, json!({"PipelineName": "p"}));
}

#[tokio::test]
async fn start_without_parameters_forwards_empty_list() {
    let stub = StubTransport::new();
    stub.respond(
        "StartPipelineExecution",
        json!({"PipelineExecutionArn": EXECUTION_ARN}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let arn = start_pipeline_execution(&client, "p", None).await.unwrap();
    assert_eq!(arn, EXECUTION_ARN);
    assert_eq!(
        stub.calls()[0].payload,
        json!({"PipelineName": "p", "PipelineParameters": []})
    );
}

#[tokio::test]
async fn start_maps_parameters_to_wire_casing() {
    let stub = StubTransport::new();
    stub.respond(
        "StartPipelineExecution",
        json!({"PipelineExecutionArn": EXECUTION_ARN}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let parameters = vec![
        PipelineParameter {
            name: "InputPath".to_string(),
            value: "s3://bucket/in".to_string(),
        },
        PipelineParameter {
            name: "Epochs".to_string(),
            value: "10".to_string(),
        },
    ];
    start_pipeline_execution(&client, "p", Some(parameters)).await.unwrap();
    assert_eq!(
        stub.calls()[0].payload["PipelineParameters"],
        json!([
            {"Name": "InputPath", "Value": "s3://bucket/in"},
            {"Name": "Epochs", "Value": "10"},
        ])
    );
}

#[tokio::test]
async fn describe_execution_forwards_arn_unchanged() {
    let details = json!({"PipelineExecutionArn": EXECUTION_ARN, "PipelineExecutionStatus": "Executing"});
    let stub = StubTransport::new();
    stub.respond("DescribePipelineExecution", details.clone());
    let client = stub.client(Environment::from_pairs([]));

    let response = describe_pipeline_execution(&client, EXECUTION_ARN).await.unwrap();
    assert_eq!(response, details);
    assert_eq!(
        stub.calls()[0].payload,
        json!({"PipelineExecutionArn": EXECUTION_ARN})
    );
}

#[tokio::test]
async fn delete_pipeline_forwards_name() {
    let stub = StubTransport::new();
    stub.respond("DeletePipeline", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    delete_pipeline(&client, "p").await.unwrap();
    assert_eq!(stub.calls()[0].operation, "DeletePipeline");
}
