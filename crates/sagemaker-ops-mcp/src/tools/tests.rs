// crates/sagemaker-ops-mcp/src/tools/tests.rs
// ============================================================================
// Module: Tool Router Tests
// Description: Unit tests for tool dispatch, envelopes, and failure wrapping.
// Purpose: Pin wire payloads, response envelopes, and the uniform failure text.
// Dependencies: sagemaker-ops-core, serde_json, tokio
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items,
    reason = "test code favors brevity over production lint walls"
)]

use sagemaker_ops_core::session::SAGEMAKER_EXECUTION_ROLE_ENV;
use sagemaker_ops_core::testing::StubTransport;

use super::*;

struct StubProvider {
    client: SageMakerClient,
}

#[async_trait]
impl ClientProvider for StubProvider {
    async fn resolve(&self) -> Result<SageMakerClient, ConfigError> {
        Ok(self.client.clone())
    }
}

fn router(stub: &StubTransport, env: Environment) -> ToolRouter {
    ToolRouter::new(Arc::new(StubProvider { client: stub.client(env) }))
}

fn bare_router(stub: &StubTransport) -> ToolRouter {
    router(stub, Environment::from_pairs([]))
}

#[tokio::test]
async fn list_endpoints_envelopes_summaries() {
    let stub = StubTransport::new();
    stub.respond(
        "ListEndpoints",
        json!({"Endpoints": [{"EndpointName": "alpha"}, {"EndpointName": "beta"}]}),
    );
    let response =
        bare_router(&stub).handle_tool_call("list_endpoints", json!({})).await.unwrap();
    assert_eq!(
        response,
        json!({"endpoints": [{"EndpointName": "alpha"}, {"EndpointName": "beta"}]})
    );
}

#[tokio::test]
async fn delete_endpoint_forwards_name_and_confirms() {
    let stub = StubTransport::new();
    stub.respond("DeleteEndpoint", json!({}));
    let response = bare_router(&stub)
        .handle_tool_call("delete_endpoint", json!({"endpoint_name": "my-endpoint"}))
        .await
        .unwrap();
    assert_eq!(response, json!({"message": "Endpoint 'my-endpoint' deleted successfully"}));

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, "DeleteEndpoint");
    assert_eq!(calls[0].payload, json!({"EndpointName": "my-endpoint"}));
}

#[tokio::test]
async fn describe_pipeline_execution_envelopes_details() {
    let stub = StubTransport::new();
    stub.respond(
        "DescribePipelineExecution",
        json!({"PipelineExecutionStatus": "Executing"}),
    );
    let response = bare_router(&stub)
        .handle_tool_call(
            "describe_pipeline_execution",
            json!({"pipeline_execution_arn": "arn:aws:sagemaker:us-east-1:111:pipeline/p/execution/e"}),
        )
        .await
        .unwrap();
    assert_eq!(
        response,
        json!({"pipeline_execution_details": {"PipelineExecutionStatus": "Executing"}})
    );
}

#[tokio::test]
async fn start_pipeline_execution_reports_arn_and_maps_parameters() {
    let stub = StubTransport::new();
    stub.respond(
        "StartPipelineExecution",
        json!({"PipelineExecutionArn": "arn:aws:sagemaker:us-east-1:111:pipeline/train/execution/abc"}),
    );
    let response = bare_router(&stub)
        .handle_tool_call(
            "start_pipeline_execution",
            json!({
                "pipeline_name": "train",
                "parameters": [{"name": "Epochs", "value": "10"}],
            }),
        )
        .await
        .unwrap();
    assert_eq!(
        response,
        json!({
            "message": "Pipeline 'train' started successfully with ARN: \
                        arn:aws:sagemaker:us-east-1:111:pipeline/train/execution/abc"
        })
    );

    let calls = stub.calls();
    assert_eq!(calls[0].operation, "StartPipelineExecution");
    assert_eq!(
        calls[0].payload,
        json!({
            "PipelineName": "train",
            "PipelineParameters": [{"Name": "Epochs", "Value": "10"}],
        })
    );
}

#[tokio::test]
async fn create_tracking_server_without_role_fails_before_any_call() {
    let stub = StubTransport::new();
    let err = bare_router(&stub)
        .handle_tool_call(
            "create_mlflow_tracking_server",
            json!({
                "tracking_server_name": "ts",
                "artifact_store_uri": "s3://bucket/mlflow",
                "tracking_server_size": "Small",
            }),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to create MLflow Tracking Server ts: \
         SAGEMAKER_EXECUTION_ROLE_ARN environment variable is not set"
    );
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn create_tracking_server_forwards_resolved_role() {
    let stub = StubTransport::new();
    stub.respond(
        "CreateMlflowTrackingServer",
        json!({"TrackingServerArn": "arn:aws:sagemaker:us-east-1:111:mlflow-tracking-server/ts"}),
    );
    let env = Environment::from_pairs([(
        SAGEMAKER_EXECUTION_ROLE_ENV,
        "arn:aws:iam::111:role/SageMakerExecution",
    )]);
    let response = router(&stub, env)
        .handle_tool_call(
            "create_mlflow_tracking_server",
            json!({
                "tracking_server_name": "ts",
                "artifact_store_uri": "s3://bucket/mlflow",
                "tracking_server_size": "Medium",
            }),
        )
        .await
        .unwrap();
    assert_eq!(
        response,
        json!({"message": "MLflow Tracking Server 'ts' created successfully"})
    );
    assert_eq!(
        stub.calls()[0].payload["RoleArn"],
        "arn:aws:iam::111:role/SageMakerExecution"
    );
}

#[tokio::test]
async fn presigned_domain_url_defaults_to_one_hour() {
    let stub = StubTransport::new();
    stub.respond(
        "CreatePresignedDomainUrl",
        json!({"AuthorizedUrl": "https://studio.example/auth"}),
    );
    let response = bare_router(&stub)
        .handle_tool_call(
            "create_presigned_domain_url",
            json!({"domain_id": "d-1", "user_profile_name": "alice"}),
        )
        .await
        .unwrap();
    assert_eq!(response, json!({"presigned_url": "https://studio.example/auth"}));
    assert_eq!(stub.calls()[0].payload["ExpirationSeconds"], 3600);
}

#[tokio::test]
async fn create_app_forwards_resource_spec_only_when_supplied() {
    let stub = StubTransport::new();
    stub.respond("CreateApp", json!({"AppArn": "arn:aws:sagemaker:us-east-1:111:app/a"}));
    stub.respond("CreateApp", json!({"AppArn": "arn:aws:sagemaker:us-east-1:111:app/a"}));

    let router = bare_router(&stub);
    let key = json!({
        "domain_id": "d-1",
        "user_profile_name": "alice",
        "app_type": "JupyterLab",
        "app_name": "lab",
    });
    let response = router.handle_tool_call("create_app", key.clone()).await.unwrap();
    assert_eq!(response, json!({"message": "App 'lab' created successfully"}));

    let mut with_spec = key;
    with_spec["resource_spec"] = json!({"InstanceType": "ml.t3.medium"});
    router.handle_tool_call("create_app", with_spec).await.unwrap();

    let calls = stub.calls();
    assert!(calls[0].payload.get("ResourceSpec").is_none());
    assert_eq!(calls[1].payload["ResourceSpec"], json!({"InstanceType": "ml.t3.medium"}));
}

#[tokio::test]
async fn service_failures_collapse_into_uniform_message() {
    let stub = StubTransport::new();
    stub.fail(
        "DeleteEndpoint",
        ApiError::Service {
            code: "ValidationException".to_string(),
            message: "Could not find endpoint".to_string(),
        },
    );
    let err = bare_router(&stub)
        .handle_tool_call("delete_endpoint", json!({"endpoint_name": "missing"}))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to delete endpoint missing: ValidationException: Could not find endpoint"
    );
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let stub = StubTransport::new();
    let err = bare_router(&stub).handle_tool_call("terminate_region", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn missing_required_argument_is_invalid_params() {
    let stub = StubTransport::new();
    let err =
        bare_router(&stub).handle_tool_call("describe_endpoint", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidParams(_)));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn malformed_enumeration_is_invalid_params() {
    let stub = StubTransport::new();
    let err = bare_router(&stub)
        .handle_tool_call(
            "describe_app",
            json!({
                "domain_id": "d-1",
                "user_profile_name": "alice",
                "app_type": "Mainframe",
                "app_name": "lab",
            }),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidParams(_)));
}

#[tokio::test]
async fn list_tools_exposes_the_full_contract() {
    let stub = StubTransport::new();
    let definitions = bare_router(&stub).list_tools();
    assert_eq!(definitions.len(), ToolName::all().len());
}
