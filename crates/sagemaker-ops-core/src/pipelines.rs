// crates/sagemaker-ops-core/src/pipelines.rs
// ============================================================================
// Module: Pipeline Operations
// Description: Forwarding helpers for pipelines and pipeline executions.
// Purpose: List, describe, start, stop, and delete pipelines.
// Dependencies: serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! Pipelines are identified by name; executions by ARN. Starting an
//! execution always forwards a `PipelineParameters` list, empty when the
//! caller supplies none, and returns the new execution's ARN.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use tracing::info;

use crate::client::SageMakerClient;
use crate::client::take_list;
use crate::client::take_string;
use crate::error::ApiError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One name/value parameter passed to a pipeline execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineParameter {
    /// Parameter name as declared by the pipeline definition.
    pub name: String,
    /// Parameter value, always a string on the wire.
    pub value: String,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Lists all pipelines.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_pipelines(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker pipelines");
    let response = client.call("ListPipelines", json!({})).await?;
    Ok(take_list(response, "PipelineSummaries"))
}

/// Lists the executions of one pipeline.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_pipeline_executions(
    client: &SageMakerClient,
    pipeline_name: &str,
) -> Result<Vec<Value>, ApiError> {
    info!(pipeline_name, "listing pipeline executions");
    let response = client
        .call("ListPipelineExecutions", json!({"PipelineName": pipeline_name}))
        .await?;
    Ok(take_list(response, "PipelineExecutionSummaries"))
}

/// Lists the steps of one pipeline execution.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_pipeline_execution_steps(
    client: &SageMakerClient,
    pipeline_execution_arn: &str,
) -> Result<Vec<Value>, ApiError> {
    info!(pipeline_execution_arn, "listing pipeline execution steps");
    let response = client
        .call(
            "ListPipelineExecutionSteps",
            json!({"PipelineExecutionArn": pipeline_execution_arn}),
        )
        .await?;
    Ok(take_list(response, "PipelineExecutionSteps"))
}

/// Lists the parameters one pipeline execution was started with.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_pipeline_parameters_for_execution(
    client: &SageMakerClient,
    pipeline_execution_arn: &str,
) -> Result<Vec<Value>, ApiError> {
    info!(pipeline_execution_arn, "listing pipeline execution parameters");
    let response = client
        .call(
            "ListPipelineParametersForExecution",
            json!({"PipelineExecutionArn": pipeline_execution_arn}),
        )
        .await?;
    Ok(take_list(response, "PipelineParameters"))
}

/// Describes one pipeline.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_pipeline(
    client: &SageMakerClient,
    pipeline_name: &str,
) -> Result<Value, ApiError> {
    info!(pipeline_name, "describing SageMaker pipeline");
    client.call("DescribePipeline", json!({"PipelineName": pipeline_name})).await
}

/// Describes one pipeline execution.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_pipeline_execution(
    client: &SageMakerClient,
    pipeline_execution_arn: &str,
) -> Result<Value, ApiError> {
    info!(pipeline_execution_arn, "describing pipeline execution");
    client
        .call(
            "DescribePipelineExecution",
            json!({"PipelineExecutionArn": pipeline_execution_arn}),
        )
        .await
}

/// Describes the pipeline definition one execution ran against.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_pipeline_definition_for_execution(
    client: &SageMakerClient,
    pipeline_execution_arn: &str,
) -> Result<Value, ApiError> {
    info!(pipeline_execution_arn, "describing pipeline definition for execution");
    client
        .call(
            "DescribePipelineDefinitionForExecution",
            json!({"PipelineExecutionArn": pipeline_execution_arn}),
        )
        .await
}

/// Starts a new execution of a pipeline and returns its ARN.
///
/// An absent parameter list is forwarded as an empty one, never omitted.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn start_pipeline_execution(
    client: &SageMakerClient,
    pipeline_name: &str,
    parameters: Option<Vec<PipelineParameter>>,
) -> Result<String, ApiError> {
    info!(pipeline_name, "starting pipeline execution");
    let wire_parameters: Vec<Value> = parameters
        .unwrap_or_default()
        .into_iter()
        .map(|parameter| json!({"Name": parameter.name, "Value": parameter.value}))
        .collect();
    let response = client
        .call(
            "StartPipelineExecution",
            json!({
                "PipelineName": pipeline_name,
                "PipelineParameters": wire_parameters,
            }),
        )
        .await?;
    Ok(take_string(response, "PipelineExecutionArn"))
}

/// Stops a running pipeline execution.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn stop_pipeline_execution(
    client: &SageMakerClient,
    pipeline_execution_arn: &str,
) -> Result<(), ApiError> {
    info!(pipeline_execution_arn, "stopping pipeline execution");
    client
        .call(
            "StopPipelineExecution",
            json!({"PipelineExecutionArn": pipeline_execution_arn}),
        )
        .await?;
    info!(pipeline_execution_arn, "pipeline execution stopped");
    Ok(())
}

/// Deletes a pipeline.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_pipeline(
    client: &SageMakerClient,
    pipeline_name: &str,
) -> Result<(), ApiError> {
    info!(pipeline_name, "deleting SageMaker pipeline");
    client.call("DeletePipeline", json!({"PipelineName": pipeline_name})).await?;
    info!(pipeline_name, "pipeline deleted");
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
