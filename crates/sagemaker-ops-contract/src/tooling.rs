// crates/sagemaker-ops-contract/src/tooling.rs
// ============================================================================
// Module: MCP Tool Contracts
// Description: Canonical MCP tool definitions and input schemas.
// Purpose: Drive MCP tool listings with strict, deterministic schemas.
// Dependencies: serde_json, sagemaker-ops-contract::types
// ============================================================================

//! ## Overview
//! This module defines the canonical MCP tool surface: one definition per
//! control-plane operation with a draft 2020-12 input schema. Tool inputs are
//! untrusted; schemas are published for clients, decoding happens at the
//! runtime boundary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::types::ToolDefinition;
use crate::types::ToolName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Closed enumeration of Studio app types.
pub const APP_TYPES: &[&str] = &[
    "JupyterServer",
    "KernelGateway",
    "RStudioServerPro",
    "RSessionGateway",
    "Canvas",
    "JupyterLab",
    "CodeEditor",
    "TensorBoard",
    "DetailedProfiler",
];

/// Closed enumeration of tracking server capacity tiers.
pub const TRACKING_SERVER_SIZES: &[&str] = &["Small", "Medium", "Large"];

// ============================================================================
// SECTION: Tool Definitions
// ============================================================================

/// Returns the canonical MCP tool definitions.
///
/// The order is intentional: it is preserved in tool listings to keep diffs
/// stable across releases. Append new tools at the end of their resource
/// group.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        definition(ToolName::ListEndpoints, "List all SageMaker Endpoints", no_input_schema()),
        definition(
            ToolName::ListEndpointConfigs,
            "List all SageMaker Endpoint Configurations",
            no_input_schema(),
        ),
        definition(
            ToolName::DescribeEndpoint,
            "Describe a SageMaker Endpoint",
            identifier_schema("endpoint_name", "The name of the SageMaker Endpoint to describe"),
        ),
        definition(
            ToolName::DescribeEndpointConfig,
            "Describe a SageMaker Endpoint Configuration",
            identifier_schema(
                "endpoint_config_name",
                "The name of the SageMaker Endpoint Configuration to describe",
            ),
        ),
        definition(
            ToolName::DeleteEndpoint,
            "Delete a SageMaker Endpoint",
            identifier_schema("endpoint_name", "The name of the SageMaker Endpoint to delete"),
        ),
        definition(
            ToolName::DeleteEndpointConfig,
            "Delete a SageMaker Endpoint Configuration",
            identifier_schema(
                "endpoint_config_name",
                "The name of the SageMaker Endpoint Configuration to delete",
            ),
        ),
        definition(ToolName::ListTrainingJobs, "List all SageMaker Training Jobs", no_input_schema()),
        definition(
            ToolName::DescribeTrainingJob,
            "Describe a SageMaker Training Job",
            identifier_schema(
                "training_job_name",
                "The name of the SageMaker Training Job to describe",
            ),
        ),
        definition(
            ToolName::StopTrainingJob,
            "Stop a SageMaker Training Job",
            identifier_schema("training_job_name", "The name of the SageMaker Training Job to stop"),
        ),
        definition(
            ToolName::ListProcessingJobs,
            "List all SageMaker Processing Jobs",
            no_input_schema(),
        ),
        definition(
            ToolName::DescribeProcessingJob,
            "Describe a SageMaker Processing Job",
            identifier_schema(
                "processing_job_name",
                "The name of the SageMaker Processing Job to describe",
            ),
        ),
        definition(
            ToolName::StopProcessingJob,
            "Stop a SageMaker Processing Job",
            identifier_schema(
                "processing_job_name",
                "The name of the SageMaker Processing Job to stop",
            ),
        ),
        definition(
            ToolName::ListTransformJobs,
            "List all SageMaker Transform Jobs",
            no_input_schema(),
        ),
        definition(
            ToolName::DescribeTransformJob,
            "Describe a SageMaker Transform Job",
            identifier_schema(
                "transform_job_name",
                "The name of the SageMaker Transform Job to describe",
            ),
        ),
        definition(
            ToolName::StopTransformJob,
            "Stop a SageMaker Transform Job",
            identifier_schema(
                "transform_job_name",
                "The name of the SageMaker Transform Job to stop",
            ),
        ),
        definition(
            ToolName::ListInferenceRecommendationsJobs,
            "List all SageMaker Inference Recommender Jobs",
            no_input_schema(),
        ),
        definition(
            ToolName::ListInferenceRecommendationsJobSteps,
            "List the steps of a SageMaker Inference Recommender Job",
            identifier_schema("job_name", "The name of the SageMaker Inference Recommender Job"),
        ),
        definition(
            ToolName::DescribeInferenceRecommendationsJob,
            "Describe a SageMaker Inference Recommender Job",
            identifier_schema(
                "job_name",
                "The name of the SageMaker Inference Recommender Job to describe",
            ),
        ),
        definition(
            ToolName::StopInferenceRecommendationsJob,
            "Stop a SageMaker Inference Recommender Job",
            identifier_schema(
                "job_name",
                "The name of the SageMaker Inference Recommender Job to stop",
            ),
        ),
        definition(ToolName::ListPipelines, "List all SageMaker Pipelines", no_input_schema()),
        definition(
            ToolName::ListPipelineExecutions,
            "List the executions of a SageMaker Pipeline",
            identifier_schema("pipeline_name", "The name of the SageMaker Pipeline"),
        ),
        definition(
            ToolName::ListPipelineExecutionSteps,
            "List the steps of a SageMaker Pipeline Execution",
            identifier_schema(
                "pipeline_execution_arn",
                "The ARN of the SageMaker Pipeline Execution",
            ),
        ),
        definition(
            ToolName::ListPipelineParametersForExecution,
            "List the parameters of a SageMaker Pipeline Execution",
            identifier_schema(
                "pipeline_execution_arn",
                "The ARN of the SageMaker Pipeline Execution",
            ),
        ),
        definition(
            ToolName::DescribePipeline,
            "Describe a SageMaker Pipeline",
            identifier_schema("pipeline_name", "The name of the SageMaker Pipeline to describe"),
        ),
        definition(
            ToolName::DescribePipelineExecution,
            "Describe a SageMaker Pipeline Execution",
            identifier_schema(
                "pipeline_execution_arn",
                "The ARN of the SageMaker Pipeline Execution to describe",
            ),
        ),
        definition(
            ToolName::DescribePipelineDefinitionForExecution,
            "Describe the definition of a SageMaker Pipeline Execution",
            identifier_schema(
                "pipeline_execution_arn",
                "The ARN of the SageMaker Pipeline Execution",
            ),
        ),
        definition(
            ToolName::StartPipelineExecution,
            "Start a SageMaker Pipeline Execution",
            start_pipeline_execution_schema(),
        ),
        definition(
            ToolName::StopPipelineExecution,
            "Stop a SageMaker Pipeline Execution",
            identifier_schema(
                "pipeline_execution_arn",
                "The ARN of the SageMaker Pipeline Execution to stop",
            ),
        ),
        definition(
            ToolName::DeletePipeline,
            "Delete a SageMaker Pipeline",
            identifier_schema("pipeline_name", "The name of the SageMaker Pipeline to delete"),
        ),
        definition(
            ToolName::ListMlflowTrackingServers,
            "List all Managed MLflow Tracking Servers in SageMaker",
            no_input_schema(),
        ),
        definition(
            ToolName::CreateMlflowTrackingServer,
            "Create a Managed MLflow Tracking Server in SageMaker",
            create_mlflow_tracking_server_schema(),
        ),
        definition(
            ToolName::CreatePresignedMlflowTrackingServerUrl,
            "Create a presigned URL for a Managed MLflow Tracking Server",
            presigned_schema(
                "tracking_server_name",
                "The name of the MLflow Tracking Server to create a presigned URL for",
                "expiration_seconds",
            ),
        ),
        definition(
            ToolName::DescribeMlflowTrackingServer,
            "Describe a Managed MLflow Tracking Server",
            identifier_schema(
                "tracking_server_name",
                "The name of the MLflow Tracking Server to describe",
            ),
        ),
        definition(
            ToolName::StartMlflowTrackingServer,
            "Start a Managed MLflow Tracking Server",
            identifier_schema(
                "tracking_server_name",
                "The name of the MLflow Tracking Server to start",
            ),
        ),
        definition(
            ToolName::StopMlflowTrackingServer,
            "Stop a Managed MLflow Tracking Server",
            identifier_schema(
                "tracking_server_name",
                "The name of the MLflow Tracking Server to stop",
            ),
        ),
        definition(
            ToolName::DeleteMlflowTrackingServer,
            "Delete a Managed MLflow Tracking Server",
            identifier_schema(
                "tracking_server_name",
                "The name of the MLflow Tracking Server to delete",
            ),
        ),
        definition(ToolName::ListDomains, "List all SageMaker Domains", no_input_schema()),
        definition(
            ToolName::DescribeDomain,
            "Describe a SageMaker Domain",
            identifier_schema("domain_id", "The ID of the SageMaker Domain to describe"),
        ),
        definition(
            ToolName::DeleteDomain,
            "Delete a SageMaker Domain",
            identifier_schema("domain_id", "The ID of the SageMaker Domain to delete"),
        ),
        definition(
            ToolName::CreatePresignedDomainUrl,
            "Create a presigned URL for a SageMaker Domain",
            create_presigned_domain_url_schema(),
        ),
        definition(ToolName::ListApps, "List all SageMaker Apps", no_input_schema()),
        definition(ToolName::CreateApp, "Create a SageMaker App", create_app_schema()),
        definition(ToolName::DescribeApp, "Describe a SageMaker App", app_key_schema()),
        definition(ToolName::DeleteApp, "Delete a SageMaker App", app_key_schema()),
        definition(
            ToolName::ListAppImageConfigs,
            "List all SageMaker App Image Configs",
            no_input_schema(),
        ),
        definition(
            ToolName::CreateAppImageConfig,
            "Create a SageMaker App Image Config",
            create_app_image_config_schema(),
        ),
        definition(
            ToolName::DescribeAppImageConfig,
            "Describe a SageMaker App Image Config",
            identifier_schema(
                "app_image_config_name",
                "The name of the SageMaker App Image Config to describe",
            ),
        ),
        definition(
            ToolName::DeleteAppImageConfig,
            "Delete a SageMaker App Image Config",
            identifier_schema(
                "app_image_config_name",
                "The name of the SageMaker App Image Config to delete",
            ),
        ),
        definition(
            ToolName::CreatePresignedNotebookInstanceUrl,
            "Create a presigned URL for a SageMaker Notebook Instance",
            presigned_schema(
                "notebook_instance_name",
                "The name of the SageMaker Notebook Instance",
                "session_expiration_duration_in_seconds",
            ),
        ),
        definition(ToolName::ListModels, "List all SageMaker Models", no_input_schema()),
        definition(
            ToolName::DescribeModel,
            "Describe a SageMaker Model",
            identifier_schema("model_name", "The name of the SageMaker Model to describe"),
        ),
        definition(
            ToolName::DeleteModel,
            "Delete a SageMaker Model",
            identifier_schema("model_name", "The name of the SageMaker Model to delete"),
        ),
        definition(ToolName::ListModelCards, "List all SageMaker Model Cards", no_input_schema()),
        definition(
            ToolName::ListModelCardExportJobs,
            "List the export jobs of a SageMaker Model Card",
            identifier_schema("model_card_name", "The name of the SageMaker Model Card"),
        ),
        definition(
            ToolName::ListModelCardVersions,
            "List the versions of a SageMaker Model Card",
            identifier_schema("model_card_name", "The name of the SageMaker Model Card"),
        ),
        definition(
            ToolName::DescribeModelCard,
            "Describe a SageMaker Model Card",
            identifier_schema("model_card_name", "The name of the SageMaker Model Card to describe"),
        ),
        definition(
            ToolName::DeleteModelCard,
            "Delete a SageMaker Model Card",
            identifier_schema("model_card_name", "The name of the SageMaker Model Card to delete"),
        ),
        definition(ToolName::ListUserProfiles, "List all SageMaker User Profiles", no_input_schema()),
        definition(ToolName::ListSpaces, "List all SageMaker Spaces", no_input_schema()),
    ]
}

/// Builds one tool definition.
fn definition(name: ToolName, description: &str, input_schema: Value) -> ToolDefinition {
    ToolDefinition {
        name,
        description: description.to_string(),
        input_schema,
    }
}

// ============================================================================
// SECTION: Input Schemas
// ============================================================================

/// Schema for tools taking no arguments.
fn no_input_schema() -> Value {
    with_schema(object_schema(&json!({}), &[]))
}

/// Schema for tools taking one required string identifier.
fn identifier_schema(field: &str, description: &str) -> Value {
    with_schema(object_schema(
        &json!({ field: schema_string(description) }),
        &[field],
    ))
}

/// Schema for presigned-URL tools: one identifier plus an optional
/// expiration defaulting to 3600 seconds.
fn presigned_schema(field: &str, description: &str, expiration_field: &str) -> Value {
    with_schema(object_schema(
        &json!({
            field: schema_string(description),
            expiration_field: {
                "type": "integer",
                "minimum": 1,
                "default": 3600,
                "description": "The number of seconds the presigned URL should be valid for"
            },
        }),
        &[field],
    ))
}

/// Schema for `start_pipeline_execution`.
fn start_pipeline_execution_schema() -> Value {
    with_schema(object_schema(
        &json!({
            "pipeline_name": schema_string("The name of the SageMaker Pipeline to start"),
            "parameters": {
                "type": "array",
                "description": "Parameters to pass to the pipeline execution",
                "items": object_schema(
                    &json!({
                        "name": schema_string("Parameter name"),
                        "value": schema_string("Parameter value"),
                    }),
                    &["name", "value"],
                ),
            },
        }),
        &["pipeline_name"],
    ))
}

/// Schema for `create_mlflow_tracking_server`.
fn create_mlflow_tracking_server_schema() -> Value {
    with_schema(object_schema(
        &json!({
            "tracking_server_name":
                schema_string("The name of the MLflow Tracking Server to create"),
            "artifact_store_uri": schema_string("The S3 URI for the artifact store"),
            "tracking_server_size": {
                "type": "string",
                "enum": TRACKING_SERVER_SIZES,
                "description": "The size of the MLflow Tracking Server to create"
            },
        }),
        &["tracking_server_name", "artifact_store_uri", "tracking_server_size"],
    ))
}

/// Schema for `create_presigned_domain_url`.
fn create_presigned_domain_url_schema() -> Value {
    with_schema(object_schema(
        &json!({
            "domain_id": schema_string("The ID of the SageMaker Domain"),
            "user_profile_name": schema_string("The name of the user profile"),
            "expiration_seconds": {
                "type": "integer",
                "minimum": 1,
                "default": 3600,
                "description": "The number of seconds the presigned URL should be valid for"
            },
        }),
        &["domain_id", "user_profile_name"],
    ))
}

/// Schema for `create_app`.
fn create_app_schema() -> Value {
    with_schema(object_schema(
        &json!({
            "domain_id": schema_string("The ID of the domain in which to create the app"),
            "user_profile_name": schema_string("The name of the owning user profile"),
            "app_type": {
                "type": "string",
                "enum": APP_TYPES,
                "description": "The type of app to create"
            },
            "app_name": schema_string("The name of the app"),
            "resource_spec": {
                "type": "object",
                "description": "The resource specification for the app",
            },
        }),
        &["domain_id", "user_profile_name", "app_type", "app_name"],
    ))
}

/// Schema shared by `describe_app` and `delete_app`.
fn app_key_schema() -> Value {
    with_schema(object_schema(
        &json!({
            "domain_id": schema_string("The ID of the domain in which the app resides"),
            "user_profile_name": schema_string("The name of the owning user profile"),
            "app_type": {
                "type": "string",
                "enum": APP_TYPES,
                "description": "The type of app"
            },
            "app_name": schema_string("The name of the app"),
        }),
        &["domain_id", "user_profile_name", "app_type", "app_name"],
    ))
}

/// Schema for `create_app_image_config`.
fn create_app_image_config_schema() -> Value {
    with_schema(object_schema(
        &json!({
            "app_image_config_name":
                schema_string("The name of the SageMaker App Image Config to create"),
            "kernel_gateway_image_config": {
                "type": "object",
                "description": "Kernel gateway image configuration, forwarded verbatim",
            },
            "jupyter_lab_app_image_config": {
                "type": "object",
                "description": "JupyterLab image configuration, forwarded verbatim",
            },
            "code_editor_app_image_config": {
                "type": "object",
                "description": "Code Editor image configuration, forwarded verbatim",
            },
        }),
        &["app_image_config_name"],
    ))
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Builds an object schema without the top-level `$schema` annotation.
#[must_use]
fn object_schema(properties: &Value, required: &[&str]) -> Value {
    let required_values: Vec<Value> =
        required.iter().map(|value| Value::String((*value).to_string())).collect();
    json!({
        "type": "object",
        "required": required_values,
        "properties": properties,
        "additionalProperties": false
    })
}

/// Adds a `$schema` header to a top-level JSON schema.
#[must_use]
fn with_schema(schema: Value) -> Value {
    let Value::Object(mut map) = schema else {
        return schema;
    };
    map.insert(
        String::from("$schema"),
        Value::String(String::from("https://json-schema.org/draft/2020-12/schema")),
    );
    Value::Object(map)
}

/// Returns a schema describing a string field.
#[must_use]
fn schema_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
