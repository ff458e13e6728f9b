// crates/sagemaker-ops-mcp/src/tools.rs
// ============================================================================
// Module: Tool Router
// Description: MCP tool dispatch over the SageMaker operation helpers.
// Purpose: Decode tool arguments, forward operations, envelope responses.
// Dependencies: sagemaker-ops-contract, sagemaker-ops-core, serde_json
// ============================================================================

//! ## Overview
//! The router owns the mapping from tool names to operation helpers. Every
//! call resolves a fresh client through the [`ClientProvider`] seam, decodes
//! its arguments from the JSON payload, forwards exactly one control-plane
//! operation, and wraps the outcome in a single-key envelope. Failures past
//! argument decoding are logged and collapsed into one uniform
//! [`ToolError::Operation`] with the message `Failed to <context>: <cause>`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use sagemaker_ops_contract::ToolName;
use sagemaker_ops_contract::tool_definitions;
use sagemaker_ops_core::ApiError;
use sagemaker_ops_core::AppImageConfigSpec;
use sagemaker_ops_core::AppKey;
use sagemaker_ops_core::ConfigError;
use sagemaker_ops_core::Environment;
use sagemaker_ops_core::PipelineParameter;
use sagemaker_ops_core::SageMakerClient;
use sagemaker_ops_core::TrackingServerSize;
use sagemaker_ops_core::apps;
use sagemaker_ops_core::domains;
use sagemaker_ops_core::endpoints;
use sagemaker_ops_core::jobs;
use sagemaker_ops_core::mlflow;
use sagemaker_ops_core::model_cards;
use sagemaker_ops_core::models;
use sagemaker_ops_core::pipelines;
use sagemaker_ops_core::profiles_spaces;
use sagemaker_ops_core::resolve_client;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use tracing::error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

/// Tool definition shape served by tool listings.
pub use sagemaker_ops_contract::ToolDefinition;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Tool routing errors surfaced to JSON-RPC clients.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool name is not part of the contract.
    #[error("unknown tool")]
    UnknownTool,
    /// Tool arguments failed to decode.
    #[error("invalid params: {0}")]
    InvalidParams(String),
    /// The forwarded operation failed.
    #[error("{0}")]
    Operation(String),
    /// A response payload failed to serialize.
    #[error("serialization failed")]
    Serialization,
}

// ============================================================================
// SECTION: Client Provider
// ============================================================================

/// Source of SageMaker clients for tool calls.
///
/// Production resolves a fresh client from the ambient environment per call;
/// tests substitute a stub transport.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    /// Resolves a client for one tool invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when session or client construction fails.
    async fn resolve(&self) -> Result<SageMakerClient, ConfigError>;
}

/// Provider resolving clients from the ambient AWS environment.
pub struct AwsClientProvider;

#[async_trait]
impl ClientProvider for AwsClientProvider {
    async fn resolve(&self) -> Result<SageMakerClient, ConfigError> {
        resolve_client(&Environment::capture(), None).await
    }
}

// ============================================================================
// SECTION: Tool Router
// ============================================================================

/// Routes MCP tool calls to operation helpers.
#[derive(Clone)]
pub struct ToolRouter {
    /// Client source for tool invocations.
    provider: Arc<dyn ClientProvider>,
}

impl ToolRouter {
    /// Builds a router over a client provider.
    #[must_use]
    pub fn new(provider: Arc<dyn ClientProvider>) -> Self {
        Self { provider }
    }

    /// Returns the contract's tool definitions for `tools/list`.
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        tool_definitions()
    }

    /// Dispatches one tool call.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] when the tool is unknown, arguments fail to
    /// decode, or the forwarded operation fails.
    pub async fn handle_tool_call(&self, name: &str, payload: Value) -> Result<Value, ToolError> {
        let tool = ToolName::parse(name).ok_or(ToolError::UnknownTool)?;
        match tool {
            ToolName::ListEndpoints => {
                self.list_tool("list endpoints", "endpoints", |client| async move {
                    endpoints::list_endpoints(&client).await
                })
                .await
            }
            ToolName::ListEndpointConfigs => {
                self.list_tool("list endpoint configs", "endpoint_configs", |client| async move {
                    endpoints::list_endpoint_configs(&client).await
                })
                .await
            }
            ToolName::DescribeEndpoint => {
                let name = required_str(&payload, "endpoint_name")?;
                self.describe_tool(
                    &format!("describe endpoint {name}"),
                    "endpoint_details",
                    move |client| async move { endpoints::describe_endpoint(&client, &name).await },
                )
                .await
            }
            ToolName::DescribeEndpointConfig => {
                let name = required_str(&payload, "endpoint_config_name")?;
                self.describe_tool(
                    &format!("describe endpoint config {name}"),
                    "endpoint_config_details",
                    move |client| async move {
                        endpoints::describe_endpoint_config(&client, &name).await
                    },
                )
                .await
            }
            ToolName::DeleteEndpoint => {
                let name = required_str(&payload, "endpoint_name")?;
                self.message_tool(
                    &format!("delete endpoint {name}"),
                    format!("Endpoint '{name}' deleted successfully"),
                    move |client| async move { endpoints::delete_endpoint(&client, &name).await },
                )
                .await
            }
            ToolName::DeleteEndpointConfig => {
                let name = required_str(&payload, "endpoint_config_name")?;
                self.message_tool(
                    &format!("delete endpoint config {name}"),
                    format!("Endpoint Config '{name}' deleted successfully"),
                    move |client| async move {
                        endpoints::delete_endpoint_config(&client, &name).await
                    },
                )
                .await
            }
            ToolName::ListTrainingJobs => {
                self.list_tool("list training jobs", "training_jobs", |client| async move {
                    jobs::list_training_jobs(&client).await
                })
                .await
            }
            ToolName::DescribeTrainingJob => {
                let name = required_str(&payload, "training_job_name")?;
                self.describe_tool(
                    &format!("describe training job {name}"),
                    "training_job_details",
                    move |client| async move { jobs::describe_training_job(&client, &name).await },
                )
                .await
            }
            ToolName::StopTrainingJob => {
                let name = required_str(&payload, "training_job_name")?;
                self.message_tool(
                    &format!("stop training job {name}"),
                    format!("Training Job '{name}' stopped successfully"),
                    move |client| async move { jobs::stop_training_job(&client, &name).await },
                )
                .await
            }
            ToolName::ListProcessingJobs => {
                self.list_tool("list processing jobs", "processing_jobs", |client| async move {
                    jobs::list_processing_jobs(&client).await
                })
                .await
            }
            ToolName::DescribeProcessingJob => {
                let name = required_str(&payload, "processing_job_name")?;
                self.describe_tool(
                    &format!("describe processing job {name}"),
                    "processing_job_details",
                    move |client| async move {
                        jobs::describe_processing_job(&client, &name).await
                    },
                )
                .await
            }
            ToolName::StopProcessingJob => {
                let name = required_str(&payload, "processing_job_name")?;
                self.message_tool(
                    &format!("stop processing job {name}"),
                    format!("Processing Job '{name}' stopped successfully"),
                    move |client| async move { jobs::stop_processing_job(&client, &name).await },
                )
                .await
            }
            ToolName::ListTransformJobs => {
                self.list_tool("list transform jobs", "transform_jobs", |client| async move {
                    jobs::list_transform_jobs(&client).await
                })
                .await
            }
            ToolName::DescribeTransformJob => {
                let name = required_str(&payload, "transform_job_name")?;
                self.describe_tool(
                    &format!("describe transform job {name}"),
                    "transform_job_details",
                    move |client| async move { jobs::describe_transform_job(&client, &name).await },
                )
                .await
            }
            ToolName::StopTransformJob => {
                let name = required_str(&payload, "transform_job_name")?;
                self.message_tool(
                    &format!("stop transform job {name}"),
                    format!("Transform Job '{name}' stopped successfully"),
                    move |client| async move { jobs::stop_transform_job(&client, &name).await },
                )
                .await
            }
            ToolName::ListInferenceRecommendationsJobs => {
                self.list_tool(
                    "list inference recommender jobs",
                    "inference_recommendations_jobs",
                    |client| async move { jobs::list_inference_recommendations_jobs(&client).await },
                )
                .await
            }
            ToolName::ListInferenceRecommendationsJobSteps => {
                let name = required_str(&payload, "job_name")?;
                self.list_tool(
                    &format!("list steps for inference recommender job {name}"),
                    "steps",
                    move |client| async move {
                        jobs::list_inference_recommendations_job_steps(&client, &name).await
                    },
                )
                .await
            }
            ToolName::DescribeInferenceRecommendationsJob => {
                let name = required_str(&payload, "job_name")?;
                self.describe_tool(
                    &format!("describe inference recommender job {name}"),
                    "job_details",
                    move |client| async move {
                        jobs::describe_inference_recommendations_job(&client, &name).await
                    },
                )
                .await
            }
            ToolName::StopInferenceRecommendationsJob => {
                let name = required_str(&payload, "job_name")?;
                self.message_tool(
                    &format!("stop inference recommender job {name}"),
                    format!("Inference Recommender Job '{name}' stopped successfully"),
                    move |client| async move {
                        jobs::stop_inference_recommendations_job(&client, &name).await
                    },
                )
                .await
            }
            ToolName::ListPipelines => {
                self.list_tool("list pipelines", "pipelines", |client| async move {
                    pipelines::list_pipelines(&client).await
                })
                .await
            }
            ToolName::ListPipelineExecutions => {
                let name = required_str(&payload, "pipeline_name")?;
                self.list_tool(
                    &format!("list executions for pipeline {name}"),
                    "pipeline_executions",
                    move |client| async move {
                        pipelines::list_pipeline_executions(&client, &name).await
                    },
                )
                .await
            }
            ToolName::ListPipelineExecutionSteps => {
                let arn = required_str(&payload, "pipeline_execution_arn")?;
                self.list_tool(
                    &format!("list steps for pipeline execution {arn}"),
                    "pipeline_execution_steps",
                    move |client| async move {
                        pipelines::list_pipeline_execution_steps(&client, &arn).await
                    },
                )
                .await
            }
            ToolName::ListPipelineParametersForExecution => {
                let arn = required_str(&payload, "pipeline_execution_arn")?;
                self.list_tool(
                    &format!("list parameters for pipeline execution {arn}"),
                    "pipeline_parameters",
                    move |client| async move {
                        pipelines::list_pipeline_parameters_for_execution(&client, &arn).await
                    },
                )
                .await
            }
            ToolName::DescribePipeline => {
                let name = required_str(&payload, "pipeline_name")?;
                self.describe_tool(
                    &format!("describe pipeline {name}"),
                    "pipeline_details",
                    move |client| async move { pipelines::describe_pipeline(&client, &name).await },
                )
                .await
            }
            ToolName::DescribePipelineExecution => {
                let arn = required_str(&payload, "pipeline_execution_arn")?;
                self.describe_tool(
                    &format!("describe pipeline execution {arn}"),
                    "pipeline_execution_details",
                    move |client| async move {
                        pipelines::describe_pipeline_execution(&client, &arn).await
                    },
                )
                .await
            }
            ToolName::DescribePipelineDefinitionForExecution => {
                let arn = required_str(&payload, "pipeline_execution_arn")?;
                self.describe_tool(
                    &format!("describe pipeline definition for execution {arn}"),
                    "pipeline_definition",
                    move |client| async move {
                        pipelines::describe_pipeline_definition_for_execution(&client, &arn).await
                    },
                )
                .await
            }
            ToolName::StartPipelineExecution => {
                let name = required_str(&payload, "pipeline_name")?;
                let parameters = optional_parameters(&payload)?;
                let context = format!("start pipeline execution for {name}");
                let result = async {
                    let client = self.client().await?;
                    let arn =
                        pipelines::start_pipeline_execution(&client, &name, parameters).await?;
                    Ok(json!({
                        "message":
                            format!("Pipeline '{name}' started successfully with ARN: {arn}")
                    }))
                }
                .await;
                wrap(&context, result)
            }
            ToolName::StopPipelineExecution => {
                let arn = required_str(&payload, "pipeline_execution_arn")?;
                self.message_tool(
                    &format!("stop pipeline execution {arn}"),
                    format!("Pipeline Execution '{arn}' stopped successfully"),
                    move |client| async move {
                        pipelines::stop_pipeline_execution(&client, &arn).await
                    },
                )
                .await
            }
            ToolName::DeletePipeline => {
                let name = required_str(&payload, "pipeline_name")?;
                self.message_tool(
                    &format!("delete pipeline {name}"),
                    format!("Pipeline '{name}' deleted successfully"),
                    move |client| async move { pipelines::delete_pipeline(&client, &name).await },
                )
                .await
            }
            ToolName::ListMlflowTrackingServers => {
                self.list_tool(
                    "list MLflow tracking servers",
                    "tracking_servers",
                    |client| async move { mlflow::list_mlflow_tracking_servers(&client).await },
                )
                .await
            }
            ToolName::CreateMlflowTrackingServer => {
                let name = required_str(&payload, "tracking_server_name")?;
                let artifact_store_uri = required_str(&payload, "artifact_store_uri")?;
                let size: TrackingServerSize = enum_field(&payload, "tracking_server_size")?;
                self.message_tool(
                    &format!("create MLflow Tracking Server {name}"),
                    format!("MLflow Tracking Server '{name}' created successfully"),
                    move |client| async move {
                        mlflow::create_mlflow_tracking_server(
                            &client,
                            &name,
                            &artifact_store_uri,
                            size,
                        )
                        .await
                        .map(|_| ())
                    },
                )
                .await
            }
            ToolName::CreatePresignedMlflowTrackingServerUrl => {
                let name = required_str(&payload, "tracking_server_name")?;
                let expiration = optional_u64(&payload, "expiration_seconds")?;
                self.url_tool(
                    &format!("create presigned URL for MLflow Tracking Server {name}"),
                    move |client| async move {
                        mlflow::create_presigned_mlflow_tracking_server_url(
                            &client, &name, expiration,
                        )
                        .await
                    },
                )
                .await
            }
            ToolName::DescribeMlflowTrackingServer => {
                let name = required_str(&payload, "tracking_server_name")?;
                self.describe_tool(
                    &format!("describe MLflow Tracking Server {name}"),
                    "tracking_server_details",
                    move |client| async move {
                        mlflow::describe_mlflow_tracking_server(&client, &name).await
                    },
                )
                .await
            }
            ToolName::StartMlflowTrackingServer => {
                let name = required_str(&payload, "tracking_server_name")?;
                self.message_tool(
                    &format!("start MLflow Tracking Server {name}"),
                    format!("MLflow Tracking Server '{name}' started successfully"),
                    move |client| async move {
                        mlflow::start_mlflow_tracking_server(&client, &name).await.map(|_| ())
                    },
                )
                .await
            }
            ToolName::StopMlflowTrackingServer => {
                let name = required_str(&payload, "tracking_server_name")?;
                self.message_tool(
                    &format!("stop MLflow Tracking Server {name}"),
                    format!("MLflow Tracking Server '{name}' stopped successfully"),
                    move |client| async move {
                        mlflow::stop_mlflow_tracking_server(&client, &name).await.map(|_| ())
                    },
                )
                .await
            }
            ToolName::DeleteMlflowTrackingServer => {
                let name = required_str(&payload, "tracking_server_name")?;
                self.message_tool(
                    &format!("delete MLflow Tracking Server {name}"),
                    format!("MLflow Tracking Server '{name}' deleted successfully"),
                    move |client| async move {
                        mlflow::delete_mlflow_tracking_server(&client, &name).await
                    },
                )
                .await
            }
            ToolName::ListDomains => {
                self.list_tool("list domains", "domains", |client| async move {
                    domains::list_domains(&client).await
                })
                .await
            }
            ToolName::DescribeDomain => {
                let id = required_str(&payload, "domain_id")?;
                self.describe_tool(
                    &format!("describe domain {id}"),
                    "domain_details",
                    move |client| async move { domains::describe_domain(&client, &id).await },
                )
                .await
            }
            ToolName::DeleteDomain => {
                let id = required_str(&payload, "domain_id")?;
                self.message_tool(
                    &format!("delete domain {id}"),
                    format!("Domain '{id}' deleted successfully"),
                    move |client| async move { domains::delete_domain(&client, &id).await },
                )
                .await
            }
            ToolName::CreatePresignedDomainUrl => {
                let id = required_str(&payload, "domain_id")?;
                let profile = required_str(&payload, "user_profile_name")?;
                let expiration = optional_u64(&payload, "expiration_seconds")?;
                self.url_tool(
                    &format!("create presigned URL for domain {id}"),
                    move |client| async move {
                        domains::create_presigned_domain_url(&client, &id, &profile, expiration)
                            .await
                    },
                )
                .await
            }
            ToolName::ListApps => {
                self.list_tool("list apps", "apps", |client| async move {
                    apps::list_apps(&client).await
                })
                .await
            }
            ToolName::CreateApp => {
                let key = decode_app_key(&payload)?;
                let resource_spec = optional_object(&payload, "resource_spec")?;
                let app_name = key.app_name.clone();
                self.message_tool(
                    &format!("create app {app_name}"),
                    format!("App '{app_name}' created successfully"),
                    move |client| async move {
                        apps::create_app(&client, &key, resource_spec).await.map(|_| ())
                    },
                )
                .await
            }
            ToolName::DescribeApp => {
                let key = decode_app_key(&payload)?;
                let app_name = key.app_name.clone();
                self.describe_tool(
                    &format!("describe app {app_name}"),
                    "app_details",
                    move |client| async move { apps::describe_app(&client, &key).await },
                )
                .await
            }
            ToolName::DeleteApp => {
                let key = decode_app_key(&payload)?;
                let app_name = key.app_name.clone();
                self.message_tool(
                    &format!("delete app {app_name}"),
                    format!("App '{app_name}' deleted successfully"),
                    move |client| async move { apps::delete_app(&client, &key).await },
                )
                .await
            }
            ToolName::ListAppImageConfigs => {
                self.list_tool("list app image configs", "app_image_configs", |client| async move {
                    apps::list_app_image_configs(&client).await
                })
                .await
            }
            ToolName::CreateAppImageConfig => {
                let name = required_str(&payload, "app_image_config_name")?;
                let spec = AppImageConfigSpec {
                    kernel_gateway_image_config: optional_object(
                        &payload,
                        "kernel_gateway_image_config",
                    )?,
                    jupyter_lab_app_image_config: optional_object(
                        &payload,
                        "jupyter_lab_app_image_config",
                    )?,
                    code_editor_app_image_config: optional_object(
                        &payload,
                        "code_editor_app_image_config",
                    )?,
                };
                self.message_tool(
                    &format!("create app image config {name}"),
                    format!("App Image Config '{name}' created successfully"),
                    move |client| async move {
                        apps::create_app_image_config(&client, &name, spec).await.map(|_| ())
                    },
                )
                .await
            }
            ToolName::DescribeAppImageConfig => {
                let name = required_str(&payload, "app_image_config_name")?;
                self.describe_tool(
                    &format!("describe app image config {name}"),
                    "app_image_config_details",
                    move |client| async move {
                        apps::describe_app_image_config(&client, &name).await
                    },
                )
                .await
            }
            ToolName::DeleteAppImageConfig => {
                let name = required_str(&payload, "app_image_config_name")?;
                self.message_tool(
                    &format!("delete app image config {name}"),
                    format!("App Image Config '{name}' deleted successfully"),
                    move |client| async move {
                        apps::delete_app_image_config(&client, &name).await
                    },
                )
                .await
            }
            ToolName::CreatePresignedNotebookInstanceUrl => {
                let name = required_str(&payload, "notebook_instance_name")?;
                let expiration =
                    optional_u64(&payload, "session_expiration_duration_in_seconds")?;
                self.url_tool(
                    &format!("create presigned URL for notebook instance {name}"),
                    move |client| async move {
                        apps::create_presigned_notebook_instance_url(&client, &name, expiration)
                            .await
                    },
                )
                .await
            }
            ToolName::ListModels => {
                self.list_tool("list models", "models", |client| async move {
                    models::list_models(&client).await
                })
                .await
            }
            ToolName::DescribeModel => {
                let name = required_str(&payload, "model_name")?;
                self.describe_tool(
                    &format!("describe model {name}"),
                    "model_details",
                    move |client| async move { models::describe_model(&client, &name).await },
                )
                .await
            }
            ToolName::DeleteModel => {
                let name = required_str(&payload, "model_name")?;
                self.message_tool(
                    &format!("delete model {name}"),
                    format!("Model '{name}' deleted successfully"),
                    move |client| async move { models::delete_model(&client, &name).await },
                )
                .await
            }
            ToolName::ListModelCards => {
                self.list_tool("list model cards", "model_cards", |client| async move {
                    model_cards::list_model_cards(&client).await
                })
                .await
            }
            ToolName::ListModelCardExportJobs => {
                let name = required_str(&payload, "model_card_name")?;
                self.list_tool(
                    &format!("list export jobs for model card {name}"),
                    "model_card_export_jobs",
                    move |client| async move {
                        model_cards::list_model_card_export_jobs(&client, &name).await
                    },
                )
                .await
            }
            ToolName::ListModelCardVersions => {
                let name = required_str(&payload, "model_card_name")?;
                self.list_tool(
                    &format!("list versions for model card {name}"),
                    "model_card_versions",
                    move |client| async move {
                        model_cards::list_model_card_versions(&client, &name).await
                    },
                )
                .await
            }
            ToolName::DescribeModelCard => {
                let name = required_str(&payload, "model_card_name")?;
                self.describe_tool(
                    &format!("describe model card {name}"),
                    "model_card_details",
                    move |client| async move {
                        model_cards::describe_model_card(&client, &name).await
                    },
                )
                .await
            }
            ToolName::DeleteModelCard => {
                let name = required_str(&payload, "model_card_name")?;
                self.message_tool(
                    &format!("delete model card {name}"),
                    format!("Model Card '{name}' deleted successfully"),
                    move |client| async move {
                        model_cards::delete_model_card(&client, &name).await
                    },
                )
                .await
            }
            ToolName::ListUserProfiles => {
                self.list_tool("list user profiles", "user_profiles", |client| async move {
                    profiles_spaces::list_user_profiles(&client).await
                })
                .await
            }
            ToolName::ListSpaces => {
                self.list_tool("list spaces", "spaces", |client| async move {
                    profiles_spaces::list_spaces(&client).await
                })
                .await
            }
        }
    }

    /// Resolves a client for one invocation.
    async fn client(&self) -> Result<SageMakerClient, ApiError> {
        Ok(self.provider.resolve().await?)
    }

    /// Runs a list operation and envelopes the items under `key`.
    async fn list_tool<F, Fut>(
        &self,
        context: &str,
        key: &str,
        call: F,
    ) -> Result<Value, ToolError>
    where
        F: FnOnce(SageMakerClient) -> Fut + Send,
        Fut: Future<Output = Result<Vec<Value>, ApiError>> + Send,
    {
        let result = async {
            let client = self.client().await?;
            let items = call(client).await?;
            Ok(envelope(key, Value::Array(items)))
        }
        .await;
        wrap(context, result)
    }

    /// Runs a describe operation and envelopes the mapping under `key`.
    async fn describe_tool<F, Fut>(
        &self,
        context: &str,
        key: &str,
        call: F,
    ) -> Result<Value, ToolError>
    where
        F: FnOnce(SageMakerClient) -> Fut + Send,
        Fut: Future<Output = Result<Value, ApiError>> + Send,
    {
        let result = async {
            let client = self.client().await?;
            let details = call(client).await?;
            Ok(envelope(key, details))
        }
        .await;
        wrap(context, result)
    }

    /// Runs a mutating operation and returns a success message envelope.
    async fn message_tool<F, Fut>(
        &self,
        context: &str,
        message: String,
        call: F,
    ) -> Result<Value, ToolError>
    where
        F: FnOnce(SageMakerClient) -> Fut + Send,
        Fut: Future<Output = Result<(), ApiError>> + Send,
    {
        let result = async {
            let client = self.client().await?;
            call(client).await?;
            Ok(json!({"message": message}))
        }
        .await;
        wrap(context, result)
    }

    /// Runs a presigned-URL operation and envelopes the URL.
    async fn url_tool<F, Fut>(&self, context: &str, call: F) -> Result<Value, ToolError>
    where
        F: FnOnce(SageMakerClient) -> Fut + Send,
        Fut: Future<Output = Result<String, ApiError>> + Send,
    {
        let result = async {
            let client = self.client().await?;
            let url = call(client).await?;
            Ok(json!({"presigned_url": url}))
        }
        .await;
        wrap(context, result)
    }
}

// ============================================================================
// SECTION: Envelopes & Wrapping
// ============================================================================

/// Builds a single-key response envelope.
fn envelope(key: &str, value: Value) -> Value {
    let mut fields = Map::new();
    fields.insert(key.to_string(), value);
    Value::Object(fields)
}

/// Collapses an operation outcome into the uniform tool failure.
fn wrap(context: &str, result: Result<Value, ApiError>) -> Result<Value, ToolError> {
    result.map_err(|err| {
        error!(context, %err, "tool operation failed");
        ToolError::Operation(format!("Failed to {context}: {err}"))
    })
}

// ============================================================================
// SECTION: Argument Decoding
// ============================================================================

/// Extracts a required string argument.
fn required_str(payload: &Value, field: &str) -> Result<String, ToolError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ToolError::InvalidParams(format!("{field} must be a non-empty string")))
}

/// Extracts an optional non-negative integer argument.
fn optional_u64(payload: &Value, field: &str) -> Result<Option<u64>, ToolError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| {
                ToolError::InvalidParams(format!("{field} must be a non-negative integer"))
            }),
    }
}

/// Extracts an optional JSON object argument.
fn optional_object(payload: &Value, field: &str) -> Result<Option<Value>, ToolError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Object(_)) => Ok(Some(value.clone())),
        Some(_) => Err(ToolError::InvalidParams(format!("{field} must be an object"))),
    }
}

/// Decodes a required closed-enumeration argument.
fn enum_field<T: DeserializeOwned>(payload: &Value, field: &str) -> Result<T, ToolError> {
    let value = payload
        .get(field)
        .cloned()
        .ok_or_else(|| ToolError::InvalidParams(format!("{field} is required")))?;
    serde_json::from_value(value)
        .map_err(|err| ToolError::InvalidParams(format!("{field}: {err}")))
}

/// Decodes the optional pipeline parameter list.
fn optional_parameters(payload: &Value) -> Result<Option<Vec<PipelineParameter>>, ToolError> {
    match payload.get("parameters") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| ToolError::InvalidParams(format!("parameters: {err}"))),
    }
}

/// Decodes the four-part app key shared by app tools.
fn decode_app_key(payload: &Value) -> Result<AppKey, ToolError> {
    Ok(AppKey {
        domain_id: required_str(payload, "domain_id")?,
        user_profile_name: required_str(payload, "user_profile_name")?,
        app_type: enum_field(payload, "app_type")?,
        app_name: required_str(payload, "app_name")?,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
