// crates/sagemaker-ops-contract/src/types.rs
// ============================================================================
// Module: Tooling Identifiers
// Description: Canonical MCP tool identifiers and listing shapes.
// Purpose: Shared tool naming across the contract and the runtime.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Canonical tool identifiers for the SageMaker Ops MCP server.
//! These names are part of the external contract surface.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Tool Names
// ============================================================================

/// Canonical tool names for the SageMaker Ops MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// List all endpoints.
    ListEndpoints,
    /// List all endpoint configurations.
    ListEndpointConfigs,
    /// Describe one endpoint.
    DescribeEndpoint,
    /// Describe one endpoint configuration.
    DescribeEndpointConfig,
    /// Delete an endpoint.
    DeleteEndpoint,
    /// Delete an endpoint configuration.
    DeleteEndpointConfig,
    /// List all training jobs.
    ListTrainingJobs,
    /// Describe one training job.
    DescribeTrainingJob,
    /// Stop a running training job.
    StopTrainingJob,
    /// List all processing jobs.
    ListProcessingJobs,
    /// Describe one processing job.
    DescribeProcessingJob,
    /// Stop a running processing job.
    StopProcessingJob,
    /// List all batch transform jobs.
    ListTransformJobs,
    /// Describe one transform job.
    DescribeTransformJob,
    /// Stop a running transform job.
    StopTransformJob,
    /// List all inference recommender jobs.
    ListInferenceRecommendationsJobs,
    /// List the steps of one inference recommender job.
    ListInferenceRecommendationsJobSteps,
    /// Describe one inference recommender job.
    DescribeInferenceRecommendationsJob,
    /// Stop a running inference recommender job.
    StopInferenceRecommendationsJob,
    /// List all pipelines.
    ListPipelines,
    /// List the executions of one pipeline.
    ListPipelineExecutions,
    /// List the steps of one pipeline execution.
    ListPipelineExecutionSteps,
    /// List the parameters one pipeline execution was started with.
    ListPipelineParametersForExecution,
    /// Describe one pipeline.
    DescribePipeline,
    /// Describe one pipeline execution.
    DescribePipelineExecution,
    /// Describe the definition one pipeline execution ran against.
    DescribePipelineDefinitionForExecution,
    /// Start a new pipeline execution.
    StartPipelineExecution,
    /// Stop a running pipeline execution.
    StopPipelineExecution,
    /// Delete a pipeline.
    DeletePipeline,
    /// List all managed MLflow tracking servers.
    ListMlflowTrackingServers,
    /// Create a managed MLflow tracking server.
    CreateMlflowTrackingServer,
    /// Create a presigned URL for a tracking server.
    CreatePresignedMlflowTrackingServerUrl,
    /// Describe one tracking server.
    DescribeMlflowTrackingServer,
    /// Start a stopped tracking server.
    StartMlflowTrackingServer,
    /// Stop a running tracking server.
    StopMlflowTrackingServer,
    /// Delete a tracking server.
    DeleteMlflowTrackingServer,
    /// List all Studio domains.
    ListDomains,
    /// Describe one domain.
    DescribeDomain,
    /// Delete a domain.
    DeleteDomain,
    /// Create a presigned Studio URL for a user profile.
    CreatePresignedDomainUrl,
    /// List all Studio apps.
    ListApps,
    /// Create a Studio app.
    CreateApp,
    /// Describe one Studio app.
    DescribeApp,
    /// Delete a Studio app.
    DeleteApp,
    /// List all app image configs.
    ListAppImageConfigs,
    /// Create an app image config.
    CreateAppImageConfig,
    /// Describe one app image config.
    DescribeAppImageConfig,
    /// Delete an app image config.
    DeleteAppImageConfig,
    /// Create a presigned URL for a classic notebook instance.
    CreatePresignedNotebookInstanceUrl,
    /// List all models.
    ListModels,
    /// Describe one model.
    DescribeModel,
    /// Delete a model.
    DeleteModel,
    /// List all model cards.
    ListModelCards,
    /// List the export jobs of one model card.
    ListModelCardExportJobs,
    /// List the versions of one model card.
    ListModelCardVersions,
    /// Describe one model card.
    DescribeModelCard,
    /// Delete a model card.
    DeleteModelCard,
    /// List all user profiles.
    ListUserProfiles,
    /// List all shared spaces.
    ListSpaces,
}

impl ToolName {
    /// Returns the canonical string name for the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListEndpoints => "list_endpoints",
            Self::ListEndpointConfigs => "list_endpoint_configs",
            Self::DescribeEndpoint => "describe_endpoint",
            Self::DescribeEndpointConfig => "describe_endpoint_config",
            Self::DeleteEndpoint => "delete_endpoint",
            Self::DeleteEndpointConfig => "delete_endpoint_config",
            Self::ListTrainingJobs => "list_training_jobs",
            Self::DescribeTrainingJob => "describe_training_job",
            Self::StopTrainingJob => "stop_training_job",
            Self::ListProcessingJobs => "list_processing_jobs",
            Self::DescribeProcessingJob => "describe_processing_job",
            Self::StopProcessingJob => "stop_processing_job",
            Self::ListTransformJobs => "list_transform_jobs",
            Self::DescribeTransformJob => "describe_transform_job",
            Self::StopTransformJob => "stop_transform_job",
            Self::ListInferenceRecommendationsJobs => "list_inference_recommendations_jobs",
            Self::ListInferenceRecommendationsJobSteps => {
                "list_inference_recommendations_job_steps"
            }
            Self::DescribeInferenceRecommendationsJob => "describe_inference_recommendations_job",
            Self::StopInferenceRecommendationsJob => "stop_inference_recommendations_job",
            Self::ListPipelines => "list_pipelines",
            Self::ListPipelineExecutions => "list_pipeline_executions",
            Self::ListPipelineExecutionSteps => "list_pipeline_execution_steps",
            Self::ListPipelineParametersForExecution => "list_pipeline_parameters_for_execution",
            Self::DescribePipeline => "describe_pipeline",
            Self::DescribePipelineExecution => "describe_pipeline_execution",
            Self::DescribePipelineDefinitionForExecution => {
                "describe_pipeline_definition_for_execution"
            }
            Self::StartPipelineExecution => "start_pipeline_execution",
            Self::StopPipelineExecution => "stop_pipeline_execution",
            Self::DeletePipeline => "delete_pipeline",
            Self::ListMlflowTrackingServers => "list_mlflow_tracking_servers",
            Self::CreateMlflowTrackingServer => "create_mlflow_tracking_server",
            Self::CreatePresignedMlflowTrackingServerUrl => {
                "create_presigned_mlflow_tracking_server_url"
            }
            Self::DescribeMlflowTrackingServer => "describe_mlflow_tracking_server",
            Self::StartMlflowTrackingServer => "start_mlflow_tracking_server",
            Self::StopMlflowTrackingServer => "stop_mlflow_tracking_server",
            Self::DeleteMlflowTrackingServer => "delete_mlflow_tracking_server",
            Self::ListDomains => "list_domains",
            Self::DescribeDomain => "describe_domain",
            Self::DeleteDomain => "delete_domain",
            Self::CreatePresignedDomainUrl => "create_presigned_domain_url",
            Self::ListApps => "list_apps",
            Self::CreateApp => "create_app",
            Self::DescribeApp => "describe_app",
            Self::DeleteApp => "delete_app",
            Self::ListAppImageConfigs => "list_app_image_configs",
            Self::CreateAppImageConfig => "create_app_image_config",
            Self::DescribeAppImageConfig => "describe_app_image_config",
            Self::DeleteAppImageConfig => "delete_app_image_config",
            Self::CreatePresignedNotebookInstanceUrl => "create_presigned_notebook_instance_url",
            Self::ListModels => "list_models",
            Self::DescribeModel => "describe_model",
            Self::DeleteModel => "delete_model",
            Self::ListModelCards => "list_model_cards",
            Self::ListModelCardExportJobs => "list_model_card_export_jobs",
            Self::ListModelCardVersions => "list_model_card_versions",
            Self::DescribeModelCard => "describe_model_card",
            Self::DeleteModelCard => "delete_model_card",
            Self::ListUserProfiles => "list_user_profiles",
            Self::ListSpaces => "list_spaces",
        }
    }

    /// Returns all tool names in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ListEndpoints,
            Self::ListEndpointConfigs,
            Self::DescribeEndpoint,
            Self::DescribeEndpointConfig,
            Self::DeleteEndpoint,
            Self::DeleteEndpointConfig,
            Self::ListTrainingJobs,
            Self::DescribeTrainingJob,
            Self::StopTrainingJob,
            Self::ListProcessingJobs,
            Self::DescribeProcessingJob,
            Self::StopProcessingJob,
            Self::ListTransformJobs,
            Self::DescribeTransformJob,
            Self::StopTransformJob,
            Self::ListInferenceRecommendationsJobs,
            Self::ListInferenceRecommendationsJobSteps,
            Self::DescribeInferenceRecommendationsJob,
            Self::StopInferenceRecommendationsJob,
            Self::ListPipelines,
            Self::ListPipelineExecutions,
            Self::ListPipelineExecutionSteps,
            Self::ListPipelineParametersForExecution,
            Self::DescribePipeline,
            Self::DescribePipelineExecution,
            Self::DescribePipelineDefinitionForExecution,
            Self::StartPipelineExecution,
            Self::StopPipelineExecution,
            Self::DeletePipeline,
            Self::ListMlflowTrackingServers,
            Self::CreateMlflowTrackingServer,
            Self::CreatePresignedMlflowTrackingServerUrl,
            Self::DescribeMlflowTrackingServer,
            Self::StartMlflowTrackingServer,
            Self::StopMlflowTrackingServer,
            Self::DeleteMlflowTrackingServer,
            Self::ListDomains,
            Self::DescribeDomain,
            Self::DeleteDomain,
            Self::CreatePresignedDomainUrl,
            Self::ListApps,
            Self::CreateApp,
            Self::DescribeApp,
            Self::DeleteApp,
            Self::ListAppImageConfigs,
            Self::CreateAppImageConfig,
            Self::DescribeAppImageConfig,
            Self::DeleteAppImageConfig,
            Self::CreatePresignedNotebookInstanceUrl,
            Self::ListModels,
            Self::DescribeModel,
            Self::DeleteModel,
            Self::ListModelCards,
            Self::ListModelCardExportJobs,
            Self::ListModelCardVersions,
            Self::DescribeModelCard,
            Self::DeleteModelCard,
            Self::ListUserProfiles,
            Self::ListSpaces,
        ]
    }

    /// Parses a tool name from its string representation.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tool| tool.as_str() == name)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tool Definitions
// ============================================================================

/// Tool definition used by MCP tool listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// MCP tool name.
    pub name: ToolName,
    /// Tool description for clients.
    pub description: String,
    /// JSON schema for tool input.
    pub input_schema: Value,
}
