// crates/sagemaker-ops-core/src/jobs.rs
// ============================================================================
// Module: Job Operations
// Description: Forwarding helpers for training, processing, transform, and
//              inference recommender jobs.
// Purpose: List, describe, and stop batch workloads.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! Four job families share one contract: lists unwrap their summary key,
//! describes return the mapping unmodified, stops forward the identifier and
//! return nothing. The inference recommender additionally exposes per-job
//! steps.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;
use tracing::info;

use crate::client::SageMakerClient;
use crate::client::take_list;
use crate::error::ApiError;

// ============================================================================
// SECTION: Training Jobs
// ============================================================================

/// Lists all training jobs.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_training_jobs(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker training jobs");
    let response = client.call("ListTrainingJobs", json!({})).await?;
    Ok(take_list(response, "TrainingJobSummaries"))
}

/// Describes one training job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_training_job(
    client: &SageMakerClient,
    training_job_name: &str,
) -> Result<Value, ApiError> {
    info!(training_job_name, "describing SageMaker training job");
    client
        .call("DescribeTrainingJob", json!({"TrainingJobName": training_job_name}))
        .await
}

/// Stops a running training job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn stop_training_job(
    client: &SageMakerClient,
    training_job_name: &str,
) -> Result<(), ApiError> {
    info!(training_job_name, "stopping SageMaker training job");
    client
        .call("StopTrainingJob", json!({"TrainingJobName": training_job_name}))
        .await?;
    info!(training_job_name, "training job stopped");
    Ok(())
}

// ============================================================================
// SECTION: Processing Jobs
// ============================================================================

/// Lists all processing jobs.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_processing_jobs(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker processing jobs");
    let response = client.call("ListProcessingJobs", json!({})).await?;
    Ok(take_list(response, "ProcessingJobSummaries"))
}

/// Describes one processing job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_processing_job(
    client: &SageMakerClient,
    processing_job_name: &str,
) -> Result<Value, ApiError> {
    info!(processing_job_name, "describing SageMaker processing job");
    client
        .call(
            "DescribeProcessingJob",
            json!({"ProcessingJobName": processing_job_name}),
        )
        .await
}

/// Stops a running processing job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn stop_processing_job(
    client: &SageMakerClient,
    processing_job_name: &str,
) -> Result<(), ApiError> {
    info!(processing_job_name, "stopping SageMaker processing job");
    client
        .call("StopProcessingJob", json!({"ProcessingJobName": processing_job_name}))
        .await?;
    info!(processing_job_name, "processing job stopped");
    Ok(())
}

// ============================================================================
// SECTION: Transform Jobs
// ============================================================================

/// Lists all batch transform jobs.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_transform_jobs(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker transform jobs");
    let response = client.call("ListTransformJobs", json!({})).await?;
    Ok(take_list(response, "TransformJobSummaries"))
}

/// Describes one transform job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_transform_job(
    client: &SageMakerClient,
    transform_job_name: &str,
) -> Result<Value, ApiError> {
    info!(transform_job_name, "describing SageMaker transform job");
    client
        .call("DescribeTransformJob", json!({"TransformJobName": transform_job_name}))
        .await
}

/// Stops a running transform job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn stop_transform_job(
    client: &SageMakerClient,
    transform_job_name: &str,
) -> Result<(), ApiError> {
    info!(transform_job_name, "stopping SageMaker transform job");
    client
        .call("StopTransformJob", json!({"TransformJobName": transform_job_name}))
        .await?;
    Ok(())
}

// ============================================================================
// SECTION: Inference Recommender Jobs
// ============================================================================

/// Lists all inference recommender jobs.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_inference_recommendations_jobs(
    client: &SageMakerClient,
) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker inference recommender jobs");
    let response = client.call("ListInferenceRecommendationsJobs", json!({})).await?;
    Ok(take_list(response, "InferenceRecommendationsJobs"))
}

/// Lists the steps of one inference recommender job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_inference_recommendations_job_steps(
    client: &SageMakerClient,
    job_name: &str,
) -> Result<Vec<Value>, ApiError> {
    info!(job_name, "listing steps for inference recommender job");
    let response = client
        .call(
            "ListInferenceRecommendationsJobSteps",
            json!({"JobName": job_name}),
        )
        .await?;
    Ok(take_list(response, "Steps"))
}

/// Describes one inference recommender job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_inference_recommendations_job(
    client: &SageMakerClient,
    job_name: &str,
) -> Result<Value, ApiError> {
    info!(job_name, "describing SageMaker inference recommender job");
    client
        .call("DescribeInferenceRecommendationsJob", json!({"JobName": job_name}))
        .await
}

/// Stops a running inference recommender job.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn stop_inference_recommendations_job(
    client: &SageMakerClient,
    job_name: &str,
) -> Result<(), ApiError> {
    info!(job_name, "stopping SageMaker inference recommender job");
    client
        .call("StopInferenceRecommendationsJob", json!({"JobName": job_name}))
        .await?;
    info!(job_name, "inference recommender job stopped");
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
