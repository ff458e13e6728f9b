// crates/sagemaker-ops-core/src/apps.rs
// ============================================================================
// Module: App Operations
// Description: Forwarding helpers for Studio apps and app image configs.
// Purpose: Manage per-user apps and custom image configurations.
// Dependencies: serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! Apps are addressed by a four-part key (domain, user profile, type, name),
//! so the mutating helpers here take all four. Optional configuration bags
//! are forwarded verbatim only when supplied; an absent bag never becomes an
//! explicit null on the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use tracing::info;

use crate::client::SageMakerClient;
use crate::client::take_list;
use crate::client::take_string;
use crate::error::ApiError;
use crate::mlflow::DEFAULT_PRESIGNED_URL_EXPIRATION_SECS;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Kind of Studio app.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppType {
    /// Classic Studio Jupyter server.
    JupyterServer,
    /// Kernel gateway backing notebook kernels.
    KernelGateway,
    /// RStudio Workbench server.
    RStudioServerPro,
    /// RStudio session gateway.
    RSessionGateway,
    /// SageMaker Canvas.
    Canvas,
    /// JupyterLab application.
    JupyterLab,
    /// Code Editor application.
    CodeEditor,
    /// TensorBoard visualization.
    TensorBoard,
    /// Detailed profiler application.
    DetailedProfiler,
}

impl AppType {
    /// Wire name of the app type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JupyterServer => "JupyterServer",
            Self::KernelGateway => "KernelGateway",
            Self::RStudioServerPro => "RStudioServerPro",
            Self::RSessionGateway => "RSessionGateway",
            Self::Canvas => "Canvas",
            Self::JupyterLab => "JupyterLab",
            Self::CodeEditor => "CodeEditor",
            Self::TensorBoard => "TensorBoard",
            Self::DetailedProfiler => "DetailedProfiler",
        }
    }
}

/// Four-part key addressing one Studio app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKey {
    /// Domain the app lives in.
    pub domain_id: String,
    /// User profile that owns the app.
    pub user_profile_name: String,
    /// Kind of app.
    pub app_type: AppType,
    /// App name, unique within the profile and type.
    pub app_name: String,
}

impl AppKey {
    /// Renders the key as an operation payload.
    fn payload(&self) -> Value {
        json!({
            "DomainId": self.domain_id,
            "UserProfileName": self.user_profile_name,
            "AppType": self.app_type.as_str(),
            "AppName": self.app_name,
        })
    }
}

/// Optional per-type image configuration bags for an app image config.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppImageConfigSpec {
    /// Kernel gateway image configuration, forwarded verbatim.
    pub kernel_gateway_image_config: Option<Value>,
    /// JupyterLab image configuration, forwarded verbatim.
    pub jupyter_lab_app_image_config: Option<Value>,
    /// Code Editor image configuration, forwarded verbatim.
    pub code_editor_app_image_config: Option<Value>,
}

// ============================================================================
// SECTION: App Operations
// ============================================================================

/// Lists all Studio apps.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_apps(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker apps");
    let response = client.call("ListApps", json!({})).await?;
    Ok(take_list(response, "Apps"))
}

/// Creates a Studio app and returns its ARN.
///
/// The resource specification is forwarded only when supplied.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn create_app(
    client: &SageMakerClient,
    key: &AppKey,
    resource_spec: Option<Value>,
) -> Result<String, ApiError> {
    info!(
        app_name = %key.app_name,
        app_type = key.app_type.as_str(),
        domain_id = %key.domain_id,
        "creating SageMaker app"
    );
    let mut payload = key.payload();
    if let (Some(fields), Some(spec)) = (payload.as_object_mut(), resource_spec) {
        fields.insert("ResourceSpec".to_string(), spec);
    }
    let response = client.call("CreateApp", payload).await?;
    info!(app_name = %key.app_name, "app creation initiated");
    Ok(take_string(response, "AppArn"))
}

/// Describes one Studio app.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_app(client: &SageMakerClient, key: &AppKey) -> Result<Value, ApiError> {
    info!(app_name = %key.app_name, domain_id = %key.domain_id, "describing SageMaker app");
    client.call("DescribeApp", key.payload()).await
}

/// Deletes a Studio app.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_app(client: &SageMakerClient, key: &AppKey) -> Result<(), ApiError> {
    info!(app_name = %key.app_name, domain_id = %key.domain_id, "deleting SageMaker app");
    client.call("DeleteApp", key.payload()).await?;
    info!(app_name = %key.app_name, "app deletion initiated");
    Ok(())
}

// ============================================================================
// SECTION: App Image Config Operations
// ============================================================================

/// Lists all app image configs.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn list_app_image_configs(client: &SageMakerClient) -> Result<Vec<Value>, ApiError> {
    info!("listing SageMaker app image configs");
    let response = client.call("ListAppImageConfigs", json!({})).await?;
    Ok(take_list(response, "AppImageConfigs"))
}

/// Creates an app image config and returns its ARN.
///
/// Each per-type configuration bag is forwarded only when supplied.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn create_app_image_config(
    client: &SageMakerClient,
    app_image_config_name: &str,
    spec: AppImageConfigSpec,
) -> Result<String, ApiError> {
    info!(app_image_config_name, "creating SageMaker app image config");
    let mut fields = Map::new();
    fields.insert(
        "AppImageConfigName".to_string(),
        Value::String(app_image_config_name.to_string()),
    );
    if let Some(config) = spec.kernel_gateway_image_config {
        fields.insert("KernelGatewayImageConfig".to_string(), config);
    }
    if let Some(config) = spec.jupyter_lab_app_image_config {
        fields.insert("JupyterLabAppImageConfig".to_string(), config);
    }
    if let Some(config) = spec.code_editor_app_image_config {
        fields.insert("CodeEditorAppImageConfig".to_string(), config);
    }
    let response = client.call("CreateAppImageConfig", Value::Object(fields)).await?;
    info!(app_image_config_name, "app image config created");
    Ok(take_string(response, "AppImageConfigArn"))
}

/// Describes one app image config.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn describe_app_image_config(
    client: &SageMakerClient,
    app_image_config_name: &str,
) -> Result<Value, ApiError> {
    info!(app_image_config_name, "describing SageMaker app image config");
    client
        .call(
            "DescribeAppImageConfig",
            json!({"AppImageConfigName": app_image_config_name}),
        )
        .await
}

/// Deletes an app image config.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn delete_app_image_config(
    client: &SageMakerClient,
    app_image_config_name: &str,
) -> Result<(), ApiError> {
    info!(app_image_config_name, "deleting SageMaker app image config");
    client
        .call(
            "DeleteAppImageConfig",
            json!({"AppImageConfigName": app_image_config_name}),
        )
        .await?;
    info!(app_image_config_name, "app image config deleted");
    Ok(())
}

// ============================================================================
// SECTION: Notebook Instance URLs
// ============================================================================

/// Creates a presigned URL for a classic notebook instance.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the control plane.
pub async fn create_presigned_notebook_instance_url(
    client: &SageMakerClient,
    notebook_instance_name: &str,
    session_expiration_duration_in_seconds: Option<u64>,
) -> Result<String, ApiError> {
    info!(notebook_instance_name, "creating presigned notebook instance URL");
    let response = client
        .call(
            "CreatePresignedNotebookInstanceUrl",
            json!({
                "NotebookInstanceName": notebook_instance_name,
                "SessionExpirationDurationInSeconds": session_expiration_duration_in_seconds
                    .unwrap_or(DEFAULT_PRESIGNED_URL_EXPIRATION_SECS),
            }),
        )
        .await?;
    Ok(take_string(response, "AuthorizedUrl"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
