// crates/sagemaker-ops-core/src/apps/tests.rs
// ============================================================================
// Module: App Operation Tests
// Description: Unit tests for app and app image config helpers.
// Purpose: Pin four-part app addressing and optional-bag omission.
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

fn sample_key() -> AppKey {
    AppKey {
        domain_id: "d-1".to_string(),
        user_profile_name: "alice".to_string(),
        app_type: AppType::JupyterLab,
        app_name: "lab".to_string(),
    }
}

#[tokio::test]
async fn create_app_without_resource_spec_omits_field() {
    let stub = StubTransport::new();
    stub.respond("CreateApp", json!({"AppArn": "arn:aws:sagemaker:us-east-1:1:app/lab"}));
    let client = stub.client(Environment::from_pairs([]));

    let arn = create_app(&client, &sample_key(), None).await.unwrap();
    assert_eq!(arn, "arn:aws:sagemaker:us-east-1:1:app/lab");
    assert_eq!(
        stub.calls()[0].payload,
        json!({
            "DomainId": "d-1",
            "UserProfileName": "alice",
            "AppType": "JupyterLab",
            "AppName": "lab",
        })
    );
}

#[tokio::test]
async fn create_app_forwards_resource_spec_when_supplied() {
    let stub = StubTransport::new();
    stub.respond("CreateApp", json!({"AppArn": "arn"}));
    let client = stub.client(Environment::from_pairs([]));

    let spec = json!({"InstanceType": "ml.t3.medium"});
    create_app(&client, &sample_key(), Some(spec.clone())).await.unwrap();
    assert_eq!(stub.calls()[0].payload["ResourceSpec"], spec);
}

#[tokio::test]
async fn delete_app_sends_all_four_key_parts() {
    let stub = StubTransport::new();
    stub.respond("DeleteApp", json!({}));
    let client = stub.client(Environment::from_pairs([]));

    delete_app(&client, &sample_key()).await.unwrap();
    let payload = &stub.calls()[0].payload;
    assert_eq!(payload["DomainId"], "d-1");
    assert_eq!(payload["UserProfileName"], "alice");
    assert_eq!(payload["AppType"], "JupyterLab");
    assert_eq!(payload["AppName"], "lab");
}

#[tokio::test]
async fn image_config_bags_are_forwarded_only_when_supplied() {
    let stub = StubTransport::new();
    stub.respond(
        "CreateAppImageConfig",
        json!({"AppImageConfigArn": "arn:aws:sagemaker:us-east-1:1:app-image-config/c"}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let spec = AppImageConfigSpec {
        kernel_gateway_image_config: Some(json!({"KernelSpecs": [{"Name": "python3"}]})),
        ..AppImageConfigSpec::default()
    };
    let arn = create_app_image_config(&client, "c", spec).await.unwrap();
    assert_eq!(arn, "arn:aws:sagemaker:us-east-1:1:app-image-config/c");

    let payload = &stub.calls()[0].payload;
    assert_eq!(payload["AppImageConfigName"], "c");
    assert!(payload.get("KernelGatewayImageConfig").is_some());
    assert!(payload.get("JupyterLabAppImageConfig").is_none());
    assert!(payload.get("CodeEditorAppImageConfig").is_none());
}

#[tokio::test]
async fn list_app_image_configs_unwraps_collection() {
    let stub = StubTransport::new();
    stub.respond(
        "ListAppImageConfigs",
        json!({"AppImageConfigs": [{"AppImageConfigName": "c"}]}),
    );
    let client = stub.client(Environment::from_pairs([]));
    assert_eq!(list_app_image_configs(&client).await.unwrap().len(), 1);
}

#[tokio::test]
async fn notebook_url_defaults_session_expiration() {
    let stub = StubTransport::new();
    stub.respond(
        "CreatePresignedNotebookInstanceUrl",
        json!({"AuthorizedUrl": "https://nb.example/auth"}),
    );
    let client = stub.client(Environment::from_pairs([]));

    let url = create_presigned_notebook_instance_url(&client, "nb", None).await.unwrap();
    assert_eq!(url, "https://nb.example/auth");
    assert_eq!(
        stub.calls()[0].payload,
        json!({
            "NotebookInstanceName": "nb",
            "SessionExpirationDurationInSeconds": 3600,
        })
    );
}

#[test]
fn app_types_round_trip_wire_names() {
    let parsed: AppType = serde_json::from_value(json!("KernelGateway")).unwrap();
    assert_eq!(parsed, AppType::KernelGateway);
    assert_eq!(AppType::RStudioServerPro.as_str(), "RStudioServerPro");
}
