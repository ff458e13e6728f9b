// crates/sagemaker-ops-core/src/lib.rs
// ============================================================================
// Module: SageMaker Ops Core Library
// Description: Session resolution, signed transport, and operation helpers.
// Purpose: Provide the forwarding layer between tools and the control plane.
// Dependencies: aws-config, aws-sigv4, reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The core crate owns everything below the tool surface: resolving AWS
//! sessions from the environment, signing and posting control-plane requests,
//! and one thin async helper per remote operation grouped by resource domain.
//! Helpers never retry, paginate, or catch remote failures; they marshal
//! arguments, forward the call, and unwrap the documented response key.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod apps;
pub mod client;
pub mod domains;
pub mod endpoints;
pub mod error;
pub mod jobs;
pub mod mlflow;
pub mod model_cards;
pub mod models;
pub mod pipelines;
pub mod profiles_spaces;
pub mod session;
pub mod testing;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use apps::AppImageConfigSpec;
pub use apps::AppKey;
pub use apps::AppType;
pub use client::SageMakerClient;
pub use client::SageMakerTransport;
pub use client::SigV4Transport;
pub use client::resolve_client;
pub use error::ApiError;
pub use error::ConfigError;
pub use mlflow::DEFAULT_PRESIGNED_URL_EXPIRATION_SECS;
pub use mlflow::TrackingServerSize;
pub use pipelines::PipelineParameter;
pub use session::Environment;
pub use session::SessionSettings;
pub use session::resolve_execution_role;
pub use session::resolve_region;
pub use session::resolve_session;
pub use session::session_settings;
