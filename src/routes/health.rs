use crate::{lead_submission::LeadWorkflow, state::AppState};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use lazy_static::lazy_static;
use std::sync::Arc;
use utoipa::ToSchema;

lazy_static! {
    static ref NAME: String = env!("CARGO_PKG_NAME").to_string();
    static ref VERSION: String = env!("CARGO_PKG_VERSION").to_string();
}

/// Create a router to serve health checks.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(is_alive))
        .route("/info", get(build_info))
        .route("/status", get(status))
}

/// Simple `is_alive` endpoint that will always return a 200 OK.
/// Used to indicate when the webserver is up and running.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Check if service is alive"))
)]
pub async fn is_alive() -> StatusCode {
    tracing::debug!("Service is alive");
    StatusCode::OK
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct Status {
    contacts_api_key_configured: bool,
    contacts_list_id: Option<i64>,
}

/// Report whether the contacts API is configured. Without a key every lead
/// ends up as "already subscribed" and never reaches the contact list.
#[tracing::instrument(skip(lead_workflow))]
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = OK, description = "Configuration of the dependent services", body = Status)
    )
)]
pub async fn status(State(lead_workflow): State<Arc<LeadWorkflow>>) -> Json<Status> {
    let contacts_client = lead_workflow.contacts_client();
    let status = Status {
        contacts_api_key_configured: contacts_client.has_api_key(),
        contacts_list_id: contacts_client.list_id(),
    };
    tracing::info!("Status: {:?}", status);
    Json(status)
}

#[derive(serde::Serialize, ToSchema)]
pub struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

/// Endpoint to get current information about the server's version.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = OK, description = "Build info for this service", body = BuildInfo)
    )
)]
pub async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: NAME.as_str(),
        version: VERSION.as_str(),
    })
}
