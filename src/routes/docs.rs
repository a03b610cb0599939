use crate::{routes::*, state::AppState};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::{
    header::{self, ACCEPT},
    HeaderMap,
};
use utoipa::OpenApi;

/// Documentation for the service. Can be converted into JSON or YAML.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::is_alive,
        health::status,
        health::build_info,
        pages::home,
        pages::instant_funding,
        leads::submit_lead,
        thank_you::thank_you,
        events::record_event,
        crate::metrics::metrics_endpoint,
    ),
    components(schemas(
        health::Status,
        health::BuildInfo,
        leads::LeadForm,
        events::EventBody,
        crate::domain::FormOrigin,
    ))
)]
struct ApiDoc;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/openapi", get(serve_openapi_docs))
        .route("/openapi.json", get(serve_openapi_docs_as_json))
        .route("/openapi.yaml", get(serve_openapi_docs_as_yaml))
}

/// Serve OpenApi docs based on the `Accept` header.
#[tracing::instrument(skip(headers))]
pub async fn serve_openapi_docs(headers: HeaderMap) -> Response {
    match headers.get(ACCEPT).and_then(|x| x.to_str().ok()) {
        Some("application/yaml") => serve_openapi_docs_as_yaml().await,
        _ => serve_openapi_docs_as_json().await,
    }
}

/// Endpoint to serve OpenApi docs as JSON.
#[tracing::instrument]
pub async fn serve_openapi_docs_as_json() -> Response {
    match ApiDoc::openapi().to_json() {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            tracing::error!("Failed to render OpenApi docs as JSON: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Endpoint to serve OpenApi docs as YAML.
#[tracing::instrument]
pub async fn serve_openapi_docs_as_yaml() -> Response {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => ([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response(),
        Err(e) => {
            tracing::error!("Failed to render OpenApi docs as YAML: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
