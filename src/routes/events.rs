use crate::{
    state::AppState,
    tracking::{EventError, EventReporter, TrackingEvent},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use utoipa::ToSchema;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/events", post(record_event))
}

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct EventBody {
    event: String,
    page_path: Option<String>,
}

/// Beacon endpoint for call-to-action clicks.
#[tracing::instrument(skip(reporter))]
#[utoipa::path(
    post,
    path = "/events",
    request_body = EventBody,
    responses(
        (status = NO_CONTENT, description = "Event recorded"),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed event name"),
    )
)]
pub async fn record_event(
    State(reporter): State<Arc<dyn EventReporter>>,
    Json(body): Json<EventBody>,
) -> Result<StatusCode, EventError> {
    let event = TrackingEvent::parse(body.event)?.with_page_path(body.page_path);
    reporter.report(&event);
    Ok(StatusCode::NO_CONTENT)
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        tracing::info!(error.message = %self, "Rejected tracking event");
        (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
    }
}
