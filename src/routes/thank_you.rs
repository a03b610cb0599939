use crate::{domain::SubmissionResult, service::handoff::SubmissionHandoff, state::AppState};
use askama::Template;
use axum::{http::header, response::IntoResponse, routing::get, Router};

pub fn create_router() -> Router<AppState> {
    Router::new().route("/thank-you", get(thank_you))
}

/// Confirmation page. Consumes the handoff left by the lead form, so a
/// reload or a direct visit shows the invalid-access variant.
#[tracing::instrument(skip(handoff), fields(status = tracing::field::Empty))]
#[utoipa::path(
    get,
    path = "/thank-you",
    responses((status = OK, description = "Confirmation page"))
)]
pub async fn thank_you(handoff: SubmissionHandoff) -> impl IntoResponse {
    let (handoff, result) = handoff.take();
    let result = result.filter(|r| r.status().is_terminal());

    match &result {
        Some(result) => {
            tracing::Span::current().record("status", result.status().as_str());
        }
        None => tracing::info!("Confirmation page visited without a submission"),
    }

    (
        handoff,
        [(header::CACHE_CONTROL, "no-store")],
        ThankYouTemplate { result },
    )
}

#[derive(Template)]
#[template(path = "thank_you.html")]
struct ThankYouTemplate {
    result: Option<SubmissionResult>,
}
