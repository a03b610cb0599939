use crate::{
    domain::{FormOrigin, LeadEmail, LeadSubmission},
    lead_submission::LeadWorkflow,
    service::handoff::{HandoffError, SubmissionHandoff},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Form, Router,
};
use std::sync::Arc;
use utoipa::ToSchema;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/leads", post(submit_lead))
}

#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct LeadForm {
    email: String,
    origin: FormOrigin,
}

/// Register the email from one of the lead forms and move on to the
/// confirmation page. The result travels in the handoff cookie, never in the
/// redirect URL.
#[tracing::instrument(
    name = "Receiving a lead",
    skip(lead_workflow, handoff, form),
    fields(
        lead_email = %form.email,
        form_origin = %form.origin,
    )
)]
#[utoipa::path(
    post,
    path = "/leads",
    request_body(content = LeadForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = SEE_OTHER, description = "Lead handled, continue to the confirmation page"),
        (status = UNPROCESSABLE_ENTITY, description = "The email is missing or malformed"),
    )
)]
pub async fn submit_lead(
    State(lead_workflow): State<Arc<LeadWorkflow>>,
    handoff: SubmissionHandoff,
    Form(form): Form<LeadForm>,
) -> Result<Response, LeadError> {
    let email = LeadEmail::parse(form.email).map_err(LeadError::InvalidEmail)?;
    let submission = LeadSubmission::new(email, form.origin);

    let result = lead_workflow.submit(submission).await;

    let handoff = handoff.hand_off(&result).map_err(LeadError::Handoff)?;
    Ok((handoff, Redirect::to("/thank-you")).into_response())
}

#[derive(thiserror::Error)]
pub enum LeadError {
    #[error("{0}")]
    InvalidEmail(String),
    #[error("Failed to hand the lead over to the confirmation page")]
    Handoff(#[source] HandoffError),
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidEmail(_) => {
                tracing::info!(error.message = %self, "Rejected lead form");
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
            }
            Self::Handoff(_) => {
                tracing::error!(error.cause_chain = ?self, "Failed to complete a lead submission");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
