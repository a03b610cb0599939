use crate::{
    domain::{FormOrigin, SubmissionStatus},
    outcome::FailureKind,
};
use anyhow::Context;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Counters describing how lead submissions end.
#[derive(Clone)]
pub struct LeadMetrics {
    submissions: IntCounterVec,
    contact_failures: IntCounterVec,
}

impl std::fmt::Debug for LeadMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadMetrics").finish_non_exhaustive()
    }
}

impl LeadMetrics {
    /// Create the lead counters and register them with `registry`.
    pub fn register(registry: &Registry) -> anyhow::Result<Self> {
        let submissions = IntCounterVec::new(
            Opts::new(
                "lead_submissions_total",
                "Lead form submissions by form and resolved status",
            ),
            &["origin", "status"],
        )
        .context("Failed to create `lead_submissions_total` counter")?;
        registry
            .register(Box::new(submissions.clone()))
            .context("Failed to register `lead_submissions_total` metric")?;

        let contact_failures = IntCounterVec::new(
            Opts::new(
                "contact_api_failures_total",
                "Failed contact creations by kind of failure",
            ),
            &["kind"],
        )
        .context("Failed to create `contact_api_failures_total` counter")?;
        registry
            .register(Box::new(contact_failures.clone()))
            .context("Failed to register `contact_api_failures_total` metric")?;

        Ok(Self {
            submissions,
            contact_failures,
        })
    }

    pub fn record(
        &self,
        origin: FormOrigin,
        status: SubmissionStatus,
        failure: Option<FailureKind>,
    ) {
        self.submissions
            .with_label_values(&[origin.as_str(), status.as_str()])
            .inc();
        if let Some(kind) = failure {
            self.contact_failures
                .with_label_values(&[kind.as_str()])
                .inc();
        }
    }
}

/// Endpoint exposing all registered metrics in the Prometheus text format.
#[tracing::instrument(skip(registry))]
#[utoipa::path(
    get,
    path = "/metrics",
    responses((status = OK, description = "Prometheus metrics", body = String))
)]
pub async fn metrics_endpoint(
    State(registry): State<Arc<Registry>>,
) -> Result<String, MetricsError> {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .context("Failed to encode metrics")
        .map_err(MetricsError::UnexpectedError)?;

    String::from_utf8(buffer)
        .context("Failed to convert metrics to a valid string")
        .map_err(MetricsError::UnexpectedError)
}

#[derive(thiserror::Error)]
pub enum MetricsError {
    #[error("Unexpected error when generating metrics")]
    UnexpectedError(#[source] anyhow::Error),
}

impl IntoResponse for MetricsError {
    fn into_response(self) -> Response {
        tracing::error!(error.cause_chain = ?self, "Failed to serve metrics");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
