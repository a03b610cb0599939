use crate::{
    contacts_client::ContactsClient,
    domain::{LeadSubmission, SubmissionResult},
    metrics::LeadMetrics,
    outcome::{resolve_outcome, DuplicateRule},
    tracking::{EventReporter, TrackingEvent},
};
use std::sync::Arc;

/// Registers leads with the contact list and decides what the visitor sees
/// next.
#[derive(Debug)]
pub struct LeadWorkflow {
    contacts_client: ContactsClient,
    duplicate_rule: DuplicateRule,
    reporter: Arc<dyn EventReporter>,
    metrics: LeadMetrics,
}

impl LeadWorkflow {
    pub fn new(
        contacts_client: ContactsClient,
        duplicate_rule: DuplicateRule,
        reporter: Arc<dyn EventReporter>,
        metrics: LeadMetrics,
    ) -> Self {
        Self {
            contacts_client,
            duplicate_rule,
            reporter,
            metrics,
        }
    }

    pub fn contacts_client(&self) -> &ContactsClient {
        &self.contacts_client
    }

    /// Submit a lead. This always settles on a terminal status: failures of
    /// the contact API are logged, counted and shown as "already subscribed".
    #[tracing::instrument(
        name = "Submitting a lead",
        skip(self, submission),
        fields(
            lead_email = %submission.email(),
            form_origin = %submission.origin(),
            status = tracing::field::Empty,
        )
    )]
    pub async fn submit(&self, submission: LeadSubmission) -> SubmissionResult {
        let result = self.contacts_client.create_contact(submission.email()).await;
        let (status, failure) = resolve_outcome(&result, &self.duplicate_rule);
        tracing::Span::current().record("status", status.as_str());

        let origin = *submission.origin();
        self.metrics.record(origin, status, failure);
        self.reporter
            .report(&TrackingEvent::lead_submitted(origin, status));

        submission.resolve(status)
    }
}
