use super::{FormOrigin, LeadEmail};
use derive_getters::Getters;

/// Where a lead submission is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Success,
    AlreadySubscribed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::AlreadySubscribed => "already_subscribed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A single attempt to register an email, alive for the duration of the
/// contact API call.
#[derive(Debug, Getters)]
pub struct LeadSubmission {
    email: LeadEmail,
    origin: FormOrigin,
    status: SubmissionStatus,
}

impl LeadSubmission {
    pub fn new(email: LeadEmail, origin: FormOrigin) -> Self {
        Self {
            email,
            origin,
            status: SubmissionStatus::Pending,
        }
    }

    /// Settle the submission, handing back what the confirmation page needs.
    pub fn resolve(mut self, status: SubmissionStatus) -> SubmissionResult {
        self.status = status;
        SubmissionResult {
            email: self.email.to_string(),
            status: self.status,
        }
    }
}

/// The `{email, status}` pair handed from the lead form to the confirmation
/// page.
#[derive(Debug, Clone, PartialEq, Eq, Getters, serde::Serialize, serde::Deserialize)]
pub struct SubmissionResult {
    email: String,
    status: SubmissionStatus,
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }

    pub fn is_already_subscribed(&self) -> bool {
        self.status == SubmissionStatus::AlreadySubscribed
    }
}
