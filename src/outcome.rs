//! Mapping from a contact API result to what the visitor is shown.
//!
//! Visitors never see a failure: anything other than a created contact is
//! presented as "already subscribed". The failure itself is only logged and
//! counted.

use crate::{
    contacts_client::{ContactsError, ErrorBody},
    domain::SubmissionStatus,
};

/// Decides whether a rejected request means the contact already exists.
///
/// The markers are matched case-insensitively as substrings of the response's
/// `message`, `error` and `code` fields.
#[derive(Debug, Clone)]
pub struct DuplicateRule {
    markers: Vec<String>,
}

impl DuplicateRule {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = markers
            .into_iter()
            .map(|m| m.as_ref().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        Self { markers }
    }

    pub fn matches(&self, body: &ErrorBody) -> bool {
        body.fields().any(|field| {
            let field = field.to_lowercase();
            self.markers.iter().any(|marker| field.contains(marker))
        })
    }
}

/// The kinds of failure a contact creation can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ConfigurationMissing,
    Transport,
    Duplicate,
    Rejected,
    Unparseable,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing => "configuration_missing",
            Self::Transport => "transport",
            Self::Duplicate => "duplicate",
            Self::Rejected => "rejected",
            Self::Unparseable => "unparseable",
        }
    }
}

pub fn classify(error: &ContactsError, rule: &DuplicateRule) -> FailureKind {
    match error {
        ContactsError::MissingApiKey | ContactsError::InvalidUrl(_) => {
            FailureKind::ConfigurationMissing
        }
        ContactsError::Transport(_) => FailureKind::Transport,
        ContactsError::Rejected { body, .. } if rule.matches(body) => FailureKind::Duplicate,
        ContactsError::Rejected { .. } => FailureKind::Rejected,
        ContactsError::UnparseableBody { .. } => FailureKind::Unparseable,
    }
}

/// Resolve the status shown on the confirmation page.
///
/// A created contact is a success. Every failure, duplicates included, is
/// coerced to [`SubmissionStatus::AlreadySubscribed`].
pub fn resolve_outcome(
    result: &Result<(), ContactsError>,
    rule: &DuplicateRule,
) -> (SubmissionStatus, Option<FailureKind>) {
    let Err(error) = result else {
        return (SubmissionStatus::Success, None);
    };

    let kind = classify(error, rule);
    match kind {
        FailureKind::Duplicate => {
            tracing::info!("Contact already exists");
        }
        FailureKind::ConfigurationMissing => {
            tracing::error!(
                error.cause_chain = ?error,
                error.message = %error,
                "Contacts API is not configured, reporting the lead as already subscribed"
            );
        }
        FailureKind::Transport | FailureKind::Rejected | FailureKind::Unparseable => {
            tracing::warn!(
                error.cause_chain = ?error,
                error.message = %error,
                failure_kind = kind.as_str(),
                "Contact creation failed, reporting the lead as already subscribed"
            );
        }
    }

    (SubmissionStatus::AlreadySubscribed, Some(kind))
}
