//! Conversion tracking.
//!
//! Handlers and the lead workflow receive an [`EventReporter`] through the
//! application state and never talk to an analytics vendor directly.

use crate::domain::{FormOrigin, SubmissionStatus};
use derive_getters::Getters;
use std::{fmt::Debug, sync::Mutex};

/// Target used for every record emitted by [`LogReporter`].
pub const TRACKING_TARGET: &str = "tracking";

const MAX_EVENT_NAME_LENGTH: usize = 64;

/// A named, fire-and-forget analytics event.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TrackingEvent {
    name: String,
    page_path: Option<String>,
    origin: Option<FormOrigin>,
    status: Option<SubmissionStatus>,
}

impl TrackingEvent {
    /// Parse an event name coming from the browser. Names are lower-case
    /// ASCII letters, digits and underscores.
    pub fn parse(name: String) -> Result<Self, EventError> {
        let is_valid = !name.is_empty()
            && name.len() <= MAX_EVENT_NAME_LENGTH
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !is_valid {
            return Err(EventError::InvalidName(name));
        }

        Ok(Self {
            name,
            page_path: None,
            origin: None,
            status: None,
        })
    }

    pub fn page_view(page_path: &str) -> Self {
        Self {
            name: "page_view".into(),
            page_path: Some(page_path.into()),
            origin: None,
            status: None,
        }
    }

    pub fn lead_submitted(origin: FormOrigin, status: SubmissionStatus) -> Self {
        Self {
            name: "lead_submitted".into(),
            page_path: None,
            origin: Some(origin),
            status: Some(status),
        }
    }

    pub fn with_page_path(mut self, page_path: Option<String>) -> Self {
        self.page_path = page_path.filter(|p| p.starts_with('/'));
        self
    }
}

/// Receives tracking events. Reporting must never fail the caller.
pub trait EventReporter: Debug + Send + Sync {
    fn report(&self, event: &TrackingEvent);
}

/// Emits every event as a structured log record on the [`TRACKING_TARGET`]
/// target, where the log pipeline can forward it to an analytics backend.
#[derive(Debug, Default)]
pub struct LogReporter;

impl EventReporter for LogReporter {
    fn report(&self, event: &TrackingEvent) {
        tracing::info!(
            target: TRACKING_TARGET,
            event = %event.name,
            page_path = event.page_path.as_deref(),
            form_origin = event.origin.map(|o| o.as_str()),
            status = event.status.map(|s| s.as_str()),
            "Tracking event"
        );
    }
}

/// Keeps reported events in memory.
#[derive(Debug, Default)]
pub struct InMemoryReporter {
    events: Mutex<Vec<TrackingEvent>>,
}

impl InMemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of everything reported so far.
    pub fn events(&self) -> Vec<TrackingEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventReporter for InMemoryReporter {
    fn report(&self, event: &TrackingEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

#[derive(thiserror::Error)]
pub enum EventError {
    #[error("{0:?} is not a valid event name")]
    InvalidName(String),
}
