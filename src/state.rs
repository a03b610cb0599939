use crate::{
    lead_submission::LeadWorkflow, service::handoff::HandoffSettings, tracking::EventReporter,
};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use derive_getters::Getters;
use duplicate::duplicate_item;
use prometheus::Registry;
use std::sync::Arc;

#[derive(Clone, Getters)]
pub struct AppState {
    lead_workflow: Arc<LeadWorkflow>,
    reporter: Arc<dyn EventReporter>,
    handoff_settings: Arc<HandoffSettings>,
    registry: Arc<Registry>,
    cookie_key: Key,
}

impl AppState {
    pub fn new(
        lead_workflow: LeadWorkflow,
        reporter: Arc<dyn EventReporter>,
        handoff_settings: HandoffSettings,
        registry: Arc<Registry>,
        cookie_key: Key,
    ) -> Self {
        Self {
            lead_workflow: Arc::new(lead_workflow),
            reporter,
            handoff_settings: Arc::new(handoff_settings),
            registry,
            cookie_key,
        }
    }
}

#[duplicate_item(
    service_type            field;
    [ LeadWorkflow ]        [ lead_workflow ];
    [ dyn EventReporter ]   [ reporter ];
    [ HandoffSettings ]     [ handoff_settings ];
    [ Registry ]            [ registry ];
)]
impl FromRef<AppState> for Arc<service_type> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.field.clone()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie_key.clone()
    }
}
