use crate::state::AppState;
use axum::{routing::get, Router};

pub mod docs;
pub mod events;
pub mod health;
pub mod leads;
pub mod pages;
pub mod thank_you;

pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::create_router())
        .merge(pages::create_router())
        .merge(leads::create_router())
        .merge(thank_you::create_router())
        .merge(events::create_router())
        .nest("/docs", docs::create_router())
        .route("/metrics", get(crate::metrics::metrics_endpoint))
}
