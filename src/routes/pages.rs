use crate::{
    content::{
        Comparison, Feature, PricingPlan, PromoBanner, ScalingStep, Step, Testimonial, COMPARISON,
        DASHBOARD_URL, HOME_FEATURES, HOME_STEPS, HOME_TESTIMONIALS, INSTANT_FUNDING_STEPS,
        PRICING_PLANS, PROMO_BANNER, SCALING_PLAN,
    },
    state::AppState,
    tracking::{EventReporter, TrackingEvent},
};
use askama::Template;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

pub const INSTANT_FUNDING_PATH: &str = "/instant-funding";

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route(INSTANT_FUNDING_PATH, get(instant_funding))
}

/// The landing page, with the hero and the footer lead forms.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/",
    responses((status = OK, description = "Landing page"))
)]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        steps: &HOME_STEPS,
        features: &HOME_FEATURES,
        testimonials: &HOME_TESTIMONIALS,
    }
}

/// The instant-funding variant of the landing page.
#[tracing::instrument(skip(reporter))]
#[utoipa::path(
    get,
    path = "/instant-funding",
    responses((status = OK, description = "Instant funding page"))
)]
pub async fn instant_funding(State(reporter): State<Arc<dyn EventReporter>>) -> impl IntoResponse {
    reporter.report(&TrackingEvent::page_view(INSTANT_FUNDING_PATH));

    InstantFundingTemplate {
        banner: PROMO_BANNER,
        dashboard_url: DASHBOARD_URL,
        steps: &INSTANT_FUNDING_STEPS,
        plans: &PRICING_PLANS,
        scaling_plan: &SCALING_PLAN,
        comparison: &COMPARISON,
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    steps: &'static [Step],
    features: &'static [Feature],
    testimonials: &'static [Testimonial],
}

#[derive(Template)]
#[template(path = "instant_funding.html")]
struct InstantFundingTemplate {
    banner: PromoBanner,
    dashboard_url: &'static str,
    steps: &'static [Step],
    plans: &'static [PricingPlan],
    scaling_plan: &'static [ScalingStep],
    comparison: &'static [Comparison],
}
