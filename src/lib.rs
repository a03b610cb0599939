pub mod configuration;
pub mod contacts_client;
pub mod content;
pub mod domain;
mod error;
pub mod lead_submission;
pub mod metrics;
pub mod outcome;
mod routes;
pub mod service;
mod state;
pub mod telemetry;
pub mod tracking;

use anyhow::Context;
use axum::{http::HeaderName, Router, Server};
use axum_extra::extract::cookie::Key;
use configuration::Settings;
use contacts_client::ContactsClient;
use lead_submission::LeadWorkflow;
use metrics::LeadMetrics;
use outcome::DuplicateRule;
use prometheus::Registry;
use secrecy::ExposeSecret;
use service::handoff::HandoffSettings;
use state::AppState;
use std::{net::TcpListener, sync::Arc};
use tracking::{EventReporter, LogReporter};

/// Smallest secret accepted for signing cookies.
const MIN_SECRET_LENGTH: usize = 64;

pub struct App {
    listener: TcpListener,
    port: u16,
    router: Router,
}

impl App {
    /// Build the app from the configuration, reporting tracking events as
    /// structured logs.
    pub fn build(config: Settings) -> anyhow::Result<Self> {
        Self::build_with_reporter(config, Arc::new(LogReporter))
    }

    /// Build the app with the given tracking `reporter`.
    pub fn build_with_reporter(
        config: Settings,
        reporter: Arc<dyn EventReporter>,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(config.application().address())
            .context("Failed to bind the application address")?;
        listener.set_nonblocking(true)?;
        let port = listener
            .local_addr()
            .context("Failed to read the bound address")?
            .port();

        let contacts_client =
            ContactsClient::try_from(config.contacts()).map_err(anyhow::Error::msg)?;
        let duplicate_rule = DuplicateRule::new(&config.contacts().duplicate_markers);

        let registry = Arc::new(Registry::new());
        let metrics = LeadMetrics::register(&registry)?;

        let lead_workflow =
            LeadWorkflow::new(contacts_client, duplicate_rule, reporter.clone(), metrics);
        let handoff_settings = HandoffSettings::new(
            config.application().handoff_ttl(),
            config.application().secure_cookies,
        )?;
        let cookie_key = cookie_key(config.application().hmac_secret.expose_secret())?;

        let app_state = AppState::new(
            lead_workflow,
            reporter,
            handoff_settings,
            registry,
            cookie_key,
        );

        Ok(Self {
            listener,
            port,
            router: Self::build_router(app_state),
        })
    }

    /// The port the app is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve the app until the server is shut down.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Server running at {}", self.listener.local_addr()?);
        Server::from_tcp(self.listener)?
            .serve(self.router.into_make_service())
            .await?;
        Ok(())
    }

    /// Builder the router for the application.
    fn build_router(app_state: AppState) -> Router {
        use tower::ServiceBuilder;
        use tower_http::{
            request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
            services::ServeDir,
            trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
        };
        use tracing::Level;

        let request_id = HeaderName::from_static("x-request-id");

        routes::build_router()
            .nest_service("/static", ServeDir::new("static"))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                    .layer(
                        TraceLayer::new_for_http()
                            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                            .on_request(DefaultOnRequest::new().level(Level::INFO))
                            .on_response(DefaultOnResponse::new().level(Level::INFO)),
                    )
                    .layer(PropagateRequestIdLayer::new(request_id)),
            )
            .with_state(app_state)
    }
}

/// Derive the key signing the handoff cookie from the application secret.
fn cookie_key(secret: &str) -> anyhow::Result<Key> {
    if secret.len() < MIN_SECRET_LENGTH {
        anyhow::bail!("The HMAC secret must be at least {MIN_SECRET_LENGTH} bytes long");
    }
    Ok(Key::from(secret.as_bytes()))
}
