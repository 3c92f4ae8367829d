//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Serve the optional static site next to the API
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{DefaultBodyLimit, MatchedPath, Request},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{any, get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::PortfolioConfig;
use crate::contacts::{ContactStore, InMemoryContactStore};
use crate::http::handlers::{api_not_found, download_resume, health, list_contacts, submit_contact};
use crate::http::request::{make_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::signals;
use crate::observability::metrics;
use crate::resume::Resume;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactStore>,
    pub resume: Arc<Resume>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactStore>, resume: Resume) -> Self {
        Self {
            contacts,
            resume: Arc::new(resume),
        }
    }

    /// Fresh in-memory store plus the configured resume.
    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self::new(
            Arc::new(InMemoryContactStore::new()),
            Resume::from_config(&config.resume),
        )
    }
}

/// HTTP server for the portfolio API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: PortfolioConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(&config, state)
    }

    /// Create a server around an already constructed state.
    pub fn with_state(config: &PortfolioConfig, state: AppState) -> Self {
        Self {
            router: build_router(config, state),
        }
    }

    /// Run the server until `shutdown` fires or the process is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::wait_for_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &PortfolioConfig, state: AppState) -> Router {
    let api = Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/contacts", get(list_contacts))
        .route("/api/resume/download", get(download_resume))
        .route("/api/health", get(health))
        .route("/api/{*rest}", any(api_not_found))
        .route_layer(middleware::from_fn(track_metrics))
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
        .with_state(state);

    let router = match &config.site.static_dir {
        Some(dir) => {
            tracing::info!(static_dir = %dir.display(), "Serving static site");
            let site = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            api.fallback_service(site)
        }
        None => api,
    };

    router.layer(
        ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(propagate_request_id_layer())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            ))),
    )
}

async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = request.method().clone();

    let response = next.run(request).await;
    metrics::record_request(&route, method.as_str(), response.status().as_u16(), start);
    response
}
