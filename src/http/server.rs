//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the axum router and middleware stack
//! - Serve the combined client-library listing as JSON
//! - Route form POST requests by their path suffix
//! - Apply configuration snapshots atomically on reload
//! - Graceful shutdown via the lifecycle channel
//!
//! # Design Decisions
//! - One catch-all route; dispatch reads the active snapshot, so a reload
//!   can move the clientlibs endpoint without rebuilding the router
//! - In-flight requests finish on the snapshot they started with

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::clientlibs::{LibraryAggregator, LibraryManager, StaticLibraryManager};
use crate::config::GatewayConfig;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::routing::path::suffix_of;
use crate::routing::FormsRouter;

/// Header carrying the external context path, set by a fronting proxy.
const X_FORWARDED_PREFIX: &str = "x-forwarded-prefix";

/// Everything derived from one configuration snapshot.
pub struct GatewaySnapshot {
    pub clientlibs_path: String,
    pub router: FormsRouter,
    pub aggregator: LibraryAggregator,
    pub libraries: Arc<dyn LibraryManager>,
}

impl GatewaySnapshot {
    /// Compile a snapshot from configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            clientlibs_path: config.clientlibs.path.clone(),
            router: FormsRouter::new(&config.forms),
            aggregator: LibraryAggregator::new(&config.clientlibs),
            libraries: Arc::new(StaticLibraryManager::from_config(&config.clientlibs)),
        }
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<ArcSwap<GatewaySnapshot>>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let snapshot = Arc::new(ArcSwap::from_pointee(GatewaySnapshot::from_config(&config)));
        let state = AppState { snapshot };
        let router = Self::build_router(&config, state.clone());
        Self { router, state }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(gateway_handler))
            .route("/", any(gateway_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configuration updates received on `config_updates` replace the
    /// active snapshot atomically.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<GatewayConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let snapshot = self.state.snapshot.clone();
        tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                tracing::info!(
                    forms_suffix = %config.forms.suffix,
                    clientlibs_path = %config.clientlibs.path,
                    "Applying configuration update"
                );
                snapshot.store(Arc::new(GatewaySnapshot::from_config(&config)));
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main gateway handler: dispatches to the client-library listing or the
/// forms router.
async fn gateway_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let snapshot = state.snapshot.load_full();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    if request.uri().path() == snapshot.clientlibs_path {
        return clientlibs_response(&snapshot, &request, &request_id);
    }

    forms_response(&snapshot, &request, &request_id)
}

/// Serve the combined client-library listing.
fn clientlibs_response(
    snapshot: &GatewaySnapshot,
    request: &Request<Body>,
    request_id: &str,
) -> Response {
    if request.method() != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let context_path = request
        .headers()
        .get(X_FORWARDED_PREFIX)
        .and_then(|v| v.to_str().ok());

    match snapshot
        .aggregator
        .resolve(snapshot.libraries.as_ref(), context_path)
    {
        Ok(includes) => {
            tracing::debug!(
                request_id = %request_id,
                js = includes.js.len(),
                css = includes.css.len(),
                "Serving client-library listing"
            );
            Json(includes).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Library resolution failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Library resolution failed").into_response()
        }
    }
}

/// Decide whether a request is a form submission and answer with the
/// resolved selector.
fn forms_response(
    snapshot: &GatewaySnapshot,
    request: &Request<Body>,
    request_id: &str,
) -> Response {
    let path = request.uri().path();
    let suffix = suffix_of(path);

    if request.method() != Method::POST || !snapshot.router.has_valid_suffix(suffix) {
        tracing::debug!(request_id = %request_id, path = %path, "No route matched");
        return (StatusCode::NOT_FOUND, "No matching route found").into_response();
    }

    match snapshot.router.form_selector(suffix) {
        Some(selector) => {
            tracing::debug!(request_id = %request_id, selector = %selector, "Form request routed");
            Json(json!({ "form": selector })).into_response()
        }
        None => {
            tracing::warn!(request_id = %request_id, path = %path, "Form request without selector");
            (StatusCode::BAD_REQUEST, "Missing form selector").into_response()
        }
    }
}
