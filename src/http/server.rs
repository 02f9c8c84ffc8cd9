//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, metrics)
//! - Serve on a bound listener until shutdown is signalled
//! - Bound the drain phase by the configured grace period

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, oneshot};
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::openapi::OpenApi as OpenApiDocument;

use crate::bootstrap::EntryPoint;
use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::middleware::track_requests;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::metadata::ServiceMetadata;

/// Prefix under which the generated API document is published.
pub const DOCUMENT_PREFIX: &str = "/swagger";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub metadata: ServiceMetadata,
    pub document: Arc<OpenApiDocument>,
    pub started_at: Instant,
}

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server for `entry` with the given configuration.
    pub fn new(config: AppConfig, entry: &EntryPoint) -> Self {
        let state = AppState {
            metadata: entry.metadata,
            document: Arc::new(entry.document()),
            started_at: Instant::now(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Path the API document is served at for `metadata`.
    pub fn document_path(metadata: &ServiceMetadata) -> String {
        format!("{}/{}", DOCUMENT_PREFIX, metadata.document_name())
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new().route("/health", get(handlers::health));

        if config.openapi.enabled {
            router = router.route(
                &Self::document_path(&state.metadata),
                get(handlers::openapi_document),
            );
        }

        router
            .route_layer(middleware::from_fn(track_requests))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.server.max_body_bytes))
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer())
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    ///
    /// After the signal the listener stops accepting and in-flight requests
    /// are drained. Requests still running when the grace period elapses
    /// are abandoned.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let grace = self.config.shutdown.grace_period();
        tracing::info!(address = %addr, "HTTP server starting");

        let (draining_tx, draining_rx) = oneshot::channel::<()>();
        let serve = axum::serve(listener, self.router).with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received, draining connections");
            let _ = draining_tx.send(());
        });

        let deadline = async move {
            match draining_rx.await {
                Ok(()) => tokio::time::sleep(grace).await,
                Err(_) => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = serve.into_future() => result?,
            _ = deadline => {
                tracing::warn!(
                    grace_period_secs = grace.as_secs(),
                    "Grace period elapsed with requests still in flight"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
