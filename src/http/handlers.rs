//! Management endpoint handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::http::server::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `UP` while the server is accepting requests.
    pub status: String,
    pub name: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "management"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        name: state.metadata.title.to_string(),
        version: state.metadata.version.to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// Serve the generated API document.
pub async fn openapi_document(State(state): State<AppState>) -> Response {
    Json(state.document.as_ref()).into_response()
}
