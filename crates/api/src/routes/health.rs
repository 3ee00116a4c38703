use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- liveness check.
///
/// The service holds no state and owns no data, so there is nothing
/// deeper to probe: upstream reachability is checked per-request by the
/// resolvers themselves.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (root-level, next to the GraphQL endpoint).
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
