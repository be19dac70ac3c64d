//! Liveness check used by the deployment to confirm the process is serving.

use axum::{Router, routing::get};
use tracing::debug;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// Always `200 OK`; does not touch the investments store or upstream services.
async fn health() -> &'static str {
    debug!("GET /health");
    "OK"
}
