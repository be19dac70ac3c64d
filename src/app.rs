use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::{health, investments, reports};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/investments", investments::router())
        .merge(reports::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
