use axum::extract::{Path, State};
use axum::{Json, Router};
use axum::routing::get;
use tracing::{info, error};

use crate::errors::AppError;
use crate::models::Investment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_investment))
}

pub async fn get_investment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Investment>, AppError> {
    info!("GET /investments/{} - Fetching investment", id);
    let investment = state.investments.get_by_id(&id)
        .await
        .map_err(|e| {
            error!("Failed to load investments for lookup of {}: {}", id, e);
            AppError::Store(e)
        })?
        .ok_or_else(|| {
            info!("Investment {} not found", id);
            AppError::NotFound
        })?;
    Ok(Json(investment))
}
