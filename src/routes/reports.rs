use axum::extract::State;
use axum::response::IntoResponse;
use axum::Router;
use axum::routing::get;
use http::header;
use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::services::report_service::ReportStage;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-csv", get(generate_csv))
}

pub async fn generate_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    info!("GET /generate-csv - Generating investments report");
    let report = state.reports.generate()
        .await
        .map_err(|e| {
            error!("Report generation failed while {}: {}", e.stage(), e);
            AppError::Report(e)
        })?;

    // The response does not wait on the export; its outcome is logged by the task.
    info!(
        "Report ready with {} rows, forwarding to {}",
        report.row_count,
        state.config.export_endpoint()
    );
    state.reports.forward(report.csv.clone());

    debug!("Report stage: {}", ReportStage::Responding);
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], report.csv))
}
