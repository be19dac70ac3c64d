use axum::response::IntoResponse;
use http::StatusCode;
use thiserror::Error;

use crate::services::report_service::ReportError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,
    #[error("Investments store error: {0}")]
    Store(#[from] StoreError),
    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            // Causes are logged by the handlers; callers only see a generic failure.
            AppError::Store(_) | AppError::Report(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
