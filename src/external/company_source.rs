use async_trait::async_trait;
use thiserror::Error;

use crate::models::Company;

#[derive(Debug, Error)]
pub enum CompanySourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Supplies the company directory used to resolve holding names.
///
/// Fetched fresh for every report.
#[async_trait]
pub trait CompanySource: Send + Sync {
    async fn fetch_companies(&self) -> Result<Vec<Company>, CompanySourceError>;
}
