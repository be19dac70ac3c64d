use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),
}

/// Downstream receiver of generated reports.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    async fn export_csv(&self, csv: &str) -> Result<(), ExportError>;
}

#[derive(Debug, Serialize)]
struct ExportRequest<'a> {
    csv: &'a str,
}

/// Posts `{ "csv": ... }` to the investments service export endpoint.
pub struct InvestmentsExportClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl InvestmentsExportClient {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ReportExporter for InvestmentsExportClient {
    async fn export_csv(&self, csv: &str) -> Result<(), ExportError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(&ExportRequest { csv })
            .send()
            .await
            .map_err(|e| ExportError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ExportError::BadResponse(format!(
                "{} returned status {}",
                self.endpoint,
                resp.status()
            )));
        }
        Ok(())
    }
}
