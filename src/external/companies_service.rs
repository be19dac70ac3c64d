use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::external::company_source::{CompanySource, CompanySourceError};
use crate::models::Company;

/// Client for the financial companies service (`GET /companies`).
pub struct CompaniesServiceClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl CompaniesServiceClient {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl CompanySource for CompaniesServiceClient {
    async fn fetch_companies(&self) -> Result<Vec<Company>, CompanySourceError> {
        let resp = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| CompanySourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CompanySourceError::BadResponse(format!(
                "{} returned status {}",
                self.endpoint, status
            )));
        }

        let companies: Vec<Company> = resp
            .json()
            .await
            .map_err(|e| CompanySourceError::Parse(e.to_string()))?;

        debug!("Fetched {} companies from {}", companies.len(), self.endpoint);
        Ok(companies)
    }
}

/// Companies read from a local JSON array, for deployments without the companies service.
pub struct JsonFileCompanySource {
    path: PathBuf,
}

impl JsonFileCompanySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CompanySource for JsonFileCompanySource {
    async fn fetch_companies(&self) -> Result<Vec<Company>, CompanySourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CompanySourceError::Io(format!("{:?}: {}", self.path, e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| CompanySourceError::Parse(format!("{:?}: {}", self.path, e)))
    }
}
