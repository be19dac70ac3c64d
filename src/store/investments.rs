use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use serde_json::Value;
use tracing::debug;

use crate::models::Investment;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read investments from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed investments data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("investments store unavailable: {0}")]
    Unavailable(String),
}

/// Backing source of investment records.
///
/// Every call reloads the full dataset; nothing is cached between requests.
#[async_trait]
pub trait InvestmentStore: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Investment>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Investment>, StoreError> {
        let investments = self.load_all().await?;
        Ok(find_by_id(&investments, id).cloned())
    }
}

/// First investment whose id matches exactly (case-sensitive).
pub fn find_by_id<'a>(investments: &'a [Investment], id: &str) -> Option<&'a Investment> {
    investments.iter().find(|i| i.id() == Some(id))
}

/// Investments stored as a JSON array in a local file.
///
/// Only a file that is not a JSON array is malformed; individual records are
/// kept as stored and read leniently.
pub struct JsonFileInvestmentStore {
    path: PathBuf,
}

impl JsonFileInvestmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl InvestmentStore for JsonFileInvestmentStore {
    async fn load_all(&self) -> Result<Vec<Investment>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;

        let records: Vec<Value> = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Parse { path: self.path.clone(), source })?;
        let investments: Vec<Investment> = records.into_iter().map(Investment::from).collect();

        debug!("Loaded {} investments from {:?}", investments.len(), self.path);
        Ok(investments)
    }
}
