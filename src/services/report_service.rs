use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::external::company_source::{CompanySource, CompanySourceError};
use crate::external::export_client::{ExportError, ReportExporter};
use crate::services::company_directory::CompanyDirectory;
use crate::services::csv_export_service::{serialize_report, CsvError};
use crate::services::report_builder::build_rows;
use crate::store::{InvestmentStore, StoreError};

/// Steps of one report generation, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStage {
    LoadingInvestments,
    FetchingCompanies,
    BuildingRows,
    Serializing,
    Responding,
    Forwarding,
    Done,
}

impl fmt::Display for ReportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportStage::LoadingInvestments => "loading investments",
            ReportStage::FetchingCompanies => "fetching companies",
            ReportStage::BuildingRows => "building rows",
            ReportStage::Serializing => "serializing",
            ReportStage::Responding => "responding",
            ReportStage::Forwarding => "forwarding",
            ReportStage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to load investments: {0}")]
    Investments(#[from] StoreError),
    #[error("failed to fetch companies: {0}")]
    Companies(#[from] CompanySourceError),
    #[error("failed to serialize report: {0}")]
    Csv(#[from] CsvError),
}

impl ReportError {
    /// Stage at which the generation moved to the failed state.
    pub fn stage(&self) -> ReportStage {
        match self {
            ReportError::Investments(_) => ReportStage::LoadingInvestments,
            ReportError::Companies(_) => ReportStage::FetchingCompanies,
            ReportError::Csv(_) => ReportStage::Serializing,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub csv: String,
    pub row_count: usize,
}

/// Produces the investments CSV report and forwards it downstream.
///
/// Generation and forwarding are separate phases: `generate` returns the finished
/// CSV, `forward` hands it to the exporter on a background task whose failure is
/// only logged.
#[derive(Clone)]
pub struct ReportService {
    investments: Arc<dyn InvestmentStore>,
    companies: Arc<dyn CompanySource>,
    exporter: Arc<dyn ReportExporter>,
}

impl ReportService {
    pub fn new(
        investments: Arc<dyn InvestmentStore>,
        companies: Arc<dyn CompanySource>,
        exporter: Arc<dyn ReportExporter>,
    ) -> Self {
        Self { investments, companies, exporter }
    }

    pub async fn generate(&self) -> Result<GeneratedReport, ReportError> {
        debug!("Report stage: {}", ReportStage::LoadingInvestments);
        let investments = self.investments.load_all().await?;

        debug!("Report stage: {}", ReportStage::FetchingCompanies);
        let companies = self.companies.fetch_companies().await?;

        debug!("Report stage: {}", ReportStage::BuildingRows);
        let directory = CompanyDirectory::new(&companies);
        let rows = build_rows(&investments, &directory);

        debug!("Report stage: {}", ReportStage::Serializing);
        let csv = serialize_report(&rows)?;

        info!(
            "Generated report with {} rows ({} companies in directory)",
            rows.len(),
            directory.len()
        );
        Ok(GeneratedReport { csv, row_count: rows.len() })
    }

    /// Sends `csv` to the exporter without blocking the caller. Not retried.
    pub fn forward(&self, csv: String) -> JoinHandle<Result<(), ExportError>> {
        let exporter = Arc::clone(&self.exporter);
        tokio::spawn(async move {
            debug!("Report stage: {}", ReportStage::Forwarding);
            match exporter.export_csv(&csv).await {
                Ok(()) => {
                    info!("Forwarded report ({} bytes) to export service", csv.len());
                    debug!("Report stage: {}", ReportStage::Done);
                    Ok(())
                }
                Err(e) => {
                    warn!("Failed to forward report to export service: {}", e);
                    Err(e)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::models::{Company, Investment};
    use serde_json::json;

    struct StaticInvestments(Result<Vec<Investment>, String>);

    #[async_trait]
    impl InvestmentStore for StaticInvestments {
        async fn load_all(&self) -> Result<Vec<Investment>, StoreError> {
            self.0.clone().map_err(StoreError::Unavailable)
        }
    }

    struct StaticCompanies(Result<Vec<Company>, String>);

    #[async_trait]
    impl CompanySource for StaticCompanies {
        async fn fetch_companies(&self) -> Result<Vec<Company>, CompanySourceError> {
            self.0.clone().map_err(CompanySourceError::Network)
        }
    }

    #[derive(Default)]
    struct RecordingExporter {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl ReportExporter for RecordingExporter {
        async fn export_csv(&self, csv: &str) -> Result<(), ExportError> {
            self.sent.lock().unwrap().push(csv.to_string());
            if self.fail {
                return Err(ExportError::BadResponse("503".into()));
            }
            Ok(())
        }
    }

    fn sample_investment() -> Investment {
        Investment::from(json!({
            "id": "1",
            "userId": "user1",
            "firstName": "John",
            "lastName": "Doe",
            "date": "2023-01-01",
            "investmentTotal": 10000,
            "holdings": [
                { "id": "company1", "investmentPercentage": 0.5 },
                { "id": "company2", "investmentPercentage": 0.5 }
            ]
        }))
    }

    fn sample_companies() -> Vec<Company> {
        vec![
            Company { id: "company1".into(), name: "Company A".into() },
            Company { id: "company2".into(), name: "Company B".into() },
        ]
    }

    fn service(
        investments: Result<Vec<Investment>, String>,
        companies: Result<Vec<Company>, String>,
        exporter: Arc<RecordingExporter>,
    ) -> ReportService {
        ReportService::new(
            Arc::new(StaticInvestments(investments)),
            Arc::new(StaticCompanies(companies)),
            exporter,
        )
    }

    #[tokio::test]
    async fn test_generate_joins_investments_and_companies() {
        let exporter = Arc::new(RecordingExporter::default());
        let svc = service(Ok(vec![sample_investment()]), Ok(sample_companies()), exporter.clone());

        let report = svc.generate().await.unwrap();
        assert_eq!(report.row_count, 1);
        assert!(report.csv.starts_with("\"User\",\"First Name\",\"Last Name\",\"Date\",\"Holdings\",\"Values\"\n"));
        assert!(report.csv.contains(
            "\"user1\",\"John\",\"Doe\",\"2023-01-01\",\"Company A; Company B\",\"5000; 5000\""
        ));
        assert!(exporter.sent.lock().unwrap().is_empty(), "generate must not forward");
    }

    #[tokio::test]
    async fn test_investment_failure_stops_before_companies() {
        let exporter = Arc::new(RecordingExporter::default());
        let svc = service(Err("disk gone".into()), Err("must not be reached".into()), exporter);

        let err = svc.generate().await.unwrap_err();
        assert_eq!(err.stage(), ReportStage::LoadingInvestments);
    }

    #[tokio::test]
    async fn test_company_failure_is_reported() {
        let exporter = Arc::new(RecordingExporter::default());
        let svc = service(Ok(vec![sample_investment()]), Err("connection refused".into()), exporter);

        let err = svc.generate().await.unwrap_err();
        assert_eq!(err.stage(), ReportStage::FetchingCompanies);
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_forward_delivers_csv() {
        let exporter = Arc::new(RecordingExporter::default());
        let svc = service(Ok(vec![]), Ok(vec![]), exporter.clone());

        svc.forward("\"User\"\n".into()).await.unwrap().unwrap();
        assert_eq!(exporter.sent.lock().unwrap().as_slice(), ["\"User\"\n".to_string()]);
    }

    #[tokio::test]
    async fn test_forward_failure_is_returned_on_handle() {
        let exporter = Arc::new(RecordingExporter { fail: true, ..Default::default() });
        let svc = service(Ok(vec![]), Ok(vec![]), exporter.clone());

        let result = svc.forward("csv".into()).await.unwrap();
        assert!(matches!(result, Err(ExportError::BadResponse(_))));
        assert_eq!(exporter.sent.lock().unwrap().len(), 1);
    }
}
