pub mod app;
pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use std::sync::Arc;

use crate::config::Config;
use crate::external::companies_service::{CompaniesServiceClient, JsonFileCompanySource};
use crate::external::company_source::CompanySource;
use crate::external::export_client::InvestmentsExportClient;
use crate::services::report_service::ReportService;
use crate::state::AppState;
use crate::store::JsonFileInvestmentStore;

/// Wires the configured collaborators into the shared application state.
pub fn build_state(config: Config) -> AppState {
    let http = reqwest::Client::new();

    let investments = Arc::new(JsonFileInvestmentStore::new(&config.investments_data_path));

    let companies: Arc<dyn CompanySource> = match &config.companies_data_path {
        Some(path) => {
            tracing::info!("Using company data from file {:?}", path);
            Arc::new(JsonFileCompanySource::new(path))
        }
        None => {
            tracing::info!("Using companies service at {}", config.companies_endpoint());
            Arc::new(CompaniesServiceClient::new(http.clone(), config.companies_endpoint()))
        }
    };

    let exporter = Arc::new(InvestmentsExportClient::new(http, config.export_endpoint()));

    AppState {
        reports: ReportService::new(investments.clone(), companies, exporter),
        investments,
        config: Arc::new(config),
    }
}
