use std::sync::Arc;

use crate::config::Config;
use crate::services::report_service::ReportService;
use crate::store::InvestmentStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub investments: Arc<dyn InvestmentStore>,
    pub reports: ReportService,
}
