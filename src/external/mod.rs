pub mod companies_service;
pub mod company_source;
pub mod export_client;
