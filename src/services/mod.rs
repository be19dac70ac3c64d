pub mod company_directory;
pub mod csv_export_service;
pub mod report_builder;
pub mod report_service;
