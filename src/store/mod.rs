pub mod investments;

pub use investments::{find_by_id, InvestmentStore, JsonFileInvestmentStore, StoreError};
