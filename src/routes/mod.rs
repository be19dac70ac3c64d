pub(crate) mod health;
pub(crate) mod investments;
pub(crate) mod reports;
