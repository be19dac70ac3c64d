use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 8083;
const DEFAULT_INVESTMENTS_DATA_PATH: &str = "investments/data.json";
const DEFAULT_COMPANIES_URL: &str = "http://localhost:8082";
const DEFAULT_INVESTMENTS_SERVICE_URL: &str = "http://localhost:8081";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("invalid URL in {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Process-wide settings, read once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub investments_data_path: PathBuf,
    pub companies_url: Url,
    /// When set, companies are read from this JSON file instead of the companies service.
    pub companies_data_path: Option<PathBuf>,
    pub investments_service_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let investments_data_path = lookup("INVESTMENTS_DATA_PATH")
            .unwrap_or_else(|| DEFAULT_INVESTMENTS_DATA_PATH.to_string())
            .into();

        let companies_url = parse_base_url(
            "FINANCIAL_COMPANIES_URL",
            lookup("FINANCIAL_COMPANIES_URL").as_deref(),
            DEFAULT_COMPANIES_URL,
        )?;

        let companies_data_path = lookup("COMPANIES_DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let investments_service_url = parse_base_url(
            "INVESTMENTS_SERVICE_URL",
            lookup("INVESTMENTS_SERVICE_URL").as_deref(),
            DEFAULT_INVESTMENTS_SERVICE_URL,
        )?;

        Ok(Self {
            port,
            investments_data_path,
            companies_url,
            companies_data_path,
            investments_service_url,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// `GET` target returning the JSON array of companies.
    pub fn companies_endpoint(&self) -> Url {
        join_path(&self.companies_url, "companies")
    }

    /// `POST` target receiving generated reports.
    pub fn export_endpoint(&self) -> Url {
        join_path(&self.investments_service_url, "investments/export")
    }
}

fn parse_base_url(
    name: &'static str,
    value: Option<&str>,
    default: &str,
) -> Result<Url, ConfigError> {
    Url::parse(value.unwrap_or(default).trim())
        .map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn join_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!("{}/{}", base.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    url
}
