use anyhow::Context;
use tokio::net::TcpListener;

use investment_admin::app::create_app;
use investment_admin::build_state;
use investment_admin::config::Config;
use investment_admin::logging::{init_logging, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = Config::from_env().context("invalid configuration")?;
    let addr = config.listen_addr();
    tracing::info!(
        "Investments data at {:?}, exports go to {}",
        config.investments_data_path,
        config.export_endpoint()
    );

    let state = build_state(config);
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Investment admin service running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
