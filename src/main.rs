use ballotdb::{config::Config, schema};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load database configuration");
            return;
        }
    };
    info!(config = ?config, "loaded database configuration");

    // Failures are reported through the log stream; the binary exits 0
    // either way.
    match schema::provision(&config).await {
        Ok(()) => info!("tables created successfully"),
        Err(err) => error!(error = %err, "schema provisioning failed"),
    }
}
