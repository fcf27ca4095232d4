use anyhow::Result;
use jurmola_telegraphs::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jurmola_telegraphs=info".parse()?),
        )
        .init();

    info!("Starting Jurmola Telegraphs edge server");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!("Base URL: {}", config.base_url);

    server::serve(&config).await
}
