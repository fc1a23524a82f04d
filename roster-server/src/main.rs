//! roster-server binary
//!
//! Loads `.env`, reads configuration from the environment and serves the
//! employee directory API until Ctrl+C.

use roster_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        "Starting roster-server v{} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );
    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set, using the development secret");
    }

    let state = ServerState::initialize(&config).await?;
    Server::with_state(config, state).run().await?;

    Ok(())
}
