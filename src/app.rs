use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::AppConfig;
use crate::interfaces::http::start_server;

pub async fn run() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = AppConfig::load().map_err(|err| {
        error!(error = %err, "Failed to load configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;
    let server_config = config.server.clone();

    let state = crate::infrastructure::bootstrap::setup(config);
    let server = start_server(state, &server_config)?;

    info!(
        "Backend listening on http://{}:{}",
        server_config.host, server_config.port
    );

    server.await
}
