use std::net::SocketAddr;

use tokio::net::TcpListener;

use stockcast::app;
use stockcast::logging::{init_logging, LoggingConfig};
use stockcast::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config)?;

    let config = AppConfig::from_env();
    let port = config.port;
    let app = app::create_app(AppState { config });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Stockcast backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
