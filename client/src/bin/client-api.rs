use std::sync::Arc;

use ride_client::{adapter, logging, ClientConfig, RideSession};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    logging::init(config.debug);

    let session = Arc::new(RideSession::from_config(&config));
    let addr = config.adapter_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, upstream = %config.server_url, "client API listening");

    axum::serve(listener, adapter::app(session.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    session.close();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
