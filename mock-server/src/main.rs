use mock_server::{logging, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    logging::init(config.debug);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, app = %config.app_name, api = %config.api_prefix(), "listening");
    mock_server::run(listener, config).await?;
    Ok(())
}
