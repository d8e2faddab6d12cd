//! Payroll HTTP server.

use payroll_engine::api::{AppState, create_router};
use payroll_engine::bootstrap::{init_tracing, open_store};
use payroll_engine::config::ConfigLoader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loader = ConfigLoader::from_env()?;
    let config = loader.config().clone();
    init_tracing(config.logging.filter.as_deref());
    info!(path = %loader.path().display(), "configuration loaded");

    let store = open_store(&config.storage).await?;
    let state = AppState::new(store).with_max_upload_bytes(config.server.max_upload_bytes);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.listen_addr.as_str()).await?;
    info!(addr = %config.server.listen_addr, "payroll server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
