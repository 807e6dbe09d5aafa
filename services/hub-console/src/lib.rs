//! Hub Console - IoT hub device registry viewer
//!
//! Hosts the browser console and offers a command-line client for the same
//! list/create flow.

pub mod cli;
pub mod config;
pub mod error;
pub mod hub_client;
pub mod io;
pub mod server;

pub use config::{load_config, Config};
pub use error::{ConsoleError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use hub_console_app::DeviceConsole;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::hub_client::HubApiClient;
use crate::io::ReqwestHttpClient;
use crate::server::ServerState;

/// Build a device API client from the configuration
pub fn build_api_client(config: &Config) -> Result<HubApiClient> {
    let http = ReqwestHttpClient::with_timeout(config.api.timeout())?;
    Ok(HubApiClient::new(config.api.base_url.trim(), Arc::new(http)))
}

/// Build a device console backed by the configured API
pub fn build_console(config: &Config) -> Result<DeviceConsole<HubApiClient>> {
    Ok(DeviceConsole::new(build_api_client(config)?))
}

/// Run the web server until Ctrl-C
pub async fn run_server(config: &Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
        }
        cancel_for_signal.cancel();
    });

    let port = config.server.port;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ConsoleError::Server(format!("Failed to bind port {}: {}", port, e))
    })?;

    serve(listener, config, cancel).await
}

/// Serve the console on an already bound listener until `cancel` fires
pub async fn serve(listener: TcpListener, config: &Config, cancel: CancellationToken) -> Result<()> {
    let state = ServerState {
        api_base_url: config.api.base_url.trim().to_string(),
        assets_dir: config.server.assets_dir.clone(),
    };
    let router = server::build_router(state);

    tracing::info!("Hub console listening on http://{}", listener.local_addr()?);
    tracing::debug!(
        "Serving assets from {:?}, device API at {}",
        config.server.assets_dir,
        config.api.base_url
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Hub console stopped");
    Ok(())
}
