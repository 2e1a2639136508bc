//! Listener lifecycle: warm the document cache, bind, serve until stopped.

use panel_config::ConfigKind;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::error::{Result, ServerError};
use crate::routes::create_router;
use crate::state::{AppState, ServerConfig};

pub struct PanelServer {
    state: Arc<AppState>,
}

impl PanelServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(Arc::new(AppState::new(config)))
    }

    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// `host:port` from the server configuration.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let config = &self.state.config;
        format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| {
                ServerError::Configuration(format!(
                    "Invalid listen address {}:{}: {e}",
                    config.host, config.port
                ))
            })
    }

    /// Loads each document once and returns how many are now cached.
    ///
    /// A missing or broken document is logged and left for the first request
    /// to retry.
    pub async fn warm_cache(&self) -> usize {
        let mut warmed = 0;
        for kind in ConfigKind::ALL {
            match self.state.loader.load(kind).await {
                Ok(_) => warmed += 1,
                Err(e) => tracing::warn!(kind = %kind, error = %e, "Document unavailable at startup"),
            }
        }
        tracing::info!(warmed, "Config cache warmed");
        warmed
    }

    /// Binds the configured address and serves until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let addr = self.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind to {addr}: {e}")))?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.warm_cache().await;

        let local = listener
            .local_addr()
            .map_err(|e| ServerError::Server(format!("Listener has no local address: {e}")))?;
        tracing::info!(
            addr = %local,
            config_dir = %self.state.config.config_dir().display(),
            provider = self.state.loader.provider_name(),
            "Panel server listening"
        );

        axum::serve(listener, create_router(Arc::clone(&self.state)))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {e}")))?;

        tracing::info!(addr = %local, "Panel server stopped");
        Ok(())
    }
}

async fn interrupt() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, "Cannot listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

async fn shutdown_signal() {
    let signal = tokio::select! {
        () = interrupt() => "SIGINT",
        () = terminate() => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down panel server");
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    PanelServer::new(config).run().await
}

/// Installs the log subscriber (`RUST_LOG`, default `info`), reads
/// [`ServerConfig::from_env`] and runs the server.
pub async fn run_from_env() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    run_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_from_config() {
        let config = ServerConfig::builder()
            .host("127.0.0.1")
            .port(8123)
            .build()
            .unwrap();
        let server = PanelServer::new(config);
        assert_eq!(server.socket_addr().unwrap(), "127.0.0.1:8123".parse().unwrap());
    }

    #[test]
    fn test_socket_addr_rejects_hostname() {
        let config = ServerConfig::builder().host("panel.local").build().unwrap();
        let server = PanelServer::new(config);
        assert!(matches!(server.socket_addr(), Err(ServerError::Configuration(_))));
    }
}
