//! Application startup and lifecycle management.

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, metrics_middleware, request_id_middleware};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::{FrontDeskConfig, SlackConfig};
use crate::handlers::{
    health_check, list_staff, method_not_supported, metrics::metrics_endpoint, not_found,
    notify_staff,
};
use crate::services::{MockDirectory, SlackClient, StaffDirectory};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/staff", get(list_staff).fallback(method_not_supported))
        .route(
            "/staff/:staff_id",
            post(notify_staff).fallback(method_not_supported),
        )
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .fallback(not_found)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Pick the directory backend: Slack when enabled, in-memory otherwise.
pub fn build_directory(config: &SlackConfig) -> Result<Arc<dyn StaffDirectory>, AppError> {
    if config.enabled {
        let client = SlackClient::new(config).map_err(|e| {
            tracing::error!("Failed to initialize Slack client: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;
        tracing::info!(base_url = %config.api_base_url, "Slack directory client initialized");
        Ok(Arc::new(client))
    } else {
        tracing::warn!("Slack disabled, using in-memory directory");
        Ok(Arc::new(MockDirectory::new(Vec::new())))
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: FrontDeskConfig) -> Result<Self, AppError> {
        let directory = build_directory(&config.slack)?;
        Self::build_with_directory(&config, directory).await
    }

    /// Build around an existing directory (port 0 = random port for testing).
    pub async fn build_with_directory(
        config: &FrontDeskConfig,
        directory: Arc<dyn StaffDirectory>,
    ) -> Result<Self, AppError> {
        let address = config.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Front desk service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(AppState::new(directory)),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
