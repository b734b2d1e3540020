use frontdesk_service::config::FrontDeskConfig;
use frontdesk_service::services::init_metrics;
use frontdesk_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FrontDeskConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "frontdesk-service",
        &config.telemetry.log_level,
        config.telemetry.otlp_endpoint.as_deref(),
    );

    init_metrics()?;

    let app = Application::build(config).await?;

    tracing::info!("Starting frontdesk-service on port {}", app.port());
    app.run_until_stopped().await?;

    Ok(())
}
