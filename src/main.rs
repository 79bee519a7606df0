use comment_api::api::build_router;
use comment_api::comments::service::CommentService;
use comment_api::config::Config;
use comment_api::storage::JsonDocument;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    tracing::info!("Data file: {}", config.data_file.display());
    tracing::info!("Request body limit: {} bytes", config.body_limit);

    let service = Arc::new(CommentService::new(JsonDocument::new(
        config.data_file.clone(),
    )));
    if !service.document_exists().await {
        tracing::warn!(
            "Data file {} does not exist; every API route will answer 404 until it is created",
            config.data_file.display()
        );
    }

    let app = build_router(service, &config);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server is running at port {}", config.port);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
