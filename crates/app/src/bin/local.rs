// HackHub API - Local Development Server
//
// Serves the accounts, hackathons and teams routes against the store named by
// DOCSTORE_PROVIDER. `DOCSTORE_PROVIDER=mock` runs with no Appwrite project.

use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hackhub_app::{body_limit_layer, build_cors_layer, create_app, describe_backend};
use hackhub_common::Config;
use hackhub_docstore::BackendFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .pretty()
        .init();

    let config = Config::from_env().inspect_err(|e| {
        error!(error = %e, "Set the APPWRITE_* variables or DOCSTORE_PROVIDER=mock");
    })?;

    info!(
        port = config.port,
        timeout_secs = config.http_timeout_secs,
        "HackHub API using {}",
        describe_backend(&config)
    );
    if config.docstore_provider == "mock" {
        warn!("Mock document store: data is lost on restart");
    }

    let backends = BackendFactory::create(&config)
        .map_err(|e| anyhow::anyhow!("{} document store unavailable: {}", config.docstore_provider, e))?;

    let app = create_app(&config, backends)?
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors_allowed_origins))
        .layer(body_limit_layer());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(origins = %config.cors_allowed_origins, "Listening on http://{}", addr);
    info!("Try http://{}/api/hackathons or http://{}/health", addr, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HackHub API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, draining requests"),
        _ = terminate => info!("SIGTERM received, draining requests"),
    }
}
