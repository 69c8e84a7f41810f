//! HackHub API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use hackhub_app::{body_limit_layer, build_cors_layer, create_app, describe_backend};
use hackhub_common::Config;
use hackhub_docstore::BackendFactory;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time()
        .init();

    info!("Initializing HackHub API Lambda");

    let config =
        Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    let backends = BackendFactory::create(&config)
        .map_err(|e| Error::from(format!("Document store error: {}", e)))?;

    info!(backend = %describe_backend(&config), "Document store client ready");

    let app = create_app(&config, backends)
        .map_err(|e| Error::from(format!("App initialization error: {}", e)))?;

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors_allowed_origins))
        .layer(body_limit_layer());

    info!("HackHub API Lambda ready to serve requests");

    run(app).await
}
