//! Drug Label Search REST server binary.
//!
//! Resolves configuration from the environment once at startup, builds the
//! upstream clients and the axum router, and serves the REST API.

use std::sync::Arc;

use api_rest::{router, AppState};
use dls_core::CoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Drug Label Search application.
///
/// Starts the REST server on the configured address (default: 0.0.0.0:8000)
/// with OpenAPI/Swagger documentation at `/swagger-ui`.
///
/// # Environment Variables
/// - `DLS_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `FDA_BASE_URL`: openFDA drug label endpoint override
/// - `EMC_BASE_URL`: eMC site override
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or a client cannot be built,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("dls=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("DLS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let fda_base_url =
        std::env::var("FDA_BASE_URL").unwrap_or_else(|_| openfda::DEFAULT_BASE_URL.into());
    let emc_base_url =
        std::env::var("EMC_BASE_URL").unwrap_or_else(|_| emc::DEFAULT_BASE_URL.into());

    let cfg = Arc::new(CoreConfig::new(rest_addr, fda_base_url, emc_base_url)?);

    tracing::info!("++ Starting DLS REST on {}", cfg.rest_addr());

    let state = AppState::new(cfg.clone())?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
