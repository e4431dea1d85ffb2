//! REST API server module
//!
//! Exposes the launch queries over HTTP and translates failure
//! classifications into status codes.

use crate::service::LaunchQueries;
use crate::{Config, Result};
use axum::{Router, routing::get};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Launches
/// - `GET /today` - Launches scheduled for the current UTC day
/// - `GET /failed?start=<RFC3339>&end=<RFC3339>` - Failed launches in a range
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(launches: Arc<dyn LaunchQueries>, config: Arc<Config>) -> Router {
    let state = AppState::new(launches, config.clone());

    let router = Router::new()
        // Launches
        .route("/today", get(routes::today))
        .route("/failed", get(routes::failed))
        // System
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    // SwaggerUi serves its own copy of the document, so it needs a path that
    // does not collide with /openapi.json
    let router = if config.server.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    router.with_state(state).layer(TraceLayer::new_for_http())
}

/// Start the API server on the configured bind address.
///
/// Runs until `shutdown` resolves, then stops accepting connections and
/// waits for in-flight requests to finish.
///
/// # Example
///
/// ```no_run
/// use launch_tracker::{Config, LaunchService, LaunchRepository};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let repository = Arc::new(LaunchRepository::new(&config.upstream)?);
/// let service = Arc::new(LaunchService::new(repository));
///
/// launch_tracker::api::start_api_server(service, config, std::future::pending()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(
    launches: Arc<dyn LaunchQueries>,
    config: Arc<Config>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let bind_address = config.server.bind_address;

    tracing::info!(
        address = %bind_address,
        "Starting API server"
    );

    let app = create_router(launches, config);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(
        address = %listener.local_addr().map_err(crate::error::Error::Io)?,
        "API server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| crate::error::Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
