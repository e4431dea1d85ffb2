//! Common test utilities for launch-tracker end-to-end tests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use launch_tracker::{
    Config, LaunchRepository, LaunchService, LoggingFetcher, Retrier, RetryingFetcher,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::MockServer;

/// Path the repository requests on the upstream host
pub const LAUNCH_PATH: &str = "/2.2.0/launch";

/// Config pointing at a mock upstream, with a short backoff so retries stay fast
pub fn config_for(upstream: &MockServer) -> Config {
    let mut config = Config::default();
    config.server.swagger_ui = false;
    config.upstream.base_url = upstream.uri();
    config.upstream.timeout = Duration::from_secs(5);
    config.retry.base_delay = Duration::from_millis(5);
    config.retry.max_attempts = 3;
    config
}

/// Router wired exactly like the binary: retry around logging around the repository
pub fn app(config: Config) -> Router {
    let config = Arc::new(config);
    let repository = Arc::new(LaunchRepository::new(&config.upstream).expect("client builds"));
    let logged = Arc::new(LoggingFetcher::new(repository));
    let retrying = Arc::new(RetryingFetcher::new(logged, Retrier::new(config.retry)));
    let service = Arc::new(LaunchService::new(retrying));
    launch_tracker::api::create_router(service, config)
}

/// Send a GET through the router, returning status and body text
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request builds"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

/// One launch as the upstream API renders it
pub fn upstream_launch(id: &str, net: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Falcon 9 | {id}"),
        "net": net,
        "launch_service_provider": { "name": "SpaceX" },
        "status": { "description": status },
    })
}

/// Paginated envelope around `results`
pub fn upstream_page(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "results": results,
    })
}
