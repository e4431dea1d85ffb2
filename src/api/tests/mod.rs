use super::*;
use crate::error::Error;
use crate::types::Launch;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::time::Duration;
use tower::ServiceExt;


/// Stub for the service layer: fixed answers, records `failed` ranges
#[derive(Default)]
struct StubQueries {
    today: Mutex<Option<crate::Result<Vec<Launch>>>>,
    failed: Mutex<Option<crate::Result<Vec<Launch>>>>,
    failed_calls: Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>,
}

impl StubQueries {
    fn today_err(error: Error) -> Self {
        let stub = Self::default();
        *stub.today.lock().unwrap() = Some(Err(error));
        stub
    }

    fn today_ok(launches: Vec<Launch>) -> Self {
        let stub = Self::default();
        *stub.today.lock().unwrap() = Some(Ok(launches));
        stub
    }

    fn failed_err(error: Error) -> Self {
        let stub = Self::default();
        *stub.failed.lock().unwrap() = Some(Err(error));
        stub
    }

    fn failed_calls(&self) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        self.failed_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LaunchQueries for StubQueries {
    async fn today(&self) -> crate::Result<Vec<Launch>> {
        self.today.lock().unwrap().take().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn failed(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> crate::Result<Vec<Launch>> {
        self.failed_calls.lock().unwrap().push((start, end));
        self.failed.lock().unwrap().take().unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn test_config() -> Arc<Config> {
    let mut config = Config::default();
    config.server.swagger_ui = false;
    Arc::new(config)
}

/// Helper to send a GET request through a fresh router
async fn get(queries: Arc<dyn LaunchQueries>, uri: &str) -> Response {
    let app = create_router(queries, test_config());
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = get(Arc::new(StubQueries::default()), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_openapi_endpoint() {
    let response = get(Arc::new(StubQueries::default()), "/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(json["paths"]["/today"].is_object());
    assert!(json["paths"]["/failed"].is_object());
}

#[tokio::test]
async fn test_swagger_ui_mounted_when_enabled() {
    let mut config = Config::default();
    config.server.swagger_ui = true;
    let app = create_router(Arc::new(StubQueries::default()), Arc::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_swagger_ui_absent_when_disabled() {
    let response = get(Arc::new(StubQueries::default()), "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = get(Arc::new(StubQueries::default()), "/launches").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_server_serves_and_shuts_down() {
    // Port 0 = OS assigns a free port; find one we can hit afterwards
    let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = probe.local_addr().unwrap();
    drop(probe);

    let mut config = Config::default();
    config.server.bind_address = addr;
    config.server.swagger_ui = false;

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(start_api_server(
        Arc::new(StubQueries::default()),
        Arc::new(config),
        async move {
            rx.await.ok();
        },
    ));

    let client = reqwest::Client::new();
    let url = format!("http://{addr}/health");
    let mut response = None;
    for _ in 0..50 {
        if let Ok(r) = client.get(&url).send().await {
            response = Some(r);
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let response = response.expect("server should come up");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    drop(response);
    drop(client);
    tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should stop after shutdown signal")
        .unwrap();
    assert!(result.is_ok());
}
