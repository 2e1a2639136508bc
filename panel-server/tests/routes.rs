use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use panel_config::{ConfigKind, ConfigLoader, ConfigStore};
use panel_server::routes::create_router;
use panel_server::{AppState, ServerConfig};
use std::sync::Arc;
use tempfile::TempDir;
use testing::{StubProvider, StubResponse, write_config_dir};
use tower::ServiceExt;

fn disk_state(root: &TempDir) -> Arc<AppState> {
    let config = ServerConfig::builder()
        .config_root(root.path())
        .build()
        .unwrap();
    Arc::new(AppState::new(config))
}

fn stub_state(stub: &Arc<StubProvider>, root: &TempDir) -> Arc<AppState> {
    let config = ServerConfig::builder()
        .config_root(root.path())
        .build()
        .unwrap();
    let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), stub.clone());
    Arc::new(AppState::with_loader(Arc::new(loader), config))
}

async fn send(state: Arc<AppState>, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_static_config_file_is_served() {
    let root = TempDir::new().unwrap();
    write_config_dir(root.path()).unwrap();

    let (status, body) = send(
        disk_state(&root),
        Method::GET,
        "/config/android-config.json",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["androidVersion"], "Android 11");
}

#[tokio::test]
async fn test_missing_static_file_is_json_404() {
    let root = TempDir::new().unwrap();

    let (status, body) = send(
        disk_state(&root),
        Method::GET,
        "/config/windows-config.json",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Route /config/windows-config.json not found");
}

#[tokio::test]
async fn test_health() {
    let root = TempDir::new().unwrap();
    let (status, body) = send(disk_state(&root), Method::GET, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["uptimeSeconds"].is_number());
}

#[tokio::test]
async fn test_system_info_summarises_documents() {
    let root = TempDir::new().unwrap();
    write_config_dir(root.path()).unwrap();

    let (status, body) = send(disk_state(&root), Method::GET, "/api/system-info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["windowsInfo"]["osVersion"], "Windows 10.0.22631 (x64)");
    assert_eq!(body["windowsInfo"]["totalMemory"], 16);
    assert_eq!(body["windowsInfo"]["availableMemory"], 8);
    // Loopback adapter is internal and filtered out.
    assert_eq!(body["windowsInfo"]["networkAdapters"].as_array().unwrap().len(), 1);
    assert_eq!(body["androidInfo"]["deviceModel"], "Seewo Board");
    assert!(body["performance"]["cpuUsage"].as_f64().unwrap() >= 20.0);
    assert!(body["timestamp"].is_i64());
}

#[tokio::test]
async fn test_all_configs() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::with_samples());

    let (status, body) = send(stub_state(&stub, &root), Method::GET, "/api/config").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["windows"]["system"].is_object());
    assert_eq!(body["device"]["display"]["touchPoints"], 40);
    assert_eq!(stub.total_calls(), 3);
}

#[tokio::test]
async fn test_single_config_is_cached_across_requests() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::with_samples());
    let state = stub_state(&stub, &root);

    let (status, body) = send(state.clone(), Method::GET, "/api/config/device").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["device"]["brand"], "Seewo");

    send(state, Method::GET, "/api/config/device-config").await;
    assert_eq!(stub.calls(ConfigKind::Device), 1);
}

#[tokio::test]
async fn test_unknown_config_kind_is_400() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::with_samples());

    let (status, body) = send(stub_state(&stub, &root), Method::GET, "/api/config/bogus").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
    assert_eq!(stub.total_calls(), 0);
}

#[tokio::test]
async fn test_fetch_failure_is_502() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::new());
    stub.program(ConfigKind::Windows, StubResponse::Fail("no such file".to_string()));

    let (status, body) = send(stub_state(&stub, &root), Method::GET, "/api/config/windows").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "FETCH_FAILURE");
    assert!(body["details"].as_str().unwrap().contains("no such file"));
}

#[tokio::test]
async fn test_reload_refetches() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::with_samples());
    let state = stub_state(&stub, &root);

    send(state.clone(), Method::GET, "/api/config/android").await;
    let (status, _) = send(state, Method::POST, "/api/config/android/reload").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stub.calls(ConfigKind::Android), 2);
}

#[tokio::test]
async fn test_clear_cache() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::with_samples());
    let state = stub_state(&stub, &root);

    send(state.clone(), Method::GET, "/api/config").await;
    let (status, body) = send(state.clone(), Method::DELETE, "/api/config/cache").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleared"], 3);
    assert!(state.loader.store().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let root = TempDir::new().unwrap();
    let (status, body) = send(disk_state(&root), Method::GET, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Route /api/nope not found");
}

#[tokio::test]
async fn test_wrong_method_on_cache_route_is_json_405() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::with_samples());

    let (status, body) = send(stub_state(&stub, &root), Method::GET, "/api/config/cache").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(body["error"], "Method GET not allowed on /api/config/cache");
    assert_eq!(stub.total_calls(), 0);
}

#[tokio::test]
async fn test_wrong_method_on_reload_is_json_405() {
    let root = TempDir::new().unwrap();
    let stub = Arc::new(StubProvider::with_samples());

    let (status, body) = send(
        stub_state(&stub, &root),
        Method::GET,
        "/api/config/android/reload",
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(stub.total_calls(), 0);
}
