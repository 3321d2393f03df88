use crate::{
    ClientConfig, HypervisorClient, ProxmoxError, ServerState, ServerStatus, StatusReport,
    server::{router, state::AppState},
    status::{ClusterStatus, SimulatedStatus, source::MockStatusSource},
    tests::support::unreachable_connection,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const POLL: Duration = Duration::from_secs(3_600);

fn app_with(live: Arc<dyn crate::status::StatusSource>) -> Router {
    router(AppState::new(live, Arc::new(SimulatedStatus), "pong-test", POLL).unwrap())
}

fn app(live: MockStatusSource) -> Router {
    app_with(Arc::new(live))
}

fn live_report() -> StatusReport {
    let now = Utc::now();
    let server = ServerStatus::new("pve1", ServerState::Online, "1d 1h", now).with_response_time(4);
    StatusReport::from_servers(vec![server], now, Some("10.0.0.1".to_string()))
}

fn healthy_live() -> MockStatusSource {
    let mut live = MockStatusSource::new();
    live.expect_fetch_status().returning(|| Ok(live_report()));
    live.expect_ping().returning(|_| Ok(None));
    live
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
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
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, "GET", uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_ping_demo_and_health() {
    let app = app(healthy_live());

    let (status, body) = get_json(app.clone(), "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"message": "pong-test"}));

    let (_, body) = get_json(app.clone(), "/api/demo").await;
    assert_eq!(body["message"], "Hello from the status service");

    let (status, body) = get_json(app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_simulated_status_is_stable_in_shape() {
    let app = app(healthy_live());
    for _ in 0..2 {
        let (status, body) = get_json(app.clone(), "/api/status").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body["servers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Main Server", "Database Server", "API Gateway"]);
        assert_eq!(body["systemInfo"]["totalServers"], 3);
        assert_eq!(body["systemInfo"]["onlineServers"], 3);
        assert!(body["systemInfo"].get("clusterHost").is_none());

        let main = &body["servers"][0];
        let response_time = main["responseTime"].as_u64().unwrap();
        assert!((10..60).contains(&response_time));
        let cpu = main["cpuUsage"].as_u64().unwrap();
        assert!((20..50).contains(&cpu));
    }
}

#[tokio::test]
async fn test_simulated_ping_answers_for_any_name() {
    let (status, body) = get_json(app(healthy_live()), "/api/ping/anything-at-all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["serverName"], "anything-at-all");
    match body["status"].as_str().unwrap() {
        "online" => assert!((10..110).contains(&body["responseTime"].as_u64().unwrap())),
        "offline" => assert!(body["responseTime"].is_null()),
        other => panic!("unexpected status {}", other),
    }
}

#[tokio::test]
async fn test_proxmox_status_passes_report_through() {
    let (status, body) = get_json(app(healthy_live()), "/api/proxmox/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["systemInfo"]["clusterHost"], "10.0.0.1");
    assert_eq!(body["servers"][0]["name"], "pve1");
    assert_eq!(body["servers"][0]["responseTime"], 4);
}

#[tokio::test]
async fn test_proxmox_status_internal_failure_is_500() {
    let mut live = MockStatusSource::new();
    live.expect_fetch_status()
        .returning(|| Err(ProxmoxError::Parse("unexpected shape".to_string())));

    let (status, body) = get_json(app(live), "/api/proxmox/status").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Proxmox cluster status");
    assert_eq!(body["message"], "Parse error: unexpected shape");
}

#[tokio::test]
async fn test_panicking_handler_is_500() {
    let mut live = MockStatusSource::new();
    live.expect_fetch_status()
        .returning(|| panic!("aggregation bug"));

    let (status, body) = get_json(app(live), "/api/proxmox/status").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Proxmox cluster status");
}

#[tokio::test]
async fn test_proxmox_ping_unknown_name_is_404() {
    let client =
        HypervisorClient::new(unreachable_connection(), &ClientConfig::default()).unwrap();
    let live = ClusterStatus::new(Arc::new(client));

    let (status, body) = get_json(app_with(Arc::new(live)), "/api/proxmox/ping/unknown-name").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"error": "Server not found"}));
}

#[tokio::test]
async fn test_proxmox_ping_unreachable_target_is_offline_200() {
    let client =
        HypervisorClient::new(unreachable_connection(), &ClientConfig::default()).unwrap();
    let live = ClusterStatus::new(Arc::new(client));

    let (status, body) = get_json(app_with(Arc::new(live)), "/api/proxmox/ping/127.0.0.1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["serverName"], "127.0.0.1");
    assert_eq!(body["status"], "offline");
    assert!(body["responseTime"].is_null());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_proxmox_ping_source_error_is_offline_200() {
    let mut live = MockStatusSource::new();
    live.expect_fetch_status().returning(|| Ok(live_report()));
    live.expect_ping()
        .returning(|_| Err(ProxmoxError::Network("refused".to_string())));

    let (status, body) = get_json(app(live), "/api/proxmox/ping/pve1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "offline");
    assert_eq!(body["error"], "Network error: refused");
}

#[tokio::test]
async fn test_dashboard_page_renders() {
    let (status, headers, body) = send(app(healthy_live()), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("TMMNets Home Dashboard"));
    assert!(html.contains("Admin Dashboards"));
    assert!(html.contains("<meta http-equiv=\"refresh\" content=\"3600\">"));
}

#[tokio::test]
async fn test_refresh_redirects_home() {
    let (status, headers, _) = send(app(healthy_live()), "POST", "/refresh").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/");
}

#[tokio::test]
async fn test_cors_is_permissive() {
    let response = app(healthy_live())
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .header(header::ORIGIN, "http://elsewhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
