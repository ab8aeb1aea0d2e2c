//! Health and service info endpoint tests

use axum::http::{Method, StatusCode};
use tower::ServiceExt;

use crate::common::{json_request, parse_body, TestApp};

#[tokio::test]
async fn test_health_reports_backend_connected() {
    let app = TestApp::new().unwrap();

    let req = json_request(Method::GET, "/health", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["penpot_connected"], true);
    assert_eq!(body["version"], designbridge_app::VERSION);
    assert!(body["checked_at"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_backend_unreachable() {
    let app = TestApp::new().unwrap();
    app.penpot.set_healthy(false);

    let req = json_request(Method::GET, "/health", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["penpot_connected"], false);
}

#[tokio::test]
async fn test_service_info() {
    let app = TestApp::new().unwrap();

    let req = json_request(Method::GET, "/", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    let body = parse_body(resp).await;

    assert_eq!(body["service"], "Design Bridge");
    assert_eq!(body["status"], "running");
}
