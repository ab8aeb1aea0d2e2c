//! Project configuration handler integration tests

use axum::http::{Method, StatusCode};
use designbridge_designs::ProjectConfigStore;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{json_request, parse_body, TestApp};

#[tokio::test]
async fn test_get_seeded_project() {
    let app = TestApp::new().unwrap();

    let req = json_request(Method::GET, "/projects/compel-english", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["brand_colors"]["primary"], "#FF5733");
    assert_eq!(body["typography"]["body"], "Open Sans");
    assert_eq!(body["spacing"]["unit"], 8);
}

#[tokio::test]
async fn test_get_unknown_project_is_404() {
    let app = TestApp::new().unwrap();

    let req = json_request(Method::GET, "/projects/unknown", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = parse_body(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_put_project_persists_and_affects_translation() {
    let app = TestApp::new().unwrap();

    let profile = json!({
        "brand_colors": {"primary": "#123456"},
        "typography": {"body": "Roboto"},
        "logo": "logo.svg"
    });
    let req = json_request(Method::PUT, "/projects/acme", Some(profile.clone()));
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(parse_body(resp).await, profile);

    // Persisted to disk, unknown keys included
    let reopened = ProjectConfigStore::open(app.store.path()).unwrap();
    let saved = reopened.get("acme").unwrap();
    assert_eq!(saved.brand_colors.primary.as_deref(), Some("#123456"));
    assert_eq!(saved.extra["logo"], "logo.svg");
    assert!(reopened.get("compel-english").is_some());

    let req = json_request(
        Method::POST,
        "/design/translate",
        Some(json!({"natural_language": "primary text: Welcome", "project": "acme"})),
    );
    let resp = app.test_router().oneshot(req).await.unwrap();
    let body = parse_body(resp).await;
    assert_eq!(body["properties"]["fills"], json!([{"fillColor": "#123456"}]));
    assert_eq!(body["properties"]["fontFamily"], "Roboto");
    assert_eq!(body["properties"]["text"], "Welcome");
}

#[tokio::test]
async fn test_put_project_rejects_bad_color() {
    let app = TestApp::new().unwrap();

    let req = json_request(
        Method::PUT,
        "/projects/acme",
        Some(json!({"brand_colors": {"primary": "orange"}})),
    );
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(app.store.get("acme").is_none());
}

#[tokio::test]
async fn test_reload_picks_up_file_edits() {
    let app = TestApp::new().unwrap();

    let edited = json!({
        "compel-english": {"brand_colors": {"primary": "#000000"}},
        "other": {}
    });
    std::fs::write(
        app.store.path(),
        serde_json::to_string_pretty(&edited).unwrap(),
    )
    .unwrap();

    let req = json_request(Method::POST, "/projects/reload", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["projects"], json!(["compel-english", "other"]));

    let req = json_request(
        Method::POST,
        "/design/translate",
        Some(json!({"natural_language": "primary button"})),
    );
    let resp = app.test_router().oneshot(req).await.unwrap();
    let body = parse_body(resp).await;
    assert_eq!(body["properties"]["fills"], json!([{"fillColor": "#000000"}]));
}

#[tokio::test]
async fn test_reload_of_corrupt_file_keeps_previous_profiles() {
    let app = TestApp::new().unwrap();
    std::fs::write(app.store.path(), "{not json").unwrap();

    let req = json_request(Method::POST, "/projects/reload", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = parse_body(resp).await;
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(app.store.get("compel-english").is_some());
}
