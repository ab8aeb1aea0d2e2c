//! Design command handler integration tests

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{json_request, parse_body, TestApp, PENPOT_URL};

/// Recorded backend commands as JSON, in call order
fn recorded(app: &TestApp) -> Vec<Value> {
    app.penpot
        .recorded_commands()
        .iter()
        .map(|command| serde_json::to_value(command).unwrap())
        .collect()
}

mod test_translate {
    use super::*;

    #[tokio::test]
    async fn test_translate_uses_default_project_brand() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/translate",
            Some(json!({"natural_language": "Create a primary CTA button"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["element_type"], "rectangle");
        assert_eq!(body["operation"], "createRectangle");
        assert_eq!(body["project"], "compel-english");
        assert_eq!(body["properties"]["fills"], json!([{"fillColor": "#FF5733"}]));
        assert_eq!(body["properties"]["borderRadius"], 8);
        assert_eq!(body["properties"]["width"], 200);
        assert_eq!(body["properties"]["height"], 100);
    }

    #[tokio::test]
    async fn test_translate_never_calls_backend() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/translate",
            Some(json!({"natural_language": "Add text \"Hello World\""})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;

        assert_eq!(body["element_type"], "text");
        assert_eq!(body["properties"]["text"], "Hello World");
        assert_eq!(body["properties"]["fontFamily"], "Open Sans");
        assert!(app.penpot.recorded_commands().is_empty());
    }

    #[tokio::test]
    async fn test_translate_unknown_project_has_no_brand_colors() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/translate",
            Some(json!({"natural_language": "primary button", "project": "nope"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;

        assert_eq!(body["project"], "nope");
        assert!(body["properties"].get("fills").is_none());
    }

    #[tokio::test]
    async fn test_translate_reserved_kind_has_no_operation() {
        let app = TestApp::new().unwrap();

        // Reserved kinds are never detected, so every translation has an operation
        let req = json_request(
            Method::POST,
            "/design/translate",
            Some(json!({"natural_language": "a path"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;

        assert_eq!(body["element_type"], "rectangle");
        assert_eq!(body["operation"], "createRectangle");
    }
}

mod test_create {
    use super::*;

    #[tokio::test]
    async fn test_create_from_natural_language() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({
                "action": "create",
                "natural_language": "Create a primary CTA button"
            })),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Created rectangle: Primary Cta Button");

        let element_id = body["element_id"].as_str().unwrap();
        assert_eq!(
            body["preview_url"],
            format!("{}/view/{}", PENPOT_URL, element_id)
        );
        assert!(body.get("error").is_none());

        let commands = recorded(&app);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0]["operation"], "createRectangle");
        assert_eq!(
            commands[0]["properties"]["fills"],
            json!([{"fillColor": "#FF5733"}])
        );
        assert_eq!(commands[0]["properties"]["borderRadius"], 8);
    }

    #[tokio::test]
    async fn test_explicit_properties_override_extracted() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({
                "action": "create",
                "natural_language": "create a 300x50 button",
                "properties": {"width": 320, "name": "Signup", "height": null}
            })),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["message"], "Created rectangle: Signup");

        let commands = recorded(&app);
        let properties = &commands[0]["properties"];
        assert_eq!(properties["width"], 320);
        assert_eq!(properties["height"], 50);
        assert_eq!(properties["name"], "Signup");
    }

    #[tokio::test]
    async fn test_create_from_explicit_element_type() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({
                "action": "create",
                "element_type": "ellipse",
                "properties": {"width": 40, "height": 40}
            })),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["message"], "Created ellipse: unnamed");

        let commands = recorded(&app);
        assert_eq!(
            commands[0],
            json!({"operation": "createEllipse", "properties": {"width": 40, "height": 40}})
        );
    }

    #[tokio::test]
    async fn test_empty_natural_language_falls_back_to_element_type() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({
                "action": "create",
                "element_type": "board",
                "natural_language": ""
            })),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(recorded(&app)[0]["operation"], "createBoard");
    }

    #[tokio::test]
    async fn test_create_without_kind_or_instruction_is_400() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({"action": "create"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to create element");
        assert_eq!(body["error"]["code"], "CREATE_FAILED");
        assert!(app.penpot.recorded_commands().is_empty());
    }

    #[tokio::test]
    async fn test_create_reserved_kind_is_unsupported() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({"action": "create", "element_type": "path"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "CREATE_FAILED");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("path"));
        assert!(app.penpot.recorded_commands().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_is_502() {
        let app = TestApp::new().unwrap();
        app.penpot.fail_with("plugin offline");

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({"action": "create", "natural_language": "a red box #FF0000"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body = parse_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "CREATE_FAILED");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("plugin offline"));
        assert_eq!(app.penpot.recorded_commands().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_envelope() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({"action": "explode"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_overlong_instruction_is_rejected() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({"action": "create", "natural_language": "a".repeat(2001)})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(app.penpot.recorded_commands().is_empty());
    }
}

mod test_modify {
    use super::*;

    async fn create_box(app: &TestApp) -> String {
        let req = json_request(
            Method::POST,
            "/design/create",
            Some(json!({"action": "create", "natural_language": "a \"Hero\" box"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;
        body["element_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_modify_forwards_properties() {
        let app = TestApp::new().unwrap();
        let element_id = create_box(&app).await;

        let req = json_request(
            Method::POST,
            "/design/modify",
            Some(json!({
                "action": "modify",
                "element_id": element_id,
                "properties": {"name": "Hero Banner"}
            })),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["element_id"], element_id.as_str());
        assert_eq!(body["message"], format!("Modified element: {}", element_id));

        let commands = recorded(&app);
        assert_eq!(commands[1]["operation"], "modifyElement");
        assert_eq!(commands[1]["element_id"], element_id.as_str());
        assert_eq!(app.penpot.elements()[0].name.as_deref(), Some("Hero Banner"));
    }

    #[tokio::test]
    async fn test_modify_requires_element_id() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/modify",
            Some(json!({"action": "modify", "properties": {"name": "x"}})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "MODIFY_FAILED");
        assert!(app.penpot.recorded_commands().is_empty());
    }

    #[tokio::test]
    async fn test_modify_unknown_element_is_backend_error() {
        let app = TestApp::new().unwrap();

        let req = json_request(
            Method::POST,
            "/design/modify",
            Some(json!({"action": "modify", "element_id": "missing"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "MODIFY_FAILED");
    }
}

mod test_state {
    use super::*;

    #[tokio::test]
    async fn test_state_lists_created_elements() {
        let app = TestApp::new().unwrap();

        for text in ["a card", "a circle"] {
            let req = json_request(
                Method::POST,
                "/design/create",
                Some(json!({"action": "create", "natural_language": text})),
            );
            app.test_router().oneshot(req).await.unwrap();
        }

        let req = json_request(Method::POST, "/design/state", Some(json!({})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total_count"], 2);
        assert_eq!(body["elements"].as_array().unwrap().len(), 2);

        let commands = recorded(&app);
        assert_eq!(
            commands[2],
            json!({"operation": "getState", "query": {"include_children": true}})
        );
    }

    #[tokio::test]
    async fn test_state_failure_reports_code() {
        let app = TestApp::new().unwrap();
        app.penpot.fail_with("boom");

        let req = json_request(
            Method::POST,
            "/design/state",
            Some(json!({"board_name": "Landing"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body = parse_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["total_count"], 0);
        assert_eq!(body["error"]["code"], "STATE_QUERY_FAILED");
    }
}
