//! Common test utilities and fixtures for integration tests
//!
//! Each `TestApp` owns a scratch directory holding its project configuration
//! file and a mock design backend whose recorded commands can be inspected.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use designbridge_designs::{DesignsState, ProjectConfigStore};
use designbridge_penpot::MockPenpotService;
use serde_json::Value;
use tempfile::TempDir;

pub const PENPOT_URL: &str = "http://penpot.test";
pub const DEFAULT_PROJECT: &str = "compel-english";

/// Test application backed by a temp config file and the mock backend
pub struct TestApp {
    pub dir: TempDir,
    pub store: Arc<ProjectConfigStore>,
    pub penpot: MockPenpotService,
    pub state: DesignsState,
}

impl TestApp {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let store = Arc::new(ProjectConfigStore::open(dir.path().join("projects.json"))?);
        let penpot = MockPenpotService::new();

        let state = DesignsState::new(
            Arc::clone(&store),
            Arc::new(penpot.clone()),
            PENPOT_URL,
            DEFAULT_PROJECT,
        );

        Ok(Self {
            dir,
            store,
            penpot,
            state,
        })
    }

    pub fn test_router(&self) -> Router {
        designbridge_app::create_app_with_state(self.state.clone())
    }
}

/// Build a request with an optional JSON body
pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Parse a response body as JSON
pub async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
