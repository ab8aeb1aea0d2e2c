//! Design bridge application composition root
//!
//! Composes the domain routers with the shared infrastructure routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use designbridge_common::Config;
use designbridge_designs::{DesignsState, ProjectConfigStore};
use designbridge_penpot::{PenpotConfig, PenpotServiceFactory};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Design Bridge";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create the main application router from configuration
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let store = ProjectConfigStore::open(config.projects_config_path.clone())?;

    let penpot = PenpotServiceFactory::create(PenpotConfig::from(config))?;

    let state = DesignsState::new(
        Arc::new(store),
        Arc::from(penpot),
        config.penpot_url.clone(),
        config.default_project.clone(),
    );

    Ok(create_app_with_state(state))
}

/// Build the router around an already assembled domain state
pub fn create_app_with_state(state: DesignsState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .merge(designbridge_designs::routes())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub docs: &'static str,
    pub health: &'static str,
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: VERSION,
        status: "running",
        docs: "/docs",
        health: "/health",
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub penpot_connected: bool,
    pub version: &'static str,
    pub checked_at: DateTime<Utc>,
}

/// Health check endpoint; reports `degraded` while the design backend is unreachable
async fn health_check(State(state): State<DesignsState>) -> Json<HealthResponse> {
    let penpot_connected = state.penpot.health_check().await;
    if !penpot_connected {
        tracing::warn!("PenPot health check failed");
    }

    Json(HealthResponse {
        status: if penpot_connected { "healthy" } else { "degraded" },
        penpot_connected,
        version: VERSION,
        checked_at: Utc::now(),
    })
}
