//! Project brand configuration handlers

use axum::{
    extract::{Path, State},
    Json,
};
use designbridge_common::{Error, Result, ValidatedJson};
use serde::Serialize;

use crate::api::middleware::DesignsState;
use crate::domain::profile::ProjectProfile;

/// Project identifiers present after a reload
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub projects: Vec<String>,
}

/// Get the brand profile of one project
pub async fn get_project(
    State(state): State<DesignsState>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectProfile>> {
    state
        .store
        .get(&project_id)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Project '{}' not found", project_id)))
}

/// Insert or replace the brand profile of one project and persist it
pub async fn put_project(
    State(state): State<DesignsState>,
    Path(project_id): Path<String>,
    ValidatedJson(profile): ValidatedJson<ProjectProfile>,
) -> Result<Json<ProjectProfile>> {
    let store = state.store.clone();
    let saved = profile.clone();
    let id = project_id.clone();

    tokio::task::spawn_blocking(move || store.save_project(&id, saved))
        .await
        .map_err(|e| Error::Internal(format!("Save task failed: {}", e)))??;

    tracing::info!(project_id = %project_id, "Project profile updated");
    Ok(Json(profile))
}

/// Re-read the project configuration file
pub async fn reload_projects(State(state): State<DesignsState>) -> Result<Json<ReloadResponse>> {
    let store = state.store.clone();

    let profiles = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| Error::Internal(format!("Reload task failed: {}", e)))??;

    Ok(Json(ReloadResponse {
        projects: profiles.keys().cloned().collect(),
    }))
}
