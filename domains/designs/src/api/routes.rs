//! Route definitions for Designs domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{designs, projects};
use super::middleware::DesignsState;

/// Create design command routes
fn design_routes() -> Router<DesignsState> {
    Router::new()
        .route("/design/translate", post(designs::translate_design))
        .route("/design/create", post(designs::create_design))
        .route("/design/modify", post(designs::modify_design))
        .route("/design/state", post(designs::get_state))
}

/// Create project configuration routes
fn project_routes() -> Router<DesignsState> {
    Router::new()
        .route("/projects/reload", post(projects::reload_projects))
        .route(
            "/projects/{project_id}",
            get(projects::get_project).put(projects::put_project),
        )
}

/// Create all Designs domain API routes
pub fn routes() -> Router<DesignsState> {
    Router::new()
        .merge(design_routes())
        .merge(project_routes())
}
