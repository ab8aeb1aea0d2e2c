//! Design command API handlers
//!
//! Failures of create, modify, and state commands are reported in the
//! response envelope (`success: false` plus `error.code`/`error.message`)
//! with the HTTP status of the underlying error.

use axum::{extract::State, http::StatusCode, Json};
use designbridge_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::api::middleware::DesignsState;
use crate::domain::entities::{ElementKind, PropertyBag};

pub const CREATE_FAILED: &str = "CREATE_FAILED";
pub const MODIFY_FAILED: &str = "MODIFY_FAILED";
pub const STATE_QUERY_FAILED: &str = "STATE_QUERY_FAILED";

/// Requested design action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Create,
    Modify,
    Delete,
    Query,
}

/// Request to create or modify a design element
#[derive(Debug, Deserialize, Validate)]
pub struct DesignRequest {
    pub action: ActionType,
    pub element_type: Option<ElementKind>,
    pub element_id: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    pub project: Option<String>,
    /// Original instruction, e.g. "Create a primary CTA button"
    #[validate(length(max = 2000))]
    pub natural_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Response from a design operation
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DesignResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl DesignResponse {
    fn failed(message: &str, code: &str, error: &Error) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            error: Some(ErrorDetail {
                code: code.to_string(),
                message: error.to_string(),
            }),
            ..Self::default()
        }
    }
}

/// Query for the current design state
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct StateQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default = "default_include_children")]
    pub include_children: bool,
}

fn default_include_children() -> bool {
    true
}

/// Current design state
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StateResponse {
    pub success: bool,
    pub elements: Vec<Value>,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Request to translate an instruction without executing it
#[derive(Debug, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(length(max = 2000))]
    pub natural_language: String,
    pub project: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Translated command preview
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub element_type: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<&'static str>,
    pub project: String,
    pub properties: PropertyBag,
}

/// Translate an instruction into a command without touching the backend
pub async fn translate_design(
    State(state): State<DesignsState>,
    ValidatedJson(req): ValidatedJson<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
    let project = state.project_or_default(req.project.as_deref()).to_string();
    let mut command = state.translator.translate(&req.natural_language, &project);
    command.properties.overlay(req.properties);

    Ok(Json(TranslateResponse {
        element_type: command.kind,
        operation: command.kind.create_operation().map(|op| op.as_str()),
        project,
        properties: command.properties,
    }))
}

/// Create a new design element.
///
/// A natural-language instruction is translated first and the explicit
/// `properties` are laid over the extracted ones.
pub async fn create_design(
    State(state): State<DesignsState>,
    ValidatedJson(req): ValidatedJson<DesignRequest>,
) -> (StatusCode, Json<DesignResponse>) {
    tracing::info!(
        action = ?req.action,
        element_type = ?req.element_type,
        project = ?req.project,
        natural_language = ?req.natural_language,
        "Create request"
    );

    match create_element(&state, req).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            tracing::error!(error = %e, "Create failed");
            (
                e.status_code(),
                Json(DesignResponse::failed(
                    "Failed to create element",
                    CREATE_FAILED,
                    &e,
                )),
            )
        }
    }
}

async fn create_element(state: &DesignsState, req: DesignRequest) -> Result<DesignResponse> {
    let instruction = req
        .natural_language
        .as_deref()
        .filter(|text| !text.is_empty());

    let (kind, properties) = match instruction {
        Some(text) => {
            let project = state.project_or_default(req.project.as_deref());
            let mut command = state.translator.translate(text, project);
            command.properties.overlay(req.properties);
            (command.kind, command.properties)
        }
        None => {
            let kind = req.element_type.ok_or_else(|| {
                Error::Validation("element_type or natural_language is required".to_string())
            })?;
            (kind, PropertyBag::from_explicit(req.properties))
        }
    };

    let operation = kind
        .create_operation()
        .ok_or_else(|| Error::UnsupportedElement(kind.to_string()))?;

    let name = properties.name().unwrap_or("unnamed").to_string();
    let result = state
        .penpot
        .create_element(operation, properties.into_inner())
        .await?;
    let element_id = result.element_id();

    tracing::info!(kind = %kind, name = %name, element_id = ?element_id, "Created element");

    Ok(DesignResponse {
        success: true,
        message: format!("Created {}: {}", kind, name),
        preview_url: element_id.as_deref().map(|id| state.preview_url(id)),
        element_id,
        ..DesignResponse::default()
    })
}

/// Modify an existing design element
pub async fn modify_design(
    State(state): State<DesignsState>,
    ValidatedJson(req): ValidatedJson<DesignRequest>,
) -> (StatusCode, Json<DesignResponse>) {
    tracing::info!(element_id = ?req.element_id, "Modify request");

    match modify_element(&state, req).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            tracing::error!(error = %e, "Modify failed");
            (
                e.status_code(),
                Json(DesignResponse::failed(
                    "Failed to modify element",
                    MODIFY_FAILED,
                    &e,
                )),
            )
        }
    }
}

async fn modify_element(state: &DesignsState, req: DesignRequest) -> Result<DesignResponse> {
    let element_id = req
        .element_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::Validation("element_id required for modify".to_string()))?;

    let result = state
        .penpot
        .modify_element(element_id.clone(), req.properties)
        .await?;

    Ok(DesignResponse {
        success: true,
        message: format!("Modified element: {}", element_id),
        element_id: Some(element_id),
        data: Some(result.data()),
        ..DesignResponse::default()
    })
}

/// Get the current design state
pub async fn get_state(
    State(state): State<DesignsState>,
    ValidatedJson(query): ValidatedJson<StateQuery>,
) -> (StatusCode, Json<StateResponse>) {
    tracing::info!(?query, "State query");

    match query_state(&state, &query).await {
        Ok(elements) => (
            StatusCode::OK,
            Json(StateResponse {
                success: true,
                total_count: elements.len(),
                elements,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "State query failed");
            (
                e.status_code(),
                Json(StateResponse {
                    error: Some(ErrorDetail {
                        code: STATE_QUERY_FAILED.to_string(),
                        message: e.to_string(),
                    }),
                    ..StateResponse::default()
                }),
            )
        }
    }
}

async fn query_state(state: &DesignsState, query: &StateQuery) -> Result<Vec<Value>> {
    let query = match serde_json::to_value(query)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let result = state.penpot.get_state(query).await?;
    Ok(result.elements())
}
