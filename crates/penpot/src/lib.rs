//! Design Bridge PenPot Service
//!
//! Carries translated commands to the design backend:
//! - `PenpotClient` POSTs `{operation, properties}` commands to the PenPot plugin API
//! - `MockPenpotService` keeps elements in memory for tests and local development
//! - Configurable base URL, plugin endpoint, timeout, and provider

pub mod client;
pub mod mock;

use designbridge_common::Config;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub use client::PenpotClient;
pub use mock::MockPenpotService;

/// JSON object carried as `properties` or `query`
pub type JsonObject = Map<String, Value>;

#[derive(Error, Debug)]
pub enum PenpotError {
    #[error("PenPot configuration error: {0}")]
    Configuration(String),

    #[error("PenPot request error: {0}")]
    Request(String),

    #[error("PenPot request timed out after {0}s")]
    Timeout(u64),

    #[error("PenPot response error: {0}")]
    Response(String),
}

/// Shape-creating operations understood by the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOperation {
    Rectangle,
    Ellipse,
    Text,
    Board,
}

impl CreateOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreateOperation::Rectangle => "createRectangle",
            CreateOperation::Ellipse => "createEllipse",
            CreateOperation::Text => "createText",
            CreateOperation::Board => "createBoard",
        }
    }

    /// Shape type name reported back by the plugin
    pub fn shape_type(&self) -> &'static str {
        match self {
            CreateOperation::Rectangle => "rectangle",
            CreateOperation::Ellipse => "ellipse",
            CreateOperation::Text => "text",
            CreateOperation::Board => "board",
        }
    }
}

/// A command for the PenPot plugin API.
///
/// Serializes as `{"operation": "<name>", ...}` with the variant's fields
/// alongside the operation tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation")]
pub enum PenpotCommand {
    #[serde(rename = "createRectangle")]
    CreateRectangle { properties: JsonObject },
    #[serde(rename = "createEllipse")]
    CreateEllipse { properties: JsonObject },
    #[serde(rename = "createText")]
    CreateText { properties: JsonObject },
    #[serde(rename = "createBoard")]
    CreateBoard { properties: JsonObject },
    #[serde(rename = "modifyElement")]
    ModifyElement {
        element_id: String,
        properties: JsonObject,
    },
    #[serde(rename = "getState")]
    GetState { query: JsonObject },
}

impl PenpotCommand {
    pub fn create(operation: CreateOperation, properties: JsonObject) -> Self {
        match operation {
            CreateOperation::Rectangle => PenpotCommand::CreateRectangle { properties },
            CreateOperation::Ellipse => PenpotCommand::CreateEllipse { properties },
            CreateOperation::Text => PenpotCommand::CreateText { properties },
            CreateOperation::Board => PenpotCommand::CreateBoard { properties },
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            PenpotCommand::CreateRectangle { .. } => CreateOperation::Rectangle.as_str(),
            PenpotCommand::CreateEllipse { .. } => CreateOperation::Ellipse.as_str(),
            PenpotCommand::CreateText { .. } => CreateOperation::Text.as_str(),
            PenpotCommand::CreateBoard { .. } => CreateOperation::Board.as_str(),
            PenpotCommand::ModifyElement { .. } => "modifyElement",
            PenpotCommand::GetState { .. } => "getState",
        }
    }
}

/// JSON body returned by the plugin for a successful command.
///
/// The plugin may answer either with the payload at the top level or wrapped
/// as `{"success": true, "data": {...}}`; accessors look in both places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PenpotResult(pub Value);

impl PenpotResult {
    fn field(&self, key: &str) -> Option<&Value> {
        self.0
            .get(key)
            .or_else(|| self.0.get("data").and_then(|data| data.get(key)))
    }

    /// Identifier of the created or modified element
    pub fn element_id(&self) -> Option<String> {
        match self.field("id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Elements listed by a `getState` command
    pub fn elements(&self) -> Vec<Value> {
        self.field("elements")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// The payload handed back to API callers
    pub fn data(&self) -> Value {
        self.0.get("data").cloned().unwrap_or_else(|| self.0.clone())
    }
}

/// PenPot service configuration
#[derive(Debug, Clone)]
pub struct PenpotConfig {
    /// Provider (penpot, mock)
    pub provider: String,
    /// Base URL of the PenPot instance
    pub url: String,
    /// Path of the plugin command endpoint
    pub plugin_endpoint: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl PenpotConfig {
    /// Create PenPot config from environment variables
    pub fn from_env() -> Result<Self, PenpotError> {
        let config = Config::from_env().map_err(|e| PenpotError::Configuration(e.to_string()))?;
        Ok(Self::from(&config))
    }

    /// Full URL commands are POSTed to
    pub fn plugin_url(&self) -> String {
        format!(
            "{}{}",
            self.url.trim_end_matches('/'),
            self.plugin_endpoint
        )
    }
}

impl From<&Config> for PenpotConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: config.penpot_provider.clone(),
            url: config.penpot_url.clone(),
            plugin_endpoint: config.penpot_plugin_endpoint.clone(),
            timeout_secs: config.penpot_timeout_secs,
        }
    }
}

impl From<PenpotError> for designbridge_common::Error {
    fn from(error: PenpotError) -> Self {
        match error {
            PenpotError::Configuration(msg) => designbridge_common::Error::Configuration(msg),
            other => designbridge_common::Error::Backend(other.to_string()),
        }
    }
}

/// Design backend trait for different implementations
#[async_trait::async_trait]
pub trait PenpotService: Send + Sync {
    /// Execute a single command. Any non-success outcome is an error; nothing is retried.
    async fn execute(&self, command: PenpotCommand) -> Result<PenpotResult, PenpotError>;

    /// Whether the backend is reachable
    async fn health_check(&self) -> bool;

    async fn create_element(
        &self,
        operation: CreateOperation,
        properties: JsonObject,
    ) -> Result<PenpotResult, PenpotError> {
        self.execute(PenpotCommand::create(operation, properties))
            .await
    }

    async fn modify_element(
        &self,
        element_id: String,
        properties: JsonObject,
    ) -> Result<PenpotResult, PenpotError> {
        self.execute(PenpotCommand::ModifyElement {
            element_id,
            properties,
        })
        .await
    }

    async fn get_state(&self, query: JsonObject) -> Result<PenpotResult, PenpotError> {
        self.execute(PenpotCommand::GetState { query }).await
    }
}

/// Factory for creating PenpotService implementations
pub struct PenpotServiceFactory;

impl PenpotServiceFactory {
    pub fn create(config: PenpotConfig) -> Result<Box<dyn PenpotService>, PenpotError> {
        match config.provider.as_str() {
            "penpot" => {
                tracing::info!(url = %config.url, "Creating PenPot client service");
                Ok(Box::new(PenpotClient::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock PenPot service");
                Ok(Box::new(MockPenpotService::new()))
            }
            provider => Err(PenpotError::Configuration(format!(
                "Unknown PenPot provider: {}. Supported providers: penpot, mock",
                provider
            ))),
        }
    }
}
