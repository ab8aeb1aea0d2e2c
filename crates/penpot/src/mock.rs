//! Mock PenPot Service Implementation
//!
//! Keeps created elements in memory so state queries reflect earlier commands.
//! Every command is recorded for test assertions. Thread-safe via `Arc<Mutex<>>`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{CreateOperation, JsonObject, PenpotCommand, PenpotError, PenpotResult, PenpotService};

/// Element held by the mock backend
#[derive(Debug, Clone, Serialize)]
pub struct MockElement {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub shape_type: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl MockElement {
    fn new(operation: CreateOperation, properties: &JsonObject) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: properties
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
            shape_type: operation.shape_type().to_string(),
            width: properties.get("width").and_then(Value::as_u64),
            height: properties.get("height").and_then(Value::as_u64),
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, properties: &JsonObject) {
        if let Some(name) = properties.get("name").and_then(Value::as_str) {
            self.name = Some(name.to_string());
        }
        // The plugin only resizes when both dimensions are given
        if let (Some(width), Some(height)) = (
            properties.get("width").and_then(Value::as_u64),
            properties.get("height").and_then(Value::as_u64),
        ) {
            self.width = Some(width);
            self.height = Some(height);
        }
    }
}

/// Mock PenPot service that records commands for test assertions.
#[derive(Debug, Clone)]
pub struct MockPenpotService {
    commands: Arc<Mutex<Vec<PenpotCommand>>>,
    elements: Arc<Mutex<Vec<MockElement>>>,
    failure: Arc<Mutex<Option<String>>>,
    healthy: Arc<AtomicBool>,
}

impl MockPenpotService {
    /// Create a new, healthy mock PenPot service.
    pub fn new() -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            elements: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            healthy: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Return all recorded commands.
    pub fn recorded_commands(&self) -> Vec<PenpotCommand> {
        self.commands
            .lock()
            .expect("commands lock poisoned, prior test panicked")
            .clone()
    }

    /// Return all elements currently held.
    pub fn elements(&self) -> Vec<MockElement> {
        self.elements
            .lock()
            .expect("elements lock poisoned, prior test panicked")
            .clone()
    }

    /// Make every following command fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self
            .failure
            .lock()
            .expect("failure lock poisoned, prior test panicked") = Some(message.into());
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Clear recorded commands, elements, and failure mode.
    pub fn reset(&self) {
        self.commands
            .lock()
            .expect("commands lock poisoned, prior test panicked")
            .clear();
        self.elements
            .lock()
            .expect("elements lock poisoned, prior test panicked")
            .clear();
        *self
            .failure
            .lock()
            .expect("failure lock poisoned, prior test panicked") = None;
        self.set_healthy(true);
    }

    fn create(
        &self,
        operation: CreateOperation,
        properties: &JsonObject,
    ) -> Result<PenpotResult, PenpotError> {
        let element = MockElement::new(operation, properties);
        let result = json!({
            "id": element.id,
            "name": element.name,
            "type": element.shape_type,
        });
        self.elements
            .lock()
            .map_err(|e| PenpotError::Request(format!("elements lock poisoned: {e}")))?
            .push(element);
        Ok(PenpotResult(result))
    }

    fn modify(&self, element_id: &str, properties: &JsonObject) -> Result<PenpotResult, PenpotError> {
        let mut elements = self
            .elements
            .lock()
            .map_err(|e| PenpotError::Request(format!("elements lock poisoned: {e}")))?;
        let element = elements
            .iter_mut()
            .find(|element| element.id == element_id)
            .ok_or_else(|| PenpotError::Response(format!("Element not found: {}", element_id)))?;
        element.apply(properties);
        Ok(PenpotResult(json!({"id": element.id, "name": element.name})))
    }

    fn state(&self, query: &JsonObject) -> Result<PenpotResult, PenpotError> {
        let elements = self
            .elements
            .lock()
            .map_err(|e| PenpotError::Request(format!("elements lock poisoned: {e}")))?;
        let wanted = query.get("element_id").and_then(Value::as_str);
        let listed: Vec<Value> = elements
            .iter()
            .filter(|element| wanted.is_none_or(|id| element.id == id))
            .map(|element| json!(element))
            .collect();
        Ok(PenpotResult(json!({
            "elements": listed,
            "page": {"id": "mock-page", "name": "Page 1"}
        })))
    }
}

impl Default for MockPenpotService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PenpotService for MockPenpotService {
    async fn execute(&self, command: PenpotCommand) -> Result<PenpotResult, PenpotError> {
        tracing::debug!(operation = command.operation(), "Mock PenPot: recording command");
        self.commands
            .lock()
            .map_err(|e| PenpotError::Request(format!("commands lock poisoned: {e}")))?
            .push(command.clone());

        if let Some(message) = self
            .failure
            .lock()
            .map_err(|e| PenpotError::Request(format!("failure lock poisoned: {e}")))?
            .clone()
        {
            return Err(PenpotError::Response(message));
        }

        match &command {
            PenpotCommand::CreateRectangle { properties } => {
                self.create(CreateOperation::Rectangle, properties)
            }
            PenpotCommand::CreateEllipse { properties } => {
                self.create(CreateOperation::Ellipse, properties)
            }
            PenpotCommand::CreateText { properties } => self.create(CreateOperation::Text, properties),
            PenpotCommand::CreateBoard { properties } => {
                self.create(CreateOperation::Board, properties)
            }
            PenpotCommand::ModifyElement {
                element_id,
                properties,
            } => self.modify(element_id, properties),
            PenpotCommand::GetState { query } => self.state(query),
        }
    }

    #[mutants::skip] // Reads a flag set only by tests
    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}
