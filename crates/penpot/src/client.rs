//! PenPot HTTP Client Implementation
//!
//! POSTs commands as JSON to `{url}{plugin_endpoint}` and treats anything but
//! a 2xx response with a JSON body as a failed command.

use std::time::Duration;

use serde_json::Value;

use crate::{PenpotCommand, PenpotConfig, PenpotError, PenpotResult, PenpotService};

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Real PenPot client for the plugin command API.
pub struct PenpotClient {
    http: reqwest::Client,
    base_url: String,
    plugin_url: String,
    timeout_secs: u64,
}

impl PenpotClient {
    /// Create a new PenPot client from configuration.
    pub fn new(config: PenpotConfig) -> Result<Self, PenpotError> {
        if config.timeout_secs == 0 {
            return Err(PenpotError::Configuration(
                "PenPot timeout must be greater than zero".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PenpotError::Configuration(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            http,
            plugin_url: config.plugin_url(),
            base_url: config.url,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn plugin_url(&self) -> &str {
        &self.plugin_url
    }

    fn request_error(&self, error: reqwest::Error) -> PenpotError {
        if error.is_timeout() {
            PenpotError::Timeout(self.timeout_secs)
        } else {
            PenpotError::Request(error.to_string())
        }
    }
}

#[async_trait::async_trait]
impl PenpotService for PenpotClient {
    async fn execute(&self, command: PenpotCommand) -> Result<PenpotResult, PenpotError> {
        let operation = command.operation();
        tracing::debug!(operation, url = %self.plugin_url, "Sending PenPot command");

        let response = self
            .http
            .post(&self.plugin_url)
            .json(&command)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            tracing::error!(operation, status = %status, "PenPot command failed");
            return Err(PenpotError::Response(format!(
                "PenPot plugin returned {}: {}",
                status, body
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                PenpotError::Timeout(self.timeout_secs)
            } else {
                PenpotError::Response(format!("Failed to parse response: {}", e))
            }
        })?;

        // The plugin reports its own failures inside a 2xx body
        if body.get("success").and_then(Value::as_bool) == Some(false) {
            let message = match body.get("error") {
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => "unknown plugin error".to_string(),
            };
            tracing::error!(operation, error = %message, "PenPot plugin rejected command");
            return Err(PenpotError::Response(message));
        }

        tracing::debug!(operation, "PenPot command succeeded");
        Ok(PenpotResult(body))
    }

    async fn health_check(&self) -> bool {
        match self
            .http
            .get(&self.base_url)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                tracing::error!(error = %e, "PenPot health check failed");
                false
            }
        }
    }
}
