//! Shared utilities, configuration, and error handling for the design bridge
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and the HTTP error envelope
//! - A validating JSON extractor for request bodies

pub mod config;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
