//! Repository implementations for the Designs domain

pub mod profiles;

pub use profiles::{ProjectConfigStore, StoreError};
