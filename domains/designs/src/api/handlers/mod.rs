//! HTTP handlers for the Designs domain

pub mod designs;
pub mod projects;
