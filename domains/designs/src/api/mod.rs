//! API layer for the Designs domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::DesignsState;
pub use routes::routes;
