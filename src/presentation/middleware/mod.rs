//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod metrics;
pub mod security;

pub use auth::{auth_middleware, AuthUser, GateError};
pub use cors::create_cors_layer;
pub use metrics::track_metrics;
pub use security::{security_headers, SecurityHeadersConfig};
