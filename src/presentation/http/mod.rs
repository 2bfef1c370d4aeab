//! HTTP Layer
//!
//! REST handlers, extractors and the router.

pub mod extractors;
pub mod handlers;
pub mod routes;
