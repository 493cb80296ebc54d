//! API Module
//!
//! HTTP handlers and routing for the reverse words REST API.
//!
//! # Endpoints
//! - `POST /` - Reverse a word
//! - `GET /` - Report the configured release
//! - `GET /health` - Health check endpoint
//! - `GET /metrics` - Prometheus counters

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
