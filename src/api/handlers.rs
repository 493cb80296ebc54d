//! API Handlers
//!
//! HTTP request handlers for each endpoint. Every counted handler bumps its
//! endpoint-access counter only once the response is ready.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::metrics::{Endpoint, Metrics};
use crate::models::{ReverseRequest, ReverseResponse};
use crate::words::{reverse, NO_WORD_SENTINEL};

/// Prefix of the `GET /` body.
pub const RELEASE_PREFIX: &str = "Reverse Words Release: ";

/// Body of the `GET /health` response.
pub const HEALTHY: &str = "Healthy";

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Arc<Config>,
    /// Process-wide counters
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(config: Config, metrics: Metrics) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(metrics),
        }
    }

    /// Creates a new AppState from configuration with a fresh set of counters.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.clone(), Metrics::new()?))
    }
}

/// Handler for POST /
///
/// Reverses the `word` field of the body. The body is read raw so requests
/// without a JSON content type, or without a body at all, are accepted.
pub async fn reverse_word_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response> {
    let request = ReverseRequest::from_body(&body)?;

    let reverse_word = match request.word() {
        Some(word) => {
            info!(word, "Detected word");
            reverse(word)
        }
        None => {
            info!("No word detected, sending default reverse word");
            NO_WORD_SENTINEL.to_string()
        }
    };
    info!(reverse_word = %reverse_word, "Reverse word");
    state.metrics.record_reversed();

    let json = serde_json::to_vec(&ReverseResponse::new(reverse_word))
        .map_err(|e| ApiError::Serialization(e.to_string()))?;
    let response = ([(header::CONTENT_TYPE, "application/json")], json).into_response();

    state.metrics.record_access(Endpoint::ReverseWord);
    Ok(response)
}

/// Handler for GET /
///
/// Returns the configured release as plain text.
pub async fn release_handler(State(state): State<AppState>) -> String {
    let body = format!("{}{}", RELEASE_PREFIX, state.config.release);
    state.metrics.record_access(Endpoint::Release);
    body
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> &'static str {
    state.metrics.record_access(Endpoint::Health);
    HEALTHY
}

/// Handler for GET /metrics
///
/// Renders the counters in the Prometheus text format. Not itself counted.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response> {
    let text = state.metrics.render()?;
    debug!(bytes = text.len(), "Rendered metrics");

    Ok(([(header::CONTENT_TYPE, state.metrics.content_type())], text).into_response())
}
