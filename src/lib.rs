//! Reverse Words - A small word reversal HTTP service
//!
//! Reverses words posted as JSON, reports its release, answers health probes,
//! and exposes its request counters in the Prometheus text format.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod words;

pub use api::AppState;
pub use config::Config;
pub use metrics::{Endpoint, Metrics};
