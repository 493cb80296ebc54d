//! Metrics Module
//!
//! Process-wide counters for the service, backed by a private prometheus
//! registry and rendered in the Prometheus text exposition format.

use std::fmt;

use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

// == Endpoint ==
/// Routes whose accesses are counted, used as the `endpoint` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /`
    Release,
    /// `GET /health`
    Health,
    /// `POST /`
    ReverseWord,
}

impl Endpoint {
    /// Every counted endpoint.
    pub const ALL: [Endpoint; 3] = [Endpoint::Release, Endpoint::Health, Endpoint::ReverseWord];

    /// Label value recorded for this endpoint.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Release => "release",
            Endpoint::Health => "health",
            Endpoint::ReverseWord => "reverseword",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// == Metrics ==
/// Counters shared by all handlers.
///
/// Increments are atomic, so a single instance behind an `Arc` can be hit
/// from any number of concurrent requests.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    reversed_words: IntCounter,
    endpoints_accessed: IntCounterVec,
}

impl Metrics {
    // == Constructor ==
    /// Creates the counters and registers them in a fresh registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let reversed_words = IntCounter::with_opts(Opts::new(
            "total_reversed_words",
            "Total number of reversed words",
        ))?;

        let endpoints_accessed = IntCounterVec::new(
            Opts::new(
                "endpoints_accessed",
                "Total number of accessed to a given endpoint",
            ),
            &["endpoint"],
        )?;

        registry.register(Box::new(reversed_words.clone()))?;
        registry.register(Box::new(endpoints_accessed.clone()))?;

        Ok(Self {
            registry,
            reversed_words,
            endpoints_accessed,
        })
    }

    // == Record Reversal ==
    /// Increments the reversed-word counter.
    pub fn record_reversed(&self) {
        self.reversed_words.inc();
    }

    // == Record Access ==
    /// Increments the access counter of `endpoint`.
    pub fn record_access(&self, endpoint: Endpoint) {
        self.endpoints_accessed
            .with_label_values(&[endpoint.label()])
            .inc();
    }

    /// Current value of the reversed-word counter.
    pub fn reversed_words(&self) -> u64 {
        self.reversed_words.get()
    }

    /// Current access count of `endpoint`.
    pub fn endpoint_accesses(&self, endpoint: Endpoint) -> u64 {
        self.endpoints_accessed
            .with_label_values(&[endpoint.label()])
            .get()
    }

    // == Exposition ==
    /// Content type of the output of [`Metrics::render`].
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Renders every registered counter in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("reversed_words", &self.reversed_words())
            .finish_non_exhaustive()
    }
}
