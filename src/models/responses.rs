//! Response DTOs for the reverse words API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the reverse operation (POST /)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReverseResponse {
    /// The reversed text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reverse_word: String,
}

impl ReverseResponse {
    /// Creates a new ReverseResponse
    pub fn new(reverse_word: impl Into<String>) -> Self {
        Self {
            reverse_word: reverse_word.into(),
        }
    }
}
