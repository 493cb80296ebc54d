//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Release reported when `RELEASE` is not set.
pub const DEFAULT_RELEASE: &str = "NotSet";

/// Port used when `APP_PORT` is not set.
pub const DEFAULT_APP_PORT: &str = "8080";

/// Service configuration parameters.
///
/// Read once at startup and handed to the router through `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deployment identifier surfaced by `GET /`
    pub release: String,
    /// Port the HTTP server listens on
    pub app_port: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RELEASE` - Release identifier (default: NotSet)
    /// - `APP_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary key lookup.
    ///
    /// Only a missing key falls back to its default; a key set to an empty
    /// string is taken as-is.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            release: lookup("RELEASE").unwrap_or_else(|| DEFAULT_RELEASE.to_string()),
            app_port: lookup("APP_PORT").unwrap_or_else(|| DEFAULT_APP_PORT.to_string()),
        }
    }

    /// Address the listener binds to, on all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.app_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release: DEFAULT_RELEASE.to_string(),
            app_port: DEFAULT_APP_PORT.to_string(),
        }
    }
}
