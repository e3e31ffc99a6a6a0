//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_MOCK_LATENCY_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SESSION_FILE,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API base URL; also used to resolve relative asset paths
    pub api_base_url: String,
    /// Fixed request timeout applied by the transport layer
    pub request_timeout_secs: u64,
    /// Simulated latency of the in-memory backend (0 disables it)
    pub mock_latency_ms: u64,
    /// Debounce window for search inputs
    pub search_debounce_ms: u64,
    /// Path of the persisted session file
    pub session_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("ELEARN_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: env::var("ELEARN_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            mock_latency_ms: env::var("ELEARN_MOCK_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MOCK_LATENCY_MS),
            search_debounce_ms: env::var("ELEARN_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
            session_file: env::var("ELEARN_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}
