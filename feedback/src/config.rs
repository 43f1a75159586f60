//! Client configuration for the remote scoring service.

use std::time::Duration;

/// Default scoring backend.
pub const DEFAULT_API_URL: &str = "https://ai-prompt-backend.vercel.app";

const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 3;
const DEFAULT_ANALYZE_TIMEOUT_SECS: u64 = 20;

/// Connection settings for [`crate::FeedbackClient`].
///
/// The API key is optional: without one the backend may still answer (or
/// reject the request, which degrades to the local heuristic like every
/// other failure). The core only ever reads the key; persisting it is the
/// presentation layer's job.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the scoring service, without a trailing slash.
    pub base_url: String,
    /// API key forwarded in the analyze request body.
    pub api_key: Option<String>,
    /// Timeout for the `GET /api/health` probe. Expiry means unavailable.
    pub probe_timeout: Duration,
    /// Timeout for the `POST /api/analyze` call.
    pub analyze_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("PROMPT_TRAINER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: std::env::var("PROMPT_TRAINER_API_KEY").ok(),
            probe_timeout: std::env::var("PROMPT_TRAINER_PROBE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or_else(|| Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS)),
            analyze_timeout: std::env::var("PROMPT_TRAINER_ANALYZE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or_else(|| Duration::from_secs(DEFAULT_ANALYZE_TIMEOUT_SECS)),
        }
    }
}

impl ClientConfig {
    /// Override the base URL (trailing slashes are stripped).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the health-probe timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Override the analyze-request timeout.
    pub fn with_analyze_timeout(mut self, timeout: Duration) -> Self {
        self.analyze_timeout = timeout;
        self
    }
}
