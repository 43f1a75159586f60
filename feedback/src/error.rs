//! Failure taxonomy for the feedback pipeline.
//!
//! Nothing here escapes the public entry points: `get_feedback` converts
//! every variant into a fallback contract. The enum exists so the client
//! internals and `validate_api_key` can classify what happened without
//! string matching, and so the presentation layer gets consistent user
//! guidance via [`ErrorCategory`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Internal classification of a failed remote scoring attempt.
///
/// A prompt below the length floor is a policy outcome, not a failure, and
/// deliberately has no variant here.
#[derive(Debug, Clone, Error)]
pub enum FeedbackError {
    /// Health probe failed or timed out; the service is simply absent.
    #[error("scoring service unavailable: {0}")]
    ServiceUnavailable(String),
    /// The service answered with a non-success status.
    #[error("scoring service error ({status}): {message}")]
    ServiceError {
        /// HTTP status code of the response.
        status: u16,
        /// Error text from the response body, or a status-derived message.
        message: String,
    },
    /// The response body could not be parsed or failed shape validation.
    #[error("malformed scoring response: {0}")]
    ResponseMalformed(String),
    /// The request failed in transit (connect error, timeout, aborted body).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// User-guidance category derived from a fallback diagnostic.
///
/// Mirrors the triage the presentation layer does when deciding which
/// error banner to show, so every front end classifies identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Missing, invalid, or unauthorized API key.
    ApiKey,
    /// The backend could not be reached.
    Connectivity,
    /// Usage quota or rate limit exhausted.
    RateLimit,
    /// Anything else.
    Generic,
}

impl ErrorCategory {
    /// Classify a diagnostic string from a [`crate::FeedbackContract`]'s
    /// `error` field.
    pub fn categorize(error: &str) -> Self {
        let lowered = error.to_lowercase();
        if ["api key", "authentication", "invalid", "unauthorized"]
            .iter()
            .any(|kw| lowered.contains(kw))
        {
            Self::ApiKey
        } else if ["failed to fetch", "connect", "network", "unreachable"]
            .iter()
            .any(|kw| lowered.contains(kw))
        {
            Self::Connectivity
        } else if lowered.contains("rate limit") || lowered.contains("quota") {
            Self::RateLimit
        } else {
            Self::Generic
        }
    }

    /// Short headline describing what went wrong.
    pub fn headline(self) -> &'static str {
        match self {
            Self::ApiKey => "There's an issue with the API key.",
            Self::Connectivity => "Couldn't connect to the scoring service.",
            Self::RateLimit => "API rate limit exceeded.",
            Self::Generic => "We couldn't analyze your prompt at this time.",
        }
    }

    /// What the user should do about it.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::ApiKey => "Check that you've entered a valid API key in your settings.",
            Self::Connectivity => "Make sure the backend service is reachable, then try again.",
            Self::RateLimit => {
                "You've reached the usage limit for your API key. Please try again later."
            }
            Self::Generic => "Check your API key settings or try again later.",
        }
    }

    /// Whether reconfiguring the API key could plausibly fix this.
    pub fn key_reconfiguration_helps(self) -> bool {
        matches!(self, Self::ApiKey | Self::Generic)
    }
}
