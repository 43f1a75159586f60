//! Remote scoring client with graceful degradation.
//!
//! The client is a state machine over connectivity and response validity:
//!
//! ```text
//! get_feedback
//!   ├─ LengthCheck fails → length-floor contract (terminal, no network)
//!   ├─ ProbeConnectivity fails → heuristic fallback, no error
//!   └─ Dispatch
//!        ├─ non-OK response → heuristic fallback + error from body/status
//!        ├─ unparseable / malformed body → heuristic fallback + diagnostic
//!        ├─ transport failure → heuristic fallback, no error
//!        └─ OK, shape-valid body → Accepted (returned as-is)
//! ```
//!
//! Every exit produces a fully populated [`FeedbackContract`]; no failure
//! escapes the public entry points. The probe is a prerequisite gate run
//! sequentially before dispatch, not an optimization; no request races
//! occur, and there is no retry or cancellation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::contract::{FeedbackContract, MINIMUM_PROMPT_LENGTH};
use crate::error::{ErrorCategory, FeedbackError};
use crate::heuristic;
use crate::scenario::Difficulty;

/// Body of `POST /api/analyze`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    scenario: &'a str,
    difficulty: &'a str,
    user_prompt: &'a str,
    /// Serialized as `null` when no key is configured.
    api_key: Option<&'a str>,
}

/// Error envelope the service uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Outcome of an explicit API-key check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidation {
    /// The key produced a real scored response.
    Valid,
    /// The service explicitly rejected the key.
    Rejected(String),
    /// The check could not complete (network or service failure).
    Failed(String),
    /// The service answered with a fallback response, so the key may be
    /// invalid but nothing proved it.
    Inconclusive,
}

/// Client for the remote scoring service.
///
/// Stateless between calls: overlapping submissions share nothing but the
/// connection pool, so concurrent use is safe (if unordered).
#[derive(Debug, Clone)]
pub struct FeedbackClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl FeedbackClient {
    pub fn new(config: ClientConfig) -> Result<Self, FeedbackError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FeedbackError::Transport(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Probe `GET /api/health`. A 200 with any JSON body signals
    /// availability; any other status, a timeout, or a network failure
    /// signals unavailability. Never errors.
    pub async fn check_health(&self) -> bool {
        let request = self
            .http
            .get(self.url("/api/health"))
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.config.probe_timeout);
        match request.send().await {
            Ok(response) if response.status().is_success() => {
                debug!("scoring service health probe succeeded");
                true
            }
            Ok(response) => {
                warn!(status = %response.status(), "scoring service health probe returned non-success");
                false
            }
            Err(err) => {
                warn!(error = %err, "scoring service health probe failed");
                false
            }
        }
    }

    /// Score a prompt, degrading to the local heuristic on any failure.
    ///
    /// Always returns a fully populated contract. `error` is set only for
    /// actual service failures (non-success status, malformed response);
    /// an unreachable service and transport exceptions fall back silently,
    /// and a length-floor rejection is not a fallback at all.
    pub async fn get_feedback(
        &self,
        scenario: &str,
        difficulty: Difficulty,
        prompt: &str,
    ) -> FeedbackContract {
        let prompt = prompt.trim();
        if prompt.chars().count() < MINIMUM_PROMPT_LENGTH {
            return FeedbackContract::length_floor(scenario);
        }

        if !self.check_health().await {
            warn!("scoring service unavailable, using local heuristic");
            return heuristic::score(scenario, difficulty, prompt);
        }

        match self.dispatch(scenario, difficulty, prompt).await {
            Ok(contract) => contract,
            Err(FeedbackError::Transport(reason)) => {
                warn!(%reason, "scoring request failed in transit, using local heuristic");
                heuristic::score(scenario, difficulty, prompt)
            }
            Err(FeedbackError::ServiceError { status, message }) => {
                warn!(status, %message, "scoring service rejected the request, using local heuristic");
                heuristic::score(scenario, difficulty, prompt).with_error(message)
            }
            Err(FeedbackError::ResponseMalformed(diagnostic)) => {
                warn!(%diagnostic, "scoring response unusable, using local heuristic");
                heuristic::score(scenario, difficulty, prompt).with_error(diagnostic)
            }
            Err(FeedbackError::ServiceUnavailable(reason)) => {
                // Dispatch itself never produces this variant today; kept
                // exhaustive so a future probe refactor can't silently drop it.
                warn!(%reason, "scoring service unavailable, using local heuristic");
                heuristic::score(scenario, difficulty, prompt)
            }
        }
    }

    /// Submit the prompt to `POST /api/analyze` and parse the response.
    async fn dispatch(
        &self,
        scenario: &str,
        difficulty: Difficulty,
        prompt: &str,
    ) -> Result<FeedbackContract, FeedbackError> {
        let body = AnalyzeRequest {
            scenario,
            difficulty: difficulty.as_str(),
            user_prompt: prompt,
            api_key: self.config.api_key.as_deref(),
        };
        debug!(
            difficulty = %difficulty,
            has_api_key = self.config.api_key.is_some(),
            "dispatching scoring request"
        );

        let response = self
            .http
            .post(self.url("/api/analyze"))
            .timeout(self.config.analyze_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| FeedbackError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Prefer the body's own error field; fall back to a
            // status-derived message when the body isn't the expected
            // envelope (or isn't JSON at all).
            let message = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(envelope) => envelope
                    .error
                    .unwrap_or_else(|| format!("API returned status: {}", status.as_u16())),
                Err(_) => format!("API error: {status}"),
            };
            return Err(FeedbackError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FeedbackError::Transport(e.to_string()))?;
        let contract: FeedbackContract = serde_json::from_str(&text).map_err(|_| {
            FeedbackError::ResponseMalformed("Failed to parse API response".to_string())
        })?;
        contract
            .validate_shape()
            .map_err(|problem| FeedbackError::ResponseMalformed(format!(
                "API response failed validation: {problem}"
            )))?;
        Ok(contract)
    }

    /// Check whether `api_key` is accepted by the scoring service, using a
    /// canned submission. Does not consult or modify the configured key.
    pub async fn validate_api_key(&self, api_key: &str) -> KeyValidation {
        if api_key.trim().is_empty() {
            return KeyValidation::Rejected("No API key provided".to_string());
        }

        let body = AnalyzeRequest {
            scenario: "API key validation",
            difficulty: Difficulty::Beginner.as_str(),
            user_prompt: "This is a validation test for the API key.",
            api_key: Some(api_key),
        };

        let response = match self
            .http
            .post(self.url("/api/analyze"))
            .timeout(self.config.analyze_timeout)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return KeyValidation::Failed(format!("Connection error: {err}")),
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| format!("API error: {status}"));
            return match ErrorCategory::categorize(&message) {
                ErrorCategory::ApiKey => KeyValidation::Rejected(message),
                _ => KeyValidation::Failed(message),
            };
        }

        match serde_json::from_str::<FeedbackContract>(&text) {
            Ok(contract) if contract.is_fallback => KeyValidation::Inconclusive,
            Ok(_) => KeyValidation::Valid,
            Err(_) => KeyValidation::Failed("Unexpected response format".to_string()),
        }
    }
}
