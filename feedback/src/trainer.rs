//! The presentation boundary.
//!
//! Front ends consume exactly two operations: draw a scenario, score a
//! prompt. Everything else in this crate is plumbing behind them.

use crate::client::FeedbackClient;
use crate::config::ClientConfig;
use crate::contract::FeedbackContract;
use crate::error::FeedbackError;
use crate::scenario::{Difficulty, ScenarioProvider};

/// Facade bundling scenario selection and the scoring pipeline.
#[derive(Debug, Clone)]
pub struct PromptTrainer {
    provider: ScenarioProvider,
    client: FeedbackClient,
}

impl PromptTrainer {
    pub fn new(config: ClientConfig) -> Result<Self, FeedbackError> {
        Ok(Self {
            provider: ScenarioProvider::new(),
            client: FeedbackClient::new(config)?,
        })
    }

    /// Draw a fresh scenario for the tier.
    pub fn request_scenario(&self, tier: Difficulty) -> &'static str {
        self.provider.next(tier)
    }

    /// Score a prompt, remote if possible, heuristic otherwise.
    pub async fn request_feedback(
        &self,
        scenario: &str,
        tier: Difficulty,
        prompt: &str,
    ) -> FeedbackContract {
        self.client.get_feedback(scenario, tier, prompt).await
    }

    /// The underlying scoring client, for health checks and key validation.
    pub fn client(&self) -> &FeedbackClient {
        &self.client
    }
}
