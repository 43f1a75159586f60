//! Scoring and degradation pipeline for the prompt-writing trainer.
//!
//! This library presents a writing scenario, accepts a user-authored
//! prompt aimed at an AI assistant, and returns a scored critique of that
//! prompt. The remote scoring service is treated as an opaque capability:
//! when it is unreachable, misconfigured, or returns malformed data, a
//! deterministic local heuristic produces the critique instead, and every
//! code path (remote, heuristic, or validation rejection) yields the
//! same fully populated [`FeedbackContract`].
//!
//! The two operations front ends consume are
//! [`PromptTrainer::request_scenario`] and
//! [`PromptTrainer::request_feedback`].

pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod heuristic;
pub mod scenario;
pub mod session;
pub mod trainer;

pub use client::{FeedbackClient, KeyValidation};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use contract::{FeedbackContract, SkillRating, MAX_SCORE, MINIMUM_PROMPT_LENGTH, SKILL_NAMES};
pub use error::{ErrorCategory, FeedbackError};
pub use scenario::{Difficulty, ScenarioProvider};
pub use session::{
    clear_session_state, load_session_state, save_session_state, SessionError, SessionState,
};
pub use trainer::PromptTrainer;
