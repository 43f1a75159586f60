//! The shared result contract every scoring path must produce.
//!
//! Both the remote scoring service and the local heuristic emit the same
//! shape, so the presentation layer never has to care which path ran. The
//! wire format is camelCase JSON matching the `/api/analyze` endpoint.

use serde::{Deserialize, Serialize};

/// Minimum trimmed character count a prompt must meet before any scoring
/// (remote or heuristic) is attempted.
pub const MINIMUM_PROMPT_LENGTH: usize = 15;

/// Highest score for both the overall rating and each skill.
pub const MAX_SCORE: u8 = 10;

/// The five skills every contract rates, in fixed order.
pub const SKILL_NAMES: [&str; 5] = [
    "Clarity",
    "Specificity",
    "Structure",
    "Context",
    "Grammar & Syntax",
];

/// A single skill rated 0–10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    /// Skill name, one of [`SKILL_NAMES`].
    pub name: String,
    /// Score in 0–10.
    pub score: u8,
}

/// Scored critique of a user-authored prompt.
///
/// Every code path returns a fully populated contract; there is no partial
/// result. `is_fallback` tells the presentation layer the remote service did
/// not produce this result, and `error` carries a diagnostic only when an
/// actual failure (not a length-floor rejection) caused the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackContract {
    /// Overall prompt quality, 0–10.
    pub overall_score: u8,
    /// Free-text explanation of the score.
    pub detailed_feedback: String,
    /// Exactly five entries in [`SKILL_NAMES`] order.
    pub skill_ratings: Vec<SkillRating>,
    /// Short actionable suggestions.
    pub improvement_tips: Vec<String>,
    /// Two template prompts referencing the scenario.
    pub example_prompts: Vec<String>,
    /// True when the remote service did not produce this result.
    #[serde(default)]
    pub is_fallback: bool,
    /// Diagnostic set only alongside `is_fallback` when a failure occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FeedbackContract {
    /// The contract returned for prompts below [`MINIMUM_PROMPT_LENGTH`].
    ///
    /// A length-floor rejection is a policy outcome, not a service failure:
    /// `is_fallback` stays false and no `error` is set. Both the client and
    /// the heuristic return this same constructor, so the two paths cannot
    /// drift.
    pub fn length_floor(scenario: &str) -> Self {
        Self {
            overall_score: 0,
            detailed_feedback: format!(
                "Your prompt is too short (less than {MINIMUM_PROMPT_LENGTH} characters). \
                 A good prompt needs to provide enough context and details to guide the AI. \
                 Please expand your prompt with more specific instructions and details."
            ),
            skill_ratings: skill_ratings([0, 0, 0, 0, 0]),
            improvement_tips: vec![
                format!("Make your prompt at least {MINIMUM_PROMPT_LENGTH} characters long"),
                "Include specific details about what you want".to_string(),
                "Provide context about the purpose of your request".to_string(),
                "Specify the format or structure you need".to_string(),
                "Consider mentioning your target audience or tone requirements".to_string(),
            ],
            example_prompts: example_prompts(scenario),
            is_fallback: false,
            error: None,
        }
    }

    /// Attach a fallback diagnostic, forcing the fallback flag on.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.is_fallback = true;
        self.error = Some(error.into());
        self
    }

    /// Validate that a remotely produced contract has the expected shape:
    /// exactly five skill ratings carrying the fixed names in order, and all
    /// scores within 0–10.
    ///
    /// Remote responses used to be trusted verbatim; a malformed one would
    /// leak straight into the UI. Shape mismatches now trigger a fallback.
    pub fn validate_shape(&self) -> Result<(), String> {
        if self.overall_score > MAX_SCORE {
            return Err(format!(
                "overall score {} exceeds {MAX_SCORE}",
                self.overall_score
            ));
        }
        if self.skill_ratings.len() != SKILL_NAMES.len() {
            return Err(format!(
                "expected {} skill ratings, got {}",
                SKILL_NAMES.len(),
                self.skill_ratings.len()
            ));
        }
        for (rating, expected) in self.skill_ratings.iter().zip(SKILL_NAMES) {
            if rating.name != expected {
                return Err(format!(
                    "skill rating '{}' where '{expected}' was expected",
                    rating.name
                ));
            }
            if rating.score > MAX_SCORE {
                return Err(format!(
                    "skill '{}' scored {} (max {MAX_SCORE})",
                    rating.name, rating.score
                ));
            }
        }
        Ok(())
    }
}

/// Build the five ratings from a score array in [`SKILL_NAMES`] order.
pub(crate) fn skill_ratings(scores: [u8; 5]) -> Vec<SkillRating> {
    SKILL_NAMES
        .iter()
        .zip(scores)
        .map(|(name, score)| SkillRating {
            name: (*name).to_string(),
            score,
        })
        .collect()
}

/// The two scenario-templated example prompts shown with every critique.
pub(crate) fn example_prompts(scenario: &str) -> Vec<String> {
    vec![
        format!(
            "For the scenario: \"{scenario}\"\n\n\
             Please help me create a [specific output] with the following sections:\n\
             1. [Section 1]\n2. [Section 2]\n3. [Section 3]\n\n\
             The tone should be [formal/informal/etc.] and the length approximately \
             [length]. The target audience is [audience]."
        ),
        format!(
            "I need assistance with \"{scenario}\". Please include:\n\
             - [Specific element 1]\n- [Specific element 2]\n- [Specific element 3]\n\n\
             Format it as a [document type] and optimize it for [purpose/audience]. \
             Avoid [what to avoid]."
        ),
    ]
}
