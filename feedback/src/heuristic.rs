//! Local structural scoring of a prompt.
//!
//! Used as the substitute whenever the remote scoring service is
//! unavailable or errors, so every result it produces carries
//! `is_fallback = true`. The scoring is purely structural (word count,
//! instruction keywords, context length, line breaks) with no I/O and no
//! randomness: identical inputs always yield identical output.

use crate::contract::{self, FeedbackContract, MINIMUM_PROMPT_LENGTH};
use crate::scenario::Difficulty;

/// Keywords whose presence (case-insensitive) counts as giving the AI
/// specific instructions.
const INSTRUCTION_KEYWORDS: [&str; 6] =
    ["step", "format", "structure", "include", "specific", "detail"];

/// Word-count floor below which a prompt scores in the lowest band.
const SPARSE_WORD_COUNT: usize = 15;

/// Word count above which a prompt counts as detailed.
const DETAILED_WORD_COUNT: usize = 30;

/// Structural signals derived from a prompt, relative to its scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PromptSignals {
    word_count: usize,
    has_specific_instructions: bool,
    has_context: bool,
    is_detailed: bool,
    has_line_breaks: bool,
}

impl PromptSignals {
    fn derive(scenario: &str, prompt: &str) -> Self {
        let lowered = prompt.to_lowercase();
        let word_count = prompt.split_whitespace().count();
        Self {
            word_count,
            has_specific_instructions: INSTRUCTION_KEYWORDS
                .iter()
                .any(|kw| lowered.contains(kw)),
            // "Context" means the prompt goes meaningfully beyond restating
            // the scenario text.
            has_context: prompt.chars().count() > scenario.chars().count() + 20,
            is_detailed: word_count > DETAILED_WORD_COUNT,
            has_line_breaks: prompt.contains('\n'),
        }
    }
}

/// Compute a structural quality estimate of `prompt` for `scenario`.
///
/// Prompts below the length floor get the shared length-floor contract
/// (a validation rejection, not a fallback). Everything else is scored by
/// the tier-sensitive table: higher tiers are held to a stricter bar for
/// the same signal strength.
pub fn score(scenario: &str, difficulty: Difficulty, prompt: &str) -> FeedbackContract {
    let prompt = prompt.trim();
    if prompt.chars().count() < MINIMUM_PROMPT_LENGTH {
        return FeedbackContract::length_floor(scenario);
    }

    let signals = PromptSignals::derive(scenario, prompt);

    let overall_score = match difficulty {
        _ if signals.word_count < SPARSE_WORD_COUNT => match difficulty {
            Difficulty::Beginner => 3,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 1,
        },
        _ if signals.has_specific_instructions && signals.is_detailed => match difficulty {
            Difficulty::Beginner => 8,
            Difficulty::Intermediate => 7,
            Difficulty::Advanced => 6,
        },
        Difficulty::Beginner => 5,
        Difficulty::Intermediate => 4,
        Difficulty::Advanced => 3,
    };

    let skill_ratings = contract::skill_ratings([
        if signals.has_specific_instructions { 7 } else { 4 }, // Clarity
        if signals.is_detailed { 6 } else { 3 },               // Specificity
        if signals.has_line_breaks { 7 } else { 4 },           // Structure
        if signals.has_context { 6 } else { 3 },               // Context
        6, // Grammar & Syntax: no local grammar analysis is attempted
    ]);

    FeedbackContract {
        overall_score,
        detailed_feedback: narrate(scenario, difficulty, &signals),
        skill_ratings,
        improvement_tips: vec![
            "Add more specific instructions about the format you want".to_string(),
            "Include more context about the purpose of this request".to_string(),
            "Break down complex requests into bullet points or numbered steps".to_string(),
            "Specify any constraints or limitations".to_string(),
            "Consider what might be misunderstood and clarify those points".to_string(),
        ],
        example_prompts: contract::example_prompts(scenario),
        is_fallback: true,
        error: None,
    }
}

fn narrate(scenario: &str, difficulty: Difficulty, signals: &PromptSignals) -> String {
    let instruction_note = if signals.has_specific_instructions {
        "It includes some specific instructions, which is good."
    } else {
        "It lacks specific instructions."
    };
    let detail_note = if signals.is_detailed {
        "It has good detail."
    } else {
        "It needs more detail."
    };
    let recommendation = match difficulty {
        Difficulty::Beginner => "clear and simple instructions",
        Difficulty::Intermediate => "specific instructions with clear goals and format requirements",
        Difficulty::Advanced => "very detailed instructions with clear structure and constraints",
    };
    format!(
        "This is a locally computed analysis (the scoring service was not used). \
         Your prompt for the \"{scenario}\" scenario has {} words. \
         {instruction_note} {detail_note} For {difficulty} level prompts, we \
         recommend {recommendation}.",
        signals.word_count
    )
}
