//! Text rendering of feedback contracts.

use std::fmt::Write;

use feedback::{ErrorCategory, FeedbackContract, MAX_SCORE};

/// Render a contract as terminal-friendly text.
pub fn render_feedback(contract: &FeedbackContract) -> String {
    let mut out = String::new();

    if let Some(banner) = fallback_banner(contract) {
        out.push_str(&banner);
        out.push('\n');
    }

    let _ = writeln!(out, "Overall score: {}/{MAX_SCORE}", contract.overall_score);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", contract.detailed_feedback);
    let _ = writeln!(out);

    let _ = writeln!(out, "Skill ratings:");
    for rating in &contract.skill_ratings {
        let filled = usize::from(rating.score.min(MAX_SCORE));
        let _ = writeln!(
            out,
            "  {:<16} {}{} {:>2}/{MAX_SCORE}",
            rating.name,
            "#".repeat(filled),
            "-".repeat(usize::from(MAX_SCORE) - filled),
            rating.score
        );
    }

    if !contract.improvement_tips.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Improvement tips:");
        for (idx, tip) in contract.improvement_tips.iter().enumerate() {
            let _ = writeln!(out, "  {}. {tip}", idx + 1);
        }
    }

    for (idx, example) in contract.example_prompts.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Example prompt {}:", idx + 1);
        for line in example.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    out
}

/// Banner shown above fallback results. Silent fallbacks (service simply
/// unavailable) get a one-line notice; failures with a diagnostic get the
/// categorized headline and guidance.
fn fallback_banner(contract: &FeedbackContract) -> Option<String> {
    if !contract.is_fallback {
        return None;
    }
    let mut banner = String::new();
    match contract.error.as_deref() {
        Some(error) => {
            let category = ErrorCategory::categorize(error);
            let _ = writeln!(banner, "! {}", category.headline());
            let _ = writeln!(banner, "  {}", category.guidance());
            let _ = writeln!(banner, "  ({error})");
            if category.key_reconfiguration_helps() {
                let _ = writeln!(banner, "  Run `prompt-trainer set-key <key>` to update the key.");
            }
        }
        None => {
            let _ = writeln!(
                banner,
                "! Scoring service unavailable; this is a local analysis."
            );
        }
    }
    Some(banner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback::{heuristic, Difficulty};

    const SCENARIO: &str = "Write a short blog post about time management tips.";

    #[test]
    fn test_render_includes_all_sections() {
        let contract = heuristic::score(
            SCENARIO,
            Difficulty::Beginner,
            "Write a post with specific steps and a clear structure for busy people.",
        );
        let text = render_feedback(&contract);
        assert!(text.contains("Overall score:"));
        assert!(text.contains("Skill ratings:"));
        assert!(text.contains("Clarity"));
        assert!(text.contains("Grammar & Syntax"));
        assert!(text.contains("Improvement tips:"));
        assert!(text.contains("Example prompt 1:"));
        assert!(text.contains("Example prompt 2:"));
    }

    #[test]
    fn test_silent_fallback_gets_offline_notice() {
        let contract = heuristic::score(SCENARIO, Difficulty::Beginner, "A long enough prompt.");
        let text = render_feedback(&contract);
        assert!(text.contains("local analysis"));
        assert!(!text.contains("set-key"));
    }

    #[test]
    fn test_error_fallback_gets_categorized_banner() {
        let contract = heuristic::score(SCENARIO, Difficulty::Beginner, "A long enough prompt.")
            .with_error("quota exceeded");
        let text = render_feedback(&contract);
        assert!(text.contains("rate limit"));
        assert!(text.contains("quota exceeded"));
        assert!(!text.contains("set-key"), "rate limits aren't a key problem");
    }

    #[test]
    fn test_key_error_suggests_set_key() {
        let contract = heuristic::score(SCENARIO, Difficulty::Beginner, "A long enough prompt.")
            .with_error("API key is invalid");
        let text = render_feedback(&contract);
        assert!(text.contains("set-key"));
    }

    #[test]
    fn test_floor_contract_renders_without_banner() {
        let contract = feedback::FeedbackContract::length_floor(SCENARIO);
        let text = render_feedback(&contract);
        assert!(text.starts_with("Overall score: 0/10"));
        assert!(!text.contains('!'));
    }

    #[test]
    fn test_bars_are_fixed_width() {
        let contract = heuristic::score(
            SCENARIO,
            Difficulty::Beginner,
            "Write a post with specific steps and a clear structure for busy people.",
        );
        let text = render_feedback(&contract);
        for line in text.lines().filter(|l| l.contains('#') || l.contains("--")) {
            let bar: String = line.chars().filter(|&c| c == '#' || c == '-').collect();
            if !bar.is_empty() {
                assert_eq!(bar.len(), 10, "bar must be 10 cells: {line}");
            }
        }
    }
}
