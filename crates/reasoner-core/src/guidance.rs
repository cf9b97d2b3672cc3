//! Phase Guidance
//!
//! Step-specific supplementary instructions injected alongside the base
//! strategy template. Pure function of (step, active set, step budget).

use crate::strategy::{Strategy, StrategySet};

/// Supplementary guidance for the given reasoning step, possibly empty
///
/// Matching rules are concatenated newline-separated in a fixed order:
/// strategy-specific guidance first, then cross-strategy synthesis, then
/// the finalize instruction, so more specific guidance reads after the
/// general guidance it builds on.
pub fn guidance_for(step: usize, set: &StrategySet, max_steps: usize) -> String {
    // The base template is sufficient for the first step.
    if step == 1 {
        return String::new();
    }

    let mut guidance: Vec<&str> = Vec::new();

    if set.contains(Strategy::TreeOfThought) {
        if step == 2 {
            guidance.push(
                "For this step, continue exploring the most promising branches from your initial reasoning.",
            );
        } else if step == 3 {
            guidance.push(
                "For this step, select the most promising branch and develop it further.",
            );
        }
    }

    if set.contains(Strategy::Socratic) {
        if step == 2 {
            guidance.push(
                "For this step, deepen your inquiry with follow-up questions based on your initial exploration.",
            );
        } else if step == 3 {
            guidance.push(
                "For this step, synthesize insights from your questioning process.",
            );
        }
    }

    if set.len() > 1 && step >= 3 {
        guidance.push(
            "Begin synthesizing insights from the different reasoning strategies you've employed.",
        );
    }

    if step >= usize::max(3, max_steps.saturating_sub(1)) {
        guidance.push(
            "Focus on finalizing your conclusion based on all your reasoning so far.",
        );
    }

    guidance.join("\n")
}
