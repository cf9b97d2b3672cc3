//! Response Analyzer
//!
//! Inspects one generated response for structural markers, records a
//! trace entry, and decides reasoning-complete status. Detection is
//! marker-presence only: plain case-insensitive substring search for
//! opening and closing markers, with no parsing and no validation of
//! nesting or ordering. Absence of structure is an expected outcome,
//! never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::strategy::{Strategy, StrategySet};

/// Structural components checked in every response
pub const STANDARD_COMPONENTS: [&str; 5] =
    ["question", "process", "alternatives", "evaluation", "conclusion"];

/// Per-step audit entry capturing which strategies and components were
/// detected in the response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Reasoning step this record belongs to
    pub step: usize,

    /// Strategies whose marker appeared in the response
    pub strategies_used: Vec<Strategy>,

    /// Component name -> marker-pair presence. Components tied to inactive
    /// strategies are omitted entirely, not recorded as false.
    pub components: BTreeMap<String, bool>,

    /// Count of present standard components
    pub depth: usize,
}

/// Check for an exact `<name>`...`</name>` marker pair
///
/// `lower` must already be ASCII-lowercased.
fn has_marker_pair(lower: &str, name: &str) -> bool {
    lower.contains(&format!("<{name}>")) && lower.contains(&format!("</{name}>"))
}

/// Check for a marker pair whose opening tag may carry attributes,
/// e.g. `<branch id="1">`
fn has_attributed_pair(lower: &str, name: &str) -> bool {
    lower.contains(&format!("<{name}")) && lower.contains(&format!("</{name}>"))
}

/// Analyze the structure of one reasoning response
///
/// Runs once per reasoning step and always succeeds.
pub fn analyze(response: &str, set: &StrategySet, step: usize) -> TraceRecord {
    let lower = response.to_ascii_lowercase();

    // Strategy markers, plus the dedicated primary-strategy marker used by
    // multi-strategy sessions.
    let mut strategies_used: Vec<Strategy> = Vec::new();
    for strategy in Strategy::ALL {
        let id = strategy.as_str();
        let tagged = lower.contains(&format!("<strategy>{id}</strategy>"));
        let primary_tagged = lower.contains("<primary_strategy>")
            && lower.contains(&format!("<primary_strategy>{id}</primary_strategy>"));

        if (tagged || primary_tagged) && !strategies_used.contains(&strategy) {
            strategies_used.push(strategy);
        }
    }

    let mut components = BTreeMap::new();
    for name in STANDARD_COMPONENTS {
        components.insert(name.to_string(), has_marker_pair(&lower, name));
    }
    let depth = components.values().filter(|present| **present).count();

    // Conditional components only exist for sessions where the relevant
    // strategy is active.
    if set.contains(Strategy::TreeOfThought) {
        components.insert("branch".into(), has_attributed_pair(&lower, "branch"));
        components.insert(
            "branch_selection".into(),
            has_marker_pair(&lower, "branch_selection"),
        );
    }
    if set.contains(Strategy::Counterfactual) {
        components.insert(
            "counterfactual".into(),
            has_attributed_pair(&lower, "counterfactual"),
        );
    }
    if set.contains(Strategy::Socratic) {
        components.insert("inquiry".into(), has_marker_pair(&lower, "inquiry"));
    }

    tracing::debug!(
        step,
        depth,
        strategies = %strategies_used
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        "reasoning analysis"
    );

    TraceRecord {
        step,
        strategies_used,
        components,
        depth,
    }
}

/// Decide whether the reasoning phase should be considered complete
pub fn is_complete(
    response: &str,
    step: usize,
    set: &StrategySet,
    max_steps: usize,
    max_reasoning_depth: usize,
) -> bool {
    // Hard ceiling, regardless of marker content.
    if step >= max_steps {
        return true;
    }

    let lower = response.to_ascii_lowercase();
    let has_conclusion = has_marker_pair(&lower, "conclusion");

    // Tree exploration is bounded by its own, smaller depth limit.
    if set.contains(Strategy::TreeOfThought) && step >= max_reasoning_depth {
        return has_conclusion;
    }

    // A single well-formed chain-of-thought answer suffices.
    if set.is_single() && set.primary() == Strategy::ChainOfThought {
        return has_conclusion;
    }

    // Other strategy mixes require at least two rounds.
    has_conclusion && step >= 2
}

/// Extract the conclusion text from a final response
///
/// Locates the first `<conclusion>` marker and the first `</conclusion>`
/// marker after it on an ASCII-lowercased copy, then takes the enclosed
/// substring from the original-cased text. Returns `None` when the
/// markers are missing or mis-ordered.
pub fn extract_conclusion(text: &str) -> Option<String> {
    const OPEN: &str = "<conclusion>";
    const CLOSE: &str = "</conclusion>";

    let lower = text.to_ascii_lowercase();
    let start = lower.find(OPEN)? + OPEN.len();
    let end = start + lower[start..].find(CLOSE)?;

    Some(text[start..end].trim().to_string())
}
