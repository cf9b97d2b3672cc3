//! Reasoning Strategies
//!
//! The closed set of supported reasoning strategies, the per-session
//! active set, and the construction-time configuration surface.

use serde::{Deserialize, Serialize};

use crate::error::ReasonerError;

/// A named reasoning style with its own structural template
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Step-by-step reasoning with explicit logical links
    ChainOfThought,
    /// Branch exploration with pruning and selection
    TreeOfThought,
    /// Probing-question based inquiry
    Socratic,
    /// Decomposition to fundamental truths
    FirstPrinciples,
    /// Insight transfer from analogous situations
    Analogical,
    /// "What if" exploration of altered assumptions
    Counterfactual,
    /// Higher-level reframing before diving into detail
    StepBack,
}

impl Strategy {
    /// Every supported strategy, in menu order
    pub const ALL: [Strategy; 7] = [
        Strategy::ChainOfThought,
        Strategy::TreeOfThought,
        Strategy::Socratic,
        Strategy::FirstPrinciples,
        Strategy::Analogical,
        Strategy::Counterfactual,
        Strategy::StepBack,
    ];

    /// Stable wire identifier, used in prompt templates and markers
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::ChainOfThought => "chain_of_thought",
            Strategy::TreeOfThought => "tree_of_thought",
            Strategy::Socratic => "socratic",
            Strategy::FirstPrinciples => "first_principles",
            Strategy::Analogical => "analogical",
            Strategy::Counterfactual => "counterfactual",
            Strategy::StepBack => "step_back",
        }
    }

    /// Human-readable title-cased name ("chain_of_thought" -> "Chain Of Thought")
    pub fn display_name(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = ReasonerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| ReasonerError::UnknownStrategy(s.into()))
    }
}

/// The active strategies for one reasoning session
///
/// One distinguished primary strategy plus up to two fallbacks. The
/// primary never also appears among the fallbacks; duplicates are removed
/// on construction before the fallback list is capped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySet {
    primary: Strategy,
    fallbacks: Vec<Strategy>,
}

/// Maximum number of fallback strategies kept after deduplication
const MAX_FALLBACKS: usize = 2;

impl StrategySet {
    /// Build an active set from the caller-supplied ordered fallback list
    pub fn new(primary: Strategy, fallbacks: &[Strategy]) -> Self {
        let mut kept = Vec::new();
        for &strategy in fallbacks {
            if strategy != primary && !kept.contains(&strategy) {
                kept.push(strategy);
            }
        }
        kept.truncate(MAX_FALLBACKS);

        Self {
            primary,
            fallbacks: kept,
        }
    }

    /// The distinguished primary strategy
    pub fn primary(&self) -> Strategy {
        self.primary
    }

    /// Fallback strategies, in caller order
    pub fn fallbacks(&self) -> &[Strategy] {
        &self.fallbacks
    }

    /// Whether a strategy is active in this set
    pub fn contains(&self, strategy: Strategy) -> bool {
        self.primary == strategy || self.fallbacks.contains(&strategy)
    }

    /// Iterate over all active strategies, primary first
    pub fn iter(&self) -> impl Iterator<Item = Strategy> + '_ {
        std::iter::once(self.primary).chain(self.fallbacks.iter().copied())
    }

    /// Number of active strategies
    pub fn len(&self) -> usize {
        1 + self.fallbacks.len()
    }

    /// A set is never empty; this exists for clippy's len/is_empty pairing
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when exactly one strategy is active
    pub fn is_single(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// Construction-time configuration for a reasoning controller
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReasonerConfig {
    /// Primary reasoning strategy
    pub primary_strategy: Strategy,

    /// Ordered fallback strategies (capped to two after deduplication)
    pub fallback_strategies: Vec<Strategy>,

    /// Maximum reasoning steps before completion is forced
    pub max_steps: usize,

    /// Maximum depth for tree-based reasoning
    pub max_reasoning_depth: usize,

    /// Breadth for tree/graph exploration strategies (informational)
    pub exploration_breadth: usize,

    /// Minimum alternative paths to consider (informational)
    pub min_alternatives: usize,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            primary_strategy: Strategy::ChainOfThought,
            fallback_strategies: Vec::new(),
            max_steps: 10,
            max_reasoning_depth: 3,
            exploration_breadth: 2,
            min_alternatives: 2,
        }
    }
}

impl ReasonerConfig {
    /// Resolve the active strategy set for a session
    pub fn active_set(&self) -> StrategySet {
        StrategySet::new(self.primary_strategy, &self.fallback_strategies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Strategy::ChainOfThought.display_name(), "Chain Of Thought");
        assert_eq!(Strategy::Socratic.display_name(), "Socratic");
        assert_eq!(Strategy::StepBack.display_name(), "Step Back");
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "tree_of_thought".parse::<Strategy>().unwrap(),
            Strategy::TreeOfThought
        );
        assert!("galaxy_brain".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_set_removes_primary_from_fallbacks() {
        let set = StrategySet::new(
            Strategy::ChainOfThought,
            &[
                Strategy::ChainOfThought,
                Strategy::Socratic,
                Strategy::TreeOfThought,
            ],
        );

        assert_eq!(set.primary(), Strategy::ChainOfThought);
        assert_eq!(
            set.fallbacks(),
            &[Strategy::Socratic, Strategy::TreeOfThought]
        );
    }

    #[test]
    fn test_set_caps_fallbacks_at_two() {
        let set = StrategySet::new(
            Strategy::ChainOfThought,
            &[
                Strategy::Socratic,
                Strategy::TreeOfThought,
                Strategy::Analogical,
            ],
        );

        assert_eq!(set.len(), 3);
        assert!(!set.contains(Strategy::Analogical));
    }

    #[test]
    fn test_set_deduplicates_fallbacks() {
        let set = StrategySet::new(
            Strategy::StepBack,
            &[
                Strategy::Socratic,
                Strategy::Socratic,
                Strategy::Counterfactual,
            ],
        );

        assert_eq!(
            set.fallbacks(),
            &[Strategy::Socratic, Strategy::Counterfactual]
        );
    }

    #[test]
    fn test_single_set() {
        let set = StrategySet::new(Strategy::Analogical, &[]);
        assert!(set.is_single());
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Strategy::Analogical]);
    }
}
