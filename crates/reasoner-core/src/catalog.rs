//! Strategy Catalog
//!
//! Maps each strategy to its instruction template and composes the shared
//! multi-strategy combinator. Backed by an exhaustive match over the
//! closed [`Strategy`] enum, so a variant without a template is a compile
//! error rather than an empty prompt at call time.

use crate::prompts;
use crate::strategy::{Strategy, StrategySet};

/// Instruction template for a single strategy
pub fn template_for(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::ChainOfThought => prompts::CHAIN_OF_THOUGHT,
        Strategy::TreeOfThought => prompts::TREE_OF_THOUGHT,
        Strategy::Socratic => prompts::SOCRATIC,
        Strategy::FirstPrinciples => prompts::FIRST_PRINCIPLES,
        Strategy::Analogical => prompts::ANALOGICAL,
        Strategy::Counterfactual => prompts::COUNTERFACTUAL,
        Strategy::StepBack => prompts::STEP_BACK,
    }
}

/// Compose the multi-strategy combinator template
///
/// Substitutes the primary's human-readable name and a comma-joined list
/// of the remaining active strategies.
pub fn compose(primary: Strategy, others: &[Strategy]) -> String {
    let additional = others
        .iter()
        .map(|s| s.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    prompts::MULTI_STRATEGY
        .replace("{primary_strategy}", &primary.display_name())
        .replace("{additional_strategies}", &additional)
}

/// System prompt for a session's active strategy set
///
/// Single-strategy sessions get the dedicated template; multi-strategy
/// sessions share the combinator.
pub fn system_prompt_for(set: &StrategySet) -> String {
    if set.is_single() {
        template_for(set.primary()).into()
    } else {
        compose(set.primary(), set.fallbacks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_strategy_has_a_template() {
        for strategy in Strategy::ALL {
            let template = template_for(strategy);
            assert!(!template.is_empty());
            assert!(
                template.contains(strategy.as_str()),
                "template for {} should name its own strategy",
                strategy
            );
        }
    }

    #[test]
    fn test_compose_substitutes_names() {
        let text = compose(
            Strategy::ChainOfThought,
            &[Strategy::TreeOfThought, Strategy::Counterfactual],
        );

        assert!(text.contains("primarily use Chain Of Thought reasoning"));
        assert!(text.contains("Tree Of Thought, Counterfactual"));
        assert!(text.contains("<primary_strategy>Chain Of Thought</primary_strategy>"));
        assert!(!text.contains("{primary_strategy}"));
        assert!(!text.contains("{additional_strategies}"));
    }

    #[test]
    fn test_system_prompt_picks_template_by_set_size() {
        let single = StrategySet::new(Strategy::Socratic, &[]);
        assert_eq!(system_prompt_for(&single), template_for(Strategy::Socratic));

        let multi = StrategySet::new(Strategy::Socratic, &[Strategy::StepBack]);
        assert!(system_prompt_for(&multi).contains("multiple reasoning strategies"));
    }
}
