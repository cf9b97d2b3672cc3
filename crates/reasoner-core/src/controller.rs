//! Reasoning Controller
//!
//! The orchestrating loop around [`ReasoningSession`]: each invocation
//! checks the session phase, composes the strategy prompt, issues exactly
//! one generation call, feeds the response to the analyzer, and returns
//! an action signal to the caller. Provider errors propagate unchanged;
//! malformed generation output never fails, it only reads as incomplete.

use std::sync::Arc;

use crate::analyzer;
use crate::catalog;
use crate::error::{ReasonerError, Result};
use crate::guidance::guidance_for;
use crate::message::{Conversation, Message, Role};
use crate::prompts;
use crate::provider::{GenerationOptions, LlmProvider};
use crate::session::{Phase, ReasoningSession};
use crate::strategy::{ReasonerConfig, Strategy};

/// Signal returned from each controller invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Stay in the reasoning protocol; nothing for the action layer yet
    NoAction,
    /// Hand off to the action phase
    ProceedToAct,
}

/// Affirmative go-ahead tokens checked against the caller's reply
const AFFIRMATIVE_RESPONSES: [&str; 9] = [
    "yes",
    "sure",
    "ok",
    "okay",
    "go ahead",
    "proceed",
    "let's do it",
    "execute",
    "act",
];

/// The main controller struct
pub struct ReasoningController {
    provider: Arc<dyn LlmProvider>,
    config: ReasonerConfig,
    generation: GenerationOptions,
    session: ReasoningSession,
}

impl std::fmt::Debug for ReasoningController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReasoningController")
            .field("config", &self.config)
            .field("generation", &self.generation)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ReasoningController {
    /// Create a new controller with a fresh session
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        config: ReasonerConfig,
        generation: GenerationOptions,
    ) -> Self {
        let session = ReasoningSession::new(config.active_set());
        log_strategies(&session);

        Self {
            provider,
            config,
            generation,
            session,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(provider: Arc<dyn LlmProvider>) -> Self {
        Self::new(provider, ReasonerConfig::default(), GenerationOptions::default())
    }

    /// Reset the session for a new task
    ///
    /// This is the only re-initialization trigger; the controller never
    /// resets itself based on counter state mid-task.
    pub fn begin_task(&mut self) {
        self.session.begin_task(self.config.active_set());
        log_strategies(&self.session);
    }

    /// Run one controller invocation against the conversation
    pub async fn step(&mut self, conversation: &mut Conversation) -> Result<StepOutcome> {
        match self.session.phase() {
            Phase::Reasoning => self.reason(conversation).await,
            Phase::AwaitingConfirmation => Ok(self.check_confirmation(conversation)),
            Phase::Completed => Ok(StepOutcome::ProceedToAct),
        }
    }

    /// One reasoning-phase round: prompt, generate, analyze, transition
    async fn reason(&mut self, conversation: &mut Conversation) -> Result<StepOutcome> {
        let step = self.session.advance_step();
        let system_prompt = catalog::system_prompt_for(self.session.active());

        let step_guidance = guidance_for(step, self.session.active(), self.config.max_steps);
        if !step_guidance.is_empty() {
            // Fold guidance into the pending user input in place so the
            // history does not duplicate the unmodified original.
            let updated = match conversation.last() {
                Some(last) if last.role == Role::User => {
                    if last.content.is_empty() {
                        Some(step_guidance.clone())
                    } else {
                        Some(format!("{}\n\n{}", last.content, step_guidance))
                    }
                }
                _ => None,
            };

            match updated {
                Some(content) => conversation.replace_last_content(content),
                None => conversation.push(Message::user(step_guidance)),
            }
        }

        let completion = self
            .provider
            .complete(
                conversation.messages(),
                &[Message::system(system_prompt)],
                &self.generation,
            )
            .await?;

        let content = completion.content;
        conversation.push(Message::assistant(content.clone()));

        let record = analyzer::analyze(&content, self.session.active(), step);
        self.session.record(record);

        if analyzer::is_complete(
            &content,
            step,
            self.session.active(),
            self.config.max_steps,
            self.config.max_reasoning_depth,
        ) {
            tracing::info!(steps = step, "reasoning phase complete");
            self.session.complete_reasoning(content);
            conversation.push(Message::assistant(prompts::PROCEED_QUESTION));
        }

        Ok(StepOutcome::NoAction)
    }

    /// Check the latest caller reply for a go-ahead
    ///
    /// Runs freshly on every invocation in this phase; "ready to act" is
    /// not stored state.
    fn check_confirmation(&mut self, conversation: &mut Conversation) -> StepOutcome {
        let reply = match conversation.last() {
            Some(last) if last.role == Role::User => last.content.clone(),
            _ => String::new(),
        };

        if is_affirmative(&reply) {
            tracing::info!("proceeding to act based on reasoning");
            self.session.confirm();
            return StepOutcome::ProceedToAct;
        }

        conversation.push(Message::assistant(prompts::CLARIFY_REQUEST));
        StepOutcome::NoAction
    }

    /// Initial context for the action phase
    ///
    /// The conclusion extracted from the retained final response, or the
    /// generic fallback prompt when no conclusion marker is available.
    pub fn action_context(&self) -> String {
        let conclusion = self
            .session
            .last_result()
            .and_then(analyzer::extract_conclusion);
        prompts::action_handoff(conclusion.as_deref())
    }

    /// Get the session state
    pub fn session(&self) -> &ReasoningSession {
        &self.session
    }

    /// Get configuration
    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }
}

fn log_strategies(session: &ReasoningSession) {
    let names = session
        .active()
        .iter()
        .map(Strategy::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(strategies = %names, session = %session.id, "reasoning session initialized");
}

/// Scan caller text for an affirmative go-ahead token
///
/// Tokens match on word boundaries and are discounted when the preceding
/// word negates them, so "not sure" is not a go-ahead while
/// "Yes, let's do it" is.
fn is_affirmative(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    AFFIRMATIVE_RESPONSES
        .iter()
        .any(|token| token_matches(&lower, token))
}

fn token_matches(text: &str, token: &str) -> bool {
    let mut from = 0;
    while let Some(found) = text[from..].find(token) {
        let start = from + found;
        let end = start + token.len();

        let bounded_before = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let bounded_after = text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if bounded_before && bounded_after && !negated(&text[..start]) {
            return true;
        }
        from = end;
    }
    false
}

/// True when the word immediately before the match position negates it
fn negated(prefix: &str) -> bool {
    let last_word = prefix
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|word| !word.is_empty())
        .next_back();
    matches!(
        last_word,
        Some("not" | "no" | "never" | "don't" | "won't" | "can't")
    )
}

/// Builder for controller configuration
pub struct ControllerBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    config: ReasonerConfig,
    generation: GenerationOptions,
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            config: ReasonerConfig::default(),
            generation: GenerationOptions::default(),
        }
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn primary_strategy(mut self, strategy: Strategy) -> Self {
        self.config.primary_strategy = strategy;
        self
    }

    pub fn fallback_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.config.fallback_strategies = strategies;
        self
    }

    pub fn max_steps(mut self, max: usize) -> Self {
        self.config.max_steps = max;
        self
    }

    pub fn max_reasoning_depth(mut self, depth: usize) -> Self {
        self.config.max_reasoning_depth = depth;
        self
    }

    pub fn exploration_breadth(mut self, breadth: usize) -> Self {
        self.config.exploration_breadth = breadth;
        self
    }

    pub fn min_alternatives(mut self, min: usize) -> Self {
        self.config.min_alternatives = min;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.generation.model = model.into();
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.generation.temperature = temp;
        self
    }

    pub fn build(self) -> Result<ReasoningController> {
        let provider = self
            .provider
            .ok_or_else(|| ReasonerError::Config("Provider is required".into()))?;

        Ok(ReasoningController::new(provider, self.config, self.generation))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::provider::{Completion, ModelInfo, ProviderInfo};

    /// Provider that replays a scripted list of responses
    struct ScriptedProvider {
        responses: Mutex<VecDeque<String>>,
        system_prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: Mutex::new(responses.iter().map(|s| (*s).to_string()).collect()),
                system_prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn info(&self) -> Result<ProviderInfo> {
            Ok(ProviderInfo {
                name: "scripted".into(),
                version: None,
                models: Vec::new(),
            })
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            _messages: &[Message],
            system_msgs: &[Message],
            options: &GenerationOptions,
        ) -> Result<Completion> {
            self.system_prompts
                .lock()
                .unwrap()
                .extend(system_msgs.iter().map(|m| m.content.clone()));

            let content = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ReasonerError::Provider("script exhausted".into()))?;

            Ok(Completion {
                content,
                model: options.model.clone(),
                usage: None,
                finish_reason: None,
            })
        }

        async fn list_models(&self) -> Result<Vec<ModelInfo>> {
            Ok(Vec::new())
        }
    }

    fn controller(responses: &[&str], config: ReasonerConfig) -> ReasoningController {
        ReasoningController::new(
            Arc::new(ScriptedProvider::new(responses)),
            config,
            GenerationOptions::default(),
        )
    }

    fn multi_config() -> ReasonerConfig {
        ReasonerConfig {
            primary_strategy: Strategy::ChainOfThought,
            fallback_strategies: vec![Strategy::FirstPrinciples],
            ..ReasonerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_chain_of_thought_completes_on_first_conclusion() {
        let mut controller = controller(
            &["<conclusion>Plant more trees.</conclusion>"],
            ReasonerConfig::default(),
        );
        let mut conversation = Conversation::with_user_input("How to fix the climate?");

        let outcome = controller.step(&mut conversation).await.unwrap();

        assert_eq!(outcome, StepOutcome::NoAction);
        assert_eq!(controller.session().phase(), Phase::AwaitingConfirmation);
        assert_eq!(controller.session().step(), 1);
        assert_eq!(controller.session().trace().len(), 1);

        // user input, assistant response, proceed-to-action question
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.last().unwrap().content, prompts::PROCEED_QUESTION);
    }

    #[tokio::test]
    async fn test_step_and_trace_counters_track_invocations() {
        let mut controller = controller(
            &["no markers", "still thinking", "more thinking"],
            multi_config(),
        );
        let mut conversation = Conversation::with_user_input("Q");

        for expected in 1..=3 {
            let outcome = controller.step(&mut conversation).await.unwrap();
            assert_eq!(outcome, StepOutcome::NoAction);
            assert_eq!(controller.session().step(), expected);
            assert_eq!(controller.session().trace().len(), expected);
        }

        assert_eq!(controller.session().phase(), Phase::Reasoning);
    }

    #[tokio::test]
    async fn test_multi_strategy_needs_a_second_round() {
        let mut controller = controller(
            &[
                "<conclusion>too early</conclusion>",
                "<conclusion>final</conclusion>",
            ],
            multi_config(),
        );
        let mut conversation = Conversation::with_user_input("Q");

        controller.step(&mut conversation).await.unwrap();
        assert_eq!(controller.session().phase(), Phase::Reasoning);

        controller.step(&mut conversation).await.unwrap();
        assert_eq!(controller.session().phase(), Phase::AwaitingConfirmation);
        assert_eq!(
            controller.session().last_result(),
            Some("<conclusion>final</conclusion>")
        );
    }

    #[tokio::test]
    async fn test_guidance_rewrites_pending_user_message_in_place() {
        let config = ReasonerConfig {
            primary_strategy: Strategy::TreeOfThought,
            max_steps: 5,
            ..ReasonerConfig::default()
        };
        let mut controller = controller(&["branch one", "branch two"], config);
        let mut conversation = Conversation::with_user_input("Q");

        controller.step(&mut conversation).await.unwrap();
        conversation.push(Message::user("keep going"));
        controller.step(&mut conversation).await.unwrap();

        let users: Vec<_> = conversation
            .messages()
            .iter()
            .filter(|m| m.role == Role::User)
            .collect();

        assert_eq!(users.len(), 2, "guidance must not duplicate the user input");
        assert!(users[1].content.starts_with("keep going\n\n"));
        assert!(users[1].content.contains("continue exploring the most promising branches"));
    }

    #[tokio::test]
    async fn test_guidance_appended_when_no_pending_user_input() {
        let config = ReasonerConfig {
            primary_strategy: Strategy::TreeOfThought,
            max_steps: 5,
            ..ReasonerConfig::default()
        };
        let mut controller = controller(&["branch one", "branch two"], config);
        let mut conversation = Conversation::with_user_input("Q");

        controller.step(&mut conversation).await.unwrap();
        // No new caller input: step 2 guidance lands as its own message.
        controller.step(&mut conversation).await.unwrap();

        let users: Vec<_> = conversation
            .messages()
            .iter()
            .filter(|m| m.role == Role::User)
            .collect();

        assert_eq!(users.len(), 2);
        assert!(users[1].content.contains("continue exploring the most promising branches"));
    }

    #[tokio::test]
    async fn test_max_steps_forces_completion() {
        let config = ReasonerConfig {
            max_steps: 2,
            ..multi_config()
        };
        let mut controller = controller(&["nothing", "still nothing"], config);
        let mut conversation = Conversation::with_user_input("Q");

        controller.step(&mut conversation).await.unwrap();
        assert_eq!(controller.session().phase(), Phase::Reasoning);

        controller.step(&mut conversation).await.unwrap();
        assert_eq!(controller.session().phase(), Phase::AwaitingConfirmation);
        assert_eq!(controller.session().step(), 2);
    }

    #[tokio::test]
    async fn test_affirmative_reply_hands_off_to_action() {
        let mut controller = controller(
            &["<conclusion>42</conclusion>"],
            ReasonerConfig::default(),
        );
        let mut conversation = Conversation::with_user_input("Q");

        controller.step(&mut conversation).await.unwrap();
        conversation.push(Message::user("Yes, let's do it"));

        let outcome = controller.step(&mut conversation).await.unwrap();
        assert_eq!(outcome, StepOutcome::ProceedToAct);
        assert_eq!(controller.session().phase(), Phase::Completed);

        // Handoff is idempotent once completed.
        let outcome = controller.step(&mut conversation).await.unwrap();
        assert_eq!(outcome, StepOutcome::ProceedToAct);
    }

    #[tokio::test]
    async fn test_unclear_reply_appends_clarification_once() {
        let mut controller = controller(
            &["<conclusion>42</conclusion>"],
            ReasonerConfig::default(),
        );
        let mut conversation = Conversation::with_user_input("Q");

        controller.step(&mut conversation).await.unwrap();
        conversation.push(Message::user("not sure"));

        let outcome = controller.step(&mut conversation).await.unwrap();
        assert_eq!(outcome, StepOutcome::NoAction);
        assert_eq!(controller.session().phase(), Phase::AwaitingConfirmation);

        let clarifications = conversation
            .messages()
            .iter()
            .filter(|m| m.content == prompts::CLARIFY_REQUEST)
            .count();
        assert_eq!(clarifications, 1);
    }

    #[tokio::test]
    async fn test_action_context_carries_extracted_conclusion() {
        let mut controller = controller(
            &["blah <conclusion> 42 </conclusion> more"],
            ReasonerConfig::default(),
        );
        let mut conversation = Conversation::with_user_input("Q");

        controller.step(&mut conversation).await.unwrap();

        let context = controller.action_context();
        assert!(context.contains("42"));
        assert!(context.contains("I will act on the following conclusion"));
    }

    #[tokio::test]
    async fn test_action_context_falls_back_without_conclusion() {
        let config = ReasonerConfig {
            max_steps: 1,
            ..ReasonerConfig::default()
        };
        let mut controller = controller(&["no structure at all"], config);
        let mut conversation = Conversation::with_user_input("Q");

        // Forced completion at the ceiling, marker-free result retained.
        controller.step(&mut conversation).await.unwrap();
        assert_eq!(controller.session().phase(), Phase::AwaitingConfirmation);

        assert!(controller.action_context().starts_with("I'm ready to act"));
    }

    #[tokio::test]
    async fn test_provider_error_propagates_unchanged() {
        let mut controller = controller(&[], ReasonerConfig::default());
        let mut conversation = Conversation::with_user_input("Q");

        let err = controller.step(&mut conversation).await.unwrap_err();
        assert!(matches!(err, ReasonerError::Provider(_)));
    }

    #[tokio::test]
    async fn test_system_prompt_matches_active_set() {
        let provider = Arc::new(ScriptedProvider::new(&["no markers"]));
        let config = multi_config();
        let expected = catalog::system_prompt_for(&config.active_set());

        let mut controller = ReasoningController::new(
            provider.clone(),
            config,
            GenerationOptions::default(),
        );
        let mut conversation = Conversation::with_user_input("Q");
        controller.step(&mut conversation).await.unwrap();

        let prompts_seen = provider.system_prompts.lock().unwrap();
        assert_eq!(prompts_seen.as_slice(), &[expected]);
    }

    #[tokio::test]
    async fn test_begin_task_resets_for_a_new_question() {
        let mut controller = controller(
            &["<conclusion>first task</conclusion>", "fresh start"],
            ReasonerConfig::default(),
        );
        let mut conversation = Conversation::with_user_input("Q1");

        controller.step(&mut conversation).await.unwrap();
        conversation.push(Message::user("yes"));
        controller.step(&mut conversation).await.unwrap();
        assert_eq!(controller.session().phase(), Phase::Completed);

        controller.begin_task();
        assert_eq!(controller.session().phase(), Phase::Reasoning);
        assert_eq!(controller.session().step(), 0);
        assert!(controller.session().trace().is_empty());

        let mut conversation = Conversation::with_user_input("Q2");
        controller.step(&mut conversation).await.unwrap();
        assert_eq!(controller.session().step(), 1);
    }

    #[test]
    fn test_affirmative_token_matching() {
        assert!(is_affirmative("Yes, let's do it"));
        assert!(is_affirmative("OKAY"));
        assert!(is_affirmative("please go ahead"));
        assert!(is_affirmative("sure"));

        assert!(!is_affirmative("not sure"));
        assert!(!is_affirmative("no, don't act"));
        assert!(!is_affirmative("the exact opposite"));
        assert!(!is_affirmative("maybe later"));
    }

    #[test]
    fn test_builder_requires_provider() {
        let err = ControllerBuilder::new().build().unwrap_err();
        assert!(matches!(err, ReasonerError::Config(_)));
    }

    #[tokio::test]
    async fn test_builder_assembles_controller() {
        let controller = ControllerBuilder::new()
            .provider(Arc::new(ScriptedProvider::new(&[])))
            .primary_strategy(Strategy::TreeOfThought)
            .fallback_strategies(vec![Strategy::Socratic])
            .max_steps(6)
            .max_reasoning_depth(2)
            .model("llama3.2")
            .temperature(0.2)
            .build()
            .unwrap();

        assert_eq!(controller.config().max_steps, 6);
        assert_eq!(
            controller.session().active().primary(),
            Strategy::TreeOfThought
        );
    }
}
