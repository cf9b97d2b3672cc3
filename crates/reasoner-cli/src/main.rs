//! Interactive reasoning session CLI
//!
//! Lets the user pick a primary strategy and optional fallbacks, then
//! drives the reasoning controller against a local Ollama instance until
//! it hands off to the action phase.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reasoner_core::{
    ControllerBuilder, Conversation, LlmProvider, Message, Phase, Role, StepOutcome, Strategy,
};
use reasoner_runtime::OllamaProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize LLM provider
    let provider = Arc::new(OllamaProvider::from_env());

    // Verify Ollama connection
    match provider.health_check().await {
        Ok(true) => {
            tracing::info!("✓ Connected to Ollama");
            if let Ok(models) = provider.list_models().await {
                for model in models {
                    tracing::info!("  Model: {}", model.id);
                }
            }
        }
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ Ollama not available - generation calls will fail");
            tracing::warn!("  Make sure Ollama is running: ollama serve");
        }
    }

    let model = std::env::var("REASONER_MODEL").unwrap_or_else(|_| "llama3.2".into());

    let primary = select_primary()?;
    let fallbacks = select_fallbacks()?;

    let mut controller = ControllerBuilder::new()
        .provider(provider)
        .primary_strategy(primary)
        .fallback_strategies(fallbacks)
        .max_steps(6)
        .model(model)
        .build()?;

    let question = prompt("\nEnter your question/task: ")?;
    let question = if question.is_empty() {
        "What are the ethical implications of artificial general intelligence?".to_string()
    } else {
        question
    };

    let mut conversation = Conversation::with_user_input(question);
    let mut printed = 0;

    loop {
        match controller.step(&mut conversation).await? {
            StepOutcome::ProceedToAct => break,
            StepOutcome::NoAction => {
                print_new_replies(&conversation, &mut printed);

                if controller.session().phase() == Phase::AwaitingConfirmation {
                    let reply = prompt("> ")?;
                    conversation.push(Message::user(reply));
                }
            }
        }
    }

    println!("\n{}", controller.action_context());

    Ok(())
}

/// Numbered strategy menu, defaulting to chain-of-thought
fn select_primary() -> anyhow::Result<Strategy> {
    println!("Available reasoning strategies:");
    for (i, strategy) in Strategy::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, strategy.display_name());
    }

    let input = prompt("\nSelect primary strategy (1-7) [default=1]: ")?;
    let index = input.parse::<usize>().unwrap_or(1).clamp(1, Strategy::ALL.len());

    Ok(Strategy::ALL[index - 1])
}

/// Optional fallback strategies, entered as space-separated menu numbers
fn select_fallbacks() -> anyhow::Result<Vec<Strategy>> {
    let answer = prompt("Add fallback strategies? (y/n) [default=n]: ")?;
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(Vec::new());
    }

    let input = prompt("Enter fallback strategy numbers separated by space (e.g., '2 5'): ")?;
    let fallbacks = input
        .split_whitespace()
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|n| (1..=Strategy::ALL.len()).contains(n))
        .map(|n| Strategy::ALL[n - 1])
        .collect();

    Ok(fallbacks)
}

/// Print assistant messages appended since the last invocation
fn print_new_replies(conversation: &Conversation, printed: &mut usize) {
    for message in &conversation.messages()[*printed..] {
        if message.role == Role::Assistant {
            println!("\n{}\n", message.content);
        }
    }
    *printed = conversation.len();
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
