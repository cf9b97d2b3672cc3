//! # reasoner-runtime
//!
//! Generation-service providers for the reasoning controller.
//!
//! ## Providers
//!
//! - **Ollama** (default): Local LLM inference via Ollama
//! - **OpenAI** (coming soon): OpenAI API integration
//! - **Anthropic** (coming soon): Claude API integration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reasoner_runtime::OllamaProvider;
//!
//! let provider = OllamaProvider::from_env();
//! let controller = ControllerBuilder::new()
//!     .provider(Arc::new(provider))
//!     .build()?;
//! ```

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(feature = "ollama")]
pub use ollama::OllamaProvider;

// Re-export core types for convenience
pub use reasoner_core::{
    Conversation, ControllerBuilder, LlmProvider, Message, ReasonerError, ReasoningController,
    Result, Role, StepOutcome, Strategy,
};
