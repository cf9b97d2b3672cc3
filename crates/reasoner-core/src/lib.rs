//! # reasoner-core
//!
//! Multi-strategy reasoning controller: a phase-based orchestrator that
//! drives an LLM through a structured "think before you act" protocol.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   ReasoningController                        │
//! │  ┌───────────┐  ┌──────────┐  ┌──────────┐  ┌─────────────┐  │
//! │  │  Catalog  │  │ Guidance │  │ Analyzer │  │ LlmProvider │  │
//! │  │ + Prompts │──│  (pure)  │──│  (pure)  │──│ (Strategy)  │  │
//! │  └───────────┘  └──────────┘  └──────────┘  └─────────────┘  │
//! │                  ReasoningSession (state)                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller owns the only mutable handle (the session); prompt
//! composition, step guidance, and response analysis are pure functions.
//! The `LlmProvider` trait enables swapping between Ollama, OpenAI,
//! Anthropic, or any other backend without changing controller logic.

pub mod analyzer;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod guidance;
pub mod message;
pub mod prompts;
pub mod provider;
pub mod session;
pub mod strategy;

pub use analyzer::TraceRecord;
pub use controller::{ControllerBuilder, ReasoningController, StepOutcome};
pub use error::{ReasonerError, Result};
pub use message::{Conversation, Message, Role};
pub use provider::{GenerationOptions, LlmProvider};
pub use session::{Phase, ReasoningSession};
pub use strategy::{ReasonerConfig, Strategy, StrategySet};
