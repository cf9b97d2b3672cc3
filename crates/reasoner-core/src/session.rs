//! Reasoning Session
//!
//! Mutable state for one reasoning task: phase, step counter, active
//! strategy set, accumulated trace, and the retained final result. One
//! session per task at a time; sessions are never shared across tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analyzer::TraceRecord;
use crate::strategy::StrategySet;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phase of the reasoning sub-machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Soliciting structured thinking from the generation service
    Reasoning,
    /// Reasoning complete; waiting for a go-ahead from the caller
    AwaitingConfirmation,
    /// Go-ahead received; terminal until the next explicit task reset
    Completed,
}

/// State for one reasoning task
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReasoningSession {
    /// Unique identifier
    pub id: SessionId,

    phase: Phase,
    step: usize,
    active: StrategySet,
    trace: Vec<TraceRecord>,
    last_result: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp
    pub updated_at: DateTime<Utc>,
}

impl ReasoningSession {
    /// Create a fresh session for the given active strategy set
    pub fn new(active: StrategySet) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            phase: Phase::Reasoning,
            step: 0,
            active,
            trace: Vec::new(),
            last_result: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reset for a new task
    ///
    /// Clears the trace and step counter and returns to the reasoning
    /// phase. Only an explicit caller signal triggers this; the session
    /// never resets itself mid-task.
    pub fn begin_task(&mut self, active: StrategySet) {
        self.active = active;
        self.phase = Phase::Reasoning;
        self.step = 0;
        self.trace.clear();
        self.last_result = None;
        self.touch();
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current step counter
    pub fn step(&self) -> usize {
        self.step
    }

    /// Active strategy set
    pub fn active(&self) -> &StrategySet {
        &self.active
    }

    /// Accumulated trace, one record per reasoning step
    pub fn trace(&self) -> &[TraceRecord] {
        &self.trace
    }

    /// Final reasoning response, retained once the phase completes
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Increment the step counter for a new reasoning invocation
    pub(crate) fn advance_step(&mut self) -> usize {
        self.step += 1;
        self.touch();
        self.step
    }

    /// Append the trace record produced for the current step
    pub(crate) fn record(&mut self, record: TraceRecord) {
        self.trace.push(record);
    }

    /// Leave the reasoning phase, retaining the final response
    pub(crate) fn complete_reasoning(&mut self, result: String) {
        self.last_result = Some(result);
        self.phase = Phase::AwaitingConfirmation;
        self.touch();
    }

    /// Mark the go-ahead as received
    pub(crate) fn confirm(&mut self) {
        self.phase = Phase::Completed;
        self.touch();
    }

    /// Update the activity timestamp
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
