//! Single-slot admission gate in front of the AI service.
//!
//! At most one question is forwarded at any instant. A second question that
//! arrives while the slot is held is rejected with [`AskError::Busy`] instead
//! of waiting. The slot is a one-permit semaphore; the permit travels with the
//! forwarding task and is released when that task ends, whatever the outcome.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::upstream::{Answer, Upstream, UpstreamError};

// ============================================================================
// Errors
// ============================================================================

/// Caller-visible outcome of a rejected or failed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AskError {
    /// Question missing or empty. Rejected before admission.
    #[error("Question is required")]
    InvalidInput,

    /// Another question is in flight.
    #[error("System is busy. Please try again later.")]
    Busy,

    /// The upstream call failed. Details are logged, not returned.
    #[error("Failed to get answer from AI service.")]
    UpstreamFailure,
}

// ============================================================================
// Question
// ============================================================================

/// A non-empty question, forwarded exactly as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn parse(raw: Option<String>) -> Result<Self, AskError> {
        match raw {
            Some(text) if !text.is_empty() => Ok(Self(text)),
            _ => Err(AskError::InvalidInput),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// AdmissionGate
// ============================================================================

/// Shared handle to the gate. Clones share the same slot.
#[derive(Clone)]
pub struct AdmissionGate {
    slot: Arc<Semaphore>,
    upstream: Arc<dyn Upstream>,
}

impl AdmissionGate {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self {
            slot: Arc::new(Semaphore::new(1)),
            upstream,
        }
    }

    /// Returns `true` while a question is in flight.
    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }

    /// Validate, admit and forward a question.
    ///
    /// Once admitted the upstream call always runs to completion, even if the
    /// returned future is dropped. The slot stays held until then.
    pub async fn handle(&self, question: Option<String>) -> Result<Answer, AskError> {
        let question = Question::parse(question)?;

        let Ok(permit) = Arc::clone(&self.slot).try_acquire_owned() else {
            debug!("Question rejected, gate busy");
            return Err(AskError::Busy);
        };

        let request_id = Ulid::new();
        info!(request_id = %request_id, "Question admitted");

        let upstream = Arc::clone(&self.upstream);
        let task = tokio::spawn(async move {
            let _permit = permit;
            upstream.ask(question.as_str()).await
        });

        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(UpstreamError::Panicked(e.to_string())),
        };

        match result {
            Ok(answer) => {
                info!(request_id = %request_id, "Question answered");
                Ok(answer)
            }
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Error calling AI service");
                Err(AskError::UpstreamFailure)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
