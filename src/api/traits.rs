//! Trait abstraction for the feedback API to enable mocking in tests

use super::error::SubmitError;
use super::types::{FeedbackAck, FeedbackPayload};
use async_trait::async_trait;

/// Trait for feedback API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// Submit one feedback payload. Exactly one request per call, no retries.
    async fn submit_feedback(&self, payload: &FeedbackPayload) -> Result<FeedbackAck, SubmitError>;
}
