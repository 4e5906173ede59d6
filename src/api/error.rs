//! Submission failures and their user-facing messages

use super::types::{FeedbackAck, ResponseEnvelope};
use reqwest::StatusCode;

/// Seconds to wait when a 429 response carries no `retryAfter`
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const BAD_REQUEST_FALLBACK: &str = "Please check your input and try again.";
const SUBMIT_FAILED_FALLBACK: &str = "Failed to submit feedback. Please try again later.";
const UNKNOWN_FALLBACK: &str = "Something went wrong. Please try again later.";

/// Why a submission did not go through.
///
/// `Display` is the text shown in the form's error banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Too many requests. Please wait {retry_after} seconds and try again.")]
    RateLimited { retry_after: u64 },

    #[error("{}", .message.as_deref().unwrap_or(BAD_REQUEST_FALLBACK))]
    BadRequest { message: Option<String> },

    #[error("Server error. Please try again later.")]
    Server,

    #[error("{}", .message.as_deref().unwrap_or(SUBMIT_FAILED_FALLBACK))]
    Status { status: u16, message: Option<String> },

    /// No response was received (connect failure or timeout)
    #[error("Network error. Please check your internet connection and try again.")]
    Network,

    #[error("{}", .message.as_deref().unwrap_or(UNKNOWN_FALLBACK))]
    Unknown { message: Option<String> },
}

impl SubmitError {
    /// HTTP status behind the failure, if a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::BadRequest { .. } => Some(400),
            Self::Server => Some(500),
            Self::Status { status, .. } => Some(*status),
            Self::Network | Self::Unknown { .. } => None,
        }
    }
}

/// Map a received response onto the success envelope or a [`SubmitError`]
pub(crate) fn classify_response(
    status: StatusCode,
    body: &str,
) -> Result<FeedbackAck, SubmitError> {
    let envelope = ResponseEnvelope::from_body(body);

    if status.is_success() {
        return match envelope {
            Some(env) if env.success => Ok(FeedbackAck {
                message: env.message(),
            }),
            Some(env) => Err(SubmitError::Unknown {
                message: env.message(),
            }),
            None => Err(SubmitError::Unknown { message: None }),
        };
    }

    let envelope = envelope.unwrap_or_default();
    let error = match status {
        StatusCode::TOO_MANY_REQUESTS => SubmitError::RateLimited {
            retry_after: envelope.retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        StatusCode::BAD_REQUEST => SubmitError::BadRequest {
            message: envelope.message(),
        },
        StatusCode::INTERNAL_SERVER_ERROR => SubmitError::Server,
        other => SubmitError::Status {
            status: other.as_u16(),
            message: envelope.message(),
        },
    };
    Err(error)
}
