//! Wire types for the feedback API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag sent with every submission from the negative feedback form
pub const FEEDBACK_TYPE_SAD: &str = "sad";

/// JSON body of `POST /api/feedback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub message: String,
    pub rating: u8,
    pub feedback_type: String,
}

/// Accepted submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackAck {
    /// Optional message echoed back by the server
    pub message: Option<String>,
}

/// Response envelope shared by success and error responses.
///
/// Fields are read one by one so a single mistyped field does not hide
/// the rest of the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ResponseEnvelope {
    pub success: bool,
    pub message: Option<String>,
    pub retry_after: Option<u64>,
}

impl ResponseEnvelope {
    /// Read the envelope from a response body; `None` unless it is a JSON object
    pub fn from_body(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let fields = value.as_object()?;

        Some(Self {
            success: fields.get("success").and_then(Value::as_bool).unwrap_or(false),
            message: fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            retry_after: fields.get("retryAfter").and_then(seconds),
        })
    }

    /// Message from the body, ignoring blank strings
    pub fn message(&self) -> Option<String> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

/// Whole seconds from an integer, float or numeric string, rounded up
fn seconds(value: &Value) -> Option<u64> {
    if let Some(secs) = value.as_u64() {
        return Some(secs);
    }
    let secs = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (secs.is_finite() && secs >= 0.0).then(|| secs.ceil() as u64)
}
