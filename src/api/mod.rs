//! Feedback API module for HTTP communication

mod client;
mod error;
mod traits;
mod types;

pub use client::FeedbackClient;
pub use error::SubmitError;
pub use traits::FeedbackApi;
pub use types::{FeedbackAck, FeedbackPayload, FEEDBACK_TYPE_SAD};

#[cfg(test)]
pub use traits::MockFeedbackApi;
