//! HTTP client for the remote feedback API
//!
//! Posts one JSON payload per submission and turns the response into a
//! [`FeedbackAck`] or a classified [`SubmitError`].

use super::error::{classify_response, SubmitError};
use super::traits::FeedbackApi;
use super::types::{FeedbackAck, FeedbackPayload};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Path of the feedback resource, relative to the API base URL
const FEEDBACK_PATH: &str = "/api/feedback";

/// Client for the feedback API
pub struct FeedbackClient {
    /// Shared reqwest client with the request timeout applied
    http: reqwest::Client,
    /// Full URL of the feedback resource
    endpoint: String,
}

impl FeedbackClient {
    /// Create a client posting to `<base_url>/api/feedback`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build feedback http client")?;

        Ok(Self {
            http,
            endpoint: feedback_endpoint(base_url),
        })
    }

    /// The URL submissions are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FeedbackApi for FeedbackClient {
    async fn submit_feedback(&self, payload: &FeedbackPayload) -> Result<FeedbackAck, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting feedback");

        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error submitting feedback: {e}");
                if e.is_builder() {
                    SubmitError::Unknown { message: None }
                } else {
                    SubmitError::Network
                }
            })?;

        let status = response.status();
        // Only transport failures (timeout, reset, truncation) end a body read early
        let body = response.text().await.map_err(|e| {
            tracing::error!(
                status = status.as_u16(),
                timeout = e.is_timeout(),
                "Error reading feedback response: {e}"
            );
            SubmitError::Network
        })?;

        let result = classify_response(status, &body);
        if let Err(ref err) = result {
            tracing::warn!(status = status.as_u16(), "feedback rejected: {err}");
        }
        result
    }
}

/// Join the base URL and the feedback path without doubling slashes
fn feedback_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), FEEDBACK_PATH)
}
