//! Feedback form controller
//!
//! Owns the form for one visit of the feedback view and drives the
//! submission state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Succeeded
//!   ▲                  │
//!   └──edit── Failed ◀─┘ (error banner set)
//! ```
//!
//! Submitting is split into [`FeedbackFormController::begin_submit`] and
//! [`FeedbackFormController::complete_submit`] so the request can run on a
//! background task while key events keep flowing.

use super::forms::{FeedbackForm, FieldName, Form, MAX_RATING};
use super::validation::{validate, ValidationError};
use crate::api::{FeedbackAck, FeedbackPayload, SubmitError, FEEDBACK_TYPE_SAD};

/// Blocked submit attempts before the please-wait notice shows
pub const BLOCKED_ATTEMPT_THRESHOLD: u32 = 3;

pub const PLEASE_WAIT_NOTICE: &str = "Please wait, your feedback is still being submitted...";

pub const THANK_YOU_MESSAGE: &str = "Thank you for your feedback! We will work on improving.";

/// Where the current submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Last attempt failed; editable, error banner visible
    Failed,
    /// Terminal for this form
    Succeeded,
}

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A request is already in flight
    Busy,
    /// The form was already accepted
    Finished,
    Invalid(ValidationError),
    /// Validation passed; send this payload exactly once
    Ready(FeedbackPayload),
}

/// What the view layer should do after a submission completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    NavigateHome,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackFormController {
    form: FeedbackForm,
    status: SubmissionStatus,
    error_message: Option<String>,
    notice: Option<String>,
    blocked_attempts: u32,
}

impl FeedbackFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FeedbackForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn rating(&self) -> u8 {
        self.form.rating.as_rating()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Inputs accept edits unless a request is in flight or the form is done
    pub fn inputs_enabled(&self) -> bool {
        !matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        )
    }

    pub fn focus_next(&mut self) {
        self.form.next_field();
    }

    pub fn focus_prev(&mut self) {
        self.form.prev_field();
    }

    /// Set a text field. Clears the error banner; validation waits for submit.
    pub fn edit_field(&mut self, field: FieldName, value: String) {
        self.form.field_mut(field).set_text(value);
        if self.error_message.take().is_some() && self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.form.active_text_field() {
            if let Some(value) = self.form.field(field).with_char(c) {
                self.edit_field(field, value);
            }
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.form.active_text_field() {
            if let Some(value) = self.form.field(field).without_last_char() {
                self.edit_field(field, value);
            }
        }
    }

    /// Set the star rating (1-5). Ignored while submitting.
    pub fn set_rating(&mut self, star: u8) {
        if self.is_submitting() || !(1..=MAX_RATING).contains(&star) {
            return;
        }
        self.form.rating.set_rating(star);
    }

    /// "You rated: N star(s)" once a rating is set
    pub fn rating_label(&self) -> Option<String> {
        match self.rating() {
            0 => None,
            1 => Some("You rated: 1 star".to_string()),
            n => Some(format!("You rated: {n} stars")),
        }
    }

    /// Guard and validate. On `Ready` the form is now Submitting.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        match self.status {
            SubmissionStatus::Submitting => {
                self.blocked_attempts += 1;
                if self.blocked_attempts >= BLOCKED_ATTEMPT_THRESHOLD {
                    self.notice = Some(PLEASE_WAIT_NOTICE.to_string());
                }
                tracing::debug!(attempts = self.blocked_attempts, "submit ignored, in flight");
                return SubmitAttempt::Busy;
            }
            SubmissionStatus::Succeeded => return SubmitAttempt::Finished,
            SubmissionStatus::Idle | SubmissionStatus::Failed => {}
        }

        if let Err(err) = validate(&self.form) {
            self.error_message = Some(err.to_string());
            return SubmitAttempt::Invalid(err);
        }

        self.status = SubmissionStatus::Submitting;
        self.error_message = None;
        self.blocked_attempts = 0;
        self.notice = None;
        SubmitAttempt::Ready(self.payload())
    }

    /// Apply the outcome of the in-flight request
    pub fn complete_submit(&mut self, result: Result<FeedbackAck, SubmitError>) -> Transition {
        if !self.is_submitting() {
            tracing::warn!("submission result arrived with no request in flight");
            return Transition::Stay;
        }

        self.blocked_attempts = 0;
        self.notice = None;

        match result {
            Ok(ack) => {
                match ack.message {
                    Some(message) => tracing::info!("feedback submitted: {message}"),
                    None => tracing::info!("feedback submitted"),
                }
                self.status = SubmissionStatus::Succeeded;
                Transition::NavigateHome
            }
            Err(err) => {
                tracing::warn!(status = err.status_code(), "feedback submission failed: {err}");
                self.status = SubmissionStatus::Failed;
                self.error_message = Some(err.to_string());
                Transition::Stay
            }
        }
    }

    /// Validate, send once and apply the result in one step.
    ///
    /// The app splits this across a spawned task instead.
    #[cfg(test)]
    pub async fn submit(&mut self, api: &dyn crate::api::FeedbackApi) -> Transition {
        match self.begin_submit() {
            SubmitAttempt::Ready(payload) => {
                let result = api.submit_feedback(&payload).await;
                self.complete_submit(result)
            }
            _ => Transition::Stay,
        }
    }

    fn payload(&self) -> FeedbackPayload {
        let trimmed = |field| self.form.text(field).trim().to_string();
        FeedbackPayload {
            name: trimmed(FieldName::Name),
            email: trimmed(FieldName::Email),
            contact: trimmed(FieldName::Contact),
            message: trimmed(FieldName::Message),
            rating: self.rating(),
            feedback_type: FEEDBACK_TYPE_SAD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFeedbackApi;

    fn filled() -> FeedbackFormController {
        let mut controller = FeedbackFormController::new();
        controller.edit_field(FieldName::Name, "  Ada ".to_string());
        controller.edit_field(FieldName::Email, "ada@example.com".to_string());
        controller.edit_field(FieldName::Contact, " 555-0100".to_string());
        controller.edit_field(FieldName::Message, "Cold room\n".to_string());
        controller
    }

    fn api_never_called() -> MockFeedbackApi {
        let mut api = MockFeedbackApi::new();
        api.expect_submit_feedback().times(0);
        api
    }

    fn api_returning(result: Result<FeedbackAck, SubmitError>) -> MockFeedbackApi {
        let mut api = MockFeedbackApi::new();
        api.expect_submit_feedback()
            .times(1)
            .returning(move |_| result.clone());
        api
    }

    mod validation_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_required_field_never_calls_api() {
            for field in [
                FieldName::Name,
                FieldName::Email,
                FieldName::Contact,
                FieldName::Message,
            ] {
                let mut controller = filled();
                controller.edit_field(field, "   ".to_string());
                let api = api_never_called();

                let transition = controller.submit(&api).await;

                assert_eq!(transition, Transition::Stay);
                assert!(controller.error_message().is_some(), "{field:?}");
                assert_eq!(controller.status(), SubmissionStatus::Idle);
            }
        }

        #[tokio::test]
        async fn test_empty_form_reports_name() {
            let mut controller = FeedbackFormController::new();
            controller.submit(&api_never_called()).await;
            assert_eq!(controller.error_message(), Some("Please enter your name"));
        }

        #[test]
        fn test_invalid_email_is_reported() {
            let mut controller = filled();
            controller.edit_field(FieldName::Email, "a@b".to_string());
            assert_eq!(
                controller.begin_submit(),
                SubmitAttempt::Invalid(ValidationError::InvalidEmail)
            );
            assert_eq!(
                controller.error_message(),
                Some("Please enter a valid email address")
            );
        }

        #[test]
        fn test_editing_clears_error() {
            let mut controller = FeedbackFormController::new();
            controller.begin_submit();
            assert!(controller.error_message().is_some());

            controller.edit_field(FieldName::Name, "A".to_string());
            assert!(controller.error_message().is_none());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ready_payload_is_trimmed_and_tagged() {
            let mut controller = filled();
            controller.set_rating(2);

            let attempt = controller.begin_submit();

            assert_eq!(
                attempt,
                SubmitAttempt::Ready(FeedbackPayload {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    contact: "555-0100".to_string(),
                    message: "Cold room".to_string(),
                    rating: 2,
                    feedback_type: "sad".to_string(),
                })
            );
            assert!(controller.is_submitting());
            assert!(!controller.inputs_enabled());
        }

        #[test]
        fn test_unrated_payload_sends_zero() {
            let mut controller = filled();
            match controller.begin_submit() {
                SubmitAttempt::Ready(payload) => assert_eq!(payload.rating, 0),
                other => panic!("expected ready, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_ignored() {
            let mut controller = filled();
            assert!(matches!(controller.begin_submit(), SubmitAttempt::Ready(_)));

            let api = api_never_called();
            let transition = controller.submit(&api).await;

            assert_eq!(transition, Transition::Stay);
            assert!(controller.is_submitting());
        }

        #[test]
        fn test_repeated_taps_surface_notice() {
            let mut controller = filled();
            controller.begin_submit();

            assert_eq!(controller.begin_submit(), SubmitAttempt::Busy);
            assert_eq!(controller.begin_submit(), SubmitAttempt::Busy);
            assert!(controller.notice().is_none());
            assert_eq!(controller.begin_submit(), SubmitAttempt::Busy);
            assert_eq!(controller.notice(), Some(PLEASE_WAIT_NOTICE));

            controller.complete_submit(Err(SubmitError::Server));
            assert!(controller.notice().is_none());
        }

        #[tokio::test]
        async fn test_success_navigates_home_once() {
            let mut controller = filled();
            let api = api_returning(Ok(FeedbackAck::default()));

            let transition = controller.submit(&api).await;

            assert_eq!(transition, Transition::NavigateHome);
            assert_eq!(controller.status(), SubmissionStatus::Succeeded);
            assert_eq!(
                controller.complete_submit(Ok(FeedbackAck::default())),
                Transition::Stay
            );
            assert_eq!(controller.begin_submit(), SubmitAttempt::Finished);
        }

        #[tokio::test]
        async fn test_sends_exactly_what_was_validated() {
            let mut controller = filled();
            controller.set_rating(4);
            let mut api = MockFeedbackApi::new();
            api.expect_submit_feedback()
                .withf(|p| p.name == "Ada" && p.rating == 4 && p.feedback_type == "sad")
                .times(1)
                .returning(|_| Ok(FeedbackAck::default()));

            controller.submit(&api).await;
        }
    }

    mod failures {
        use super::*;
        use pretty_assertions::assert_eq;

        async fn fail_with(err: SubmitError) -> FeedbackFormController {
            let mut controller = filled();
            let transition = controller.submit(&api_returning(Err(err))).await;
            assert_eq!(transition, Transition::Stay);
            controller
        }

        #[tokio::test]
        async fn test_rate_limited_message() {
            let controller = fail_with(SubmitError::RateLimited { retry_after: 30 }).await;
            assert_eq!(
                controller.error_message(),
                Some("Too many requests. Please wait 30 seconds and try again.")
            );
        }

        #[tokio::test]
        async fn test_network_message() {
            let controller = fail_with(SubmitError::Network).await;
            assert_eq!(
                controller.error_message(),
                Some("Network error. Please check your internet connection and try again.")
            );
        }

        #[tokio::test]
        async fn test_failure_keeps_values_and_reenables_inputs() {
            let controller = fail_with(SubmitError::Server).await;
            assert_eq!(controller.status(), SubmissionStatus::Failed);
            assert!(controller.inputs_enabled());
            assert_eq!(controller.form().text(FieldName::Name), "  Ada ");
        }

        #[tokio::test]
        async fn test_can_resubmit_after_failure() {
            let mut controller = fail_with(SubmitError::Network).await;
            let transition = controller
                .submit(&api_returning(Ok(FeedbackAck::default())))
                .await;
            assert_eq!(transition, Transition::NavigateHome);
            assert!(controller.error_message().is_none());
        }

        #[tokio::test]
        async fn test_edit_after_failure_returns_to_idle() {
            let mut controller = fail_with(SubmitError::Server).await;
            controller.edit_field(FieldName::Message, "More detail".to_string());
            assert_eq!(controller.status(), SubmissionStatus::Idle);
            assert!(controller.error_message().is_none());
        }
    }

    mod rating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_last_rating_wins() {
            let mut controller = FeedbackFormController::new();
            controller.set_rating(3);
            controller.set_rating(1);
            assert_eq!(controller.rating(), 1);
        }

        #[test]
        fn test_rating_ignored_while_submitting() {
            let mut controller = filled();
            controller.set_rating(3);
            controller.begin_submit();
            controller.set_rating(5);
            assert_eq!(controller.rating(), 3);
        }

        #[test]
        fn test_out_of_range_rating_ignored() {
            let mut controller = FeedbackFormController::new();
            controller.set_rating(2);
            controller.set_rating(0);
            controller.set_rating(6);
            assert_eq!(controller.rating(), 2);
        }

        #[test]
        fn test_rating_label() {
            let mut controller = FeedbackFormController::new();
            assert!(controller.rating_label().is_none());
            controller.set_rating(1);
            assert_eq!(controller.rating_label().as_deref(), Some("You rated: 1 star"));
            controller.set_rating(4);
            assert_eq!(
                controller.rating_label().as_deref(),
                Some("You rated: 4 stars")
            );
        }
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_char_edits_focused_field() {
            let mut controller = FeedbackFormController::new();
            controller.input_char('A');
            controller.input_char('l');
            controller.backspace();
            assert_eq!(controller.form().text(FieldName::Name), "A");
        }

        #[test]
        fn test_input_char_on_rating_is_noop() {
            let mut controller = FeedbackFormController::new();
            for _ in 0..3 {
                controller.focus_next();
            }
            assert!(controller.form().is_rating_active());
            controller.input_char('x');
            assert_eq!(controller.rating(), 0);
        }
    }
}
