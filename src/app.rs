//! Application state and core logic

use crate::api::{FeedbackAck, FeedbackApi, SubmitError};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, HomeButton, SubmitAttempt, Transition, View, THANK_YOU_MESSAGE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

type SubmissionResult = Result<FeedbackAck, SubmitError>;

/// Result tagged with the id of the submission that produced it
type TaggedResult = (u64, SubmissionResult);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Feedback API used by submissions
    api: Arc<dyn FeedbackApi>,
    /// Results of in-flight submissions, applied on the UI loop
    results_tx: mpsc::UnboundedSender<TaggedResult>,
    results_rx: mpsc::UnboundedReceiver<TaggedResult>,
    /// Id of the submission the current form is waiting on
    pending_submission: Option<u64>,
    next_submission_id: u64,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn FeedbackApi>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            results_tx,
            results_rx,
            pending_submission: None,
            next_submission_id: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Acknowledgement dialog is modal
        if self.state.has_acknowledgement() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_acknowledgement();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Feedback => self.handle_feedback_key(key),
        }
        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if self.state.current_view.is_form_view() {
            self.pending_submission = None;
            self.state.reset_feedback();
        }
        // Skip form views in history to go back to the last non-form view
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            return;
        }
        self.state.current_view = View::Home;
    }

    /// Apply every submission result that has arrived since the last tick
    pub fn drain_submissions(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.apply_submission_result(result);
        }
    }

    fn apply_submission_result(&mut self, (id, result): TaggedResult) {
        if self.pending_submission != Some(id) {
            tracing::warn!(id, "dropping result of a discarded submission");
            return;
        }
        self.pending_submission = None;

        if self.state.feedback.complete_submit(result) == Transition::NavigateHome {
            self.state.acknowledgement = Some(THANK_YOU_MESSAGE.to_string());
            self.state.reset_feedback();
            self.state.view_history.clear();
            self.state.current_view = View::Home;
        }
    }

    fn open_feedback(&mut self) {
        self.pending_submission = None;
        self.state.reset_feedback();
        self.navigate(View::Feedback);
    }

    /// Handle keys in Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('f') => self.open_feedback(),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right => self.state.home_selected_button.toggle(),
            KeyCode::Enter => match self.state.home_selected_button {
                HomeButton::LeaveFeedback => self.open_feedback(),
                HomeButton::Quit => self.quit = true,
            },
            _ => {}
        }
    }

    /// Handle keys in Feedback view
    fn handle_feedback_key(&mut self, key: KeyEvent) {
        let is_submit_shortcut = key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(SUBMIT_MODIFIER));
        if is_submit_shortcut {
            self.submit_feedback();
            return;
        }

        let enabled = self.state.feedback.inputs_enabled();
        let form = self.state.feedback.form();
        let on_rating = form.is_rating_active();
        let on_multiline = form.is_active_field_multiline();

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab => self.state.feedback.focus_next(),
            KeyCode::BackTab => self.state.feedback.focus_prev(),
            // Enter inserts a newline in the message, submits everywhere else
            KeyCode::Enter if on_multiline => {
                if enabled {
                    self.state.feedback.input_char('\n');
                }
            }
            KeyCode::Enter => self.submit_feedback(),
            KeyCode::Char(c) if on_rating => {
                if let Some(star) = c.to_digit(10) {
                    self.state.feedback.set_rating(star as u8);
                }
            }
            KeyCode::Left if on_rating => {
                let current = self.state.feedback.rating();
                self.state.feedback.set_rating(current.saturating_sub(1).max(1));
            }
            KeyCode::Right if on_rating => {
                let current = self.state.feedback.rating();
                self.state.feedback.set_rating(current + 1);
            }
            KeyCode::Char(c) if enabled && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.feedback.input_char(c)
            }
            KeyCode::Backspace if enabled => self.state.feedback.backspace(),
            _ => {}
        }
    }

    /// Validate and, if ready, send the form on a background task
    fn submit_feedback(&mut self) {
        match self.state.feedback.begin_submit() {
            SubmitAttempt::Ready(payload) => {
                tracing::info!(rating = payload.rating, "submitting feedback");
                let id = self.next_submission_id;
                self.next_submission_id += 1;
                self.pending_submission = Some(id);

                let api = Arc::clone(&self.api);
                let tx = self.results_tx.clone();
                tokio::spawn(async move {
                    let result = api.submit_feedback(&payload).await;
                    if tx.send((id, result)).is_err() {
                        tracing::debug!("app closed before submission finished");
                    }
                });
            }
            SubmitAttempt::Invalid(err) => tracing::debug!("feedback not sent: {err}"),
            SubmitAttempt::Busy | SubmitAttempt::Finished => {}
        }
    }
}
