//! Application state definitions

use super::controller::FeedbackFormController;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen; the route a successful submission returns to
    #[default]
    Home,
    Feedback,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Feedback)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Feedback => "Feedback",
        }
    }
}

/// Buttons on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeButton {
    #[default]
    LeaveFeedback,
    Quit,
}

impl HomeButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::LeaveFeedback => Self::Quit,
            Self::Quit => Self::LeaveFeedback,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LeaveFeedback => "Leave feedback",
            Self::Quit => "Quit",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Home
    pub home_selected_button: HomeButton,

    /// Form for the current visit of the feedback view
    pub feedback: FeedbackFormController,

    /// Acknowledgement dialog shown over the current view until dismissed
    pub acknowledgement: Option<String>,
}

impl AppState {
    /// Start a fresh form, discarding whatever the last visit left behind
    pub fn reset_feedback(&mut self) {
        self.feedback = FeedbackFormController::new();
    }

    pub fn has_acknowledgement(&self) -> bool {
        self.acknowledgement.is_some()
    }

    pub fn dismiss_acknowledgement(&mut self) {
        self.acknowledgement = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(state.view_history.is_empty());
        assert!(!state.has_acknowledgement());
    }

    #[test]
    fn test_only_feedback_is_form_view() {
        assert!(View::Feedback.is_form_view());
        assert!(!View::Home.is_form_view());
    }

    #[test]
    fn test_home_button_toggle() {
        let mut button = HomeButton::default();
        button.toggle();
        assert_eq!(button, HomeButton::Quit);
        button.toggle();
        assert_eq!(button, HomeButton::LeaveFeedback);
    }

    #[test]
    fn test_reset_feedback_clears_form() {
        let mut state = AppState::default();
        state.feedback.input_char('x');
        state.reset_feedback();
        assert_eq!(state.feedback.form().name.as_text(), "");
    }

    #[test]
    fn test_dismiss_acknowledgement() {
        let mut state = AppState {
            acknowledgement: Some("thanks".to_string()),
            ..Default::default()
        };
        state.dismiss_acknowledgement();
        assert!(!state.has_acknowledgement());
    }
}
