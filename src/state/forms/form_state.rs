//! Feedback form struct and focus handling

use super::field::{FieldName, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row
pub const SUBMIT_BUTTON_INDEX: usize = 5;

/// The negative feedback form: name, email, contact, rating, message
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub name: FormField,
    pub email: FormField,
    pub contact: FormField,
    pub rating: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name *", "Enter your name", false),
            email: FormField::text("email", "Email *", "Enter your email", false),
            contact: FormField::text(
                "contact",
                "Contact No *",
                "Enter your contact number",
                false,
            ),
            rating: FormField::rating("rating", "Rating (Optional)"),
            message: FormField::text(
                "message",
                "Message *",
                "Please describe your experience...",
                true,
            ),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Contact => &self.contact,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Contact => &mut self.contact,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn text(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    /// Text field that currently has focus, if any
    pub fn active_text_field(&self) -> Option<FieldName> {
        match self.active_field_index {
            0 => Some(FieldName::Name),
            1 => Some(FieldName::Email),
            2 => Some(FieldName::Contact),
            4 => Some(FieldName::Message),
            _ => None,
        }
    }

    pub fn is_rating_active(&self) -> bool {
        self.active_field_index == 3
    }

    /// Returns true if the submit button is currently focused
    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FeedbackForm {
    fn field_count(&self) -> usize {
        6 // name, email, contact, rating, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.contact),
            3 => Some(&self.rating),
            4 => Some(&self.message),
            // Index 5 is the submit button, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = FeedbackForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.name.as_text(), "");
        assert_eq!(form.email.as_text(), "");
        assert_eq!(form.contact.as_text(), "");
        assert_eq!(form.message.as_text(), "");
        assert_eq!(form.rating.as_rating(), 0);
    }

    #[test]
    fn test_field_count() {
        assert_eq!(FeedbackForm::new().field_count(), 6);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = FeedbackForm::new();
        for _ in 0..6 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_submit_button() {
        let mut form = FeedbackForm::new();
        form.prev_field();
        assert!(form.is_submit_button_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = FeedbackForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, SUBMIT_BUTTON_INDEX);
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = FeedbackForm::new();
        assert_eq!(form.get_field(0).unwrap().name, "name");
        assert_eq!(form.get_field(1).unwrap().name, "email");
        assert_eq!(form.get_field(2).unwrap().name, "contact");
        assert_eq!(form.get_field(3).unwrap().name, "rating");
        assert_eq!(form.get_field(4).unwrap().name, "message");
        assert!(form.get_field(5).is_none());
    }

    #[test]
    fn test_active_text_field_skips_rating_and_button() {
        let mut form = FeedbackForm::new();
        form.set_active_field(3);
        assert!(form.active_text_field().is_none());
        assert!(form.is_rating_active());
        form.set_active_field(4);
        assert_eq!(form.active_text_field(), Some(FieldName::Message));
        form.set_active_field(5);
        assert!(form.active_text_field().is_none());
    }

    #[test]
    fn test_only_message_is_multiline() {
        let mut form = FeedbackForm::new();
        assert!(!form.is_active_field_multiline());
        form.set_active_field(4);
        assert!(form.is_active_field_multiline());
    }
}
