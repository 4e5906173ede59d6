//! Client-side validation of the feedback form

use super::forms::{FeedbackForm, FieldName};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// First rule the form breaks. `Display` is the banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your contact number")]
    MissingContact,
    #[error("Please enter your message")]
    MissingMessage,
}

/// `local@domain.tld` shape check on the value as typed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Run the rules in order and stop at the first failure
pub fn validate(form: &FeedbackForm) -> Result<(), ValidationError> {
    if is_blank(form.text(FieldName::Name)) {
        return Err(ValidationError::MissingName);
    }
    let email = form.text(FieldName::Email);
    if is_blank(email) {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if is_blank(form.text(FieldName::Contact)) {
        return Err(ValidationError::MissingContact);
    }
    if is_blank(form.text(FieldName::Message)) {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}
