//! Form domain layer
//!
//! Type-safe form handling for the feedback view.

mod field;
mod form_state;

pub use field::{FieldName, FormField, MAX_RATING};
pub use form_state::{FeedbackForm, Form};
