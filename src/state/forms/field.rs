//! Form field value objects

/// Highest star rating a guest can give
pub const MAX_RATING: u8 = 5;

/// Text fields of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Name,
    Email,
    Contact,
    Message,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// 0 means unset
    Rating(u8),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new star rating field (unset)
    pub fn rating(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            value: FieldValue::Rating(0),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for rating fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Rating(_) => "",
        }
    }

    /// Get the rating value (returns 0 for text fields)
    pub fn as_rating(&self) -> u8 {
        match &self.value {
            FieldValue::Rating(r) => *r,
            FieldValue::Text(_) => 0,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the rating value
    pub fn set_rating(&mut self, value: u8) {
        self.value = FieldValue::Rating(value.min(MAX_RATING));
    }

    /// Text after appending a character; `None` for rating fields
    pub fn with_char(&self, c: char) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.push(c);
                Some(next)
            }
            FieldValue::Rating(_) => None,
        }
    }

    /// Text after removing the last character; `None` for rating fields
    pub fn without_last_char(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.pop();
                Some(next)
            }
            FieldValue::Rating(_) => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Rating(r) => {
                let filled = usize::from(*r);
                let empty = usize::from(MAX_RATING).saturating_sub(filled);
                format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults_empty() {
        let field = FormField::text("name", "Name *", "Enter your name", false);
        assert_eq!(field.as_text(), "");
        assert_eq!(field.as_rating(), 0);
    }

    #[test]
    fn test_with_char_and_without_last_char() {
        let mut field = FormField::text("name", "Name *", "", false);
        field.set_text("Ad".to_string());
        assert_eq!(field.with_char('a').as_deref(), Some("Ada"));
        assert_eq!(field.without_last_char().as_deref(), Some("A"));
    }

    #[test]
    fn test_rating_field_rejects_text_edits() {
        let field = FormField::rating("rating", "Rating (Optional)");
        assert!(field.with_char('x').is_none());
        assert!(field.without_last_char().is_none());
    }

    #[test]
    fn test_set_rating_clamps_to_max() {
        let mut field = FormField::rating("rating", "Rating (Optional)");
        field.set_rating(9);
        assert_eq!(field.as_rating(), MAX_RATING);
    }

    #[test]
    fn test_rating_display_value() {
        let mut field = FormField::rating("rating", "Rating (Optional)");
        assert_eq!(field.display_value(), "☆☆☆☆☆");
        field.set_rating(3);
        assert_eq!(field.display_value(), "★★★☆☆");
    }
}
