//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Input kind of a field, which selects the validation rule applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Select,
    Message,
    Consent,
}

/// A single form field: identity, current value and validation tagging.
/// The name doubles as the backing element id in the page document.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    /// Create a plain text field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            kind: FieldKind::Text,
            required,
        }
    }

    /// Create an email field (always required in this site's forms)
    pub fn email(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::text(name, label, true)
        }
    }

    /// Create a phone field (always required in this site's forms)
    pub fn phone(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Phone,
            ..Self::text(name, label, true)
        }
    }

    /// Create an optional select field
    pub fn select(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Select,
            ..Self::text(name, label, false)
        }
    }

    /// Create a required multiline message field
    pub fn message(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Message,
            ..Self::text(name, label, true)
        }
    }

    /// Create a consent checkbox. Consent is gated by its own rule rather
    /// than the required-field rule, so `required` stays false here.
    pub fn consent(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Flag(false),
            kind: FieldKind::Consent,
            required: false,
        }
    }

    /// Get the text value (empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the text value with surrounding whitespace trimmed
    pub fn trimmed(&self) -> &str {
        self.as_text().trim()
    }

    /// Whether the trimmed value is empty
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Get the flag value (false for text fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the flag value
    pub fn set_checked(&mut self, checked: bool) {
        self.value = FieldValue::Flag(checked);
    }

    /// Toggle the flag value, returning the new state (no-op false for text)
    pub fn toggle_checked(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Flag(f) => {
                *f = !*f;
                *f
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Flag(f) => *f = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text("name", "Name", true);
        assert_eq!(field.name, "name");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(field.required);
        assert!(field.is_blank());
    }

    #[test]
    fn test_email_and_phone_are_required() {
        assert!(FormField::email("email", "Email").required);
        assert!(FormField::phone("phone", "Phone").required);
    }

    #[test]
    fn test_select_is_optional() {
        let field = FormField::select("interest", "Interest");
        assert!(!field.required);
        assert_eq!(field.kind, FieldKind::Select);
    }

    #[test]
    fn test_trimmed_and_is_blank() {
        let mut field = FormField::text("location", "Location", true);
        field.set_text("   ".to_string());
        assert!(field.is_blank());
        field.set_text("  Bangalore  ".to_string());
        assert_eq!(field.trimmed(), "Bangalore");
        assert!(!field.is_blank());
    }

    #[test]
    fn test_consent_starts_unchecked() {
        let field = FormField::consent("quoteConsent", "Consent");
        assert!(!field.is_checked());
        assert!(!field.required);
    }

    #[test]
    fn test_toggle_checked_on_consent() {
        let mut field = FormField::consent("quoteConsent", "Consent");
        assert!(field.toggle_checked());
        assert!(field.is_checked());
        assert!(!field.toggle_checked());
        assert!(!field.is_checked());
    }

    #[test]
    fn test_toggle_checked_is_noop_for_text() {
        let mut field = FormField::text("name", "Name", true);
        field.set_text("x".to_string());
        assert!(!field.toggle_checked());
        assert_eq!(field.as_text(), "x");
    }

    #[test]
    fn test_as_text_for_flag_is_empty() {
        let field = FormField::consent("quoteConsent", "Consent");
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear_resets_both_kinds() {
        let mut text = FormField::text("name", "Name", true);
        text.set_text("hello".to_string());
        text.clear();
        assert!(text.is_blank());

        let mut flag = FormField::consent("quoteConsent", "Consent");
        flag.set_checked(true);
        flag.clear();
        assert!(!flag.is_checked());
    }
}
