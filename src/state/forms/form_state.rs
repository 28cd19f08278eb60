//! Form definitions and submission lifecycle

use super::field::FormField;

/// Which of the two lead-capture forms a field set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// The contact-section enquiry form
    Contact,
    /// The promotional quote popup form
    Quote,
}

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "contact form",
            Self::Quote => "quote form",
        }
    }
}

/// Submission lifecycle for one form within one page view.
///
/// Idle → Submitting on the first valid submit (terminal for the page view);
/// Idle → Blocked on a rejected submit; Blocked → Idle when the transient
/// error message auto-hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Blocked,
}

/// Ordered set of fields for one form. Validation walks the fields in
/// declaration order, so construction order is load-bearing.
#[derive(Debug, Clone)]
pub struct FieldSet {
    fields: Vec<FormField>,
}

impl FieldSet {
    /// The contact enquiry form: name, email, phone, location, an optional
    /// interest select and a message
    pub fn contact() -> Self {
        Self {
            fields: vec![
                FormField::text("name", "Full Name", true),
                FormField::email("email", "Email Address"),
                FormField::phone("phone", "Phone Number"),
                FormField::text("location", "Location", true),
                FormField::select("interest", "I'm interested in"),
                FormField::message("message", "Message"),
            ],
        }
    }

    /// The quote popup form: name, email, phone, location and a consent
    /// checkbox
    pub fn quote() -> Self {
        Self {
            fields: vec![
                FormField::text("quoteName", "Full Name", true),
                FormField::email("quoteEmail", "Email Address"),
                FormField::phone("quotePhone", "Phone Number"),
                FormField::text("quoteLocation", "Location", true),
                FormField::consent("quoteConsent", "I agree to receive quotes and updates"),
            ],
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a text field's value; returns false if the field is unknown
    pub fn set_text(&mut self, name: &str, value: String) -> bool {
        match self.get_mut(name) {
            Some(field) => {
                field.set_text(value);
                true
            }
            None => false,
        }
    }

    /// Toggle a consent field, returning the new checked state
    pub fn toggle_checked(&mut self, name: &str) -> bool {
        self.get_mut(name)
            .map(|f| f.toggle_checked())
            .unwrap_or(false)
    }

    /// First field in declaration order, the popup focus target
    pub fn first_field(&self) -> Option<&FormField> {
        self.fields.first()
    }
}

/// A form plus its submission lifecycle
#[derive(Debug, Clone)]
pub struct GatedForm {
    pub fields: FieldSet,
    pub submission: SubmissionState,
}

impl GatedForm {
    pub fn contact() -> Self {
        Self {
            fields: FieldSet::contact(),
            submission: SubmissionState::default(),
        }
    }

    pub fn quote() -> Self {
        Self {
            fields: FieldSet::quote(),
            submission: SubmissionState::default(),
        }
    }

    /// Whether a submit attempt may run at all. Submitting is terminal for
    /// the page view, so it gates re-entry; Blocked does not.
    pub fn can_submit(&self) -> bool {
        self.submission != SubmissionState::Submitting
    }

    /// Enter the terminal Submitting state
    pub fn begin_submit(&mut self) {
        self.submission = SubmissionState::Submitting;
    }

    /// Record a rejected attempt
    pub fn block(&mut self) {
        if self.submission == SubmissionState::Idle {
            self.submission = SubmissionState::Blocked;
        }
    }

    /// Return to Idle once the error message is gone
    pub fn unblock(&mut self) {
        if self.submission == SubmissionState::Blocked {
            self.submission = SubmissionState::Idle;
        }
    }
}
