//! Submission gate: field validation and phone normalization

use super::field::FieldKind;
use super::form_state::FieldSet;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum digit count for a phone number to be accepted
const MIN_PHONE_DIGITS: usize = 10;

/// Indian country calling code stripped/re-applied by normalization
const COUNTRY_CODE: &str = "91";

/// Local-part @ domain . tld, none of the segments containing whitespace
/// or a second @
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// User-input rejection reasons. The display text is exactly what the page
/// shows in the form message area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredField,
    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,
    #[error("Please enter a valid phone number with at least 10 digits.")]
    InvalidPhoneFormat,
    #[error("Please agree to receive quotes and updates.")]
    MissingConsent,
}

/// A rejected submission: the fields to flag and the reason to display.
/// Only the missing-required rule can name more than one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Invalid {
    pub fields: Vec<String>,
    pub error: ValidationError,
}

impl Invalid {
    fn one(field: &str, error: ValidationError) -> Self {
        Self {
            fields: vec![field.to_string()],
            error,
        }
    }
}

/// Decide whether a submission may proceed.
///
/// Rules run in a fixed order and short-circuit on the first failure:
/// required fields non-blank, then email shape, then phone digit count,
/// then consent. At most one `Invalid` is ever reported per attempt.
pub fn validate(fields: &FieldSet) -> Result<(), Invalid> {
    let missing: Vec<String> = fields
        .fields()
        .iter()
        .filter(|f| f.required && f.is_blank())
        .map(|f| f.name.clone())
        .collect();
    if !missing.is_empty() {
        return Err(Invalid {
            fields: missing,
            error: ValidationError::MissingRequiredField,
        });
    }

    for field in fields.fields() {
        match field.kind {
            FieldKind::Email => {
                let value = field.trimmed();
                if !value.is_empty() && !EMAIL_PATTERN.is_match(value) {
                    return Err(Invalid::one(&field.name, ValidationError::InvalidEmailFormat));
                }
            }
            FieldKind::Phone => {
                if digits_of(field.as_text()).len() < MIN_PHONE_DIGITS {
                    return Err(Invalid::one(&field.name, ValidationError::InvalidPhoneFormat));
                }
            }
            FieldKind::Consent => {
                if !field.is_checked() {
                    return Err(Invalid::one(&field.name, ValidationError::MissingConsent));
                }
            }
            FieldKind::Text | FieldKind::Select | FieldKind::Message => {}
        }
    }

    Ok(())
}

/// Normalize a raw phone input to the `+91 NNNNNNNNNN` display form.
///
/// Strips non-digits, drops a leading country code, keeps at most ten
/// significant digits. Idempotent: normalizing an already-normalized value
/// returns it unchanged.
pub fn normalize_phone(raw: &str) -> String {
    let mut digits = digits_of(raw);
    if let Some(rest) = digits.strip_prefix(COUNTRY_CODE) {
        digits = rest.to_string();
    }
    digits.truncate(MIN_PHONE_DIGITS);
    if digits.is_empty() {
        String::new()
    } else {
        format!("+{COUNTRY_CODE} {digits}")
    }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
