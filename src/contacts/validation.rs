//! Contact submission validation.
//!
//! # Responsibilities
//! - Check every required field is present and non-blank
//! - Check the email address parses as an RFC 5322 address
//! - Enforce per-field length limits
//!
//! # Design Decisions
//! - Returns all violations, not just the first
//! - Validation is a pure function: ContactSubmission → Result<NewContact, Vec<ValidationError>>
//! - Trimming is only used for the blank check; values are stored as submitted

use std::fmt;

use lettre::Address;
use thiserror::Error;

use crate::contacts::model::{ContactSubmission, NewContact};

pub const MAX_NAME_CHARS: usize = 256;
pub const MAX_EMAIL_CHARS: usize = 320;
pub const MAX_SUBJECT_CHARS: usize = 256;
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn max_chars(self) -> usize {
        match self {
            Field::Name => MAX_NAME_CHARS,
            Field::Email => MAX_EMAIL_CHARS,
            Field::Subject => MAX_SUBJECT_CHARS,
            Field::Message => MAX_MESSAGE_CHARS,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{0} must not be empty")]
    Empty(Field),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("email is not a valid address")]
    InvalidEmail,
}

/// Returns true if `email` parses as a mailbox address.
pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= MAX_EMAIL_CHARS && email.parse::<Address>().is_ok()
}

fn check_field(
    field: Field,
    value: Option<String>,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    let Some(value) = value else {
        errors.push(ValidationError::Missing(field));
        return None;
    };

    if value.trim().is_empty() {
        errors.push(ValidationError::Empty(field));
        return None;
    }

    let max = field.max_chars();
    if value.chars().count() > max {
        errors.push(ValidationError::TooLong { field, max });
        return None;
    }

    Some(value)
}

impl ContactSubmission {
    /// Validate the submission, producing a record ready for the store.
    pub fn validate(self) -> Result<NewContact, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = check_field(Field::Name, self.name, &mut errors);
        let email = check_field(Field::Email, self.email, &mut errors);
        let subject = check_field(Field::Subject, self.subject, &mut errors);
        let message = check_field(Field::Message, self.message, &mut errors);

        if let Some(email) = &email {
            if !is_valid_email(email) {
                errors.push(ValidationError::InvalidEmail);
            }
        }

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
                Ok(NewContact {
                    name,
                    email,
                    subject,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, subject: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    #[test]
    fn accepts_complete_submission() {
        let new = submission("Alice", "alice@example.com", "Hi", "Hello there")
            .validate()
            .unwrap();
        assert_eq!(new.name, "Alice");
        assert_eq!(new.email, "alice@example.com");
        assert_eq!(new.subject, "Hi");
        assert_eq!(new.message, "Hello there");
    }

    #[test]
    fn keeps_values_as_submitted() {
        let new = submission("  Alice ", "alice@example.com", "\tHi", "Hello there  ")
            .validate()
            .unwrap();
        assert_eq!(new.name, "  Alice ");
        assert_eq!(new.email, "alice@example.com");
        assert_eq!(new.subject, "\tHi");
        assert_eq!(new.message, "Hello there  ");
    }

    #[test]
    fn padded_email_is_not_rewritten() {
        let errors = submission("Alice", " alice@example.com\n", "Hi", "Hello")
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidEmail]);
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = ContactSubmission::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Missing(Field::Name),
                ValidationError::Missing(Field::Email),
                ValidationError::Missing(Field::Subject),
                ValidationError::Missing(Field::Message),
            ]
        );
    }

    #[test]
    fn rejects_blank_fields() {
        let errors = submission("   ", "alice@example.com", "", "Hello")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Empty(Field::Name),
                ValidationError::Empty(Field::Subject),
            ]
        );
    }

    #[test]
    fn rejects_malformed_email() {
        let errors = submission("Alice", "not-an-email", "Hi", "Hello")
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidEmail]);
    }

    #[test]
    fn rejects_overlong_message() {
        let long = "x".repeat(MAX_MESSAGE_CHARS + 1);
        let errors = submission("Alice", "alice@example.com", "Hi", &long)
            .validate()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TooLong {
                field: Field::Message,
                max: MAX_MESSAGE_CHARS
            }]
        );
    }

    #[test]
    fn email_grammar() {
        for ok in [
            "alice@example.com",
            "a.b+tag@sub.example.co.uk",
            "first_last%x@my-domain.io",
            "o'brien@example.org",
        ] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "not-an-email",
            "@example.com",
            "alice@",
            "alice@@example.com",
            "alice smith@example.com",
            " alice@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(ValidationError::Missing(Field::Email).to_string(), "email is required");
        assert_eq!(
            ValidationError::TooLong { field: Field::Name, max: 256 }.to_string(),
            "name must be at most 256 characters"
        );
    }
}
