//! Contact form validation

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Fields of the contact form as submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One rule a submission broke
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

fn too_short(value: &str, min: usize) -> bool {
    value.trim().chars().count() < min
}

pub fn is_valid_email(email: &str) -> bool {
    match EMAIL_REGEX.as_ref() {
        Ok(re) => re.is_match(email),
        Err(e) => {
            log::error!("Email pattern failed to compile: {}", e);
            false
        }
    }
}

impl ContactForm {
    /// Every rule the form breaks, in field order
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();

        if too_short(&self.name, 2) {
            errors.push(ContactError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ContactError::InvalidEmail);
        }
        if too_short(&self.subject, 5) {
            errors.push(ContactError::SubjectTooShort);
        }
        if too_short(&self.message, 10) {
            errors.push(ContactError::MessageTooShort);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Collaboration".into(),
            message: "Would love to work together.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_all_errors_reported() {
        let form = ContactForm {
            name: " A ".into(),
            email: "nope".into(),
            subject: "Hey  ".into(),
            message: "   short   ".into(),
        };
        assert_eq!(
            form.validate(),
            Err(vec![
                ContactError::NameTooShort,
                ContactError::InvalidEmail,
                ContactError::SubjectTooShort,
                ContactError::MessageTooShort,
            ])
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(EMAIL_REGEX.is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ContactError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );

        let err: Box<dyn std::error::Error> = Box::new(ContactError::NameTooShort);
        assert_eq!(err.to_string(), "Name must be at least 2 characters long");
        assert!(err.source().is_none());
    }
}
