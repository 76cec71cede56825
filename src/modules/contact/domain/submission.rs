use email_address::EmailAddress;
use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Contact form input that passed validation. Only this type reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn new(
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            return Err(ContactValidationError::NameTooShort);
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        let message = message.trim();
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactValidationError::MessageTooShort);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_is_trimmed() {
        let submission =
            ContactSubmission::new(" Bo ", "bo@example.com ", "  Hello there, nice site ")
                .unwrap();

        assert_eq!(submission.name(), "Bo");
        assert_eq!(submission.email(), "bo@example.com");
        assert_eq!(submission.message(), "Hello there, nice site");
    }

    #[test]
    fn test_short_name_is_rejected_after_trim() {
        assert_eq!(
            ContactSubmission::new(" B ", "bo@example.com", "Hello there, nice site"),
            Err(ContactValidationError::NameTooShort)
        );
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        assert_eq!(
            ContactSubmission::new("Bo", "bo-at-example", "Hello there, nice site"),
            Err(ContactValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_message_under_ten_chars_is_rejected() {
        assert_eq!(
            ContactSubmission::new("Bo", "bo@example.com", "Hi there"),
            Err(ContactValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(ContactSubmission::new("Zoë", "zoe@example.com", "Très bien!").is_ok());
        assert_eq!(
            ContactSubmission::new("Ö", "zoe@example.com", "Très bien!"),
            Err(ContactValidationError::NameTooShort)
        );
    }
}
