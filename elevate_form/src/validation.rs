use elevate_models::{
    contact::{ContactSubmission, SubmissionMessage, SubmissionName},
    email_address::EmailAddress,
};
use thiserror::Error;

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
}

/// Validate the fields in the order name, email, message and stop at the
/// first failure.
///
/// On success all three values are trimmed.
pub fn validate(fields: &ContactFormFields) -> Result<ContactSubmission, ValidationError> {
    let name = SubmissionName::try_from(fields.name.clone())
        .map_err(|_| ValidationError::MissingName)?;
    let email =
        EmailAddress::try_from(fields.email.clone()).map_err(|_| ValidationError::InvalidEmail)?;
    let message = SubmissionMessage::try_from(fields.message.clone())
        .map_err(|_| ValidationError::MissingMessage)?;

    Ok(ContactSubmission {
        name,
        email,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFormFields {
        ContactFormFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn ok_trims_all_fields() {
        let submission =
            validate(&fields("  Juan Dela Cruz ", " juan@example.com\t", "\nHi  ")).unwrap();

        assert_eq!(*submission.name, "Juan Dela Cruz");
        assert_eq!(submission.email.as_str(), "juan@example.com");
        assert_eq!(*submission.message, "Hi");
    }

    #[test]
    fn ok_trims_byte_order_marks() {
        let submission = validate(&fields(
            "\u{feff}Juan",
            "juan@example.com\u{feff}",
            "Hi\u{feff}",
        ))
        .unwrap();

        assert_eq!(*submission.name, "Juan");
        assert_eq!(submission.email.as_str(), "juan@example.com");
        assert_eq!(*submission.message, "Hi");
    }

    #[test]
    fn priority_order() {
        for (input, expected) in [
            (fields("", "", ""), ValidationError::MissingName),
            (fields("   ", "juan@example.com", "Hi"), ValidationError::MissingName),
            (fields("Juan", "", ""), ValidationError::InvalidEmail),
            (fields("Juan", "  ", "Hi"), ValidationError::InvalidEmail),
            (fields("Juan", "juan@example", ""), ValidationError::InvalidEmail),
            (fields("Juan", "juan example@x.y", "Hi"), ValidationError::InvalidEmail),
            (fields("Juan", "juan@example.com", ""), ValidationError::MissingMessage),
            (fields("Juan", "juan@example.com", " \n "), ValidationError::MissingMessage),
            (fields("\u{feff}", "juan@example.com", "Hi"), ValidationError::MissingName),
            (fields("Juan", "\u{feff}", "Hi"), ValidationError::InvalidEmail),
            (fields("Juan", "juan@example.com", "\u{3000}\u{feff}"), ValidationError::MissingMessage),
        ] {
            assert_eq!(validate(&input), Err(expected), "{input:?}");
        }
    }

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::MissingName.to_string(),
            "Please enter your name"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email"
        );
        assert_eq!(
            ValidationError::MissingMessage.to_string(),
            "Please enter a message"
        );
    }
}
