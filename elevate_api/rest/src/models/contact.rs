use elevate_models::contact::{ContactMessage, ContactMessageAuthor};
use serde::Deserialize;

/// Wire shape of a contact form submission.
///
/// Every field is optional here so that absent, `null` and empty values are
/// all rejected by the same required-field check.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the sender
    pub name: Option<String>,
    /// Email address of the sender, used as reply-to
    pub email: Option<String>,
    /// Message text
    pub message: Option<String>,
    /// Requested recipient; required but not used for routing
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingRequiredFields;

impl TryFrom<ApiContactMessage> for ContactMessage {
    type Error = MissingRequiredFields;

    fn try_from(value: ApiContactMessage) -> Result<Self, Self::Error> {
        fn required<T: TryFrom<String>>(value: Option<String>) -> Result<T, MissingRequiredFields> {
            value
                .and_then(|x| T::try_from(x).ok())
                .ok_or(MissingRequiredFields)
        }

        Ok(Self {
            author: ContactMessageAuthor {
                name: required(value.name)?,
                email: required(value.email)?,
            },
            content: required(value.message)?,
            destination: required(value.destination)?,
        })
    }
}
