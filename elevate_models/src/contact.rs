//! Contact form payloads.
//!
//! [`ContactSubmission`] is what the form controller sends after its own
//! validation. [`ContactMessage`] is what the relay accepts after its
//! independent required-field check, which only requires each field to be
//! present and non-empty.

use nutype::nutype;
use serde::Serialize;

use crate::email_address::EmailAddress;

/// A contact form submission that passed client-side validation.
///
/// All fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub message: SubmissionMessage,
}

#[nutype(
    sanitize(with = crate::trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize)
)]
pub struct SubmissionName(String);

#[nutype(
    sanitize(with = crate::trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize)
)]
pub struct SubmissionMessage(String);

/// A message accepted by the mail relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
    /// Required on the wire, but mail is always delivered to the configured
    /// contact recipient.
    pub destination: ContactMessageDestination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageAuthorEmail,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorEmail(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageDestination(String);
