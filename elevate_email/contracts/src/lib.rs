use std::future::Future;

use elevate_models::email_address::EmailAddress;
use thiserror::Error;

/// Transactional email delivery.
///
/// Implementations perform exactly one delivery attempt per call.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    fn send(&self, email: Email) -> impl Future<Output = Result<(), EmailSendError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddress,
    pub subject: String,
    pub body: String,
    /// Not validated; passed to the provider as is.
    pub reply_to: Option<String>,
}

#[derive(Debug, Error)]
pub enum EmailSendError {
    #[error("The email provider rejected the message with status {status}: [{}]", .errors.join("; "))]
    Rejected { status: u16, errors: Vec<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<(), EmailSendError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
