use std::future::Future;

/// Client for the SendGrid v3 `mail/send` endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SendgridApiService: Send + Sync + 'static {
    fn mail_send(
        &self,
        mail: SendgridMail,
    ) -> impl Future<Output = anyhow::Result<SendgridMailSendResponse>> + Send;
}

/// A single plain text mail with one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendgridMail {
    pub to: String,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendgridMailSendResponse {
    Accepted,
    Rejected {
        status: u16,
        /// Error messages from the response body, if it could be parsed.
        errors: Vec<String>,
    },
}

#[cfg(feature = "mock")]
impl MockSendgridApiService {
    pub fn with_mail_send(mut self, mail: SendgridMail, result: SendgridMailSendResponse) -> Self {
        self.expect_mail_send()
            .once()
            .with(mockall::predicate::eq(mail))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_mail_send_error(mut self, mail: SendgridMail, error: anyhow::Error) -> Self {
        self.expect_mail_send()
            .once()
            .with(mockall::predicate::eq(mail))
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }
}
