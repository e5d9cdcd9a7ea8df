use std::sync::Arc;

use elevate_di::Build;
use elevate_email_contracts::{Email, EmailSendError, EmailService};
use elevate_extern_contracts::sendgrid::{
    SendgridApiService, SendgridMail, SendgridMailSendResponse,
};
use elevate_models::email_address::EmailAddress;
use tracing::debug;

/// [`EmailService`] backed by the SendGrid web API.
#[derive(Debug, Clone, Build)]
pub struct SendgridEmailServiceImpl<SendgridApi> {
    sendgrid_api: SendgridApi,
    config: EmailServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub from: Arc<EmailAddress>,
}

impl<SendgridApi> EmailService for SendgridEmailServiceImpl<SendgridApi>
where
    SendgridApi: SendgridApiService,
{
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let mail = SendgridMail {
            to: email.recipient.as_str().into(),
            from: self.config.from.as_str().into(),
            reply_to: email.reply_to,
            subject: email.subject,
            text: email.body,
        };

        match self.sendgrid_api.mail_send(mail).await? {
            SendgridMailSendResponse::Accepted => {
                debug!("email accepted by sendgrid");
                Ok(())
            }
            SendgridMailSendResponse::Rejected { status, errors } => {
                Err(EmailSendError::Rejected { status, errors })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use elevate_extern_contracts::sendgrid::MockSendgridApiService;
    use elevate_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let sendgrid_api = MockSendgridApiService::new()
            .with_mail_send(make_mail(), SendgridMailSendResponse::Accepted);

        let sut = make_sut(sendgrid_api);

        // Act
        let result = sut.send(make_email()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let sendgrid_api = MockSendgridApiService::new().with_mail_send(
            make_mail(),
            SendgridMailSendResponse::Rejected {
                status: 401,
                errors: vec![],
            },
        );

        let sut = make_sut(sendgrid_api);

        // Act
        let result = sut.send(make_email()).await;

        // Assert
        assert_matches!(
            result,
            Err(EmailSendError::Rejected { status: 401, errors }) if errors.is_empty()
        );
    }

    #[tokio::test]
    async fn rejected_with_details() {
        // Arrange
        let sendgrid_api = MockSendgridApiService::new().with_mail_send(
            make_mail(),
            SendgridMailSendResponse::Rejected {
                status: 400,
                errors: vec!["Does not contain a valid address.".into()],
            },
        );

        let sut = make_sut(sendgrid_api);

        // Act
        let result = sut.send(make_email()).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "The email provider rejected the message with status 400: [Does not contain a valid \
             address.]"
        );
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let sendgrid_api = MockSendgridApiService::new()
            .with_mail_send_error(make_mail(), anyhow!("connection refused"));

        let sut = make_sut(sendgrid_api);

        // Act
        let result = sut.send(make_email()).await;

        // Assert
        assert_matches!(result, Err(EmailSendError::Other(_)));
    }

    fn make_sut(
        sendgrid_api: MockSendgridApiService,
    ) -> SendgridEmailServiceImpl<MockSendgridApiService> {
        SendgridEmailServiceImpl {
            sendgrid_api,
            config: EmailServiceConfig {
                from: Arc::new("noreply@example.com".parse().unwrap()),
            },
        }
    }

    fn make_email() -> Email {
        Email {
            recipient: "owner@example.com".parse().unwrap(),
            subject: "New message from Juan Dela Cruz".into(),
            body: "Hi".into(),
            reply_to: Some("juan@example.com".into()),
        }
    }

    fn make_mail() -> SendgridMail {
        SendgridMail {
            to: "owner@example.com".into(),
            from: "noreply@example.com".into(),
            reply_to: Some("juan@example.com".into()),
            subject: "New message from Juan Dela Cruz".into(),
            text: "Hi".into(),
        }
    }
}
