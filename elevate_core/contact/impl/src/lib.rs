use std::sync::Arc;

use elevate_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use elevate_di::Build;
use elevate_email_contracts::{Email, EmailService};
use elevate_models::{contact::ContactMessage, email_address::EmailAddress};
use tracing::{error, info};

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Email> {
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Every message goes here, regardless of the requested destination.
    pub recipient: Arc<EmailAddress>,
}

impl<EmailS> ContactFeatureService for ContactFeatureServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("New message from {}", *message.author.name),
            body: message.content.into_inner(),
            reply_to: Some(message.author.email.into_inner()),
        };

        self.email
            .send(email)
            .await
            .inspect_err(|err| error!("Failed to send contact message: {err}"))
            .map_err(|_| ContactSendMessageError::Send)?;

        info!("Forwarded contact message");

        Ok(())
    }
}
