use clap::Subcommand;
use elevate_config::Config;
use elevate_di::Provides;
use elevate_email_contracts::{Email as EmailMessage, EmailService};
use elevate_models::email_address::EmailAddress;

use crate::environment::{types::Email, Provider};

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email through the configured provider
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email: Email = Provider::new(&config).provide();

    email
        .send(EmailMessage {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await?;

    println!("Test email accepted by the provider");

    Ok(())
}
