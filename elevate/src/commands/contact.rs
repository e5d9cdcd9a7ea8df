use std::sync::Arc;

use anyhow::bail;
use clap::Subcommand;
use elevate_config::Config;
use elevate_di::Provides;
use url::Url;

use crate::environment::{types::ContactForm, Provider};

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate and send a contact form submission to the relay
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Overrides `form.relay_url` from the config
        #[arg(long)]
        relay_url: Option<Url>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                message,
                relay_url,
            } => send(config, name, email, message, relay_url).await,
        }
    }
}

async fn send(
    config: Config,
    name: String,
    email: String,
    message: String,
    relay_url: Option<Url>,
) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config);
    if let Some(relay_url) = relay_url {
        provider.set_relay_url(Arc::new(relay_url));
    }

    let form: ContactForm = provider.provide();
    form.set_name(name);
    form.set_email(email);
    form.set_message(message);

    let status = form.submit().await;
    if !status.is_success() {
        bail!("{status}");
    }

    println!("{status}");

    Ok(())
}
