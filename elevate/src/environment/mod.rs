use std::sync::Arc;

use elevate_config::Config;
use elevate_core_contact_impl::ContactFeatureConfig;
use elevate_di::provider;
use elevate_email_impl::EmailServiceConfig;
use elevate_extern_impl::{
    relay::ContactRelayApiServiceConfig, sendgrid::SendgridApiServiceConfig,
};
use url::Url;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        // Extern
        sendgrid_api_service_config: SendgridApiServiceConfig,
        contact_relay_api_service_config: ContactRelayApiServiceConfig,

        // Email
        email_service_config: EmailServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
    }
}

impl Provider {
    pub fn new(config: &Config) -> Self {
        // Extern
        let sendgrid_api_service_config = SendgridApiServiceConfig::new(
            config.email.sendgrid_api_key.clone(),
            config.email.sendgrid_endpoint_override.clone(),
        );

        let contact_relay_api_service_config = ContactRelayApiServiceConfig {
            relay_url: config.form.relay_url.clone().into(),
        };

        // Email
        let email_service_config = EmailServiceConfig {
            from: config.email.from.clone().into(),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
        };

        Self {
            _cache: Default::default(),

            // Extern
            sendgrid_api_service_config,
            contact_relay_api_service_config,

            // Email
            email_service_config,

            // Core
            contact_feature_config,
        }
    }

    /// Must be called before anything depending on the relay is provided.
    pub fn set_relay_url(&mut self, relay_url: Arc<Url>) {
        self.contact_relay_api_service_config.relay_url = relay_url;
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use elevate_config::DEFAULT_CONFIG_PATH;
    use elevate_di::Provides;
    use types::{ContactForm, RestServer};

    use super::*;

    fn load_config() -> Config {
        elevate_config::load_with_overrides(&[Path::new(DEFAULT_CONFIG_PATH)], &[]).unwrap()
    }

    #[test]
    fn provide_rest_server() {
        let config = load_config();
        let mut provider = Provider::new(&config);
        let _: RestServer = provider.provide();
    }

    #[test]
    fn provide_contact_form() {
        let config = load_config();
        let mut provider = Provider::new(&config);
        provider.set_relay_url(Arc::new("http://127.0.0.1:9999/api/send-email".parse().unwrap()));
        let form: ContactForm = provider.provide();
        assert!(!form.is_loading());
    }
}
