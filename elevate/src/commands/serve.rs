use elevate_config::Config;
use elevate_di::Provides;
use tracing::{info, warn};

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.email.sendgrid_api_key.is_none() {
        warn!("SENDGRID_API_KEY is not set, sending contact messages will fail");
    }

    let mut provider = Provider::new(&config);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
