use std::sync::Arc;

use elevate_di::Build;
use elevate_extern_contracts::relay::{ContactRelayApiService, RelayResponse};
use elevate_models::contact::ContactSubmission;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Build)]
pub struct ContactRelayApiServiceImpl {
    config: ContactRelayApiServiceConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactRelayApiServiceConfig {
    pub relay_url: Arc<Url>,
}

impl ContactRelayApiService for ContactRelayApiServiceImpl {
    async fn send(&self, submission: ContactSubmission) -> anyhow::Result<RelayResponse> {
        let status = self
            .client
            .post((*self.config.relay_url).clone())
            .json(&submission)
            .send()
            .await?
            .status();

        Ok(if status.is_success() {
            RelayResponse::Accepted
        } else {
            RelayResponse::Rejected {
                status: status.as_u16(),
            }
        })
    }
}
