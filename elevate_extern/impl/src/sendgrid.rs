use std::sync::Arc;

use elevate_di::Build;
use elevate_extern_contracts::sendgrid::{
    SendgridApiService, SendgridMail, SendgridMailSendResponse,
};
use elevate_models::Sensitive;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const MAIL_SEND_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Clone, Build)]
pub struct SendgridApiServiceImpl {
    config: SendgridApiServiceConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct SendgridApiServiceConfig {
    mail_send_endpoint: Arc<Url>,
    api_key: Arc<Sensitive<String>>,
}

impl SendgridApiServiceConfig {
    /// A missing api key is sent as an empty bearer token, which SendGrid
    /// rejects at send time.
    pub fn new(api_key: Option<Sensitive<String>>, mail_send_endpoint_override: Option<Url>) -> Self {
        Self {
            mail_send_endpoint: mail_send_endpoint_override
                .unwrap_or_else(|| MAIL_SEND_ENDPOINT.parse().unwrap())
                .into(),
            api_key: api_key.unwrap_or_default().into(),
        }
    }
}

impl SendgridApiService for SendgridApiServiceImpl {
    async fn mail_send(&self, mail: SendgridMail) -> anyhow::Result<SendgridMailSendResponse> {
        let response = self
            .client
            .post((*self.config.mail_send_endpoint).clone())
            .bearer_auth(self.config.api_key.as_str())
            .json(&MailSendRequest::from(&mail))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(SendgridMailSendResponse::Accepted);
        }

        let errors = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.errors.into_iter().map(|err| err.message).collect())
            .unwrap_or_default();

        Ok(SendgridMailSendResponse::Rejected {
            status: status.as_u16(),
            errors,
        })
    }
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

impl<'a> From<&'a SendgridMail> for MailSendRequest<'a> {
    fn from(mail: &'a SendgridMail) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address { email: &mail.to }],
            }],
            from: Address { email: &mail.from },
            reply_to: mail.reply_to.as_deref().map(|email| Address { email }),
            subject: &mail.subject,
            content: [Content {
                content_type: "text/plain",
                value: &mail.text,
            }],
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    errors: Vec<ErrorMessage>,
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}
