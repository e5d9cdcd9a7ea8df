use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use elevate_models::EMAIL_REGEX;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

pub const MAIL_SEND_ROUTE: &str = "/v3/mail/send";

/// A mail accepted by the testing server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMail {
    pub to: Vec<String>,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: Option<String>,
}

/// All mails accepted by a testing server, in order of arrival.
#[derive(Debug, Clone, Default)]
pub struct Mailbox(Arc<Mutex<Vec<ReceivedMail>>>);

impl Mailbox {
    pub fn mails(&self) -> Vec<ReceivedMail> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, mail: ReceivedMail) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mail);
    }
}

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting SendGrid testing server on {host}:{port}");
    info!("SendGrid mail send endpoint: http://{host}:{port}{MAIL_SEND_ROUTE}");
    info!("API key: {api_key:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key, Mailbox::default()))
        .await
        .context("Failed to start HTTP server")
}

/// Start a testing server on an ephemeral localhost port in the background.
///
/// Returns the bound address and the mailbox receiving accepted mails.
pub async fn spawn(api_key: impl Into<String>) -> anyhow::Result<(SocketAddr, Mailbox)> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to ephemeral port")?;
    let addr = listener.local_addr()?;
    let mailbox = Mailbox::default();
    let router = router(api_key.into(), mailbox.clone());

    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok((addr, mailbox))
}

pub fn router(api_key: String, mailbox: Mailbox) -> Router<()> {
    Router::new()
        .route(MAIL_SEND_ROUTE, routing::post(mail_send))
        .with_state(Arc::new(ServerState { api_key, mailbox }))
}

struct ServerState {
    api_key: String,
    mailbox: Mailbox,
}

#[derive(Deserialize)]
struct MailSendRequest {
    #[serde(default)]
    personalizations: Vec<Personalization>,
    from: Option<Address>,
    reply_to: Option<Address>,
    subject: Option<String>,
    #[serde(default)]
    content: Vec<Content>,
}

#[derive(Deserialize)]
struct Personalization {
    #[serde(default)]
    to: Vec<Address>,
}

#[derive(Deserialize)]
struct Address {
    email: String,
}

#[derive(Deserialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

async fn mail_send(
    state: State<Arc<ServerState>>,
    headers: HeaderMap,
    Json(request): Json<MailSendRequest>,
) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|key| !key.is_empty() && key == state.api_key);
    if !authorized {
        return error(
            StatusCode::UNAUTHORIZED,
            None,
            "The provided authorization grant is invalid, expired, or revoked",
        );
    }

    let to = request
        .personalizations
        .into_iter()
        .flat_map(|p| p.to)
        .map(|a| a.email)
        .collect::<Vec<_>>();
    if to.is_empty() {
        return error(
            StatusCode::BAD_REQUEST,
            Some("personalizations.0.to"),
            "The to array is required for all personalization objects",
        );
    }

    let Some(from) = request.from.map(|a| a.email) else {
        return error(
            StatusCode::BAD_REQUEST,
            Some("from"),
            "The from object must be provided for every email send.",
        );
    };

    let Some(subject) = request.subject.filter(|s| !s.is_empty()) else {
        return error(
            StatusCode::BAD_REQUEST,
            Some("subject"),
            "The subject is required.",
        );
    };

    if request.content.is_empty() {
        return error(
            StatusCode::BAD_REQUEST,
            Some("content"),
            "Unless a valid template_id is provided, the content parameter is required.",
        );
    }

    let reply_to = request.reply_to.map(|a| a.email);
    for (field, email) in to
        .iter()
        .map(|e| ("personalizations.0.to", e))
        .chain(std::iter::once(("from", &from)))
        .chain(reply_to.iter().map(|e| ("reply_to", e)))
    {
        if !EMAIL_REGEX.is_match(email) {
            return error(
                StatusCode::BAD_REQUEST,
                Some(field),
                "Does not contain a valid address.",
            );
        }
    }

    let text = request
        .content
        .into_iter()
        .find(|c| c.content_type == "text/plain")
        .map(|c| c.value);

    info!(?to, %from, %subject, "accepted mail");
    state.mailbox.push(ReceivedMail {
        to,
        from,
        reply_to,
        subject,
        text,
    });

    StatusCode::ACCEPTED.into_response()
}

fn error(status: StatusCode, field: Option<&str>, message: &str) -> Response {
    let body = json!({
        "errors": [{ "message": message, "field": field, "help": null }]
    });
    (status, Json(body)).into_response()
}
