use elevate_di::{provider, Provides};
use elevate_extern_contracts::sendgrid::{
    SendgridApiService, SendgridMail, SendgridMailSendResponse,
};
use elevate_extern_impl::sendgrid::{SendgridApiServiceConfig, SendgridApiServiceImpl};
use elevate_testing::sendgrid::{Mailbox, ReceivedMail, MAIL_SEND_ROUTE};
use pretty_assertions::assert_eq;

const API_KEY: &str = "SG.test-api-key";

#[tokio::test]
async fn accepted() {
    let (sut, mailbox) = make_sut(Some(API_KEY)).await;

    let result = sut.mail_send(make_mail()).await.unwrap();

    assert_eq!(result, SendgridMailSendResponse::Accepted);
    assert_eq!(
        mailbox.mails(),
        [ReceivedMail {
            to: vec!["owner@example.com".into()],
            from: "noreply@example.com".into(),
            reply_to: Some("juan@example.com".into()),
            subject: "New message from Juan Dela Cruz".into(),
            text: Some("Hi".into()),
        }]
    );
}

#[tokio::test]
async fn without_reply_to() {
    let (sut, mailbox) = make_sut(Some(API_KEY)).await;

    let result = sut
        .mail_send(SendgridMail {
            reply_to: None,
            ..make_mail()
        })
        .await
        .unwrap();

    assert_eq!(result, SendgridMailSendResponse::Accepted);
    assert_eq!(mailbox.mails()[0].reply_to, None);
}

#[tokio::test]
async fn missing_api_key() {
    let (sut, mailbox) = make_sut(None).await;

    let result = sut.mail_send(make_mail()).await.unwrap();

    assert_eq!(
        result,
        SendgridMailSendResponse::Rejected {
            status: 401,
            errors: vec![
                "The provided authorization grant is invalid, expired, or revoked".into()
            ],
        }
    );
    assert!(mailbox.mails().is_empty());
}

#[tokio::test]
async fn invalid_reply_to() {
    let (sut, mailbox) = make_sut(Some(API_KEY)).await;

    let result = sut
        .mail_send(SendgridMail {
            reply_to: Some("juan".into()),
            ..make_mail()
        })
        .await
        .unwrap();

    assert_eq!(
        result,
        SendgridMailSendResponse::Rejected {
            status: 400,
            errors: vec!["Does not contain a valid address.".into()],
        }
    );
    assert!(mailbox.mails().is_empty());
}

#[tokio::test]
async fn unreachable() {
    let config = SendgridApiServiceConfig::new(
        Some(API_KEY.to_owned().into()),
        Some("http://127.0.0.1:1/v3/mail/send".parse().unwrap()),
    );
    let sut = build(config);

    let result = sut.mail_send(make_mail()).await;

    assert!(result.is_err());
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

async fn make_sut(api_key: Option<&str>) -> (SendgridApiServiceImpl, Mailbox) {
    let (addr, mailbox) = elevate_testing::sendgrid::spawn(API_KEY).await.unwrap();
    let endpoint = format!("http://{addr}{MAIL_SEND_ROUTE}").parse().unwrap();
    let config =
        SendgridApiServiceConfig::new(api_key.map(|key| key.to_owned().into()), Some(endpoint));

    (build(config), mailbox)
}

fn build(config: SendgridApiServiceConfig) -> SendgridApiServiceImpl {
    provider! {
        Provider { sendgrid_api_service_config: SendgridApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        sendgrid_api_service_config: config,
    };

    provider.provide()
}
