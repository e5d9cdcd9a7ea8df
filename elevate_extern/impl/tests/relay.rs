use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};

use axum::{extract::State, http::StatusCode, routing, Json, Router};
use elevate_di::{provider, Provides};
use elevate_extern_contracts::relay::{ContactRelayApiService, RelayResponse};
use elevate_extern_impl::relay::{ContactRelayApiServiceConfig, ContactRelayApiServiceImpl};
use elevate_models::contact::ContactSubmission;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::net::TcpListener;

type Received = Arc<Mutex<Vec<Value>>>;

#[tokio::test]
async fn accepted() {
    let (addr, received) = spawn_relay(StatusCode::OK).await;
    let sut = make_sut(addr);

    let result = sut.send(make_submission()).await.unwrap();

    assert_eq!(result, RelayResponse::Accepted);
    assert_eq!(
        *received.lock().unwrap(),
        [serde_json::json!({
            "name": "Juan Dela Cruz",
            "email": "juan@example.com",
            "message": "Hi",
        })]
    );
}

#[tokio::test]
async fn rejected() {
    let (addr, _) = spawn_relay(StatusCode::INTERNAL_SERVER_ERROR).await;
    let sut = make_sut(addr);

    let result = sut.send(make_submission()).await.unwrap();

    assert_eq!(result, RelayResponse::Rejected { status: 500 });
}

#[tokio::test]
async fn unreachable() {
    let sut = make_sut(SocketAddr::from((Ipv4Addr::LOCALHOST, 1)));

    let result = sut.send(make_submission()).await;

    assert!(result.is_err());
}

fn make_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Juan Dela Cruz".to_owned().try_into().unwrap(),
        email: "juan@example.com".parse().unwrap(),
        message: "Hi".to_owned().try_into().unwrap(),
    }
}

async fn spawn_relay(status: StatusCode) -> (SocketAddr, Received) {
    async fn handler(
        State((status, received)): State<(StatusCode, Received)>,
        Json(body): Json<Value>,
    ) -> StatusCode {
        received.lock().unwrap().push(body);
        status
    }

    let received = Received::default();
    let router = Router::new()
        .route("/api/send-email", routing::post(handler))
        .with_state((status, Arc::clone(&received)));

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });

    (addr, received)
}

fn make_sut(addr: SocketAddr) -> ContactRelayApiServiceImpl {
    provider! {
        Provider { contact_relay_api_service_config: ContactRelayApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        contact_relay_api_service_config: ContactRelayApiServiceConfig {
            relay_url: Arc::new(
                format!("http://{addr}/api/send-email").parse().unwrap(),
            ),
        },
    };

    provider.provide()
}
