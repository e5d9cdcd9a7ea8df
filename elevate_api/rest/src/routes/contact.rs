use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use elevate_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use elevate_models::contact::ContactMessage;

use crate::{
    errors::{
        error, failure, ERROR_SENDING_EMAIL_DETAIL, METHOD_NOT_ALLOWED_DETAIL,
        MISSING_REQUIRED_FIELDS_DETAIL,
    },
    models::{contact::ApiContactMessage, ApiSuccess},
};

pub const SEND_EMAIL_ROUTE: &str = "/api/send-email";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            SEND_EMAIL_ROUTE,
            routing::post(send_email).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn send_email(
    service: State<Arc<impl ContactFeatureService>>,
    body: Result<Json<ApiContactMessage>, JsonRejection>,
) -> Response {
    // A body that is not `application/json`, is empty, is malformed or has a
    // non-string field is treated like one without any fields.
    let message = body.map(|Json(x)| x).unwrap_or_default();
    let Ok(message) = ContactMessage::try_from(message) else {
        return error(StatusCode::BAD_REQUEST, MISSING_REQUIRED_FIELDS_DETAIL);
    };

    match service.send_message(message).await {
        Ok(()) => Json(ApiSuccess { success: true }).into_response(),
        Err(ContactSendMessageError::Send) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            ERROR_SENDING_EMAIL_DETAIL,
        ),
    }
}

async fn method_not_allowed() -> Response {
    error(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_DETAIL)
}
