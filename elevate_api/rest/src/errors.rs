use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method not allowed";

// Contact
pub const MISSING_REQUIRED_FIELDS_DETAIL: &str = "Missing required fields";
pub const ERROR_SENDING_EMAIL_DETAIL: &str = "Error sending email";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_DETAIL)
}

/// `{"error": detail}`
pub fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { error: detail })).into_response()
}

/// `{"success": false, "error": detail}`
pub fn failure(code: StatusCode, detail: &'static str) -> Response {
    (
        code,
        Json(ApiFailure {
            success: false,
            error: detail,
        }),
    )
        .into_response()
}

#[derive(Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

#[derive(Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: &'static str,
}
