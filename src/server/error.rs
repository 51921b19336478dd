use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Generic message returned for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to fetch icons";

/// Request-level failure, mapped onto an HTTP status and JSON body
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to put in a response body or a log line
    pub fn details(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Internal(err) => format!("{:#}", err),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::BadRequest(message) => json!({ "error": message }),
            ApiError::Internal(_) => json!({
                "error": INTERNAL_ERROR_MESSAGE,
                "details": self.details(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
