// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    PaymentFailed(String),

    #[error("{message}")]
    ExternalApi {
        message: String,
        detail: Option<serde_json::Value>,
    },

    #[error("Duplicate transaction id")]
    DuplicateKey,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MongoDB(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PaymentFailed(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ExternalApi { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
            AppError::DuplicateKey => {
                (StatusCode::CONFLICT, "Duplicate transaction id".to_string())
            }
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });

        // Transport failures carry the raw gateway payload through for
        // manual investigation.
        if let AppError::ExternalApi {
            detail: Some(detail),
            ..
        } = &self
        {
            body["error"] = detail.clone();
        }

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ValidationError(format!("JSON parsing error: {}", err))
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn payment_failed(msg: impl Into<String>) -> Self {
        AppError::PaymentFailed(msg.into())
    }

    pub fn external_api(msg: impl Into<String>, detail: Option<serde_json::Value>) -> Self {
        AppError::ExternalApi {
            message: msg.into(),
            detail,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let response = AppError::invalid_data("Mobile number and amount are required")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn payment_failures_are_client_errors() {
        let response = AppError::payment_failed("Payment initiation failed").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn transport_failures_are_server_errors() {
        let response =
            AppError::external_api("Payment processing failed", Some(json!({"code": "TIMED_OUT"})))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn duplicate_key_is_a_conflict() {
        let response = AppError::DuplicateKey.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
