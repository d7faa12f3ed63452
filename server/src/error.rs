//! HTTP error responses.
//!
//! Every failure is rendered as `{"error": "<fixed message>"}`. Store errors
//! are logged with their cause before being flattened into the fixed text.
//! A body that does not decode as the expected JSON object is a 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::ErrorBody;
use crate::store::StoreError;

pub const LIST_FAILED: &str = "Failed to fetch todos";
pub const CREATE_FAILED: &str = "Failed to create todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const ID_REQUIRED: &str = "ID is required";
pub const NOT_FOUND: &str = "Todo not found";
pub const INVALID_BODY: &str = "Invalid request body";

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
}

impl AppError {
    pub const fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    pub const fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: NOT_FOUND,
        }
    }

    pub const fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    /// Map a store failure, using `message` for anything but a missing record.
    pub fn from_store(err: StoreError, message: &'static str) -> Self {
        match err {
            StoreError::NotFound => Self::not_found(),
            other => {
                tracing::error!(error = %other, "{message}");
                Self::internal(message)
            }
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(error = %err, "rejected request body");
        Self::bad_request(INVALID_BODY)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_store_error_maps_to_404() {
        let err = AppError::from_store(StoreError::NotFound, UPDATE_FAILED);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), NOT_FOUND);
    }

    #[test]
    fn database_error_maps_to_500_with_fixed_message() {
        let err = AppError::from_store(StoreError::Database(sqlx::Error::PoolClosed), LIST_FAILED);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), LIST_FAILED);
    }

    #[tokio::test]
    async fn response_carries_error_field() {
        let response = AppError::bad_request(TITLE_REQUIRED).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Title is required" }));
    }

    #[test]
    fn json_decode_error_maps_to_400() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(decode);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), INVALID_BODY);
    }
}
