/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registry_storage::StorageError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{error}: {message}")]
    MissingParameter {
        error: &'static str,
        message: &'static str,
    },

    #[error("User {0} not found")]
    NotFound(String),

    #[error("User {0} already exists in database")]
    DuplicateKey(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Neither `X-Username` nor `Username` carried a value
    pub fn missing_username_header() -> Self {
        Self::MissingParameter {
            error: "Username header missing",
            message: "Please provide username in X-Username or Username header",
        }
    }

    /// `POST /api/users` without a usable `username` field
    pub fn missing_username_field() -> Self {
        Self::MissingParameter {
            error: "Username is required",
            message: "Please provide username in request body",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateKey(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) | ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ApiError::MissingParameter { error, message } => json!({
                "error": error,
                "message": message,
            }),
            // Verify clients read `success` and `username`, so the 404 keeps them
            ApiError::NotFound(ref username) => json!({
                "success": false,
                "error": "User not found",
                "message": self.to_string(),
                "username": username,
            }),
            ApiError::DuplicateKey(_) => json!({
                "error": "User already exists",
                "message": self.to_string(),
            }),
            ApiError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "Internal server error",
                    "message": "Database error",
                })
            }
            ApiError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                json!({
                    "error": "Internal server error",
                    "message": "Configuration error",
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_header_is_bad_request() {
        let (status, body) = body_json(ApiError::missing_username_header()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Username header missing");
        assert_eq!(
            body["message"],
            "Please provide username in X-Username or Username header"
        );
    }

    #[tokio::test]
    async fn test_not_found_keeps_verify_fields() {
        let (status, body) = body_json(ApiError::NotFound("mallory".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["username"], "mallory");
        assert_eq!(body["message"], "User mallory not found");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let (status, body) = body_json(ApiError::DuplicateKey("alice".to_string())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "User already exists");
        assert_eq!(body["message"], "User alice already exists in database");
    }

    #[tokio::test]
    async fn test_storage_error_hides_details() {
        let err = ApiError::Storage(StorageError::connection("disk on fire"));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Database error");
        assert!(!body.to_string().contains("disk on fire"));
    }
}
