//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quiz_storage::quiz::QuizStorageError;
use schemars::JsonSchema;
use serde::Serialize;

/// Machine-readable error codes exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum ErrorCode {
    /// Invalid request parameters
    #[serde(rename = "EC001")]
    BadRequest,
    /// Requested resource does not exist
    #[serde(rename = "EC002")]
    NotFound,
    /// Store failure or any unclassified error
    #[serde(rename = "EC003")]
    Internal,
}

impl ErrorCode {
    /// Wire representation of the code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "EC001",
            Self::NotFound => "EC002",
            Self::Internal => "EC003",
        }
    }

    /// HTTP status the code maps to
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message sent with the code
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "リクエストパラメータエラー",
            Self::NotFound => "リソースが見つからない",
            Self::Internal => "内部サーバーエラー",
        }
    }
}

/// API error response envelope
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
    /// Error details
    error: ErrorBody,
}

/// Error body containing code, message and optional diagnostics
#[derive(Debug, Serialize, JsonSchema)]
struct ErrorBody {
    /// Machine-readable error code
    code: ErrorCode,
    /// Human-readable error message
    message: &'static str,
    /// Diagnostic details, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Application error carrying a code and optional diagnostic details
#[derive(Debug)]
pub struct AppError {
    code: ErrorCode,
    details: Option<String>,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(code: ErrorCode, details: Option<String>) -> Self {
        Self { code, details }
    }

    /// Client input was invalid
    #[must_use]
    pub fn bad_request(details: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, Some(details.into()))
    }

    /// The requested resource does not exist
    #[must_use]
    pub fn not_found(details: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, Some(details.into()))
    }

    /// Internal failure, `cause` becomes the diagnostic details
    #[must_use]
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::Internal, Some(cause.to_string()))
    }

    /// Error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Diagnostic details
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "[{}] {}: {details}", self.code.as_str(), self.code.message()),
            None => write!(f, "[{}] {}", self.code.as_str(), self.code.message()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.status();

        // Log the error based on status code
        match status.as_u16() {
            400..=499 => tracing::warn!("Client error: {self}"),
            500..=599 => tracing::error!("Server error: {self}"),
            _ => {}
        }

        let body = ApiErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.code.message(),
                details: self.details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert quiz storage errors to application errors
impl From<QuizStorageError> for AppError {
    fn from(err: QuizStorageError) -> Self {
        match err {
            QuizStorageError::QuizNotFound(id) => {
                Self::not_found(format!("quiz with id '{id}' not found"))
            }
            QuizStorageError::DynamoDbQueryError(_)
            | QuizStorageError::DynamoDbGetError(_)
            | QuizStorageError::SerializationError(_) => Self::internal(err),
        }
    }
}

/// Anything not classified above is an internal error
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(format!("{err:#}"))
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn response_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_envelope() {
        let (status, body) = response_json(AppError::bad_request("invalid category specified")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": "EC001",
                    "message": "リクエストパラメータエラー",
                    "details": "invalid category specified"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_details_are_omitted_when_absent() {
        let (status, body) = response_json(AppError::new(ErrorCode::Internal, None)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": { "code": "EC003", "message": "内部サーバーエラー" } })
        );
    }

    #[tokio::test]
    async fn test_quiz_not_found_maps_to_ec002() {
        let err = AppError::from(QuizStorageError::QuizNotFound("q42".to_string()));

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.details(), Some("quiz with id 'q42' not found"));

        let (status, body) = response_json(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "EC002");
    }

    #[test]
    fn test_storage_failures_map_to_ec003() {
        let err = AppError::from(QuizStorageError::SerializationError(
            "invalid type: number, expected a sequence".to_string(),
        ));

        assert_eq!(err.code(), ErrorCode::Internal);
        assert!(err.details().unwrap().contains("expected a sequence"));
    }

    #[test]
    fn test_unclassified_errors_map_to_ec003() {
        let err = AppError::from(anyhow::anyhow!("connection reset"));

        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.details(), Some("connection reset"));
    }

    #[test]
    fn test_code_table() {
        assert_eq!(ErrorCode::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorCode::BadRequest.as_str(), "EC001");
        assert_eq!(ErrorCode::NotFound.as_str(), "EC002");
        assert_eq!(ErrorCode::Internal.as_str(), "EC003");
        assert_eq!(ErrorCode::BadRequest.message(), "リクエストパラメータエラー");
        assert_eq!(ErrorCode::NotFound.message(), "リソースが見つからない");
        assert_eq!(ErrorCode::Internal.message(), "内部サーバーエラー");
    }
}
