//! Error types for quiz storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{get_item::GetItemError, query::QueryError};
use thiserror::Error;

/// Result type alias for quiz storage operations
pub type QuizStorageResult<T> = Result<T, QuizStorageError>;

/// Storage error types for quiz operations
#[derive(Debug, Error)]
pub enum QuizStorageError {
    /// Failed to query a category partition from `DynamoDB`
    #[error("Failed to query quizzes from DynamoDB: {0:?}")]
    DynamoDbQueryError(#[from] SdkError<QueryError>),

    /// Failed to get a single quiz item from `DynamoDB`
    #[error("Failed to get quiz from DynamoDB: {0:?}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to convert between a quiz and a `DynamoDB` item
    #[error("Failed to parse quiz: {0}")]
    SerializationError(String),

    /// No partition holds a quiz with this id
    #[error("Quiz not found: {0}")]
    QuizNotFound(String),
}

impl From<serde_dynamo::Error> for QuizStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
