use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use quiz_storage::quiz::Quiz;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    quiz_service::{QuizService, DEFAULT_QUIZ_COUNT},
    types::{AppError, QueryParams},
};

/// Query parameters for listing quizzes
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListQuizzesQuery {
    /// Category to draw quizzes from
    pub category: Option<String>,
    /// Number of quizzes, 1 to 50 (defaults to 10)
    #[schemars(with = "Option<i64>")]
    pub count: Option<String>,
}

impl ListQuizzesQuery {
    /// Requested count, falling back to the default when absent or unparsable
    fn count(&self) -> i64 {
        self.count
            .as_deref()
            .and_then(|count| count.parse().ok())
            .unwrap_or(DEFAULT_QUIZ_COUNT)
    }
}

/// List a random selection of quizzes from a category
///
/// # Returns
///
/// Returns `200 OK` with up to `count` distinct quizzes in random order
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - `category` is missing or not a known category
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn list_quizzes(
    Extension(quiz_service): Extension<Arc<QuizService>>,
    QueryParams(query): QueryParams<ListQuizzesQuery>,
) -> Result<Json<Vec<Quiz>>, AppError> {
    let category = query.category.as_deref().unwrap_or_default();
    if category.is_empty() {
        return Err(AppError::bad_request("category parameter is required"));
    }

    let quizzes = quiz_service
        .get_quizzes_by_category(category, query.count())
        .await?;

    Ok(Json(quizzes))
}

/// Get a quiz by ID
///
/// # Arguments
///
/// * `id` - Path parameter containing the quiz ID
///
/// # Returns
///
/// Returns `200 OK` with the quiz on success
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - Empty quiz ID
/// - `404 NOT_FOUND` - No category holds a quiz with this ID
/// - `500 INTERNAL_SERVER_ERROR` - The stored quiz cannot be decoded
pub async fn get_quiz(
    Path(id): Path<String>,
    Extension(quiz_service): Extension<Arc<QuizService>>,
) -> Result<Json<Quiz>, AppError> {
    let quiz = quiz_service.get_quiz_by_id(&id).await?;

    Ok(Json(quiz))
}

/// `GET /api/quiz/` with an empty ID segment
///
/// Runs the same lookup as [`get_quiz`] so the empty ID is rejected with `400`.
pub async fn get_quiz_without_id(
    Extension(quiz_service): Extension<Arc<QuizService>>,
) -> Result<Json<Quiz>, AppError> {
    let quiz = quiz_service.get_quiz_by_id("").await?;

    Ok(Json(quiz))
}
