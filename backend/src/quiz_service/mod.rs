//! Request validation in front of the quiz repository
//!
//! Input checks run here, before any store access. Storage errors are mapped
//! into the API error taxonomy on the way out.

use std::sync::Arc;

use quiz_storage::{
    category::{Category, CategoryCatalog},
    quiz::{Quiz, QuizRepository},
};

use crate::types::AppError;

/// Number of quizzes returned when the requested count is out of range
pub const DEFAULT_QUIZ_COUNT: i64 = 10;

/// Smallest accepted quiz count
pub const MIN_QUIZ_COUNT: i64 = 1;

/// Largest accepted quiz count
pub const MAX_QUIZ_COUNT: i64 = 50;

/// Clamps a requested quiz count into the accepted range
///
/// Out of range values are replaced with [`DEFAULT_QUIZ_COUNT`], never rejected.
#[must_use]
pub const fn effective_count(count: i64) -> i64 {
    if count < MIN_QUIZ_COUNT || count > MAX_QUIZ_COUNT {
        DEFAULT_QUIZ_COUNT
    } else {
        count
    }
}

/// Validates quiz requests and forwards them to the repository
pub struct QuizService {
    repository: QuizRepository,
    catalog: Arc<CategoryCatalog>,
}

impl QuizService {
    /// Creates a new service
    ///
    /// `catalog` is the category allow-list and should be the same catalog the
    /// repository probes for point lookups.
    #[must_use]
    pub const fn new(repository: QuizRepository, catalog: Arc<CategoryCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// All categories
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    /// Returns a random selection of quizzes from `category`
    ///
    /// # Errors
    ///
    /// Returns `EC001` if `category` is not in the catalog, `EC003` if the
    /// store query fails
    pub async fn get_quizzes_by_category(
        &self,
        category: &str,
        count: i64,
    ) -> Result<Vec<Quiz>, AppError> {
        if !self.catalog.contains(category) {
            return Err(AppError::bad_request("invalid category specified"));
        }

        let count = effective_count(count);

        Ok(self.repository.get_by_category(category, count).await?)
    }

    /// Returns the quiz with the given id
    ///
    /// # Errors
    ///
    /// Returns `EC001` if `id` is empty, `EC002` if no category holds the quiz
    pub async fn get_quiz_by_id(&self, id: &str) -> Result<Quiz, AppError> {
        if id.is_empty() {
            return Err(AppError::bad_request("quiz id is required"));
        }

        Ok(self.repository.get_by_id(id).await?)
    }
}
