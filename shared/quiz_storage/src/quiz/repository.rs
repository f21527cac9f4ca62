use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};
use serde_dynamo::from_item;

use super::{partition_key, sort_key, Quiz, QuizItem, QuizStorageError, QuizStorageResult};
use crate::category::CategoryCatalog;
use crate::store::QuizStore;

/// Reads quizzes from a partitioned store
pub struct QuizRepository {
    store: Arc<dyn QuizStore>,
    catalog: Arc<CategoryCatalog>,
}

impl QuizRepository {
    /// Creates a new repository
    ///
    /// # Arguments
    ///
    /// * `store` - Partitioned store holding the quiz items
    /// * `catalog` - Categories probed by [`QuizRepository::get_by_id`]
    #[must_use]
    pub fn new(store: Arc<dyn QuizStore>, catalog: Arc<CategoryCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Returns a random selection of up to `count` quizzes from `category`
    ///
    /// The whole partition is read and shuffled before truncation, so the
    /// result is a uniformly random subset without duplicates. A `count` of
    /// zero or less returns the whole partition, still shuffled.
    ///
    /// # Errors
    ///
    /// Returns `QuizStorageError` if the store query fails or any item cannot
    /// be decoded
    pub async fn get_by_category(&self, category: &str, count: i64) -> QuizStorageResult<Vec<Quiz>> {
        let items = self.store.query_partition(&partition_key(category)).await?;

        let mut quizzes = items
            .into_iter()
            .map(|item| from_item::<_, QuizItem>(item).map(Quiz::from))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(category, found = quizzes.len(), count, "Loaded quiz partition");

        shuffle_and_truncate(&mut quizzes, count, &mut rand::thread_rng());

        Ok(quizzes)
    }

    /// Finds a quiz by id by probing each catalog category in order
    ///
    /// A failed probe is logged and treated as a miss for that category, so a
    /// store outage on the owning partition surfaces as `QuizNotFound`.
    ///
    /// # Errors
    ///
    /// Returns `QuizStorageError::QuizNotFound` if no category holds the quiz,
    /// or `QuizStorageError::SerializationError` if the matching item cannot be
    /// decoded
    pub async fn get_by_id(&self, id: &str) -> QuizStorageResult<Quiz> {
        let sort_key = sort_key(id);

        for category in self.catalog.ids() {
            match self.store.get_item(&partition_key(category), &sort_key).await {
                Ok(Some(item)) => {
                    let item: QuizItem = from_item(item)?;
                    return Ok(item.into());
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(category, id, "Quiz lookup probe failed, trying next category: {err}");
                }
            }
        }

        Err(QuizStorageError::QuizNotFound(id.to_string()))
    }
}

/// Shuffles `items` in place and keeps the first `count` of them
///
/// `count` values of zero or less, or at least `items.len()`, keep every item.
pub fn shuffle_and_truncate<T, R>(items: &mut Vec<T>, count: i64, rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);

    if let Ok(limit) = usize::try_from(count) {
        if limit > 0 && limit < items.len() {
            items.truncate(limit);
        }
    }
}
