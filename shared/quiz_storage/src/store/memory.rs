use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;

use super::{Item, QuizStore};
use crate::quiz::{Quiz, QuizItem, QuizStorageError, QuizStorageResult};

/// In-memory partitioned store for tests
///
/// Partitions can be marked as failing, in which case every query and get
/// against them returns a store error. Calls are counted so tests can assert
/// that a code path never touched the store.
#[derive(Default)]
pub struct MemoryQuizStore {
    partitions: Mutex<BTreeMap<String, BTreeMap<String, Item>>>,
    failing_partitions: Mutex<HashSet<String>>,
    query_calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl MemoryQuizStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `quiz` under its derived composite key
    ///
    /// # Errors
    ///
    /// Returns `QuizStorageError::SerializationError` if the quiz cannot be
    /// converted to an item
    pub fn insert(&self, quiz: &Quiz) -> QuizStorageResult<()> {
        let item: Item = serde_dynamo::to_item(QuizItem::from(quiz))?;
        self.insert_item(&quiz.partition_key(), &quiz.sort_key(), item);
        Ok(())
    }

    /// Stores a raw item under an explicit composite key
    pub fn insert_item(&self, partition_key: &str, sort_key: &str, item: Item) {
        self.partitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(partition_key.to_string())
            .or_default()
            .insert(sort_key.to_string(), item);
    }

    /// Makes every access to `partition_key` fail
    pub fn fail_partition(&self, partition_key: &str) {
        self.failing_partitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(partition_key.to_string());
    }

    /// Number of partition queries served so far
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// Number of point lookups served so far
    #[must_use]
    pub fn get_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    fn is_failing(&self, partition_key: &str) -> bool {
        self.failing_partitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(partition_key)
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn query_partition(&self, partition_key: &str) -> QuizStorageResult<Vec<Item>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);

        if self.is_failing(partition_key) {
            return Err(QuizStorageError::DynamoDbQueryError(SdkError::timeout_error(
                format!("partition {partition_key} is unavailable"),
            )));
        }

        Ok(self
            .partitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(partition_key)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_item(&self, partition_key: &str, sort_key: &str) -> QuizStorageResult<Option<Item>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        if self.is_failing(partition_key) {
            return Err(QuizStorageError::DynamoDbGetError(SdkError::timeout_error(
                format!("partition {partition_key} is unavailable"),
            )));
        }

        Ok(self
            .partitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(partition_key)
            .and_then(|partition| partition.get(sort_key).cloned()))
    }
}
