//! Partitioned key-value store access
//!
//! The repository only needs two primitives from the store: read every item of
//! a partition, and read one item by its composite key.

mod dynamodb;
#[cfg(feature = "test-utils")]
mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

pub use dynamodb::DynamoQuizStore;
#[cfg(feature = "test-utils")]
pub use memory::MemoryQuizStore;

use crate::quiz::QuizStorageResult;

/// A raw store item, keyed by attribute name
pub type Item = HashMap<String, AttributeValue>;

/// Read access to a store partitioned by `PK` and sorted by `SK`
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Returns every item whose partition key equals `partition_key`
    ///
    /// # Errors
    ///
    /// Returns `QuizStorageError` if the store cannot be queried
    async fn query_partition(&self, partition_key: &str) -> QuizStorageResult<Vec<Item>>;

    /// Returns the item addressed by (`partition_key`, `sort_key`), if any
    ///
    /// # Errors
    ///
    /// Returns `QuizStorageError` if the store cannot be read
    async fn get_item(&self, partition_key: &str, sort_key: &str) -> QuizStorageResult<Option<Item>>;
}
