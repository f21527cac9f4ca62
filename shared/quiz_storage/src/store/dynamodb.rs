use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoDbClient};

use super::{Item, QuizStore};
use crate::quiz::{QuizAttribute, QuizStorageResult};

/// Quiz store backed by a `DynamoDB` table with a `PK`/`SK` composite key
pub struct DynamoQuizStore {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl DynamoQuizStore {
    /// Creates a new store
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for quizzes
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }
}

#[async_trait]
impl QuizStore for DynamoQuizStore {
    async fn query_partition(&self, partition_key: &str) -> QuizStorageResult<Vec<Item>> {
        let mut items = Vec::new();
        let mut exclusive_start_key = None;

        // DynamoDB pages query results at 1 MB
        loop {
            let response = self
                .dynamodb_client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#pk = :pk")
                .expression_attribute_names("#pk", QuizAttribute::Pk.to_string())
                .expression_attribute_values(":pk", AttributeValue::S(partition_key.to_string()))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;

            items.extend(response.items.unwrap_or_default());

            match response.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }

    async fn get_item(&self, partition_key: &str, sort_key: &str) -> QuizStorageResult<Option<Item>> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(
                QuizAttribute::Pk.to_string(),
                AttributeValue::S(partition_key.to_string()),
            )
            .key(
                QuizAttribute::Sk.to_string(),
                AttributeValue::S(sort_key.to_string()),
            )
            .send()
            .await?;

        Ok(response.item)
    }
}
