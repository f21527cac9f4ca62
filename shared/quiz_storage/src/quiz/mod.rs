//! Quiz records and the quiz retrieval data path
//!
//! Quizzes live in a single table partitioned by category. Every item carries a
//! partition key `CATEGORY#<category>` and a sort key `QUIZ#<id>`, both derived
//! from the quiz itself.

mod error;
mod repository;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

pub use error::{QuizStorageError, QuizStorageResult};
pub use repository::{shuffle_and_truncate, QuizRepository};

/// Prefix of every quiz partition key
pub const PARTITION_KEY_PREFIX: &str = "CATEGORY#";

/// Prefix of every quiz sort key
pub const SORT_KEY_PREFIX: &str = "QUIZ#";

/// Builds the partition key holding all quizzes of `category`
#[must_use]
pub fn partition_key(category: &str) -> String {
    format!("{PARTITION_KEY_PREFIX}{category}")
}

/// Builds the sort key addressing quiz `id` inside its partition
#[must_use]
pub fn sort_key(id: &str) -> String {
    format!("{SORT_KEY_PREFIX}{id}")
}

/// `DynamoDB` attribute names for the quiz table
#[derive(Debug, Clone, Copy, Display)]
#[strum(serialize_all = "camelCase")]
pub enum QuizAttribute {
    /// Partition key, `CATEGORY#<category>`
    #[strum(serialize = "PK")]
    Pk,
    /// Sort key, `QUIZ#<id>`
    #[strum(serialize = "SK")]
    Sk,
    /// Quiz identifier
    Id,
}

/// A quiz question as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Identifier, unique within its category
    pub id: String,
    /// Image shown with the question
    pub question_image_url: String,
    /// Audio played with the question
    pub question_audio_url: String,
    /// The correct answer
    pub correct_answer: String,
    /// Answer choices in display order
    pub choices: Vec<String>,
    /// Category identifier
    pub category: String,
    /// Explanation shown after answering
    pub explanation: String,
    /// Creation timestamp
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[schemars(with = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    /// Creates a quiz stamped with the current time
    ///
    /// `created_at` and `updated_at` are set to the same instant.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        question_image_url: impl Into<String>,
        question_audio_url: impl Into<String>,
        correct_answer: impl Into<String>,
        choices: Vec<String>,
        category: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            question_image_url: question_image_url.into(),
            question_audio_url: question_audio_url.into(),
            correct_answer: correct_answer.into(),
            choices,
            category: category.into(),
            explanation: explanation.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Partition key of this quiz
    #[must_use]
    pub fn partition_key(&self) -> String {
        partition_key(&self.category)
    }

    /// Sort key of this quiz
    #[must_use]
    pub fn sort_key(&self) -> String {
        sort_key(&self.id)
    }
}

/// Stored shape of a quiz, including its composite key
///
/// Attributes missing from an item decode to empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizItem {
    /// Partition key
    #[serde(rename = "PK")]
    pub pk: String,
    /// Sort key
    #[serde(rename = "SK")]
    pub sk: String,
    /// Quiz identifier
    pub id: String,
    /// Question image URL
    pub question_image_url: String,
    /// Question audio URL
    pub question_audio_url: String,
    /// Correct answer
    pub correct_answer: String,
    /// Answer choices
    pub choices: Vec<String>,
    /// Category identifier
    pub category: String,
    /// Explanation text
    pub explanation: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizItem {
    fn from(quiz: &Quiz) -> Self {
        Self {
            pk: quiz.partition_key(),
            sk: quiz.sort_key(),
            id: quiz.id.clone(),
            question_image_url: quiz.question_image_url.clone(),
            question_audio_url: quiz.question_audio_url.clone(),
            correct_answer: quiz.correct_answer.clone(),
            choices: quiz.choices.clone(),
            category: quiz.category.clone(),
            explanation: quiz.explanation.clone(),
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
        }
    }
}

impl From<QuizItem> for Quiz {
    fn from(item: QuizItem) -> Self {
        Self {
            id: item.id,
            question_image_url: item.question_image_url,
            question_audio_url: item.question_audio_url,
            correct_answer: item.correct_answer,
            choices: item.choices,
            category: item.category,
            explanation: item.explanation,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
