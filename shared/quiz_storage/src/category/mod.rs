//! Quiz categories
//!
//! Categories are not persisted. The catalog is built once at startup and is
//! shared by the request validation (allow-list) and by the quiz point lookup
//! (the set of partitions probed for an id).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A subject grouping for quiz items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    /// Unique category identifier, also the partition suffix in storage
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown on the category card
    pub description: String,
    /// Thumbnail image URL
    pub thumbnail: String,
}

impl Category {
    /// Creates a new category descriptor
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

/// Immutable list of the categories served by this deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Creates a catalog from an explicit list of categories
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// All categories, in display order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category identifiers, in display order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.id.as_str())
    }

    /// Whether `id` names a category in this catalog
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids().any(|known| known == id)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(vec![
            Category::new(
                "flags",
                "国旗",
                "世界各国の国旗を学習",
                "https://cdn.example.com/thumbnails/flags.jpg",
            ),
            Category::new(
                "animals",
                "動物",
                "様々な動物を学習",
                "https://cdn.example.com/thumbnails/animals.jpg",
            ),
            Category::new(
                "words",
                "言葉",
                "基本的な単語を学習",
                "https://cdn.example.com/thumbnails/words.jpg",
            ),
        ])
    }
}
