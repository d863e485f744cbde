//! Read-only food catalog: lookup by id, substring search by name, and
//! the mock image-recognition stub behind an async boundary.

pub mod vision;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::{FoodItem, NutritionVector};
use crate::errors::FitnessError;

/// Source of known food items. Async because the in-memory sample table
/// stands in for a remote food database; callers that issue a fresh
/// search may simply drop the previous future.
#[async_trait]
pub trait FoodSource: Send + Sync {
    /// Case-insensitive substring match against food names, in catalog
    /// order. An empty or all-whitespace query returns no matches.
    async fn search(&self, query: &str) -> Result<Vec<FoodItem>, FitnessError>;

    /// Exact id match.
    async fn lookup(&self, id: &str) -> Result<Option<FoodItem>, FitnessError>;
}

static SAMPLE_FOODS: Lazy<Vec<FoodItem>> = Lazy::new(|| {
    vec![
        FoodItem::new(
            "1",
            "Apple",
            "1 medium (182g)",
            NutritionVector::new(95.0, 0.5, 25.0, 0.3),
        )
        .with_image("https://images.unsplash.com/photo-1570913149827-d2ac84ab3f9a?q=80&w=100&auto=format"),
        FoodItem::new(
            "2",
            "Grilled Chicken Breast",
            "100g",
            NutritionVector::new(165.0, 31.0, 0.0, 3.6),
        )
        .with_image("https://images.unsplash.com/photo-1626082929543-5bfd85ea6ff6?q=80&w=100&auto=format"),
        FoodItem::new(
            "3",
            "Brown Rice",
            "1 cup cooked (195g)",
            NutritionVector::new(216.0, 5.0, 45.0, 1.8),
        )
        .with_image("https://images.unsplash.com/photo-1536304993881-ff6e9eefa2a6?q=80&w=100&auto=format"),
        FoodItem::new(
            "4",
            "Avocado",
            "1/2 medium (68g)",
            NutritionVector::new(114.0, 1.3, 6.0, 10.5),
        )
        .with_image("https://images.unsplash.com/photo-1601039641847-7857b994d704?q=80&w=100&auto=format"),
        FoodItem::new(
            "5",
            "Salmon",
            "100g",
            NutritionVector::new(208.0, 20.0, 0.0, 13.0),
        )
        .with_image("https://images.unsplash.com/photo-1599084993091-1cb5c0721cc6?q=80&w=100&auto=format"),
    ]
});

/// In-memory catalog seeded with the sample food table.
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    items: Vec<FoodItem>,
}

impl SampleCatalog {
    pub fn new() -> Self {
        Self {
            items: SAMPLE_FOODS.clone(),
        }
    }

    pub fn with_items(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodSource for SampleCatalog {
    async fn search(&self, query: &str) -> Result<Vec<FoodItem>, FitnessError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .items
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<FoodItem>, FitnessError> {
        Ok(self.items.iter().find(|food| food.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_matches_substrings_case_insensitively() {
        let catalog = SampleCatalog::new();
        let matches = catalog.search("chicken").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Grilled Chicken Breast");

        let matches = catalog.search("RICE").await.unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn search_misses_and_empty_queries_return_nothing() {
        let catalog = SampleCatalog::new();
        assert!(catalog.search("zzz").await.unwrap().is_empty());
        assert!(catalog.search("").await.unwrap().is_empty());
        assert!(catalog.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookup_finds_exact_ids_only() {
        let catalog = SampleCatalog::new();
        assert_eq!(catalog.lookup("5").await.unwrap().unwrap().name, "Salmon");
        assert!(catalog.lookup("99").await.unwrap().is_none());
    }
}
