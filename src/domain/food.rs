use serde::{Deserialize, Serialize};

use crate::domain::nutrition::NutritionVector;

/// Immutable catalog record. Referenced by ledger entries, never mutated.
/// `serving_size` is a descriptive label ("1 medium (182g)"), not parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub serving_size: String,
    pub nutrition: NutritionVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        serving_size: impl Into<String>,
        nutrition: NutritionVector,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            serving_size: serving_size.into(),
            nutrition,
            image: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}
