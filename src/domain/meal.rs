//! Meal entries and the meal-slot enum.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::food::FoodItem;
use crate::domain::nutrition::NutritionVector;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// The four fixed meal slots a logged food can land in.
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Case-insensitive parse of a slot label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        };
        f.write_str(label)
    }
}

/// One logged instance of a food item at a given quantity and meal slot.
/// Owned exclusively by the day's log; removed only by explicit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: Uuid,
    pub food: FoodItem,
    pub quantity: f64,
    pub meal_type: MealType,
    pub logged_at: DateTime<Utc>,
}

impl MealEntry {
    pub fn new(food: FoodItem, quantity: f64, meal_type: MealType) -> Self {
        Self {
            id: Uuid::new_v4(),
            food,
            quantity,
            meal_type,
            logged_at: Utc::now(),
        }
    }

    /// This entry's share of the day's totals.
    pub fn contribution(&self) -> NutritionVector {
        self.food.nutrition.scale(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_labels_round_trip() {
        for meal in MealType::ALL {
            assert_eq!(MealType::from_label(&meal.to_string()), Some(meal));
        }
        assert_eq!(MealType::from_label("BREAKFAST"), Some(MealType::Breakfast));
        assert_eq!(MealType::from_label("brunch"), None);
    }

    #[test]
    fn contribution_scales_per_serving_nutrition() {
        let food = FoodItem::new(
            "1",
            "Apple",
            "1 medium (182g)",
            NutritionVector::new(95.0, 0.5, 25.0, 0.3),
        );
        let entry = MealEntry::new(food, 2.0, MealType::Breakfast);
        let contribution = entry.contribution();
        assert_eq!(contribution.calories, 190.0);
        assert_eq!(contribution.protein, 1.0);
    }
}
