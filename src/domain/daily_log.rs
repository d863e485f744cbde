use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::meal::MealEntry;
use crate::domain::nutrition::NutritionVector;

/// The day's logged meals plus their running nutrition total.
///
/// Invariant: `total_nutrition` equals the componentwise sum of every
/// entry's contribution, within floating-point tolerance. Both mutation
/// paths maintain the total incrementally; `summed_contributions` exists
/// so callers can verify the invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    pub total_nutrition: NutritionVector,
}

impl DailyLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            total_nutrition: NutritionVector::zero(),
        }
    }

    /// Appends an entry in insertion order and folds its contribution
    /// into the running total.
    pub fn push_entry(&mut self, entry: MealEntry) -> Uuid {
        let id = entry.id;
        self.total_nutrition += entry.contribution();
        self.meals.push(entry);
        id
    }

    /// Removes the entry with `id`, subtracting its contribution. An
    /// unknown id leaves the log untouched.
    pub fn remove_entry(&mut self, id: Uuid) -> Option<MealEntry> {
        let index = self.meals.iter().position(|meal| meal.id == id)?;
        let entry = self.meals.remove(index);
        self.total_nutrition = (self.total_nutrition - entry.contribution()).clamp_negative_drift();
        Some(entry)
    }

    pub fn entry(&self, id: Uuid) -> Option<&MealEntry> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Recomputes the total from scratch. Used to verify the running
    /// total rather than to maintain it.
    pub fn summed_contributions(&self) -> NutritionVector {
        self.meals
            .iter()
            .fold(NutritionVector::zero(), |acc, meal| {
                acc + meal.contribution()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::FoodItem;
    use crate::domain::meal::MealType;
    use crate::domain::nutrition::DRIFT_EPSILON;

    fn apple() -> FoodItem {
        FoodItem::new(
            "1",
            "Apple",
            "1 medium (182g)",
            NutritionVector::new(95.0, 0.5, 25.0, 0.3),
        )
    }

    fn log_for_test() -> DailyLog {
        DailyLog::new(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap())
    }

    #[test]
    fn push_and_remove_keep_total_in_sync() {
        let mut log = log_for_test();
        let id = log.push_entry(MealEntry::new(apple(), 2.0, MealType::Breakfast));
        assert!(log
            .total_nutrition
            .approx_eq(&log.summed_contributions(), DRIFT_EPSILON));

        log.remove_entry(id).unwrap();
        assert!(log.is_empty());
        assert!(log
            .total_nutrition
            .approx_eq(&NutritionVector::zero(), DRIFT_EPSILON));
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut log = log_for_test();
        log.push_entry(MealEntry::new(apple(), 1.0, MealType::Snack));
        let before = log.total_nutrition;
        assert!(log.remove_entry(Uuid::new_v4()).is_none());
        assert_eq!(log.meals.len(), 1);
        assert!(log.total_nutrition.approx_eq(&before, DRIFT_EPSILON));
    }
}
