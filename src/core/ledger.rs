//! The nutrition ledger: authoritative owner of the currently selected
//! day's meal entries and running totals.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::core::notify::{LedgerEvent, Notifier, TracingNotifier};
use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{DailyLog, FoodItem, GoalProfile, MealEntry, MealType, NutritionVector, ProgressReport};

/// Service object owning the live `DailyLog`. Constructed explicitly and
/// injected into the presentation layer; single control flow mutates it,
/// so every operation runs to completion before the next.
pub struct NutritionLedger {
    log: DailyLog,
    notifier: Box<dyn Notifier>,
}

impl NutritionLedger {
    pub fn new(date: NaiveDate, notifier: Box<dyn Notifier>) -> Self {
        Self {
            log: DailyLog::new(date),
            notifier,
        }
    }

    /// Ledger with the default tracing notifier.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(date, Box::new(TracingNotifier))
    }

    /// Switches the active day, replacing the current log with a fresh
    /// empty one for `date`. Always succeeds; logs for previous dates
    /// are not retained. Reselecting the current date also resets.
    pub fn select_date(&mut self, date: NaiveDate) {
        debug!(%date, dropped_meals = self.log.meals.len(), "resetting daily log");
        self.log = DailyLog::new(date);
    }

    /// Logs `quantity` servings of `food` into `meal_type`.
    ///
    /// Quantity must be finite and positive; anything else is rejected
    /// here rather than silently defaulted (form-level fallbacks belong
    /// to the presentation layer). Returns a clone of the created entry
    /// so callers can reference it immediately.
    pub fn add_entry(
        &mut self,
        food: FoodItem,
        quantity: f64,
        meal_type: MealType,
    ) -> ServiceResult<MealEntry> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "quantity must be a positive number, got {quantity}"
            )));
        }

        let entry = MealEntry::new(food, quantity, meal_type);
        let snapshot = entry.clone();
        self.log.push_entry(entry);

        self.notifier.notify(&LedgerEvent::MealAdded {
            food_name: snapshot.food.name.clone(),
            meal_type,
        });
        Ok(snapshot)
    }

    /// Removes the entry with `entry_id` and subtracts its contribution.
    /// An unknown id is an idempotent no-op returning `None`; a stale
    /// remove from another surface is a normal race, not an error.
    pub fn remove_entry(&mut self, entry_id: Uuid) -> Option<MealEntry> {
        let removed = self.log.remove_entry(entry_id)?;
        self.notifier.notify(&LedgerEvent::MealRemoved {
            food_name: removed.food.name.clone(),
        });
        Some(removed)
    }

    /// Snapshot of the running totals.
    pub fn totals(&self) -> NutritionVector {
        self.log.total_nutrition
    }

    /// Entries in insertion order. Grouping by slot stays a view
    /// concern; `meals_of` is a convenience filter for those views.
    pub fn meals(&self) -> &[MealEntry] {
        &self.log.meals
    }

    pub fn meals_of(&self, meal_type: MealType) -> impl Iterator<Item = &MealEntry> {
        self.log
            .meals
            .iter()
            .filter(move |meal| meal.meal_type == meal_type)
    }

    pub fn progress_against(&self, goals: &GoalProfile) -> ProgressReport {
        self.totals().percentage_of(goals)
    }

    pub fn date(&self) -> NaiveDate {
        self.log.date
    }

    pub fn log(&self) -> &DailyLog {
        &self.log
    }
}
