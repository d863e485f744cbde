use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use fitness_core::catalog::SampleCatalog;
use fitness_core::core::notify::{LedgerEvent, Notifier};
use fitness_core::core::NutritionLedger;
use fitness_core::domain::nutrition::DRIFT_EPSILON;
use fitness_core::domain::{FoodItem, GoalProfile, MealType, NutritionVector};

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &LedgerEvent) {
        self.messages.lock().unwrap().push(event.message());
    }
}

fn sample_food(name: &str) -> FoodItem {
    let catalog = SampleCatalog::new();
    catalog
        .items()
        .iter()
        .find(|food| food.name == name)
        .cloned()
        .unwrap_or_else(|| panic!("sample catalog has no `{name}`"))
}

fn ledger() -> NutritionLedger {
    NutritionLedger::for_date(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap())
}

#[test]
fn totals_track_the_sum_of_contributions() {
    let mut ledger = ledger();
    ledger
        .add_entry(sample_food("Apple"), 2.0, MealType::Breakfast)
        .unwrap();
    ledger
        .add_entry(sample_food("Avocado"), 0.5, MealType::Lunch)
        .unwrap();
    let salmon = ledger
        .add_entry(sample_food("Salmon"), 1.5, MealType::Dinner)
        .unwrap();

    assert!(ledger
        .totals()
        .approx_eq(&ledger.log().summed_contributions(), DRIFT_EPSILON));

    ledger.remove_entry(salmon.id);
    assert!(ledger
        .totals()
        .approx_eq(&ledger.log().summed_contributions(), DRIFT_EPSILON));
}

#[test]
fn removal_is_idempotent() {
    let mut ledger = ledger();
    let apple = ledger
        .add_entry(sample_food("Apple"), 1.0, MealType::Snack)
        .unwrap();

    assert!(ledger.remove_entry(apple.id).is_some());
    let totals_after_first = ledger.totals();

    assert!(ledger.remove_entry(apple.id).is_none());
    assert!(ledger.totals().approx_eq(&totals_after_first, DRIFT_EPSILON));
}

#[test]
fn add_then_remove_restores_previous_totals() {
    let mut ledger = ledger();
    ledger
        .add_entry(sample_food("Brown Rice"), 1.0, MealType::Lunch)
        .unwrap();
    let before = ledger.totals();

    let entry = ledger
        .add_entry(sample_food("Grilled Chicken Breast"), 1.3, MealType::Lunch)
        .unwrap();
    ledger.remove_entry(entry.id);

    assert!(ledger.totals().approx_eq(&before, DRIFT_EPSILON));
}

#[test]
fn selecting_a_new_date_starts_from_zero() {
    let mut ledger = ledger();
    ledger
        .add_entry(sample_food("Salmon"), 1.0, MealType::Dinner)
        .unwrap();

    let next_day = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
    ledger.select_date(next_day);

    assert_eq!(ledger.date(), next_day);
    assert!(ledger.meals().is_empty());
    assert!(ledger
        .totals()
        .approx_eq(&NutritionVector::zero(), DRIFT_EPSILON));
}

#[test]
fn two_apple_servings_at_breakfast() {
    let mut ledger = ledger();
    ledger
        .add_entry(sample_food("Apple"), 2.0, MealType::Breakfast)
        .unwrap();

    let totals = ledger.totals();
    assert!(totals.approx_eq(
        &NutritionVector::new(190.0, 1.0, 50.0, 0.6),
        DRIFT_EPSILON
    ));
    assert_eq!(ledger.meals().len(), 1);
}

#[test]
fn dinner_scenario_leaves_only_the_rice() {
    let mut ledger = ledger();
    let salmon = ledger
        .add_entry(sample_food("Salmon"), 1.0, MealType::Dinner)
        .unwrap();
    ledger
        .add_entry(sample_food("Brown Rice"), 1.0, MealType::Dinner)
        .unwrap();

    ledger.remove_entry(salmon.id);

    assert!(ledger.totals().approx_eq(
        &NutritionVector::new(216.0, 5.0, 45.0, 1.8),
        DRIFT_EPSILON
    ));
    assert_eq!(ledger.meals_of(MealType::Dinner).count(), 1);
}

#[test]
fn zero_goal_metric_reports_zero_percent() {
    let mut ledger = ledger();
    ledger
        .add_entry(sample_food("Apple"), 1.0, MealType::Breakfast)
        .unwrap();

    let goals = GoalProfile {
        calories: 0.0,
        protein: 150.0,
        carbs: 225.0,
        fat: 70.0,
    };
    let report = ledger.progress_against(&goals);
    assert_eq!(report.calories_pct, 0.0);
    assert!(report.carbs_pct > 0.0);
}

#[test]
fn mutations_emit_toast_events() {
    let notifier = RecordingNotifier::default();
    let messages = notifier.messages.clone();
    let mut ledger = NutritionLedger::new(
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
        Box::new(notifier),
    );

    let apple = ledger
        .add_entry(sample_food("Apple"), 1.0, MealType::Breakfast)
        .unwrap();
    ledger.remove_entry(apple.id);
    // A stale remove must stay silent.
    ledger.remove_entry(apple.id);

    let messages = messages.lock().unwrap();
    assert_eq!(
        *messages,
        vec![
            "Added Apple to your breakfast".to_string(),
            "Removed Apple from your log".to_string(),
        ]
    );
}
