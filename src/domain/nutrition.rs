//! Nutrition arithmetic: the four-field nutrient vector and the
//! goal-percentage computation built on it.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::domain::profile::GoalProfile;

/// Tolerance under which a subtracted total is considered zero.
pub const DRIFT_EPSILON: f64 = 1e-9;

/// Absolute nutrient quantities for one food, entry, or day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionVector {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionVector {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiplies each field by `quantity`. Fractional quantities are
    /// fine; positivity is the caller's responsibility.
    pub fn scale(&self, quantity: f64) -> Self {
        Self {
            calories: self.calories * quantity,
            protein: self.protein * quantity,
            carbs: self.carbs * quantity,
            fat: self.fat * quantity,
        }
    }

    /// Zeroes any component that drifted just below zero after a
    /// subtraction. Larger negative values are left untouched so the
    /// invariant check can catch real accounting mistakes.
    pub fn clamp_negative_drift(mut self) -> Self {
        for value in [
            &mut self.calories,
            &mut self.protein,
            &mut self.carbs,
            &mut self.fat,
        ] {
            if *value < 0.0 && *value > -DRIFT_EPSILON {
                *value = 0.0;
            }
        }
        self
    }

    /// Componentwise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.calories - other.calories).abs() <= epsilon
            && (self.protein - other.protein).abs() <= epsilon
            && (self.carbs - other.carbs).abs() <= epsilon
            && (self.fat - other.fat).abs() <= epsilon
    }

    /// Percent of each daily target reached. A target of zero is a
    /// misconfigured profile, not an error: that metric reports 0.
    pub fn percentage_of(&self, goals: &GoalProfile) -> ProgressReport {
        ProgressReport {
            calories_pct: percent(self.calories, goals.calories),
            protein_pct: percent(self.protein, goals.protein),
            carbs_pct: percent(self.carbs, goals.carbs),
            fat_pct: percent(self.fat, goals.fat),
        }
    }
}

fn percent(actual: f64, goal: f64) -> f64 {
    if goal == 0.0 {
        0.0
    } else {
        actual / goal * 100.0
    }
}

impl Add for NutritionVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Sub for NutritionVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            calories: self.calories - rhs.calories,
            protein: self.protein - rhs.protein,
            carbs: self.carbs - rhs.carbs,
            fat: self.fat - rhs.fat,
        }
    }
}

impl AddAssign for NutritionVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for NutritionVector {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for NutritionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal | protein {:.1}g | carbs {:.1}g | fat {:.1}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// Percent of each daily target reached, computed on read and never
/// stored. Values are unclamped; bar rendering clamps to 100 on its own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    pub calories_pct: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(calories: f64) -> NutritionVector {
        NutritionVector::new(calories, 10.0, 20.0, 5.0)
    }

    #[test]
    fn scale_multiplies_every_field() {
        let scaled = vector(100.0).scale(2.5);
        assert_eq!(scaled.calories, 250.0);
        assert_eq!(scaled.protein, 25.0);
        assert_eq!(scaled.carbs, 50.0);
        assert_eq!(scaled.fat, 12.5);
    }

    #[test]
    fn add_then_sub_round_trips() {
        let base = vector(120.0);
        let other = NutritionVector::new(95.0, 0.5, 25.0, 0.3);
        let result = (base + other) - other;
        assert!(result.approx_eq(&base, DRIFT_EPSILON));
    }

    #[test]
    fn zero_goal_reports_zero_percent() {
        let goals = GoalProfile {
            calories: 0.0,
            protein: 150.0,
            carbs: 225.0,
            fat: 70.0,
        };
        let report = vector(100.0).percentage_of(&goals);
        assert_eq!(report.calories_pct, 0.0);
        assert!((report.protein_pct - (10.0 / 150.0 * 100.0)).abs() < DRIFT_EPSILON);
    }

    #[test]
    fn drift_clamp_only_touches_near_zero_values() {
        let drifted = NutritionVector::new(-1e-12, -5.0, 0.0, 1.0).clamp_negative_drift();
        assert_eq!(drifted.calories, 0.0);
        assert_eq!(drifted.protein, -5.0);
    }
}
