//! User profile and daily nutrition targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Daily nutrition targets the progress computation divides against.
/// Read-only from the ledger's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for GoalProfile {
    fn default() -> Self {
        Self {
            calories: 2200.0,
            protein: 150.0,
            carbs: 225.0,
            fat: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Self-reported baseline activity, used when estimating targets.
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub activity_level: ActivityLevel,
    pub goals: GoalProfile,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            weight_kg: 75.0,
            height_cm: 175.0,
            age: 30,
            activity_level: ActivityLevel::Moderate,
            goals: GoalProfile::default(),
        }
    }
}
