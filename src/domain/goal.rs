//! Long-running goals tracked against a numeric target.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Weight,
    Nutrition,
    Workout,
    Custom,
}

impl GoalCategory {
    /// Weight goals count downward (losing toward a target); everything
    /// else counts upward.
    pub fn counts_downward(&self) -> bool {
        matches!(self, GoalCategory::Weight)
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalCategory::Weight => "weight",
            GoalCategory::Nutrition => "nutrition",
            GoalCategory::Workout => "workout",
            GoalCategory::Custom => "custom",
        };
        f.write_str(label)
    }
}

/// One tracked goal. `start_value` is captured at creation so downward
/// goals can report progress between start and target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: GoalCategory,
    pub target: f64,
    pub current: f64,
    pub start_value: f64,
    pub unit: String,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub completed: bool,
}

impl Goal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: GoalCategory,
        target: f64,
        current: f64,
        unit: impl Into<String>,
        start_date: NaiveDate,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            category,
            target,
            current,
            start_value: current,
            unit: unit.into(),
            start_date,
            target_date,
            completed: false,
        }
    }

    /// Whether `current` has reached the target, accounting for the
    /// goal's direction.
    pub fn target_reached(&self) -> bool {
        if self.category.counts_downward() {
            self.current <= self.target
        } else {
            self.current >= self.target
        }
    }
}

/// Collection of active and completed goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalBoard {
    pub goals: Vec<Goal>,
}

impl GoalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, goal: Goal) -> Uuid {
        let id = goal.id;
        self.goals.push(goal);
        id
    }

    pub fn goal(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goal_mut(&mut self, id: Uuid) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Goal> {
        let index = self.goals.iter().position(|goal| goal.id == id)?;
        Some(self.goals.remove(index))
    }
}
