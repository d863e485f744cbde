//! Business logic helpers for long-running goals.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Goal, GoalBoard, GoalCategory};

/// Provides validated CRUD and progress helpers over a goal board.
pub struct GoalService;

impl GoalService {
    /// Board seeded with the stock demo goals.
    pub fn sample_board() -> GoalBoard {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let mut board = GoalBoard::new();
        board.add(Goal::new(
            "Weight Loss",
            "Reach target weight of 70kg",
            GoalCategory::Weight,
            70.0,
            75.0,
            "kg",
            start,
            end,
        ));
        board.add(Goal::new(
            "Daily Protein",
            "Consume at least 150g of protein daily",
            GoalCategory::Nutrition,
            150.0,
            130.0,
            "g",
            start,
            end,
        ));
        board.add(Goal::new(
            "Weekly Workouts",
            "Complete 4 strength training sessions per week",
            GoalCategory::Workout,
            4.0,
            3.0,
            "sessions",
            start,
            end,
        ));
        board.add(Goal::new(
            "Run 5K",
            "Be able to run 5K without stopping",
            GoalCategory::Custom,
            5.0,
            3.2,
            "km",
            start,
            end,
        ));
        board
    }

    /// Adds a new goal and returns its identifier.
    pub fn add(board: &mut GoalBoard, goal: Goal) -> ServiceResult<Uuid> {
        if !goal.target.is_finite() {
            return Err(ServiceError::Invalid("goal target must be finite".into()));
        }
        if goal.target_date < goal.start_date {
            return Err(ServiceError::Invalid(
                "goal target date precedes its start date".into(),
            ));
        }
        Ok(board.add(goal))
    }

    /// Updates the goal's current value, flipping `completed` once the
    /// target is reached (downward for weight goals).
    pub fn update_current(board: &mut GoalBoard, id: Uuid, current: f64) -> ServiceResult<()> {
        if !current.is_finite() {
            return Err(ServiceError::Invalid(
                "goal progress must be finite".into(),
            ));
        }
        let goal = board
            .goal_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Goal not found".into()))?;
        goal.current = current;
        if goal.target_reached() {
            goal.completed = true;
        }
        Ok(())
    }

    /// Removes the goal identified by `id`, returning the removed
    /// instance.
    pub fn remove(board: &mut GoalBoard, id: Uuid) -> ServiceResult<Goal> {
        board
            .remove(id)
            .ok_or_else(|| ServiceError::Invalid("Goal not found".into()))
    }

    /// Percent of the way from start to target. Upward goals report
    /// current/target; downward goals report distance covered from the
    /// starting value. A degenerate span reports 0.
    pub fn percent_complete(goal: &Goal) -> f64 {
        if goal.category.counts_downward() {
            let span = goal.start_value - goal.target;
            if span <= 0.0 {
                return 0.0;
            }
            ((goal.start_value - goal.current) / span * 100.0).max(0.0)
        } else {
            if goal.target == 0.0 {
                return 0.0;
            }
            (goal.current / goal.target * 100.0).max(0.0)
        }
    }
}
