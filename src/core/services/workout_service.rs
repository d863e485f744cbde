//! Business logic helpers for workout planning.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{WorkoutLevel, WorkoutPlanner, WorkoutRoutine, WorkoutSession};

static SAMPLE_ROUTINES: Lazy<Vec<WorkoutRoutine>> = Lazy::new(|| {
    vec![
        WorkoutRoutine::new("1", "Full Body Strength", 8, 45, WorkoutLevel::Intermediate),
        WorkoutRoutine::new("2", "HIIT Cardio", 6, 30, WorkoutLevel::Advanced),
        WorkoutRoutine::new("3", "Yoga Flow", 10, 60, WorkoutLevel::Beginner),
    ]
});

/// Provides validated scheduling helpers over a workout planner.
pub struct WorkoutService;

impl WorkoutService {
    /// Planner seeded with the stock routine library.
    pub fn sample_planner() -> WorkoutPlanner {
        WorkoutPlanner::new(SAMPLE_ROUTINES.clone())
    }

    /// Schedules a session of `routine_id` on `date`.
    pub fn schedule(
        planner: &mut WorkoutPlanner,
        routine_id: &str,
        date: NaiveDate,
    ) -> ServiceResult<Uuid> {
        if planner.routine(routine_id).is_none() {
            return Err(ServiceError::Invalid(format!(
                "unknown routine `{routine_id}`"
            )));
        }
        Ok(planner.add_session(WorkoutSession::new(routine_id, date)))
    }

    /// Marks the session identified by `id` as completed.
    pub fn complete(planner: &mut WorkoutPlanner, id: Uuid) -> ServiceResult<()> {
        let session = planner
            .session_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Session not found".into()))?;
        session.completed = true;
        Ok(())
    }

    /// Completed sessions in the week containing `reference`.
    pub fn completed_in_week(planner: &WorkoutPlanner, reference: NaiveDate) -> usize {
        planner
            .sessions_in_week(reference)
            .filter(|session| session.completed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_rejects_unknown_routines() {
        let mut planner = WorkoutService::sample_planner();
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let err = WorkoutService::schedule(&mut planner, "99", date)
            .expect_err("unknown routine must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn completed_sessions_count_within_the_week() {
        let mut planner = WorkoutService::sample_planner();
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();

        let done = WorkoutService::schedule(&mut planner, "1", date).unwrap();
        WorkoutService::schedule(&mut planner, "2", date).unwrap();
        WorkoutService::complete(&mut planner, done).unwrap();

        assert_eq!(WorkoutService::completed_in_week(&planner, date), 1);
    }

    #[test]
    fn complete_fails_for_missing_session() {
        let mut planner = WorkoutService::sample_planner();
        let err = WorkoutService::complete(&mut planner, Uuid::new_v4())
            .expect_err("complete must fail for unknown id");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }
}
