pub mod goal_service;
pub mod metrics_service;
pub mod workout_service;

pub use goal_service::GoalService;
pub use metrics_service::MetricsService;
pub use workout_service::WorkoutService;

use crate::errors::FitnessError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Fitness(#[from] FitnessError),
    #[error("{0}")]
    Invalid(String),
}
