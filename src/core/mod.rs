//! Business logic: the nutrition ledger service object, the
//! notification seam, and validated services over the domain aggregates.

pub mod ledger;
pub mod notify;
pub mod services;

pub use ledger::NutritionLedger;
pub use notify::{LedgerEvent, Notifier, TracingNotifier};
pub use services::{GoalService, MetricsService, ServiceError, ServiceResult, WorkoutService};
