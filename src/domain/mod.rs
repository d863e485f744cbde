//! Pure domain models (nutrition vectors, foods, meals, daily logs,
//! profiles, metrics, goals, workouts). No I/O, no CLI, no async.

pub mod daily_log;
pub mod food;
pub mod goal;
pub mod meal;
pub mod metrics;
pub mod nutrition;
pub mod profile;
pub mod workout;

pub use daily_log::*;
pub use food::*;
pub use goal::*;
pub use meal::*;
pub use metrics::*;
pub use nutrition::*;
pub use profile::*;
pub use workout::*;
